//! Region labeling and outer-boundary tracing on binary masks.
//!
//! [`find_regions`] labels the 8-connected foreground regions of a mask in
//! raster discovery order and traces the outer boundary of each with
//! Moore-neighbour tracing (Jacob's stopping criterion). Holes are part of
//! their region; only outer outlines are produced.
//!
//! A contour's point count is the length of its outline in pixels and is what
//! the bubble selector compares when it looks for the main bubble.

mod regions;
mod trace;

pub use regions::{find_regions, Contour, RegionMap};
