//! Grayscale buffers shared by the pre-processing, solver and tracking stages.
//!
//! - [`ImageU8`]: borrowed 8-bit view, the format frames arrive in.
//! - [`GrayImageU8`]: owned 8-bit buffer (background-subtracted frames).
//! - [`ImageF32`]: owned float field used for smoothed images, edge indicators
//!   and level-set functions.
//!
//! Intensities keep their 0..255 scale when promoted to `f32`; the edge
//! indicator `1 / (1 + |∇I|²)` is calibrated against that scale.
pub mod f32;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::{GrayImageU8, ImageU8};
