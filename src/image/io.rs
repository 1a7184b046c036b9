//! I/O helpers for grayscale frames, masks and JSON reports.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `list_frames`: image files of a directory, sorted by file name.
//! - `save_grayscale_u8` / `save_mask`: write 8-bit buffers and binary masks.
//! - `save_field_normalized`: min-max stretch a float field into a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{GrayImageU8, ImageF32, ImageView, ImageViewMut};
use crate::mask::BinaryMask;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const FRAME_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "tif", "tiff"];

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(GrayImageU8::new(width, height, img.into_raw()))
}

/// Image files directly inside `dir`, sorted by file name.
pub fn list_frames(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("Failed to read {}: {e}", dir.display()))?;
    let mut frames = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| format!("Failed to read entry in {}: {e}", dir.display()))?
            .path();
        let is_frame = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| FRAME_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if path.is_file() && is_frame {
            frames.push(path);
        }
    }
    frames.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(frames)
}

/// Save an 8-bit grayscale buffer to disk; the format follows the extension.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(buffer.width() as u32, buffer.height() as u32);
    for (y, row) in buffer.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Luma([px]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a binary mask as a 0/255 grayscale image.
pub fn save_mask(mask: &BinaryMask, path: &Path) -> Result<(), String> {
    save_grayscale_u8(&mask.to_gray(), path)
}

/// Save a float field, stretching its range onto 0..255.
///
/// Useful to inspect level-set functions, whose values are not intensities.
pub fn save_field_normalized(field: &ImageF32, path: &Path) -> Result<(), String> {
    let (lo, hi) = field
        .data
        .iter()
        .filter(|v| v.is_finite())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = if hi > lo { hi - lo } else { 1.0 };
    let mut out = GrayImageU8::zeros(field.w, field.h);
    if let Some(dst) = out.as_mut_slice() {
        for (d, &v) in dst.iter_mut().zip(&field.data) {
            let t = if v.is_finite() { (v - lo) / span } else { 0.0 };
            *d = (t * 255.0).round().clamp(0.0, 255.0) as u8;
        }
    }
    save_grayscale_u8(&out, path)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
