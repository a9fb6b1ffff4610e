use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

use crate::icon::IconError;

/// Open the source image and produce a `size`x`size` RGBA copy of it.
///
/// The source is decoded from disk on every call; no buffer is shared between
/// sizes. Non-RGBA sources are converted before resampling with Lanczos3.
pub fn render_square(source: &Path, size: u32) -> Result<RgbaImage, IconError> {
    if size == 0 {
        return Err(IconError::ResizeFailed {
            size,
            reason: "target size must be non-zero".to_string(),
        });
    }

    let rgba = open_rgba(source)?;

    let (width, height) = rgba.dimensions();
    if width != height {
        log::warn!(
            "{} is {}x{}, not square; output will be stretched",
            source.display(),
            width,
            height
        );
    }

    Ok(imageops::resize(&rgba, size, size, FilterType::Lanczos3))
}

/// Decode an image file and convert it to 8-bit RGBA if needed.
fn open_rgba(path: &Path) -> Result<RgbaImage, IconError> {
    let img = image::open(path).map_err(|e| IconError::OpenFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(match img {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => other.into_rgba8(),
    })
}
