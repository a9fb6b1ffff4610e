//! Reading and writing Windows `.ico` containers.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;

use crate::icon::IconError;

/// List the `(width, height)` of every image embedded in an icon file,
/// in the order they appear in the directory.
pub fn read_sizes(path: &Path) -> Result<Vec<(u32, u32)>, IconError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => IconError::IconNotFound {
            path: path.display().to_string(),
        },
        _ => unreadable(path, e),
    })?;

    let icon_dir = IconDir::read(BufReader::new(file)).map_err(|e| unreadable(path, e))?;

    Ok(icon_dir
        .entries()
        .iter()
        .map(|entry| (entry.width(), entry.height()))
        .collect())
}

/// Encode a square RGBA image as a single icon directory entry.
pub fn encode_entry(image: RgbaImage) -> Result<IconDirEntry, IconError> {
    let (width, height) = image.dimensions();
    let icon_image = IconImage::from_rgba_data(width, height, image.into_raw());

    IconDirEntry::encode(&icon_image).map_err(|e| IconError::EncodeFailed {
        size: width,
        reason: e.to_string(),
    })
}

/// Serialize a set of entries into a complete icon file in memory.
///
/// Returns `NoImages` for an empty set so callers never write an icon
/// without any images in it.
pub fn to_bytes(entries: Vec<IconDirEntry>) -> Result<Vec<u8>, IconError> {
    if entries.is_empty() {
        return Err(IconError::NoImages);
    }

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for entry in entries {
        icon_dir.add_entry(entry);
    }

    let mut bytes = Vec::new();
    icon_dir.write(&mut bytes).map_err(|e| IconError::EncodeFailed {
        size: 0,
        reason: format!("failed to serialize icon directory: {}", e),
    })?;

    Ok(bytes)
}

fn unreadable(path: &Path, e: io::Error) -> IconError {
    IconError::IconUnreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}
