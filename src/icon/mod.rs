pub mod container;
pub mod render;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Standard Windows icon sizes, ascending.
pub const STANDARD_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Default location of the source artwork, relative to the project root.
pub const DEFAULT_SOURCE: &str = "assets/icons/appicon.png";

/// Default location of the generated Windows icon.
pub const DEFAULT_ICON: &str = "build/windows/icon.ico";

/// Default directory for the standalone PNG exports.
pub const DEFAULT_EXPORT_DIR: &str = "winres";

/// A single standalone PNG to export: file name and edge length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTarget {
    pub file_name: String,
    pub size: u32,
}

impl ExportTarget {
    /// Conventional target for a size, e.g. `icon48.png` for 48.
    pub fn for_size(size: u32) -> Self {
        ExportTarget {
            file_name: format!("icon{}.png", size),
            size,
        }
    }
}

/// The default export mapping: `icon16.png` through `icon256.png`.
pub fn standard_targets() -> Vec<ExportTarget> {
    STANDARD_SIZES.iter().map(|&s| ExportTarget::for_size(s)).collect()
}

/// Error type for icon generation and inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    SourceNotFound { path: String },
    OpenFailed { path: String, reason: String },
    ResizeFailed { size: u32, reason: String },
    EncodeFailed { size: u32, reason: String },
    NoImages,
    IconNotFound { path: String },
    IconUnreadable { path: String, reason: String },
    WriteFailed { path: String, reason: String },
    OutputDirCreationFailed { path: String, reason: String },
}

impl IconError {
    pub(crate) fn source_not_found(path: &Path) -> Self {
        IconError::SourceNotFound {
            path: path.display().to_string(),
        }
    }

    pub(crate) fn write_failed(path: &Path, reason: impl fmt::Display) -> Self {
        IconError::WriteFailed {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::SourceNotFound { path } => {
                write!(f, "source image not found: {}", path)
            }
            IconError::OpenFailed { path, reason } => {
                write!(f, "failed to open '{}': {}", path, reason)
            }
            IconError::ResizeFailed { size, reason } => {
                write!(f, "failed to resize to {}x{}: {}", size, size, reason)
            }
            IconError::EncodeFailed { size, reason } => {
                write!(f, "failed to encode {}x{} image: {}", size, size, reason)
            }
            IconError::NoImages => write!(f, "no images were generated, nothing to save"),
            IconError::IconNotFound { path } => write!(f, "icon file not found: {}", path),
            IconError::IconUnreadable { path, reason } => {
                write!(f, "could not read icon '{}': {}", path, reason)
            }
            IconError::WriteFailed { path, reason } => {
                write!(f, "failed to write '{}': {}", path, reason)
            }
            IconError::OutputDirCreationFailed { path, reason } => {
                write!(f, "failed to create output directory '{}': {}", path, reason)
            }
        }
    }
}

impl std::error::Error for IconError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_targets_follow_size_order() {
        let names: Vec<_> = standard_targets()
            .into_iter()
            .map(|t| (t.file_name, t.size))
            .collect();

        assert_eq!(
            names,
            vec![
                ("icon16.png".to_string(), 16),
                ("icon32.png".to_string(), 32),
                ("icon48.png".to_string(), 48),
                ("icon64.png".to_string(), 64),
                ("icon128.png".to_string(), 128),
                ("icon256.png".to_string(), 256),
            ]
        );
    }

    #[test]
    fn error_messages_name_the_size() {
        let err = IconError::ResizeFailed {
            size: 48,
            reason: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "failed to resize to 48x48: boom");
    }
}
