use std::path::PathBuf;

use crate::icon::{
    standard_targets, ExportTarget, DEFAULT_EXPORT_DIR, DEFAULT_ICON, DEFAULT_SOURCE,
    STANDARD_SIZES,
};

/// Inputs for inspecting and regenerating the Windows icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConfig {
    /// Source artwork, reopened once per size.
    pub source: PathBuf,
    /// Icon file to inspect and overwrite.
    pub icon: PathBuf,
    /// Edge lengths to embed, in the order they are generated.
    pub sizes: Vec<u32>,
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            source: PathBuf::from(DEFAULT_SOURCE),
            icon: PathBuf::from(DEFAULT_ICON),
            sizes: STANDARD_SIZES.to_vec(),
        }
    }
}

/// Inputs for exporting standalone PNGs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub source: PathBuf,
    /// Created if absent.
    pub output_dir: PathBuf,
    pub targets: Vec<ExportTarget>,
}

impl ExportConfig {
    /// Replace the targets with the conventional `icon{size}.png` names.
    pub fn with_sizes(mut self, sizes: &[u32]) -> Self {
        self.targets = sizes.iter().map(|&s| ExportTarget::for_size(s)).collect();
        self
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            targets: standard_targets(),
        }
    }
}
