//! Windows icon asset generation.
//!
//! Builds a multi-resolution `.ico` and a set of standalone PNGs from a
//! single source image:
//! - `check-icon` inspects, regenerates and re-verifies the icon
//! - `prepare-icons` exports `icon16.png` through `icon256.png`

pub mod commands;
pub mod config;
pub mod icon;
pub mod utils;

pub use config::{ExportConfig, IconConfig};
pub use icon::{ExportTarget, IconError, STANDARD_SIZES};
pub use utils::report::{CheckSummary, ExportReport, Outcome, RegenerateReport};
