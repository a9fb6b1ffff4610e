use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// How much of a generation step succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Complete,
    Partial,
    Failed,
}

impl Outcome {
    /// Nothing succeeding is a failure, even when nothing was attempted.
    fn from_counts(succeeded: usize, failed: usize) -> Self {
        match (succeeded, failed) {
            (0, _) => Outcome::Failed,
            (_, 0) => Outcome::Complete,
            _ => Outcome::Partial,
        }
    }
}

/// A resolution that could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeFailure {
    pub size: u32,
    pub reason: String,
}

/// Result of rebuilding the icon container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegenerateReport {
    pub icon: String,
    pub generated: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<SizeFailure>,
    pub sha256: String,
}

impl RegenerateReport {
    pub fn outcome(&self) -> Outcome {
        Outcome::from_counts(self.generated.len(), self.failed.len())
    }
}

/// A PNG that was written successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedFile {
    pub file: String,
    pub size: u32,
    pub sha256: String,
}

/// A PNG that could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFailure {
    pub file: String,
    pub size: u32,
    pub reason: String,
}

/// Result of exporting the standalone PNG set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReport {
    pub output_dir: String,
    pub exported: Vec<ExportedFile>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<ExportFailure>,
}

impl ExportReport {
    pub fn outcome(&self) -> Outcome {
        Outcome::from_counts(self.exported.len(), self.failed.len())
    }
}

/// Everything the verifier observed in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    /// Sizes in the icon before regeneration; empty if missing or unreadable.
    pub before: Vec<(u32, u32)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regenerated: Option<RegenerateReport>,
    /// Why regeneration did not produce an icon, if it didn't.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Sizes in the icon after regeneration; empty if it could not be verified.
    pub after: Vec<(u32, u32)>,
}

impl CheckSummary {
    pub fn outcome(&self) -> Outcome {
        match &self.regenerated {
            Some(report) => report.outcome(),
            None => Outcome::Failed,
        }
    }
}

/// Write any report as pretty-printed JSON.
pub fn save<T: Serialize>(report: &T, path: &Path) -> io::Result<()> {
    let content = serde_json::to_string_pretty(report)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)
}
