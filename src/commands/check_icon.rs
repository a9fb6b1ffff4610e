use std::fs;
use std::path::Path;

use image::RgbaImage;

use crate::config::IconConfig;
use crate::icon::container;
use crate::icon::render::render_square;
use crate::icon::IconError;
use crate::utils::hash::hash_bytes;
use crate::utils::report::{CheckSummary, RegenerateReport, SizeFailure};

/// List the resolutions embedded in an existing icon file.
pub fn inspect(icon: &Path) -> Result<Vec<(u32, u32)>, IconError> {
    container::read_sizes(icon)
}

/// Rebuild the icon from the source image at every configured size.
pub fn regenerate(config: &IconConfig) -> Result<RegenerateReport, IconError> {
    regenerate_with(config, render_square)
}

/// Rebuild the icon using a custom per-size renderer.
///
/// Workflow:
/// 1. Refuse to run if the source is missing (the icon is left untouched)
/// 2. Render and encode each size; failures are recorded and skipped
/// 3. Serialize all generated entries in memory
/// 4. Write the icon in one step, replacing any previous contents
pub fn regenerate_with<F>(config: &IconConfig, render: F) -> Result<RegenerateReport, IconError>
where
    F: Fn(&Path, u32) -> Result<RgbaImage, IconError>,
{
    if !config.source.exists() {
        return Err(IconError::source_not_found(&config.source));
    }

    let mut entries = Vec::new();
    let mut generated = Vec::new();
    let mut failed = Vec::new();

    for &size in &config.sizes {
        match render(&config.source, size).and_then(container::encode_entry) {
            Ok(entry) => {
                log::info!("Generated {}x{}", size, size);
                entries.push(entry);
                generated.push(size);
            }
            Err(e) => {
                log::warn!("Could not generate {}x{}: {}", size, size, e);
                failed.push(SizeFailure {
                    size,
                    reason: e.to_string(),
                });
            }
        }
    }

    let bytes = container::to_bytes(entries)?;
    write_icon(&config.icon, &bytes)?;

    Ok(RegenerateReport {
        icon: config.icon.display().to_string(),
        generated,
        failed,
        sha256: hash_bytes(&bytes),
    })
}

fn write_icon(path: &Path, bytes: &[u8]) -> Result<(), IconError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| IconError::write_failed(path, e))?;
        }
    }
    fs::write(path, bytes).map_err(|e| IconError::write_failed(path, e))
}

/// Inspect, regenerate and re-verify the icon, printing progress as it goes.
///
/// Nothing here is fatal: every failure is reported and the run continues to
/// the verification step.
pub fn run(config: &IconConfig) -> CheckSummary {
    let rule = "=".repeat(50);
    println!("{}", rule);
    println!("Windows ICO File Checker");
    println!("{}", rule);

    println!("\n1. Checking current icon: {}", config.icon.display());
    let before = match inspect(&config.icon) {
        Ok(sizes) if !sizes.is_empty() => {
            println!("   Current sizes: {:?}", sizes);
            sizes
        }
        Ok(_) => {
            println!("   Could not read sizes (might be corrupted)");
            Vec::new()
        }
        Err(IconError::IconNotFound { .. }) => {
            println!("   Icon file not found!");
            Vec::new()
        }
        Err(e) => {
            log::warn!("{}", e);
            println!("   Could not read sizes (might be corrupted)");
            Vec::new()
        }
    };

    println!(
        "\n2. Generating new multi-size icon from: {}",
        config.source.display()
    );
    let (regenerated, error) = match regenerate(config) {
        Ok(report) => {
            println!("\n[OK] Generated multi-size ICO: {}", report.icon);
            println!("  Sizes included: {:?}", report.generated);
            (Some(report), None)
        }
        Err(e @ IconError::SourceNotFound { .. }) => {
            println!("[ERROR] Source PNG not found: {}", config.source.display());
            (None, Some(e.to_string()))
        }
        Err(e) => {
            println!("[ERROR] Error generating ICO: {}", e);
            (None, Some(e.to_string()))
        }
    };

    println!("\n3. Verifying new icon: {}", config.icon.display());
    let after = match inspect(&config.icon) {
        Ok(sizes) if !sizes.is_empty() => {
            println!("   New sizes: {:?}", sizes);
            println!("\n[OK] Icon should now display correctly at all sizes!");
            sizes
        }
        Err(IconError::IconNotFound { .. }) => {
            println!("[ERROR] Icon file not found!");
            Vec::new()
        }
        other => {
            if let Err(e) = other {
                log::warn!("{}", e);
            }
            println!("   Could not verify sizes");
            Vec::new()
        }
    };

    println!("{}", rule);

    CheckSummary {
        before,
        regenerated,
        error,
        after,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::STANDARD_SIZES;
    use crate::test_support::write_source;
    use crate::utils::report::Outcome;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn config_in(dir: &Path, source: PathBuf) -> IconConfig {
        IconConfig {
            source,
            icon: dir.join("build").join("windows").join("icon.ico"),
            ..IconConfig::default()
        }
    }

    fn standard_pairs() -> Vec<(u32, u32)> {
        STANDARD_SIZES.iter().map(|&s| (s, s)).collect()
    }

    #[test]
    fn regenerate_embeds_every_standard_size() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path(), 512, 512);
        let config = config_in(dir.path(), source);

        let report = regenerate(&config).unwrap();

        assert_eq!(report.generated, STANDARD_SIZES.to_vec());
        assert!(report.failed.is_empty());
        assert_eq!(report.outcome(), Outcome::Complete);

        let mut sizes = inspect(&config.icon).unwrap();
        sizes.sort();
        assert_eq!(sizes, standard_pairs());
    }

    #[test]
    fn regenerate_replaces_previous_contents() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path(), 512, 512);
        let config = config_in(dir.path(), source);

        fs::create_dir_all(config.icon.parent().unwrap()).unwrap();
        fs::write(&config.icon, b"stale icon").unwrap();

        regenerate(&config).unwrap();

        assert_eq!(inspect(&config.icon).unwrap().len(), STANDARD_SIZES.len());
    }

    #[test]
    fn missing_source_leaves_icon_untouched() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path(), dir.path().join("missing.png"));

        fs::create_dir_all(config.icon.parent().unwrap()).unwrap();
        fs::write(&config.icon, b"existing icon").unwrap();

        let result = regenerate(&config);

        assert!(matches!(result, Err(IconError::SourceNotFound { .. })));
        assert_eq!(fs::read(&config.icon).unwrap(), b"existing icon");
    }

    #[test]
    fn missing_source_creates_nothing() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path(), dir.path().join("missing.png"));

        assert!(regenerate(&config).is_err());
        assert!(!config.icon.exists());
    }

    #[test]
    fn corrupt_source_generates_no_images() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("appicon.png");
        fs::write(&source, b"not an image").unwrap();
        let config = config_in(dir.path(), source);

        let result = regenerate(&config);

        assert_eq!(result, Err(IconError::NoImages));
        assert!(!config.icon.exists());
    }

    #[test]
    fn failed_size_is_omitted() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path(), 512, 512);
        let config = config_in(dir.path(), source);

        let report = regenerate_with(&config, |path: &Path, size| {
            if size == 48 {
                Err(IconError::ResizeFailed {
                    size,
                    reason: "simulated corruption".to_string(),
                })
            } else {
                render_square(path, size)
            }
        })
        .unwrap();

        assert_eq!(report.generated, vec![16, 32, 64, 128, 256]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].size, 48);
        assert_eq!(report.outcome(), Outcome::Partial);

        let sizes = inspect(&config.icon).unwrap();
        assert_eq!(sizes.len(), 5);
        assert!(!sizes.contains(&(48, 48)));
    }

    #[test]
    fn second_run_is_byte_identical() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path(), 512, 512);
        let config = config_in(dir.path(), source);

        let first = regenerate(&config).unwrap();
        let first_bytes = fs::read(&config.icon).unwrap();
        let second = regenerate(&config).unwrap();

        assert_eq!(first.sha256, second.sha256);
        assert_eq!(fs::read(&config.icon).unwrap(), first_bytes);
    }

    #[test]
    fn run_reports_before_and_after() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path(), 512, 512);
        let config = config_in(dir.path(), source);

        let summary = run(&config);

        assert!(summary.before.is_empty());
        assert!(summary.error.is_none());
        assert_eq!(summary.outcome(), Outcome::Complete);
        let mut after = summary.after.clone();
        after.sort();
        assert_eq!(after, standard_pairs());
    }

    #[test]
    fn run_recovers_from_corrupt_icon() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path(), 512, 512);
        let config = config_in(dir.path(), source);
        fs::create_dir_all(config.icon.parent().unwrap()).unwrap();
        fs::write(&config.icon, b"garbage bytes, not an icon").unwrap();

        let summary = run(&config);

        assert!(summary.before.is_empty());
        assert!(summary.error.is_none());
        assert_eq!(summary.outcome(), Outcome::Complete);
        let mut after = summary.after.clone();
        after.sort();
        assert_eq!(after, standard_pairs());
    }

    #[test]
    fn run_without_source_keeps_existing_icon() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path(), 64, 64);
        let config = config_in(dir.path(), source.clone());
        regenerate(&IconConfig {
            sizes: vec![16, 32],
            ..config.clone()
        })
        .unwrap();
        fs::remove_file(&source).unwrap();

        let summary = run(&config);

        assert_eq!(summary.before, vec![(16, 16), (32, 32)]);
        assert!(summary.regenerated.is_none());
        assert!(summary.error.is_some());
        assert_eq!(summary.after, vec![(16, 16), (32, 32)]);
        assert_eq!(summary.outcome(), Outcome::Failed);
    }
}
