use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::config::ExportConfig;
use crate::icon::render::render_square;
use crate::icon::{ExportTarget, IconError};
use crate::utils::hash::hash_bytes;
use crate::utils::report::{ExportFailure, ExportReport, ExportedFile};

/// Write one PNG per export target into the output directory.
pub fn export_pngs(config: &ExportConfig) -> Result<ExportReport, IconError> {
    export_pngs_with(config, render_square)
}

/// Export using a custom per-size renderer.
///
/// Only a failure to create the output directory aborts the run. Each target
/// is otherwise independent: a failure is logged, recorded, and the next
/// target is processed.
pub fn export_pngs_with<F>(config: &ExportConfig, render: F) -> Result<ExportReport, IconError>
where
    F: Fn(&Path, u32) -> Result<RgbaImage, IconError>,
{
    fs::create_dir_all(&config.output_dir).map_err(|e| IconError::OutputDirCreationFailed {
        path: config.output_dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut exported = Vec::new();
    let mut failed = Vec::new();

    for target in &config.targets {
        let output_path = config.output_dir.join(&target.file_name);

        match export_one(&config.source, target, &output_path, &render) {
            Ok(sha256) => {
                log::info!(
                    "Generated: {} ({}x{})",
                    target.file_name,
                    target.size,
                    target.size
                );
                exported.push(ExportedFile {
                    file: target.file_name.clone(),
                    size: target.size,
                    sha256,
                });
            }
            Err(e) => {
                log::error!("ERROR generating {}: {}", target.file_name, e);
                failed.push(ExportFailure {
                    file: target.file_name.clone(),
                    size: target.size,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(ExportReport {
        output_dir: config.output_dir.display().to_string(),
        exported,
        failed,
    })
}

/// Render, encode and write a single PNG, returning its digest.
fn export_one<F>(
    source: &Path,
    target: &ExportTarget,
    output_path: &Path,
    render: &F,
) -> Result<String, IconError>
where
    F: Fn(&Path, u32) -> Result<RgbaImage, IconError>,
{
    let image = render(source, target.size)?;

    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| IconError::EncodeFailed {
            size: target.size,
            reason: e.to_string(),
        })?;

    fs::write(output_path, &bytes).map_err(|e| IconError::write_failed(output_path, e))?;

    Ok(hash_bytes(&bytes))
}

/// Export the PNG set, printing progress as it goes.
pub fn run(config: &ExportConfig) -> Result<ExportReport, IconError> {
    println!("Generating icon PNG files...");

    let report = export_pngs(config)?;

    println!(
        "\nAll icons generated in {}/",
        config.output_dir.display()
    );
    Ok(report)
}
