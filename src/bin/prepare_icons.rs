//! Exports standalone PNG icons at every standard size.

use std::path::PathBuf;
use std::process;

use appicon_tools::commands::prepare_icons;
use appicon_tools::icon::{DEFAULT_EXPORT_DIR, DEFAULT_SOURCE, STANDARD_SIZES};
use appicon_tools::utils::{logging, report};
use appicon_tools::{ExportConfig, Outcome};
use clap::Parser;

#[derive(Parser)]
#[command(name = "prepare-icons")]
#[command(about = "Generate PNG icon files at multiple sizes")]
struct Cli {
    /// Source PNG to generate from
    #[arg(long, default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Directory the PNG files are written to (created if missing)
    #[arg(short, long, default_value = DEFAULT_EXPORT_DIR)]
    output_dir: PathBuf,

    /// Sizes to export as icon<size>.png (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = STANDARD_SIZES.to_vec())]
    sizes: Vec<u32>,

    /// Write a JSON report of the export to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Exit with status 1 unless every file was generated
    #[arg(long)]
    strict: bool,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let config = ExportConfig {
        source: cli.source,
        output_dir: cli.output_dir,
        ..ExportConfig::default()
    }
    .with_sizes(&cli.sizes);

    let outcome = match prepare_icons::run(&config) {
        Ok(export) => {
            if let Some(path) = &cli.report {
                if let Err(e) = report::save(&export, path) {
                    log::error!("Failed to write report {}: {}", path.display(), e);
                }
            }
            export.outcome()
        }
        Err(e) => {
            log::error!("{}", e);
            Outcome::Failed
        }
    };

    if cli.strict && outcome != Outcome::Complete {
        process::exit(1);
    }
}
