//! Checks the Windows icon and regenerates it with every standard size.

use std::path::PathBuf;
use std::process;

use appicon_tools::commands::check_icon;
use appicon_tools::icon::{DEFAULT_ICON, DEFAULT_SOURCE, STANDARD_SIZES};
use appicon_tools::utils::{logging, report};
use appicon_tools::{IconConfig, Outcome};
use clap::Parser;

#[derive(Parser)]
#[command(name = "check-icon")]
#[command(about = "Check and regenerate the multi-size Windows ICO file")]
struct Cli {
    /// Source PNG to generate from
    #[arg(long, default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Icon file to check and overwrite
    #[arg(long, default_value = DEFAULT_ICON)]
    icon: PathBuf,

    /// Sizes to embed (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = STANDARD_SIZES.to_vec())]
    sizes: Vec<u32>,

    /// Write a JSON summary of the run to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Exit with status 1 unless every size was generated
    #[arg(long)]
    strict: bool,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let config = IconConfig {
        source: cli.source,
        icon: cli.icon,
        sizes: cli.sizes,
    };

    let summary = check_icon::run(&config);

    if let Some(path) = &cli.report {
        if let Err(e) = report::save(&summary, path) {
            log::error!("Failed to write report {}: {}", path.display(), e);
        }
    }

    if cli.strict && summary.outcome() != Outcome::Complete {
        process::exit(1);
    }
}
