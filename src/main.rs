use clap::Parser;
use clap::error::ErrorKind;
use panel_split::split::{SplitOptions, SplitReport};
use panel_split::{config, output, split};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "panel-split")]
#[command(about = "Split a panorama into carousel panels plus a 4:5 overview")]
#[command(long_about = "\
Split a panorama into carousel panels plus a 4:5 overview

Supported sources (width:height, within 0.01 of the ratio):
  12:5 (2.4)  → 3 slices
   8:5 (1.6)  → 2 slices

For pano.jpg this writes, into the output directory:
  pano_slice_1.jpg, pano_slice_2.jpg[, pano_slice_3.jpg]
  pano_overview.jpg   whole image on a white 4:5 canvas

Settings are read from ./panel-split.toml when present.
Run 'panel-split --print-config' for a documented example.")]
#[command(version = version_string())]
struct Cli {
    /// Source image to split
    #[arg(required_unless_present = "print_config")]
    image: Option<PathBuf>,

    /// Output directory [default: output]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Overview border per side, as a fraction of image width [default: 0.05]
    #[arg(long)]
    border_percent: Option<f64>,

    /// Config file (instead of ./panel-split.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a stock panel-split.toml with all options documented
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return ExitCode::SUCCESS;
    }

    let Some(image) = cli.image.as_deref() else {
        eprintln!("Usage: panel-split <IMAGE>");
        return ExitCode::FAILURE;
    };

    match run(&cli, image) {
        Ok(report) => {
            output::print_split_output(&report);
            println!("Processing complete for '{}'.", image.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, image: &Path) -> Result<SplitReport, Box<dyn std::error::Error>> {
    let mut split_config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::load_config_in(Path::new("."))?,
    };
    if let Some(dir) = &cli.output {
        split_config.output_dir = dir.clone();
    }
    if let Some(border) = cli.border_percent {
        split_config.overview.border_percent = border;
    }

    let options = SplitOptions::from_config(&split_config)?;
    Ok(split::split(image, &options)?)
}
