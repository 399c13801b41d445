//! isotype - scroll-driven unit chart of D.C. Medicaid enrollment
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::WrapErr;
use isotype_app::config::{load_settings, read_settings, Settings};
use isotype_app::{render_scene, summary, to_json, to_svg, write_export, INTRO_STEP};
use isotype_core::{dc_medicaid, generate, logging, RiskCatalog};

/// isotype - scroll-driven unit chart of D.C. Medicaid enrollment
#[derive(Parser, Debug)]
#[command(name = "isotype")]
#[command(about = "Scroll-driven isotype unit chart", long_about = None)]
struct Args {
    /// Settings file; must exist when given (defaults to ./.isotype/config.toml if present)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless ISOTYPE_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Render one step of the chart without a terminal
    Export {
        /// Container width in pixels
        #[arg(long, default_value_t = 800.0)]
        width: f64,

        /// Step id to highlight
        #[arg(long, default_value = INTRO_STEP)]
        step: String,

        #[arg(long, value_enum, default_value_t = Format::Svg)]
        format: Format,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print unit counts per risk category and group
    Summary,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Svg,
    Json,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init(args.verbose)?;
    let settings = resolve_settings(args.config.as_deref())?;

    let result = match args.command {
        None => isotype_tui::run(settings).await.map_err(color_eyre::Report::from),
        Some(command) => run_command(&settings, command),
    };

    if let Err(ref e) = result {
        tracing::error!("isotype exited with error: {:?}", e);
        eprintln!("See {} for details.", logging::log_file().display());
    }
    result
}

fn resolve_settings(config: Option<&Path>) -> color_eyre::Result<Settings> {
    Ok(match config {
        Some(path) => read_settings(path)?,
        None => load_settings(&std::env::current_dir().wrap_err("No working directory")?),
    })
}

/// Run a headless subcommand
fn run_command(settings: &Settings, command: Command) -> color_eyre::Result<()> {
    let text = match command {
        Command::Export {
            width,
            step,
            format,
            output,
        } => {
            let export = render_scene(settings, width, &step);
            let text = match format {
                Format::Svg => to_svg(&export),
                Format::Json => to_json(&export)?,
            };
            if let Some(path) = output {
                write_export(&path, &text)?;
                eprintln!("Wrote {}", path.display());
                return Ok(());
            }
            text
        }
        Command::Summary => {
            let units = generate(&dc_medicaid(), settings.chart.unit_size);
            summary(&units, &RiskCatalog::default())
        }
    };

    print!("{text}");
    Ok(())
}
