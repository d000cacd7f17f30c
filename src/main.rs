use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use royalty_report::cli::{handle_classify_command, handle_report_command, ReportArgs};
use royalty_report::config::Settings;

#[derive(Parser)]
#[command(
    name = "royalties",
    version,
    about = "Royalty statement classifier and report builder",
    long_about = "Classifies the lines of a royalty statement into financial \
                  categories, aggregates them per name and payer, and writes \
                  a styled two-sheet workbook for the finance team."
)]
struct Cli {
    /// Settings file (JSON); defaults are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skip the on-screen summary and only log warnings
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the report workbook from a statement
    Report(ReportArgs),

    /// Print the category of a single statement line
    Classify {
        /// Rights holder of the line
        rights_holder: String,
        /// Line type (e.g., "Sync License")
        kind: String,
    },

    /// Show the effective settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        "royalty_report=warn"
    } else {
        "royalty_report=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Report(args) => {
            handle_report_command(args, &settings, cli.quiet)?;
        }
        Commands::Classify {
            rights_holder,
            kind,
        } => {
            handle_classify_command(&rights_holder, &kind);
        }
        Commands::Config => {
            println!("Royalty Report Configuration");
            println!("============================");
            match &cli.config {
                Some(path) => println!("Settings file: {}", path.display()),
                None => println!("Settings file: (defaults)"),
            }
            println!();
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
