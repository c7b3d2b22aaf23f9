mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Folio CLI - portfolio site tooling", long_about = None)]
struct Cli {
    /// Config file to read
    #[arg(short, long, global = true, default_value = folio::config::CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Export the static site
    Build {
        /// Output directory (defaults to build.output_dir from the config)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Validate a contact submission without sending it
    Check {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        message: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    match cli.command {
        Commands::Init { force } => {
            commands::init::execute(&cli.config, force)?;
        }
        Commands::Build { out } => {
            commands::build::execute(&cli.config, out.as_deref())?;
        }
        Commands::Check {
            name,
            email,
            message,
            json,
        } => {
            let form = folio::contact::ContactForm { name, email, message };
            if !commands::check::execute(&form, json)? {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
