mod probe;

use clap::{Parser, Subcommand};
use tracing::debug;

use cudnn_dynload::config::CONFIG_ENV;

#[derive(Parser)]
#[command(name = "cudnn-probe")]
#[command(about = "Check whether cuDNN can be loaded and which entry points it provides")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load cuDNN the way the proxies would and report the outcome
    Probe {
        /// Configuration file path (overrides CUDNN_DYNLOAD_CONFIG)
        #[arg(short, long)]
        config: Option<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the proxies compiled into this build
    Routines {
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    cudnn_dynload_common::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Probe { config, json } => {
            // Read at the one-time load, so it must be in place before probing.
            if let Some(ref path) = config {
                debug!("using configuration {}", path);
                std::env::set_var(CONFIG_ENV, path);
            }
            probe::run_probe(json)?;
        }

        Commands::Routines { json } => {
            probe::print_routines(json)?;
        }
    }

    Ok(())
}
