use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod helper;

#[derive(Parser)]
#[command(name = "mockpanel")]
#[command(about = "mockpanel - Practice panel interviews in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the interview roles you can practice for
    Roles,
    /// Show the panel members
    Personas {
        /// Engine config file (defaults to ~/.config/mockpanel/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Run a panel interview
    Interview {
        /// Role id from `mockpanel roles`
        #[arg(long, default_value = "software-engineer")]
        role: String,
        /// Engine config file (defaults to ~/.config/mockpanel/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Skip presentation delays
        #[arg(long)]
        fast: bool,
        /// Interface language for this run (en, es, fr)
        #[arg(long)]
        lang: Option<String>,
    },
    /// Export an interview report (JSON) as a markdown document
    Report {
        /// Report JSON file
        #[arg(long)]
        input: PathBuf,
        /// Destination directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Show or set the interface language
    Lang {
        /// Language code to save (en, es, fr)
        code: Option<String>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("MOCKPANEL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Roles => commands::roles::run()?,
        Commands::Personas { config } => commands::personas::run(config).await?,
        Commands::Interview {
            role,
            config,
            fast,
            lang,
        } => {
            let options = commands::interview::InterviewOptions {
                role,
                config,
                fast,
                lang,
            };
            commands::interview::run(options).await?
        }
        Commands::Report { input, out } => commands::report::run(&input, &out)?,
        Commands::Lang { code } => commands::lang::run(code)?,
    }

    Ok(())
}
