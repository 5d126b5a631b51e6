//! Pagecraft page inspector.
//!
//! Usage:
//!   pagecraft starter hero --title "Science Club" > page.json
//!   pagecraft arrange page.json
//!   pagecraft check handout.pdf --mime application/pdf
//!   pagecraft attach page.json --block 1 handout.pdf --mime application/pdf

use anyhow::Result;
use clap::{Parser, Subcommand};
use pagecraft_cli::{arrange_command, attach_command, check_command, load_config, starter_command};
use pagecraft_storage::DirectoryFileStoreConfig;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "pagecraft")]
#[command(about = "Inspect and prepare Pagecraft page files")]
struct Args {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Editor config file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the slots and presentation of every block in a page file
    Arrange {
        page: PathBuf,
        /// Print the arrangement as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a new page file seeded for a layout
    Starter {
        layout: String,
        #[arg(short, long, default_value = "New Page")]
        title: String,
    },
    /// Check a file against the upload policy
    Check {
        file: PathBuf,
        #[arg(short, long)]
        mime: String,
    },
    /// Upload a file and attach it to a block of a page file
    Attach {
        page: PathBuf,
        #[arg(short, long)]
        block: usize,
        file: PathBuf,
        #[arg(short, long)]
        mime: String,
        /// Directory uploads are written into
        #[arg(long, default_value = "uploads")]
        dir: PathBuf,
        /// URL prefix the upload directory is served under
        #[arg(long, default_value = "/uploads")]
        base_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = load_config(args.config.as_deref())?;
    debug!(?config, "Loaded editor config");

    let output = match args.command {
        Command::Arrange { page, json } => arrange_command(&page, json)?,
        Command::Starter { layout, title } => starter_command(&layout, &title)?,
        Command::Check { file, mime } => check_command(&file, &mime, &config)?,
        Command::Attach {
            page,
            block,
            file,
            mime,
            dir,
            base_url,
        } => {
            let store = DirectoryFileStoreConfig {
                root: dir,
                base_url,
            };
            attach_command(&page, block, &file, &mime, store, &config).await?
        }
    };
    println!("{output}");
    Ok(())
}
