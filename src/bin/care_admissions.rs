use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use triage_heap::admissions::{AdmissionsConfig, AdmissionsDesk};

#[derive(Parser)]
#[command(
    name = "care-admissions",
    about = "Interactive priority care admissions queue",
    version,
    long_about = None
)]
struct Cli {
    /// Maximum number of waiting patients
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    capacity: u32,

    /// Do not print the menu and prompt (for piped input)
    #[arg(long)]
    quiet: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the session on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = AdmissionsConfig::default()
        .with_capacity(cli.capacity as usize)
        .with_show_menu(!cli.quiet);
    tracing::info!(capacity = config.capacity, "starting admissions desk");

    let mut desk = AdmissionsDesk::new(config).context("failed to open admissions desk")?;
    desk.run(io::stdin().lock(), io::stdout().lock())
        .context("admissions session failed")?;

    Ok(())
}
