use anyhow::Context;
use clap::Parser;
use tasker_config::TaskerConfig;

mod cli;
mod commands;
mod output;
mod prompt;

fn main() {
    if let Err(error) = run() {
        eprintln!("tasker error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // `.env` may carry TASKER_LOG, so it has to be read before tracing starts.
    let dotenv = tasker_config::load_dotenv();
    init_tracing(cli.quiet, cli.verbose)?;
    match dotenv {
        Ok(Some(path)) => tracing::debug!(path = %path.display(), "loaded .env"),
        Ok(None) => {}
        Err(error) => tracing::warn!(%error, "ignoring unreadable .env file"),
    }

    let config = TaskerConfig::load().context("failed to load tasker configuration")?;
    let flags = cli.global_flags(&config.display)?;

    commands::dispatch::dispatch(cli.subcommand(), &config, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TASKER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
