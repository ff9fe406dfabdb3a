use anyhow::Context;
use clap::Parser;
use fintrack::args::{Args, Command};
use fintrack::{commands, Config};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn main_inner(args: Args) -> anyhow::Result<()> {
    trace!("{args:?}");
    let home = args.common().fintrack_home().path();

    let _: () = match args.command() {
        Command::Init => commands::init(home)?.print(),
        Command::Add(add_args) => commands::add(load(home)?, add_args.clone())?.print(),
        Command::List(range) => commands::list(load(home)?, range.clone())?.print(),
        Command::Summary(range) => commands::summary(load(home)?, range.clone())?.print(),
        Command::Breakdown(breakdown_args) => {
            commands::breakdown(load(home)?, breakdown_args.clone())?.print()
        }
        Command::Series(series_args) => {
            commands::series(load(home)?, series_args.clone())?.print()
        }
    };
    Ok(())
}

fn load(home: &Path) -> anyhow::Result<Config> {
    Config::load(home)
        .with_context(|| format!("Unable to load the configuration in {}", home.display()))
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG wins when set.
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_CRATE_NAME"),
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
