use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use labmark::cli::{Cli, Command};
use labmark::output::{human, json::JsonEnvelope};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Command::Render(args) => labmark::cli::render::run(args, cli.config.as_deref(), cli.json),
        Command::Template(args) => labmark::cli::template::run(args, cli.json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonEnvelope::<()>::error(err.to_string()))
                        .expect("failed to serialize output")
                );
            } else {
                human::error(&err.to_string());
            }
            ExitCode::FAILURE
        }
    }
}
