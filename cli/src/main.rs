//! `medtagger-env` picks the environment record for this deploy, optionally
//! checks it, and prints it for whatever tooling needs to consume it.
//!
//! Exit codes: `0` on success, `1` when `--check` finds a bad record, `2` when
//! the build target can't be determined.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use medtagger_config::{BuildTarget, EnvironmentConfig, Overrides};

mod logger;
mod output;
use output::Format;

const EXIT_INVALID: u8 = 1;
const EXIT_USAGE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "medtagger-env", version)]
struct Cli {
    /// Build target to use (overrides `MEDTAGGER_ENV`).
    #[arg(long, value_name = "TARGET")]
    target: Option<String>,

    /// Output format for the record.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Validate the record and exit without printing it.
    #[arg(long)]
    check: bool,

    /// Ignore `MEDTAGGER_API_URL` and `MEDTAGGER_WEBSOCKET_URL`.
    #[arg(long)]
    no_overrides: bool,

    /// Print the full API address for this path instead of the record.
    #[arg(long, value_name = "PATH")]
    endpoint: Option<String>,
}

fn main() -> ExitCode {
    run(Cli::parse())
}

fn run(cli: Cli) -> ExitCode {
    let target = match BuildTarget::select(cli.target.as_deref()) {
        Ok(target) => target,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::from(EXIT_USAGE);
        },
    };

    logger::init(target);

    let overrides = match cli.no_overrides {
        true => Overrides::default(),
        false => Overrides::from_env(),
    };

    let config = match EnvironmentConfig::init(EnvironmentConfig::resolve(target, overrides)) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(?error, "Unable to install environment config");
            return ExitCode::FAILURE;
        },
    };

    tracing::debug!(%target, ?config, "Selected environment config");

    let stdout = io::stdout();
    execute(&cli, target, config, &mut stdout.lock())
}

/// Carries out the requested action against an already selected record.
fn execute<W>(cli: &Cli, target: BuildTarget, config: &EnvironmentConfig, out: &mut W) -> ExitCode
where
    W: Write,
{
    if cli.check {
        return match config.validate() {
            Ok(()) => {
                tracing::info!(%target, "Environment config is valid");
                ExitCode::SUCCESS
            },

            Err(error) => {
                tracing::error!(%error, %target, "Environment config is invalid");
                ExitCode::from(EXIT_INVALID)
            },
        };
    }

    let rendered = match cli.endpoint.as_deref() {
        Some(path) => Ok(format!("{}\n", config.api_endpoint(path))),
        None => output::render(config, cli.format),
    };

    let written = match rendered {
        Ok(rendered) => out.write_all(rendered.as_bytes()),
        Err(error) => {
            tracing::error!(?error, "Failed to render environment config");
            return ExitCode::FAILURE;
        },
    };

    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(?error, "Unable to write to stdout");
            ExitCode::FAILURE
        },
    }
}
