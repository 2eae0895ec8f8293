//! k8sec - CLI tool to manage Kubernetes Secrets easily.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use k8sec::cli::output;
use k8sec::cli::{execute, Cli};
use k8sec::core::constants::LOG_ENV;
use k8sec::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();
    let options = cli.options();

    // stdout carries command output only
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if options.debug {
            EnvFilter::new("k8sec=debug")
        } else {
            EnvFilter::new("k8sec=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, &options) {
        let error_msg = if options.debug {
            format!("{e:?}")
        } else {
            e.to_string()
        };
        let suggestion = match &e {
            Error::Config(ConfigError::NoBackend) => Some("run with --store-file <FILE>"),
            e if e.is_not_found() => Some("check the namespace with --namespace"),
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
