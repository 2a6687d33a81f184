//! Ladle - build, bake and invert recipes of text transformations.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ladle::cli::output;
use ladle::cli::{execute, Cli};
use ladle::core::config::Config;
use ladle::core::constants::LOG_ENV;
use ladle::error::{Error, ExecutionError, RecipeError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ladle=debug")
        } else {
            EnvFilter::new("ladle=warn")
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

    let result = Config::load().and_then(|config| {
        output::set_color(config.output.color);
        execute(cli.command, &config)
    });

    if let Err(e) = result {
        let suggestion = match &e {
            Error::Execution(ExecutionError::EmptyInput) => {
                Some("pass --input, --file or --paste, or pipe text on stdin")
            }
            Error::Execution(ExecutionError::EmptyRecipe) => {
                Some("add steps with: ladle recipe add")
            }
            Error::Recipe(RecipeError::UnknownOperation(_)) => Some("run: ladle ops"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
