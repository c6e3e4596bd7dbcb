//! Base functionality for the command line interface
//!
//! Response printing, file parsing and the traits every subcommand
//! implements.

use std::fs;
use std::future::Future;
use std::path::Path;

use colored::Colorize;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::BaseClient;
use crate::engine::Diagnostics;
use crate::error::{ApiError, ModelError};
use crate::response::{redirect_stream, Response};

/// Evaluates an API response and prints the result or error message.
///
/// Exits the process with the status matching the outcome.
///
/// # Type Parameters
/// * `T` - The type of data contained in a successful response
pub fn evaluate_and_print_response<T: Serialize>(response: Result<Response<T>, ApiError>) {
    match response {
        Ok(response) => response.print_result(),
        Err(error) => {
            print_error(&error);
            let code = match error {
                ApiError::Model(_) => exitcode::DATAERR,
                ApiError::Io(_) => exitcode::IOERR,
                _ => exitcode::UNAVAILABLE,
            };
            std::process::exit(code);
        }
    }
}

/// Prints an error to stderr in the CLI's error style.
pub fn print_error(error: &dyn std::fmt::Display) {
    eprintln!("\n{} {}\n", "Error:".red().bold(), error);
}

/// Prints diagnostics to stderr. Violations are red, everything else yellow.
pub fn print_diagnostics(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics {
        let label = if diagnostic.kind.is_violation() {
            "violation".red().bold()
        } else {
            "warning".yellow().bold()
        };
        eprintln!("{} {}", label, diagnostic);
    }
}

/// Prints a JSON value to stdout, colored when stdout is a terminal.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), ModelError> {
    let json = serde_json::to_string_pretty(value)?;
    redirect_stream(&json);
    Ok(())
}

/// Parses a JSON or YAML file into the specified type
///
/// # Arguments
/// * `path` - Path to the file to parse
///
/// # Returns
/// The parsed content. When the file is neither valid JSON nor valid YAML
/// the YAML error is returned, since YAML is the more lenient of the two.
pub fn parse_file<P, T>(path: P) -> Result<T, ModelError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let content = fs::read_to_string(path)?;

    match serde_json::from_str(&content) {
        Ok(parsed) => Ok(parsed),
        Err(_) => Ok(serde_yaml::from_str(&content)?),
    }
}

/// Installs the logger. `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

/// Runs a future to completion on a fresh runtime.
///
/// Exits with `OSERR` if no runtime can be started.
pub(crate) fn block_on<F: Future>(future: F) -> F::Output {
    match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime.block_on(future),
        Err(error) => {
            print_error(&error);
            std::process::exit(exitcode::OSERR);
        }
    }
}

/// Trait for processing CLI subcommands that talk to an installation
///
/// Implementors define how to handle their specific subcommand variant
/// using the provided API client.
pub trait Matcher {
    /// Process this subcommand using the given client
    ///
    /// # Arguments
    /// * `client` - The BaseClient for making API requests
    fn process(self, client: &BaseClient);
}

/// Subcommands that work on local files only and need no configuration.
pub trait Offline {
    /// Runs the command and returns the process exit code.
    fn execute(self) -> i32;
}
