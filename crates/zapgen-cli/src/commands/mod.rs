//! CLI command implementations.

pub mod completions;
pub mod generate;
pub mod inspect;

use zapgen_core::Error;
use zapgen_core::cli::ExitCode;

/// Reports a command failure on stderr and picks the exit code.
///
/// Returns [`ExitCode::INVALID_INPUT`] for [`Error::Config`] and
/// [`ExitCode::ERROR`] for anything else.
pub(crate) fn report_failure(err: &Error) -> ExitCode {
    eprintln!("{err}");
    if err.is_config_error() {
        ExitCode::INVALID_INPUT
    } else {
        ExitCode::ERROR
    }
}
