//! Error types for the fleet console.

use thiserror::Error;

/// Errors surfaced by the console layer and the shell.
///
/// Field-level bad input is never an error value: the prompt loop absorbs it
/// with a printed diagnostic and re-asks. Fatal key problems (non-positive key,
/// absent key) are diagnostics plus an early return, not `Err`. `Err` is
/// reserved for console aborts and startup failures.
#[derive(Debug, Error)]
pub enum FleetError {
    /// Input stream failure (console backend error, exhausted script).
    #[error("input error: {0}")]
    Input(String),

    /// The operator aborted the in-flight command with the stop token.
    #[error("command aborted")]
    Aborted,

    /// Startup or configuration problem (logging init, unreadable script file).
    #[error("configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
