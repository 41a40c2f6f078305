use thiserror::Error;

/// Error types for the compute module.
///
/// The chart builders themselves are total — malformed numeric input is
/// coerced to zero rather than signalled. Errors exist only at the
/// orchestration boundary where a caller's selection or configuration can
/// genuinely be wrong.
#[derive(Error, Debug)]
pub enum ComputeError {
    /// The selected item names no demand record in the scenario.
    #[error("unknown item: {0}")]
    ItemNotFound(String),

    /// Caller-supplied chart configuration is invalid.
    #[error("invalid chart configuration: {0}")]
    Config(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
