use thiserror::Error;

pub type NavResult<T> = Result<T, NavError>;

#[derive(Debug, Error)]
pub enum NavError {
    /// Invalid configuration rejected at assignment time (axis limits, log
    /// base, gesture bindings, tuning values).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Value outside the active scale's domain (non-positive input under a
    /// logarithmic scale). Recoverable by the caller.
    #[error("domain error: {0}")]
    Domain(String),

    #[error("invalid pixel span: length={length}")]
    InvalidPixelSpan { length: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
