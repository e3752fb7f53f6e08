use thiserror::Error;

/// The only error path through the crate. `Conflict` has no variant: resolution
/// is monotone and always succeeds once a record clears input validation.
#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, ResolverError>;

/// Logs and panics. A tripped invariant is a programmer bug, not a request
/// outcome — recoverable only by restarting the process (see §4.7/§7).
#[macro_export]
macro_rules! internal_invariant {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        log::error!("internal invariant violated: {msg}");
        panic!("internal invariant violated: {msg}");
    }};
}
