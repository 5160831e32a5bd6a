/// Errors raised when validating a solve request.
///
/// Both are precondition failures detected before any stepping begins.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("step size must be finite and greater than zero, got {0}")]
    InvalidStepSize(f64),

    #[error("final time must be finite and non-negative, got {0}")]
    InvalidInterval(f64),
}
