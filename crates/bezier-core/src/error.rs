//! Error taxonomy for curve mutations.

use thiserror::Error;

/// Errors raised by [`CurveModel`](crate::curve::CurveModel) mutations.
///
/// Every variant is recoverable: the model is left exactly as it was before
/// the failed call.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CurveError {
    #[error("Point index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Invalid precision {0}: expected a value in (0, 1]")]
    InvalidPrecision(f32),
}

/// Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = CurveError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "Point index 4 out of range (len 2)");

        let err = CurveError::InvalidPrecision(-1.0);
        assert!(err.to_string().starts_with("Invalid precision -1"));
    }
}
