use thiserror::Error;

/// Errors raised by frame and basis operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl FrameError {
    /// Returns `Ok(())` when `found == expected`, a `DimensionMismatch` otherwise.
    pub(crate) fn check_dims(expected: usize, found: usize) -> Result<(), FrameError> {
        if expected == found {
            Ok(())
        } else {
            Err(FrameError::DimensionMismatch { expected, found })
        }
    }
}
