//! Error handling for audio sample conversion

use thiserror::Error;

/// Result type alias for audio operations
pub type AudioResult<T> = std::result::Result<T, AudioError>;

/// Errors raised by the audio helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// Input and output buffers of a batch conversion differ in length
    #[error("Buffer size mismatch: input has {input} samples, output has room for {output}")]
    BufferSizeMismatch { input: usize, output: usize },
}

impl AudioError {
    /// Create a new buffer size mismatch error
    pub fn buffer_size_mismatch(input: usize, output: usize) -> Self {
        Self::BufferSizeMismatch { input, output }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Retrying with a correctly sized buffer succeeds
            Self::BufferSizeMismatch { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AudioError::BufferSizeMismatch {
            input: 160,
            output: 80,
        };
        let display = format!("{}", err);
        assert!(display.contains("160 samples"));
        assert!(display.contains("room for 80"));
    }

    #[test]
    fn test_error_creation() {
        let err = AudioError::buffer_size_mismatch(3, 2);
        assert!(matches!(err, AudioError::BufferSizeMismatch { input: 3, output: 2 }));
    }

    #[test]
    fn test_error_recoverability() {
        assert!(AudioError::buffer_size_mismatch(160, 80).is_recoverable());
    }
}
