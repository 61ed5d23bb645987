//! Error types for the windowed-series library

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// A scalar parameter is outside its valid range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Train/test split fraction outside [0, 1]
    #[error("Invalid split fraction {0}: expected a value in [0, 1]")]
    InvalidSplit(f64),

    /// Time and signal sequences have different lengths
    #[error("Length mismatch: time has {time} samples, signal has {signal}")]
    LengthMismatch { time: usize, signal: usize },

    /// Requested channel count does not match the feature matrix
    #[error("Shape mismatch: expected {expected} feature channels, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Input plus output window does not fit in the series
    #[error(
        "Window configuration exceeds series length: needs {required} samples, series has {available}"
    )]
    WindowExceedsSeries { required: usize, available: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Check if the error was caused by caller-supplied values rather than the environment
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidParameter(_)
                | Error::InvalidSplit(_)
                | Error::LengthMismatch { .. }
                | Error::ShapeMismatch { .. }
                | Error::WindowExceedsSeries { .. }
        )
    }
}
