use std::fmt;

/// Error types for dataset generation and output
#[derive(Debug)]
pub enum GenError {
    /// Bad command-line input
    InvalidArgument(String),
    /// A weight table could not be turned into a distribution
    InvalidWeights(String),
    /// JSON encoding or decoding failed
    Serialization(serde_json::Error),
    /// I/O error occurred
    IoError(std::io::Error),
}

/// Type alias for Results using GenError
pub type GenResult<T> = Result<T, GenError>;

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            GenError::InvalidWeights(msg) => write!(f, "Invalid weight table: {}", msg),
            GenError::Serialization(err) => write!(f, "Serialization error: {}", err),
            GenError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Serialization(err) => Some(err),
            GenError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GenError {
    fn from(err: std::io::Error) -> Self {
        GenError::IoError(err)
    }
}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        GenError::Serialization(err)
    }
}

impl From<rand::distributions::WeightedError> for GenError {
    fn from(err: rand::distributions::WeightedError) -> Self {
        GenError::InvalidWeights(err.to_string())
    }
}

impl From<std::num::ParseIntError> for GenError {
    fn from(err: std::num::ParseIntError) -> Self {
        GenError::InvalidArgument(err.to_string())
    }
}
