use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    InvalidThresholdError { threshold: f64 },
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidThresholdError { threshold } => {
                write!(f, "Escape threshold must be a positive finite number, got {}", threshold)
            }
        }
    }
}

impl Error for MandelbrotError {}
