//! Error handling for the SSP Framework
//!
//! Provides error types for all framework operations. Configuration
//! problems are reported through these variants at session setup time.

use std::fmt;

/// Result type alias for SSP Framework operations
pub type SspResult<T> = Result<T, SspError>;

/// Error type for all SSP Framework operations
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SspError {
    /// Sampling rate outside the supported range
    InvalidSamplingRate {
        /// Provided sampling rate in Hz
        rate: f64,
        /// Valid range description
        valid_range: &'static str,
    },

    /// Channel count exceeds maximum supported
    TooManyChannels {
        /// Requested channel count
        requested: usize,
        /// Maximum supported channels
        max_supported: usize,
    },

    /// Malformed SEED channel identifier
    InvalidChannelId {
        /// Description of the identifier problem
        reason: &'static str,
    },

    /// Sample block length does not match its metadata
    BlockLengthMismatch {
        /// Sample count implied by the metadata
        expected: usize,
        /// Sample count actually provided
        actual: usize,
    },

    /// FIR filter id not present in the filter chain
    UnknownFirFilter {
        /// Requested filter id
        id: u8,
    },

    /// IIR definition id not present in the session
    UnknownIirFilter {
        /// Requested definition id
        id: u8,
    },

    /// Filter definition failed validation
    InvalidFilterConfig {
        /// Description of the defective field
        message: String,
    },

    /// Butterworth pole count outside the designable range
    InvalidPoleCount {
        /// Requested pole count
        poles: usize,
        /// Maximum designable pole count
        max: usize,
    },

    /// Cutoff ratio not strictly between 0 and 1 of Nyquist
    InvalidCutoffRatio {
        /// Provided ratio
        ratio: f64,
    },

    /// Statistics window length must be positive
    InvalidStatsWindow {
        /// Provided window length
        window: usize,
    },

    /// Two definitions in one session share an id
    DuplicateFilterId {
        /// The colliding id
        id: u8,
    },

    /// Session configuration error
    ConfigurationError {
        /// Description of the configuration problem
        message: String,
    },

    /// Simulation setup or generation error
    SimulationError {
        /// Description of the simulation problem
        message: String,
    },
}

impl fmt::Display for SspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SspError::InvalidSamplingRate { rate, valid_range } => {
                write!(f, "Invalid sampling rate: {}Hz, valid range: {}",
                       rate, valid_range)
            }
            SspError::TooManyChannels { requested, max_supported } => {
                write!(f, "Too many channels: requested {}, max supported {}",
                       requested, max_supported)
            }
            SspError::InvalidChannelId { reason } => {
                write!(f, "Invalid channel id: {}", reason)
            }
            SspError::BlockLengthMismatch { expected, actual } => {
                write!(f, "Block length mismatch: expected {} samples, got {}",
                       expected, actual)
            }
            SspError::UnknownFirFilter { id } => {
                write!(f, "Unknown FIR filter id: {}", id)
            }
            SspError::UnknownIirFilter { id } => {
                write!(f, "Unknown IIR definition id: {}", id)
            }
            SspError::InvalidFilterConfig { message } => {
                write!(f, "Invalid filter configuration: {}", message)
            }
            SspError::InvalidPoleCount { poles, max } => {
                write!(f, "Invalid pole count: {}, must be within 1..={}",
                       poles, max)
            }
            SspError::InvalidCutoffRatio { ratio } => {
                write!(f, "Invalid cutoff ratio: {}, must be strictly between 0 and 1",
                       ratio)
            }
            SspError::InvalidStatsWindow { window } => {
                write!(f, "Invalid statistics window: {}, must be positive", window)
            }
            SspError::DuplicateFilterId { id } => {
                write!(f, "Duplicate filter id: {}", id)
            }
            SspError::ConfigurationError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            SspError::SimulationError { message } => {
                write!(f, "Simulation error: {}", message)
            }
        }
    }
}

impl std::error::Error for SspError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = SspError::TooManyChannels {
            requested: 128,
            max_supported: 64,
        };
        let display = format!("{}", error);
        assert!(display.contains("Too many channels"));
        assert!(display.contains("128"));
        assert!(display.contains("64"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = SspError::UnknownFirFilter { id: 9 };
        let error2 = SspError::UnknownFirFilter { id: 9 };
        assert_eq!(error1, error2);
    }

    #[test]
    fn test_error_is_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(SspError::InvalidCutoffRatio { ratio: 1.5 });
        assert!(error.to_string().contains("cutoff ratio"));
    }
}
