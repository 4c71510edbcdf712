//! Error types for unipolar-drive.
//!
//! Provides unified error handling across configuration and drive operations.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all unipolar-drive operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Drive operation error
    Drive(DriveError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Step delay must be non-zero (it is the sole speed control)
    InvalidStepDelay(u32),
    /// Sequence entry drives bits outside the owned low nibble
    PatternOutOfRange {
        /// Index of the offending entry
        index: usize,
        /// The raw pattern value
        pattern: u8,
    },
    /// Adjacent sequence entries must differ in exactly one coil line
    BrokenHalfStep {
        /// Index of the first entry of the offending adjacent pair
        index: usize,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Drive operation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveError {
    /// Coil output operation failed
    PinError,
    /// Event source rejected the handler registration
    RegistrationFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Drive(e) => write!(f, "Drive error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidStepDelay(v) => {
                write!(f, "Invalid step delay: {} us. Must be > 0", v)
            }
            ConfigError::PatternOutOfRange { index, pattern } => {
                write!(
                    f,
                    "Sequence entry {} is {:#04X}; only bits 0-3 may be set",
                    index, pattern
                )
            }
            ConfigError::BrokenHalfStep { index } => {
                write!(
                    f,
                    "Sequence entries {} and {} do not differ in exactly one line",
                    index,
                    (index + 1) % 8
                )
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for DriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveError::PinError => write!(f, "GPIO coil output operation failed"),
            DriveError::RegistrationFailed => write!(f, "Event handler registration failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DriveError> for Error {
    fn from(e: DriveError) -> Self {
        Error::Drive(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for DriveError {}
