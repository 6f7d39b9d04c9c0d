//! Error types for the terminator library.

use core::fmt;

#[cfg(feature = "tz")]
use alloc::string::String;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur in terminator, distance and time zone calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Timestamp is NaN or infinite.
    InvalidTimestamp {
        /// The rejected timestamp in milliseconds since the Unix epoch.
        value: f64,
    },
    /// Invalid date/time components.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Sampling resolution outside the supported range.
    InvalidResolution {
        /// The rejected number of samples per degree.
        value: u32,
    },
    /// Time zone name not found in the IANA database.
    #[cfg(feature = "tz")]
    UnknownTimeZone {
        /// The name that failed to resolve.
        name: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidTimestamp { value } => {
                write!(f, "invalid timestamp {value} ms (must be finite)")
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::InvalidResolution { value } => {
                write!(
                    f,
                    "invalid resolution {value} (must be between {MIN_RESOLUTION} and {MAX_RESOLUTION} samples per degree)"
                )
            }
            #[cfg(feature = "tz")]
            Self::UnknownTimeZone { name } => {
                write!(f, "unknown time zone '{name}'")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid timestamp error.
    #[must_use]
    pub const fn invalid_timestamp(value: f64) -> Self {
        Self::InvalidTimestamp { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates an invalid resolution error.
    #[must_use]
    pub const fn invalid_resolution(value: u32) -> Self {
        Self::InvalidResolution { value }
    }

    /// Creates an unknown time zone error.
    #[cfg(feature = "tz")]
    #[must_use]
    pub fn unknown_time_zone(name: &str) -> Self {
        Self::UnknownTimeZone {
            name: String::from(name),
        }
    }
}

/// Lowest supported terminator resolution (samples per degree).
pub const MIN_RESOLUTION: u32 = 1;

/// Highest supported terminator resolution (samples per degree).
pub const MAX_RESOLUTION: u32 = 60;

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a Unix timestamp in milliseconds is finite.
///
/// # Errors
/// Returns `InvalidTimestamp` for NaN or infinite values.
pub fn check_timestamp(unix_millis: f64) -> Result<()> {
    if !unix_millis.is_finite() {
        return Err(Error::invalid_timestamp(unix_millis));
    }
    Ok(())
}

/// Validates the number of terminator samples per degree.
///
/// # Errors
/// Returns `InvalidResolution` if resolution is outside `MIN_RESOLUTION..=MAX_RESOLUTION`.
pub fn check_resolution(resolution: u32) -> Result<()> {
    if !(MIN_RESOLUTION..=MAX_RESOLUTION).contains(&resolution) {
        return Err(Error::invalid_resolution(resolution));
    }
    Ok(())
}
