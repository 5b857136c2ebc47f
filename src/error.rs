//! Error types for the day-arc engine.
//!
//! The geometry operations themselves are total. Errors only come out of the checked
//! constructors for [`DayWindow`](crate::DayWindow) and [`Viewport`](crate::Viewport) and the
//! chrono day-boundary helpers.

use crate::types::Instant;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while assembling day-arc inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The day window instants are not ordered `start ≤ sunrise ≤ sunset ≤ end`.
    InvalidDayWindow {
        /// Which ordering constraint was violated.
        message: &'static str,
    },
    /// A viewport dimension or margin is negative or not finite.
    InvalidViewport {
        /// Which dimension was rejected.
        message: &'static str,
    },
    /// A local calendar day could not be resolved.
    InvalidDateTime {
        /// Description of the date/time problem.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDayWindow { message } => write!(f, "invalid day window: {message}"),
            Self::InvalidViewport { message } => write!(f, "invalid viewport: {message}"),
            Self::InvalidDateTime { message } => write!(f, "invalid date/time: {message}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid day window error.
    #[must_use]
    pub const fn invalid_day_window(message: &'static str) -> Self {
        Self::InvalidDayWindow { message }
    }

    /// Creates an invalid viewport error.
    #[must_use]
    pub const fn invalid_viewport(message: &'static str) -> Self {
        Self::InvalidViewport { message }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }
}

/// Validates the ordering `start ≤ sunrise ≤ sunset ≤ end`.
///
/// # Errors
/// Returns `InvalidDayWindow` naming the first pair that is out of order.
pub fn check_day_window(
    start: Instant,
    sunrise: Instant,
    sunset: Instant,
    end: Instant,
) -> Result<()> {
    if sunrise < start {
        return Err(Error::invalid_day_window("sunrise is before the start of the day"));
    }
    if sunset < sunrise {
        return Err(Error::invalid_day_window("sunset is before sunrise"));
    }
    if end < sunset {
        return Err(Error::invalid_day_window("sunset is after the end of the day"));
    }
    Ok(())
}

/// Validates that a pixel length is finite and not negative.
///
/// # Errors
/// Returns `InvalidViewport` carrying `message` if the value is rejected.
pub fn check_pixels(value: f64, message: &'static str) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::invalid_viewport(message));
    }
    Ok(())
}
