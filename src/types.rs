//! Core data types for day-arc calculations.

use crate::error::{check_day_window, check_pixels};
use crate::Result;

/// Elevation value of the night troughs (the lowest point of the curve).
pub const LOW: f64 = -100.0;

/// Elevation value of the midday apex (the highest point of the curve).
pub const HIGH: f64 = 100.0;

/// Elevation value of the horizon.
pub const HORIZON: f64 = 0.0;

/// Milliseconds per second, used when scaling weather-service timestamps.
const MILLIS_PER_SECOND: i64 = 1_000;

/// A point in time, in integer milliseconds since the Unix epoch.
///
/// # Example
/// ```
/// # use daylight_arc::Instant;
/// let sunrise = Instant::from_unix_seconds(1_718_942_400);
/// assert_eq!(sunrise.millis(), 1_718_942_400_000);
/// assert!(Instant::from_millis(0) < sunrise);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Instant(i64);

impl Instant {
    /// Creates an instant from milliseconds since the Unix epoch.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Creates an instant from whole seconds since the Unix epoch.
    ///
    /// Weather services report sunrise and sunset this way. Out-of-range values saturate.
    #[must_use]
    pub const fn from_unix_seconds(seconds: i64) -> Self {
        Self(seconds.saturating_mul(MILLIS_PER_SECOND))
    }

    /// Gets the raw milliseconds since the Unix epoch.
    #[must_use]
    pub const fn millis(&self) -> i64 {
        self.0
    }

    /// Returns this instant shifted by `millis`, saturating at the representable range.
    #[must_use]
    pub const fn offset_millis(self, millis: i64) -> Self {
        Self(self.0.saturating_add(millis))
    }

    /// Converts to a UTC `DateTime`, or `None` if the instant is outside chrono's range.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_utc(self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::<chrono::Utc>::from_timestamp_millis(self.0)
    }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for Instant {
    fn from(datetime: chrono::DateTime<Tz>) -> Self {
        Self(datetime.timestamp_millis())
    }
}

/// The four defining instants of one day-arc computation.
///
/// The expected ordering is `start ≤ sunrise ≤ sunset ≤ end`. [`DayWindow::new`] enforces
/// it; [`DayWindow::new_unchecked`] does not, and the engine then produces a best-effort
/// (possibly non-monotonic) curve instead of failing.
///
/// # Example
/// ```
/// # use daylight_arc::{DayWindow, Instant};
/// const HOUR: i64 = 3_600_000;
/// let window = DayWindow::new(
///     Instant::from_millis(0),
///     Instant::from_millis(6 * HOUR),
///     Instant::from_millis(18 * HOUR),
///     Instant::from_millis(24 * HOUR),
/// )
/// .unwrap();
/// assert_eq!(window.sunrise().millis(), 6 * HOUR);
///
/// // Sunset before sunrise is rejected
/// assert!(DayWindow::new(
///     Instant::from_millis(0),
///     Instant::from_millis(18 * HOUR),
///     Instant::from_millis(6 * HOUR),
///     Instant::from_millis(24 * HOUR),
/// )
/// .is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayWindow {
    start: Instant,
    sunrise: Instant,
    sunset: Instant,
    end: Instant,
}

impl DayWindow {
    /// Creates a day window, validating the instant ordering.
    ///
    /// # Errors
    /// Returns `InvalidDayWindow` if `start ≤ sunrise ≤ sunset ≤ end` does not hold.
    pub fn new(start: Instant, sunrise: Instant, sunset: Instant, end: Instant) -> Result<Self> {
        check_day_window(start, sunrise, sunset, end)?;
        Ok(Self::new_unchecked(start, sunrise, sunset, end))
    }

    /// Creates a day window without validating the instant ordering.
    ///
    /// Use this when sunrise/sunset come from a source that may not agree with the local
    /// day boundaries and a visually approximate result is acceptable.
    #[must_use]
    pub const fn new_unchecked(
        start: Instant,
        sunrise: Instant,
        sunset: Instant,
        end: Instant,
    ) -> Self {
        Self {
            start,
            sunrise,
            sunset,
            end,
        }
    }

    /// Resolves the local calendar day containing `current` and builds a validated window.
    ///
    /// `start` is the first existing local instant of that day and `end` is the last
    /// millisecond before the next local day begins, both in `current`'s timezone.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the local day cannot be resolved, or `InvalidDayWindow`
    /// if sunrise/sunset fall outside it.
    ///
    /// # Example
    /// ```
    /// # use daylight_arc::{DayWindow, Instant};
    /// use chrono::{DateTime, FixedOffset};
    ///
    /// let now = "2024-06-21T15:30:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
    /// let sunrise = "2024-06-21T04:55:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
    /// let sunset = "2024-06-21T21:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
    ///
    /// let window = DayWindow::for_local_day(&now, sunrise.into(), sunset.into()).unwrap();
    /// let midnight = "2024-06-21T00:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
    /// assert_eq!(window.start(), Instant::from(midnight));
    /// assert_eq!(window.end().millis() - window.start().millis(), 86_400_000 - 1);
    /// ```
    #[cfg(feature = "chrono")]
    pub fn for_local_day<Tz: chrono::TimeZone>(
        current: &chrono::DateTime<Tz>,
        sunrise: Instant,
        sunset: Instant,
    ) -> Result<Self> {
        let (start, end) = crate::time::local_day_bounds(current)?;
        Self::new(start, sunrise, sunset, end)
    }

    /// Gets the start of the day window.
    #[must_use]
    pub const fn start(&self) -> Instant {
        self.start
    }

    /// Gets the sunrise instant.
    #[must_use]
    pub const fn sunrise(&self) -> Instant {
        self.sunrise
    }

    /// Gets the sunset instant.
    #[must_use]
    pub const fn sunset(&self) -> Instant {
        self.sunset
    }

    /// Gets the end of the day window.
    #[must_use]
    pub const fn end(&self) -> Instant {
        self.end
    }

    /// Checks whether `start ≤ sunrise ≤ sunset ≤ end` holds.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        check_day_window(self.start, self.sunrise, self.sunset, self.end).is_ok()
    }

    /// Checks whether `now` lies between sunrise and sunset (inclusive).
    #[must_use]
    pub fn is_daytime(&self, now: Instant) -> bool {
        self.sunrise <= now && now <= self.sunset
    }
}

/// A named control point on the elevation curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    at: Instant,
    value: f64,
}

impl Anchor {
    /// Creates an anchor at `at` with elevation `value`.
    #[must_use]
    pub const fn new(at: Instant, value: f64) -> Self {
        Self { at, value }
    }

    /// Gets the instant of this anchor.
    #[must_use]
    pub const fn at(&self) -> Instant {
        self.at
    }

    /// Gets the elevation value of this anchor.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

/// A control point in (time, elevation) space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Time coordinate
    pub x: Instant,
    /// Elevation coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: Instant, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Anchor> for Point {
    fn from(anchor: Anchor) -> Self {
        Self::new(anchor.at, anchor.value)
    }
}

/// A point in pixel space (origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPoint {
    /// Horizontal pixel coordinate
    pub x: f64,
    /// Vertical pixel coordinate
    pub y: f64,
}

impl PixelPoint {
    /// Creates a pixel point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Vertical margins reserved above and below the arc.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    /// Pixels kept free above the apex (room for the sunrise/sunset labels)
    pub top: f64,
    /// Pixels kept free below the night troughs
    pub bottom: f64,
}

impl Margins {
    /// Creates margins, validating both values.
    ///
    /// # Errors
    /// Returns `InvalidViewport` for negative or non-finite margins.
    pub fn new(top: f64, bottom: f64) -> Result<Self> {
        check_pixels(top, "top margin must be finite and not negative")?;
        check_pixels(bottom, "bottom margin must be finite and not negative")?;
        Ok(Self { top, bottom })
    }

    /// The standard chart margins: 40 px above and below.
    ///
    /// # Example
    /// ```
    /// # use daylight_arc::Margins;
    /// let margins = Margins::standard();
    /// assert_eq!(margins.top, 40.0);
    /// assert_eq!(margins.bottom, 40.0);
    /// ```
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            top: 40.0,
            bottom: 40.0,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::standard()
    }
}

/// The pixel rectangle the arc is drawn into.
///
/// Supplied by whatever observes the rendering surface; a new size means a new
/// computation, never a mutation of an existing frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    width: f64,
    height: f64,
    margins: Margins,
}

impl Viewport {
    /// Creates a viewport with [`Margins::standard`].
    ///
    /// # Errors
    /// Returns `InvalidViewport` for negative or non-finite dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Self::with_margins(width, height, Margins::standard())
    }

    /// Creates a viewport with explicit margins.
    ///
    /// # Errors
    /// Returns `InvalidViewport` for negative or non-finite dimensions or margins.
    pub fn with_margins(width: f64, height: f64, margins: Margins) -> Result<Self> {
        check_pixels(width, "width must be finite and not negative")?;
        check_pixels(height, "height must be finite and not negative")?;
        let margins = Margins::new(margins.top, margins.bottom)?;
        Ok(Self {
            width,
            height,
            margins,
        })
    }

    /// Gets the width in pixels.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Gets the height in pixels.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Gets the vertical margins.
    #[must_use]
    pub const fn margins(&self) -> Margins {
        self.margins
    }
}

/// The rendered size of a text label, as measured by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextExtent {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl TextExtent {
    /// Creates a text extent.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 3_600_000;

    #[test]
    fn test_instant_conversions() {
        assert_eq!(Instant::from_unix_seconds(1).millis(), 1_000);
        assert_eq!(Instant::from_unix_seconds(-2).millis(), -2_000);
        assert_eq!(Instant::from_unix_seconds(i64::MAX).millis(), i64::MAX);
        assert_eq!(Instant::from_millis(5).offset_millis(-10).millis(), -5);
        assert_eq!(Instant::from_millis(i64::MAX).offset_millis(1).millis(), i64::MAX);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_instant_chrono_round_trip() {
        use chrono::{DateTime, Utc};

        let datetime = "2024-03-10T06:42:17.250Z".parse::<DateTime<Utc>>().unwrap();
        let instant = Instant::from(datetime);
        assert_eq!(instant.millis(), datetime.timestamp_millis());
        assert_eq!(instant.to_utc(), Some(datetime));
        assert_eq!(Instant::from_millis(i64::MAX).to_utc(), None);
    }

    #[test]
    fn test_day_window_creation() {
        let window = DayWindow::new(
            Instant::from_millis(0),
            Instant::from_millis(6 * HOUR),
            Instant::from_millis(18 * HOUR),
            Instant::from_millis(24 * HOUR),
        )
        .unwrap();
        assert!(window.is_ordered());
        assert!(window.is_daytime(Instant::from_millis(12 * HOUR)));
        assert!(window.is_daytime(Instant::from_millis(6 * HOUR)));
        assert!(!window.is_daytime(Instant::from_millis(3 * HOUR)));

        // Unchecked construction keeps whatever it is given
        let unordered = DayWindow::new_unchecked(
            Instant::from_millis(0),
            Instant::from_millis(18 * HOUR),
            Instant::from_millis(6 * HOUR),
            Instant::from_millis(24 * HOUR),
        );
        assert!(!unordered.is_ordered());
        assert_eq!(unordered.sunrise().millis(), 18 * HOUR);
    }

    #[test]
    fn test_viewport_validation() {
        let viewport = Viewport::new(640.0, 200.0).unwrap();
        assert_eq!(viewport.width(), 640.0);
        assert_eq!(viewport.height(), 200.0);
        assert_eq!(viewport.margins(), Margins::standard());

        // Unmeasured surfaces report zero size; that is allowed
        assert!(Viewport::new(0.0, 0.0).is_ok());

        assert!(Viewport::new(-1.0, 200.0).is_err());
        assert!(Viewport::new(640.0, f64::NAN).is_err());
        assert!(Viewport::with_margins(640.0, 200.0, Margins { top: -4.0, bottom: 0.0 }).is_err());
        assert!(Margins::new(10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_anchor_to_point() {
        let anchor = Anchor::new(Instant::from_millis(42), LOW);
        let point = Point::from(anchor);
        assert_eq!(point.x, anchor.at());
        assert_eq!(point.y, LOW);
    }
}
