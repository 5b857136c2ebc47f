//! Mapping from (time, elevation) space to pixels.

use crate::math::lerp;
use crate::types::{DayWindow, HIGH, Instant, LOW, PixelPoint, Point, Viewport};

/// Linear maps from instants to x pixels and from elevation values to y pixels.
///
/// The time domain is `[start, end]` of the day window, mapped onto `[0, width]`. The value
/// domain is `[LOW, HIGH]`, mapped onto `[height − bottom margin, top margin]`, so higher
/// values land higher on screen. A mapper is a plain value: rebuild it whenever the viewport
/// changes.
///
/// # Example
/// ```
/// # use daylight_arc::{AxisMapper, DayWindow, Instant, Viewport};
/// const HOUR: i64 = 3_600_000;
/// let window = DayWindow::new(
///     Instant::from_millis(0),
///     Instant::from_millis(6 * HOUR),
///     Instant::from_millis(18 * HOUR),
///     Instant::from_millis(24 * HOUR),
/// )
/// .unwrap();
/// let mapper = AxisMapper::new(&window, &Viewport::new(480.0, 200.0).unwrap());
///
/// assert_eq!(mapper.time_to_x(Instant::from_millis(12 * HOUR)), 240.0);
/// assert_eq!(mapper.value_to_y(100.0), 40.0);
/// assert_eq!(mapper.value_to_y(-100.0), 160.0);
/// assert_eq!(mapper.value_to_y(0.0), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMapper {
    domain_start: i64,
    domain_end: i64,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl AxisMapper {
    /// Builds the mapper for one day window and viewport.
    #[must_use]
    pub fn new(window: &DayWindow, viewport: &Viewport) -> Self {
        let margins = viewport.margins();
        Self {
            domain_start: window.start().millis(),
            domain_end: window.end().millis(),
            x_range: (0.0, viewport.width()),
            y_range: (viewport.height() - margins.bottom, margins.top),
        }
    }

    /// Maps an instant to a horizontal pixel.
    ///
    /// Instants outside the day window extrapolate linearly. A zero-length day window maps
    /// every instant to the middle of the range.
    #[must_use]
    pub fn time_to_x(&self, t: Instant) -> f64 {
        let span = i128::from(self.domain_end) - i128::from(self.domain_start);
        if span == 0 {
            return lerp(self.x_range.0, self.x_range.1, 0.5);
        }
        let elapsed = i128::from(t.millis()) - i128::from(self.domain_start);
        lerp(self.x_range.0, self.x_range.1, elapsed as f64 / span as f64)
    }

    /// Maps an elevation value to a vertical pixel.
    #[must_use]
    pub fn value_to_y(&self, value: f64) -> f64 {
        lerp(self.y_range.0, self.y_range.1, (value - LOW) / (HIGH - LOW))
    }

    /// Maps a (time, elevation) point to pixels.
    #[must_use]
    pub fn project(&self, point: Point) -> PixelPoint {
        PixelPoint::new(self.time_to_x(point.x), self.value_to_y(point.y))
    }

    /// Gets the pixel range of the time axis, `(0, width)`.
    #[must_use]
    pub const fn x_range(&self) -> (f64, f64) {
        self.x_range
    }

    /// Gets the pixel range of the value axis, `(height − bottom, top)`.
    #[must_use]
    pub const fn y_range(&self) -> (f64, f64) {
        self.y_range
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HORIZON, Margins};

    const HOUR: i64 = 3_600_000;

    fn day(start: i64, end: i64) -> DayWindow {
        DayWindow::new_unchecked(
            Instant::from_millis(start),
            Instant::from_millis(start),
            Instant::from_millis(end),
            Instant::from_millis(end),
        )
    }

    #[test]
    fn test_endpoint_images_are_exact() {
        let viewport = Viewport::with_margins(
            333.3,
            171.7,
            Margins {
                top: 12.5,
                bottom: 31.25,
            },
        )
        .unwrap();
        let start = 1_718_920_800_000;
        let end = start + 24 * HOUR - 1;
        let mapper = AxisMapper::new(&day(start, end), &viewport);

        assert_eq!(mapper.time_to_x(Instant::from_millis(start)), 0.0);
        assert_eq!(mapper.time_to_x(Instant::from_millis(end)), 333.3);
        assert_eq!(mapper.value_to_y(LOW), 171.7 - 31.25);
        assert_eq!(mapper.value_to_y(HIGH), 12.5);
    }

    #[test]
    fn test_maps_are_strictly_monotonic() {
        let mapper = AxisMapper::new(&day(0, 24 * HOUR), &Viewport::new(640.0, 240.0).unwrap());

        let mut previous_x = f64::NEG_INFINITY;
        for minute in (0..=24 * 60).step_by(7) {
            let x = mapper.time_to_x(Instant::from_millis(i64::from(minute) * 60_000));
            assert!(x > previous_x, "x not increasing at minute {minute}");
            previous_x = x;
        }

        let mut previous_y = f64::INFINITY;
        for step in 0..=200 {
            let y = mapper.value_to_y(LOW + f64::from(step));
            assert!(y < previous_y, "y not decreasing at value {}", LOW + f64::from(step));
            previous_y = y;
        }
    }

    #[test]
    fn test_horizon_sits_midway() {
        let mapper = AxisMapper::new(&day(0, 24 * HOUR), &Viewport::new(640.0, 240.0).unwrap());
        assert_eq!(mapper.value_to_y(HORIZON), 120.0);
        assert_eq!(mapper.y_range(), (200.0, 40.0));
        assert_eq!(mapper.x_range(), (0.0, 640.0));
    }

    #[test]
    fn test_zero_length_window() {
        let mapper = AxisMapper::new(&day(500, 500), &Viewport::new(100.0, 100.0).unwrap());
        assert_eq!(mapper.time_to_x(Instant::from_millis(500)), 50.0);
        assert_eq!(mapper.time_to_x(Instant::from_millis(0)), 50.0);
    }

    #[test]
    fn test_project() {
        let mapper = AxisMapper::new(&day(0, 24 * HOUR), &Viewport::new(480.0, 200.0).unwrap());
        let pixel = mapper.project(Point::new(Instant::from_millis(6 * HOUR), 50.0));
        assert_eq!(pixel, PixelPoint::new(120.0, 70.0));
    }
}
