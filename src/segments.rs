//! Curve segment geometry.
//!
//! The three filled segments cover the night before sunrise, the day and the night after
//! sunset. Each one is the three consecutive anchors it spans; the renderer smooths them
//! into a curve (see [`crate::path`]). The markers are the straight lines drawn at sunrise,
//! at sunset and along the horizon.

use crate::anchors::Anchors;
use crate::types::{HIGH, HORIZON, Point};

/// Which side of the horizon a filled segment or the indicator lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Below the horizon
    Night,
    /// Above the horizon
    Day,
}

/// An ordered, fixed-size sequence of control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment<const N: usize> {
    phase: Phase,
    points: [Point; N],
}

/// A filled curve segment built from three consecutive anchors.
pub type FilledSegment = CurveSegment<3>;

impl<const N: usize> CurveSegment<N> {
    /// Creates a segment.
    #[must_use]
    pub const fn new(phase: Phase, points: [Point; N]) -> Self {
        Self { phase, points }
    }

    /// Gets the phase this segment belongs to.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Gets the control points in order.
    #[must_use]
    pub const fn points(&self) -> &[Point; N] {
        &self.points
    }

    /// Gets the first control point.
    #[must_use]
    pub const fn first(&self) -> Point {
        self.points[0]
    }

    /// Gets the last control point.
    #[must_use]
    pub const fn last(&self) -> Point {
        self.points[N - 1]
    }

    /// Checks whether every control point shares one instant.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.points.iter().all(|point| point.x == self.points[0].x)
    }
}

/// A straight two-point line drawn on top of the filled segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerLine {
    from: Point,
    to: Point,
}

impl MarkerLine {
    /// Creates a line from `from` to `to`.
    #[must_use]
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Gets both end points in drawing order.
    #[must_use]
    pub const fn points(&self) -> [Point; 2] {
        [self.from, self.to]
    }

    /// Gets the start point.
    #[must_use]
    pub const fn first(&self) -> Point {
        self.from
    }

    /// Gets the end point.
    #[must_use]
    pub const fn last(&self) -> Point {
        self.to
    }

    /// Checks whether both ends share one instant, i.e. the line is vertical.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.from.x == self.to.x
    }
}

/// The three filled segments, in time order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segments {
    /// Start of day to sunrise
    pub before_sunrise: FilledSegment,
    /// Sunrise to sunset
    pub daylight: FilledSegment,
    /// Sunset to end of day
    pub after_sunset: FilledSegment,
}

impl Segments {
    /// Gets the segments as an array in time order.
    #[must_use]
    pub const fn as_array(&self) -> [FilledSegment; 3] {
        [self.before_sunrise, self.daylight, self.after_sunset]
    }
}

/// The straight marker lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Markers {
    /// Vertical line at sunrise, from the horizon to the apex height
    pub sunrise: MarkerLine,
    /// Vertical line at sunset, from the horizon to the apex height
    pub sunset: MarkerLine,
    /// Horizontal baseline at the horizon, spanning the whole day
    pub horizon: MarkerLine,
}

impl Markers {
    /// Gets the markers as an array: sunrise, sunset, horizon.
    #[must_use]
    pub const fn as_array(&self) -> [MarkerLine; 3] {
        [self.sunrise, self.sunset, self.horizon]
    }
}

/// Control-point geometry of the whole arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    /// Filled segments
    pub segments: Segments,
    /// Straight marker lines
    pub markers: Markers,
}

/// Builds the arc geometry from an anchor sequence.
///
/// Total over any anchor sequence; equal anchor instants produce collapsed segments.
///
/// # Example
/// ```
/// # use daylight_arc::{build_anchors, build_segments, DayWindow, Instant, Phase};
/// const HOUR: i64 = 3_600_000;
/// let window = DayWindow::new(
///     Instant::from_millis(0),
///     Instant::from_millis(6 * HOUR),
///     Instant::from_millis(18 * HOUR),
///     Instant::from_millis(24 * HOUR),
/// )
/// .unwrap();
///
/// let geometry = build_segments(&build_anchors(&window));
/// assert_eq!(geometry.segments.daylight.phase(), Phase::Day);
/// assert_eq!(geometry.markers.sunrise.first().x.millis(), 6 * HOUR);
/// assert_eq!(geometry.markers.sunrise.last().y, 100.0);
/// ```
#[must_use]
pub fn build_segments(anchors: &Anchors) -> ArcGeometry {
    let a = anchors.as_array().map(Point::from);

    let segments = Segments {
        before_sunrise: CurveSegment::new(Phase::Night, [a[0], a[1], a[2]]),
        daylight: CurveSegment::new(Phase::Day, [a[2], a[3], a[4]]),
        after_sunset: CurveSegment::new(Phase::Night, [a[4], a[5], a[6]]),
    };

    let vertical =
        |at: Point| MarkerLine::new(Point::new(at.x, HORIZON), Point::new(at.x, HIGH));

    let markers = Markers {
        sunrise: vertical(a[2]),
        sunset: vertical(a[4]),
        horizon: MarkerLine::new(Point::new(a[0].x, HORIZON), Point::new(a[6].x, HORIZON)),
    };

    ArcGeometry { segments, markers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::build_anchors;
    use crate::types::{DayWindow, Instant, LOW};

    const HOUR: i64 = 3_600_000;

    fn geometry(start: i64, sunrise: i64, sunset: i64, end: i64) -> ArcGeometry {
        let window = DayWindow::new_unchecked(
            Instant::from_millis(start),
            Instant::from_millis(sunrise),
            Instant::from_millis(sunset),
            Instant::from_millis(end),
        );
        build_segments(&build_anchors(&window))
    }

    fn coords<const N: usize>(points: [Point; N]) -> [(i64, f64); N] {
        points.map(|p| (p.x.millis(), p.y))
    }

    #[test]
    fn test_filled_segments_share_boundary_points() {
        let g = geometry(0, 6 * HOUR, 18 * HOUR, 24 * HOUR);

        assert_eq!(
            coords(*g.segments.before_sunrise.points()),
            [(0, 0.0), (3 * HOUR, LOW), (6 * HOUR, 0.0)]
        );
        assert_eq!(
            coords(*g.segments.daylight.points()),
            [(6 * HOUR, 0.0), (12 * HOUR, HIGH), (18 * HOUR, 0.0)]
        );
        assert_eq!(
            coords(*g.segments.after_sunset.points()),
            [(18 * HOUR, 0.0), (21 * HOUR, LOW), (24 * HOUR, 0.0)]
        );

        assert_eq!(g.segments.before_sunrise.last(), g.segments.daylight.first());
        assert_eq!(g.segments.daylight.last(), g.segments.after_sunset.first());
    }

    #[test]
    fn test_phases() {
        let g = geometry(0, 6 * HOUR, 18 * HOUR, 24 * HOUR);
        let phases = g.segments.as_array().map(|s| s.phase());
        assert_eq!(phases, [Phase::Night, Phase::Day, Phase::Night]);
    }

    #[test]
    fn test_markers() {
        let g = geometry(0, 6 * HOUR, 18 * HOUR, 24 * HOUR);

        assert_eq!(coords(g.markers.sunrise.points()), [(6 * HOUR, 0.0), (6 * HOUR, HIGH)]);
        assert_eq!(coords(g.markers.sunset.points()), [(18 * HOUR, 0.0), (18 * HOUR, HIGH)]);
        assert_eq!(coords(g.markers.horizon.points()), [(0, 0.0), (24 * HOUR, 0.0)]);
        assert!(g.markers.sunrise.is_collapsed());
        assert!(!g.markers.horizon.is_collapsed());
    }

    #[test]
    fn test_degenerate_daylight_collapses() {
        let g = geometry(0, 12 * HOUR, 12 * HOUR, 24 * HOUR);
        assert!(g.segments.daylight.is_collapsed());
        assert!(!g.segments.before_sunrise.is_collapsed());
        assert!(!g.segments.after_sunset.is_collapsed());
        assert_eq!(g.markers.sunrise, g.markers.sunset);
    }

    #[test]
    fn test_build_is_idempotent() {
        let window = DayWindow::new_unchecked(
            Instant::from_millis(0),
            Instant::from_millis(5 * HOUR + 17),
            Instant::from_millis(20 * HOUR - 3),
            Instant::from_millis(24 * HOUR - 1),
        );
        let anchors = build_anchors(&window);
        assert_eq!(build_segments(&anchors), build_segments(&anchors));
    }
}
