//! SVG path data for the arc.
//!
//! Filled segments are smoothed with the centripetal Catmull-Rom spline and closed against
//! the horizon; marker lines are straight polylines. Output uses the compact SVG syntax
//! `M0,100C0,100,40,20,60,20…Z` and goes to any [`core::fmt::Write`], so it is available
//! without `std`.
//!
//! The spline only shapes the drawn outline. Indicator positions come from the linear
//! interpolation in [`crate::elevation`], over the same control points.

use core::fmt::{self, Write};

use crate::axis::AxisMapper;
use crate::math::{powf, sqrt};
use crate::segments::{CurveSegment, MarkerLine};
use crate::types::{HORIZON, PixelPoint};

/// Catmull-Rom parameterization: 0 uniform, 0.5 centripetal, 1 chordal.
pub const CATMULL_ROM_ALPHA: f64 = 0.5;

/// Chord lengths at or below this are treated as zero.
const EPSILON: f64 = 1e-12;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Start {
    Move,
    Line,
}

/// Writes an open Catmull-Rom curve through `points`.
///
/// One point produces only a move, two points a straight line, more points one cubic
/// Bézier per consecutive pair.
///
/// # Errors
/// Propagates errors from the underlying writer.
///
/// # Example
/// ```
/// # use daylight_arc::{path::write_curve, PixelPoint};
/// let mut d = String::new();
/// write_curve(
///     &mut d,
///     &[
///         PixelPoint::new(0.0, 100.0),
///         PixelPoint::new(60.0, 20.0),
///         PixelPoint::new(120.0, 100.0),
///     ],
/// )
/// .unwrap();
/// assert_eq!(d, "M0,100C0,100,40,20,60,20C80,20,120,100,120,100");
/// ```
pub fn write_curve<W: Write>(out: &mut W, points: &[PixelPoint]) -> fmt::Result {
    write_catmull_rom(out, points, CATMULL_ROM_ALPHA, Start::Move)
}

/// Writes a filled segment as a closed area between its curve and the horizon.
///
/// The upper edge runs forward through the projected control points, the lower edge runs
/// backward along the horizon, and the path is closed.
///
/// # Errors
/// Propagates errors from the underlying writer.
pub fn write_area<W: Write, const N: usize>(
    out: &mut W,
    segment: &CurveSegment<N>,
    mapper: &AxisMapper,
) -> fmt::Result {
    let upper = segment.points().map(|point| mapper.project(point));
    let horizon_y = mapper.value_to_y(HORIZON);
    let mut lower = upper.map(|pixel| PixelPoint::new(pixel.x, horizon_y));
    lower.reverse();

    write_catmull_rom(out, &upper, CATMULL_ROM_ALPHA, Start::Move)?;
    write_catmull_rom(out, &lower, CATMULL_ROM_ALPHA, Start::Line)?;
    if N > 0 {
        out.write_char('Z')?;
    }
    Ok(())
}

/// Writes a marker as a straight line.
///
/// # Errors
/// Propagates errors from the underlying writer.
pub fn write_line<W: Write>(out: &mut W, marker: &MarkerLine, mapper: &AxisMapper) -> fmt::Result {
    let from = mapper.project(marker.first());
    let to = mapper.project(marker.last());
    write!(out, "M{},{}L{},{}", from.x, from.y, to.x, to.y)
}

/// Returns the area path of a filled segment as a `String`.
#[cfg(feature = "std")]
#[must_use]
pub fn area_path<const N: usize>(segment: &CurveSegment<N>, mapper: &AxisMapper) -> String {
    let mut d = String::new();
    write_area(&mut d, segment, mapper).expect("writing to a String cannot fail");
    d
}

/// Returns the line path of a marker as a `String`.
#[cfg(feature = "std")]
#[must_use]
pub fn line_path(marker: &MarkerLine, mapper: &AxisMapper) -> String {
    let mut d = String::new();
    write_line(&mut d, marker, mapper).expect("writing to a String cannot fail");
    d
}

/// Chord length between two points raised to `alpha` and `2·alpha`.
#[derive(Clone, Copy)]
struct Chord {
    a: f64,
    two_a: f64,
}

impl Chord {
    fn between(from: PixelPoint, to: PixelPoint, alpha: f64) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let two_a = powf(dx * dx + dy * dy, alpha);
        Self {
            a: sqrt(two_a),
            two_a,
        }
    }
}

#[allow(clippy::suboptimal_flops)]
fn write_catmull_rom<W: Write>(
    out: &mut W,
    points: &[PixelPoint],
    alpha: f64,
    start: Start,
) -> fmt::Result {
    let Some(&first) = points.first() else {
        return Ok(());
    };
    let command = if start == Start::Move { 'M' } else { 'L' };
    write!(out, "{command}{},{}", first.x, first.y)?;

    if let [_, second] = points {
        return write!(out, "L{},{}", second.x, second.y);
    }

    for i in 0..points.len().saturating_sub(1) {
        let p1 = points[i];
        let p2 = points[i + 1];
        // The curve end repeats the last point, which gives a zero-length outgoing chord
        let p3 = points.get(i + 2).copied().unwrap_or(p2);

        let l12 = Chord::between(p1, p2, alpha);
        let l23 = Chord::between(p2, p3, alpha);

        let mut c1 = p1;
        if i > 0 {
            let p0 = points[i - 1];
            let l01 = Chord::between(p0, p1, alpha);
            if l01.a > EPSILON {
                let a = 2.0 * l01.two_a + 3.0 * l01.a * l12.a + l12.two_a;
                let n = 3.0 * l01.a * (l01.a + l12.a);
                c1 = PixelPoint::new(
                    (p1.x * a - p0.x * l12.two_a + p2.x * l01.two_a) / n,
                    (p1.y * a - p0.y * l12.two_a + p2.y * l01.two_a) / n,
                );
            }
        }

        let mut c2 = p2;
        if l23.a > EPSILON {
            let b = 2.0 * l23.two_a + 3.0 * l23.a * l12.a + l12.two_a;
            let m = 3.0 * l23.a * (l23.a + l12.a);
            c2 = PixelPoint::new(
                (p2.x * b + p1.x * l23.two_a - p3.x * l12.two_a) / m,
                (p2.y * b + p1.y * l23.two_a - p3.y * l12.two_a) / m,
            );
        }

        write!(
            out,
            "C{},{},{},{},{},{}",
            c1.x, c1.y, c2.x, c2.y, p2.x, p2.y
        )?;
    }
    Ok(())
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::anchors::build_anchors;
    use crate::segments::{ArcGeometry, Phase, build_segments};
    use crate::types::{DayWindow, Instant, Point, Viewport};

    const HOUR: i64 = 3_600_000;

    fn pixels(coords: &[(f64, f64)]) -> Vec<PixelPoint> {
        coords.iter().map(|&(x, y)| PixelPoint::new(x, y)).collect()
    }

    fn curve(coords: &[(f64, f64)]) -> String {
        let mut d = String::new();
        write_curve(&mut d, &pixels(coords)).unwrap();
        d
    }

    fn canonical() -> (ArcGeometry, AxisMapper) {
        let window = DayWindow::new(
            Instant::from_millis(0),
            Instant::from_millis(6 * HOUR),
            Instant::from_millis(18 * HOUR),
            Instant::from_millis(24 * HOUR),
        )
        .unwrap();
        let mapper = AxisMapper::new(&window, &Viewport::new(480.0, 200.0).unwrap());
        (build_segments(&build_anchors(&window)), mapper)
    }

    #[test]
    fn test_short_curves() {
        assert_eq!(curve(&[]), "");
        assert_eq!(curve(&[(1.0, 2.0)]), "M1,2");
        assert_eq!(curve(&[(1.0, 2.0), (3.5, 4.0)]), "M1,2L3.5,4");
    }

    #[test]
    fn test_centripetal_control_points() {
        // Chords of length 100 keep every intermediate value exact
        assert_eq!(
            curve(&[(0.0, 100.0), (60.0, 20.0), (120.0, 100.0)]),
            "M0,100C0,100,40,20,60,20C80,20,120,100,120,100"
        );
    }

    #[test]
    fn test_coincident_points_stay_finite() {
        let d = curve(&[(5.0, 5.0), (5.0, 5.0), (5.0, 5.0)]);
        assert_eq!(d, "M5,5C5,5,5,5,5,5C5,5,5,5,5,5");

        let d = curve(&[(0.0, 0.0), (10.0, 0.0), (10.0, 0.0), (20.0, 5.0)]);
        assert!(!d.contains("NaN") && !d.contains("inf"), "{d}");
    }

    #[test]
    fn test_line_path() {
        let (geometry, mapper) = canonical();
        assert_eq!(line_path(&geometry.markers.sunrise, &mapper), "M120,100L120,40");
        assert_eq!(line_path(&geometry.markers.sunset, &mapper), "M360,100L360,40");
        assert_eq!(line_path(&geometry.markers.horizon, &mapper), "M0,100L480,100");
    }

    #[test]
    fn test_daylight_area_path() {
        let (geometry, mapper) = canonical();
        assert_eq!(
            area_path(&geometry.segments.daylight, &mapper),
            "M120,100C120,100,200,40.00000000000001,240,40\
             C280.00000000000006,40.00000000000001,360,100,360,100\
             L360,100C360,100,280,100,240,100C200,100,120,100,120,100Z"
        );
    }

    #[test]
    fn test_area_path_structure() {
        let (geometry, mapper) = canonical();

        for segment in geometry.segments.as_array() {
            let d = area_path(&segment, &mapper);
            let first = mapper.project(segment.first());
            let last = mapper.project(segment.last());

            assert!(d.starts_with(&format!("M{},{}C", first.x, first.y)), "{d}");
            assert!(d.contains(&format!("L{},100C", last.x)), "{d}");
            assert!(d.ends_with('Z'), "{d}");
            assert_eq!(d.matches('C').count(), 4, "{d}");
            assert!(!d.contains("NaN") && !d.contains("inf"), "{d}");
        }
    }

    #[test]
    fn test_area_upper_edge_follows_curve() {
        let (geometry, mapper) = canonical();
        let upper = geometry
            .segments
            .daylight
            .points()
            .map(|point| mapper.project(point));

        let mut expected = String::new();
        write_curve(&mut expected, &upper).unwrap();

        let d = area_path(&geometry.segments.daylight, &mapper);
        assert!(d.starts_with(&expected), "{d}");
    }

    #[test]
    fn test_collapsed_area_is_finite() {
        let collapsed = CurveSegment::new(
            Phase::Day,
            [
                Point::new(Instant::from_millis(12 * HOUR), 0.0),
                Point::new(Instant::from_millis(12 * HOUR), 100.0),
                Point::new(Instant::from_millis(12 * HOUR), 0.0),
            ],
        );
        let (_, mapper) = canonical();
        let d = area_path(&collapsed, &mapper);
        assert!(d.starts_with("M240,100C"), "{d}");
        assert!(d.ends_with('Z'));
        assert!(!d.contains("NaN") && !d.contains("inf"), "{d}");
    }
}
