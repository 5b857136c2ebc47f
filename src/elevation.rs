//! Elevation interpolation along the anchor sequence.
//!
//! The elevation is piecewise linear between consecutive anchors, not the smoothed curve
//! drawn by [`crate::path`]. Within each bracket it is monotonic.

use crate::anchors::Anchors;
use crate::types::{Anchor, Instant};

/// The pair of consecutive anchors surrounding a query instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Index of the left anchor (0 to 5)
    pub index: usize,
    /// Left anchor (`left.at() ≤ query`)
    pub left: Anchor,
    /// Right anchor (`query ≤ right.at()`)
    pub right: Anchor,
}

impl Bracket {
    /// Checks whether both anchors share one instant.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.left.at() == self.right.at()
    }

    /// Interpolates linearly inside this bracket.
    ///
    /// Endpoint queries return the endpoint value exactly and a degenerate bracket returns
    /// the left value. Queries outside the bracket extrapolate along the same line.
    #[must_use]
    pub fn interpolate(&self, query: Instant) -> f64 {
        if self.is_degenerate() {
            log::trace!(
                "degenerate bracket {} at {}, using left value",
                self.index,
                self.left.at().millis()
            );
            return self.left.value();
        }
        if query == self.left.at() {
            return self.left.value();
        }
        if query == self.right.at() {
            return self.right.value();
        }

        let origin = i128::from(self.left.at().millis());
        let elapsed = (i128::from(query.millis()) - origin) as f64;
        let span = (i128::from(self.right.at().millis()) - origin) as f64;
        self.left.value() + (self.right.value() - self.left.value()) * (elapsed / span)
    }
}

/// Selects the earliest bracket with `left.at() ≤ query ≤ right.at()`.
///
/// Returns `None` when the query lies before the first anchor or after the last one.
///
/// # Example
/// ```
/// # use daylight_arc::{build_anchors, elevation::bracket, DayWindow, Instant};
/// const HOUR: i64 = 3_600_000;
/// let window = DayWindow::new(
///     Instant::from_millis(0),
///     Instant::from_millis(6 * HOUR),
///     Instant::from_millis(18 * HOUR),
///     Instant::from_millis(24 * HOUR),
/// )
/// .unwrap();
/// let anchors = build_anchors(&window);
///
/// // Sunrise closes bracket 1 before it opens bracket 2
/// let found = bracket(&anchors, Instant::from_millis(6 * HOUR)).unwrap();
/// assert_eq!(found.index, 1);
/// assert!(bracket(&anchors, Instant::from_millis(-1)).is_none());
/// ```
#[must_use]
pub fn bracket(anchors: &Anchors, query: Instant) -> Option<Bracket> {
    anchors
        .as_array()
        .windows(2)
        .enumerate()
        .find(|(_, pair)| pair[0].at() <= query && query <= pair[1].at())
        .map(|(index, pair)| Bracket {
            index,
            left: pair[0],
            right: pair[1],
        })
}

/// Computes the elevation value at `query`.
///
/// - Before the first anchor the first anchor's value is returned; after the last anchor,
///   the last anchor's value.
/// - Otherwise the earliest bracket containing the query is interpolated linearly. A query
///   equal to an anchor instant returns that anchor's value exactly.
/// - Non-monotonic anchors (an unordered day window) still get a bracketed, finite value.
///
/// The result stays within the anchor value range, `[LOW, HIGH]` for built anchors.
///
/// # Example
/// ```
/// # use daylight_arc::{build_anchors, elevation_at, DayWindow, Instant};
/// const HOUR: i64 = 3_600_000;
/// let window = DayWindow::new(
///     Instant::from_millis(0),
///     Instant::from_millis(6 * HOUR),
///     Instant::from_millis(18 * HOUR),
///     Instant::from_millis(24 * HOUR),
/// )
/// .unwrap();
/// let anchors = build_anchors(&window);
///
/// assert_eq!(elevation_at(&anchors, Instant::from_millis(12 * HOUR)), 100.0);
/// assert_eq!(elevation_at(&anchors, Instant::from_millis(9 * HOUR)), 50.0);
/// assert_eq!(elevation_at(&anchors, Instant::from_millis(3 * HOUR)), -100.0);
/// ```
#[must_use]
pub fn elevation_at(anchors: &Anchors, query: Instant) -> f64 {
    let first = anchors.start();
    let last = anchors.end();

    if query < first.at() {
        return first.value();
    }
    if query > last.at() {
        return last.value();
    }

    // A continuous chain from A0 to A6 crosses every instant in between, so an in-range
    // query always has a bracket even when the anchors are out of order.
    bracket(anchors, query).map_or(first.value(), |found| found.interpolate(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::build_anchors;
    use crate::types::{DayWindow, HIGH, LOW};

    const HOUR: i64 = 3_600_000;

    fn at(ms: i64) -> Instant {
        Instant::from_millis(ms)
    }

    fn anchors(start: i64, sunrise: i64, sunset: i64, end: i64) -> Anchors {
        build_anchors(&DayWindow::new_unchecked(
            at(start),
            at(sunrise),
            at(sunset),
            at(end),
        ))
    }

    #[test]
    fn test_canonical_day_values() {
        let a = anchors(0, 6 * HOUR, 18 * HOUR, 24 * HOUR);

        assert_eq!(elevation_at(&a, at(0)), 0.0);
        assert_eq!(elevation_at(&a, at(3 * HOUR)), LOW);
        assert_eq!(elevation_at(&a, at(6 * HOUR)), 0.0);
        assert_eq!(elevation_at(&a, at(9 * HOUR)), 50.0);
        assert_eq!(elevation_at(&a, at(12 * HOUR)), HIGH);
        assert_eq!(elevation_at(&a, at(15 * HOUR)), 50.0);
        assert_eq!(elevation_at(&a, at(18 * HOUR)), 0.0);
        assert_eq!(elevation_at(&a, at(21 * HOUR)), LOW);
        assert_eq!(elevation_at(&a, at(24 * HOUR)), 0.0);

        assert!((elevation_at(&a, at(HOUR)) - (-100.0 / 3.0)).abs() < 1e-9);
        assert!((elevation_at(&a, at(22 * HOUR + HOUR / 2)) - (-50.0)).abs() < 1e-9);
    }

    #[test]
    fn test_clamping_outside_window() {
        let a = anchors(0, 6 * HOUR, 18 * HOUR, 24 * HOUR);
        assert_eq!(elevation_at(&a, at(-1)), a.start().value());
        assert_eq!(elevation_at(&a, at(24 * HOUR + 1)), a.end().value());
        assert_eq!(elevation_at(&a, at(i64::MIN)), 0.0);
        assert_eq!(elevation_at(&a, at(i64::MAX)), 0.0);
    }

    #[test]
    fn test_anchor_instants_are_exact() {
        let a = anchors(1_000, 22_000_017, 64_999_993, 87_399_999);
        for anchor in &a {
            assert_eq!(elevation_at(&a, anchor.at()), anchor.value());
        }
    }

    #[test]
    fn test_tie_break_selects_earliest_bracket() {
        let a = anchors(0, 6 * HOUR, 18 * HOUR, 24 * HOUR);
        for (index, anchor) in a.iter().enumerate().skip(1) {
            let found = bracket(&a, anchor.at()).unwrap();
            assert_eq!(found.index, index - 1);
            assert_eq!(found.right, *anchor);
        }
        assert_eq!(bracket(&a, at(0)).unwrap().index, 0);
    }

    #[test]
    fn test_custom_anchor_chain() {
        // Uneven spacing and values that are not on the standard scale
        let a = Anchors::from_array([
            Anchor::new(at(0), 10.0),
            Anchor::new(at(1_000), -20.0),
            Anchor::new(at(1_000), 40.0),
            Anchor::new(at(5_000), 80.0),
            Anchor::new(at(6_000), 0.0),
            Anchor::new(at(10_000), -40.0),
            Anchor::new(at(10_000), 5.0),
        ]);

        assert_eq!(elevation_at(&a, at(500)), -5.0);
        // Shared instants resolve to the earliest bracket
        assert_eq!(elevation_at(&a, at(1_000)), -20.0);
        assert_eq!(elevation_at(&a, at(3_000)), 60.0);
        assert_eq!(elevation_at(&a, at(5_500)), 40.0);
        assert_eq!(elevation_at(&a, at(8_000)), -20.0);
        assert_eq!(elevation_at(&a, at(10_000)), -40.0);
        assert_eq!(elevation_at(&a, at(-1)), 10.0);
        assert_eq!(elevation_at(&a, at(10_001)), 5.0);
    }

    #[test]
    fn test_degenerate_daylight() {
        let a = anchors(0, 12 * HOUR, 12 * HOUR, 24 * HOUR);

        assert_eq!(elevation_at(&a, at(12 * HOUR)), 0.0);
        assert_eq!(elevation_at(&a, at(9 * HOUR)), -50.0);
        assert_eq!(elevation_at(&a, at(15 * HOUR)), -50.0);
        assert!(elevation_at(&a, at(12 * HOUR + 1)).is_finite());

        let degenerate = Bracket {
            index: 2,
            left: a.sunrise(),
            right: a.apex(),
        };
        assert!(degenerate.is_degenerate());
        assert_eq!(degenerate.interpolate(at(12 * HOUR)), 0.0);
    }

    #[test]
    fn test_fully_collapsed_window() {
        let a = anchors(5, 5, 5, 5);
        assert_eq!(elevation_at(&a, at(5)), 0.0);
        assert_eq!(elevation_at(&a, at(4)), 0.0);
        assert_eq!(elevation_at(&a, at(6)), 0.0);
    }

    #[test]
    fn test_monotonic_within_brackets_and_continuous() {
        let a = anchors(0, 5 * HOUR + 123, 19 * HOUR - 77, 24 * HOUR - 1);
        let points = a.as_array();

        for pair in points.windows(2) {
            let (left, right) = (pair[0], pair[1]);
            let rising = left.value() <= right.value();
            let step = ((right.at().millis() - left.at().millis()) / 97).max(1);

            let mut previous = elevation_at(&a, left.at());
            let mut t = left.at().millis();
            while t < right.at().millis() {
                t = (t + step).min(right.at().millis());
                let value = elevation_at(&a, at(t));
                if rising {
                    assert!(value >= previous, "not rising at {t}: {previous} -> {value}");
                } else {
                    assert!(value <= previous, "not falling at {t}: {previous} -> {value}");
                }
                assert!((LOW..=HIGH).contains(&value));
                previous = value;
            }
        }

        // No jump across shared endpoints
        for anchor in &points[1..6] {
            let before = elevation_at(&a, anchor.at().offset_millis(-1));
            let after = elevation_at(&a, anchor.at().offset_millis(1));
            assert!((before - anchor.value()).abs() < 0.01);
            assert!((after - anchor.value()).abs() < 0.01);
        }
    }

    #[test]
    fn test_unordered_anchors_stay_bracketed() {
        // Sunset before sunrise: A2 = 18h, A3 = 12h, A4 = 6h
        let a = anchors(0, 18 * HOUR, 6 * HOUR, 24 * HOUR);

        // Covered by the first bracket (0h..9h)
        assert!((elevation_at(&a, at(HOUR)) - (-100.0 / 9.0)).abs() < 1e-9);
        // Every instant still lands in some bracket and yields a value in range
        for hour in 0..=24 {
            let query = at(hour * HOUR);
            assert!(bracket(&a, query).is_some(), "hour {hour} not bracketed");
            let value = elevation_at(&a, query);
            assert!((LOW..=HIGH).contains(&value), "hour {hour}: {value}");
        }
    }
}
