//! Breakpoint construction for the elevation curve.
//!
//! A [`DayWindow`] is turned into seven anchors: the day boundaries, sunrise and sunset sit on
//! the horizon, the midpoint of each night stretch dips to [`LOW`] and the midpoint between
//! sunrise and sunset peaks at [`HIGH`].

use crate::time::median;
use crate::types::{Anchor, DayWindow, HIGH, HORIZON, Instant, LOW};

/// Number of anchors derived from one day window.
pub const ANCHOR_COUNT: usize = 7;

/// The ordered anchor sequence of one day window.
///
/// Anchors are strictly increasing in time whenever the window is strictly ordered. Equal
/// window instants produce anchors sharing the same instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors([Anchor; ANCHOR_COUNT]);

impl Anchors {
    /// Wraps an explicit anchor sequence.
    ///
    /// Mainly useful for tests and for callers that build custom curves; the engine itself
    /// goes through [`build_anchors`].
    #[must_use]
    pub const fn from_array(anchors: [Anchor; ANCHOR_COUNT]) -> Self {
        Self(anchors)
    }

    /// Gets all anchors in order.
    #[must_use]
    pub const fn as_array(&self) -> &[Anchor; ANCHOR_COUNT] {
        &self.0
    }

    /// Iterates over the anchors in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Anchor> {
        self.0.iter()
    }

    /// Gets the anchor at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Anchor> {
        self.0.get(index).copied()
    }

    /// A0: start of the day, on the horizon.
    #[must_use]
    pub const fn start(&self) -> Anchor {
        self.0[0]
    }

    /// A1: lowest point of the night before sunrise.
    #[must_use]
    pub const fn morning_trough(&self) -> Anchor {
        self.0[1]
    }

    /// A2: sunrise, on the horizon.
    #[must_use]
    pub const fn sunrise(&self) -> Anchor {
        self.0[2]
    }

    /// A3: midday apex.
    #[must_use]
    pub const fn apex(&self) -> Anchor {
        self.0[3]
    }

    /// A4: sunset, on the horizon.
    #[must_use]
    pub const fn sunset(&self) -> Anchor {
        self.0[4]
    }

    /// A5: lowest point of the night after sunset.
    #[must_use]
    pub const fn evening_trough(&self) -> Anchor {
        self.0[5]
    }

    /// A6: end of the day, on the horizon.
    #[must_use]
    pub const fn end(&self) -> Anchor {
        self.0[6]
    }

    /// Checks whether anchor instants never decrease.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.0.windows(2).all(|pair| pair[0].at() <= pair[1].at())
    }
}

impl<'a> IntoIterator for &'a Anchors {
    type Item = &'a Anchor;
    type IntoIter = core::slice::Iter<'a, Anchor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Derives the seven anchors of a day window.
///
/// The window ordering is not validated. An unordered window yields a non-monotonic
/// sequence rather than an error; it is logged at debug level.
///
/// # Example
/// ```
/// # use daylight_arc::{build_anchors, DayWindow, Instant};
/// const HOUR: i64 = 3_600_000;
/// let window = DayWindow::new(
///     Instant::from_millis(0),
///     Instant::from_millis(6 * HOUR),
///     Instant::from_millis(18 * HOUR),
///     Instant::from_millis(24 * HOUR),
/// )
/// .unwrap();
///
/// let anchors = build_anchors(&window);
/// assert_eq!(anchors.morning_trough().at().millis(), 3 * HOUR);
/// assert_eq!(anchors.apex().at().millis(), 12 * HOUR);
/// assert_eq!(anchors.apex().value(), 100.0);
/// assert_eq!(anchors.evening_trough().value(), -100.0);
/// ```
#[must_use]
pub fn build_anchors(window: &DayWindow) -> Anchors {
    if !window.is_ordered() {
        log::debug!(
            "day window out of order (start={}, sunrise={}, sunset={}, end={}); curve will not be monotonic",
            window.start().millis(),
            window.sunrise().millis(),
            window.sunset().millis(),
            window.end().millis()
        );
    }

    let on_horizon = |at: Instant| Anchor::new(at, HORIZON);

    Anchors([
        on_horizon(window.start()),
        Anchor::new(median(window.start(), window.sunrise()), LOW),
        on_horizon(window.sunrise()),
        Anchor::new(median(window.sunrise(), window.sunset()), HIGH),
        on_horizon(window.sunset()),
        Anchor::new(median(window.sunset(), window.end()), LOW),
        on_horizon(window.end()),
    ])
}
