//! Label placement and the current-time indicator.

use crate::anchors::Anchors;
use crate::axis::AxisMapper;
use crate::elevation::elevation_at;
use crate::segments::{MarkerLine, Phase};
use crate::types::{DayWindow, HORIZON, Instant, PixelPoint, TextExtent, Viewport};

/// Vertical lift applied to label groups so they clear the line they annotate.
pub const LABEL_LIFT_PX: f64 = 10.0;

/// Placement of the two labels attached to a sunrise or sunset marker.
///
/// Both positions are the top-left corner of the text box before the group lift is
/// applied; renderers translate the whole group by `(0, -lift)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerLabels {
    /// Event time, centered on the marker at its top end
    pub time: PixelPoint,
    /// Caption stacked directly above the time label
    pub caption: PixelPoint,
    /// Upward translation for the whole group
    pub lift: f64,
}

/// Places the time label and caption of a vertical marker.
///
/// # Example
/// ```
/// # use daylight_arc::{build_anchors, build_segments, AxisMapper, DayWindow, Instant,
/// #     TextExtent, Viewport};
/// # use daylight_arc::layout::place_marker_labels;
/// const HOUR: i64 = 3_600_000;
/// let window = DayWindow::new(
///     Instant::from_millis(0),
///     Instant::from_millis(6 * HOUR),
///     Instant::from_millis(18 * HOUR),
///     Instant::from_millis(24 * HOUR),
/// )
/// .unwrap();
/// let mapper = AxisMapper::new(&window, &Viewport::new(480.0, 200.0).unwrap());
/// let geometry = build_segments(&build_anchors(&window));
///
/// let labels = place_marker_labels(
///     &geometry.markers.sunrise,
///     &mapper,
///     TextExtent::new(40.0, 14.0),
///     TextExtent::new(50.0, 12.0),
/// );
/// assert_eq!((labels.time.x, labels.time.y), (100.0, 40.0));
/// assert_eq!((labels.caption.x, labels.caption.y), (95.0, 28.0));
/// ```
#[must_use]
pub fn place_marker_labels(
    marker: &MarkerLine,
    mapper: &AxisMapper,
    time: TextExtent,
    caption: TextExtent,
) -> MarkerLabels {
    let top = mapper.project(marker.last());
    MarkerLabels {
        time: PixelPoint::new(top.x - time.width / 2.0, top.y),
        caption: PixelPoint::new(top.x - caption.width / 2.0, top.y - caption.height),
        lift: LABEL_LIFT_PX,
    }
}

/// Places the horizon label flush with the right edge, just above the horizon line.
#[must_use]
pub fn place_horizon_label(
    viewport: &Viewport,
    mapper: &AxisMapper,
    extent: TextExtent,
) -> PixelPoint {
    PixelPoint::new(
        viewport.width() - extent.width,
        mapper.value_to_y(HORIZON) - LABEL_LIFT_PX,
    )
}

/// Where the current instant sits on the arc.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Indicator {
    at: Instant,
    elevation: f64,
    position: PixelPoint,
    phase: Phase,
}

impl Indicator {
    /// Locates `current` on the linear elevation curve and projects it to pixels.
    ///
    /// Instants outside the anchor range take the boundary elevation; their x still follows
    /// the time axis. The phase is [`Phase::Day`] from sunrise to sunset inclusive and
    /// [`Phase::Night`] everywhere else, including the horizon anchors at either end of the
    /// day.
    #[must_use]
    pub fn locate(
        window: &DayWindow,
        anchors: &Anchors,
        mapper: &AxisMapper,
        current: Instant,
    ) -> Self {
        let elevation = elevation_at(anchors, current);
        let phase = if window.is_daytime(current) {
            Phase::Day
        } else {
            Phase::Night
        };
        Self {
            at: current,
            elevation,
            position: PixelPoint::new(mapper.time_to_x(current), mapper.value_to_y(elevation)),
            phase,
        }
    }

    /// Gets the instant this indicator was located for.
    #[must_use]
    pub const fn at(&self) -> Instant {
        self.at
    }

    /// Gets the elevation value at that instant.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Gets the pixel position.
    #[must_use]
    pub const fn position(&self) -> PixelPoint {
        self.position
    }

    /// Gets whether the instant falls between sunrise and sunset.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }
}
