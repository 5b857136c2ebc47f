//! One-call computation of everything needed to draw the arc.

use crate::anchors::{Anchors, build_anchors};
use crate::axis::AxisMapper;
use crate::layout::{Indicator, MarkerLabels, place_horizon_label, place_marker_labels};
use crate::segments::{ArcGeometry, build_segments};
use crate::types::{DayWindow, Instant, PixelPoint, TextExtent, Viewport};

/// Inputs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameInput {
    /// Day boundaries with sunrise and sunset
    pub window: DayWindow,
    /// Instant shown by the indicator
    pub current: Instant,
    /// Drawing area
    pub viewport: Viewport,
}

/// Anchors, geometry, axis mapping and indicator for one [`FrameInput`].
///
/// A frame is immutable. When the viewport, the day window or the current instant changes,
/// compute a new one.
///
/// # Example
/// ```
/// # use daylight_arc::{ArcFrame, DayWindow, FrameInput, Instant, Viewport};
/// const HOUR: i64 = 3_600_000;
/// let input = FrameInput {
///     window: DayWindow::new(
///         Instant::from_millis(0),
///         Instant::from_millis(6 * HOUR),
///         Instant::from_millis(18 * HOUR),
///         Instant::from_millis(24 * HOUR),
///     )
///     .unwrap(),
///     current: Instant::from_millis(9 * HOUR),
///     viewport: Viewport::new(480.0, 200.0).unwrap(),
/// };
///
/// let frame = ArcFrame::compute(&input);
/// assert_eq!(frame.indicator().elevation(), 50.0);
/// assert_eq!(frame.anchors().apex().value(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcFrame {
    viewport: Viewport,
    anchors: Anchors,
    geometry: ArcGeometry,
    mapper: AxisMapper,
    indicator: Indicator,
}

impl ArcFrame {
    /// Computes a frame.
    #[must_use]
    pub fn compute(input: &FrameInput) -> Self {
        let anchors = build_anchors(&input.window);
        let geometry = build_segments(&anchors);
        let mapper = AxisMapper::new(&input.window, &input.viewport);
        let indicator = Indicator::locate(&input.window, &anchors, &mapper, input.current);

        log::trace!(
            "frame for {}..{} at {}: elevation {}",
            input.window.start().millis(),
            input.window.end().millis(),
            input.current.millis(),
            indicator.elevation()
        );

        Self {
            viewport: input.viewport,
            anchors,
            geometry,
            mapper,
            indicator,
        }
    }

    /// Gets the anchor sequence.
    #[must_use]
    pub const fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    /// Gets the control-point geometry.
    #[must_use]
    pub const fn geometry(&self) -> &ArcGeometry {
        &self.geometry
    }

    /// Gets the axis mapper for this frame's viewport.
    #[must_use]
    pub const fn mapper(&self) -> &AxisMapper {
        &self.mapper
    }

    /// Gets the current-time indicator.
    #[must_use]
    pub const fn indicator(&self) -> Indicator {
        self.indicator
    }

    /// Gets the viewport this frame was computed for.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Places the labels of the sunrise marker.
    #[must_use]
    pub fn sunrise_labels(&self, time: TextExtent, caption: TextExtent) -> MarkerLabels {
        place_marker_labels(&self.geometry.markers.sunrise, &self.mapper, time, caption)
    }

    /// Places the labels of the sunset marker.
    #[must_use]
    pub fn sunset_labels(&self, time: TextExtent, caption: TextExtent) -> MarkerLabels {
        place_marker_labels(&self.geometry.markers.sunset, &self.mapper, time, caption)
    }

    /// Places the horizon label.
    #[must_use]
    pub fn horizon_label(&self, extent: TextExtent) -> PixelPoint {
        place_horizon_label(&self.viewport, &self.mapper, extent)
    }

    /// Renders every path of the frame.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn paths(&self) -> ArcPaths {
        use crate::path::{area_path, line_path};

        let segments = &self.geometry.segments;
        let markers = &self.geometry.markers;
        ArcPaths {
            before_sunrise: area_path(&segments.before_sunrise, &self.mapper),
            daylight: area_path(&segments.daylight, &self.mapper),
            after_sunset: area_path(&segments.after_sunset, &self.mapper),
            sunrise: line_path(&markers.sunrise, &self.mapper),
            sunset: line_path(&markers.sunset, &self.mapper),
            horizon: line_path(&markers.horizon, &self.mapper),
        }
    }
}

/// SVG path data for every shape of a frame.
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcPaths {
    /// Filled night area before sunrise
    pub before_sunrise: String,
    /// Filled daylight area
    pub daylight: String,
    /// Filled night area after sunset
    pub after_sunset: String,
    /// Sunrise marker line
    pub sunrise: String,
    /// Sunset marker line
    pub sunset: String,
    /// Horizon line
    pub horizon: String,
}
