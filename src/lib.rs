//! # Daylight Arc
//!
//! Geometry engine for a day/night elevation chart: a stylized arc that dips below the
//! horizon during the night, rises through sunrise, peaks at midday and sets again.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Given the boundaries of a local day plus its sunrise and sunset, the crate builds:
//! - seven **anchors** on a fixed value scale (`LOW` = −100, horizon = 0, `HIGH` = 100),
//! - three **filled segments** (night, day, night) and the straight **marker lines**,
//! - a piecewise-linear **elevation** value for any instant, used to place a
//!   current-time indicator,
//! - linear **axis maps** from (time, value) to pixels for a given viewport,
//! - SVG **path data** (centripetal Catmull-Rom areas) and **label positions**.
//!
//! Everything is a pure function of its inputs. Nothing is cached and nothing is mutated in
//! place; recompute a frame whenever the day, the current instant or the viewport changes.
//!
//! ## Feature Flags
//!
//! - `std` (default): native math and `String` path helpers
//! - `chrono` (default): resolve local day boundaries from a `DateTime<Tz>`
//! - `libm`: pure Rust math for `no_std` environments
//! - `serde`: `Serialize`/`Deserialize` for the plain data types
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! daylight-arc = "0.1"
//!
//! # no_std, pure numeric API
//! daylight-arc = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### From a local date/time (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{DateTime, FixedOffset};
//! use daylight_arc::{ArcFrame, DayWindow, FrameInput, Instant, Viewport};
//!
//! let now = "2024-06-21T15:30:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! // Sunrise/sunset as delivered by a weather service, in Unix seconds
//! let sunrise = Instant::from_unix_seconds(1_718_938_500);
//! let sunset = Instant::from_unix_seconds(1_718_996_400);
//!
//! let frame = ArcFrame::compute(&FrameInput {
//!     window: DayWindow::for_local_day(&now, sunrise, sunset).unwrap(),
//!     current: Instant::from(now),
//!     viewport: Viewport::new(480.0, 200.0).unwrap(),
//! });
//!
//! let indicator = frame.indicator();
//! println!("Elevation: {:.1}", indicator.elevation());
//! println!("Indicator at ({:.1}, {:.1})", indicator.position().x, indicator.position().y);
//! # }
//! ```
//!
//! ### Numeric API
//! ```rust
//! use daylight_arc::{build_anchors, build_segments, elevation_at, AxisMapper, DayWindow,
//!     Instant, Viewport};
//!
//! const HOUR: i64 = 3_600_000;
//! let window = DayWindow::new(
//!     Instant::from_millis(0),
//!     Instant::from_millis(6 * HOUR),
//!     Instant::from_millis(18 * HOUR),
//!     Instant::from_millis(24 * HOUR),
//! )
//! .unwrap();
//!
//! let anchors = build_anchors(&window);
//! let geometry = build_segments(&anchors);
//! let mapper = AxisMapper::new(&window, &Viewport::new(480.0, 200.0).unwrap());
//!
//! assert_eq!(elevation_at(&anchors, Instant::from_millis(9 * HOUR)), 50.0);
//! let apex = mapper.project(geometry.segments.daylight.points()[1]);
//! assert_eq!((apex.x, apex.y), (240.0, 40.0));
//! ```
//!
//! ## Coordinate System
//!
//! - **Time axis**: the day window `[start, end]` maps onto `[0, width]`, left to right
//! - **Value axis**: `[LOW, HIGH]` maps onto `[height − bottom margin, top margin]`, so
//!   higher values are drawn higher
//! - **Instants**: milliseconds since the Unix epoch

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact pixel and anchor values in tests
)]

// Public API exports
pub use crate::anchors::{Anchors, build_anchors};
pub use crate::axis::AxisMapper;
pub use crate::elevation::elevation_at;
pub use crate::error::{Error, Result};
pub use crate::frame::{ArcFrame, FrameInput};
#[cfg(feature = "std")]
pub use crate::frame::ArcPaths;
pub use crate::layout::Indicator;
pub use crate::segments::{ArcGeometry, CurveSegment, Phase, build_segments};
pub use crate::types::{
    Anchor, DayWindow, HIGH, HORIZON, Instant, LOW, Margins, PixelPoint, Point, TextExtent,
    Viewport,
};

// Geometry modules
pub mod anchors;
pub mod elevation;
pub mod segments;

// Rendering modules
pub mod axis;
pub mod frame;
pub mod layout;
pub mod path;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
