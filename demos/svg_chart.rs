//! Render a complete sunrise/sunset chart as an SVG document.
//!
//! ```text
//! cargo run --example svg_chart > arc.svg
//! ```

use chrono::{DateTime, TimeZone};
use chrono_tz::{Europe::Vienna, Tz};
use daylight_arc::{ArcFrame, DayWindow, FrameInput, Instant, TextExtent, Viewport};
use std::fmt::Write;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 200.0;

/// Rough text metrics; a browser would measure the rendered label instead.
fn measure(text: &str, font_px: f64) -> TextExtent {
    TextExtent::new(text.chars().count() as f64 * font_px * 0.6, font_px)
}

fn clock(instant: Instant, tz: &Tz) -> String {
    instant.to_utc().map_or_else(
        || "--:--".to_string(),
        |utc| utc.with_timezone(tz).format("%I:%M %p").to_string(),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let now: DateTime<Tz> = Vienna.with_ymd_and_hms(2024, 6, 21, 15, 30, 0).unwrap();
    // Sunrise/sunset as a weather service reports them, in Unix seconds
    let sunrise = Instant::from_unix_seconds(1_718_938_500);
    let sunset = Instant::from_unix_seconds(1_718_996_400);

    let frame = ArcFrame::compute(&FrameInput {
        window: DayWindow::for_local_day(&now, sunrise, sunset)?,
        current: Instant::from(now),
        viewport: Viewport::new(WIDTH, HEIGHT)?,
    });
    let paths = frame.paths();

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" font-family="sans-serif">"#
    )?;
    writeln!(svg, r##"  <path d="{}" fill="#1e3a8a"/>"##, paths.before_sunrise)?;
    writeln!(svg, r##"  <path d="{}" fill="#93c5fd"/>"##, paths.daylight)?;
    writeln!(svg, r##"  <path d="{}" fill="#1e3a8a"/>"##, paths.after_sunset)?;
    for line in [&paths.sunrise, &paths.sunset, &paths.horizon] {
        writeln!(
            svg,
            r##"  <path d="{line}" stroke="#c2c2c2" stroke-width="2" stroke-dasharray="4 4" fill="none"/>"##
        )?;
    }

    let markers = [
        ("Sunrise", frame.anchors().sunrise().at()),
        ("Sunset", frame.anchors().sunset().at()),
    ];
    for (caption, at) in markers {
        let time = clock(at, &now.timezone());
        let time_extent = measure(&time, 16.0);
        let caption_extent = measure(caption, 12.0);
        let labels = if caption == "Sunrise" {
            frame.sunrise_labels(time_extent, caption_extent)
        } else {
            frame.sunset_labels(time_extent, caption_extent)
        };

        writeln!(svg, r#"  <g transform="translate(0,{})">"#, -labels.lift)?;
        writeln!(
            svg,
            r##"    <text x="{}" y="{}" font-size="12" fill="#c2c2c2">{caption}</text>"##,
            labels.caption.x, labels.caption.y
        )?;
        writeln!(
            svg,
            r##"    <text x="{}" y="{}" font-size="16" fill="#c3c3c3">{time}</text>"##,
            labels.time.x, labels.time.y
        )?;
        writeln!(svg, "  </g>")?;
    }

    let horizon = frame.horizon_label(measure("Horizon", 12.0));
    writeln!(
        svg,
        r##"  <text x="{}" y="{}" font-size="12" fill="#c2c2c2">Horizon</text>"##,
        horizon.x, horizon.y
    )?;

    let indicator = frame.indicator().position();
    writeln!(
        svg,
        r##"  <circle cx="{}" cy="{}" r="6" fill="#f1f5f9"/>"##,
        indicator.x, indicator.y
    )?;
    writeln!(svg, "</svg>")?;

    print!("{svg}");
    eprintln!(
        "{}: elevation {:.1} ({:?})",
        now.format("%Y-%m-%d %H:%M %Z"),
        frame.indicator().elevation(),
        frame.indicator().phase()
    );
    Ok(())
}
