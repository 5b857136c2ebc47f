//! Basic day arc computation example.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use daylight_arc::{ArcFrame, DayWindow, FrameInput, Instant, Viewport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: current time with a fixed offset (Vienna, summer time)
    let now_fixed = "2023-06-21T15:00:00+02:00".parse::<DateTime<FixedOffset>>()?;

    // Example 2: the same moment in UTC
    let now_utc = Utc.with_ymd_and_hms(2023, 6, 21, 13, 0, 0).unwrap();

    // Sunrise/sunset as delivered by a weather service (Unix seconds)
    let sunrise = Instant::from_unix_seconds(1_687_316_100); // 04:55 local
    let sunset = Instant::from_unix_seconds(1_687_374_060); // 21:01 local

    let viewport = Viewport::new(480.0, 200.0)?;

    let frame_fixed = ArcFrame::compute(&FrameInput {
        window: DayWindow::for_local_day(&now_fixed, sunrise, sunset)?,
        current: now_fixed.into(),
        viewport,
    });

    println!("Day arc for Vienna on June 21, 2023 at 15:00 local time:");
    println!("Anchors:");
    for anchor in frame_fixed.anchors() {
        let at = anchor
            .at()
            .to_utc()
            .map(|utc| utc.with_timezone(now_fixed.offset()).format("%H:%M:%S").to_string())
            .unwrap_or_default();
        println!("  {at}  {:>6.1}", anchor.value());
    }

    let indicator = frame_fixed.indicator();
    println!("\nIndicator:");
    println!("  Elevation: {:.2}", indicator.elevation());
    println!(
        "  Position: ({:.1}, {:.1})",
        indicator.position().x,
        indicator.position().y
    );
    println!("  Phase: {:?}", indicator.phase());

    // A UTC day has different boundaries, so the same moment lands elsewhere on the arc
    match DayWindow::for_local_day(&now_utc, sunrise, sunset) {
        Ok(window) => {
            let frame_utc = ArcFrame::compute(&FrameInput {
                window,
                current: now_utc.into(),
                viewport,
            });
            println!(
                "\nSame moment on the UTC day: elevation {:.2}",
                frame_utc.indicator().elevation()
            );
        }
        Err(e) => println!("\nUTC day rejected: {e}"),
    }

    let paths = frame_fixed.paths();
    println!("\nDaylight area path:\n  {}", paths.daylight);
    println!("Sunrise marker path:\n  {}", paths.sunrise);

    Ok(())
}
