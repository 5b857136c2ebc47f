//! Example demonstrating usage without std/chrono dependencies.
//!
//! Only the numeric API is used: instants are plain epoch milliseconds and path data goes
//! into a fixed stack buffer, so the same calls work on targets without an allocator.

use core::fmt::{self, Write};
use daylight_arc::{
    AxisMapper, DayWindow, Instant, Margins, Viewport, build_anchors, build_segments, elevation_at,
    layout::Indicator, path,
};

/// Fixed-capacity text buffer implementing `fmt::Write`.
struct StackBuffer<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> StackBuffer<N> {
    const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or("")
    }
}

impl<const N: usize> Write for StackBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > N {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

fn main() {
    // 2024-06-21 in Vienna (UTC+2), converted by the caller
    let start = Instant::from_millis(1_718_920_800_000);
    let window = DayWindow::new(
        start,
        start.offset_millis(17_700_000), // 04:55
        start.offset_millis(75_600_000), // 21:00
        start.offset_millis(86_399_999), // 23:59:59.999
    )
    .expect("Valid day window");

    println!("Day arc without std/chrono dependencies\n");

    let anchors = build_anchors(&window);
    println!("Anchors (minutes since local midnight, value):");
    for anchor in &anchors {
        println!(
            "  {:>7.1}  {:>6.1}",
            (anchor.at().millis() - start.millis()) as f64 / 60_000.0,
            anchor.value()
        );
    }

    // Elevation over the day, every three hours
    println!("\nElevation:");
    for hour in (0..=24).step_by(3) {
        let t = start.offset_millis(hour * 3_600_000);
        println!("  {hour:02}:00  {:>7.2}", elevation_at(&anchors, t));
    }

    // A small display with tight margins
    let margins = Margins::new(4.0, 4.0).expect("Valid margins");
    let viewport = Viewport::with_margins(128.0, 64.0, margins).expect("Valid viewport");
    let mapper = AxisMapper::new(&window, &viewport);
    let geometry = build_segments(&anchors);

    let mut buffer = StackBuffer::<1024>::new();
    path::write_area(&mut buffer, &geometry.segments.daylight, &mapper)
        .expect("Buffer large enough");
    println!(
        "\nDaylight area ({} bytes):\n  {}",
        buffer.as_str().len(),
        buffer.as_str()
    );

    let now = start.offset_millis(15 * 3_600_000);
    let indicator = Indicator::locate(&window, &anchors, &mapper, now);
    println!(
        "\nIndicator at 15:00: ({:.1}, {:.1}), elevation {:.1}, {:?}",
        indicator.position().x,
        indicator.position().y,
        indicator.elevation(),
        indicator.phase()
    );
}
