//! Time-related calculations for the day arc.
//!
//! This module provides the median instant used to place curve apexes and, with the
//! `chrono` feature, resolution of local calendar day boundaries.

use crate::types::Instant;
#[cfg(feature = "chrono")]
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Duration, NaiveDate, TimeZone};

/// Local-time probe step used to skip over a DST gap at midnight.
#[cfg(feature = "chrono")]
const GAP_PROBE_MINUTES: i64 = 15;

/// Number of probes; covers gaps of up to one full day.
#[cfg(feature = "chrono")]
const GAP_PROBE_LIMIT: i64 = 24 * 60 / GAP_PROBE_MINUTES;

/// Computes the instant halfway between `a` and `b`.
///
/// Returns `a + floor((b - a) / 2)`, so the result rounds toward `a` when `a < b` and the
/// millisecond distance is odd. Defined for every pair, including `a == b` and `a > b`,
/// without overflow.
///
/// # Example
/// ```
/// # use daylight_arc::{time::median, Instant};
/// let a = Instant::from_millis(0);
/// let b = Instant::from_millis(21_600_000); // 06:00
/// assert_eq!(median(a, b).millis(), 10_800_000); // 03:00
///
/// assert_eq!(median(Instant::from_millis(10), Instant::from_millis(13)).millis(), 11);
/// assert_eq!(median(a, a), a);
/// ```
#[must_use]
pub fn median(a: Instant, b: Instant) -> Instant {
    let a_wide = i128::from(a.millis());
    let half = (i128::from(b.millis()) - a_wide).div_euclid(2);
    // Lies between a and b, so it always fits back into i64
    Instant::from_millis((a_wide + half) as i64)
}

/// Resolves the local calendar day containing `datetime`.
///
/// Returns `(start, end)` where `start` is the first existing local instant of the day
/// (local midnight, or the first instant after a DST gap that swallows midnight) and `end`
/// is one millisecond before the following day starts.
///
/// # Errors
/// Returns `InvalidDateTime` if the day or its successor cannot be represented.
#[cfg(feature = "chrono")]
pub fn local_day_bounds<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Result<(Instant, Instant)> {
    let tz = datetime.timezone();
    let date = datetime.date_naive();
    let next_date = date
        .succ_opt()
        .ok_or(Error::invalid_datetime("day after the current date is out of range"))?;

    let start = first_local_instant(&tz, date)?;
    let next_start = first_local_instant(&tz, next_date)?;
    Ok((start, next_start.offset_millis(-1)))
}

#[cfg(feature = "chrono")]
fn first_local_instant<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Result<Instant> {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or(Error::invalid_datetime("local midnight is not representable"))?;

    (0..=GAP_PROBE_LIMIT)
        .find_map(|step| {
            let local = midnight.checked_add_signed(Duration::minutes(step * GAP_PROBE_MINUTES))?;
            tz.from_local_datetime(&local).earliest()
        })
        .map(Instant::from)
        .ok_or(Error::invalid_datetime("local day has no valid start"))
}
