use crate::Clock;
use chrono::{TimeZone, Timelike};
use core::ops::RangeInclusive;

/// Hours of the day (inclusive) during which tickets are accepted.
pub const OPEN_HOURS: RangeInclusive<u32> = 9..=17;

/// Accepts a ticket if the clock's current hour falls within [`OPEN_HOURS`].
///
/// The hour is read in the clock's own time zone. Everything from 09:00 up to
/// and including 17:59 is accepted.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub fn accept_ticket<Tz, C>(clock: &C) -> bool
where
    Tz: TimeZone,
    C: Clock<Tz> + ?Sized,
{
    let hour = clock.now().hour();
    let accepted = OPEN_HOURS.contains(&hour);

    #[cfg(feature = "tracing")]
    tracing::debug!(hour, accepted, "evaluated ticket window");

    accepted
}
