use chrono::{DateTime, Local, TimeZone, Utc};
use std::sync::Arc;

/// A source of the current wall-clock time.
///
/// This abstraction allows you to plug in the real system clock, or a fixed
/// time source in tests. The time zone `Tz` is generic so that callers decide
/// which hour-of-day a gate like [`accept_ticket`] is evaluated in.
///
/// # Example
///
/// ```
/// use chrono::{DateTime, TimeZone, Utc};
/// use kata::Clock;
///
/// struct Noon;
/// impl Clock<Utc> for Noon {
///     fn now(&self) -> DateTime<Utc> {
///         Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap()
///     }
/// }
///
/// assert_eq!(Noon.now().to_rfc3339(), "2024-01-03T12:00:00+00:00");
/// ```
///
/// [`accept_ticket`]: crate::accept_ticket
pub trait Clock<Tz: TimeZone> {
    /// Returns the current time.
    fn now(&self) -> DateTime<Tz>;
}

impl<Tz: TimeZone, C: Clock<Tz> + ?Sized> Clock<Tz> for &C {
    fn now(&self) -> DateTime<Tz> {
        (**self).now()
    }
}

impl<Tz: TimeZone, C: Clock<Tz> + ?Sized> Clock<Tz> for Arc<C> {
    fn now(&self) -> DateTime<Tz> {
        (**self).now()
    }
}

/// The host's clock, in the host's local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock<Local> for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// The host's clock, in UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct UtcClock;

impl Clock<Utc> for UtcClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Clone, Debug)]
pub struct FixedClock<Tz: TimeZone> {
    at: DateTime<Tz>,
}

impl<Tz: TimeZone> FixedClock<Tz> {
    pub const fn new(at: DateTime<Tz>) -> Self {
        Self { at }
    }
}

impl<Tz: TimeZone> Clock<Tz> for FixedClock<Tz> {
    fn now(&self) -> DateTime<Tz> {
        self.at.clone()
    }
}
