//! Time and randomness helpers shared across host contracts and adapters.

use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

thread_local! {
    static LAST_TIMESTAMP_MS: Cell<u64> = const { Cell::new(0) };
    #[cfg(not(target_arch = "wasm32"))]
    static RANDOM_STATE: Cell<u64> = const { Cell::new(0) };
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns a unix millisecond timestamp strictly greater than any previously returned one.
///
/// Used for identifiers derived from creation time (notifications, saved notes, uploads).
pub fn next_monotonic_timestamp_ms() -> u64 {
    let now = unix_time_ms_now();
    LAST_TIMESTAMP_MS.with(|last| {
        let next = now.max(last.get().saturating_add(1));
        last.set(next);
        next
    })
}

/// Returns a pseudo-random value in `[0, 1)`.
///
/// Uses `Math.random` in the browser and a time-seeded xorshift generator natively.
pub fn random_unit() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        RANDOM_STATE.with(|state| {
            let mut x = state.get();
            if x == 0 {
                x = unix_time_ms_now() | 1;
            }
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            state.set(x);
            (x >> 11) as f64 / (1u64 << 53) as f64
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Wall-clock reading broken into calendar fields.
pub struct LocalClock {
    /// Full year.
    pub year: i32,
    /// Month, 1-based.
    pub month: u32,
    /// Day of month, 1-based.
    pub day: u32,
    /// Day of week, `0` = Sunday.
    pub weekday: u32,
    /// Hour, 0..=23.
    pub hour: u32,
    /// Minute, 0..=59.
    pub minute: u32,
    /// Second, 0..=59.
    pub second: u32,
}

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl LocalClock {
    /// Builds a UTC reading from a unix millisecond timestamp.
    pub fn from_unix_ms_utc(ms: u64) -> Self {
        let secs = ms / 1000;
        let days = (secs / 86_400) as i64;
        let rem = secs % 86_400;
        let (year, month, day) = civil_from_days(days);
        Self {
            year,
            month,
            day,
            weekday: ((days + 4).rem_euclid(7)) as u32,
            hour: (rem / 3600) as u32,
            minute: ((rem % 3600) / 60) as u32,
            second: (rem % 60) as u32,
        }
    }

    /// `HH:MM`, zero padded.
    pub fn hh_mm(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// `HH:MM:SS`, zero padded.
    pub fn hh_mm_ss(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    /// Long date such as `Monday, April 17, 2023`.
    pub fn long_date(&self) -> String {
        let weekday = WEEKDAY_NAMES[(self.weekday % 7) as usize];
        let month = MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize];
        format!("{weekday}, {month} {}, {}", self.day, self.year)
    }

    /// English month name.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize]
    }

    /// English weekday name.
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[(self.weekday % 7) as usize]
    }
}

/// Returns the current local wall-clock reading.
///
/// Native builds have no timezone database and report UTC.
pub fn local_clock_now() -> LocalClock {
    local_clock_at(unix_time_ms_now())
}

/// Returns the local wall-clock reading for a unix millisecond timestamp.
///
/// Native builds have no timezone database and report UTC.
pub fn local_clock_at(ms: u64) -> LocalClock {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        date.set_time(ms as f64);
        LocalClock {
            year: date.get_full_year() as i32,
            month: date.get_month() + 1,
            day: date.get_date(),
            weekday: date.get_day(),
            hour: date.get_hours(),
            minute: date.get_minutes(),
            second: date.get_seconds(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        LocalClock::from_unix_ms_utc(ms)
    }
}

fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year as i32, month, day)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn monotonic_timestamps_strictly_increase() {
        let a = next_monotonic_timestamp_ms();
        let b = next_monotonic_timestamp_ms();
        assert!(b > a);
    }

    #[test]
    fn random_unit_stays_in_range() {
        for _ in 0..1000 {
            let value = random_unit();
            assert!((0.0..1.0).contains(&value), "value={value}");
        }
    }

    #[test]
    fn utc_clock_breaks_down_known_timestamp() {
        // 2023-04-17T09:05:07Z, a Monday.
        let clock = LocalClock::from_unix_ms_utc(1_681_722_307_000);
        assert_eq!(
            clock,
            LocalClock {
                year: 2023,
                month: 4,
                day: 17,
                weekday: 1,
                hour: 9,
                minute: 5,
                second: 7,
            }
        );
        assert_eq!(clock.hh_mm(), "09:05");
        assert_eq!(clock.hh_mm_ss(), "09:05:07");
        assert_eq!(clock.long_date(), "Monday, April 17, 2023");
    }

    #[test]
    fn epoch_is_thursday_first_of_january() {
        let clock = LocalClock::from_unix_ms_utc(0);
        assert_eq!((clock.year, clock.month, clock.day), (1970, 1, 1));
        assert_eq!(clock.weekday_name(), "Thursday");
    }
}
