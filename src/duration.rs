//! Remaining-time formatting.
//!
//! Turns the duration remaining on the route into the countdown line
//! ("Time: 1 hr 12 min ") and the estimated arrival line
//! ("Arrival: 03:45 pm") shown on the heads-up display.

use chrono::{NaiveDateTime, TimeDelta};

use crate::config::TimeFormat;
use crate::error::{HudError, DURATION_ILLEGAL_ARGUMENT};

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Residual seconds at or above this count round the minutes up.
const ROUND_UP_SECONDS: i64 = 30;

const DAYS: &str = " days ";
const HOUR: &str = " hr ";
const MINUTE: &str = " min ";
const SECONDS: &str = " seconds";

/// Days, hours, minutes and residual seconds of a whole-second duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Breakdown {
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl Breakdown {
    fn of(total: i64) -> Self {
        let days = total / SECONDS_PER_DAY;
        let rest = total % SECONDS_PER_DAY;
        let hours = rest / SECONDS_PER_HOUR;
        let rest = rest % SECONDS_PER_HOUR;
        Breakdown {
            days,
            hours,
            minutes: rest / SECONDS_PER_MINUTE,
            seconds: rest % SECONDS_PER_MINUTE,
        }
    }
}

/// Format the remaining route duration as a countdown.
///
/// Seconds are only shown when the duration is under half a minute;
/// otherwise the minutes are rounded up from 30 residual seconds. The
/// round-up does not carry into hours, so 3599 s reads "60 min ".
pub fn format_remaining(duration_s: f64) -> Result<String, HudError> {
    let total = whole_seconds(duration_s)?;
    let mut parts = Breakdown::of(total);
    if parts.seconds >= ROUND_UP_SECONDS {
        parts.minutes += 1;
    }

    let mut text = String::from("Time: ");
    if parts.days != 0 {
        text.push_str(&format!("{}{DAYS}", parts.days));
    }
    if parts.hours != 0 {
        text.push_str(&format!("{}{HOUR}", parts.hours));
    }
    if parts.minutes != 0 {
        text.push_str(&format!("{}{MINUTE}", parts.minutes));
    }
    if parts.days == 0 && parts.hours == 0 && parts.minutes == 0 {
        text.push_str(&format!("{}{SECONDS}", parts.seconds));
    }
    Ok(text)
}

/// Format the wall-clock arrival time, `now` plus the remaining duration.
///
/// `now` is the local wall-clock time; fractional seconds of the
/// duration are dropped before adding.
pub fn format_arrival(
    duration_s: f64,
    now: NaiveDateTime,
    format: TimeFormat,
) -> Result<String, HudError> {
    let total = whole_seconds(duration_s)?;
    let arrival = TimeDelta::try_seconds(total)
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or(HudError::ArrivalOutOfRange)?;
    Ok(format!("Arrival: {}", arrival.format(format.pattern())))
}

fn whole_seconds(duration_s: f64) -> Result<i64, HudError> {
    if !duration_s.is_finite() || duration_s < 0.0 {
        return Err(HudError::IllegalArgument(DURATION_ILLEGAL_ARGUMENT));
    }
    Ok(duration_s as i64)
}
