//! # Calendar values exchanged with the longitude service
//!
//! - [`DateValue`]: a local civil date and time, without any time zone.
//! - [`DateRangeRequest`]: the `{start, end}` pair posted to every route.
//! - [`HoroDateTime`]: a civil date and time qualified by its time zone offset,
//!   as returned by the service.
//!
//! None of these types validate their fields on construction. The service owns the
//! validation; [`DateRangeRequest::validate`] replays the same checks locally for callers
//! who want to fail before the request leaves the process.

use std::{fmt, str::FromStr};

use hifitime::{Epoch, TimeScale, Unit};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{MAX_TIME_ZONE, MIN_YEAR, SERVICE_TIME_ZONE},
    horolong_errors::{HoroLongError, Result},
};

/// A civil date and time. The year is expected to be at least 1900.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateValue {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateValue {
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        DateValue {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Interpret this value as the local time of a zone `tz` hours east of Greenwich.
    ///
    /// Arguments
    /// -----------------
    /// * `tz`: time zone offset in hours, east positive, within [-12, 12].
    ///
    /// Return
    /// ----------
    /// * The absolute [`Epoch`] (UTC time scale) matching this local time, or
    ///   [`HoroLongError::InvalidDate`] / [`HoroLongError::InvalidTimeZone`].
    pub fn to_epoch(&self, tz: f64) -> Result<Epoch> {
        check_time_zone(tz)?;
        self.check_clock()?;
        let local = Epoch::maybe_from_gregorian(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            0,
            TimeScale::UTC,
        )
        .map_err(|e| HoroLongError::InvalidDate(format!("{self}: {e}")))?;
        Ok(local - Unit::Hour * tz)
    }

    /// hifitime accepts 24:00:00 and leap seconds, the service does not.
    fn check_clock(&self) -> Result<()> {
        if self.hour > 23 || self.minute > 59 || self.second > 59 {
            return Err(HoroLongError::InvalidDate(format!(
                "{self}: time must be within 00:00:00 and 23:59:59"
            )));
        }
        Ok(())
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD HH:MM:SS`.
///
/// Minutes and seconds may be omitted from the time part. Only the shape is checked here,
/// `2021-02-30` parses fine.
impl FromStr for DateValue {
    type Err = HoroLongError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |why: &str| HoroLongError::InvalidDate(format!("{s}: {why}"));

        let s_trim = s.trim();
        let (date_part, time_part) = match s_trim.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t.trim())),
            None => (s_trim, None),
        };

        let date: Vec<&str> = date_part.split('-').collect();
        if date.len() != 3 {
            return Err(invalid("expected YYYY-MM-DD"));
        }
        let year = i32::from_str(date[0]).map_err(|_| invalid("invalid year"))?;
        let month = u8::from_str(date[1]).map_err(|_| invalid("invalid month"))?;
        let day = u8::from_str(date[2]).map_err(|_| invalid("invalid day"))?;

        let mut hms = [0u8; 3];
        if let Some(time) = time_part {
            let fields: Vec<&str> = time.split(':').collect();
            if fields.is_empty() || fields.len() > 3 {
                return Err(invalid("expected HH:MM:SS"));
            }
            for (slot, field) in hms.iter_mut().zip(fields) {
                *slot = u8::from_str(field).map_err(|_| invalid("invalid time field"))?;
            }
        }

        Ok(DateValue::new(year, month, day, hms[0], hms[1], hms[2]))
    }
}

/// The interval posted to every route. `start` is expected to precede `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRangeRequest {
    pub start: DateValue,
    pub end: DateValue,
}

impl DateRangeRequest {
    pub fn new(start: DateValue, end: DateValue) -> Self {
        DateRangeRequest { start, end }
    }

    /// Replay locally the checks the service applies to an incoming range.
    ///
    /// Both ends are read in the service time zone ([`SERVICE_TIME_ZONE`]):
    /// - each year is at least [`MIN_YEAR`],
    /// - each end is a valid calendar date and time,
    /// - `start` is strictly before `end`.
    ///
    /// Return
    /// ----------
    /// * `Ok(())`, or the first violated check as [`HoroLongError::InvalidDate`]
    ///   or [`HoroLongError::InvalidRange`].
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("start", &self.start), ("end", &self.end)] {
            if value.year < MIN_YEAR {
                return Err(HoroLongError::InvalidDate(format!(
                    "{name} year {} is before {MIN_YEAR}",
                    value.year
                )));
            }
        }

        let start = self.start.to_epoch(SERVICE_TIME_ZONE)?;
        let end = self.end.to_epoch(SERVICE_TIME_ZONE)?;
        if end <= start {
            return Err(HoroLongError::InvalidRange(format!(
                "start {} must be before end {}",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

/// A civil date and time together with the offset of its time zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoroDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Hours, east positive, west negative
    pub tz: f64,
}

impl HoroDateTime {
    pub fn new(local: DateValue, tz: f64) -> Self {
        HoroDateTime {
            year: local.year,
            month: local.month,
            day: local.day,
            hour: local.hour,
            minute: local.minute,
            second: local.second,
            tz,
        }
    }

    /// The local civil part, dropping the time zone.
    pub fn local(&self) -> DateValue {
        DateValue::new(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// The absolute instant designated by this value.
    pub fn to_epoch(&self) -> Result<Epoch> {
        self.local().to_epoch(self.tz)
    }
}

impl fmt::Display for HoroDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} UTC{:+}", self.local(), self.tz)
    }
}

fn check_time_zone(tz: f64) -> Result<()> {
    if !(-MAX_TIME_ZONE..=MAX_TIME_ZONE).contains(&tz) {
        return Err(HoroLongError::InvalidTimeZone(tz));
    }
    Ok(())
}
