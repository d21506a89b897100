//! Longitude samples returned by the service, and the sampling contract behind them.
//!
//! The service walks the requested interval from `start` (inclusive) to `end` (exclusive),
//! one sample per hour when the interval is shorter than a day, one per day otherwise.
//! The client never enforces this; [`sampling_step`] and [`expected_len`] only describe it.

use hifitime::Duration;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{FULL_CIRCLE, SERVICE_TIME_ZONE},
    date::{DateRangeRequest, HoroDateTime},
    horolong_errors::Result,
};

/// One longitude sample, in degrees, at a time zone qualified instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongResponser {
    pub date: HoroDateTime,
    pub long: f64,
}

impl LongResponser {
    pub fn new(date: HoroDateTime, long: f64) -> Self {
        LongResponser { date, long }
    }

    /// `long` reduced into `[0, 360)`.
    pub fn normalized_long(&self) -> f64 {
        let reduced = self.long.rem_euclid(FULL_CIRCLE);
        // rem_euclid may round up to exactly 360 for tiny negative inputs
        if reduced >= FULL_CIRCLE {
            0.0
        } else {
            reduced
        }
    }
}

/// Interval between two consecutive samples for `request`.
///
/// Return
/// ----------
/// * One hour if the interval is shorter than one day, one day otherwise.
///   Fails if either end is not a valid date.
pub fn sampling_step(request: &DateRangeRequest) -> Result<Duration> {
    let span = span(request)?;
    if span < Duration::from_days(1.0) {
        Ok(Duration::from_hours(1.0))
    } else {
        Ok(Duration::from_days(1.0))
    }
}

/// Number of samples the service produces for `request`.
///
/// An empty or reversed interval yields zero (the service rejects it instead of answering).
pub fn expected_len(request: &DateRangeRequest) -> Result<usize> {
    let span = span(request)?;
    if span <= Duration::ZERO {
        return Ok(0);
    }
    let step = sampling_step(request)?;
    Ok((span.to_seconds() / step.to_seconds()).ceil() as usize)
}

fn span(request: &DateRangeRequest) -> Result<Duration> {
    let start = request.start.to_epoch(SERVICE_TIME_ZONE)?;
    let end = request.end.to_epoch(SERVICE_TIME_ZONE)?;
    Ok(end - start)
}
