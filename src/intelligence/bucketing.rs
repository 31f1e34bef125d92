// ABOUTME: Calendar-aware day and week windows with an explicit week start convention
// ABOUTME: Local midnights are resolved in the caller's time zone, including across DST changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Temporal Bucketing
//!
//! Windows are closed intervals of epoch milliseconds: a window starts at local
//! midnight of its first day and ends 1 ms before local midnight of the day
//! after its last day. Days of 23 or 25 hours are therefore covered exactly.
//!
//! When a local midnight does not exist (a DST gap starting at 00:00), the
//! offset in effect before the gap is used, which lands on the first valid
//! instant after the gap. An ambiguous midnight resolves to its earlier instant.

use chrono::{
    DateTime, Datelike, Days, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeDelta, TimeZone, Weekday,
};
use purine_core::constants::calendar::DAYS_PER_WEEK;
use purine_core::models::Timestamped;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// First day of the week for weekly windows and weekday slots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    /// ISO convention: Monday is slot 0, Sunday is slot 6
    #[default]
    Monday,
    /// Sunday is slot 0, Saturday is slot 6
    Sunday,
}

impl WeekStart {
    /// First weekday of a week
    #[must_use]
    pub const fn first_day(self) -> Weekday {
        match self {
            Self::Monday => Weekday::Mon,
            Self::Sunday => Weekday::Sun,
        }
    }

    /// Slot (0..7) of `weekday` within a week
    #[must_use]
    pub fn slot(self, weekday: Weekday) -> usize {
        let days = match self {
            Self::Monday => weekday.num_days_from_monday(),
            Self::Sunday => weekday.num_days_from_sunday(),
        };
        days as usize
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monday => f.write_str("monday"),
            Self::Sunday => f.write_str("sunday"),
        }
    }
}

impl FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(Self::Monday),
            "sunday" | "sun" => Ok(Self::Sunday),
            other => Err(format!("unsupported week start: {other}")),
        }
    }
}

/// Closed interval of epoch milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    /// First instant in the window (inclusive)
    pub start_ms: i64,
    /// Last instant in the window (inclusive)
    pub end_ms: i64,
}

impl TimeWindow {
    /// True when `timestamp_ms` lies within the window, bounds included
    #[must_use]
    pub const fn contains(&self, timestamp_ms: i64) -> bool {
        self.start_ms <= timestamp_ms && timestamp_ms <= self.end_ms
    }
}

/// Window covering the local calendar day `date`
#[must_use]
pub fn day_window<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> TimeWindow {
    let window = TimeWindow {
        start_ms: local_midnight_ms(date, tz),
        end_ms: end_before(date.checked_add_days(Days::new(1)), tz),
    };
    debug!(%date, start_ms = window.start_ms, end_ms = window.end_ms, "Day window");
    window
}

/// Window covering the local calendar week that contains `date`
#[must_use]
pub fn week_window<Tz: TimeZone>(date: NaiveDate, week_start: WeekStart, tz: &Tz) -> TimeWindow {
    let first_day = week_first_day(date, week_start);
    let window = TimeWindow {
        start_ms: local_midnight_ms(first_day, tz),
        end_ms: end_before(first_day.checked_add_days(Days::new(DAYS_PER_WEEK as u64)), tz),
    };
    debug!(
        %date,
        %first_day,
        %week_start,
        start_ms = window.start_ms,
        end_ms = window.end_ms,
        "Week window"
    );
    window
}

/// First calendar day of the week containing `date`
#[must_use]
pub fn week_first_day(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let offset = week_start.slot(date.weekday()) as u64;
    date.checked_sub_days(Days::new(offset))
        .unwrap_or(NaiveDate::MIN)
}

/// Entries whose timestamp falls inside `window`, in input order
#[must_use]
pub fn filter_by_window<T: Timestamped>(entries: &[T], window: TimeWindow) -> Vec<&T> {
    entries
        .iter()
        .filter(|entry| window.contains(entry.timestamp_ms()))
        .collect()
}

/// Weekday slot (0..7) of an instant in the given time zone
///
/// Returns `None` only for instants outside the representable calendar range.
#[must_use]
pub fn weekday_slot<Tz: TimeZone>(
    timestamp_ms: i64,
    week_start: WeekStart,
    tz: &Tz,
) -> Option<usize> {
    local_date(timestamp_ms, tz).map(|date| week_start.slot(date.weekday()))
}

/// Local calendar date of an instant in the given time zone
///
/// Returns `None` only for instants outside the representable calendar range.
#[must_use]
pub fn local_date<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(timestamp_ms).map(|utc| utc.with_timezone(tz).date_naive())
}

fn end_before<Tz: TimeZone>(next_day: Option<NaiveDate>, tz: &Tz) -> i64 {
    next_day.map_or(i64::MAX, |day| local_midnight_ms(day, tz) - 1)
}

fn local_midnight_ms<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => {
            instant.timestamp_millis()
        }
        LocalResult::None => gap_midnight_ms(midnight, tz),
    }
}

// Midnight inside a DST gap: apply the offset from one day earlier
fn gap_midnight_ms<Tz: TimeZone>(midnight: NaiveDateTime, tz: &Tz) -> i64 {
    let probe = midnight
        .checked_sub_signed(TimeDelta::days(1))
        .unwrap_or(midnight);
    let offset_seconds = tz.offset_from_utc_datetime(&probe).fix().local_minus_utc();
    let utc = midnight
        .checked_sub_signed(TimeDelta::seconds(i64::from(offset_seconds)))
        .unwrap_or(midnight);
    debug!(%midnight, offset_seconds, "Local midnight falls in a DST gap");
    utc.and_utc().timestamp_millis()
}
