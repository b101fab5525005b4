// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The day clock.
//!
//! [`DayClock`] binds one [`Body`] and converts absolute instants (Unix
//! milliseconds or `chrono::DateTime<Utc>`) into [`Stamp`]s counted in that
//! body's days:
//!
//! ```text
//! day      = epoch_seconds / rotation_period
//! tick     = ⌊frac(day) · 1000⌋
//! subtick  = ⌊frac(frac(day) · 1000) · 1000⌋
//! year     = ⌊⌊day⌋ / days_per_year⌋                    (days_per_year ≥ 2)
//! day₍y₎   = ⌊day⌋ − ⌊year · days_per_year⌋             (days_per_year ≥ 2)
//! ```
//!
//! The clock holds no mutable state. Apart from [`DayClock::now`], which
//! reads the system clock, every method is a pure function of its arguments.

use crate::body::{Body, EARTH};
use crate::format::{FormatOptions, Style};
use crate::source::{SystemClock, WallClock};
use crate::stamp::{Stamp, YearDay};
use chrono::{DateTime, Utc};
use qtty::Seconds;
use std::fmt;

pub(crate) const TICKS_PER_DAY: f64 = 1000.0;
pub(crate) const SUBTICKS_PER_TICK: f64 = 1000.0;

/// Minimum days per year for a body to get years and days of year.
const MIN_DAYS_PER_YEAR: f64 = 2.0;

/// Converts instants to and from one body's days, ticks and years.
#[derive(Debug, Clone, PartialEq)]
pub struct DayClock {
    body: Body,
    tick_duration: Seconds,
    days_per_year: f64,
}

impl DayClock {
    /// Build a clock for `body`.
    ///
    /// Never fails. Non-positive or non-finite periods yield a degenerate clock
    /// whose stamps may be meaningless but are always well-formed.
    pub fn new(body: Body) -> Self {
        let rotation = body.rotation_period().value();
        let orbit = body.orbital_period().value();
        let tick_duration = Seconds::new(rotation / TICKS_PER_DAY);
        let days_per_year = orbit / rotation;

        if body.is_degenerate() {
            log::warn!(
                "body {} has degenerate periods (rotation {rotation} s, orbit {orbit} s)",
                body.name()
            );
        }
        log::debug!(
            "day clock for {}: tick {} s, {days_per_year} days per year",
            body.name(),
            tick_duration.value()
        );

        Self {
            body,
            tick_duration,
            days_per_year,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// One thousandth of the rotation period.
    #[inline]
    pub const fn tick_duration(&self) -> Seconds {
        self.tick_duration
    }

    /// Orbital period over rotation period.
    #[inline]
    pub const fn days_per_year(&self) -> f64 {
        self.days_per_year
    }

    /// Whether stamps of this clock carry a year and day of year.
    #[inline]
    pub fn has_years(&self) -> bool {
        self.days_per_year >= MIN_DAYS_PER_YEAR
    }

    // ── instant → stamp ───────────────────────────────────────────────

    /// Decompose an instant given in milliseconds since the Unix epoch.
    ///
    /// Negative instants are supported: the day index is floored, so the
    /// tick and subtick always count forward from the start of the day.
    pub fn at(&self, millis: i64) -> Stamp {
        self.at_seconds(millis as f64 / 1000.0)
    }

    pub(crate) fn at_seconds(&self, epoch_s: f64) -> Stamp {
        let day = epoch_s / self.body.rotation_period().value();
        let whole = day.floor();
        let day_index = whole as i64;

        let ticks = (day - whole) * TICKS_PER_DAY;
        let tick_floor = ticks.floor();
        let subticks = ((ticks - tick_floor) * SUBTICKS_PER_TICK).floor();

        let calendar = self.has_years().then(|| {
            let year = (day_index as f64 / self.days_per_year).floor() as i64;
            let start = (year as f64 * self.days_per_year).floor() as i64;
            YearDay {
                year,
                day: day_index.saturating_sub(start),
            }
        });

        Stamp {
            epoch: Seconds::new(epoch_s),
            day_fractional: day,
            day_index,
            tick: to_unit(tick_floor),
            subtick: to_unit(subticks),
            calendar,
            days_per_year: self.days_per_year,
        }
    }

    /// The current instant according to the system clock.
    pub fn now(&self) -> Stamp {
        self.now_from(&SystemClock)
    }

    /// The current instant according to `source`.
    pub fn now_from<C: WallClock>(&self, source: &C) -> Stamp {
        self.at(source.now_millis())
    }

    /// Decompose a `chrono` date/time (millisecond resolution).
    pub fn from_date_time(&self, datetime: DateTime<Utc>) -> Stamp {
        self.at(datetime.timestamp_millis())
    }

    // ── stamp → instant ───────────────────────────────────────────────

    /// Milliseconds since the Unix epoch; exact for stamps made by [`at`](Self::at).
    pub fn to_millis(&self, stamp: &Stamp) -> i64 {
        (stamp.epoch.value() * 1000.0).round() as i64
    }

    /// The stamp as a `chrono` date/time.
    ///
    /// Returns `None` if the instant falls outside chrono's representable range.
    pub fn to_date_time(&self, stamp: &Stamp) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.to_millis(stamp))
    }

    // ── description ───────────────────────────────────────────────────

    /// `<body name> <current time in the display style>`.
    pub fn describe(&self) -> String {
        self.describe_at(&SystemClock)
    }

    /// Like [`describe`](Self::describe) but reading the time from `source`.
    pub fn describe_at<C: WallClock>(&self, source: &C) -> String {
        let now = self.now_from(source);
        format!(
            "{} {}",
            self.body.name(),
            self.format(&now, Style::Display, &FormatOptions::default())
        )
    }
}

impl Default for DayClock {
    fn default() -> Self {
        Self::new(EARTH)
    }
}

impl fmt::Display for DayClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Floored tick or subtick value, kept inside `0..=999`.
#[inline]
fn to_unit(value: f64) -> u16 {
    // NaN casts to 0; 1000 can only come from rounding just below a boundary.
    value.clamp(0.0, 999.0) as u16
}
