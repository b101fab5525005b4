// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Reading formatted timestamps back.
//!
//! Parsing keeps only the day, tick and subtick fields. The `@<tick seconds>`
//! division is dropped because the clock already knows its own tick length,
//! and the `±<longitude>` suffix is dropped because it carries no time.
//!
//! Steps, in this order:
//!
//! 1. strip a leading `T`;
//! 2. remove the first `@` followed by digits and dots;
//! 3. remove a trailing sign followed by digits and dots;
//! 4. split on `:` into `day:tick` (canonical) or `year:day:tick` (display);
//! 5. split the tick field on `.` into tick and subtick (subtick defaults to 0).
//!
//! The longitude strip in step 3 only looks at the end of the string. A field
//! that itself ends in a signed number directly after a non-colon character
//! would be cut too; formatted output never produces one.

use crate::clock::{DayClock, SUBTICKS_PER_TICK, TICKS_PER_DAY};
use crate::error::FormatError;
use crate::stamp::Stamp;
use once_cell::sync::Lazy;
use regex::Regex;

static DIVISION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"@[\d.]+").unwrap());

static LONGITUDE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[+-][\d.]+$").unwrap());

impl DayClock {
    /// Parse a string produced by [`format`](Self::format), in any style.
    ///
    /// The result is re-derived through [`at`](Self::at)'s arithmetic, so all
    /// its fields are consistent with each other even when the input was
    /// edited by hand (e.g. a tick of `1500` rolls over into the next day).
    ///
    /// # Errors
    ///
    /// [`FormatError::Layout`] if the string is not two or three
    /// colon-separated fields, [`FormatError::Field`] if a field is not an
    /// integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::{DayClock, EARTH};
    ///
    /// let clock = DayClock::new(EARTH);
    /// let ts = clock.parse("T56:040:500.000@86.4-74").unwrap();
    /// assert_eq!(ts.year(), Some(56));
    /// assert_eq!(ts.day_of_year(), Some(40));
    /// assert_eq!(ts.tick(), 500);
    ///
    /// assert!(clock.parse("not:a:valid:timestamp").is_err());
    /// ```
    pub fn parse(&self, text: &str) -> Result<Stamp, FormatError> {
        let body = text.strip_prefix('T').unwrap_or(text);
        let body = DIVISION_REGEX.replace(body, "");
        let body = LONGITUDE_REGEX.replace(&body, "");

        let parts: Vec<&str> = body.split(':').collect();
        let (day_index, tick_field) = match parts.as_slice() {
            [day, tick] => (integer("day", day, text)?, *tick),
            [year, day, tick] => {
                let year = integer("year", year, text)?;
                let day = integer("day of year", day, text)?;
                let start = (year as f64 * self.days_per_year()).floor() as i64;
                (start.saturating_add(day), *tick)
            }
            _ => {
                return Err(FormatError::Layout {
                    input: text.to_owned(),
                })
            }
        };

        let (tick, subtick) = match tick_field.split_once('.') {
            Some((tick, subtick)) => (
                integer("tick", tick, text)?,
                integer("subtick", subtick, text)?,
            ),
            None => (integer("tick", tick_field, text)?, 0),
        };

        log::trace!("parsed {text:?} as day {day_index}, tick {tick}, subtick {subtick}");
        Ok(self.locate(day_index, tick, subtick))
    }

    /// The stamp at the start of the given subtick.
    ///
    /// Floating-point rounding can put the start of a subtick a hair inside
    /// the previous one; the middle of the subtick is used in that case.
    fn locate(&self, day_index: i64, tick: i64, subtick: i64) -> Stamp {
        let rotation = self.body().rotation_period().value();
        let offset = |subticks: f64| {
            let ticks = tick as f64 + subticks / SUBTICKS_PER_TICK;
            (day_index as f64 + ticks / TICKS_PER_DAY) * rotation
        };

        let stamp = self.at_seconds(offset(subtick as f64));
        let landed = (
            stamp.day_index(),
            i64::from(stamp.tick()),
            i64::from(stamp.subtick()),
        );
        if landed < (day_index, tick, subtick) {
            self.at_seconds(offset(subtick as f64 + 0.5))
        } else {
            stamp
        }
    }
}

fn integer(field: &'static str, value: &str, input: &str) -> Result<i64, FormatError> {
    value.parse().map_err(|_| FormatError::Field {
        field,
        value: value.to_owned(),
        input: input.to_owned(),
    })
}
