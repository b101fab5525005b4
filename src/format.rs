// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Rendering [`Stamp`]s as text.
//!
//! ```text
//! canonical:  T<day>:<tick>[.<subtick>][@<tick seconds>][±<longitude>]
//! display:    T<year>:<day of year>:<tick>[.<subtick>][@<tick seconds>][±<longitude>]
//! full:       <display> (<canonical>)
//! ```
//!
//! Ticks and subticks are always three digits. The day of year is padded to
//! the number of digits of the body's (rounded up) days per year, at least
//! three. Bodies with fewer than two days per year have no year, so every
//! style falls back to the canonical layout for them.

use crate::clock::DayClock;
use crate::error::FormatError;
use crate::stamp::Stamp;
use std::fmt::{self, Write};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which layout [`DayClock::format`] produces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Style {
    /// Days since the epoch.
    Canonical,
    /// Year and day of year.
    #[default]
    Display,
    /// Display layout followed by the canonical one in parentheses.
    Full,
}

impl Style {
    pub const fn as_str(self) -> &'static str {
        match self {
            Style::Canonical => "canonical",
            Style::Display => "display",
            Style::Full => "full",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canonical" => Ok(Style::Canonical),
            "display" => Ok(Style::Display),
            "full" => Ok(Style::Full),
            _ => Err(FormatError::UnknownStyle(s.to_owned())),
        }
    }
}

/// Optional parts of a formatted timestamp.
///
/// The suffix groups always appear in the order subtick, division, longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    /// Meridian offset in degrees. Decorative: it is printed, never used.
    pub longitude: Option<f64>,
    /// Print `.<subtick>`.
    pub subtick: bool,
    /// Print `@<tick seconds>`.
    pub division: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            longitude: None,
            subtick: true,
            division: true,
        }
    }
}

impl FormatOptions {
    pub fn with_longitude(mut self, degrees: f64) -> Self {
        self.longitude = Some(degrees);
        self
    }

    pub fn with_subtick(mut self, show: bool) -> Self {
        self.subtick = show;
        self
    }

    pub fn with_division(mut self, show: bool) -> Self {
        self.division = show;
        self
    }
}

impl DayClock {
    /// Render `stamp` in the requested `style`.
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::{DayClock, FormatOptions, Style, EARTH};
    ///
    /// let clock = DayClock::new(EARTH);
    /// let epoch = clock.at(0);
    /// assert_eq!(
    ///     clock.format(&epoch, Style::Display, &FormatOptions::default()),
    ///     "T0:000:000.000@86.4"
    /// );
    /// assert_eq!(
    ///     clock.format(&epoch, Style::Full, &FormatOptions::default().with_longitude(-74.0)),
    ///     "T0:000:000.000@86.4-74 (T0:000.000@86.4-74)"
    /// );
    /// ```
    pub fn format(&self, stamp: &Stamp, style: Style, options: &FormatOptions) -> String {
        let suffix = self.suffix(stamp, options);
        let canonical = format!("T{}:{:03}{}", stamp.day_index, stamp.tick, suffix);

        let calendar = match (style, stamp.calendar) {
            (Style::Canonical, _) | (_, None) => return canonical,
            (_, Some(calendar)) => calendar,
        };

        let width = day_of_year_width(stamp.days_per_year);
        let display = format!(
            "T{}:{:0width$}:{:03}{}",
            calendar.year,
            calendar.day,
            stamp.tick,
            suffix,
            width = width
        );

        match style {
            Style::Full => format!("{display} ({canonical})"),
            _ => display,
        }
    }

    // subtick, division, longitude; in that order.
    fn suffix(&self, stamp: &Stamp, options: &FormatOptions) -> String {
        let mut out = String::new();
        if options.subtick {
            let _ = write!(out, ".{:03}", stamp.subtick);
        }
        if options.division {
            let _ = write!(out, "@{:.1}", self.tick_duration().value());
        }
        if let Some(longitude) = options.longitude {
            if longitude == 0.0 {
                out.push_str("+0");
            } else if longitude > 0.0 {
                let _ = write!(out, "+{longitude}");
            } else {
                let _ = write!(out, "{longitude}");
            }
        }
        out
    }
}

/// Zero-pad width of the day-of-year field.
pub(crate) fn day_of_year_width(days_per_year: f64) -> usize {
    format!("{:.0}", days_per_year.ceil()).len().max(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{Body, EARTH, JUPITER, MERCURY};

    const FEB_2026: i64 = 1_770_681_600_000;

    fn earth() -> DayClock {
        DayClock::new(EARTH)
    }

    fn opts() -> FormatOptions {
        FormatOptions::default()
    }

    #[test]
    fn epoch_formats_identically_in_canonical_and_display() {
        let clock = earth();
        let ts = clock.at(0);
        assert_eq!(clock.format(&ts, Style::Display, &opts()), "T0:000:000.000@86.4");
        assert_eq!(clock.format(&ts, Style::Canonical, &opts()), "T0:000.000@86.4");
    }

    #[test]
    fn default_style_is_display() {
        assert_eq!(Style::default(), Style::Display);
    }

    #[test]
    fn suffix_order_is_subtick_division_longitude() {
        let clock = earth();
        let ts = clock.at(FEB_2026);

        let west = clock.format(&ts, Style::Display, &opts().with_longitude(-74.0));
        assert!(west.ends_with("@86.4-74"), "{west}");

        let east = clock.format(&ts, Style::Display, &opts().with_longitude(137.4));
        assert!(east.ends_with("@86.4+137.4"), "{east}");

        let subtick_pos = east.find('.').unwrap();
        let division_pos = east.find('@').unwrap();
        let longitude_pos = east.find('+').unwrap();
        assert!(subtick_pos < division_pos && division_pos < longitude_pos);
    }

    #[test]
    fn zero_longitude_gets_a_plus_sign() {
        let clock = earth();
        let ts = clock.at(0);
        let zero = opts().with_longitude(0.0);
        let negative_zero = opts().with_longitude(-0.0);
        assert_eq!(clock.format(&ts, Style::Canonical, &zero), "T0:000.000@86.4+0");
        assert_eq!(clock.format(&ts, Style::Canonical, &negative_zero), "T0:000.000@86.4+0");
    }

    #[test]
    fn toggles_remove_only_their_group() {
        let clock = earth();
        let ts = clock.at(0);
        assert_eq!(
            clock.format(&ts, Style::Display, &opts().with_subtick(false)),
            "T0:000:000@86.4"
        );
        assert_eq!(
            clock.format(&ts, Style::Display, &opts().with_division(false)),
            "T0:000:000.000"
        );
        assert_eq!(
            clock.format(
                &ts,
                Style::Display,
                &opts().with_subtick(false).with_division(false)
            ),
            "T0:000:000"
        );
        assert_eq!(
            clock.format(
                &ts,
                Style::Display,
                &opts().with_subtick(false).with_longitude(12.5)
            ),
            "T0:000:000@86.4+12.5"
        );
    }

    #[test]
    fn full_shows_display_then_canonical() {
        let clock = earth();
        let ts = clock.at(FEB_2026);
        let full = clock.format(&ts, Style::Full, &opts());
        let display = clock.format(&ts, Style::Display, &opts());
        let canonical = clock.format(&ts, Style::Canonical, &opts());
        assert_eq!(full, format!("{display} ({canonical})"));
        assert!(display.starts_with("T56:040:"));
        assert!(canonical.starts_with("T20494:"));
    }

    #[test]
    fn short_year_bodies_always_use_canonical() {
        let clock = DayClock::new(MERCURY);
        let ts = clock.at(FEB_2026);
        let canonical = clock.format(&ts, Style::Canonical, &opts());
        assert_eq!(clock.format(&ts, Style::Display, &opts()), canonical);
        assert_eq!(clock.format(&ts, Style::Full, &opts()), canonical);
        assert!(!canonical.contains('('));
        assert_eq!(canonical.matches(':').count(), 1);
    }

    #[test]
    fn wide_years_pad_day_of_year() {
        let clock = DayClock::new(JUPITER);
        let display = clock.format(&clock.at(FEB_2026), Style::Display, &opts());
        let fields: Vec<&str> = display.split(':').collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1].len(), 5, "{display}");
        assert!(fields[2].starts_with(|c: char| c.is_ascii_digit()));
        assert!(display.contains("@35.7"), "{display}");
    }

    #[test]
    fn canonical_day_index_is_not_padded() {
        let clock = earth();
        let ts = clock.at(3 * 86_400_000);
        assert!(clock.format(&ts, Style::Canonical, &opts()).starts_with("T3:000"));
    }

    #[test]
    fn division_keeps_trailing_zero() {
        let clock = DayClock::new(Body::from_static("Round", 100_000.0, 1e7));
        let s = clock.format(&clock.at(0), Style::Canonical, &opts());
        assert_eq!(s, "T0:000.000@100.0");
    }

    #[test]
    fn day_of_year_width_has_a_floor_of_three() {
        assert_eq!(day_of_year_width(2.0), 3);
        assert_eq!(day_of_year_width(365.25), 3);
        assert_eq!(day_of_year_width(999.5), 4);
        assert_eq!(day_of_year_width(10_475.9), 5);
        assert_eq!(day_of_year_width(f64::INFINITY), 3);
    }

    #[test]
    fn style_names_round_trip() {
        for style in [Style::Canonical, Style::Display, Style::Full] {
            assert_eq!(style.to_string().parse::<Style>(), Ok(style));
        }
        assert_eq!(" FULL ".parse::<Style>(), Ok(Style::Full));
        assert_eq!(
            "iso".parse::<Style>(),
            Err(FormatError::UnknownStyle("iso".into()))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_fill_missing_fields_with_defaults() {
        let options: FormatOptions = serde_json::from_str(r#"{"longitude": -74.0}"#).unwrap();
        assert_eq!(options, opts().with_longitude(-74.0));

        let style: Style = serde_json::from_str(r#""canonical""#).unwrap();
        assert_eq!(style, Style::Canonical);
    }
}
