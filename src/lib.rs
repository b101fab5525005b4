// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day clocks for celestial bodies.
//!
//! This crate counts time in the days of an arbitrary rotating body. A day is
//! split into 1000 **ticks** and each tick into 1000 **subticks**; bodies with
//! at least two days per orbit also get epoch-relative **years** and
//! **days of year**.
//!
//! # Core types
//!
//! - [`Body`] — name, rotation period and orbital period of a body.
//! - [`DayClock`] — converts instants to [`Stamp`]s for one body and back.
//! - [`Stamp`] — an instant decomposed into day, tick, subtick and
//!   (optionally) [`YearDay`].
//! - [`Style`] / [`FormatOptions`] — how [`DayClock::format`] renders a stamp.
//! - [`WallClock`] — source of the current instant for [`DayClock::now_from`].
//! - [`FormatError`] — why [`DayClock::parse`] rejected a string.
//!
//! # Text layouts
//!
//! | Style | Layout | Earth, Unix epoch |
//! |-------|--------|-------------------|
//! | [`Style::Canonical`] | `T<day>:<tick>.<subtick>@<tick s>` | `T0:000.000@86.4` |
//! | [`Style::Display`] | `T<year>:<day of year>:<tick>.<subtick>@<tick s>` | `T0:000:000.000@86.4` |
//! | [`Style::Full`] | `<display> (<canonical>)` | `T0:000:000.000@86.4 (T0:000.000@86.4)` |
//!
//! An optional meridian longitude is appended with an explicit sign, e.g.
//! `@86.4-74`. It is decorative and ignored when parsing.
//!
//! ```
//! use orrery::{DayClock, FormatOptions, Style, MARS};
//!
//! let clock = DayClock::new(MARS);
//! let ts = clock.at(1_770_681_600_000);
//! let text = clock.format(&ts, Style::Display, &FormatOptions::default());
//! let back = clock.parse(&text).unwrap();
//! assert_eq!((back.year(), back.day_of_year()), (ts.year(), ts.day_of_year()));
//! assert_eq!((back.tick(), back.subtick()), (ts.tick(), ts.subtick()));
//! ```

mod body;
mod clock;
mod error;
mod format;
mod parse;
mod source;
mod stamp;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use body::{find, Body, CATALOG, CERES, EARTH, JUPITER, MARS, MERCURY};
pub use clock::DayClock;
pub use error::FormatError;
pub use format::{FormatOptions, Style};
pub use source::{FixedClock, SystemClock, WallClock};
pub use stamp::{Stamp, YearDay};
