// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Celestial body descriptors.
//!
//! A [`Body`] is pure configuration: a display name, the length of one
//! day/night cycle and the length of one orbit, both in SI seconds. It has no
//! behaviour of its own; the [`DayClock`](crate::DayClock) derives everything
//! it needs from these two periods.
//!
//! Periods are not validated. Zero, negative or non-finite values are accepted
//! and produce degenerate (but non-panicking) clocks.
//!
//! # Built-in bodies
//!
//! | Constant | Rotation | Orbit |
//! |----------|----------|-------|
//! | [`EARTH`] | 86 400 s | 365.25 d |
//! | [`MERCURY`] | 175.94 d (solar day) | 87.969 d |
//! | [`MARS`] | 88 775.244 s | 686.98 d |
//! | [`JUPITER`] | 35 733 s | 11.862 a |
//! | [`CERES`] | 32 668 s | 4.6 a |

use qtty::Seconds;
use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

const DAY_S: f64 = 86_400.0;
const JULIAN_YEAR_S: f64 = 365.25 * DAY_S;

/// An immutable description of a rotating, orbiting body.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: Cow<'static, str>,
    rotation_period: Seconds,
    orbital_period: Seconds,
}

impl Body {
    /// Create a body from a name and its two periods.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        rotation_period: Seconds,
        orbital_period: Seconds,
    ) -> Self {
        Self {
            name: name.into(),
            rotation_period,
            orbital_period,
        }
    }

    /// `const` constructor from raw second counts, used by the catalog.
    pub const fn from_static(name: &'static str, rotation_s: f64, orbital_s: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            rotation_period: Seconds::new(rotation_s),
            orbital_period: Seconds::new(orbital_s),
        }
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of one day/night cycle.
    #[inline]
    pub const fn rotation_period(&self) -> Seconds {
        self.rotation_period
    }

    /// Length of one revolution around the primary.
    #[inline]
    pub const fn orbital_period(&self) -> Seconds {
        self.orbital_period
    }

    /// `true` unless both periods are finite and strictly positive.
    pub fn is_degenerate(&self) -> bool {
        let ok = |p: f64| p.is_finite() && p > 0.0;
        !(ok(self.rotation_period.value()) && ok(self.orbital_period.value()))
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ── Catalog ───────────────────────────────────────────────────────────────

/// Earth: mean solar day and Julian year.
pub const EARTH: Body = Body::from_static("Earth", DAY_S, JULIAN_YEAR_S);

/// Mercury: its solar day is longer than its year, so it has no years.
pub const MERCURY: Body = Body::from_static("Mercury", 15_201_360.0, 87.969 * DAY_S);

/// Mars: one sol per rotation.
pub const MARS: Body = Body::from_static("Mars", 88_775.244, 686.98 * DAY_S);

/// Jupiter: over ten thousand rotations per orbit.
pub const JUPITER: Body = Body::from_static("Jupiter", 35_733.0, 11.862 * JULIAN_YEAR_S);

/// Ceres.
pub const CERES: Body = Body::from_static("Ceres", 32_668.0, 4.6 * JULIAN_YEAR_S);

/// Every built-in body.
pub const CATALOG: &[Body] = &[EARTH, MERCURY, MARS, JUPITER, CERES];

/// Look up a built-in body by name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static Body> {
    CATALOG.iter().find(|b| b.name().eq_ignore_ascii_case(name))
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Body {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Body", 3)?;
        s.serialize_field("name", self.name())?;
        s.serialize_field("rotation_period_s", &self.rotation_period.value())?;
        s.serialize_field("orbital_period_s", &self.orbital_period.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Body {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Raw {
            name: String,
            rotation_period_s: f64,
            orbital_period_s: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Body::new(
            raw.name,
            Seconds::new(raw.rotation_period_s),
            Seconds::new(raw.orbital_period_s),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_constants() {
        assert_eq!(EARTH.name(), "Earth");
        assert_eq!(EARTH.rotation_period().value(), 86_400.0);
        assert_eq!(EARTH.orbital_period().value(), 31_557_600.0);
        assert!(!EARTH.is_degenerate());
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(find("jupiter"), Some(&JUPITER));
        assert_eq!(find("MARS").map(Body::name), Some("Mars"));
        assert!(find("Vulcan").is_none());
    }

    #[test]
    fn owned_names_are_accepted() {
        let name = String::from("Kepler-16b");
        let body = Body::new(name, Seconds::new(1.0), Seconds::new(2.0));
        assert_eq!(body.to_string(), "Kepler-16b");
    }

    #[test]
    fn degenerate_periods_are_flagged_not_rejected() {
        assert!(Body::from_static("Zero", 0.0, 10.0).is_degenerate());
        assert!(Body::from_static("Neg", 10.0, -1.0).is_degenerate());
        assert!(Body::from_static("Inf", f64::INFINITY, 1.0).is_degenerate());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_second_suffixed_fields() {
        let json = serde_json::to_string(&MARS).unwrap();
        assert!(json.contains("\"rotation_period_s\":88775.244"));

        let back: Body = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MARS);
    }
}
