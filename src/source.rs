// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock sources.
//!
//! Reading the current time is the only side effect of a
//! [`DayClock`](crate::DayClock). It goes through [`WallClock`] so callers can
//! substitute a [`FixedClock`] and get reproducible results.

use chrono::{DateTime, Utc};

/// Something that knows the current instant.
pub trait WallClock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// The operating system clock, read through `chrono::Utc::now()`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock;

impl WallClock for SystemClock {
    #[inline]
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl FixedClock {
    /// Freeze at a `chrono` date/time, truncated to milliseconds.
    pub fn at(datetime: DateTime<Utc>) -> Self {
        Self(datetime.timestamp_millis())
    }
}

impl WallClock for FixedClock {
    #[inline]
    fn now_millis(&self) -> i64 {
        self.0
    }
}

impl<C: WallClock + ?Sized> WallClock for &C {
    #[inline]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}
