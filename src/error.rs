// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Errors raised while reading day-clock strings and style names.

use thiserror::Error;

/// A string could not be read back as a day-clock timestamp.
///
/// Every variant carries the rejected text so the caller can report exactly
/// what failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The string does not split into `day:tick` or `year:day:tick`.
    #[error("invalid day-clock timestamp: {input}")]
    Layout { input: String },

    /// One of the numeric fields is empty or not an integer.
    #[error("invalid {field} `{value}` in day-clock timestamp: {input}")]
    Field {
        field: &'static str,
        value: String,
        input: String,
    },

    /// Not one of `canonical`, `display` or `full`.
    #[error("unknown day-clock style `{0}`")]
    UnknownStyle(String),
}

impl FormatError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            FormatError::Layout { input }
            | FormatError::Field { input, .. }
            | FormatError::UnknownStyle(input) => input,
        }
    }
}
