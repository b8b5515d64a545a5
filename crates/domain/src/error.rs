// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::StaffName;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Staff name is empty or invalid.
    InvalidStaffName(String),
    /// Week key does not parse as a calendar date.
    InvalidWeekKey {
        /// The invalid week key.
        key: String,
        /// The parsing error message.
        error: String,
    },
    /// Month key does not match the `YYYY-MM` shape.
    InvalidMonthKey(String),
    /// Bonus hours value is not one of the defined tiers.
    InvalidTier {
        /// The invalid hours value.
        hours: u32,
    },
    /// An hours field in a weekly tally is negative.
    NegativeHours {
        /// The name of the offending field.
        field: &'static str,
        /// The negative value.
        value: f64,
    },
    /// The hours in a weekly tally do not account for the scheduled hours.
    TallyMismatch {
        /// The scheduled hours.
        scheduled: f64,
        /// The sum of attended, tardiness, and absent hours.
        accounted: f64,
    },
    /// A staff member with this name already exists.
    DuplicateStaff(StaffName),
    /// No staff member with this name exists.
    StaffNotFound(StaffName),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStaffName(msg) => write!(f, "Invalid staff name: {msg}"),
            Self::InvalidWeekKey { key, error } => {
                write!(f, "Invalid week key '{key}': {error}")
            }
            Self::InvalidMonthKey(key) => {
                write!(f, "Invalid month key '{key}': must match YYYY-MM")
            }
            Self::InvalidTier { hours } => {
                write!(f, "Invalid bonus tier: {hours}. Must be 0, 20, 40, or 50")
            }
            Self::NegativeHours { field, value } => {
                write!(f, "Hours field '{field}' cannot be negative, got {value}")
            }
            Self::TallyMismatch {
                scheduled,
                accounted,
            } => {
                write!(
                    f,
                    "Attended, tardiness, and absent hours sum to {accounted} but {scheduled} hours were scheduled"
                )
            }
            Self::DuplicateStaff(name) => {
                write!(f, "Staff member '{}' already exists", name.value())
            }
            Self::StaffNotFound(name) => {
                write!(f, "Staff member '{}' not found", name.value())
            }
        }
    }
}

impl std::error::Error for DomainError {}
