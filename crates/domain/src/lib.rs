// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod aggregate;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use aggregate::{MonthlyStat, aggregate};
pub use error::DomainError;
pub use types::{
    AttendanceMap, AttendanceValue, BonusSnapshot, BonusState, BonusTier, MonthKey, StaffName,
    StaffRecord, Timestamp, WeekKey, WeeklyTally,
};
pub use validation::{HOURS_EPSILON, is_valid_week_key, validate_tally};
