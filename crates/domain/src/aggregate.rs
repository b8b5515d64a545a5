// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly attendance aggregation.
//!
//! This module provides the pure, deterministic summation of weekly
//! attendance entries into per-month totals. It is best-effort by design:
//! data-quality problems (malformed keys, legacy bare-number values) are
//! skipped silently and never surface as errors.

use crate::types::{AttendanceMap, MonthKey};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Aggregated attendance hours for one calendar month.
///
/// Ephemeral and derived: never persisted, recomputed on demand from the
/// weekly entries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyStat {
    /// Total scheduled hours.
    pub scheduled: f64,
    /// Total attended hours.
    pub attended: f64,
    /// Total tardiness hours.
    pub tardiness: f64,
    /// Total absent hours.
    pub absent: f64,
}

impl MonthlyStat {
    /// Returns the attendance percentage for display.
    ///
    /// `attended / scheduled * 100` rounded to two decimals, or `0.0` when
    /// nothing was scheduled.
    #[must_use]
    pub fn attendance_pct(&self) -> f64 {
        if self.scheduled > 0.0 {
            (self.attended / self.scheduled * 100.0 * 100.0).round() / 100.0
        } else {
            0.0
        }
    }
}

/// Sums weekly attendance entries into per-month totals.
///
/// An entry is included only if its key parses as a valid calendar date and
/// its value is a structured tally; anything else is skipped silently. A
/// week is attributed to the month containing its week-start date, even if
/// the week itself spans a month boundary. Months with no included entry
/// are absent from the output - callers default to zero on lookup.
///
/// Missing sub-fields were already defaulted to zero at deserialization, so
/// the sums here are plain additions.
///
/// # Arguments
///
/// * `attendance` - The raw attendance mapping of one staff member
#[must_use]
pub fn aggregate(attendance: &AttendanceMap) -> BTreeMap<MonthKey, MonthlyStat> {
    let mut stats: BTreeMap<MonthKey, MonthlyStat> = BTreeMap::new();

    for (key, value) in attendance {
        let Ok(date) = NaiveDate::parse_from_str(key, "%Y-%m-%d") else {
            continue;
        };
        let Some(tally) = value.as_tally() else {
            continue;
        };

        let month: MonthKey = MonthKey::from_date(date);
        let stat: &mut MonthlyStat = stats.entry(month).or_default();
        stat.scheduled += tally.scheduled;
        stat.attended += tally.attended;
        stat.tardiness += tally.tardiness;
        stat.absent += tally.absent;
    }

    stats
}
