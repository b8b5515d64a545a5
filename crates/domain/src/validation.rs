// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::WeeklyTally;
use chrono::NaiveDate;

/// Tolerance for comparing hour sums.
///
/// Hours are entered as decimals (7.5, 0.25) and accumulate float error;
/// anything inside this band counts as equal.
pub const HOURS_EPSILON: f64 = 1e-6;

/// Validates the entry-time invariant of a weekly tally.
///
/// A well-formed tally has no negative field and accounts for every
/// scheduled hour: `attended + tardiness + absent == scheduled`.
///
/// This runs when a week is recorded, never when a document is read back
/// or aggregated - legacy entries that violate it are tolerated there.
///
/// # Arguments
///
/// * `tally` - The tally to validate
///
/// # Errors
///
/// Returns an error if:
/// - Any hours field is negative
/// - The attended, tardiness, and absent hours do not sum to the scheduled
///   hours
pub fn validate_tally(tally: &WeeklyTally) -> Result<(), DomainError> {
    let fields: [(&'static str, f64); 4] = [
        ("scheduled", tally.scheduled),
        ("attended", tally.attended),
        ("tardiness", tally.tardiness),
        ("absent", tally.absent),
    ];
    for (field, value) in fields {
        if value < 0.0 {
            return Err(DomainError::NegativeHours { field, value });
        }
    }

    // Rule: every scheduled hour must be accounted for
    let accounted: f64 = tally.attended + tally.tardiness + tally.absent;
    if (accounted - tally.scheduled).abs() > HOURS_EPSILON {
        return Err(DomainError::TallyMismatch {
            scheduled: tally.scheduled,
            accounted,
        });
    }

    Ok(())
}

/// Checks whether a raw attendance key parses as a calendar date.
///
/// This is the tolerant counterpart of [`crate::WeekKey::new`]: aggregation
/// uses it to skip malformed legacy keys (such as a bare "2025-05") without
/// raising.
#[must_use]
pub fn is_valid_week_key(key: &str) -> bool {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").is_ok()
}
