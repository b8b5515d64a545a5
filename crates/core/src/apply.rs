// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::outcome::{Outcome, TransitionResult};
use stafftrack_audit::{Action, AuditEvent, StateSnapshot};
use stafftrack_domain::{
    AttendanceValue, BonusSnapshot, BonusTier, MonthKey, StaffName, StaffRecord, Timestamp,
    WeekKey, WeeklyTally, validate_tally,
};

/// Applies a command to a staff record, producing a new record and outcome.
///
/// The function is pure: it borrows the current record, never mutates it,
/// and returns the replacement. The caller persists the result (typically
/// via `Roster::replace`) before issuing the next command.
///
/// # Arguments
///
/// * `name` - The staff member the record belongs to (audit scope)
/// * `record` - The current record (immutable)
/// * `command` - The command to apply
/// * `recorded_at` - The advisory timestamp to stamp on a mutation
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new record, outcome, and audit
///   event
/// * `Err(CoreError)` if the command violates a domain rule
///
/// # Errors
///
/// Returns an error if:
/// - A `RecordWeek` tally has negative hours or does not account for its
///   scheduled hours
pub fn apply(
    name: &StaffName,
    record: &StaffRecord,
    command: Command,
    recorded_at: Timestamp,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::RecordMonth {
            month,
            perfect,
            allow_overwrite,
        } => apply_month(name, record, &month, perfect, allow_overwrite, recorded_at),
        Command::RecordWeek { week, tally } => {
            apply_week(name, record, &week, tally, recorded_at)
        }
    }
}

/// One step of the bonus ladder.
///
/// A perfect month advances the tier; the wrap past the top rung banks one
/// chance. An imperfect month is absorbed by a banked chance if one exists,
/// otherwise the tier is forfeited (the chance count stays at zero).
const fn step(bonus: BonusTier, chance: u32, perfect: bool) -> (BonusTier, u32) {
    if perfect {
        if bonus.is_top() {
            (bonus.advance(), chance + 1)
        } else {
            (bonus.advance(), chance)
        }
    } else if chance > 0 {
        (bonus, chance - 1)
    } else {
        (BonusTier::Empty, 0)
    }
}

#[allow(clippy::too_many_lines)]
fn apply_month(
    name: &StaffName,
    record: &StaffRecord,
    month: &MonthKey,
    perfect: bool,
    allow_overwrite: bool,
    recorded_at: Timestamp,
) -> Result<TransitionResult, CoreError> {
    let before: StateSnapshot = StateSnapshot::of(&record.bonus);

    // Re-entry policy: each month is finalized at most once per flag value.
    if let Some(&previous) = record.bonus.bonus_updated.get(month) {
        if previous == perfect {
            // Same flag again: a no-op, never a double-advance.
            let action: Action = Action::new(
                String::from("RecordMonth"),
                Some(format!("Month {month} already recorded; no change")),
            );
            let audit_event: AuditEvent =
                AuditEvent::new(name.clone(), action, before.clone(), before);
            return Ok(TransitionResult {
                new_record: record.clone(),
                outcome: Outcome::AlreadyRecorded {
                    month: month.clone(),
                },
                audit_event,
            });
        }

        if !allow_overwrite {
            // Conflicting flag without confirmation: also a no-op.
            let action: Action = Action::new(
                String::from("RecordMonth"),
                Some(format!(
                    "Overwrite of month {month} declined; recorded flag kept"
                )),
            );
            let audit_event: AuditEvent =
                AuditEvent::new(name.clone(), action, before.clone(), before);
            return Ok(TransitionResult {
                new_record: record.clone(),
                outcome: Outcome::OverwriteDeclined {
                    month: month.clone(),
                },
                audit_event,
            });
        }

        // Confirmed overwrite: preserve the snapshot being replaced, then
        // recompute the step from the current state. The current state has
        // already absorbed the month's original update; recomputing from it
        // is the documented approximation rather than a rollback to the
        // pre-update state.
        let mut new_record: StaffRecord = record.clone();
        let superseded: Option<BonusSnapshot> =
            new_record.bonus.bonus_history.get(month).copied();
        if let Some(old) = superseded {
            new_record
                .bonus
                .overwrite_log
                .entry(month.clone())
                .or_default()
                .push(old);
        }

        let (bonus, chance) = step(
            new_record.bonus.current_bonus,
            new_record.bonus.current_chance,
            perfect,
        );
        new_record.bonus.current_bonus = bonus;
        new_record.bonus.current_chance = chance;

        let snapshot: BonusSnapshot = new_record.bonus.snapshot();
        new_record.bonus.bonus_updated.insert(month.clone(), perfect);
        new_record
            .bonus
            .bonus_history
            .insert(month.clone(), snapshot);
        new_record.last_update = Some(recorded_at);

        let after: StateSnapshot = StateSnapshot::of(&new_record.bonus);
        let action: Action = Action::new(
            String::from("RecordMonth"),
            Some(format!(
                "Overwrote month {month} as {}",
                flag_label(perfect)
            )),
        );
        let audit_event: AuditEvent = AuditEvent::new(name.clone(), action, before, after);

        return Ok(TransitionResult {
            new_record,
            outcome: Outcome::Overwritten {
                month: month.clone(),
                superseded,
                snapshot,
            },
            audit_event,
        });
    }

    // First time this month is finalized.
    let mut new_record: StaffRecord = record.clone();
    let (bonus, chance) = step(
        new_record.bonus.current_bonus,
        new_record.bonus.current_chance,
        perfect,
    );
    new_record.bonus.current_bonus = bonus;
    new_record.bonus.current_chance = chance;

    let snapshot: BonusSnapshot = new_record.bonus.snapshot();
    new_record.bonus.bonus_updated.insert(month.clone(), perfect);
    new_record
        .bonus
        .bonus_history
        .insert(month.clone(), snapshot);
    new_record.last_update = Some(recorded_at);

    let after: StateSnapshot = StateSnapshot::of(&new_record.bonus);
    let action: Action = Action::new(
        String::from("RecordMonth"),
        Some(format!(
            "Recorded month {month} as {}",
            flag_label(perfect)
        )),
    );
    let audit_event: AuditEvent = AuditEvent::new(name.clone(), action, before, after);

    Ok(TransitionResult {
        new_record,
        outcome: Outcome::Applied {
            month: month.clone(),
            snapshot,
        },
        audit_event,
    })
}

fn apply_week(
    name: &StaffName,
    record: &StaffRecord,
    week: &WeekKey,
    tally: WeeklyTally,
    recorded_at: Timestamp,
) -> Result<TransitionResult, CoreError> {
    // The entry-time invariant: every scheduled hour accounted for.
    validate_tally(&tally)?;

    let before: StateSnapshot = StateSnapshot::of(&record.bonus);

    let mut new_record: StaffRecord = record.clone();
    new_record
        .attendance
        .insert(String::from(week.as_str()), AttendanceValue::Tally(tally));
    new_record.last_update = Some(recorded_at);

    // The bonus state is untouched by attendance entry.
    let after: StateSnapshot = StateSnapshot::of(&new_record.bonus);
    let action: Action = Action::new(
        String::from("RecordWeek"),
        Some(format!(
            "Recorded week {week}: {} of {} hours attended",
            tally.attended, tally.scheduled
        )),
    );
    let audit_event: AuditEvent = AuditEvent::new(name.clone(), action, before, after);

    Ok(TransitionResult {
        new_record,
        outcome: Outcome::WeekRecorded { week: week.clone() },
        audit_event,
    })
}

const fn flag_label(perfect: bool) -> &'static str {
    if perfect { "perfect" } else { "imperfect" }
}
