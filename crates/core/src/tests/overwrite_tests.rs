// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Outcome;
use crate::tests::helpers::{month, record_month, record_with};
use stafftrack_domain::{BonusSnapshot, BonusTier, StaffRecord};

#[test]
fn test_declined_overwrite_changes_nothing() {
    let record: StaffRecord = record_with(BonusTier::Tier1, 0);
    let first = record_month(&record, "2025-06", true, false).unwrap();

    let second = record_month(&first.new_record, "2025-06", false, false).unwrap();

    assert_eq!(second.new_record, first.new_record);
    assert_eq!(
        second.outcome,
        Outcome::OverwriteDeclined {
            month: month("2025-06"),
        }
    );
}

#[test]
fn test_overwrite_preserves_the_superseded_snapshot_once() {
    // Month recorded as perfect first: bonus 20 -> 40.
    let record: StaffRecord = record_with(BonusTier::Tier1, 0);
    let first = record_month(&record, "2025-06", true, false).unwrap();
    assert_eq!(first.new_record.bonus.current_bonus, BonusTier::Tier2);

    // Re-recorded as imperfect with confirmation.
    let second = record_month(&first.new_record, "2025-06", false, true).unwrap();

    let log: &Vec<BonusSnapshot> = second
        .new_record
        .bonus
        .overwrite_log
        .get(&month("2025-06"))
        .unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0], BonusSnapshot::new(BonusTier::Tier2, 0));
    assert_eq!(
        second.new_record.bonus.bonus_updated.get(&month("2025-06")),
        Some(&false)
    );
}

#[test]
fn test_overwrite_recomputes_from_the_advanced_state() {
    // The overwrite applies the step to the state as it stands after the
    // original update, not to the state before it. Perfect from empty gave
    // (20, 0); flipping the flag forfeits from there.
    let record: StaffRecord = StaffRecord::new();
    let first = record_month(&record, "2025-06", true, false).unwrap();
    assert_eq!(first.new_record.bonus.current_bonus, BonusTier::Tier1);

    let second = record_month(&first.new_record, "2025-06", false, true).unwrap();

    assert_eq!(second.new_record.bonus.current_bonus, BonusTier::Empty);
    assert_eq!(second.new_record.bonus.current_chance, 0);
}

#[test]
fn test_overwrite_consumes_a_banked_chance() {
    // A wrap banked a chance: perfect at the top rung gives (20, 1).
    let record: StaffRecord = record_with(BonusTier::Tier3, 0);
    let first = record_month(&record, "2025-06", true, false).unwrap();
    assert_eq!(first.new_record.bonus.current_bonus, BonusTier::Tier1);
    assert_eq!(first.new_record.bonus.current_chance, 1);

    // Flipping to imperfect is absorbed by that chance.
    let second = record_month(&first.new_record, "2025-06", false, true).unwrap();

    assert_eq!(second.new_record.bonus.current_bonus, BonusTier::Tier1);
    assert_eq!(second.new_record.bonus.current_chance, 0);
}

#[test]
fn test_overwrite_outcome_reports_superseded_and_result() {
    let record: StaffRecord = record_with(BonusTier::Tier1, 0);
    let first = record_month(&record, "2025-06", true, false).unwrap();

    let second = record_month(&first.new_record, "2025-06", false, true).unwrap();

    assert_eq!(
        second.outcome,
        Outcome::Overwritten {
            month: month("2025-06"),
            superseded: Some(BonusSnapshot::new(BonusTier::Tier2, 0)),
            snapshot: BonusSnapshot::new(BonusTier::Empty, 0),
        }
    );
}

#[test]
fn test_repeated_overwrites_append_in_order() {
    let record: StaffRecord = record_with(BonusTier::Tier1, 0);
    let first = record_month(&record, "2025-06", true, false).unwrap();
    let second = record_month(&first.new_record, "2025-06", false, true).unwrap();
    let third = record_month(&second.new_record, "2025-06", true, true).unwrap();

    let log: &Vec<BonusSnapshot> = third
        .new_record
        .bonus
        .overwrite_log
        .get(&month("2025-06"))
        .unwrap();
    assert_eq!(
        log.as_slice(),
        &[
            BonusSnapshot::new(BonusTier::Tier2, 0),
            BonusSnapshot::new(BonusTier::Empty, 0),
        ]
    );
    assert_eq!(
        third.new_record.bonus.bonus_updated.get(&month("2025-06")),
        Some(&true)
    );
}

#[test]
fn test_overwrite_updates_the_history_snapshot() {
    let record: StaffRecord = record_with(BonusTier::Tier1, 0);
    let first = record_month(&record, "2025-06", true, false).unwrap();

    let second = record_month(&first.new_record, "2025-06", false, true).unwrap();

    assert_eq!(
        second.new_record.bonus.bonus_history.get(&month("2025-06")),
        Some(&BonusSnapshot::new(BonusTier::Empty, 0))
    );
}

#[test]
fn test_overwrite_of_unrelated_month_is_independent() {
    let record: StaffRecord = record_with(BonusTier::Tier1, 0);
    let first = record_month(&record, "2025-06", true, false).unwrap();
    let second = record_month(&first.new_record, "2025-07", true, false).unwrap();

    // Overwriting July leaves June's history untouched.
    let third = record_month(&second.new_record, "2025-07", false, true).unwrap();

    assert_eq!(
        third.new_record.bonus.bonus_history.get(&month("2025-06")),
        Some(&BonusSnapshot::new(BonusTier::Tier2, 0))
    );
    assert!(
        third
            .new_record
            .bonus
            .overwrite_log
            .get(&month("2025-06"))
            .is_none()
    );
}
