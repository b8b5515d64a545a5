// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Roster;
use crate::tests::helpers::{test_name, test_stamp};
use stafftrack_domain::{BonusTier, DomainError, StaffName, StaffRecord};

#[test]
fn test_add_creates_the_initial_record() {
    let mut roster: Roster = Roster::new();

    roster.add(test_name(), test_stamp()).unwrap();

    let record: &StaffRecord = roster.get(&test_name()).unwrap();
    assert_eq!(record.bonus.current_bonus, BonusTier::Empty);
    assert_eq!(record.bonus.current_chance, 0);
    assert!(record.attendance.is_empty());
    assert_eq!(record.last_update, Some(test_stamp()));
}

#[test]
fn test_add_rejects_duplicate_names() {
    let mut roster: Roster = Roster::new();
    roster.add(test_name(), test_stamp()).unwrap();

    let result: Result<(), DomainError> = roster.add(test_name(), test_stamp());

    assert_eq!(result, Err(DomainError::DuplicateStaff(test_name())));
    assert_eq!(roster.len(), 1);
}

#[test]
fn test_remove_returns_the_record() {
    let mut roster: Roster = Roster::new();
    roster.add(test_name(), test_stamp()).unwrap();

    let removed: StaffRecord = roster.remove(&test_name()).unwrap();

    assert_eq!(removed.last_update, Some(test_stamp()));
    assert!(roster.is_empty());
}

#[test]
fn test_remove_unknown_name_fails() {
    let mut roster: Roster = Roster::new();

    let result: Result<StaffRecord, DomainError> = roster.remove(&test_name());

    assert_eq!(result, Err(DomainError::StaffNotFound(test_name())));
}

#[test]
fn test_replace_swaps_in_a_new_record() {
    let mut roster: Roster = Roster::new();
    roster.add(test_name(), test_stamp()).unwrap();

    let mut updated: StaffRecord = StaffRecord::new();
    updated.bonus.current_bonus = BonusTier::Tier2;
    roster.replace(&test_name(), updated).unwrap();

    assert_eq!(
        roster.get(&test_name()).unwrap().bonus.current_bonus,
        BonusTier::Tier2
    );
}

#[test]
fn test_replace_unknown_name_fails() {
    let mut roster: Roster = Roster::new();

    let result: Result<(), DomainError> =
        roster.replace(&test_name(), StaffRecord::new());

    assert_eq!(result, Err(DomainError::StaffNotFound(test_name())));
}

#[test]
fn test_upsert_creates_without_existence_checks() {
    let mut roster: Roster = Roster::new();

    roster.upsert(test_name(), StaffRecord::new());
    roster.upsert(test_name(), StaffRecord::new());

    assert_eq!(roster.len(), 1);
}

#[test]
fn test_names_iterate_in_sorted_order() {
    let mut roster: Roster = Roster::new();
    for name in ["Mara", "Ariel", "Zoe"] {
        roster
            .add(StaffName::new(name).unwrap(), test_stamp())
            .unwrap();
    }

    let names: Vec<&str> = roster.names().map(StaffName::value).collect();

    assert_eq!(names, vec!["Ariel", "Mara", "Zoe"]);
}
