// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{JsonStore, PersistenceError};
use stafftrack::Roster;
use stafftrack_domain::{
    AttendanceValue, BonusTier, StaffName, StaffRecord, Timestamp, WeeklyTally,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A unique throwaway document path per test.
fn temp_doc() -> PathBuf {
    let id: usize = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "stafftrack-store-test-{}-{id}.json",
        std::process::id()
    ))
}

fn sample_roster() -> Roster {
    let mut roster: Roster = Roster::new();
    let name: StaffName = StaffName::new("Ariel").unwrap();
    roster
        .add(name.clone(), Timestamp::new("2025-05-05 09:00"))
        .unwrap();

    let mut record: StaffRecord = roster.get(&name).unwrap().clone();
    record.attendance.insert(
        String::from("2025-05-05"),
        AttendanceValue::Tally(WeeklyTally::new(40.0, 32.0, 8.0, 0.0)),
    );
    record.bonus.current_bonus = BonusTier::Tier2;
    record.bonus.current_chance = 1;
    roster.replace(&name, record).unwrap();
    roster
}

#[test]
fn test_load_of_missing_file_is_an_empty_roster() {
    let store: JsonStore = JsonStore::new(temp_doc());

    let roster: Roster = store.load().unwrap();

    assert!(roster.is_empty());
}

#[test]
fn test_save_then_load_round_trips_the_roster() {
    let path: PathBuf = temp_doc();
    let store: JsonStore = JsonStore::new(path.clone());
    let roster: Roster = sample_roster();

    store.save(&roster).unwrap();
    let loaded: Roster = store.load().unwrap();

    assert_eq!(loaded, roster);
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_save_creates_parent_directories() {
    let dir: PathBuf = temp_doc();
    let path: PathBuf = dir.join("nested").join("staff.json");
    let store: JsonStore = JsonStore::new(path.clone());

    store.save(&Roster::new()).unwrap();

    assert!(path.exists());
    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_save_replaces_an_existing_document() {
    let path: PathBuf = temp_doc();
    let store: JsonStore = JsonStore::new(path.clone());
    store.save(&sample_roster()).unwrap();

    store.save(&Roster::new()).unwrap();
    let loaded: Roster = store.load().unwrap();

    assert!(loaded.is_empty());
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_load_of_garbage_file_reports_deserialization_error() {
    let path: PathBuf = temp_doc();
    std::fs::write(&path, "not json at all").unwrap();
    let store: JsonStore = JsonStore::new(path.clone());

    let result: Result<Roster, PersistenceError> = store.load();

    assert!(matches!(result, Err(PersistenceError::Deserialization(_))));
    std::fs::remove_file(path).unwrap();
}
