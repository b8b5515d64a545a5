// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, CoreError, TransitionResult, apply};
use stafftrack_domain::{BonusTier, MonthKey, StaffName, StaffRecord, Timestamp};

pub fn test_name() -> StaffName {
    StaffName::new("Ariel").expect("valid name")
}

pub fn test_stamp() -> Timestamp {
    Timestamp::new("2025-07-01 09:00")
}

pub fn month(key: &str) -> MonthKey {
    MonthKey::new(key).expect("valid month key")
}

pub fn record_with(bonus: BonusTier, chance: u32) -> StaffRecord {
    let mut record: StaffRecord = StaffRecord::new();
    record.bonus.current_bonus = bonus;
    record.bonus.current_chance = chance;
    record
}

/// Runs a `RecordMonth` command with the shared test identity and stamp.
pub fn record_month(
    record: &StaffRecord,
    key: &str,
    perfect: bool,
    allow_overwrite: bool,
) -> Result<TransitionResult, CoreError> {
    apply(
        &test_name(),
        record,
        Command::RecordMonth {
            month: month(key),
            perfect,
            allow_overwrite,
        },
        test_stamp(),
    )
}
