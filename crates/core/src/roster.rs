// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use stafftrack_domain::{DomainError, StaffName, StaffRecord, Timestamp};
use std::collections::BTreeMap;

/// The in-memory table of all staff members.
///
/// The roster is an explicit store object passed to every operation - there
/// is no process-wide singleton. The design assumes exactly one writer at a
/// time (one interactive session); there is no locking and no transaction
/// isolation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Roster {
    staff: BTreeMap<StaffName, StaffRecord>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            staff: BTreeMap::new(),
        }
    }

    /// Wraps an already-loaded staff table.
    #[must_use]
    pub const fn from_map(staff: BTreeMap<StaffName, StaffRecord>) -> Self {
        Self { staff }
    }

    /// Returns the underlying table, for persistence.
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<StaffName, StaffRecord> {
        &self.staff
    }

    /// Adds a new staff member with the initial bonus state.
    ///
    /// # Arguments
    ///
    /// * `name` - The staff member's name
    /// * `recorded_at` - The advisory timestamp for the creation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateStaff` if the name is already present.
    pub fn add(&mut self, name: StaffName, recorded_at: Timestamp) -> Result<(), DomainError> {
        if self.staff.contains_key(&name) {
            return Err(DomainError::DuplicateStaff(name));
        }
        let mut record: StaffRecord = StaffRecord::new();
        record.last_update = Some(recorded_at);
        self.staff.insert(name, record);
        Ok(())
    }

    /// Removes a staff member, returning the removed record.
    ///
    /// This is the only operation that ever deletes bonus history.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StaffNotFound` if the name is absent.
    pub fn remove(&mut self, name: &StaffName) -> Result<StaffRecord, DomainError> {
        self.staff
            .remove(name)
            .ok_or_else(|| DomainError::StaffNotFound(name.clone()))
    }

    /// Looks up a staff member's record.
    #[must_use]
    pub fn get(&self, name: &StaffName) -> Option<&StaffRecord> {
        self.staff.get(name)
    }

    /// Replaces an existing staff member's record.
    ///
    /// This is how a [`crate::TransitionResult`] is persisted back into the
    /// table: the engine returns a new record and the caller swaps it in.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StaffNotFound` if the name is absent.
    pub fn replace(&mut self, name: &StaffName, record: StaffRecord) -> Result<(), DomainError> {
        match self.staff.get_mut(name) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(DomainError::StaffNotFound(name.clone())),
        }
    }

    /// Inserts or replaces a record without existence checks.
    ///
    /// This is the bulk-import escape hatch; interactive flows use
    /// [`Roster::add`] and [`Roster::replace`].
    pub fn upsert(&mut self, name: StaffName, record: StaffRecord) {
        self.staff.insert(name, record);
    }

    /// Iterates over staff members in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&StaffName, &StaffRecord)> {
        self.staff.iter()
    }

    /// Iterates over staff names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &StaffName> {
        self.staff.keys()
    }

    /// Returns the number of staff members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.staff.len()
    }

    /// Returns whether the roster has no staff members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }
}
