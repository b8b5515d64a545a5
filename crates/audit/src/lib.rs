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
    clippy::all
)]

use stafftrack_domain::{BonusState, StaffName};

/// Represents the specific action performed.
///
/// An action describes what state change occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`RecordMonth`", "`RecordWeek`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A rendered snapshot of one staff member's bonus state.
///
/// Snapshots are display strings, not structured data: they exist so an
/// audit trail can show what the state looked like around a transition
/// without coupling the trail to the state's layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a `StateSnapshot` from a pre-rendered string.
    ///
    /// # Arguments
    ///
    /// * `data` - A string representation of the state
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }

    /// Renders a bonus state into a snapshot.
    #[must_use]
    pub fn of(state: &BonusState) -> Self {
        Self {
            data: format!(
                "bonus={},chance={},months_recorded={}",
                state.current_bonus.hours(),
                state.current_chance,
                state.bonus_updated.len()
            ),
        }
    }
}

/// An immutable audit event representing a state transition.
///
/// Every successful state change produces exactly one audit event. Audit
/// events are immutable once created and capture:
/// - Which staff member was affected
/// - What action was performed
/// - The state before the transition (before)
/// - The state after the transition (after)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The staff member whose record changed.
    pub staff: StaffName,
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// Once created, an audit event is immutable.
    ///
    /// # Arguments
    ///
    /// * `staff` - The staff member whose record changed
    /// * `action` - The action that was performed
    /// * `before` - The state before the transition
    /// * `after` - The state after the transition
    #[must_use]
    pub const fn new(
        staff: StaffName,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Self {
        Self {
            staff,
            action,
            before,
            after,
        }
    }
}
