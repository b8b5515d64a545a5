// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use stafftrack_audit::AuditEvent;
use stafftrack_domain::{BonusSnapshot, MonthKey, StaffRecord, WeekKey};

/// The business result of a successfully handled command.
///
/// Every variant is a recognized outcome, not a failure: a duplicate month
/// and a declined overwrite leave the record untouched but are still
/// ordinary return values the caller can present.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The month was finalized for the first time.
    Applied {
        /// The month that was finalized.
        month: MonthKey,
        /// The resulting tier and chance.
        snapshot: BonusSnapshot,
    },
    /// The month was already finalized with the same flag; nothing changed.
    AlreadyRecorded {
        /// The month that was already recorded.
        month: MonthKey,
    },
    /// The month was already finalized with the other flag and the caller
    /// did not confirm an overwrite; nothing changed.
    OverwriteDeclined {
        /// The month whose overwrite was declined.
        month: MonthKey,
    },
    /// The month's flag was overwritten after explicit confirmation.
    Overwritten {
        /// The month that was overwritten.
        month: MonthKey,
        /// The snapshot that was superseded, now preserved in the
        /// overwrite log. `None` if the month had no history entry to
        /// supersede (possible in documents written by older software).
        superseded: Option<BonusSnapshot>,
        /// The resulting tier and chance.
        snapshot: BonusSnapshot,
    },
    /// A week's attendance tally was recorded or replaced.
    WeekRecorded {
        /// The week that was recorded.
        week: WeekKey,
    },
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. The caller persists `new_record` (the engine never writes
/// anywhere itself) and may display or store the audit event.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new record after the transition.
    pub new_record: StaffRecord,
    /// The business outcome of the command.
    pub outcome: Outcome,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}
