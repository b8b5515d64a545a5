// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use stafftrack_domain::{MonthKey, WeekKey, WeeklyTally};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request record changes through the engine.
/// The bulk import path deliberately bypasses commands (see the api crate);
/// everything else goes through [`crate::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Finalize one calendar month's bonus outcome.
    RecordMonth {
        /// The month being finalized.
        month: MonthKey,
        /// Whether the month qualifies as perfect attendance.
        perfect: bool,
        /// Caller-resolved confirmation that an already-recorded month with
        /// a conflicting flag may be overwritten. The engine never prompts;
        /// it only honors this answer.
        allow_overwrite: bool,
    },
    /// Record or replace one week's attendance tally.
    RecordWeek {
        /// The week-start date.
        week: WeekKey,
        /// The hours tally for that week.
        tally: WeeklyTally,
    },
}
