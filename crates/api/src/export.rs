// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of per-staff bonus state and monthly aggregates.

use stafftrack::Roster;
use stafftrack_domain::{MonthKey, MonthlyStat, aggregate};
use std::io::Write;

use crate::error::ApiError;

/// The export header row, matching the legacy spreadsheet layout.
pub const EXPORT_HEADERS: [&str; 9] = [
    "Name",
    "Current Bonus",
    "Current Chance",
    "Scheduled Hours",
    "Attended Hours",
    "Tardiness Hours",
    "Absent Hours",
    "Attendance %",
    "Last Updated",
];

/// One flattened export row for a single staff member.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    /// The staff member's name.
    pub name: String,
    /// Current bonus tier, as hours.
    pub bonus: u32,
    /// Current banked chances.
    pub chance: u32,
    /// The exported month's scheduled hours, 0 if no data.
    pub scheduled: f64,
    /// The exported month's attended hours, 0 if no data.
    pub attended: f64,
    /// The exported month's tardiness hours, 0 if no data.
    pub tardiness: f64,
    /// The exported month's absent hours, 0 if no data.
    pub absent: f64,
    /// Attendance percentage, rounded to two decimals.
    pub attendance_pct: f64,
    /// Advisory last-update stamp, "N/A" when the record has none.
    pub last_updated: String,
}

/// Builds one export row per staff member, in name order.
///
/// Each row carries the aggregate for `month` if given, otherwise for that
/// staff member's latest month with data. A staff member with no aggregate
/// for the chosen month exports zeros - months with no data are absent from
/// the aggregation, so lookups default here.
///
/// # Arguments
///
/// * `roster` - The roster to export
/// * `month` - The month to export, or `None` for each member's latest
#[must_use]
pub fn export_rows(roster: &Roster, month: Option<&MonthKey>) -> Vec<ExportRow> {
    roster
        .iter()
        .map(|(name, record)| {
            let stats = aggregate(&record.attendance);
            let chosen: Option<&MonthKey> = month.or_else(|| stats.keys().next_back());
            let stat: MonthlyStat = chosen
                .and_then(|key| stats.get(key))
                .copied()
                .unwrap_or_default();

            ExportRow {
                name: String::from(name.value()),
                bonus: record.bonus.current_bonus.hours(),
                chance: record.bonus.current_chance,
                scheduled: stat.scheduled,
                attended: stat.attended,
                tardiness: stat.tardiness,
                absent: stat.absent,
                attendance_pct: stat.attendance_pct(),
                last_updated: record
                    .last_update
                    .as_ref()
                    .map_or_else(|| String::from("N/A"), ToString::to_string),
            }
        })
        .collect()
}

/// Writes export rows as CSV, header row included.
///
/// # Arguments
///
/// * `writer` - The CSV destination
/// * `rows` - The rows to write, typically from [`export_rows`]
///
/// # Errors
///
/// Returns an error if writing to the destination fails.
pub fn write_csv<W: Write>(writer: W, rows: &[ExportRow]) -> Result<(), ApiError> {
    let mut csv_writer: csv::Writer<W> = csv::Writer::from_writer(writer);
    csv_writer.write_record(EXPORT_HEADERS)?;

    for row in rows {
        csv_writer.write_record([
            row.name.as_str(),
            &row.bonus.to_string(),
            &row.chance.to_string(),
            &row.scheduled.to_string(),
            &row.attended.to_string(),
            &row.tardiness.to_string(),
            &row.absent.to_string(),
            &format!("{}%", row.attendance_pct),
            row.last_updated.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
