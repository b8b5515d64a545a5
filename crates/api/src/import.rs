// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk CSV import of attendance and bonus data.
//!
//! This is NOT a monthly update: values are written directly into the
//! attendance map and bonus tier/chance without running the bonus engine's
//! state machine. No transition is applied, no history is recorded, and no
//! audit event is emitted - the escape hatch exists to seed or repair a
//! roster from spreadsheet data.

use csv::StringRecord;
use stafftrack::Roster;
use stafftrack_domain::{
    AttendanceValue, BonusTier, StaffName, StaffRecord, Timestamp, WeekKey, WeeklyTally,
};
use std::collections::HashMap;
use std::io::Read;
use tracing::{info, warn};

use crate::error::ApiError;

/// Counts reported after a bulk import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    /// Rows written into the roster.
    pub imported: usize,
    /// Rows skipped for want of a usable name.
    pub skipped: usize,
}

/// The only header a CSV file must carry.
const NAME_HEADER: &str = "name";

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant
/// matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Builds the normalized header-to-column map and checks for the Name column.
fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, ApiError> {
    let mut header_map: HashMap<String, usize> = HashMap::new();
    for (idx, header) in headers.iter().enumerate() {
        header_map.insert(normalize_header(header), idx);
    }

    if !header_map.contains_key(NAME_HEADER) {
        return Err(ApiError::InvalidCsvFormat {
            reason: String::from("Missing required header: Name"),
        });
    }

    Ok(header_map)
}

/// Coerces an hours field to a non-negative float, defaulting to 0.
fn coerce_hours(field: Option<&str>) -> f64 {
    field
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| *value >= 0.0)
        .unwrap_or(0.0)
}

/// Coerces a bonus hours field to a tier, defaulting to no bonus.
fn coerce_tier(field: Option<&str>) -> BonusTier {
    field
        .and_then(|value| value.trim().parse::<u32>().ok())
        .and_then(|hours| BonusTier::from_hours(hours).ok())
        .unwrap_or(BonusTier::Empty)
}

/// Coerces a chance field to a non-negative integer, defaulting to 0.
fn coerce_chance(field: Option<&str>) -> u32 {
    field
        .and_then(|value| value.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Imports attendance and bonus rows into the roster.
///
/// Recognized columns (case-insensitive, surrounding whitespace ignored):
/// `Name` (required), `Week Start`, `Scheduled Hours`, `Attended Hours`,
/// `Tardiness Hours`, `Absent Hours`, `Current Bonus`, `Current Chance`.
///
/// Per-row contract:
/// - A missing or empty name skips the row (counted, never fatal).
/// - A missing or unparseable `Week Start` falls back to `default_week`.
/// - Hours coerce to non-negative floats, defaulting to 0.
/// - `Current Bonus` / `Current Chance` overwrite the bonus state directly
///   when their columns are present, coercing failures to tier 0 / chance
///   0; when the columns are absent the existing bonus state is kept.
/// - Unknown staff members are created on the fly.
///
/// # Arguments
///
/// * `roster` - The roster to write into
/// * `reader` - The CSV source
/// * `default_week` - Week key for rows without a usable `Week Start`
/// * `recorded_at` - Advisory timestamp stamped on every touched record
///
/// # Errors
///
/// Returns an error if:
/// - The header row cannot be read or lacks a Name column
/// - The CSV source fails mid-read
pub fn import_csv<R: Read>(
    roster: &mut Roster,
    reader: R,
    default_week: &WeekKey,
    recorded_at: &Timestamp,
) -> Result<ImportSummary, ApiError> {
    let mut csv_reader: csv::Reader<R> = csv::Reader::from_reader(reader);
    let headers: StringRecord = csv_reader.headers()?.clone();
    let header_map: HashMap<String, usize> = validate_headers(&headers)?;

    let has_bonus_column: bool = header_map.contains_key("current_bonus");
    let has_chance_column: bool = header_map.contains_key("current_chance");

    let mut summary: ImportSummary = ImportSummary::default();

    for (row_number, row) in csv_reader.records().enumerate() {
        let row: StringRecord = row?;
        let field = |name: &str| -> Option<&str> {
            header_map
                .get(name)
                .and_then(|idx| row.get(*idx))
                .map(str::trim)
                .filter(|value| !value.is_empty())
        };

        let Some(name) = field(NAME_HEADER).and_then(|raw| StaffName::new(raw).ok()) else {
            warn!(row = row_number + 1, "Skipping row without a staff name");
            summary.skipped += 1;
            continue;
        };

        // A date-like field; anything unparseable falls back to the
        // caller's default week rather than losing the row.
        let week: WeekKey = field("week_start")
            .and_then(|raw| WeekKey::new(raw.get(..10).unwrap_or(raw)).ok())
            .unwrap_or_else(|| default_week.clone());

        let tally: WeeklyTally = WeeklyTally::new(
            coerce_hours(field("scheduled_hours")),
            coerce_hours(field("attended_hours")),
            coerce_hours(field("tardiness_hours")),
            coerce_hours(field("absent_hours")),
        );

        // Direct overwrite: the bulk loader bypasses the bonus engine.
        let mut record: StaffRecord =
            roster.get(&name).cloned().unwrap_or_else(StaffRecord::new);
        record
            .attendance
            .insert(String::from(week.as_str()), AttendanceValue::Tally(tally));
        if has_bonus_column {
            record.bonus.current_bonus = coerce_tier(field("current_bonus"));
        }
        if has_chance_column {
            record.bonus.current_chance = coerce_chance(field("current_chance"));
        }
        record.last_update = Some(recorded_at.clone());

        roster.upsert(name, record);
        summary.imported += 1;
    }

    info!(
        imported = summary.imported,
        skipped = summary.skipped,
        "Finished CSV import"
    );
    Ok(summary)
}
