// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// A staff member's display name.
///
/// Names are trimmed at construction and must not be empty. The name is the
/// primary key of the roster, matching the legacy document layout.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffName(String);

impl StaffName {
    /// Creates a new `StaffName` from a raw string.
    ///
    /// # Arguments
    ///
    /// * `name` - The raw name; surrounding whitespace is trimmed
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStaffName` if the trimmed name is empty.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let trimmed: &str = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidStaffName(String::from(
                "Name cannot be empty",
            )));
        }
        Ok(Self(String::from(trimmed)))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StaffName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A week-identifying date in `YYYY-MM-DD` form.
///
/// By convention this is the Monday of an ISO week, but any valid calendar
/// date is accepted: the bulk import path supplies arbitrary dates and the
/// aggregation rules only ever look at the month portion.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekKey(String);

impl WeekKey {
    /// Creates a new `WeekKey`, validating that it is a real calendar date.
    ///
    /// # Arguments
    ///
    /// * `key` - The date string in `YYYY-MM-DD` form
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeekKey` if the string does not parse
    /// as a calendar date.
    pub fn new(key: &str) -> Result<Self, DomainError> {
        match NaiveDate::parse_from_str(key, "%Y-%m-%d") {
            // Store the canonical zero-padded form: chrono accepts
            // "2025-5-5" and the month derivation relies on fixed offsets.
            Ok(date) => Ok(Self(date.format("%Y-%m-%d").to_string())),
            Err(err) => Err(DomainError::InvalidWeekKey {
                key: String::from(key),
                error: err.to_string(),
            }),
        }
    }

    /// Returns the week key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives the month bucket this week is attributed to.
    ///
    /// The month is the first 7 characters of the key, i.e. the month
    /// containing the week's Monday, even if the week spans a boundary.
    #[must_use]
    pub fn month_key(&self) -> MonthKey {
        MonthKey(String::from(&self.0[..7]))
    }
}

impl std::fmt::Display for WeekKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `YYYY-MM` string identifying a monthly aggregation bucket.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthKey(String);

impl MonthKey {
    /// Creates a new `MonthKey`, validating the `YYYY-MM` shape.
    ///
    /// # Arguments
    ///
    /// * `key` - The month string, four digits, a dash, and a month 01-12
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonthKey` if the shape is wrong.
    pub fn new(key: &str) -> Result<Self, DomainError> {
        let bytes: &[u8] = key.as_bytes();
        let well_formed: bool = bytes.len() == 7
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[4] == b'-'
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(DomainError::InvalidMonthKey(String::from(key)));
        }

        let month: u8 = (bytes[5] - b'0') * 10 + (bytes[6] - b'0');
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidMonthKey(String::from(key)));
        }

        Ok(Self(String::from(key)))
    }

    /// Derives the month key for a calendar date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(format!("{:04}-{:02}", date.year(), date.month()))
    }

    /// Returns the month key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MonthKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One week's attendance tally, in hours.
///
/// A well-formed tally satisfies `attended + tardiness + absent == scheduled`
/// (see [`crate::validate_tally`]). That invariant is enforced when a week is
/// recorded, not when a document is read back: legacy documents may carry
/// entries that no longer satisfy it, and aggregation tolerates them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTally {
    /// Hours the staff member was scheduled to work.
    #[serde(default)]
    pub scheduled: f64,
    /// Hours actually attended.
    #[serde(default)]
    pub attended: f64,
    /// Hours lost to tardiness.
    #[serde(default)]
    pub tardiness: f64,
    /// Hours absent.
    #[serde(default)]
    pub absent: f64,
}

impl WeeklyTally {
    /// Creates a new `WeeklyTally`.
    #[must_use]
    pub const fn new(scheduled: f64, attended: f64, tardiness: f64, absent: f64) -> Self {
        Self {
            scheduled,
            attended,
            tardiness,
            absent,
        }
    }
}

/// A single value in the attendance map.
///
/// Older documents stored a bare number of hours per day instead of a
/// structured weekly tally. Those values round-trip through persistence
/// unchanged but are invisible to aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttendanceValue {
    /// A structured weekly tally.
    Tally(WeeklyTally),
    /// A legacy bare-number entry, carried through untouched.
    Legacy(f64),
}

impl AttendanceValue {
    /// Returns the structured tally, if this value is one.
    #[must_use]
    pub const fn as_tally(&self) -> Option<&WeeklyTally> {
        match self {
            Self::Tally(tally) => Some(tally),
            Self::Legacy(_) => None,
        }
    }
}

/// The attendance mapping of a single staff member.
///
/// Keys are raw week-key strings rather than validated [`WeekKey`]s so that
/// malformed legacy keys survive a load/save round trip; validation happens
/// at entry time and aggregation skips anything unparseable.
pub type AttendanceMap = BTreeMap<String, AttendanceValue>;

/// One rung of the bonus ladder.
///
/// The ladder is a fixed ordered sequence of hour values: 0 (no bonus earned
/// yet), then 20, 40, and 50. Advancement past the top rung wraps back to
/// [`BonusTier::Tier1`] and banks a chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BonusTier {
    /// No bonus earned yet (0 hours).
    #[default]
    Empty,
    /// First earned tier (20 hours).
    Tier1,
    /// Second tier (40 hours).
    Tier2,
    /// Top tier (50 hours).
    Tier3,
}

impl BonusTier {
    /// Returns the hour value of this tier.
    #[must_use]
    pub const fn hours(self) -> u32 {
        match self {
            Self::Empty => 0,
            Self::Tier1 => 20,
            Self::Tier2 => 40,
            Self::Tier3 => 50,
        }
    }

    /// Converts an hour value back into a tier.
    ///
    /// # Arguments
    ///
    /// * `hours` - The hour value; must be 0, 20, 40, or 50
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTier` for any other value. This is the
    /// corrupt-state check: documents written by other software may carry
    /// arbitrary numbers here.
    pub const fn from_hours(hours: u32) -> Result<Self, DomainError> {
        match hours {
            0 => Ok(Self::Empty),
            20 => Ok(Self::Tier1),
            40 => Ok(Self::Tier2),
            50 => Ok(Self::Tier3),
            _ => Err(DomainError::InvalidTier { hours }),
        }
    }

    /// Returns the next rung up the ladder.
    ///
    /// The top rung wraps back to [`BonusTier::Tier1`]; the caller is
    /// responsible for banking the chance that the wrap grants.
    #[must_use]
    pub const fn advance(self) -> Self {
        match self {
            Self::Empty | Self::Tier3 => Self::Tier1,
            Self::Tier1 => Self::Tier2,
            Self::Tier2 => Self::Tier3,
        }
    }

    /// Returns whether this is the top rung of the ladder.
    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self, Self::Tier3)
    }
}

impl std::fmt::Display for BonusTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hours())
    }
}

// Tiers persist as their hour values so documents stay compatible with the
// legacy layout ("current_bonus": 40).
impl Serialize for BonusTier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.hours())
    }
}

impl<'de> Deserialize<'de> for BonusTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hours: u32 = u32::deserialize(deserializer)?;
        Self::from_hours(hours).map_err(serde::de::Error::custom)
    }
}

/// The persisted result of one month's bonus update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusSnapshot {
    /// The bonus tier after the update.
    pub bonus: BonusTier,
    /// The chance count after the update.
    pub chance: u32,
}

impl BonusSnapshot {
    /// Creates a new `BonusSnapshot`.
    #[must_use]
    pub const fn new(bonus: BonusTier, chance: u32) -> Self {
        Self { bonus, chance }
    }
}

/// The complete bonus progression state of one staff member.
///
/// Created with an empty tier and zero chances when a staff member is added,
/// and mutated only by the bonus engine's monthly update (the bulk import
/// path may overwrite the tier and chance directly, as a deliberate escape
/// hatch that applies no transition).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BonusState {
    /// The currently held bonus tier.
    #[serde(default)]
    pub current_bonus: BonusTier,
    /// Banked credits that each absorb one imperfect month.
    #[serde(default)]
    pub current_chance: u32,
    /// The perfect-attendance flag recorded for each finalized month.
    ///
    /// This map is what makes the monthly update idempotent: re-recording a
    /// month with the same flag is a no-op, and a different flag requires an
    /// explicit overwrite confirmation.
    #[serde(default)]
    pub bonus_updated: BTreeMap<MonthKey, bool>,
    /// The resulting snapshot of each finalized month.
    #[serde(default)]
    pub bonus_history: BTreeMap<MonthKey, BonusSnapshot>,
    /// Superseded snapshots per month, in the order they were replaced.
    ///
    /// Append-only: an overwrite pushes the snapshot being replaced and
    /// nothing is ever removed.
    #[serde(default)]
    pub overwrite_log: BTreeMap<MonthKey, Vec<BonusSnapshot>>,
}

impl BonusState {
    /// Creates the initial bonus state for a newly added staff member.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_bonus: BonusTier::Empty,
            current_chance: 0,
            bonus_updated: BTreeMap::new(),
            bonus_history: BTreeMap::new(),
            overwrite_log: BTreeMap::new(),
        }
    }

    /// Captures the current tier and chance as a snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> BonusSnapshot {
        BonusSnapshot::new(self.current_bonus, self.current_chance)
    }
}

/// An advisory `YYYY-MM-DD HH:MM` timestamp.
///
/// Updated by any mutating operation; never interpreted, only displayed.
/// Callers construct it (usually via [`Timestamp::now`]) and pass it into
/// operations so the engine itself stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// Creates a `Timestamp` from a preformatted string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Captures the current local time.
    #[must_use]
    pub fn now() -> Self {
        Self(chrono::Local::now().format("%Y-%m-%d %H:%M").to_string())
    }

    /// Returns the timestamp as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The full record of one staff member.
///
/// Field names match the legacy JSON document (`lastUpdate` in particular)
/// so existing files load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StaffRecord {
    /// Weekly attendance entries, keyed by week-start date string.
    #[serde(default)]
    pub attendance: AttendanceMap,
    /// The bonus progression state.
    #[serde(default)]
    pub bonus: BonusState,
    /// Advisory timestamp of the last mutation.
    #[serde(rename = "lastUpdate", default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<Timestamp>,
}

impl StaffRecord {
    /// Creates an empty record with the initial bonus state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attendance: BTreeMap::new(),
            bonus: BonusState::new(),
            last_update: None,
        }
    }
}
