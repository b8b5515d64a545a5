// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use stafftrack::Roster;
use stafftrack_domain::{StaffName, StaffRecord};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A roster store backed by a single JSON document.
///
/// Writes go through a sibling temporary file followed by a rename, which
/// is sufficient for the single-writer flow this system assumes.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store for the document at `path`.
    ///
    /// The file does not need to exist yet; it is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the document path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full roster from the document.
    ///
    /// # Returns
    ///
    /// The roster, or an empty roster if the document does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contents are not a valid roster document
    pub fn load(&self) -> Result<Roster, PersistenceError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No staff document yet; starting empty");
            return Ok(Roster::new());
        }

        let contents: String =
            fs::read_to_string(&self.path).map_err(|err| PersistenceError::Io(err.to_string()))?;
        let staff: BTreeMap<StaffName, StaffRecord> = serde_json::from_str(&contents)
            .map_err(|err| PersistenceError::Deserialization(err.to_string()))?;

        info!(
            path = %self.path.display(),
            staff_count = staff.len(),
            "Loaded staff document"
        );
        Ok(Roster::from_map(staff))
    }

    /// Saves the full roster to the document.
    ///
    /// Parent directories are created as needed; the document is written
    /// pretty-printed to stay hand-inspectable.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The roster cannot be serialized
    /// - The temporary file cannot be written or renamed into place
    pub fn save(&self, roster: &Roster) -> Result<(), PersistenceError> {
        let json: String = serde_json::to_string_pretty(roster.as_map())
            .map_err(|err| PersistenceError::Serialization(err.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| PersistenceError::Io(err.to_string()))?;
        }

        let tmp: PathBuf = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|err| PersistenceError::Io(err.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|err| PersistenceError::Io(err.to_string()))?;

        info!(
            path = %self.path.display(),
            staff_count = roster.len(),
            "Saved staff document"
        );
        Ok(())
    }
}
