// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the import/export boundary.

use thiserror::Error;

/// Errors that can occur while importing or exporting CSV files.
///
/// Note that data-quality problems in individual rows are not errors: the
/// import contract coerces or skips them and reports counts instead.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The CSV file is structurally unusable (e.g. missing the Name column).
    #[error("Invalid CSV format: {reason}")]
    InvalidCsvFormat {
        /// Why the file was rejected.
        reason: String,
    },

    /// The CSV reader or writer failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An underlying I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
