// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV import/export boundary for the StaffTrack system.
//!
//! Import is the deliberate bulk-load escape hatch: rows are coerced
//! leniently and written straight into the attendance map and bonus
//! tier/chance, bypassing the bonus engine's monthly state machine. Export
//! flattens each staff member's bonus state plus one month's aggregate
//! into spreadsheet-friendly rows.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod export;
mod import;

#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use export::{EXPORT_HEADERS, ExportRow, export_rows, write_csv};
pub use import::{ImportSummary, import_csv};
