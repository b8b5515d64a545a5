// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the StaffTrack system.
//!
//! The whole roster lives in a single JSON document whose layout matches
//! the legacy application's file, so existing documents load unchanged:
//! staff names as top-level keys, `lastUpdate` in camelCase, bonus tiers as
//! their hour values, and attendance entries that may still be legacy bare
//! numbers.
//!
//! The store never interprets the data; the core and domain crates own all
//! semantics. A missing file is not an error - it is an empty roster, the
//! first-run case.

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
mod json_store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use json_store::JsonStore;
