//! `club-dues` - A dues and roster ledger for a youth football school
//!
//! This crate tracks player registrations and monthly dues per age-group
//! category, keeps a biographical roster, and records one-off uniform and
//! tournament charges. Everything persists as spreadsheet-shaped tables
//! through a pluggable storage backend; a CLI binary is the surface.

// Deny the most critical lints that could lead to bugs
#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,
    future_incompatible,
    rust_2018_idioms
)]
// Allow some pedantic lints that are too noisy here
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

/// Time-boxed read cache for table snapshots
pub mod cache;
/// CLI surface - argument parsing and command handlers
pub mod commands;
/// Configuration management for categories and storage settings
pub mod config;
/// Core business logic - category, roster, charge, report and export operations
pub mod core;
/// Typed records for each table kind
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Pluggable table storage backends
pub mod storage;

#[cfg(test)]
pub mod test_utils;
