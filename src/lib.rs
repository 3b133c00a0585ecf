//! Batch search and replace across many files.
//!
//! Each search/replace pair becomes a [`structs::changeset::Changeset`]. The
//! [`services::orchestrator::Orchestrator`] runs one
//! [`services::mutation_engine::MutationEngine`] task per file, each with its own fork of the
//! changesets, and streams one [`structs::mutation_result::MutationResult`] per file back.

/// Config file loading and built-in defaults.
pub mod config;
/// Small closed sets: modes, statuses, formats.
pub mod enums;
/// Error taxonomy and reporting.
pub mod errors;
/// Serde default helpers.
pub mod helpers;
/// Result reporting.
pub mod logger;
/// Pattern compilation, file discovery, per-file rewriting and dispatch.
pub mod services;
/// Data types shared between the services.
pub mod structs;
/// Command execution.
pub mod workers;
