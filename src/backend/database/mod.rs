//! Database layer for the participant registry
//!
//! Shared business logic (validation, trimming, timestamps) lives in the
//! per-operation processor modules; SQL execution lives in `sqlite/`.
//!
//! # Architecture
//!
//! ```text
//! Common Logic (participant_insert.rs, participant_update.rs, ...)
//!     ↓
//! Database-specific implementations
//!     └── sqlite/ (rusqlite executors over one shared connection)
//! ```

pub mod config;
pub mod participant_delete;
pub mod participant_insert;
pub mod participant_read;
pub mod participant_update;
pub mod sqlite;

// Re-export key types for convenience
pub use config::DatabaseBackendConfig;

pub use participant_insert::UnifiedParticipantInsertOps;

pub use participant_read::UnifiedParticipantReadOps;

pub use participant_update::UnifiedParticipantUpdateOps;

pub use participant_delete::UnifiedParticipantDeleteOps;

pub use sqlite::{
    SqliteBackend, SqliteParticipantDeleter, SqliteParticipantInserter, SqliteParticipantReader,
    SqliteParticipantUpdater,
};
