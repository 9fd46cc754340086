//! SQLite implementations of the participant executors
//!
//! All executors share one `rusqlite::Connection` behind a mutex. The
//! registry is single-user, so the lock is never contended; it exists so the
//! backend can sit behind `Arc<dyn ParticipantBackend>`.

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub mod backend_impl;
pub mod participant_delete_impl;
pub mod participant_insert_impl;
pub mod participant_read_impl;
pub mod participant_update_impl;
pub mod schema;

pub use backend_impl::SqliteBackend;
pub use participant_delete_impl::SqliteParticipantDeleter;
pub use participant_insert_impl::SqliteParticipantInserter;
pub use participant_read_impl::SqliteParticipantReader;
pub use participant_update_impl::SqliteParticipantUpdater;

/// Connection handle shared by every executor of one backend
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Table holding one row per participant
pub const PARTICIPANTS_TABLE: &str = "participants";
