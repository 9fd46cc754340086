use rusqlite::params;

use super::super::participant_delete::ParticipantDeleter;
use super::{SharedConnection, PARTICIPANTS_TABLE};
use crate::error::{AppError, AppResult};

/// SQLite-specific implementation of ParticipantDeleter
pub struct SqliteParticipantDeleter {
    conn: SharedConnection,
}

impl SqliteParticipantDeleter {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

impl ParticipantDeleter for SqliteParticipantDeleter {
    fn execute_participant_delete(&self, registration_id: &str) -> AppResult<bool> {
        let conn = self.conn.lock()?;
        let sql = format!("DELETE FROM {} WHERE registration_id = ?1", PARTICIPANTS_TABLE);

        let deleted = conn
            .execute(&sql, params![registration_id])
            .map_err(|e| AppError::StorageFailure(format!("Failed to delete participant: {}", e)))?;

        Ok(deleted > 0)
    }
}
