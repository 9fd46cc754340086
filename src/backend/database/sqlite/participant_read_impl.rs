use rusqlite::{params, OptionalExtension, Row};

use super::super::participant_read::ParticipantReader;
use super::{SharedConnection, PARTICIPANTS_TABLE};
use crate::error::{AppError, AppResult};
use crate::models::Participant;

/// SQLite implementation of ParticipantReader
pub struct SqliteParticipantReader {
    conn: SharedConnection,
}

impl SqliteParticipantReader {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Convert a table row to a Participant
    ///
    /// Older rows may carry an empty string instead of NULL for "no image".
    fn row_to_participant(row: &Row<'_>) -> rusqlite::Result<Participant> {
        let image_path: Option<String> = row.get("image_path")?;
        Ok(Participant {
            registration_id: row.get("registration_id")?,
            name: row.get("name")?,
            faculty: row.get("faculty")?,
            project_title: row.get("project_title")?,
            contact: row.get("contact")?,
            email: row.get("email")?,
            image_path: image_path.filter(|p| !p.trim().is_empty()),
        })
    }
}

impl ParticipantReader for SqliteParticipantReader {
    fn find_participant_by_id(&self, registration_id: &str) -> AppResult<Option<Participant>> {
        let conn = self.conn.lock()?;
        let sql = format!(
            "SELECT registration_id, name, faculty, project_title, contact, email, image_path FROM {} WHERE registration_id = ?1",
            PARTICIPANTS_TABLE
        );

        conn.query_row(&sql, params![registration_id], Self::row_to_participant)
            .optional()
            .map_err(|e| AppError::StorageFailure(format!("Failed to fetch participant: {}", e)))
    }

    fn participant_exists(&self, registration_id: &str) -> AppResult<bool> {
        let conn = self.conn.lock()?;
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE registration_id = ?1)",
            PARTICIPANTS_TABLE
        );

        let found: i64 = conn.query_row(&sql, params![registration_id], |row| row.get(0))?;
        Ok(found != 0)
    }
}
