use rusqlite::params;
use tracing::debug;

use super::super::participant_update::{ParticipantUpdater, PreparedParticipantUpdateData};
use super::{SharedConnection, PARTICIPANTS_TABLE};
use crate::error::{AppError, AppResult};
use crate::models::Participant;
use crate::utils::format_timestamp;

/// SQLite-specific implementation of ParticipantUpdater
///
/// Every column except `created_at` is overwritten in a single statement.
pub struct SqliteParticipantUpdater {
    conn: SharedConnection,
}

impl SqliteParticipantUpdater {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

impl ParticipantUpdater for SqliteParticipantUpdater {
    fn execute_participant_update(
        &self,
        data: PreparedParticipantUpdateData,
    ) -> AppResult<Option<Participant>> {
        let conn = self.conn.lock()?;
        let p = &data.participant;
        let sql = format!(
            "UPDATE {} SET name = ?2, faculty = ?3, project_title = ?4, contact = ?5, email = ?6, image_path = ?7, updated_at = ?8 WHERE registration_id = ?1",
            PARTICIPANTS_TABLE
        );

        let changed = conn
            .execute(
                &sql,
                params![
                    p.registration_id,
                    p.name,
                    p.faculty,
                    p.project_title,
                    p.contact,
                    p.email,
                    p.image_path,
                    format_timestamp(data.timestamp),
                ],
            )
            .map_err(|e| AppError::StorageFailure(format!("Failed to update participant: {}", e)))?;

        if changed == 0 {
            return Ok(None);
        }

        debug!(registration_id = %p.registration_id, "participant row updated");
        Ok(Some(data.participant))
    }
}
