use rusqlite::{params, Connection};
use tracing::debug;

use super::super::participant_insert::{ParticipantInserter, PreparedParticipantData};
use super::{SharedConnection, PARTICIPANTS_TABLE};
use crate::error::{AppError, AppResult};
use crate::models::Participant;
use crate::utils::format_timestamp;

/// SQLite-specific implementation of ParticipantInserter
pub struct SqliteParticipantInserter {
    conn: SharedConnection,
}

impl SqliteParticipantInserter {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Check for an existing row with the same registration ID
    fn check_duplicate_registration_id(conn: &Connection, registration_id: &str) -> AppResult<()> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE registration_id = ?1",
            PARTICIPANTS_TABLE
        );

        let count: i64 = conn
            .query_row(&sql, params![registration_id], |row| row.get(0))
            .map_err(|e| {
                AppError::StorageFailure(format!("Failed to check duplicate registration ID: {}", e))
            })?;

        if count > 0 {
            return Err(AppError::DuplicateKey(registration_id.to_string()));
        }

        Ok(())
    }
}

impl ParticipantInserter for SqliteParticipantInserter {
    fn execute_participant_insert(&self, data: PreparedParticipantData) -> AppResult<Participant> {
        let conn = self.conn.lock()?;
        let p = &data.participant;

        Self::check_duplicate_registration_id(&conn, &p.registration_id)?;

        let sql = format!(
            "INSERT INTO {} (registration_id, name, faculty, project_title, contact, email, image_path, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            PARTICIPANTS_TABLE
        );
        let timestamp = format_timestamp(data.timestamp);

        conn.execute(
            &sql,
            params![
                p.registration_id,
                p.name,
                p.faculty,
                p.project_title,
                p.contact,
                p.email,
                p.image_path,
                timestamp,
                timestamp,
            ],
        )
        .map_err(|e| map_database_error(e, &p.registration_id))?;

        debug!(registration_id = %p.registration_id, "participant row inserted");
        Ok(data.participant)
    }
}

/// Map an insert failure, turning primary-key violations into `DuplicateKey`
pub fn map_database_error(error: rusqlite::Error, registration_id: &str) -> AppError {
    match &error {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            AppError::DuplicateKey(registration_id.to_string())
        }
        _ => AppError::StorageFailure(format!("Failed to create participant: {}", error)),
    }
}
