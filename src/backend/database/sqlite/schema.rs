use rusqlite::Connection;

use super::PARTICIPANTS_TABLE;
use crate::error::{AppError, AppResult};

/// Initialize the participants table
///
/// The registration ID is the primary key, so SQLite itself rejects a second
/// row with the same ID. Existing tables are left untouched; there is no
/// migration.
pub fn init_schema(conn: &Connection) -> AppResult<()> {
    let sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            registration_id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            faculty TEXT NOT NULL,
            project_title TEXT NOT NULL,
            contact TEXT NOT NULL,
            email TEXT NOT NULL,
            image_path TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
        PARTICIPANTS_TABLE
    );

    conn.execute_batch(&sql)
        .map_err(|e| AppError::StorageFailure(format!("Failed to create participants table: {}", e)))?;

    Ok(())
}
