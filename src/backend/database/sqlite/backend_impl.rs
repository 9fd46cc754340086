use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::info;

use super::super::config::DatabaseBackendConfig;
use super::SharedConnection;
use crate::backend::database::{
    SqliteParticipantDeleter, SqliteParticipantInserter, SqliteParticipantReader,
    SqliteParticipantUpdater, UnifiedParticipantDeleteOps, UnifiedParticipantInsertOps,
    UnifiedParticipantReadOps, UnifiedParticipantUpdateOps,
};
use crate::backend::{Backend, ParticipantBackend};
use crate::error::{AppError, AppResult};
use crate::models::Participant;

/// SQLite database backend implementation
///
/// One connection, opened at startup and closed when the backend is dropped.
pub struct SqliteBackend {
    conn: SharedConnection,
    insert_ops: UnifiedParticipantInsertOps<SqliteParticipantInserter>,
    read_ops: UnifiedParticipantReadOps<SqliteParticipantReader>,
    update_ops: UnifiedParticipantUpdateOps<SqliteParticipantUpdater>,
    delete_ops: UnifiedParticipantDeleteOps<SqliteParticipantDeleter>,
}

impl SqliteBackend {
    /// Create a new SQLite backend over an open connection
    pub fn new(conn: Connection) -> Self {
        let conn: SharedConnection = Arc::new(Mutex::new(conn));

        Self {
            insert_ops: UnifiedParticipantInsertOps::new(SqliteParticipantInserter::new(
                conn.clone(),
            )),
            read_ops: UnifiedParticipantReadOps::new(SqliteParticipantReader::new(conn.clone())),
            update_ops: UnifiedParticipantUpdateOps::new(SqliteParticipantUpdater::new(
                conn.clone(),
            )),
            delete_ops: UnifiedParticipantDeleteOps::new(SqliteParticipantDeleter::new(
                conn.clone(),
            )),
            conn,
        }
    }

    /// Get the shared connection handle
    pub fn connection(&self) -> &SharedConnection {
        &self.conn
    }
}

impl Backend for SqliteBackend {
    fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;

        let conn = if config.is_memory_database() {
            Connection::open_in_memory()
        } else {
            Connection::open(config.connection_path())
        }
        .map_err(|e| AppError::StorageFailure(format!("Failed to connect to SQLite: {}", e)))?;

        conn.busy_timeout(Duration::from_secs(config.connection_timeout))?;
        for (pragma, value) in &config.options {
            conn.pragma_update(None, pragma.as_str(), value)
                .map_err(|e| {
                    AppError::Configuration(format!("Failed to set pragma {}: {}", pragma, e))
                })?;
        }

        info!(database = %config.connection_path(), "connected to SQLite");
        Ok(Self::new(conn))
    }

    fn health_check(&self) -> AppResult<()> {
        let conn = self.conn.lock()?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map_err(|e| AppError::StorageFailure(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    fn init_schema(&self) -> AppResult<()> {
        let conn = self.conn.lock()?;
        super::schema::init_schema(&conn)
    }
}

impl ParticipantBackend for SqliteBackend {
    fn add(&self, participant: &Participant) -> AppResult<Participant> {
        self.insert_ops.create_participant(participant)
    }

    fn search(&self, registration_id: &str) -> AppResult<Participant> {
        self.read_ops.search(registration_id)
    }

    fn exists(&self, registration_id: &str) -> AppResult<bool> {
        self.read_ops.exists(registration_id)
    }

    fn update(&self, participant: &Participant) -> AppResult<Participant> {
        self.update_ops.update_participant(participant)
    }

    fn delete(&self, registration_id: &str) -> AppResult<()> {
        self.delete_ops.delete_participant(registration_id)
    }
}
