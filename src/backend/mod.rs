use crate::error::AppResult;
use crate::models::Participant;
use std::sync::Arc;

pub mod database;

/// Core backend abstraction for the participant store
///
/// Every call is synchronous: it blocks until the underlying storage has
/// answered.
pub trait Backend: Send + Sync {
    /// Connect and initialize the storage backend
    fn connect(config: &crate::backend::database::DatabaseBackendConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Check if the storage backend is healthy and accessible
    fn health_check(&self) -> AppResult<()>;

    /// Create the participants table if it does not exist yet
    fn init_schema(&self) -> AppResult<()>;
}

/// Participant record operations, keyed by registration ID
pub trait ParticipantBackend: Backend {
    /// Insert a new participant; `DuplicateKey` if the registration ID is taken
    fn add(&self, participant: &Participant) -> AppResult<Participant>;

    /// Exact-match lookup; `NotFound` if no such registration ID
    fn search(&self, registration_id: &str) -> AppResult<Participant>;

    /// Whether a participant with this registration ID is stored
    fn exists(&self, registration_id: &str) -> AppResult<bool>;

    /// Overwrite every field of an existing participant; `NotFound` if absent
    fn update(&self, participant: &Participant) -> AppResult<Participant>;

    /// Remove a participant; `NotFound` if absent
    fn delete(&self, registration_id: &str) -> AppResult<()>;
}

/// Factory for creating backend instances
pub struct BackendFactory;

impl BackendFactory {
    /// Create a backend based on configuration
    pub fn create(
        config: &crate::backend::database::DatabaseBackendConfig,
    ) -> AppResult<Arc<dyn ParticipantBackend>> {
        let backend = Self::create_backend(config)?;
        Ok(Arc::from(backend))
    }

    /// Create a backend based on configuration (returns Box)
    pub fn create_backend(
        config: &crate::backend::database::DatabaseBackendConfig,
    ) -> AppResult<Box<dyn ParticipantBackend>> {
        let backend = crate::backend::database::sqlite::SqliteBackend::connect(config)?;
        Ok(Box::new(backend))
    }
}
