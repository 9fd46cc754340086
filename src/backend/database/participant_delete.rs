use crate::error::{AppError, AppResult};

/// Database-specific adapter for participant DELETE operations
pub trait ParticipantDeleter: Send + Sync {
    /// Execute participant delete
    /// Returns whether the participant was found and deleted
    fn execute_participant_delete(&self, registration_id: &str) -> AppResult<bool>;
}

/// Unified participant DELETE operations using the adapter pattern
///
/// Only the row is removed. Any image file the record referenced stays in
/// the managed directory.
pub struct UnifiedParticipantDeleteOps<T: ParticipantDeleter> {
    deleter: T,
}

impl<T: ParticipantDeleter> UnifiedParticipantDeleteOps<T> {
    pub fn new(deleter: T) -> Self {
        Self { deleter }
    }

    /// Delete a participant, failing with `NotFound` when the ID is unknown
    pub fn delete_participant(&self, registration_id: &str) -> AppResult<()> {
        let id = registration_id.trim();
        crate::validation::validate_registration_id(id)?;

        if self.deleter.execute_participant_delete(id)? {
            Ok(())
        } else {
            Err(AppError::NotFound(id.to_string()))
        }
    }
}
