use chrono::{DateTime, Utc};

use crate::error::{AppError, AppResult};
use crate::models::{Participant, ParticipantForm};

/// Common trait for participant update operations across database backends
pub trait ParticipantUpdater: Send + Sync {
    /// Overwrite the stored row; `None` if no row has that registration ID
    fn execute_participant_update(
        &self,
        data: PreparedParticipantUpdateData,
    ) -> AppResult<Option<Participant>>;
}

/// Prepared participant data for database update operations
pub struct PreparedParticipantUpdateData {
    pub participant: Participant,
    pub timestamp: DateTime<Utc>,
}

/// Processor for common participant update business logic
pub struct ParticipantUpdateProcessor;

impl ParticipantUpdateProcessor {
    /// Prepare participant data for a full-replacement update
    ///
    /// Updates must satisfy the same rules as registration, since every
    /// stored field is overwritten.
    pub fn prepare_participant_for_update(
        participant: &Participant,
    ) -> AppResult<PreparedParticipantUpdateData> {
        let form = ParticipantForm::from(participant.clone()).trimmed();
        crate::validation::validate_participant(&form)?;

        Ok(PreparedParticipantUpdateData {
            participant: form.to_participant(),
            timestamp: Utc::now(),
        })
    }
}

/// Unified participant UPDATE operations using the adapter pattern
pub struct UnifiedParticipantUpdateOps<T: ParticipantUpdater> {
    updater: T,
}

impl<T: ParticipantUpdater> UnifiedParticipantUpdateOps<T> {
    pub fn new(updater: T) -> Self {
        Self { updater }
    }

    /// Update a participant, failing with `NotFound` when the ID is unknown
    pub fn update_participant(&self, participant: &Participant) -> AppResult<Participant> {
        let prepared = ParticipantUpdateProcessor::prepare_participant_for_update(participant)?;
        let id = prepared.participant.registration_id.clone();

        self.updater
            .execute_participant_update(prepared)?
            .ok_or(AppError::NotFound(id))
    }
}
