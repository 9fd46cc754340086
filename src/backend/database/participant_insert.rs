use chrono::{DateTime, Utc};

use crate::error::AppResult;
use crate::models::{Participant, ParticipantForm};

/// Prepared participant data for database insertion
/// Contains the trimmed, validated record plus row bookkeeping
#[derive(Debug, Clone)]
pub struct PreparedParticipantData {
    pub participant: Participant,
    pub timestamp: DateTime<Utc>,
}

/// Database-specific adapter for participant INSERT operations
pub trait ParticipantInserter: Send + Sync {
    /// Execute participant insert and return the stored participant
    fn execute_participant_insert(&self, data: PreparedParticipantData) -> AppResult<Participant>;
}

/// Shared business logic for participant INSERT operations
pub struct ParticipantInsertProcessor;

impl ParticipantInsertProcessor {
    /// Prepare a participant for insertion
    ///
    /// This handles all common processing:
    /// - Whitespace trimming of every field
    /// - Required field and email format validation
    /// - Timestamp generation
    pub fn prepare_participant_for_insert(
        participant: &Participant,
    ) -> AppResult<PreparedParticipantData> {
        let form = ParticipantForm::from(participant.clone()).trimmed();
        crate::validation::validate_participant(&form)?;

        Ok(PreparedParticipantData {
            participant: form.to_participant(),
            timestamp: Utc::now(),
        })
    }
}

/// Unified participant INSERT operations using the adapter pattern
pub struct UnifiedParticipantInsertOps<T: ParticipantInserter> {
    inserter: T,
}

impl<T: ParticipantInserter> UnifiedParticipantInsertOps<T> {
    pub fn new(inserter: T) -> Self {
        Self { inserter }
    }

    /// Create a participant using shared logic and database-specific execution
    pub fn create_participant(&self, participant: &Participant) -> AppResult<Participant> {
        let prepared = ParticipantInsertProcessor::prepare_participant_for_insert(participant)?;
        self.inserter.execute_participant_insert(prepared)
    }
}
