//! Participant read operations
//!
//! This module provides common interfaces for participant read operations
//! that work across different database backends.

use crate::error::{AppError, AppResult};
use crate::models::Participant;

/// Trait for participant read operations
pub trait ParticipantReader: Send + Sync {
    /// Find a participant by exact registration ID
    fn find_participant_by_id(&self, registration_id: &str) -> AppResult<Option<Participant>>;

    /// Check whether a registration ID is stored
    fn participant_exists(&self, registration_id: &str) -> AppResult<bool>;
}

/// Unified participant read operations
///
/// Lookups are exact matches on the trimmed registration ID.
pub struct UnifiedParticipantReadOps<T: ParticipantReader> {
    reader: T,
}

impl<T: ParticipantReader> UnifiedParticipantReadOps<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }

    /// Find a participant, failing with `NotFound` when absent
    pub fn search(&self, registration_id: &str) -> AppResult<Participant> {
        let id = registration_id.trim();
        crate::validation::validate_registration_id(id)?;

        self.reader
            .find_participant_by_id(id)?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    pub fn exists(&self, registration_id: &str) -> AppResult<bool> {
        let id = registration_id.trim();
        if id.is_empty() {
            return Ok(false);
        }
        self.reader.participant_exists(id)
    }
}
