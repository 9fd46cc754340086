//! Form-facing operations of the exhibition registry.
//!
//! `Registry` is the only thing a front end talks to. It takes an immutable
//! [`ParticipantForm`], validates it, imports a newly chosen image into the
//! managed directory and then calls the record store. It has no knowledge of
//! how results are rendered.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::backend::ParticipantBackend;
use crate::error::{AppError, AppResult};
use crate::images::{ImageStatus, ImageStore};
use crate::models::{Participant, ParticipantForm};
use crate::validation;

/// A stored participant together with the resolved state of its image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantView {
    pub participant: Participant,
    pub image: ImageStatus,
}

pub struct Registry {
    backend: Arc<dyn ParticipantBackend>,
    images: ImageStore,
}

impl Registry {
    pub fn new(backend: Arc<dyn ParticipantBackend>, images: ImageStore) -> Self {
        Self { backend, images }
    }

    /// Register a new participant
    ///
    /// Validation and the duplicate check run before the image is copied, so
    /// a rejected submission never touches the managed directory.
    pub fn register(
        &self,
        form: &ParticipantForm,
        new_image: Option<&Path>,
    ) -> AppResult<Participant> {
        let form = form.trimmed();
        validation::validate_participant(&form)
            .inspect_err(|e| Self::log_rejection("register", &form, e))?;

        if self.backend.exists(&form.registration_id)? {
            let err = AppError::DuplicateKey(form.registration_id.clone());
            Self::log_rejection("register", &form, &err);
            return Err(err);
        }

        let participant = self.with_imported_image(form, new_image)?;
        let stored = self.backend.add(&participant)?;

        info!(registration_id = %stored.registration_id, "participant registered");
        Ok(stored)
    }

    /// Look a participant up by exact registration ID
    pub fn search(&self, registration_id: &str) -> AppResult<ParticipantView> {
        let id = registration_id.trim();
        validation::validate_registration_id(id)?;

        let participant = self.backend.search(id)?;
        let image = self.images.resolve(participant.image_path.as_deref());

        info!(registration_id = %id, "participant found");
        Ok(ParticipantView { participant, image })
    }

    /// Overwrite every field of an existing participant
    ///
    /// Without a new image, the form's current `image_path` is kept as long as
    /// it points into the managed directory; a form with no image clears the
    /// stored one.
    pub fn update(
        &self,
        form: &ParticipantForm,
        new_image: Option<&Path>,
    ) -> AppResult<Participant> {
        let form = form.trimmed();
        validation::validate_participant(&form)
            .inspect_err(|e| Self::log_rejection("update", &form, e))?;

        if !self.backend.exists(&form.registration_id)? {
            let err = AppError::NotFound(form.registration_id.clone());
            Self::log_rejection("update", &form, &err);
            return Err(err);
        }

        let participant = self.with_imported_image(form, new_image)?;
        let stored = self.backend.update(&participant)?;

        info!(registration_id = %stored.registration_id, "participant updated");
        Ok(stored)
    }

    /// Remove a participant; the image file stays on disk
    pub fn delete(&self, registration_id: &str) -> AppResult<()> {
        let id = registration_id.trim();
        validation::validate_registration_id(id)?;

        self.backend.delete(id)?;
        info!(registration_id = %id, "participant deleted");
        Ok(())
    }

    fn with_imported_image(
        &self,
        mut form: ParticipantForm,
        new_image: Option<&Path>,
    ) -> AppResult<Participant> {
        if let Some(source) = new_image {
            let managed = self.images.import(source)?;
            let path = managed.to_str().ok_or_else(|| {
                AppError::ImageCopyFailure(format!("{} is not valid UTF-8", managed.display()))
            })?;
            form.image_path = Some(path.to_string());
        } else if let Some(existing) = form.image_path.as_deref() {
            self.images
                .verify_managed(existing)
                .inspect_err(|e| Self::log_rejection("image", &form, e))?;
        }
        Ok(form.to_participant())
    }

    fn log_rejection(operation: &str, form: &ParticipantForm, err: &AppError) {
        warn!(
            operation,
            registration_id = %form.registration_id,
            error = %err,
            "submission rejected"
        );
    }
}
