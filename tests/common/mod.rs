#![allow(dead_code)]

use exhibition_registry::backend::database::DatabaseBackendConfig;
use exhibition_registry::backend::{BackendFactory, ParticipantBackend};
use exhibition_registry::{ImageStore, ParticipantForm, Registry};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// A registry over in-memory SQLite and a temporary image directory
pub struct TestEnv {
    pub registry: Registry,
    pub backend: Arc<dyn ParticipantBackend>,
    pub tmp: TempDir,
}

impl TestEnv {
    pub fn image_dir(&self) -> PathBuf {
        self.tmp.path().join("images")
    }

    pub fn uploads_dir(&self) -> PathBuf {
        let dir = self.tmp.path().join("uploads");
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write a fake upload outside the managed directory
    pub fn write_upload(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.uploads_dir().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }
}

/// Create a registry for testing with an in-memory SQLite database
pub fn setup_test_registry() -> TestEnv {
    let backend = BackendFactory::create(&DatabaseBackendConfig::memory_sqlite()).unwrap();
    backend.init_schema().unwrap();

    let tmp = tempfile::tempdir().unwrap();
    let images = ImageStore::new(tmp.path().join("images"));
    images.ensure_dir().unwrap();

    TestEnv {
        registry: Registry::new(backend.clone(), images),
        backend,
        tmp,
    }
}

pub fn alice_form() -> ParticipantForm {
    ParticipantForm {
        registration_id: "R001".to_string(),
        name: "Alice".to_string(),
        faculty: "Eng".to_string(),
        project_title: "Robot".to_string(),
        contact: "555-1234".to_string(),
        email: "alice@uni.edu".to_string(),
        image_path: None,
    }
}

pub fn form_with_id(id: &str) -> ParticipantForm {
    ParticipantForm {
        registration_id: id.to_string(),
        ..alice_form()
    }
}

pub fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}
