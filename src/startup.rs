use std::sync::Arc;

use tracing::info;

use crate::backend::database::sqlite::SqliteBackend;
use crate::backend::{Backend, ParticipantBackend};
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::images::ImageStore;
use crate::registry::Registry;

/// Prepare storage and build the registry
///
/// Creates the managed image directory, connects to the database and makes
/// sure the participants table exists. Any error here means the registry
/// cannot run and startup should be aborted.
pub fn initialize(config: &AppConfig) -> AppResult<Registry> {
    let images = ImageStore::new(config.images.dir.clone());
    images.ensure_dir()?;

    let backend_config = config.backend_config();
    let backend = SqliteBackend::connect(&backend_config)?;
    backend.init_schema()?;
    backend.health_check()?;

    info!(
        database = %backend_config.connection_path(),
        images = %images.dir().display(),
        "registry initialized"
    );

    let backend: Arc<dyn ParticipantBackend> = Arc::new(backend);
    Ok(Registry::new(backend, images))
}
