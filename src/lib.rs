pub mod backend;
pub mod config;
pub mod error;
pub mod images;
pub mod logging;
pub mod models;
pub mod registry;
pub mod startup;
pub mod utils;
pub mod validation;

// Re-export commonly used types for easier access
pub use error::{AppError, AppResult};
pub use images::{ImageStatus, ImageStore};
pub use models::{Participant, ParticipantForm};
pub use registry::{ParticipantView, Registry};
