use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// One or more required fields were blank after trimming.
    EmptyField(Vec<String>),
    InvalidEmail(String),
    DuplicateKey(String),
    NotFound(String),
    StorageFailure(String),
    Rusqlite(rusqlite::Error),
    Serialization(serde_json::Error),
    ImageCopyFailure(String),
    UnsupportedImage(String),
    Configuration(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EmptyField(fields) => write!(f, "Empty field(s): {}", fields.join(", ")),
            AppError::InvalidEmail(e) => write!(f, "Invalid email: {}", e),
            AppError::DuplicateKey(id) => write!(f, "Duplicate registration ID: {}", id),
            AppError::NotFound(id) => write!(f, "Participant not found: {}", id),
            AppError::StorageFailure(e) => write!(f, "Storage error: {}", e),
            AppError::Rusqlite(e) => write!(f, "SQLite error: {}", e),
            AppError::Serialization(e) => write!(f, "Serialization error: {}", e),
            AppError::ImageCopyFailure(e) => write!(f, "Image copy error: {}", e),
            AppError::UnsupportedImage(e) => write!(f, "Unsupported image: {}", e),
            AppError::Configuration(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Rusqlite(e) => Some(e),
            AppError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Rusqlite(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err)
    }
}

impl From<std::sync::PoisonError<std::sync::MutexGuard<'_, rusqlite::Connection>>> for AppError {
    fn from(err: std::sync::PoisonError<std::sync::MutexGuard<'_, rusqlite::Connection>>) -> Self {
        AppError::StorageFailure(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Message shown to the person filling in the form.
    pub fn user_message(&self) -> String {
        match self {
            AppError::EmptyField(_) => "Please fill in all fields.".to_string(),
            AppError::InvalidEmail(_) => "Invalid email format.".to_string(),
            AppError::DuplicateKey(id) => {
                format!("Registration failed: ID '{}' is already registered.", id)
            }
            AppError::NotFound(_) => "No participant found.".to_string(),
            AppError::StorageFailure(_) | AppError::Rusqlite(_) => {
                "Database error. Please try again.".to_string()
            }
            AppError::Serialization(e) => format!("Could not format the record: {}", e),
            AppError::ImageCopyFailure(e) => format!("Error copying image: {}", e),
            AppError::UnsupportedImage(_) => {
                "Only jpg, jpeg, png and gif images are supported.".to_string()
            }
            AppError::Configuration(e) => format!("Configuration error: {}", e),
        }
    }

    /// Whether the error came from validating user input rather than from storage.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::EmptyField(_) | AppError::InvalidEmail(_) | AppError::UnsupportedImage(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_empty_fields() {
        let err = AppError::EmptyField(vec!["name".to_string(), "email".to_string()]);
        assert_eq!(err.to_string(), "Empty field(s): name, email");
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            AppError::EmptyField(vec![]).user_message(),
            "Please fill in all fields."
        );
        assert_eq!(
            AppError::NotFound("R001".to_string()).user_message(),
            "No participant found."
        );
        assert!(AppError::DuplicateKey("R001".to_string())
            .user_message()
            .contains("R001"));
    }

    #[test]
    fn test_rusqlite_conversion_keeps_source() {
        let err: AppError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, AppError::Rusqlite(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_serialization_error_is_not_a_database_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::Serialization(_)));
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.user_message().contains("Database"));
    }

    #[test]
    fn test_is_validation() {
        assert!(AppError::InvalidEmail("x".to_string()).is_validation());
        assert!(!AppError::StorageFailure("x".to_string()).is_validation());
    }
}
