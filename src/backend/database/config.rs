use std::collections::HashMap;

/// Configuration for the database backend
///
/// The registry stores everything in one embedded SQLite database, either a
/// file on disk or an in-memory database for tests.
#[derive(Debug, Clone)]
pub struct DatabaseBackendConfig {
    /// Connection URL for the storage backend
    /// Examples:
    /// - "sqlite:./exhibition.db"
    /// - "exhibition.sqlite"
    /// - ":memory:" or "sqlite::memory:"
    pub connection_url: String,

    /// How long a statement waits on a locked database file, in seconds
    pub connection_timeout: u64,

    /// SQLite pragmas applied right after connecting (e.g. `synchronous = NORMAL`)
    pub options: HashMap<String, String>,
}

impl DatabaseBackendConfig {
    /// Create a new storage configuration
    pub fn new(connection_url: String) -> Self {
        Self {
            connection_url,
            connection_timeout: 30,
            options: HashMap::new(),
        }
    }

    /// Create a SQLite configuration
    pub fn sqlite(connection_url: String) -> Self {
        Self::new(connection_url)
    }

    /// Create an in-memory SQLite configuration for testing
    pub fn memory_sqlite() -> Self {
        Self::new(":memory:".to_string())
    }

    /// Set connection timeout
    pub fn with_connection_timeout(mut self, timeout_seconds: u64) -> Self {
        self.connection_timeout = timeout_seconds;
        self
    }

    /// Add a pragma to apply on connect
    pub fn with_option(mut self, key: String, value: String) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Filesystem path (or `:memory:`) with any `sqlite:` scheme removed
    pub fn connection_path(&self) -> &str {
        self.connection_url
            .strip_prefix("sqlite://")
            .or_else(|| self.connection_url.strip_prefix("sqlite:"))
            .unwrap_or(&self.connection_url)
    }

    /// Check if this is an in-memory database
    pub fn is_memory_database(&self) -> bool {
        self.connection_path() == ":memory:"
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.connection_url.trim().is_empty() {
            return Err("Connection URL cannot be empty".to_string());
        }

        if !self.connection_url.starts_with("sqlite:")
            && self.connection_url != ":memory:"
            && !self.connection_url.ends_with(".db")
            && !self.connection_url.ends_with(".sqlite")
        {
            return Err("SQLite connection URL must start with 'sqlite:', be ':memory:', or end with '.db' or '.sqlite'".to_string());
        }

        if self.connection_path().is_empty() {
            return Err("SQLite connection URL has no database path".to_string());
        }

        Ok(())
    }
}

impl Default for DatabaseBackendConfig {
    fn default() -> Self {
        Self::memory_sqlite()
    }
}
