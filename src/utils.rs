//! Utility functions shared across the registry

use chrono::{DateTime, Utc};

/// Formats a DateTime as an RFC 3339 timestamp with millisecond precision
///
/// This is the representation stored in the `created_at` / `updated_at`
/// columns, e.g. `2025-03-01T12:30:45.123Z`.
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
