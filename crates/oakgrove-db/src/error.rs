//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`] which wraps the underlying
//! [`sqlx`] errors with additional context about which operation failed.

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored row holds data the domain types reject.
    #[error("Corrupt player row: {0}")]
    Corrupt(String),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
