//! Error types returned by database and table operations.

use std::error;

/// Boxed error coming from the wrapped client.
pub type BoxError = Box<dyn error::Error + Send + Sync + 'static>;

/// Result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by [`Database`](crate::database::Database) and [`Table`](crate::table::Table).
///
/// Nothing is retried or swallowed: every failure of the wrapped client is surfaced as
/// soon as it happens. Match on [`Error::ItemNotFound`] to tell "absent" from "broken".
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Credentials could not be resolved from any source at construction time.
    #[error("unable to resolve AWS credentials: {message}")]
    Authentication {
        /// What went wrong while resolving credentials.
        message: String,
        /// The credentials provider error, if any.
        #[source]
        source: Option<BoxError>,
    },
    /// The service reports no table with this (prefixed) name.
    #[error("table `{table_name}` not found")]
    TableNotFound {
        /// The resolved table name.
        table_name: String,
    },
    /// No item is stored under the requested hash key.
    #[error("no item with key {key} in table `{table_name}`")]
    ItemNotFound {
        /// The resolved table name.
        table_name: String,
        /// Debug rendering of the requested key.
        key: String,
    },
    /// The table's key schema is not a single hash key.
    #[error("table `{table_name}` has an unsupported key schema: {reason}")]
    UnsupportedKeySchema {
        /// The resolved table name.
        table_name: String,
        /// Why the key schema was rejected.
        reason: String,
    },
    /// The key value does not have the hash key's declared type.
    #[error("key `{key_name}` of table `{table_name}` expects type {expected}, got {actual}")]
    KeyTypeMismatch {
        /// The resolved table name.
        table_name: String,
        /// The hash key attribute name.
        key_name: String,
        /// The declared type, e.g. `S`.
        expected: String,
        /// The type of the supplied value.
        actual: String,
    },
    /// A value could not be converted to or from DynamoDB attribute values.
    #[error(transparent)]
    Serialization(#[from] serde_dynamo::Error),
    /// Any other transport or service failure, carrying the wrapped client's error unmodified.
    #[error("service error: {0}")]
    Service(#[source] BoxError),
}

impl Error {
    /// Wrap an error of the underlying client.
    pub fn service<E>(err: E) -> Self
    where
        E: error::Error + Send + Sync + 'static,
    {
        Self::Service(Box::new(err))
    }

    /// `true` for [`Error::ItemNotFound`].
    pub fn is_item_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound { .. })
    }

    /// `true` for [`Error::TableNotFound`].
    pub fn is_table_not_found(&self) -> bool {
        matches!(self, Self::TableNotFound { .. })
    }
}
