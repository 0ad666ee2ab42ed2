//! Per-connection handle resolving table names to cached [`Table`]s.

use crate::{
    config::{self, Config},
    connection::Connection,
    error::Result,
    schema, table::Table,
};

use aws_sdk_dynamodb::Client;
use std::{
    collections,
    sync::{Arc, PoisonError, RwLock},
};

/// Entry point: owns the connection and a cache of the tables resolved through it.
///
/// ```rust,no_run
/// use dynamodb_dict::{Database, config};
/// use serde_json::json;
///
/// # async fn example() -> dynamodb_dict::Result<()> {
/// let db = Database::connect(config::Config {
///     table_name_prefix: "app_".to_string(),
///     ..Default::default()
/// })
/// .await?;
///
/// // Resolves to the `app_user` table, whose hash key is `email`.
/// let users = db.table("user").await?;
/// users
///     .put("john@example.com", json!({"first_name": "John", "last_name": "Johnson"}))
///     .await?;
/// let john = users.get("john@example.com").await?;
/// assert_eq!(john.get_as::<String>("email").transpose()?.as_deref(), Some("john@example.com"));
/// users.delete("john@example.com").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Database<C = Client> {
    connection: Arc<C>,
    table_name_prefix: String,
    tables: RwLock<collections::HashMap<String, Arc<Table<C>>>>,
}

impl Database<Client> {
    /// Connect to DynamoDB.
    ///
    /// Credentials are resolved immediately: explicit ones from `config` first, then the
    /// environment, then the shared AWS files. Fails with
    /// [`Error::Authentication`](crate::Error::Authentication) when none can be found.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_dict.connect", skip_all, err)
    )]
    pub async fn connect(config: Config) -> Result<Self> {
        let sdk_config = config.load_sdk_config().await;
        config::resolve_credentials(&sdk_config).await?;
        Ok(Self::with_connection(
            Client::new(&sdk_config),
            config.table_name_prefix,
        ))
    }
}

impl<C: Connection> Database<C> {
    /// Wrap an existing connection.
    pub fn with_connection(connection: C, table_name_prefix: impl Into<String>) -> Self {
        Self {
            connection: Arc::new(connection),
            table_name_prefix: table_name_prefix.into(),
            tables: RwLock::default(),
        }
    }

    /// The wrapped client, for operations this crate does not cover.
    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// The prefix prepended to every table name.
    pub fn table_name_prefix(&self) -> &str {
        &self.table_name_prefix
    }

    /// The service-side name of the logical table `name`.
    pub fn resolve_table_name(&self, name: &str) -> String {
        format!("{}{name}", self.table_name_prefix)
    }

    fn cached_table(&self, table_name: &str) -> Option<Arc<Table<C>>> {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(table_name)
            .cloned()
    }

    /// Resolve the logical table `name`.
    ///
    /// The first call for a name describes the table once; later calls return the same
    /// handle without any request. Fails with [`Error::TableNotFound`](crate::Error::TableNotFound)
    /// when the table does not exist and with
    /// [`Error::UnsupportedKeySchema`](crate::Error::UnsupportedKeySchema) when it has a
    /// range key. Failures are not cached.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_dict.table", skip(self), err)
    )]
    pub async fn table(&self, name: &str) -> Result<Arc<Table<C>>> {
        let table_name = self.resolve_table_name(name);
        if let Some(table) = self.cached_table(&table_name) {
            return Ok(table);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(table_name, "table cache miss, describing table");
        let description = self.connection.describe_table(&table_name).await?;
        let schema = schema::TableSchema::from_description(table_name.clone(), description)?;
        let table = Arc::new(Table::new(Arc::clone(&self.connection), schema));
        // on a first-access race the first inserted handle wins
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(tables.entry(table_name).or_insert(table)))
    }
}
