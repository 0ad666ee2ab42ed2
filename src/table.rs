//! Per-table handle offering get/put/delete by hash key.

use crate::{
    common::{self, item::Item},
    connection::Connection,
    error::{Error, Result},
    read, schema, write,
};

use aws_sdk_dynamodb::Client;
use serde::{Serialize, de::DeserializeOwned};
use std::{fmt, sync::Arc};

/// A single table, addressed by its hash key.
///
/// Obtained from [`Database::table`](crate::database::Database::table). The schema is read
/// once when the table is first resolved; a table recreated with a different key afterwards
/// leaves this handle stale.
#[derive(Debug)]
pub struct Table<C = Client> {
    connection: Arc<C>,
    schema: schema::TableSchema,
}

impl<C: Connection> Table<C> {
    pub(crate) fn new(connection: Arc<C>, schema: schema::TableSchema) -> Self {
        Self { connection, schema }
    }

    /// The resolved (prefixed) table name.
    pub fn name(&self) -> &str {
        &self.schema.table_name
    }

    /// The hash key attribute name.
    pub fn hash_key_name(&self) -> &str {
        &self.schema.hash_key.name
    }

    /// The schema read at resolution time.
    pub fn schema(&self) -> &schema::TableSchema {
        &self.schema
    }

    fn hash_key<K: Serialize>(&self, value: K) -> Result<common::key::HashKey<K>> {
        let key = common::key::HashKey {
            name: self.schema.hash_key.name.clone(),
            value,
        };
        let (_, attribute) = key.to_attribute()?;
        if !self.schema.hash_key.accepts(&attribute) {
            return Err(Error::KeyTypeMismatch {
                table_name: self.schema.table_name.clone(),
                key_name: key.name,
                expected: self
                    .schema
                    .hash_key
                    .attribute_type
                    .as_ref()
                    .map(|attribute_type| attribute_type.as_str().to_string())
                    .unwrap_or_default(),
                actual: schema::attribute_type_name(&attribute).to_string(),
            });
        }
        Ok(key)
    }

    /// Store `attributes` under `key`, replacing any existing item in full.
    ///
    /// `attributes` must serialize to a map; the hash key does not need to be repeated in it.
    ///
    /// ```rust,no_run
    /// # async fn example(users: &dynamodb_dict::Table) -> dynamodb_dict::Result<()> {
    /// use serde_json::json;
    ///
    /// users
    ///     .put("john@example.com", json!({"first_name": "John", "last_name": "Johnson"}))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_dict.put",
            skip_all,
            fields(table = %self.schema.table_name),
            err
        )
    )]
    pub async fn put<K, T>(&self, key: K, attributes: T) -> Result<()>
    where
        K: Serialize,
        T: Serialize,
    {
        let put_item = write::put_item::PutItem {
            key: self.hash_key(key)?,
            attributes,
            table_name: self.schema.table_name.clone(),
        };
        put_item.send(self.connection.as_ref()).await
    }

    /// Read the complete item stored under `key`, hash key included.
    ///
    /// The read is strongly consistent. Fails with [`Error::ItemNotFound`] when nothing is
    /// stored under `key`, and with [`Error::KeyTypeMismatch`] when `key` does not have the
    /// hash key's declared type.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_dict.get",
            skip_all,
            fields(table = %self.schema.table_name),
            err
        )
    )]
    pub async fn get<K>(&self, key: K) -> Result<Item>
    where
        K: Serialize + fmt::Debug,
    {
        let get_item = read::get_item::GetItem {
            key: self.hash_key(&key)?,
            table_name: self.schema.table_name.clone(),
        };
        match get_item.send(self.connection.as_ref()).await? {
            Some(attributes) => Ok(Item::new(&self.schema.hash_key.name, attributes)),
            None => Err(Error::ItemNotFound {
                table_name: self.schema.table_name.clone(),
                key: format!("{key:?}"),
            }),
        }
    }

    /// Read the item stored under `key` and convert it into `T`.
    ///
    /// ```rust,no_run
    /// # async fn example(users: &dynamodb_dict::Table) -> dynamodb_dict::Result<()> {
    /// #[derive(serde::Deserialize)]
    /// struct User {
    ///     email: String,
    ///     first_name: String,
    /// }
    ///
    /// let john: User = users.get_as("john@example.com").await?;
    /// assert_eq!(john.first_name, "John");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_as<K, T>(&self, key: K) -> Result<T>
    where
        K: Serialize + fmt::Debug,
        T: DeserializeOwned,
    {
        let item = self.get(key).await?;
        Ok(item.deserialize()?)
    }

    /// Delete the item stored under `key`. Deleting an absent item succeeds.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_dict.delete",
            skip_all,
            fields(table = %self.schema.table_name),
            err
        )
    )]
    pub async fn delete<K>(&self, key: K) -> Result<()>
    where
        K: Serialize,
    {
        let delete_item = write::delete_item::DeleteItem {
            key: self.hash_key(key)?,
            table_name: self.schema.table_name.clone(),
        };
        delete_item.send(self.connection.as_ref()).await
    }
}
