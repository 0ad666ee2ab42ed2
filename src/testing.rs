//! In-memory connection used by the unit tests.

use crate::{
    common,
    connection::Connection,
    error::{Error, Result},
};

use async_trait::async_trait;
use aws_sdk_dynamodb::types;
use std::{
    collections, io,
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Calls {
    pub(crate) describe_table: usize,
    pub(crate) get_item: usize,
    pub(crate) put_item: usize,
    pub(crate) delete_item: usize,
}

#[derive(Debug)]
struct MemoryTable {
    description: types::TableDescription,
    items: Vec<common::AttributeMap>,
}

/// Stores items per table and counts every request it serves.
#[derive(Debug, Default)]
pub(crate) struct MemoryConnection {
    tables: Mutex<collections::HashMap<String, MemoryTable>>,
    failure: Mutex<Option<String>>,
    last_consistent_read: Mutex<Option<bool>>,
    describe_table_calls: AtomicUsize,
    get_item_calls: AtomicUsize,
    put_item_calls: AtomicUsize,
    delete_item_calls: AtomicUsize,
}

impl MemoryConnection {
    pub(crate) fn with_table(self, table_name: &str, hash_key_name: &str) -> Self {
        self.with_key_schema(table_name, &[(hash_key_name, types::KeyType::Hash)])
    }

    pub(crate) fn with_key_schema(
        self,
        table_name: &str,
        keys: &[(&str, types::KeyType)],
    ) -> Self {
        let key_schema = keys
            .iter()
            .map(|(name, key_type)| {
                types::KeySchemaElement::builder()
                    .attribute_name(*name)
                    .key_type(key_type.clone())
                    .build()
                    .unwrap()
            })
            .collect();
        let description = types::TableDescription::builder()
            .table_name(table_name)
            .set_key_schema(Some(key_schema))
            .build();
        self.lock_tables().insert(
            table_name.to_string(),
            MemoryTable {
                description,
                items: Vec::new(),
            },
        );
        self
    }

    /// Make every following request fail with a service error carrying `message`.
    pub(crate) fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.to_string());
    }

    pub(crate) fn calls(&self) -> Calls {
        Calls {
            describe_table: self.describe_table_calls.load(Ordering::SeqCst),
            get_item: self.get_item_calls.load(Ordering::SeqCst),
            put_item: self.put_item_calls.load(Ordering::SeqCst),
            delete_item: self.delete_item_calls.load(Ordering::SeqCst),
        }
    }

    pub(crate) fn last_consistent_read(&self) -> Option<bool> {
        *self
            .last_consistent_read
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_tables(&self) -> std::sync::MutexGuard<'_, collections::HashMap<String, MemoryTable>> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_failure(&self) -> Result<()> {
        match self
            .failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            Some(message) => Err(Error::service(io::Error::other(message.clone()))),
            None => Ok(()),
        }
    }

    fn with_items<R>(
        &self,
        table_name: &str,
        f: impl FnOnce(&mut Vec<common::AttributeMap>) -> R,
    ) -> Result<R> {
        let mut tables = self.lock_tables();
        let table = tables.get_mut(table_name).ok_or_else(|| {
            Error::service(io::Error::other(format!(
                "ResourceNotFoundException: {table_name}"
            )))
        })?;
        Ok(f(&mut table.items))
    }
}

fn matches_key(item: &common::AttributeMap, key: &common::AttributeMap) -> bool {
    key.iter()
        .all(|(name, value)| item.get(name) == Some(value))
}

#[async_trait]
impl Connection for MemoryConnection {
    async fn describe_table(&self, table_name: &str) -> Result<types::TableDescription> {
        self.describe_table_calls.fetch_add(1, Ordering::SeqCst);
        // suspend once so concurrent first lookups both miss the table cache
        tokio::task::yield_now().await;
        self.check_failure()?;
        self.lock_tables()
            .get(table_name)
            .map(|table| table.description.clone())
            .ok_or_else(|| Error::TableNotFound {
                table_name: table_name.to_string(),
            })
    }

    async fn get_item(
        &self,
        table_name: &str,
        key: common::AttributeMap,
        consistent_read: bool,
    ) -> Result<Option<common::AttributeMap>> {
        self.get_item_calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_consistent_read
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(consistent_read);
        self.check_failure()?;
        self.with_items(table_name, |items| {
            items.iter().find(|item| matches_key(item, &key)).cloned()
        })
    }

    async fn put_item(&self, table_name: &str, item: common::AttributeMap) -> Result<()> {
        self.put_item_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        let hash_key_name = {
            let tables = self.lock_tables();
            tables
                .get(table_name)
                .and_then(|table| table.description.key_schema.as_ref())
                .and_then(|key_schema| key_schema.first())
                .map(|element| element.attribute_name.clone())
                .unwrap_or_default()
        };
        let key: common::AttributeMap = item
            .get(&hash_key_name)
            .map(|value| (hash_key_name.clone(), value.clone()))
            .into_iter()
            .collect();
        self.with_items(table_name, |items| {
            items.retain(|stored| !matches_key(stored, &key));
            items.push(item);
        })
    }

    async fn delete_item(&self, table_name: &str, key: common::AttributeMap) -> Result<()> {
        self.delete_item_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        self.with_items(table_name, |items| {
            items.retain(|stored| !matches_key(stored, &key));
        })
    }
}
