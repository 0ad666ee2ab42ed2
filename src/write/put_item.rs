use crate::{common, connection::Connection, error::Result};

use serde::Serialize;
use serde_dynamo::{Error, to_item};

/// put item operation
#[derive(Debug, PartialEq)]
struct PutItemInput {
    item: common::AttributeMap,
    table_name: String,
}

/// Put item operation.
///
/// The hash key is added to the serialized attributes and overrides an attribute of the
/// same name. The stored item is replaced in full.
#[derive(Debug, PartialEq)]
pub(crate) struct PutItem<K, T> {
    /// The hash key of the item.
    pub(crate) key: common::key::HashKey<K>,
    /// The remaining attributes; must serialize to a map.
    pub(crate) attributes: T,
    /// The name of the table to write to.
    pub(crate) table_name: String,
}

impl<K: Serialize, T: Serialize> TryFrom<PutItem<K, T>> for PutItemInput {
    type Error = Error;

    fn try_from(put_item: PutItem<K, T>) -> serde_dynamo::Result<Self> {
        let mut item: common::AttributeMap = to_item(put_item.attributes)?;
        let (name, value) = put_item.key.to_attribute()?;
        item.insert(name, value);
        let operation = Self {
            item,
            table_name: put_item.table_name,
        };
        Ok(operation)
    }
}

impl<K: Serialize, T: Serialize> PutItem<K, T> {
    /// Execute the put item operation.
    pub(crate) async fn send<C>(self, connection: &C) -> Result<()>
    where
        C: Connection + ?Sized,
    {
        let put_item: PutItemInput = self.try_into()?;
        connection
            .put_item(&put_item.table_name, put_item.item)
            .await
    }
}
