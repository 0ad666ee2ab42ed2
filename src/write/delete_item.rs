use crate::{common, connection::Connection, error::Result};

use serde::Serialize;
use serde_dynamo::Error;

/// delete item operation
#[derive(Debug, PartialEq)]
struct DeleteItemInput {
    keys: common::AttributeMap,
    table_name: String,
}

/// Delete item operation. Only the hash key is ever sent.
#[derive(Debug, PartialEq)]
pub(crate) struct DeleteItem<T> {
    /// The hash key of the item to delete.
    pub(crate) key: common::key::HashKey<T>,
    /// The name of the table to delete from.
    pub(crate) table_name: String,
}

impl<T: Serialize> TryFrom<DeleteItem<T>> for DeleteItemInput {
    type Error = Error;

    fn try_from(delete_item: DeleteItem<T>) -> serde_dynamo::Result<Self> {
        let keys = delete_item.key.try_into()?;
        let operation = Self {
            keys,
            table_name: delete_item.table_name,
        };
        Ok(operation)
    }
}

impl<T: Serialize> DeleteItem<T> {
    /// Execute the delete item operation.
    pub(crate) async fn send<C>(self, connection: &C) -> Result<()>
    where
        C: Connection + ?Sized,
    {
        let delete_item: DeleteItemInput = self.try_into()?;
        connection
            .delete_item(&delete_item.table_name, delete_item.keys)
            .await
    }
}
