//! The seam between this crate and the wrapped DynamoDB client.
//!
//! [`Database`](crate::database::Database) and [`Table`](crate::table::Table) only talk to
//! the service through [`Connection`], which is implemented for [`aws_sdk_dynamodb::Client`].
//! Each call is exactly one request; retries, timeouts and signing stay with the client.

use crate::{
    common,
    error::{Error, Result},
};

use async_trait::async_trait;
use aws_sdk_dynamodb::{
    Client,
    error::SdkError,
    operation::describe_table::{DescribeTableError, DescribeTableOutput},
    types,
};
use std::fmt;

/// The four service operations the database and table layers need.
#[async_trait]
pub trait Connection: Send + Sync {
    /// Describe a table.
    ///
    /// Fails with [`Error::TableNotFound`] when the service has no such table.
    async fn describe_table(&self, table_name: &str) -> Result<types::TableDescription>;

    /// Read a single item. `Ok(None)` means no item is stored under `key`.
    async fn get_item(
        &self,
        table_name: &str,
        key: common::AttributeMap,
        consistent_read: bool,
    ) -> Result<Option<common::AttributeMap>>;

    /// Write a full item, replacing any item with the same key.
    async fn put_item(&self, table_name: &str, item: common::AttributeMap) -> Result<()>;

    /// Delete the item stored under `key`. Deleting an absent item succeeds.
    async fn delete_item(&self, table_name: &str, key: common::AttributeMap) -> Result<()>;
}

/// Map a DescribeTable SDK error, turning `ResourceNotFoundException` into [`Error::TableNotFound`].
fn describe_table_error<R>(table_name: &str, err: SdkError<DescribeTableError, R>) -> Error
where
    R: fmt::Debug + Send + Sync + 'static,
{
    let not_found = err
        .as_service_error()
        .is_some_and(DescribeTableError::is_resource_not_found_exception);
    if not_found {
        Error::TableNotFound {
            table_name: table_name.to_string(),
        }
    } else {
        Error::service(err)
    }
}

fn describe_table_output(
    table_name: &str,
    output: DescribeTableOutput,
) -> Result<types::TableDescription> {
    output.table.ok_or_else(|| Error::TableNotFound {
        table_name: table_name.to_string(),
    })
}

#[async_trait]
impl Connection for Client {
    async fn describe_table(&self, table_name: &str) -> Result<types::TableDescription> {
        let output = Client::describe_table(self)
            .table_name(table_name)
            .send()
            .await
            .map_err(|err| describe_table_error(table_name, err))?;
        describe_table_output(table_name, output)
    }

    async fn get_item(
        &self,
        table_name: &str,
        key: common::AttributeMap,
        consistent_read: bool,
    ) -> Result<Option<common::AttributeMap>> {
        let output = Client::get_item(self)
            .table_name(table_name)
            .set_key(Some(key))
            .consistent_read(consistent_read)
            .send()
            .await
            .map_err(Error::service)?;
        Ok(output.item)
    }

    async fn put_item(&self, table_name: &str, item: common::AttributeMap) -> Result<()> {
        Client::put_item(self)
            .table_name(table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(Error::service)?;
        Ok(())
    }

    async fn delete_item(&self, table_name: &str, key: common::AttributeMap) -> Result<()> {
        Client::delete_item(self)
            .table_name(table_name)
            .set_key(Some(key))
            .send()
            .await
            .map_err(Error::service)?;
        Ok(())
    }
}
