use crate::{common, connection::Connection, error::Result};

use serde::Serialize;
use serde_dynamo::Error;

/// get item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct GetItemInput {
    consistent_read: bool,
    keys: common::AttributeMap,
    table_name: String,
}

/// Get item operation. Reads are always strongly consistent.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct GetItem<T> {
    /// The hash key of the item to retrieve.
    pub(crate) key: common::key::HashKey<T>,
    /// The name of the table to read from.
    pub(crate) table_name: String,
}

impl<T: Serialize> TryFrom<GetItem<T>> for GetItemInput {
    type Error = Error;

    fn try_from(get_item: GetItem<T>) -> serde_dynamo::Result<Self> {
        let keys = get_item.key.try_into()?;
        let operation = Self {
            consistent_read: true,
            keys,
            table_name: get_item.table_name,
        };
        Ok(operation)
    }
}

impl<T: Serialize> GetItem<T> {
    /// Execute the get item operation.
    pub(crate) async fn send<C>(self, connection: &C) -> Result<Option<common::AttributeMap>>
    where
        C: Connection + ?Sized,
    {
        let get_item: GetItemInput = self.try_into()?;
        connection
            .get_item(&get_item.table_name, get_item.keys, get_item.consistent_read)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::types;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case::string_key(
        GetItem {
            key: common::key::HashKey {
                name: "a".to_string(),
                value: Value::String(
                    "b".to_string()
                ),
            },
            table_name: "c".to_string(),
        },
        GetItemInput {
            consistent_read: true,
            keys: common::AttributeMap::from(
                [
                    (
                        "a".to_string(),
                        types::AttributeValue::S(
                            "b".to_string()
                        )
                    ),
                ]
            ),
            table_name: "c".to_string(),
        }
    )]
    #[case::number_key(
        GetItem {
            key: common::key::HashKey {
                name: "a".to_string(),
                value: Value::Number(
                    7.into()
                ),
            },
            table_name: "c".to_string(),
        },
        GetItemInput {
            consistent_read: true,
            keys: common::AttributeMap::from(
                [
                    (
                        "a".to_string(),
                        types::AttributeValue::N(
                            "7".to_string()
                        )
                    ),
                ]
            ),
            table_name: "c".to_string(),
        }
    )]
    fn test_get_item(#[case] args: GetItem<Value>, #[case] expected: GetItemInput) {
        let actual: GetItemInput = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
