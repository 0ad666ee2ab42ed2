use crate::common;

use aws_sdk_dynamodb::types;
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};

/// Hash key of an item.
///
/// ```rust
/// use dynamodb_dict::common::key;
///
/// let key = key::HashKey {
///     name: "email".to_string(),
///     value: "john@example.com".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HashKey<T> {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: T,
}

impl<T: Serialize> HashKey<T> {
    /// Convert the key value into a DynamoDB attribute value.
    pub fn to_attribute(&self) -> Result<(String, types::AttributeValue)> {
        let value = to_attribute_value(&self.value)?;
        Ok((self.name.clone(), value))
    }
}

impl<T: Serialize> TryFrom<HashKey<T>> for common::AttributeMap {
    type Error = Error;

    fn try_from(key: HashKey<T>) -> Result<Self> {
        let value = to_attribute_value(key.value)?;
        Ok(Self::from([(key.name, value)]))
    }
}
