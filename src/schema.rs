//! Table schema read from the describe-table response.

use crate::error::{Error, Result};

use aws_sdk_dynamodb::types;

/// The hash key attribute of a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyDefinition {
    /// The attribute name of the hash key.
    pub name: String,
    /// The declared scalar type, when the attribute definitions list it.
    ///
    /// Key values of another type are rejected before any request is sent.
    pub attribute_type: Option<types::ScalarAttributeType>,
}

impl KeyDefinition {
    /// Whether `value` matches the declared type. An undeclared type accepts anything.
    pub fn accepts(&self, value: &types::AttributeValue) -> bool {
        use types::{AttributeValue, ScalarAttributeType};

        match (&self.attribute_type, value) {
            (None, _) => true,
            (Some(ScalarAttributeType::S), AttributeValue::S(_))
            | (Some(ScalarAttributeType::N), AttributeValue::N(_))
            | (Some(ScalarAttributeType::B), AttributeValue::B(_)) => true,
            (
                Some(ScalarAttributeType::S | ScalarAttributeType::N | ScalarAttributeType::B),
                _,
            ) => false,
            (Some(_), _) => true,
        }
    }
}

/// Short DynamoDB type descriptor of an attribute value, e.g. `S` or `N`.
pub(crate) fn attribute_type_name(value: &types::AttributeValue) -> &'static str {
    use types::AttributeValue;

    match value {
        AttributeValue::S(_) => "S",
        AttributeValue::N(_) => "N",
        AttributeValue::B(_) => "B",
        AttributeValue::Bool(_) => "BOOL",
        AttributeValue::Null(_) => "NULL",
        AttributeValue::L(_) => "L",
        AttributeValue::M(_) => "M",
        AttributeValue::Ss(_) => "SS",
        AttributeValue::Ns(_) => "NS",
        AttributeValue::Bs(_) => "BS",
        _ => "unknown",
    }
}

/// Schema of a table with a single hash key.
///
/// Read once when the table is first resolved and never refreshed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSchema {
    /// The resolved (prefixed) table name.
    pub table_name: String,
    /// The hash key.
    pub hash_key: KeyDefinition,
}

impl TableSchema {
    /// Build the schema from a describe-table response.
    ///
    /// Tables with a range key are rejected with [`Error::UnsupportedKeySchema`].
    pub fn from_description(
        table_name: String,
        description: types::TableDescription,
    ) -> Result<Self> {
        let unsupported = |reason: String| Error::UnsupportedKeySchema {
            table_name: table_name.clone(),
            reason,
        };
        let mut hash_key_name = None;
        for element in description.key_schema.unwrap_or_default() {
            match element.key_type {
                types::KeyType::Hash => hash_key_name = Some(element.attribute_name),
                types::KeyType::Range => {
                    return Err(unsupported(format!(
                        "range key `{}` is not supported",
                        element.attribute_name
                    )));
                }
                other => {
                    return Err(unsupported(format!(
                        "unknown key type `{}` for `{}`",
                        other.as_str(),
                        element.attribute_name
                    )));
                }
            }
        }
        let name = hash_key_name.ok_or_else(|| unsupported("no hash key".to_string()))?;
        let attribute_type = description
            .attribute_definitions
            .unwrap_or_default()
            .into_iter()
            .find(|definition| definition.attribute_name == name)
            .map(|definition| definition.attribute_type);
        Ok(Self {
            table_name,
            hash_key: KeyDefinition {
                name,
                attribute_type,
            },
        })
    }
}
