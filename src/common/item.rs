use crate::common;

use aws_sdk_dynamodb::types;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_dynamo::{Result, from_attribute_value, from_item};
use std::ops;

/// A complete item read from a table.
///
/// Attributes are kept in a stable order: the hash key first, then every other attribute
/// sorted by name. Equality ignores that order.
///
/// Both keyed and field-style access are available. Keyed access goes through [`Item::get`]
/// or indexing; field-style access deserializes the item into a struct with
/// [`Item::deserialize`].
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_dict::common::item::Item;
/// use serde::Deserialize;
/// use std::collections::HashMap;
///
/// #[derive(Deserialize)]
/// struct User {
///     email: String,
///     first_name: String,
/// }
///
/// let item = Item::new(
///     "email",
///     HashMap::from([
///         ("first_name".to_string(), AttributeValue::S("John".to_string())),
///         ("email".to_string(), AttributeValue::S("john@example.com".to_string())),
///     ]),
/// );
/// let user: User = item.deserialize().unwrap();
/// assert_eq!(item["first_name"], AttributeValue::S(user.first_name));
/// assert_eq!(item.get_as::<String>("email").unwrap().unwrap(), user.email);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Item(IndexMap<String, types::AttributeValue>);

impl Item {
    /// Build an item from raw attributes, placing `hash_key_name` first.
    pub fn new(hash_key_name: &str, attributes: common::AttributeMap) -> Self {
        let mut attributes: Vec<_> = attributes.into_iter().collect();
        attributes.sort_by(|(left, _), (right, _)| {
            (left != hash_key_name)
                .cmp(&(right != hash_key_name))
                .then_with(|| left.cmp(right))
        });
        Self(attributes.into_iter().collect())
    }

    /// Keyed access to an attribute.
    pub fn get(&self, name: &str) -> Option<&types::AttributeValue> {
        self.0.get(name)
    }

    /// Convert a single attribute into `T`. Returns `None` when the attribute is absent.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Option<Result<T>> {
        self.0
            .get(name)
            .map(|value| from_attribute_value(value.clone()))
    }

    /// Field-style access: convert the whole item into a struct with named fields.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        from_item(self.clone().into_attributes())
    }

    /// Whether the item has an attribute called `name`.
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Attribute names, hash key first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over `(name, value)` pairs, hash key first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &types::AttributeValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of attributes, hash key included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the item has no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Give back the raw attribute map.
    pub fn into_attributes(self) -> common::AttributeMap {
        self.0.into_iter().collect()
    }
}

impl ops::Index<&str> for Item {
    type Output = types::AttributeValue;

    /// # Panics
    ///
    /// Panics if the item has no attribute called `name`.
    fn index(&self, name: &str) -> &Self::Output {
        &self.0[name]
    }
}

impl IntoIterator for Item {
    type Item = (String, types::AttributeValue);
    type IntoIter = indexmap::map::IntoIter<String, types::AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Item> for common::AttributeMap {
    fn from(item: Item) -> Self {
        item.into_attributes()
    }
}
