//! Common types shared by the database and table layers.
//!
//! This module provides the hash key used to address items and the [`item::Item`]
//! returned by reads.

/// Items read back from a table.
pub mod item;

/// Hash key types for identifying items in DynamoDB tables.
pub mod key;

use aws_sdk_dynamodb::types;
use std::collections;

/// Raw attribute map, as sent to and received from the service.
pub type AttributeMap = collections::HashMap<String, types::AttributeValue>;
