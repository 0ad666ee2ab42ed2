//! Read operations for retrieving items from DynamoDB tables.

/// Get item operation for retrieving a single item by hash key.
pub(crate) mod get_item;
