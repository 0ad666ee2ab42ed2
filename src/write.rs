//! Write operations for modifying items in DynamoDB tables.
//!
//! This module provides operations for writing data to DynamoDB:
//! - Putting new items or replacing existing ones
//! - Deleting items by hash key

/// Delete item operation for removing items from tables.
pub(crate) mod delete_item;

/// Put item operation for creating or replacing items.
pub(crate) mod put_item;
