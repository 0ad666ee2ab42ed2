#![deny(missing_docs)]

//! # DynamoDB Dict
//!
//! A dict-like interface to Amazon DynamoDB tables keyed by a single hash key.
//!
//! ## Overview
//!
//! This library puts a thin layer of sugar over [`aws_sdk_dynamodb::Client`]:
//! - Tables are resolved by name, with an optional prefix, and cached for the lifetime of the
//!   [`Database`]
//! - Items are written, read and deleted by hash key, without repeating the key name
//! - Reads are strongly consistent and always return the complete stored item
//! - Errors keep the SDK error untouched, with "item not found" reported separately
//!
//! Connection management, signing, retries and timeouts are left to the wrapped client.
//!
//! ## Quick Example
//!
//! ```no_run
//! use dynamodb_dict::{Database, config};
//! use serde_json::json;
//!
//! # async fn example() -> dynamodb_dict::Result<()> {
//! let db = Database::connect(config::Config {
//!     table_name_prefix: "app_".to_string(),
//!     ..Default::default()
//! })
//! .await?;
//!
//! // `app_user`, with hash key `email`
//! let users = db.table("user").await?;
//!
//! // No need to repeat "email" in the attributes.
//! users
//!     .put("john@example.com", json!({"first_name": "John", "last_name": "Johnson"}))
//!     .await?;
//!
//! // The complete item, "email" included.
//! let john = users.get("john@example.com").await?;
//! assert_eq!(john.len(), 3);
//!
//! users.delete("john@example.com").await?;
//! assert!(users.get("john@example.com").await.unwrap_err().is_item_not_found());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Hash keys and items
//! - [`mod@config`] - Credentials, region and table name prefix
//! - [`mod@connection`] - The seam to the wrapped client
//! - [`mod@database`] - Table resolution and caching
//! - [`mod@table`] - Get, put and delete by hash key

/// Common types for hash keys and items.
pub mod common;

/// Configuration used to connect to DynamoDB.
pub mod config;

/// The trait through which every request reaches the service.
pub mod connection;

/// The database handle and its table cache.
pub mod database;

/// Error types.
pub mod error;

/// Read operations for retrieving data from DynamoDB tables.
mod read;

/// Table schema as described by the service.
pub mod schema;

/// The per-table handle.
pub mod table;

/// Write operations for modifying data in DynamoDB tables.
mod write;

#[cfg(test)]
mod testing;

pub use common::item::Item;
pub use config::Config;
pub use database::Database;
pub use error::{Error, Result};
pub use table::Table;
