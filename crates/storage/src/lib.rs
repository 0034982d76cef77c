//! Storage backend implementations.
//!
//! This crate provides concrete implementations of the
//! [`ItemRepository`](picus_core::storage::ItemRepository) trait defined in
//! `picus_core::storage`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory` (default): process-local backend for tests and local runs

#[cfg(not(any(feature = "dynamodb", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory' feature. \
    Example: cargo build -p picus_storage --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::{DynamoDbConfig, DynamoDbRepository};

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;
