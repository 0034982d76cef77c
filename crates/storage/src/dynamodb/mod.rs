//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the repository trait
//! using `aws-sdk-dynamodb`.

mod config;
mod conversions;
mod error;
mod repository;

pub use config::DynamoDbConfig;
pub use repository::DynamoDbRepository;
