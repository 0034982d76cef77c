//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the repository trait
//! that keeps items in insertion order behind an `Arc<RwLock<_>>`. This is
//! useful for testing and for running the API without AWS access.
//!
//! # Example
//!
//! ```rust
//! use picus_storage::inmemory::InMemoryRepository;
//!
//! // Serve scans two items at a time.
//! let repo = InMemoryRepository::new().with_page_size(2);
//! ```

mod repository;

pub use repository::InMemoryRepository;
