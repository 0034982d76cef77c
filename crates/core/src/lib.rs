//! Functional core for the picus service.
//!
//! Everything here is shared by the HTTP API and the delete function:
//! the [`item::Item`] model, the [`storage::ItemRepository`] seam, the
//! operations both surfaces run, and the error translation they render.

pub mod event;
pub mod item;
pub mod storage;
