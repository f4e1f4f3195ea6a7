//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **media**: reqwest-backed media host uploader
//! - **store**: in-memory record repositories
//!
//! Adapters are thin translators between domain types and wire or storage
//! representations. They contain no business logic.

pub mod media;
pub mod store;
