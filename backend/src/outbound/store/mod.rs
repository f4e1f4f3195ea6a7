//! Persistence adapters backing the record repository port.
//!
//! The persistence layer is an external collaborator; this module ships the
//! in-process store used when no external backend is wired in, and by tests.

mod memory;

pub use memory::MemoryRecordStore;
