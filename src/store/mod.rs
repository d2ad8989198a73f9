//! Record store for users, entries and the global PF setting.
//!
//! The store is an in-memory map guarded by a single [`tokio::sync::RwLock`].
//! It owns the one invariant the engine itself does not: at most one entry
//! per user per date.

mod records;

pub use records::{EntryUpdate, NewEntry, OverallStats, RecordStore, UserStats, UserUpdate};
