//! Session log
//!
//! Finished games are summarised into fixed-size records and kept in the
//! board's key-value store.

pub mod record;
pub mod store;

pub use record::{SessionLogRecord, RECORD_SIZE};
pub use store::{LogError, SessionLog, SessionLogStore, LOG_BLOB_SIZE};
