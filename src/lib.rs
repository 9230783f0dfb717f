//! Recordlog - filesystem helpers and a JSON array-backed record log
//!
//! This library provides convenience wrappers over filesystem primitives
//! (path probing, whole-file read/write, recursive directory creation) and a
//! record log that persists serializable values as a JSON array on disk.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`filesystem`] - Path probing, directory creation, file read/write
//! - [`record`] - The JSON array record log
//! - [`error`] - Error types and handling
//!
//! # Concurrency
//!
//! Appends to the record log are plain read-modify-write cycles without
//! locking. Concurrent writers to the same path race and can lose records;
//! serialize writes externally if concurrent use is expected.

pub mod error;
pub mod filesystem;
pub mod record;

pub use error::{Error, FilesystemError, RecordError, Result};
pub use record::{append_record, read_records};
