//! # storage-adapters
//!
//! Persistence implementations of the `domains` repository ports.

pub mod sqlite;

pub use sqlite::SqliteForumRepo;
