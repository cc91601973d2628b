// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - Explicit SQL only

pub mod bookmark_repository;
pub mod kv_store;

pub use bookmark_repository::{BookmarkRepository, KvBookmarkRepository, BOOKMARKS_KEY};
pub use kv_store::{InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore};
