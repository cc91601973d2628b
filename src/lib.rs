// src/lib.rs
// GitHub Explorer - Local-first GitHub repository bookmark explorer
//
// Architecture:
// - Domain-centric: entities and invariants live in `domain`
// - Explicit: no implicit behavior, no magic
// - Local-first: bookmarks live in a local SQLite key-value store
// - Injected collaborators: storage and lookup are traits, so hosts and
//   tests choose their own backends

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{validate_repository, Repository, RepositoryOwner};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    BookmarkRepository, InMemoryKeyValueStore, KeyValueStore, KvBookmarkRepository,
    SqliteKeyValueStore, BOOKMARKS_KEY,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{InputError, RepositoryExplorer, SubmitOutcome};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{bootstrap, bootstrap_at};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{GithubClient, RepositoryLookup};
