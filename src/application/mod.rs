// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the foundation
// - It wires infrastructure, repositories and integrations into a ready
//   RepositoryExplorer for hosts that want the default setup
// - Hosts with other needs assemble the pieces themselves

use std::path::Path;
use std::sync::Arc;

use crate::db::{create_connection_pool_at, get_connection, get_database_path, initialize_database};
use crate::integrations::{GithubClient, RepositoryLookup};
use crate::repositories::{BookmarkRepository, KeyValueStore, KvBookmarkRepository, SqliteKeyValueStore};
use crate::error::AppResult;
use crate::services::RepositoryExplorer;

/// Build a hydrated explorer over the default on-disk database and the
/// public GitHub API.
pub fn bootstrap() -> AppResult<RepositoryExplorer> {
    let db_path = get_database_path()?;
    bootstrap_at(&db_path, Arc::new(GithubClient::new()))
}

/// Build a hydrated explorer over a specific database file and lookup
pub fn bootstrap_at(
    db_path: &Path,
    lookup: Arc<dyn RepositoryLookup>,
) -> AppResult<RepositoryExplorer> {
    // 1. INFRASTRUCTURE
    let pool = Arc::new(create_connection_pool_at(db_path)?);

    // Initialize schema (idempotent)
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
    }

    // 2. REPOSITORIES
    let store: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::new(pool));
    let bookmarks: Arc<dyn BookmarkRepository> = Arc::new(KvBookmarkRepository::new(store));

    // 3. EXPLORER
    let mut explorer = RepositoryExplorer::new(bookmarks, lookup);
    explorer.initialize()?;

    Ok(explorer)
}
