// src/repositories/bookmark_repository.rs
//
// Bookmark list persistence - Dumb data mapper over the key-value store

use std::sync::Arc;

use log::warn;

use crate::domain::Repository;
use crate::error::AppResult;
use crate::repositories::KeyValueStore;

/// Fixed, namespaced key holding the serialized bookmark list
pub const BOOKMARKS_KEY: &str = "@GithubExplorer:repositories";

/// Loads and saves the full bookmark list
///
/// The stored value is always exactly the JSON serialization of the whole
/// list; one overwrite per save, no partial writes.
pub trait BookmarkRepository: Send + Sync {
    fn load(&self) -> AppResult<Vec<Repository>>;
    fn save(&self, repositories: &[Repository]) -> AppResult<()>;
}

pub struct KvBookmarkRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvBookmarkRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl BookmarkRepository for KvBookmarkRepository {
    fn load(&self) -> AppResult<Vec<Repository>> {
        let Some(raw) = self.store.get(BOOKMARKS_KEY)? else {
            return Ok(Vec::new());
        };

        // Bookmark data is user-visible convenience state, not critical
        // state; a corrupt value falls back to an empty list.
        match serde_json::from_str(&raw) {
            Ok(repositories) => Ok(repositories),
            Err(e) => {
                warn!("Discarding malformed bookmark data: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, repositories: &[Repository]) -> AppResult<()> {
        let serialized = serde_json::to_string(repositories)?;
        self.store.set(BOOKMARKS_KEY, &serialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RepositoryOwner;
    use crate::repositories::InMemoryKeyValueStore;

    fn repo(full_name: &str) -> Repository {
        let owner = full_name.split('/').next().unwrap().to_string();
        Repository::new(
            full_name.to_string(),
            "A library".to_string(),
            RepositoryOwner {
                login: owner,
                avatar_url: "http://x/a.png".to_string(),
            },
        )
    }

    #[test]
    fn test_empty_store_loads_empty_list() {
        let repo_store = KvBookmarkRepository::new(Arc::new(InMemoryKeyValueStore::new()));
        assert!(repo_store.load().unwrap().is_empty());
    }

    #[test]
    fn test_round_trip_preserves_entries_and_order() {
        let repo_store = KvBookmarkRepository::new(Arc::new(InMemoryKeyValueStore::new()));

        let list = vec![repo("facebook/react"), repo("rust-lang/rust")];
        repo_store.save(&list).unwrap();

        assert_eq!(repo_store.load().unwrap(), list);
    }

    #[test]
    fn test_save_writes_exact_serialization() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let repo_store = KvBookmarkRepository::new(store.clone());

        let list = vec![repo("facebook/react")];
        repo_store.save(&list).unwrap();

        let raw = store.get(BOOKMARKS_KEY).unwrap().unwrap();
        assert_eq!(raw, serde_json::to_string(&list).unwrap());
    }

    #[test]
    fn test_malformed_value_falls_back_to_empty() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.set(BOOKMARKS_KEY, "{not json").unwrap();

        let repo_store = KvBookmarkRepository::new(store);
        assert!(repo_store.load().unwrap().is_empty());
    }
}
