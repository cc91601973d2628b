// src/services/explorer_service.rs
use std::sync::Arc;

use log::debug;
use thiserror::Error;

use crate::domain::{validate_repository, Repository};
use crate::error::AppResult;
use crate::integrations::RepositoryLookup;
use crate::repositories::BookmarkRepository;

/// User-facing input rejection, retained as the last validation message
/// until the next submit clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Enter the owner/name of a repository.")]
    EmptyInput,

    #[error("This repository is already listed.")]
    AlreadyListed,

    #[error("Could not find that repository.")]
    NotFound,
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Added(Repository),
    Rejected(InputError),
}

/// The explorer screen's state and submit handler
///
/// Owns the bookmark list, the in-progress query draft and the last
/// validation message. Collaborators are injected: a bookmark repository
/// for persistence and a lookup for remote metadata.
///
/// The list is hydrated once via `initialize` and re-persisted in full
/// after every append; in-memory and stored state stay convergent.
pub struct RepositoryExplorer {
    repositories: Vec<Repository>,
    draft: String,
    validation: Option<InputError>,
    bookmarks: Arc<dyn BookmarkRepository>,
    lookup: Arc<dyn RepositoryLookup>,
}

impl RepositoryExplorer {
    pub fn new(bookmarks: Arc<dyn BookmarkRepository>, lookup: Arc<dyn RepositoryLookup>) -> Self {
        Self {
            repositories: Vec::new(),
            draft: String::new(),
            validation: None,
            bookmarks,
            lookup,
        }
    }

    /// Hydrate the bookmark list from the store
    ///
    /// An absent or malformed stored value yields an empty list; storage
    /// I/O failures propagate.
    pub fn initialize(&mut self) -> AppResult<()> {
        self.repositories = self.bookmarks.load()?;
        debug!("Hydrated {} bookmarked repositories", self.repositories.len());
        Ok(())
    }

    /// Bookmarked repositories, oldest first
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// The in-progress query
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, input: impl Into<String>) {
        self.draft = input.into();
    }

    /// The last input rejection, if the most recent submit failed
    pub fn validation(&self) -> Option<InputError> {
        self.validation
    }

    /// Submit the current draft
    ///
    /// At most one lookup call is issued. The draft is cleared by every
    /// branch except the empty-input rejection. Only infrastructure
    /// failures (storage) surface as `Err`; input problems come back as
    /// `SubmitOutcome::Rejected` and are kept in `validation`.
    pub async fn submit(&mut self) -> AppResult<SubmitOutcome> {
        self.validation = None;

        if self.draft.is_empty() {
            return Ok(self.reject(InputError::EmptyInput));
        }

        if self.repositories.iter().any(|r| r.matches_name(&self.draft)) {
            self.draft.clear();
            return Ok(self.reject(InputError::AlreadyListed));
        }

        let query = std::mem::take(&mut self.draft);

        match self.fetch_validated(&query).await {
            Ok(repository) => {
                self.repositories.push(repository.clone());
                // One full overwrite per list change, no debouncing
                self.bookmarks.save(&self.repositories)?;
                Ok(SubmitOutcome::Added(repository))
            }
            Err(e) => {
                // Network errors, bad statuses and malformed payloads all
                // collapse to the same user-facing message.
                debug!("Lookup for '{}' failed: {}", query, e);
                Ok(self.reject(InputError::NotFound))
            }
        }
    }

    async fn fetch_validated(&self, query: &str) -> AppResult<Repository> {
        let repository = self.lookup.get_repository(query).await?;
        validate_repository(&repository)?;
        Ok(repository)
    }

    fn reject(&mut self, error: InputError) -> SubmitOutcome {
        self.validation = Some(error);
        SubmitOutcome::Rejected(error)
    }
}
