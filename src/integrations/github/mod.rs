pub mod client;

pub use client::{GithubClient, RepositoryLookup};

#[cfg(test)]
pub use client::MockRepositoryLookup;
