// src/integrations/mod.rs
//
// External Integrations Module

pub mod github;

pub use github::{GithubClient, RepositoryLookup};
