// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod explorer_service;


// Re-export all services and their types
pub use explorer_service::{InputError, RepositoryExplorer, SubmitOutcome};
