pub mod entity;
pub mod invariants;

pub use entity::{Repository, RepositoryOwner};
pub use invariants::validate_repository;
