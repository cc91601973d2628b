use super::entity::Repository;
use crate::domain::{DomainError, DomainResult};

/// Validates all Repository invariants
/// Applied to fetched payloads before they enter the bookmark list
pub fn validate_repository(repository: &Repository) -> DomainResult<()> {
    validate_full_name(&repository.full_name)?;
    validate_owner_login(&repository.owner.login)?;
    Ok(())
}

/// full_name must be a non-empty "owner/name" pair
fn validate_full_name(full_name: &str) -> DomainResult<()> {
    if full_name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Repository full_name cannot be empty".to_string(),
        ));
    }

    match full_name.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Ok(()),
        _ => Err(DomainError::InvariantViolation(format!(
            "Repository full_name '{}' is not in owner/name form",
            full_name
        ))),
    }
}

/// Owner login cannot be empty
fn validate_owner_login(login: &str) -> DomainResult<()> {
    if login.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Repository owner login cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the Repository domain:
///
/// 1. full_name is the immutable identity
/// 2. full_name always has an owner part and a name part
/// 3. Owner login is never empty
/// 4. Description may be empty
/// 5. Entries are never mutated after insertion

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::RepositoryOwner;

    fn repo(full_name: &str, login: &str) -> Repository {
        Repository::new(
            full_name.to_string(),
            String::new(),
            RepositoryOwner {
                login: login.to_string(),
                avatar_url: "http://x/a.png".to_string(),
            },
        )
    }

    #[test]
    fn test_valid_repository() {
        assert!(validate_repository(&repo("facebook/react", "facebook")).is_ok());
    }

    #[test]
    fn test_empty_full_name_fails() {
        assert!(validate_repository(&repo("   ", "facebook")).is_err());
    }

    #[test]
    fn test_missing_separator_fails() {
        assert!(validate_repository(&repo("react", "facebook")).is_err());
    }

    #[test]
    fn test_empty_owner_half_fails() {
        assert!(validate_repository(&repo("/react", "facebook")).is_err());
    }

    #[test]
    fn test_empty_login_fails() {
        assert!(validate_repository(&repo("facebook/react", "")).is_err());
    }
}
