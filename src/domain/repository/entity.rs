use serde::{Deserialize, Serialize};

/// A GitHub repository as returned by the lookup API and kept in the
/// bookmark list. Immutable once fetched; never re-validated after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Canonical "owner/name" identifier
    pub full_name: String,

    /// Short description (GitHub sends null for repositories without one)
    #[serde(default, deserialize_with = "deserialize_null_description")]
    pub description: String,

    /// Owning user or organization
    pub owner: RepositoryOwner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
    pub avatar_url: String,
}

impl Repository {
    /// Create a new Repository entity
    pub fn new(full_name: String, description: String, owner: RepositoryOwner) -> Self {
        Self {
            full_name,
            description,
            owner,
        }
    }

    /// Case-insensitive identity comparison against a raw "owner/name" query
    pub fn matches_name(&self, query: &str) -> bool {
        self.full_name.to_lowercase() == query.to_lowercase()
    }

    /// Navigation target for the detail screen
    pub fn detail_route(&self) -> String {
        format!("/repositories/{}", self.full_name)
    }
}

fn deserialize_null_description<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_name_is_case_insensitive() {
        let repo = Repository::new(
            "facebook/react".to_string(),
            "A library".to_string(),
            RepositoryOwner {
                login: "facebook".to_string(),
                avatar_url: "http://x/f.png".to_string(),
            },
        );

        assert!(repo.matches_name("FACEBOOK/REACT"));
        assert!(repo.matches_name("facebook/react"));
        assert!(!repo.matches_name("facebook/react-native"));
    }

    #[test]
    fn test_detail_route() {
        let repo = Repository::new(
            "rust-lang/rust".to_string(),
            String::new(),
            RepositoryOwner {
                login: "rust-lang".to_string(),
                avatar_url: "http://x/r.png".to_string(),
            },
        );

        assert_eq!(repo.detail_route(), "/repositories/rust-lang/rust");
    }

    #[test]
    fn test_null_description_becomes_empty() {
        let json = r#"{
            "full_name": "nope/empty",
            "description": null,
            "owner": {"login": "nope", "avatar_url": "http://x/n.png"}
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.description, "");
    }
}
