//! Project slug rules

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::DomainError;

static SLUG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new("^[a-z0-9-]+$").unwrap());

/// Derive a slug from arbitrary input: lowercase, whitespace and invalid
/// characters collapsed to single dashes, dashes trimmed at both ends.
pub fn normalize_slug(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut last_dash = true; // suppress leading dashes

    for c in raw.trim().to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Validate a normalized slug against the format contract
pub fn validate_slug(slug: &str) -> Result<(), DomainError> {
    if slug.is_empty() || !SLUG_REGEX.is_match(slug) {
        return Err(DomainError::project_validation(
            "Slug must match ^[a-z0-9-]+$",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize_slug("My Project"), "my-project");
    }

    #[test]
    fn test_normalize_collapses_runs() {
        assert_eq!(normalize_slug("  Hello,   World!  "), "hello-world");
        assert_eq!(normalize_slug("a___b"), "a-b");
    }

    #[test]
    fn test_normalize_trims_dashes() {
        assert_eq!(normalize_slug("--edge--"), "edge");
    }

    #[test]
    fn test_normalize_preserves_valid() {
        assert_eq!(normalize_slug("already-valid-123"), "already-valid-123");
    }

    #[test]
    fn test_validate_rejects_empty() {
        let err = validate_slug("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Project validation failed: Slug must match ^[a-z0-9-]+$"
        );
    }

    #[test]
    fn test_validate_rejects_uppercase() {
        assert!(validate_slug("Nope").is_err());
    }

    #[test]
    fn test_validate_accepts_normalized() {
        assert!(validate_slug(&normalize_slug("Some Name 42")).is_ok());
    }
}
