//! Category and genre taxonomy records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

const NAME_MAX_LEN: usize = 256;
const SLUG_MAX_LEN: usize = 50;

/// URL-safe unique key for a taxonomy record.
///
/// Lowercase letters, digits, `-` and `_`, at most 50 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::empty_field("slug"));
        }
        if value.len() > SLUG_MAX_LEN {
            return Err(ValidationError::invalid_format(
                "slug",
                format!("longer than {} characters", SLUG_MAX_LEN),
            ));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_'))
        {
            return Err(ValidationError::invalid_format(
                "slug",
                "only lowercase letters, digits, '-' and '_' are allowed",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Slug::new(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

/// A category a title belongs to (at most one per title).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    slug: Slug,
}

impl Category {
    pub fn new(name: impl Into<String>, slug: Slug) -> Result<Self, ValidationError> {
        let name = validate_name(name.into())?;
        Ok(Self { name, slug })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }
}

/// A genre tag (any number per title).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    name: String,
    slug: Slug,
}

impl Genre {
    pub fn new(name: impl Into<String>, slug: Slug) -> Result<Self, ValidationError> {
        let name = validate_name(name.into())?;
        Ok(Self { name, slug })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }
}

fn validate_name(name: String) -> Result<String, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::empty_field("name"));
    }
    if name.len() > NAME_MAX_LEN {
        return Err(ValidationError::invalid_format(
            "name",
            format!("longer than {} characters", NAME_MAX_LEN),
        ));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_url_safe_values() {
        for s in ["movies", "sci-fi", "film_noir", "top100"] {
            assert!(Slug::new(s).is_ok(), "{} should be valid", s);
        }
    }

    #[test]
    fn slug_rejects_uppercase_and_symbols() {
        for s in ["", "Movies", "sci fi", "café", "a/b"] {
            assert!(Slug::new(s).is_err(), "{:?} should be rejected", s);
        }
    }

    #[test]
    fn slug_rejects_over_50_chars() {
        assert!(Slug::new("a".repeat(51)).is_err());
        assert!(Slug::new("a".repeat(50)).is_ok());
    }

    #[test]
    fn category_requires_non_empty_name() {
        let slug = Slug::new("movies").unwrap();
        assert!(Category::new("", slug.clone()).is_err());
        assert!(Category::new("   ", slug.clone()).is_err());
        assert!(Category::new("Movies", slug).is_ok());
    }

    #[test]
    fn genre_exposes_name_and_slug() {
        let genre = Genre::new("Science Fiction", Slug::new("sci-fi").unwrap()).unwrap();
        assert_eq!(genre.name(), "Science Fiction");
        assert_eq!(genre.slug().as_str(), "sci-fi");
    }
}
