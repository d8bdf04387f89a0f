//! HTTP DTOs for title, category and genre endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{TitleOrdering, TitleView};
use crate::domain::catalog::{Category, Genre};

/// Category or genre record as it appears in responses.
#[derive(Debug, Clone, Serialize)]
pub struct TaxonomyResponse {
    pub name: String,
    pub slug: String,
}

impl From<Category> for TaxonomyResponse {
    fn from(category: Category) -> Self {
        Self {
            name: category.name().to_string(),
            slug: category.slug().as_str().to_string(),
        }
    }
}

impl From<Genre> for TaxonomyResponse {
    fn from(genre: Genre) -> Self {
        Self {
            name: genre.name().to_string(),
            slug: genre.slug().as_str().to_string(),
        }
    }
}

/// Title view carrying the derived rating.
#[derive(Debug, Clone, Serialize)]
pub struct TitleResponse {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub rating: Option<u8>,
    pub category: Option<TaxonomyResponse>,
    pub genres: Vec<TaxonomyResponse>,
}

impl From<TitleView> for TitleResponse {
    fn from(view: TitleView) -> Self {
        Self {
            id: view.id.to_string(),
            name: view.name,
            year: view.year,
            rating: view.rating.map(|r| r.value()),
            category: view.category.map(Into::into),
            genres: view.genres.into_iter().map(Into::into).collect(),
        }
    }
}

/// Request to create a title.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTitleRequest {
    pub name: String,
    pub year: i32,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Partial title update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTitleRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
}

/// Query parameters for the title listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListTitlesQuery {
    #[serde(default)]
    pub ordering: Option<String>,
}

impl ListTitlesQuery {
    /// Maps the `ordering` parameter onto a criterion; unknown values fall
    /// back to the name ordering.
    pub fn title_ordering(&self) -> TitleOrdering {
        match self.ordering.as_deref() {
            Some("rating") => TitleOrdering::Rating,
            _ => TitleOrdering::Name,
        }
    }
}

/// Request to create a category or genre.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaxonomyRequest {
    pub name: String,
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_parses_rating_and_defaults_to_name() {
        let rating = ListTitlesQuery {
            ordering: Some("rating".to_string()),
        };
        assert_eq!(rating.title_ordering(), TitleOrdering::Rating);

        let name = ListTitlesQuery {
            ordering: Some("name".to_string()),
        };
        assert_eq!(name.title_ordering(), TitleOrdering::Name);

        let unknown = ListTitlesQuery {
            ordering: Some("year".to_string()),
        };
        assert_eq!(unknown.title_ordering(), TitleOrdering::Name);

        let absent = ListTitlesQuery { ordering: None };
        assert_eq!(absent.title_ordering(), TitleOrdering::Name);
    }
}
