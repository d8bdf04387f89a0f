//! The Title aggregate.

use crate::domain::foundation::{TitleId, ValidationError};

use super::Slug;

const NAME_MAX_LEN: usize = 256;

/// A reviewable work: a film, a book, an album.
///
/// A title's rating is derived from its reviews on every read and is never
/// stored here; see [`super::rating`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    id: TitleId,
    name: String,
    year: i32,
    category: Option<Slug>,
    genres: Vec<Slug>,
}

impl Title {
    pub fn new(
        name: impl Into<String>,
        year: i32,
        category: Option<Slug>,
        genres: Vec<Slug>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.len() > NAME_MAX_LEN {
            return Err(ValidationError::invalid_format(
                "name",
                format!("longer than {} characters", NAME_MAX_LEN),
            ));
        }
        Ok(Self {
            id: TitleId::new(),
            name,
            year,
            category,
            genres,
        })
    }

    pub fn id(&self) -> TitleId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn category(&self) -> Option<&Slug> {
        self.category.as_ref()
    }

    pub fn genres(&self) -> &[Slug] {
        &self.genres
    }

    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.len() > NAME_MAX_LEN {
            return Err(ValidationError::invalid_format(
                "name",
                format!("longer than {} characters", NAME_MAX_LEN),
            ));
        }
        self.name = name;
        Ok(())
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    pub fn set_category(&mut self, category: Option<Slug>) {
        self.category = category;
    }

    pub fn set_genres(&mut self, genres: Vec<Slug>) {
        self.genres = genres;
    }
}
