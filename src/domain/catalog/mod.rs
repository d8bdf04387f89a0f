//! Catalog domain - titles and their taxonomy.

mod rating;
mod taxonomy;
mod title;

pub use rating::{mean_rating, rating_ordering, Rating};
pub use taxonomy::{Category, Genre, Slug};
pub use title::Title;
