//! Catalog HTTP surface (titles, categories, genres).

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CatalogHandlers;
pub use routes::{category_routes, genre_routes, title_routes};
