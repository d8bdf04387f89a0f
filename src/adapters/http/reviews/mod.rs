//! Reviews HTTP surface (reviews and their comments).

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ReviewHandlers;
pub use routes::{comment_routes, review_routes};
