//! Application command and query handlers, grouped by resource.

pub mod auth;
pub mod comments;
pub mod reviews;
pub mod taxonomy;
pub mod titles;
pub mod users;

pub use auth::{IssueTokenCommand, IssueTokenHandler, SignupCommand, SignupHandler, SignupOutcome};
pub use comments::{
    CommentHandler, CommentView, CreateCommentCommand, UpdateCommentCommand,
};
pub use reviews::{
    CreateReviewCommand, ReviewHandler, ReviewView, UpdateReviewCommand,
};
pub use taxonomy::{CategoryHandler, CreateTaxonomyCommand, GenreHandler};
pub use titles::{
    CreateTitleCommand, TitleHandler, TitleOrdering, TitleView, UpdateTitleCommand,
};
pub use users::{
    AccountAdminHandler, CreateAccountCommand, ProfileHandler, UpdateAccountCommand,
    UpdateProfileCommand,
};
