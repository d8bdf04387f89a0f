//! Review handlers over the nested `/titles/{id}/reviews` collection.
//!
//! Every operation resolves the parent chain first, then authorizes, then
//! touches the store.

use std::sync::Arc;

use crate::application::ResourceResolver;
use crate::domain::foundation::{
    authorize, Action, Actor, Authored, DomainError, ErrorCode, IdentityId, ResourceKind,
    ReviewId, TitleId,
};
use crate::domain::review::{Review, Score};
use crate::ports::{CommentRepository, IdentityRepository, ReviewRepository};

/// Read model for a review.
#[derive(Debug, Clone)]
pub struct ReviewView {
    pub id: ReviewId,
    pub title_id: TitleId,
    pub author: String,
    pub score: u8,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct CreateReviewCommand {
    pub score: u8,
    pub text: String,
}

/// Partial review update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateReviewCommand {
    pub score: Option<u8>,
    pub text: Option<String>,
}

/// Handlers for the review collection of a title.
pub struct ReviewHandler {
    resolver: Arc<ResourceResolver>,
    reviews: Arc<dyn ReviewRepository>,
    comments: Arc<dyn CommentRepository>,
    identities: Arc<dyn IdentityRepository>,
}

impl ReviewHandler {
    pub fn new(
        resolver: Arc<ResourceResolver>,
        reviews: Arc<dyn ReviewRepository>,
        comments: Arc<dyn CommentRepository>,
        identities: Arc<dyn IdentityRepository>,
    ) -> Self {
        Self {
            resolver,
            reviews,
            comments,
            identities,
        }
    }

    pub async fn list(
        &self,
        actor: &Actor,
        title_id: TitleId,
    ) -> Result<Vec<ReviewView>, DomainError> {
        let chain = self.resolver.resolve_title(title_id).await?;
        authorize(actor, Action::Read, ResourceKind::Review, None).into_result()?;

        let mut views = Vec::new();
        for review in self.reviews.list_by_title(chain.title.id()).await? {
            views.push(self.view(review).await?);
        }
        Ok(views)
    }

    pub async fn get(
        &self,
        actor: &Actor,
        title_id: TitleId,
        review_id: ReviewId,
    ) -> Result<ReviewView, DomainError> {
        let chain = self.resolver.resolve_review(title_id, review_id).await?;
        authorize(actor, Action::Read, ResourceKind::Review, None).into_result()?;
        self.view(chain.review.expect("resolved chain carries the review"))
            .await
    }

    pub async fn create(
        &self,
        actor: &Actor,
        title_id: TitleId,
        cmd: CreateReviewCommand,
    ) -> Result<ReviewView, DomainError> {
        let chain = self.resolver.resolve_title(title_id).await?;
        authorize(actor, Action::Create, ResourceKind::Review, None).into_result()?;
        let author = actor
            .identity_id()
            .ok_or_else(|| DomainError::new(ErrorCode::Unauthorized, "Authentication required"))?;

        let review = Review::new(chain.title.id(), author, Score::new(cmd.score)?, cmd.text)?;
        self.reviews.create(&review).await?;
        self.view(review).await
    }

    pub async fn update(
        &self,
        actor: &Actor,
        title_id: TitleId,
        review_id: ReviewId,
        cmd: UpdateReviewCommand,
    ) -> Result<ReviewView, DomainError> {
        let chain = self.resolver.resolve_review(title_id, review_id).await?;
        let mut review = chain.review.expect("resolved chain carries the review");
        authorize(
            actor,
            Action::Update,
            ResourceKind::Review,
            Some(review.author_id()),
        )
        .into_result()?;

        if let Some(score) = cmd.score {
            review.set_score(Score::new(score)?);
        }
        if let Some(text) = cmd.text {
            review.set_text(text)?;
        }

        self.reviews.update(&review).await?;
        self.view(review).await
    }

    /// Deletes a review and cascades through its comments.
    pub async fn delete(
        &self,
        actor: &Actor,
        title_id: TitleId,
        review_id: ReviewId,
    ) -> Result<(), DomainError> {
        let chain = self.resolver.resolve_review(title_id, review_id).await?;
        let review = chain.review.expect("resolved chain carries the review");
        authorize(
            actor,
            Action::Delete,
            ResourceKind::Review,
            Some(review.author_id()),
        )
        .into_result()?;

        self.reviews.delete(review.id()).await?;
        self.comments.delete_by_review(review.id()).await?;
        Ok(())
    }

    async fn view(&self, review: Review) -> Result<ReviewView, DomainError> {
        Ok(ReviewView {
            id: review.id(),
            title_id: review.title_id(),
            author: self.author_name(review.author_id()).await?,
            score: review.score().value(),
            text: review.text().to_string(),
        })
    }

    /// The author's username, or the raw id once the account is gone.
    async fn author_name(&self, author: IdentityId) -> Result<String, DomainError> {
        Ok(self
            .identities
            .find_by_id(author)
            .await?
            .map(|i| i.username().as_str().to_string())
            .unwrap_or_else(|| author.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryCommentRepository, InMemoryIdentityRepository, InMemoryReviewRepository,
        InMemoryTitleRepository,
    };
    use crate::domain::catalog::Title;
    use crate::domain::foundation::{AuthenticatedActor, Role};
    use crate::domain::identity::{Email, Identity, Username};
    use crate::domain::review::Comment;
    use crate::ports::TitleRepository;

    struct Fixture {
        handler: ReviewHandler,
        comments: Arc<InMemoryCommentRepository>,
        title_id: TitleId,
    }

    async fn fixture() -> Fixture {
        let titles = Arc::new(InMemoryTitleRepository::new());
        let reviews = Arc::new(InMemoryReviewRepository::new());
        let comments = Arc::new(InMemoryCommentRepository::new());
        let identities = Arc::new(InMemoryIdentityRepository::new());

        let title = Title::new("Blade Runner", 1982, None, vec![]).unwrap();
        titles.create(&title).await.unwrap();

        let resolver = Arc::new(ResourceResolver::new(titles, reviews.clone()));
        Fixture {
            handler: ReviewHandler::new(resolver, reviews, comments.clone(), identities),
            comments,
            title_id: title.id(),
        }
    }

    fn actor(role: Role) -> Actor {
        Actor::Known(AuthenticatedActor::new(IdentityId::new(), "someone", role))
    }

    fn cmd(score: u8, text: &str) -> CreateReviewCommand {
        CreateReviewCommand {
            score,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn authenticated_user_creates_review() {
        let fx = fixture().await;
        let view = fx
            .handler
            .create(&actor(Role::User), fx.title_id, cmd(8, "Solid"))
            .await
            .unwrap();

        assert_eq!(view.score, 8);
        assert_eq!(view.title_id, fx.title_id);
        assert_eq!(fx.handler.list(&Actor::Anonymous, fx.title_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn anonymous_cannot_create_review() {
        let fx = fixture().await;
        let err = fx
            .handler
            .create(&Actor::Anonymous, fx.title_id, cmd(8, "Solid"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn create_under_unknown_title_is_title_not_found() {
        let fx = fixture().await;
        let err = fx
            .handler
            .create(&actor(Role::User), TitleId::new(), cmd(8, "Solid"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TitleNotFound);
    }

    #[tokio::test]
    async fn second_review_by_same_author_conflicts() {
        let fx = fixture().await;
        let author = actor(Role::User);

        fx.handler
            .create(&author, fx.title_id, cmd(8, "First"))
            .await
            .unwrap();
        let err = fx
            .handler
            .create(&author, fx.title_id, cmd(9, "Second"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
    }

    #[tokio::test]
    async fn out_of_range_score_fails_validation() {
        let fx = fixture().await;
        let err = fx
            .handler
            .create(&actor(Role::User), fx.title_id, cmd(11, "Too good"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRange);
    }

    #[tokio::test]
    async fn author_updates_own_review() {
        let fx = fixture().await;
        let author = actor(Role::User);
        let view = fx
            .handler
            .create(&author, fx.title_id, cmd(5, "Meh"))
            .await
            .unwrap();

        let updated = fx
            .handler
            .update(
                &author,
                fx.title_id,
                view.id,
                UpdateReviewCommand {
                    score: Some(9),
                    text: Some("Grew on me".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.score, 9);
        assert_eq!(updated.text, "Grew on me");
    }

    #[tokio::test]
    async fn other_user_cannot_update_review() {
        let fx = fixture().await;
        let view = fx
            .handler
            .create(&actor(Role::User), fx.title_id, cmd(5, "Mine"))
            .await
            .unwrap();

        let err = fx
            .handler
            .update(
                &actor(Role::User),
                fx.title_id,
                view.id,
                UpdateReviewCommand::default(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn moderator_deletes_others_review() {
        let fx = fixture().await;
        let view = fx
            .handler
            .create(&actor(Role::User), fx.title_id, cmd(5, "Mine"))
            .await
            .unwrap();

        fx.handler
            .delete(&actor(Role::Moderator), fx.title_id, view.id)
            .await
            .unwrap();
        assert!(fx.handler.list(&Actor::Anonymous, fx.title_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_cascades_comments() {
        let fx = fixture().await;
        let author = actor(Role::User);
        let view = fx
            .handler
            .create(&author, fx.title_id, cmd(5, "Mine"))
            .await
            .unwrap();
        fx.comments
            .create(&Comment::new(view.id, IdentityId::new(), "hello").unwrap())
            .await
            .unwrap();

        fx.handler.delete(&author, fx.title_id, view.id).await.unwrap();
        assert!(fx.comments.list_by_review(view.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn view_falls_back_to_id_for_deleted_author() {
        let fx = fixture().await;
        let author = actor(Role::User);
        let view = fx
            .handler
            .create(&author, fx.title_id, cmd(5, "Mine"))
            .await
            .unwrap();

        // The author never existed in the identity store, so the view
        // carries the raw id.
        assert_eq!(view.author, author.identity_id().unwrap().to_string());
    }

    #[tokio::test]
    async fn view_shows_author_username_when_known() {
        let titles = Arc::new(InMemoryTitleRepository::new());
        let reviews = Arc::new(InMemoryReviewRepository::new());
        let comments = Arc::new(InMemoryCommentRepository::new());
        let identities = Arc::new(InMemoryIdentityRepository::new());

        let title = Title::new("Alien", 1979, None, vec![]).unwrap();
        titles.create(&title).await.unwrap();
        let identity = Identity::new(
            Username::new("ripley").unwrap(),
            Email::new("r@x.com").unwrap(),
        );
        identities.create(&identity).await.unwrap();

        let resolver = Arc::new(ResourceResolver::new(titles, reviews.clone()));
        let handler = ReviewHandler::new(resolver, reviews, comments, identities);

        let author = Actor::Known(AuthenticatedActor::new(
            identity.id(),
            "ripley",
            Role::User,
        ));
        let view = handler
            .create(&author, title.id(), cmd(10, "Perfect organism"))
            .await
            .unwrap();
        assert_eq!(view.author, "ripley");
    }
}
