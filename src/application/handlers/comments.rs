//! Comment handlers over the deepest nesting level,
//! `/titles/{tid}/reviews/{rid}/comments`.

use std::sync::Arc;

use crate::application::ResourceResolver;
use crate::domain::foundation::{
    authorize, Action, Actor, Authored, CommentId, DomainError, ErrorCode, ResourceKind, ReviewId,
    TitleId,
};
use crate::domain::review::Comment;
use crate::ports::{CommentRepository, IdentityRepository};

/// Read model for a comment.
#[derive(Debug, Clone)]
pub struct CommentView {
    pub id: CommentId,
    pub review_id: ReviewId,
    pub author: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct UpdateCommentCommand {
    pub text: String,
}

/// Handlers for the comment collection of a review.
pub struct CommentHandler {
    resolver: Arc<ResourceResolver>,
    comments: Arc<dyn CommentRepository>,
    identities: Arc<dyn IdentityRepository>,
}

impl CommentHandler {
    pub fn new(
        resolver: Arc<ResourceResolver>,
        comments: Arc<dyn CommentRepository>,
        identities: Arc<dyn IdentityRepository>,
    ) -> Self {
        Self {
            resolver,
            comments,
            identities,
        }
    }

    pub async fn list(
        &self,
        actor: &Actor,
        title_id: TitleId,
        review_id: ReviewId,
    ) -> Result<Vec<CommentView>, DomainError> {
        self.resolver.resolve_review(title_id, review_id).await?;
        authorize(actor, Action::Read, ResourceKind::Comment, None).into_result()?;

        let mut views = Vec::new();
        for comment in self.comments.list_by_review(review_id).await? {
            views.push(self.view(comment).await?);
        }
        Ok(views)
    }

    pub async fn get(
        &self,
        actor: &Actor,
        title_id: TitleId,
        review_id: ReviewId,
        comment_id: CommentId,
    ) -> Result<CommentView, DomainError> {
        self.resolver.resolve_review(title_id, review_id).await?;
        authorize(actor, Action::Read, ResourceKind::Comment, None).into_result()?;
        let comment = self.load(review_id, comment_id).await?;
        self.view(comment).await
    }

    pub async fn create(
        &self,
        actor: &Actor,
        title_id: TitleId,
        review_id: ReviewId,
        cmd: CreateCommentCommand,
    ) -> Result<CommentView, DomainError> {
        let chain = self.resolver.resolve_review(title_id, review_id).await?;
        authorize(actor, Action::Create, ResourceKind::Comment, None).into_result()?;
        let author = actor
            .identity_id()
            .ok_or_else(|| DomainError::new(ErrorCode::Unauthorized, "Authentication required"))?;

        let review = chain.review.expect("resolved chain carries the review");
        let comment = Comment::new(review.id(), author, cmd.text)?;
        self.comments.create(&comment).await?;
        self.view(comment).await
    }

    pub async fn update(
        &self,
        actor: &Actor,
        title_id: TitleId,
        review_id: ReviewId,
        comment_id: CommentId,
        cmd: UpdateCommentCommand,
    ) -> Result<CommentView, DomainError> {
        self.resolver.resolve_review(title_id, review_id).await?;
        let mut comment = self.load(review_id, comment_id).await?;
        authorize(
            actor,
            Action::Update,
            ResourceKind::Comment,
            Some(comment.author_id()),
        )
        .into_result()?;

        comment.set_text(cmd.text)?;
        self.comments.update(&comment).await?;
        self.view(comment).await
    }

    pub async fn delete(
        &self,
        actor: &Actor,
        title_id: TitleId,
        review_id: ReviewId,
        comment_id: CommentId,
    ) -> Result<(), DomainError> {
        self.resolver.resolve_review(title_id, review_id).await?;
        let comment = self.load(review_id, comment_id).await?;
        authorize(
            actor,
            Action::Delete,
            ResourceKind::Comment,
            Some(comment.author_id()),
        )
        .into_result()?;

        self.comments.delete(comment.id()).await
    }

    /// Loads a comment addressed through its review; a comment id that
    /// lives under a different review is not found here.
    async fn load(
        &self,
        review_id: ReviewId,
        comment_id: CommentId,
    ) -> Result<Comment, DomainError> {
        self.comments
            .find_by_id(comment_id)
            .await?
            .filter(|c| c.review_id() == review_id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::CommentNotFound, "Comment not found")
                    .with_detail("comment_id", comment_id.to_string())
            })
    }

    async fn view(&self, comment: Comment) -> Result<CommentView, DomainError> {
        let author = self
            .identities
            .find_by_id(comment.author_id())
            .await?
            .map(|i| i.username().as_str().to_string())
            .unwrap_or_else(|| comment.author_id().to_string());
        Ok(CommentView {
            id: comment.id(),
            review_id: comment.review_id(),
            author,
            text: comment.text().to_string(),
        })
    }
}
