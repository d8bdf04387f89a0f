//! Self-service profile and account-administration handlers.

use std::sync::Arc;

use crate::domain::foundation::{
    authorize, Action, Actor, DomainError, ErrorCode, ResourceKind, Role,
};
use crate::domain::identity::{Email, Identity, Username};
use crate::ports::IdentityRepository;

fn unauthorized() -> DomainError {
    DomainError::new(ErrorCode::Unauthorized, "Authentication required")
}

fn user_not_found(username: &str) -> DomainError {
    DomainError::new(ErrorCode::UserNotFound, "User not found")
        .with_detail("username", username.to_string())
}

/// Partial profile update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

/// Self-service access to the caller's own identity (`/users/me`).
pub struct ProfileHandler {
    identities: Arc<dyn IdentityRepository>,
}

impl ProfileHandler {
    pub fn new(identities: Arc<dyn IdentityRepository>) -> Self {
        Self { identities }
    }

    /// Returns the caller's own identity, freshly loaded.
    pub async fn get(&self, actor: &Actor) -> Result<Identity, DomainError> {
        let auth = actor.authenticated().ok_or_else(unauthorized)?;
        self.identities
            .find_by_id(auth.id)
            .await?
            .ok_or_else(unauthorized)
    }

    /// Applies a partial update to the caller's own identity.
    ///
    /// The role field is immutable through self-service: it is silently
    /// ignored unless the caller is an admin.
    pub async fn update(
        &self,
        actor: &Actor,
        cmd: UpdateProfileCommand,
    ) -> Result<Identity, DomainError> {
        let auth = actor.authenticated().ok_or_else(unauthorized)?;
        let mut identity = self
            .identities
            .find_by_id(auth.id)
            .await?
            .ok_or_else(unauthorized)?;

        if let Some(username) = cmd.username {
            identity.set_username(Username::new(username)?);
        }
        if let Some(email) = cmd.email {
            identity.set_email(Email::new(email)?);
        }
        if let Some(role) = cmd.role {
            if auth.role.is_admin() {
                identity.set_role(role);
            }
        }

        self.identities.update(&identity).await?;
        Ok(identity)
    }
}

/// Command to create an account through administration.
#[derive(Debug, Clone)]
pub struct CreateAccountCommand {
    pub username: String,
    pub email: String,
    pub role: Option<Role>,
}

/// Partial account update through administration.
#[derive(Debug, Clone, Default)]
pub struct UpdateAccountCommand {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

/// Admin-only account management (`/users`).
pub struct AccountAdminHandler {
    identities: Arc<dyn IdentityRepository>,
}

impl AccountAdminHandler {
    pub fn new(identities: Arc<dyn IdentityRepository>) -> Self {
        Self { identities }
    }

    pub async fn list(&self, actor: &Actor) -> Result<Vec<Identity>, DomainError> {
        authorize(actor, Action::Read, ResourceKind::Account, None).into_result()?;
        self.identities.list().await
    }

    pub async fn get(&self, actor: &Actor, username: &str) -> Result<Identity, DomainError> {
        authorize(actor, Action::Read, ResourceKind::Account, None).into_result()?;
        self.identities
            .find_by_username(username)
            .await?
            .ok_or_else(|| user_not_found(username))
    }

    pub async fn create(
        &self,
        actor: &Actor,
        cmd: CreateAccountCommand,
    ) -> Result<Identity, DomainError> {
        authorize(actor, Action::Create, ResourceKind::Account, None).into_result()?;

        let identity = Identity::with_role(
            Username::new(cmd.username)?,
            Email::new(cmd.email)?,
            cmd.role.unwrap_or_default(),
        );
        self.identities.create(&identity).await?;
        Ok(identity)
    }

    pub async fn update(
        &self,
        actor: &Actor,
        username: &str,
        cmd: UpdateAccountCommand,
    ) -> Result<Identity, DomainError> {
        authorize(actor, Action::Update, ResourceKind::Account, None).into_result()?;

        let mut identity = self
            .identities
            .find_by_username(username)
            .await?
            .ok_or_else(|| user_not_found(username))?;

        if let Some(new_username) = cmd.username {
            identity.set_username(Username::new(new_username)?);
        }
        if let Some(email) = cmd.email {
            identity.set_email(Email::new(email)?);
        }
        if let Some(role) = cmd.role {
            identity.set_role(role);
        }

        self.identities.update(&identity).await?;
        Ok(identity)
    }

    pub async fn delete(&self, actor: &Actor, username: &str) -> Result<(), DomainError> {
        authorize(actor, Action::Delete, ResourceKind::Account, None).into_result()?;
        self.identities.delete(username).await
    }
}
