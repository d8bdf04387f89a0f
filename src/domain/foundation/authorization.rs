//! Centralized authorization decision function.
//!
//! All allow/deny logic lives in [`authorize`], a pure function over the
//! actor, the attempted action, the resource class, and the resource's
//! author. There are no per-endpoint permission conditionals: handlers call
//! this one function and convert the [`Decision`] into a domain error.
//!
//! The rules, per action and role:
//!
//! | Action                         | Anonymous | User  | Moderator/Admin |
//! |--------------------------------|-----------|-------|-----------------|
//! | Read content/catalog           | allow     | allow | allow           |
//! | Create Review/Comment          | deny      | allow | allow           |
//! | Update/Delete own Review/Comment   | deny  | allow | allow           |
//! | Update/Delete others' Review/Comment | deny | deny | allow           |
//! | Write Title/Category/Genre     | deny      | deny  | admin only      |
//! | Manage accounts                | deny      | deny  | admin only      |
//!
//! The owner exception compares identity ids (`Authored::author_id`), never
//! roles, and applies only to reviews and comments. Decisions are stateless
//! and evaluated fresh on every request.

use super::{Actor, DomainError, ErrorCode, IdentityId, Role};

/// The verb an actor attempts against a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

impl Action {
    /// Returns the lowercase verb for logs and denial messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

/// The class of resource an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Title,
    Category,
    Genre,
    Review,
    Comment,
    /// User account administration (not self-service profile access).
    Account,
}

impl ResourceKind {
    /// Returns the resource name for logs and denial messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Title => "title",
            ResourceKind::Category => "category",
            ResourceKind::Genre => "genre",
            ResourceKind::Review => "review",
            ResourceKind::Comment => "comment",
            ResourceKind::Account => "account",
        }
    }

    /// Returns true if the owner exception applies to this resource class.
    fn has_owner_exception(&self) -> bool {
        matches!(self, ResourceKind::Review | ResourceKind::Comment)
    }
}

/// Outcome of an authorization check.
#[derive(Debug, Clone)]
pub struct Decision {
    granted: bool,
    action: Action,
    resource: ResourceKind,
    anonymous: bool,
    denial_reason: Option<String>,
}

impl Decision {
    fn granted(action: Action, resource: ResourceKind) -> Self {
        Self {
            granted: true,
            action,
            resource,
            anonymous: false,
            denial_reason: None,
        }
    }

    fn denied(actor: &Actor, action: Action, resource: ResourceKind, reason: impl Into<String>) -> Self {
        Self {
            granted: false,
            action,
            resource,
            anonymous: actor.is_anonymous(),
            denial_reason: Some(reason.into()),
        }
    }

    /// Returns true if access was granted.
    pub fn is_granted(&self) -> bool {
        self.granted
    }

    /// Returns true if access was denied.
    pub fn is_denied(&self) -> bool {
        !self.granted
    }

    /// Converts this decision to a `Result<(), DomainError>`.
    ///
    /// A denial maps to `Unauthorized` for anonymous actors (a credential
    /// could change the outcome) and `Forbidden` for authenticated ones.
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.granted {
            return Ok(());
        }
        let code = if self.anonymous {
            ErrorCode::Unauthorized
        } else {
            ErrorCode::Forbidden
        };
        Err(DomainError::new(
            code,
            self.denial_reason
                .unwrap_or_else(|| "Access denied".to_string()),
        )
        .with_detail("action", self.action.as_str())
        .with_detail("resource", self.resource.as_str()))
    }
}

/// Decides whether `actor` may perform `action` on a resource of class
/// `resource` authored by `owner` (`None` for unauthored resources and for
/// creates, where no concrete resource exists yet).
pub fn authorize(
    actor: &Actor,
    action: Action,
    resource: ResourceKind,
    owner: Option<IdentityId>,
) -> Decision {
    // Account administration is a closed surface: admin for every verb.
    if resource == ResourceKind::Account {
        return require_role(actor, action, resource, Role::Admin);
    }

    match action {
        // All content and catalog resources are world-readable.
        Action::Read => Decision::granted(action, resource),

        Action::Create => {
            if resource.has_owner_exception() {
                // Any authenticated identity may author reviews and comments.
                match actor.authenticated() {
                    Some(_) => Decision::granted(action, resource),
                    None => Decision::denied(
                        actor,
                        action,
                        resource,
                        "Authentication required to create content",
                    ),
                }
            } else {
                require_role(actor, action, resource, Role::Admin)
            }
        }

        Action::Update | Action::Delete => {
            if !resource.has_owner_exception() {
                return require_role(actor, action, resource, Role::Admin);
            }
            match actor.authenticated() {
                None => Decision::denied(
                    actor,
                    action,
                    resource,
                    "Authentication required to modify content",
                ),
                Some(auth) => {
                    let is_author = owner.is_some_and(|owner| owner == auth.id);
                    if is_author || auth.role.is_moderator() {
                        Decision::granted(action, resource)
                    } else {
                        Decision::denied(
                            actor,
                            action,
                            resource,
                            format!(
                                "Only the author or a moderator may {} this {}",
                                action.as_str(),
                                resource.as_str()
                            ),
                        )
                    }
                }
            }
        }
    }
}

fn require_role(actor: &Actor, action: Action, resource: ResourceKind, required: Role) -> Decision {
    match actor.authenticated() {
        Some(auth) if auth.role.at_least(required) => Decision::granted(action, resource),
        _ => Decision::denied(
            actor,
            action,
            resource,
            format!(
                "Role '{}' required to {} {}",
                required,
                action.as_str(),
                resource.as_str()
            ),
        ),
    }
}
