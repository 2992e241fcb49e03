//! Identity collaborator contract.

use indelo_commerce::UserId;

/// Supplies the current user identity.
///
/// Injected into the submission coordinator rather than read from a
/// process-wide session singleton, so tests can run with fixed identities.
pub trait IdentityProvider: Send + Sync {
    /// The signed-in user, or `None` when unauthenticated.
    fn current_user_id(&self) -> Option<UserId>;
}

/// A fixed identity, for tests and single-user tooling.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user_id: Option<UserId>,
}

impl StaticIdentity {
    /// An identity that is always signed in as `user_id`.
    pub fn signed_in(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// An identity that is never signed in.
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user_id(&self) -> Option<UserId> {
        self.user_id.clone()
    }
}
