use std::sync::Arc;

use crate::common::{AuthError, Role};
use crate::kernel::ServerDeps;
use crate::server::middleware::AuthUser;

/// GraphQL request context
///
/// Contains shared dependencies plus the per-request authenticated user,
/// if a valid token came in.
#[derive(Clone)]
pub struct GraphQLContext {
    pub deps: Arc<ServerDeps>,
    pub auth_user: Option<AuthUser>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(deps: Arc<ServerDeps>, auth_user: Option<AuthUser>) -> Self {
        Self { deps, auth_user }
    }

    pub fn deps(&self) -> &ServerDeps {
        &self.deps
    }

    /// The authenticated caller, or an error for anonymous requests.
    pub fn require_auth(&self) -> Result<&AuthUser, AuthError> {
        self.auth_user
            .as_ref()
            .ok_or(AuthError::AuthenticationRequired)
    }

    /// Require exactly this role. Roles are disjoint; an admin does not
    /// pass a volunteer check.
    pub fn require_role(&self, role: Role) -> Result<&AuthUser, AuthError> {
        let user = self.require_auth()?;
        if user.role != role {
            return Err(AuthError::RoleRequired(role));
        }
        Ok(user)
    }

    /// Admin only.
    pub fn require_admin(&self) -> Result<&AuthUser, AuthError> {
        let user = self.require_auth()?;
        if user.role != Role::Admin {
            return Err(AuthError::AdminRequired);
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::UserId;
    use crate::kernel::in_memory_deps;

    fn context_for(auth_user: Option<AuthUser>) -> GraphQLContext {
        let (deps, _) = in_memory_deps();
        GraphQLContext::new(Arc::new(deps), auth_user)
    }

    fn user_with(role: Role) -> AuthUser {
        AuthUser {
            user_id: UserId::new(),
            role,
        }
    }

    #[test]
    fn test_anonymous_fails_every_check() {
        let ctx = context_for(None);
        assert!(ctx.require_auth().is_err());
        assert!(ctx.require_role(Role::Volunteer).is_err());
        assert!(ctx.require_admin().is_err());
    }

    #[test]
    fn test_role_checks_are_exact() {
        let ctx = context_for(Some(user_with(Role::Volunteer)));
        assert!(ctx.require_role(Role::Volunteer).is_ok());
        assert!(ctx.require_role(Role::Patient).is_err());
        assert!(ctx.require_admin().is_err());
    }

    #[test]
    fn test_admin_is_not_a_volunteer() {
        let ctx = context_for(Some(user_with(Role::Admin)));
        assert!(ctx.require_admin().is_ok());
        assert!(ctx.require_role(Role::Volunteer).is_err());
    }
}
