use thiserror::Error;

use crate::common::types::Role;

/// Authorization errors for the volunteer dispatch platform
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Permission denied: {0} role required")]
    RoleRequired(Role),

    #[error("Admin access required")]
    AdminRequired,

    #[error("Invalid or expired token")]
    InvalidToken,
}
