//! Auth domain - JWT token creation and verification
//!
//! Tokens are issued by the account service; this API only verifies them
//! and carries the identity through request extensions.

pub mod jwt;

pub use jwt::{Claims, JwtService};
