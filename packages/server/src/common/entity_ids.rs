//! Typed ID definitions for the domain entities.
//!
//! One marker struct per entity plus a type alias, so ids cannot be mixed
//! up across entities:
//!
//! ```
//! use server_core::common::{HelpRequestId, UserId};
//!
//! let help_id = HelpRequestId::new();
//! assert_ne!(help_id, HelpRequestId::new());
//!
//! let user_id = UserId::new();
//! assert_eq!(user_id, UserId::from_uuid(user_id.into_uuid()));
//! ```

pub use super::id::Id;

/// Marker type for help request entities.
pub struct HelpRequest;

/// Marker type for user directory entities (patients, volunteers, admins).
///
/// Also used for provisional guest identities, which live in the same id
/// space but have no row in the user directory until registration.
pub struct User;

/// Typed ID for help requests.
pub type HelpRequestId = Id<HelpRequest>;

/// Typed ID for users (and guest identities).
pub type UserId = Id<User>;
