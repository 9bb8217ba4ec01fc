// Business domains
pub mod auth;
pub mod availability;
pub mod help;
