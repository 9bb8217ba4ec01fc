pub mod help_request;
pub mod ledger;

pub use help_request::*;
pub use ledger::PostgresHelpLedger;
