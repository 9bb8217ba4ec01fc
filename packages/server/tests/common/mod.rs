// Shared test utilities for the integration suites

pub mod fixtures;
pub mod graphql;
pub mod harness;

pub use fixtures::*;
pub use graphql::*;
pub use harness::*;

/// Build GraphQL variables from scalar values.
///
/// Ids travel as strings and parse on the server side:
/// `vars!("helpId" => help_id.to_string())`.
#[macro_export]
macro_rules! vars {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut vars = juniper::Variables::new();
        $(
            vars.insert(
                $key.to_string(),
                juniper::InputValue::scalar($value),
            );
        )*
        vars
    }};
}
