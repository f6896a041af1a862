//! Service layer for the shop: vehicles, payments, reports and sign-in.
//! - Business rules and input validation live here, persistence behind repository traits.
//! - Each area ships a SeaORM repository and an in-memory `mock` for tests.

pub mod errors;
pub mod validation;
pub mod auth;
pub mod vehicle;
pub mod payment;
pub mod report;
pub mod stats;
#[cfg(test)]
pub mod test_support;
