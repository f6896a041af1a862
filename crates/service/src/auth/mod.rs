//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Password sign-in, JWT issue/verification and the bootstrap admin account.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::AuthService;
