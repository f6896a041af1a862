//! Mechanic payments: listing and recording.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::PaymentService;
