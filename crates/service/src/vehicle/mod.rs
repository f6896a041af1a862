//! Vehicles: search, lookup, registration with owner find-or-create, removal.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::VehicleService;
