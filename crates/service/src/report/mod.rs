//! Aggregation queries: average rating, total cost, mechanic payment summary
//! and per-vehicle service details. The arithmetic runs in the database.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::ReportService;
