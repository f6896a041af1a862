//! Counters for the dashboard and the admin panel.

pub mod repository;
pub mod service;

pub use repository::{AdminStats, DashboardStats};
pub use service::StatsService;
