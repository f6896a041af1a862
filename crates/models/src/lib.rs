pub mod errors;
pub mod db;
pub mod app_user;
pub mod owner;
pub mod vehicle;
pub mod mechanic;
pub mod service_type;
pub mod service_record;
pub mod payment;
