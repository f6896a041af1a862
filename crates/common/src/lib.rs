//! Pieces shared by every crate of the workspace: logging setup and a few
//! wire types that do not belong to a single layer.

pub mod types;
pub mod utils;
