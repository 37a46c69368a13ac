//! Shared identifier types used across the marketing studio crates.

pub mod types;

pub use types::{TaskId, UserId};
