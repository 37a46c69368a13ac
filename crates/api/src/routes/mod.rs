pub mod account;
pub mod health;
pub mod index;
pub mod metrics;
pub mod tasks;
