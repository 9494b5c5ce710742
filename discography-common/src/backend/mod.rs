//! Hosted backend access

pub mod client;
pub mod query;

pub use client::BackendClient;
pub use query::{Order, Query};
