//! # Discography Common Library
//!
//! Shared code for the Discography catalog browser:
//! - Album and track models
//! - Backend client for the hosted REST query API
//! - Album list and album detail fetchers
//! - Configuration loading
//! - Duration formatting and title filtering

pub mod backend;
pub mod catalog;
pub mod config;
pub mod duration;
pub mod error;
pub mod filter;
pub mod models;

pub use backend::BackendClient;
pub use catalog::{AlbumDetail, AlbumListing, AlbumLookup, CatalogSource, NotFoundReason};
pub use error::{Error, Result};
pub use models::{Album, Track};
