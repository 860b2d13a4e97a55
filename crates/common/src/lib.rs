//! Shared building blocks for the Tertulia API
//!
//! This crate provides the pieces every domain crate depends on:
//! - The closed error taxonomy and its translation into HTTP responses
//! - Per-field validation error aggregation
//! - Safe dynamic filter construction for list endpoints
//! - Configuration management following 12-factor principles
//! - Database pool setup and error classification

pub mod config;
pub mod db;
pub mod error;
pub mod fields;
pub mod filter;

pub use config::Config;
pub use error::{Error, Kind, Result};
pub use fields::FieldErrors;
pub use filter::{Filter, FilterArg, FilterBuilder};
