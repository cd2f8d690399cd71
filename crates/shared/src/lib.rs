//! Tenancy Shared Types and Utilities
//!
//! This crate contains the tenant data model, the tenant directory and
//! database helpers shared across the workspace.

pub mod db;
pub mod directory;
pub mod error;
pub mod types;

pub use db::*;
pub use directory::{InMemoryDirectory, PgDirectory, TenantDirectory};
pub use error::*;
pub use types::*;
