//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - connection pool setup, schema bootstrap and SQLx repositories

pub mod persistence;
