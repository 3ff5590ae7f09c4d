//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs keep every field optional so that a missing key is reported by
//! `validator` as a structured 400 instead of a body rejection.

pub mod character;
pub mod deleted;
pub mod favorite;
pub mod greeting;
pub mod health;
pub mod planet;
pub mod user;
