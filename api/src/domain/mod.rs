//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for the storefront schema
//! - `query`: Typed read specifications executed by repositories
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
pub mod query;
