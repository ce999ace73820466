//! Shared types and models for the Apiary Management Platform
//!
//! This crate contains types shared between the store core, frontends,
//! and other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
