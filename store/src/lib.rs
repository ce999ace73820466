//! Apiary Management Platform - Store Core
//!
//! Single source of truth for apiary, hive, visit, and material state.
//! The UI layer calls the mutation operations here and renders the
//! derived read views; it never mutates entities directly.
//!
//! State is volatile and lives for the process lifetime. Construct one
//! [`ApiaryStore`] at startup and pass it by reference to all callers;
//! tests use [`ApiaryStore::reset`] between scenarios.

pub mod error;
pub mod reports;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use reports::{DashboardSummary, HiveOverviewEntry};
pub use store::{ApiaryStore, CreateApiaryInput, CreateMaterialInput};
