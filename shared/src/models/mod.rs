//! Domain models for the Apiary Management Platform

mod apiary;
mod hive;
mod material;
mod visit;
mod weather;

pub use apiary::*;
pub use hive::*;
pub use material::*;
pub use visit::*;
pub use weather::*;
