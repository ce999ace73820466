//! Validation utilities for the Apiary Management Platform
//!
//! Form-level checks shared by every caller that feeds the store.

use crate::models::HiveStats;

/// Validate an apiary identifier (non-empty, no internal whitespace)
pub fn validate_apiary_id(id: &str) -> Result<(), &'static str> {
    if id.trim().is_empty() {
        return Err("Apiary id must not be empty");
    }
    if id.chars().any(|c| c.is_whitespace()) {
        return Err("Apiary id must not contain whitespace");
    }
    if id.len() > 32 {
        return Err("Apiary id must be at most 32 characters");
    }
    Ok(())
}

/// Validate an apiary display name
pub fn validate_apiary_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Apiary name must not be empty");
    }
    Ok(())
}

/// Validate the forage description entered on registration
pub fn validate_flora(flora: &str) -> Result<(), &'static str> {
    if flora.trim().is_empty() {
        return Err("Flora description must not be empty");
    }
    Ok(())
}

/// Validate a material quantity (must be positive)
pub fn validate_material_quantity(quantity: u32) -> Result<(), &'static str> {
    if quantity == 0 {
        return Err("Quantity must be greater than zero");
    }
    Ok(())
}

/// Validate hive counts reported on a visit (at least one state non-zero)
pub fn validate_visit_counts(counts: &HiveStats) -> Result<(), &'static str> {
    if counts.is_empty() {
        return Err("At least one hive count must be greater than zero");
    }
    Ok(())
}
