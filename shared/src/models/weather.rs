//! Weather data models
//!
//! Weather values are manually entered free text. No unit parsing or
//! validation happens anywhere; the store echoes back exactly what was
//! recorded at the yard.

use serde::{Deserialize, Serialize};

/// Last observed weather at an apiary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherInfo {
    pub temperature: String,
    pub condition: String,
    pub humidity: String,
}

impl WeatherInfo {
    pub fn new(
        temperature: impl Into<String>,
        condition: impl Into<String>,
        humidity: impl Into<String>,
    ) -> Self {
        Self {
            temperature: temperature.into(),
            condition: condition.into(),
            humidity: humidity.into(),
        }
    }

    /// Values shown for an apiary that has no recorded observation yet
    pub fn placeholder() -> Self {
        Self::new("20°C", "Informação não disponível", "60%")
    }
}

impl Default for WeatherInfo {
    fn default() -> Self {
        Self::placeholder()
    }
}
