//! Apiary (bee yard) models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{HiveStats, WeatherInfo};
use crate::types::ApiaryId;

/// Location text stored when a caller registers an apiary without one
pub const UNSPECIFIED_LOCATION: &str = "Localização não especificada";

/// A bee yard: a named location holding a batch of hives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apiary {
    pub id: ApiaryId,
    pub name: String,
    /// Free text, either coordinates or a description
    pub location: String,
    /// Dominant forage source around the yard
    pub flora: String,
    pub last_visit: NaiveDate,
    pub weather: WeatherInfo,
    pub stats: HiveStats,
}

impl Apiary {
    /// Display label combining name and id, e.g. `Apiário Rosmaninho (API-001)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}
