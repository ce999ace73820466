//! Visit log models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::HiveStats;
use crate::types::ApiaryId;

/// A recorded inspection visit to an apiary.
///
/// One entry is appended per hive-count report, keeping the counts added
/// on that visit and the inspector's observations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub id: Uuid,
    pub apiary_id: ApiaryId,
    pub visit_date: NaiveDate,
    /// Hive counts reported on this visit, by health state
    pub added: HiveStats,
    pub observations: Option<String>,
}
