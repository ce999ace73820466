//! Hive health classification and counts

use serde::{Deserialize, Serialize};

use crate::types::{ApiaryId, EntryId};

/// Health classification of a batch of hives.
///
/// Field beekeepers mark each hive with stones or sticks on the lid;
/// the four states below mirror that marking system. The declaration
/// order is canonical and drives chart/legend order everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiveStatus {
    Good,
    Strong,
    Weak,
    Dead,
}

impl HiveStatus {
    /// All statuses in canonical chart order
    pub const ALL: [HiveStatus; 4] = [
        HiveStatus::Good,
        HiveStatus::Strong,
        HiveStatus::Weak,
        HiveStatus::Dead,
    ];

    /// Singular Portuguese status label as shown on hive cards
    pub fn label_pt(&self) -> &'static str {
        match self {
            HiveStatus::Good => "boa",
            HiveStatus::Strong => "forte",
            HiveStatus::Weak => "fraca",
            HiveStatus::Dead => "morta",
        }
    }

    /// Plural Portuguese label used for chart slices and legends
    pub fn chart_label(&self) -> &'static str {
        match self {
            HiveStatus::Good => "Boas",
            HiveStatus::Strong => "Fortes",
            HiveStatus::Weak => "Fracas",
            HiveStatus::Dead => "Mortas",
        }
    }

    /// Physical marker placed on the hive lid in the field
    pub fn marker(&self) -> &'static str {
        match self {
            HiveStatus::Good => "🪨",
            HiveStatus::Strong => "🪨🪨",
            HiveStatus::Weak => "↖️🪨",
            HiveStatus::Dead => "🥢",
        }
    }

    /// Meaning of the marker, for the classification legend
    pub fn marker_description(&self) -> &'static str {
        match self {
            HiveStatus::Good => "1 pedra ao meio",
            HiveStatus::Strong => "2 pedras ao meio",
            HiveStatus::Weak => "1 pedra à esquerda",
            HiveStatus::Dead => "1 pau ao meio",
        }
    }

    /// Recommended intervention when hives in this state are reported.
    /// Good hives need no action and never enter the urgent worklist.
    pub fn recommended_action(&self) -> Option<&'static str> {
        match self {
            HiveStatus::Good => None,
            HiveStatus::Strong => Some("Alça URGENTE"),
            HiveStatus::Weak => Some("Verificar rainha/alimentação"),
            HiveStatus::Dead => Some("Levar para Pavilhão"),
        }
    }
}

impl std::fmt::Display for HiveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label_pt())
    }
}

/// Per-apiary hive counts, one counter per health state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiveStats {
    pub good: u32,
    pub strong: u32,
    pub weak: u32,
    pub dead: u32,
}

impl HiveStats {
    pub fn new(good: u32, strong: u32, weak: u32, dead: u32) -> Self {
        Self {
            good,
            strong,
            weak,
            dead,
        }
    }

    /// Total hives across all four states
    pub fn total(&self) -> u64 {
        self.good as u64 + self.strong as u64 + self.weak as u64 + self.dead as u64
    }

    pub fn count(&self, status: HiveStatus) -> u32 {
        match status {
            HiveStatus::Good => self.good,
            HiveStatus::Strong => self.strong,
            HiveStatus::Weak => self.weak,
            HiveStatus::Dead => self.dead,
        }
    }

    /// Set one counter to an absolute value
    pub fn set(&mut self, status: HiveStatus, count: u32) {
        match status {
            HiveStatus::Good => self.good = count,
            HiveStatus::Strong => self.strong = count,
            HiveStatus::Weak => self.weak = count,
            HiveStatus::Dead => self.dead = count,
        }
    }

    /// Add another set of counts to this one, saturating on overflow
    pub fn add(&mut self, delta: &HiveStats) {
        self.good = self.good.saturating_add(delta.good);
        self.strong = self.strong.saturating_add(delta.strong);
        self.weak = self.weak.saturating_add(delta.weak);
        self.dead = self.dead.saturating_add(delta.dead);
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// A worklist entry flagging a batch of hives that needs intervention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgentHive {
    pub id: EntryId,
    pub apiary_id: ApiaryId,
    pub status: HiveStatus,
    pub quantity: u32,
    pub action: String,
    pub flagged_on: chrono::NaiveDate,
}
