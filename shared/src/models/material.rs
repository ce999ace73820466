//! Material inventory models

use serde::{Deserialize, Serialize};

use crate::types::{ApiaryId, EntryId};

/// Equipment categories stocked per apiary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    ColmeiaLusitana,
    Alimentadores,
    Quadros,
    Cera,
    Ferramentas,
    /// Custom category with name
    Custom(String),
}

impl std::fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialKind::ColmeiaLusitana => write!(f, "Colmeia Lusitana"),
            MaterialKind::Alimentadores => write!(f, "Alimentadores"),
            MaterialKind::Quadros => write!(f, "Quadros"),
            MaterialKind::Cera => write!(f, "Cera"),
            MaterialKind::Ferramentas => write!(f, "Ferramentas"),
            MaterialKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// An inventory record: a quantity of one material kind held at an apiary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: EntryId,
    pub apiary_id: ApiaryId,
    pub kind: MaterialKind,
    pub quantity: u32,
}
