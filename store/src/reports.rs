//! Derived read models for the dashboard and hives screens
//!
//! Everything here is computed from store state on demand; nothing is
//! cached or kept in sync.

use serde::Serialize;

use shared::models::{Apiary, HiveStatus, Material};
use shared::types::{ApiaryId, StatusCount};

use crate::store::ApiaryStore;

/// Header cards plus the chart feed for the dashboard screen
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_apiaries: usize,
    pub total_hives: u64,
    pub urgent_count: usize,
    /// Four slices in fixed chart order `Boas, Fortes, Fracas, Mortas`
    pub distribution: Vec<StatusCount>,
}

/// One row of the hives screen: a batch of hives of one health state
/// at one apiary, with its field marker
#[derive(Debug, Clone, Serialize)]
pub struct HiveOverviewEntry {
    pub apiary_id: ApiaryId,
    pub apiary_name: String,
    pub status: HiveStatus,
    pub count: u32,
    pub marker: &'static str,
    pub description: &'static str,
}

impl ApiaryStore {
    /// Aggregate view backing the dashboard header and pie chart
    pub fn dashboard_summary(&self) -> DashboardSummary {
        DashboardSummary {
            total_apiaries: self.total_apiaries(),
            total_hives: self.total_hives(),
            urgent_count: self.urgent_hives().len(),
            distribution: self.hives_data(),
        }
    }

    /// Flat list of hive batches across all apiaries, skipping zero
    /// counters. Ordered by apiary insertion order, then canonical
    /// status order within each apiary.
    pub fn hive_overview(&self) -> Vec<HiveOverviewEntry> {
        self.apiaries()
            .iter()
            .flat_map(|apiary| {
                HiveStatus::ALL.iter().filter_map(|status| {
                    let count = apiary.stats.count(*status);
                    if count == 0 {
                        return None;
                    }
                    Some(HiveOverviewEntry {
                        apiary_id: apiary.id.clone(),
                        apiary_name: apiary.name.clone(),
                        status: *status,
                        count,
                        marker: status.marker(),
                        description: status.marker_description(),
                    })
                })
            })
            .collect()
    }

    /// Apiaries ordered by most recent visit first. Ties keep display
    /// (insertion) order, which the stable sort guarantees.
    pub fn recent_apiaries(&self) -> Vec<&Apiary> {
        let mut apiaries: Vec<&Apiary> = self.apiaries().iter().collect();
        apiaries.sort_by(|a, b| b.last_visit.cmp(&a.last_visit));
        apiaries
    }

    /// Inventory records belonging to one apiary, in append order
    pub fn materials_for(&self, apiary_id: &ApiaryId) -> Vec<&Material> {
        self.materials()
            .iter()
            .filter(|m| &m.apiary_id == apiary_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CreateApiaryInput, CreateMaterialInput};
    use chrono::NaiveDate;
    use shared::models::{HiveStats, MaterialKind};

    fn seeded_store() -> ApiaryStore {
        let mut store = ApiaryStore::new();
        for (id, name, flora) in [
            ("API-001", "Apiário Rosmaninho", "Rosmaninho"),
            ("API-002", "Apiário Castanheiro", "Flor de Castanheiro"),
            ("API-003", "Apiário Eucalipto", "Eucalipto"),
        ] {
            store
                .add_apiary(CreateApiaryInput {
                    id: id.into(),
                    name: name.to_string(),
                    location: None,
                    flora: flora.to_string(),
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn dashboard_summary_matches_store_totals() {
        let mut store = seeded_store();
        store
            .add_hives(&"API-001".into(), HiveStats::new(5, 15, 3, 2), None)
            .unwrap();
        store
            .add_hives(&"API-002".into(), HiveStats::new(8, 10, 2, 0), None)
            .unwrap();

        let summary = store.dashboard_summary();
        assert_eq!(summary.total_apiaries, 3);
        assert_eq!(summary.total_hives, 45);
        // Strong+weak+dead from the first visit, strong+weak from the second
        assert_eq!(summary.urgent_count, 5);
        assert_eq!(summary.distribution, store.hives_data());
    }

    #[test]
    fn dashboard_summary_serializes_for_the_frontend() {
        let store = seeded_store();
        let json = serde_json::to_value(store.dashboard_summary()).unwrap();
        assert_eq!(json["total_apiaries"], 3);
        assert_eq!(json["distribution"][0]["status"], "Boas");
    }

    #[test]
    fn hive_overview_skips_zero_counters() {
        let mut store = seeded_store();
        store
            .add_hives(&"API-001".into(), HiveStats::new(5, 0, 3, 0), None)
            .unwrap();
        store
            .add_hives(&"API-003".into(), HiveStats::new(0, 0, 0, 1), None)
            .unwrap();

        let overview = store.hive_overview();
        assert_eq!(overview.len(), 3);
        assert_eq!(overview[0].apiary_name, "Apiário Rosmaninho");
        assert_eq!(overview[0].status, HiveStatus::Good);
        assert_eq!(overview[0].marker, "🪨");
        assert_eq!(overview[0].description, "1 pedra ao meio");
        assert_eq!(overview[1].status, HiveStatus::Weak);
        assert_eq!(overview[2].apiary_name, "Apiário Eucalipto");
        assert_eq!(overview[2].status, HiveStatus::Dead);
        assert_eq!(overview[2].marker, "🥢");
    }

    #[test]
    fn recent_apiaries_sorts_by_last_visit_descending() {
        let mut store = seeded_store();
        let dates = [
            ("API-001", NaiveDate::from_ymd_opt(2023, 10, 15).unwrap()),
            ("API-002", NaiveDate::from_ymd_opt(2023, 10, 20).unwrap()),
            ("API-003", NaiveDate::from_ymd_opt(2023, 10, 10).unwrap()),
        ];
        for (id, date) in dates {
            store.update_last_visit(&id.into(), date).unwrap();
        }

        let recent: Vec<&str> = store
            .recent_apiaries()
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(recent, vec!["API-002", "API-001", "API-003"]);
    }

    #[test]
    fn materials_for_filters_by_apiary() {
        let mut store = seeded_store();
        for (apiary, kind, quantity) in [
            ("API-001", MaterialKind::Quadros, 20),
            ("API-002", MaterialKind::Cera, 5),
            ("API-001", MaterialKind::Alimentadores, 3),
        ] {
            store
                .add_material(CreateMaterialInput {
                    apiary_id: apiary.into(),
                    kind,
                    quantity,
                })
                .unwrap();
        }

        let materials = store.materials_for(&"API-001".into());
        assert_eq!(materials.len(), 2);
        assert_eq!(materials[0].kind, MaterialKind::Quadros);
        assert_eq!(materials[1].kind, MaterialKind::Alimentadores);
        assert!(store.materials_for(&"API-003".into()).is_empty());
    }
}
