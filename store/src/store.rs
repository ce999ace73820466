//! The in-memory apiary state container

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use shared::models::{
    Apiary, HiveStats, HiveStatus, Material, MaterialKind, UrgentHive, Visit, WeatherInfo,
    UNSPECIFIED_LOCATION,
};
use shared::types::{ApiaryId, EntryId, StatusCount};
use shared::validation;

use crate::error::{StoreError, StoreResult};

/// Input for registering an apiary
#[derive(Debug, Clone, Deserialize)]
pub struct CreateApiaryInput {
    pub id: ApiaryId,
    pub name: String,
    /// Coordinates or free-text description; placeholder when omitted
    pub location: Option<String>,
    pub flora: String,
}

/// Input for adding a material to the inventory
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMaterialInput {
    pub apiary_id: ApiaryId,
    pub kind: MaterialKind,
    pub quantity: u32,
}

/// Single source of truth for apiary, hive, visit, and material state.
///
/// All collections keep insertion order; for apiaries that order is also
/// the display order. Mutations take `&mut self`, so exclusive access is
/// guaranteed by the borrow checker rather than by locks.
#[derive(Debug, Default)]
pub struct ApiaryStore {
    apiaries: Vec<Apiary>,
    urgent_hives: Vec<UrgentHive>,
    materials: Vec<Material>,
    visits: Vec<Visit>,
    /// Last issued ledger id; entry ids start at 1
    next_entry_id: u64,
}

impl ApiaryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Register a new apiary with zeroed hive counts and placeholder
    /// weather. `last_visit` is set to the registration date.
    ///
    /// Apiary ids are unique; registering an id twice fails with
    /// [`StoreError::DuplicateEntry`].
    pub fn add_apiary(&mut self, input: CreateApiaryInput) -> StoreResult<Apiary> {
        validation::validate_apiary_id(input.id.as_str()).map_err(StoreError::ValidationError)?;
        validation::validate_apiary_name(&input.name).map_err(StoreError::ValidationError)?;
        validation::validate_flora(&input.flora).map_err(StoreError::ValidationError)?;

        if self.apiaries.iter().any(|a| a.id == input.id) {
            return Err(StoreError::DuplicateEntry(format!("apiary {}", input.id)));
        }

        let apiary = Apiary {
            id: input.id,
            name: input.name,
            location: input
                .location
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| UNSPECIFIED_LOCATION.to_string()),
            flora: input.flora,
            last_visit: today(),
            weather: WeatherInfo::placeholder(),
            stats: HiveStats::default(),
        };

        tracing::info!(apiary = %apiary.id, name = %apiary.name, "registered apiary");
        self.apiaries.push(apiary.clone());
        Ok(apiary)
    }

    /// Report hive counts from an inspection visit.
    ///
    /// Increments the apiary's counters by the given deltas, refreshes
    /// `last_visit`, and appends a [`Visit`] record carrying the counts
    /// and observations. For each positive strong/weak/dead delta one
    /// urgent worklist entry is generated; good hives never generate one.
    pub fn add_hives(
        &mut self,
        apiary_id: &ApiaryId,
        counts: HiveStats,
        observations: Option<String>,
    ) -> StoreResult<Visit> {
        validation::validate_visit_counts(&counts).map_err(StoreError::ValidationError)?;

        let visit_date = today();
        let apiary = self.apiary_mut(apiary_id)?;
        apiary.stats.add(&counts);
        apiary.last_visit = visit_date;

        let visit = Visit {
            id: Uuid::new_v4(),
            apiary_id: apiary_id.clone(),
            visit_date,
            added: counts,
            observations: observations.filter(|o| !o.trim().is_empty()),
        };
        self.visits.push(visit.clone());

        for status in [HiveStatus::Strong, HiveStatus::Weak, HiveStatus::Dead] {
            let quantity = counts.count(status);
            if quantity == 0 {
                continue;
            }
            let Some(action) = status.recommended_action() else {
                continue;
            };
            let entry = UrgentHive {
                id: self.next_entry_id(),
                apiary_id: apiary_id.clone(),
                status,
                quantity,
                action: action.to_string(),
                flagged_on: visit_date,
            };
            tracing::debug!(
                apiary = %apiary_id,
                status = %status,
                quantity,
                "flagged urgent hives"
            );
            self.urgent_hives.push(entry);
        }

        Ok(visit)
    }

    /// Set one hive counter to an absolute value (not additive) and
    /// refresh `last_visit`.
    pub fn update_hive_stats(
        &mut self,
        apiary_id: &ApiaryId,
        status: HiveStatus,
        count: u32,
    ) -> StoreResult<()> {
        let visit_date = today();
        let apiary = self.apiary_mut(apiary_id)?;
        apiary.stats.set(status, count);
        apiary.last_visit = visit_date;
        tracing::debug!(apiary = %apiary_id, status = %status, count, "set hive counter");
        Ok(())
    }

    /// Add a material record to the inventory of an existing apiary
    pub fn add_material(&mut self, input: CreateMaterialInput) -> StoreResult<Material> {
        validation::validate_material_quantity(input.quantity).map_err(|_| {
            StoreError::InvalidQuantity {
                field: "quantity",
                value: input.quantity,
            }
        })?;
        if self.apiary(&input.apiary_id).is_none() {
            return Err(StoreError::NotFound(format!("apiary {}", input.apiary_id)));
        }

        let material = Material {
            id: self.next_entry_id(),
            apiary_id: input.apiary_id,
            kind: input.kind,
            quantity: input.quantity,
        };
        tracing::info!(
            apiary = %material.apiary_id,
            kind = %material.kind,
            quantity = material.quantity,
            "added material"
        );
        self.materials.push(material.clone());
        Ok(material)
    }

    /// Mark an urgent worklist entry as attended, removing it.
    ///
    /// This is a one-way terminal transition; attending the same id a
    /// second time fails with [`StoreError::NotFound`] and leaves the
    /// worklist unchanged.
    pub fn attend_hive(&mut self, id: EntryId) -> StoreResult<UrgentHive> {
        let position = self
            .urgent_hives
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("urgent hive {id}")))?;
        let entry = self.urgent_hives.remove(position);
        tracing::info!(apiary = %entry.apiary_id, status = %entry.status, "attended urgent hives");
        Ok(entry)
    }

    /// Overwrite the last-visit date of an apiary
    pub fn update_last_visit(&mut self, apiary_id: &ApiaryId, date: NaiveDate) -> StoreResult<()> {
        let apiary = self.apiary_mut(apiary_id)?;
        apiary.last_visit = date;
        Ok(())
    }

    /// Record the weather observed at an apiary. Values are free text
    /// and are stored verbatim.
    pub fn update_weather(
        &mut self,
        apiary_id: &ApiaryId,
        temperature: impl Into<String>,
        condition: impl Into<String>,
        humidity: impl Into<String>,
    ) -> StoreResult<()> {
        let weather = WeatherInfo::new(temperature, condition, humidity);
        let apiary = self.apiary_mut(apiary_id)?;
        apiary.weather = weather;
        Ok(())
    }

    /// Clear all collections. Test lifecycle only; production callers
    /// keep one store for the process lifetime.
    pub fn reset(&mut self) {
        self.apiaries.clear();
        self.urgent_hives.clear();
        self.materials.clear();
        self.visits.clear();
        self.next_entry_id = 0;
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// All apiaries in display (insertion) order
    pub fn apiaries(&self) -> &[Apiary] {
        &self.apiaries
    }

    /// The urgent worklist in append order
    pub fn urgent_hives(&self) -> &[UrgentHive] {
        &self.urgent_hives
    }

    /// All material records in append order
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// The visit log in append order
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Look up a single apiary by id
    pub fn apiary(&self, id: &ApiaryId) -> Option<&Apiary> {
        self.apiaries.iter().find(|a| &a.id == id)
    }

    /// Display label for an apiary, e.g. `Apiário Rosmaninho (API-001)`.
    /// Resolved at read time so renames are always reflected.
    pub fn apiary_label(&self, id: &ApiaryId) -> Option<String> {
        self.apiary(id).map(Apiary::label)
    }

    /// Number of registered apiaries
    pub fn total_apiaries(&self) -> usize {
        self.apiaries.len()
    }

    /// Total hives across all apiaries and all four health states
    pub fn total_hives(&self) -> u64 {
        self.apiaries.iter().map(|a| a.stats.total()).sum()
    }

    /// Chart feed: exactly four entries, always in the order
    /// `Boas, Fortes, Fracas, Mortas`, each summed across all apiaries.
    /// The order drives color mapping and legend order downstream.
    pub fn hives_data(&self) -> Vec<StatusCount> {
        HiveStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: status.chart_label().to_string(),
                count: self
                    .apiaries
                    .iter()
                    .map(|a| a.stats.count(*status) as u64)
                    .sum(),
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn apiary_mut(&mut self, id: &ApiaryId) -> StoreResult<&mut Apiary> {
        self.apiaries
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("apiary {id}")))
    }

    fn next_entry_id(&mut self) -> EntryId {
        self.next_entry_id += 1;
        EntryId(self.next_entry_id)
    }
}

/// Current date in UTC, the timestamp recorded on visits
fn today() -> NaiveDate {
    Utc::now().date_naive()
}
