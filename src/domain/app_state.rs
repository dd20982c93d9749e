use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::catalog::ReferenceData;
use super::cycle::GrowingConditions;
use super::entities::{
    Crop, CropName, DifficultyFilter, FieldParameters, IrrigationType, SoilType,
};
use super::market::TimeRange;

pub const DEFAULT_SEASON: &str = "Spring";

/// Everything the user has chosen in the current session.
#[derive(Clone, Debug)]
pub struct AppState {
    pub reference: Arc<ReferenceData>,
    pub season: String,
    pub selected_crops: Vec<CropName>,
    pub difficulty: DifficultyFilter,
    pub field: FieldParameters,
    /// Crop shown in the market view; falls back to the first selection.
    pub market_crop: Option<CropName>,
    pub time_range: TimeRange,
    pub show_forecast: bool,
    pub conditions: GrowingConditions,
    /// Set once by [`AppState::start_cycle`]; never cleared by later condition changes.
    pub cycle_started: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(ReferenceData::builtin()))
    }
}

impl AppState {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self {
            reference,
            season: DEFAULT_SEASON.to_string(),
            selected_crops: Vec::new(),
            difficulty: DifficultyFilter::All,
            field: FieldParameters::default(),
            market_crop: None,
            time_range: TimeRange::default(),
            show_forecast: false,
            conditions: GrowingConditions::default(),
            cycle_started: false,
        }
    }

    /// Switching season starts a fresh selection.
    pub fn select_season(&mut self, season: &str) {
        if self.season == season {
            return;
        }
        self.season = season.to_string();
        self.selected_crops.clear();
        self.market_crop = None;
        self.difficulty = DifficultyFilter::All;
    }

    pub fn toggle_crop(&mut self, crop: &str) {
        if self.is_selected(crop) {
            self.remove_crop(crop);
        } else {
            self.selected_crops.push(crop.to_string());
        }
    }

    pub fn remove_crop(&mut self, crop: &str) {
        self.selected_crops.retain(|c| c != crop);
        if self.market_crop.as_deref() == Some(crop) {
            self.market_crop = None;
        }
    }

    pub fn is_selected(&self, crop: &str) -> bool {
        self.selected_crops.iter().any(|c| c == crop)
    }

    pub fn visible_crops(&self) -> Vec<Crop> {
        self.reference
            .seasons
            .crops_for(&self.season, self.difficulty)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn active_market_crop(&self) -> Option<&str> {
        self.market_crop
            .as_deref()
            .or_else(|| self.selected_crops.first().map(String::as_str))
    }

    /// Starts the crop cycle only under optimal conditions; returns whether it is running.
    pub fn start_cycle(&mut self) -> bool {
        if !self.cycle_started && self.conditions.is_optimal() {
            self.cycle_started = true;
        }
        self.cycle_started
    }

    pub fn plan_export(&self) -> PlanExport {
        PlanExport {
            season: self.season.clone(),
            crops: self.selected_crops.clone(),
            field_size: self.field.storable().field_size_acres,
            soil_type: self.field.soil_type,
            irrigation_type: self.field.irrigation_type,
        }
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        let known_season = self.reference.seasons.season(&persisted.season).is_some();
        if known_season {
            self.season = persisted.season;
            self.selected_crops = persisted.selected_crops;
        }
        self.field = persisted.field;
        self.time_range = TimeRange::from_months(persisted.time_range_months).unwrap_or_default();
        self.show_forecast = persisted.show_forecast;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            season: self.season.clone(),
            selected_crops: self.selected_crops.clone(),
            field: self.field.storable(),
            time_range_months: self.time_range.months(),
            show_forecast: self.show_forecast,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub season: String,
    #[serde(default)]
    pub selected_crops: Vec<CropName>,
    #[serde(default)]
    pub field: FieldParameters,
    #[serde(default = "default_time_range_months")]
    pub time_range_months: usize,
    #[serde(default)]
    pub show_forecast: bool,
}

fn default_time_range_months() -> usize {
    TimeRange::default().months()
}

/// Shareable plan document written by "Export Plan".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanExport {
    pub season: String,
    pub crops: Vec<CropName>,
    pub field_size: f64,
    pub soil_type: SoilType,
    pub irrigation_type: IrrigationType,
}
