//! Planning logic: reference tables, resource estimates and market series.

pub mod app_state;
pub mod catalog;
pub mod cycle;
pub mod entities;
pub mod market;
pub mod resources;

pub use app_state::{AppState, PersistedState, PlanExport};
pub use catalog::{CropResourceTable, MarketModel, ReferenceData, SeasonCatalog};
pub use cycle::{stage_for_day, GrowingConditions, GrowthStage, QualityGrade, GROWTH_STAGES};
pub use entities::{
    Crop, CropName, CropResourceProfile, Difficulty, DifficultyFilter, FieldParameters,
    IrrigationType, MarketProfile, PricePoint, ResourceLine, ResourceTotals, Season, Sentiment,
    SoilType, Trend, Volatility,
};
pub use market::{
    price_changes, project_prices, MarketSnapshot, RandomSource, SeededRandom, TimeRange,
};
pub use resources::{
    compute_resources, filter_and_sort, summarize_resources, totals, ResourceColumn,
    ResourceSort, ResourceSummary, SortDirection,
};
