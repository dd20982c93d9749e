//! Built-in reference tables: seasons, per-acre crop needs and market profiles.
//!
//! All tables are immutable once built. Lookups return `Option` and callers
//! pick their own fallback.

use std::collections::HashMap;

use super::entities::{
    Crop, CropResourceProfile, Difficulty, DifficultyFilter, MarketProfile, Season, Sentiment,
    Trend, Volatility,
};

#[derive(Clone, Debug, PartialEq)]
pub struct SeasonCatalog {
    seasons: Vec<Season>,
}

impl SeasonCatalog {
    pub fn new(seasons: Vec<Season>) -> Self {
        Self { seasons }
    }

    pub fn builtin() -> Self {
        use Difficulty::{Easy, Hard, Medium};

        Self::new(vec![
            season(
                "Spring",
                "A time of new beginnings and growth.",
                &[
                    ("Lettuce", Easy),
                    ("Peas", Medium),
                    ("Carrots", Easy),
                    ("Spinach", Easy),
                    ("Radishes", Easy),
                    ("Asparagus", Hard),
                ],
            ),
            season(
                "Summer",
                "The peak growing season with long, warm days.",
                &[
                    ("Tomatoes", Medium),
                    ("Peppers", Medium),
                    ("Cucumbers", Easy),
                    ("Corn", Hard),
                    ("Zucchini", Easy),
                    ("Eggplant", Medium),
                ],
            ),
            season(
                "Autumn",
                "A season of harvest and preparation for winter.",
                &[
                    ("Pumpkins", Medium),
                    ("Squash", Easy),
                    ("Apples", Hard),
                    ("Broccoli", Medium),
                    ("Brussels Sprouts", Hard),
                    ("Cauliflower", Medium),
                ],
            ),
            season(
                "Winter",
                "A time for hardy crops and indoor gardening.",
                &[
                    ("Kale", Easy),
                    ("Winter Squash", Medium),
                    ("Onions", Easy),
                    ("Garlic", Easy),
                    ("Leeks", Medium),
                    ("Microgreens", Easy),
                ],
            ),
        ])
    }

    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    pub fn season(&self, name: &str) -> Option<&Season> {
        self.seasons.iter().find(|season| season.name == name)
    }

    /// Crops of `season` that pass `filter`, in catalog order.
    pub fn crops_for(&self, season: &str, filter: DifficultyFilter) -> Vec<&Crop> {
        self.season(season)
            .map(|season| {
                season
                    .crops
                    .iter()
                    .filter(|crop| filter.matches(crop.difficulty))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn find_crop(&self, name: &str) -> Option<&Crop> {
        self.seasons
            .iter()
            .flat_map(|season| season.crops.iter())
            .find(|crop| crop.name == name)
    }
}

fn season(name: &str, description: &str, crops: &[(&str, Difficulty)]) -> Season {
    Season {
        name: name.to_string(),
        description: description.to_string(),
        crops: crops
            .iter()
            .map(|(crop, difficulty)| Crop {
                name: crop.to_string(),
                url: format!("/crops/{}", slugify(crop)),
                difficulty: *difficulty,
            })
            .collect(),
    }
}

fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CropResourceTable {
    profiles: HashMap<String, CropResourceProfile>,
}

impl CropResourceTable {
    pub fn new(profiles: HashMap<String, CropResourceProfile>) -> Self {
        Self { profiles }
    }

    pub fn builtin() -> Self {
        let rows = [
            ("Tomatoes", 1000.0, 50.0, 1000.0),
            ("Lettuce", 800.0, 30.0, 800.0),
            ("Carrots", 700.0, 40.0, 900.0),
            ("Peppers", 900.0, 45.0, 1100.0),
            ("Cucumbers", 850.0, 35.0, 950.0),
            ("Corn", 1200.0, 60.0, 1200.0),
        ];

        let profiles = rows
            .into_iter()
            .map(|(name, water, fertilizer, cost)| {
                (
                    name.to_string(),
                    CropResourceProfile {
                        water_liters_per_acre: water,
                        fertilizer_kg_per_acre: fertilizer,
                        cost_per_acre: cost,
                    },
                )
            })
            .collect();

        Self::new(profiles)
    }

    pub fn profile(&self, crop: &str) -> Option<&CropResourceProfile> {
        self.profiles.get(crop)
    }

    /// Unknown crops contribute nothing rather than failing the whole plan.
    pub fn profile_or_zero(&self, crop: &str) -> CropResourceProfile {
        self.profile(crop).copied().unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarketModel {
    profiles: HashMap<String, MarketProfile>,
}

impl MarketModel {
    /// Seed price used for series generation when a crop has no profile.
    pub const FALLBACK_BASE_PRICE: f64 = 1.0;

    pub fn new(profiles: HashMap<String, MarketProfile>) -> Self {
        Self { profiles }
    }

    pub fn builtin() -> Self {
        use Sentiment::{Negative, Neutral, Positive};
        use Trend::{Down, Stable, Up};
        use Volatility::{High, Low, Medium};

        let rows = [
            ("Tomatoes", 2.5, Up, Positive, Medium),
            ("Lettuce", 1.8, Down, Negative, Low),
            ("Carrots", 1.2, Stable, Neutral, Low),
            ("Peppers", 3.0, Up, Positive, High),
            ("Cucumbers", 1.5, Down, Neutral, Medium),
            ("Corn", 0.8, Stable, Positive, Low),
        ];

        let profiles = rows
            .into_iter()
            .map(|(name, price, trend, forecast, volatility)| {
                (
                    name.to_string(),
                    MarketProfile {
                        current_price_per_kg: price,
                        trend,
                        forecast,
                        volatility,
                    },
                )
            })
            .collect();

        Self::new(profiles)
    }

    pub fn profile(&self, crop: &str) -> Option<&MarketProfile> {
        self.profiles.get(crop)
    }

    pub fn base_price(&self, crop: &str) -> f64 {
        self.profile(crop)
            .map(|p| p.current_price_per_kg)
            .unwrap_or(Self::FALLBACK_BASE_PRICE)
    }

    pub fn trend(&self, crop: &str) -> Trend {
        self.profile(crop).map(|p| p.trend).unwrap_or_default()
    }

    pub fn volatility(&self, crop: &str) -> Volatility {
        self.profile(crop).map(|p| p.volatility).unwrap_or_default()
    }
}

/// Every reference table the planner reads, loaded once and shared.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceData {
    pub seasons: SeasonCatalog,
    pub resources: CropResourceTable,
    pub market: MarketModel,
}

impl ReferenceData {
    pub fn builtin() -> Self {
        Self {
            seasons: SeasonCatalog::builtin(),
            resources: CropResourceTable::builtin(),
            market: MarketModel::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_four_seasons_of_six_crops() {
        let catalog = SeasonCatalog::builtin();
        let names: Vec<_> = catalog.seasons().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Spring", "Summer", "Autumn", "Winter"]);
        assert!(catalog.seasons().iter().all(|s| s.crops.len() == 6));
    }

    #[test]
    fn crop_urls_are_slugged() {
        let catalog = SeasonCatalog::builtin();
        let sprouts = catalog.find_crop("Brussels Sprouts").unwrap();
        assert_eq!(sprouts.url, "/crops/brussels-sprouts");
        assert_eq!(sprouts.difficulty, Difficulty::Hard);
    }

    #[test]
    fn difficulty_filter_keeps_catalog_order() {
        let catalog = SeasonCatalog::builtin();
        let easy: Vec<_> = catalog
            .crops_for("Spring", DifficultyFilter::Only(Difficulty::Easy))
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(easy, ["Lettuce", "Carrots", "Spinach", "Radishes"]);
        assert_eq!(catalog.crops_for("Spring", DifficultyFilter::All).len(), 6);
    }

    #[test]
    fn unknown_season_yields_no_crops() {
        let catalog = SeasonCatalog::builtin();
        assert!(catalog.crops_for("Monsoon", DifficultyFilter::All).is_empty());
    }

    #[test]
    fn missing_resource_profile_is_zero() {
        let table = CropResourceTable::builtin();
        assert_eq!(table.profile_or_zero("Kale"), CropResourceProfile::default());
        assert_eq!(table.profile_or_zero("Corn").water_liters_per_acre, 1200.0);
    }

    #[test]
    fn market_fallbacks_for_unknown_crop() {
        let model = MarketModel::builtin();
        assert_eq!(model.base_price("Kale"), 1.0);
        assert_eq!(model.trend("Kale"), Trend::Stable);
        assert_eq!(model.volatility("Kale"), Volatility::Low);
        assert_eq!(model.base_price("Peppers"), 3.0);
    }
}
