use std::fmt;

use serde::{Deserialize, Serialize};

/// Crop names are the join key across every reference table.
pub type CropName = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    pub fn matches(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(level) => *level == difficulty,
        }
    }

    /// Inverse of [`DifficultyFilter::key`]; anything unrecognised means "all".
    pub fn from_key(key: &str) -> Self {
        Difficulty::parse(key)
            .map(DifficultyFilter::Only)
            .unwrap_or(DifficultyFilter::All)
    }

    pub fn key(&self) -> &'static str {
        match self {
            DifficultyFilter::All => "all",
            DifficultyFilter::Only(level) => level.label(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crop {
    pub name: CropName,
    pub url: String,
    pub difficulty: Difficulty,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub name: String,
    pub description: String,
    pub crops: Vec<Crop>,
}

/// Baseline per-acre needs for a crop before field adjustments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CropResourceProfile {
    pub water_liters_per_acre: f64,
    pub fertilizer_kg_per_acre: f64,
    pub cost_per_acre: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Sandy,
    Clay,
    #[default]
    Loamy,
}

impl SoilType {
    pub const ALL: [SoilType; 3] = [SoilType::Sandy, SoilType::Clay, SoilType::Loamy];

    pub fn factor(&self) -> f64 {
        match self {
            SoilType::Clay => 1.2,
            SoilType::Sandy => 0.8,
            SoilType::Loamy => 1.0,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SoilType::Sandy => "sandy",
            SoilType::Clay => "clay",
            SoilType::Loamy => "loamy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Sandy => "Sandy",
            SoilType::Clay => "Clay",
            SoilType::Loamy => "Loamy",
        }
    }

    /// Unrecognised input falls back to loamy, whose factor is neutral.
    pub fn parse_lossy(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|soil| soil.key().eq_ignore_ascii_case(value.trim()))
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationType {
    #[default]
    Drip,
    Sprinkler,
    Traditional,
}

impl IrrigationType {
    pub const ALL: [IrrigationType; 3] = [
        IrrigationType::Drip,
        IrrigationType::Sprinkler,
        IrrigationType::Traditional,
    ];

    pub fn factor(&self) -> f64 {
        match self {
            IrrigationType::Drip => 0.9,
            IrrigationType::Sprinkler => 1.1,
            IrrigationType::Traditional => 1.0,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            IrrigationType::Drip => "drip",
            IrrigationType::Sprinkler => "sprinkler",
            IrrigationType::Traditional => "traditional",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IrrigationType::Drip => "Drip",
            IrrigationType::Sprinkler => "Sprinkler",
            IrrigationType::Traditional => "Traditional",
        }
    }

    /// Unrecognised input falls back to traditional, whose factor is neutral.
    pub fn parse_lossy(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(value.trim()))
            .unwrap_or(IrrigationType::Traditional)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldParameters {
    pub field_size_acres: f64,
    pub soil_type: SoilType,
    pub irrigation_type: IrrigationType,
}

impl Default for FieldParameters {
    fn default() -> Self {
        Self {
            field_size_acres: Self::DEFAULT_SIZE_ACRES,
            soil_type: SoilType::Loamy,
            irrigation_type: IrrigationType::Drip,
        }
    }
}

impl FieldParameters {
    pub const DEFAULT_SIZE_ACRES: f64 = 1.0;

    /// Accepts user input only when it is a finite, non-negative acreage.
    pub fn parse_size(raw: &str) -> Option<f64> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|acres| acres.is_finite() && *acres >= 0.0)
    }

    /// JSON has no representation for infinities or NaN.
    pub fn storable(self) -> Self {
        if self.field_size_acres.is_finite() {
            self
        } else {
            Self {
                field_size_acres: Self::DEFAULT_SIZE_ACRES,
                ..self
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl Trend {
    pub fn factor(&self) -> f64 {
        match self {
            Trend::Up => 1.02,
            Trend::Down => 0.98,
            Trend::Stable => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trend::Up => "Up",
            Trend::Down => "Down",
            Trend::Stable => "Stable",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Volatility {
    #[default]
    Low,
    Medium,
    High,
}

impl Volatility {
    pub fn factor(&self) -> f64 {
        match self {
            Volatility::High => 0.10,
            Volatility::Medium => 0.05,
            Volatility::Low => 0.02,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketProfile {
    pub current_price_per_kg: f64,
    pub trend: Trend,
    pub forecast: Sentiment,
    pub volatility: Volatility,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub period_label: String,
    pub price: f64,
    /// False for synthetic history, true for projected periods.
    #[serde(default)]
    pub projected: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceLine {
    pub crop: CropName,
    pub water_liters: i64,
    pub fertilizer_kg: i64,
    pub cost: i64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTotals {
    pub water_liters: i64,
    pub fertilizer_kg: i64,
    pub cost: i64,
}

impl fmt::Display for ResourceTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} L water, {} kg fertilizer, ${} cost",
            self.water_liters, self.fertilizer_kg, self.cost
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_size_input_must_be_finite_and_non_negative() {
        assert_eq!(FieldParameters::parse_size(" 2.5 "), Some(2.5));
        assert_eq!(FieldParameters::parse_size("0"), Some(0.0));
        assert_eq!(FieldParameters::parse_size("-1"), None);
        assert_eq!(FieldParameters::parse_size("inf"), None);
        assert_eq!(FieldParameters::parse_size("NaN"), None);
        assert_eq!(FieldParameters::parse_size("2."), Some(2.0));
        assert_eq!(FieldParameters::parse_size("acres"), None);
    }

    #[test]
    fn storable_replaces_only_non_finite_size() {
        let field = FieldParameters {
            field_size_acres: f64::INFINITY,
            soil_type: SoilType::Sandy,
            irrigation_type: IrrigationType::Sprinkler,
        };
        let stored = field.storable();
        assert_eq!(stored.field_size_acres, FieldParameters::DEFAULT_SIZE_ACRES);
        assert_eq!(stored.soil_type, SoilType::Sandy);

        let finite = FieldParameters {
            field_size_acres: 4.0,
            ..field
        };
        assert_eq!(finite.storable(), finite);
    }
}
