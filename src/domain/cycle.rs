use serde::{Deserialize, Serialize};

/// Weather condition that blocks planting.
const BLOCKING_WEATHER: &str = "Windy";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityGrade {
    pub const ALL: [QualityGrade; 4] = [
        QualityGrade::Excellent,
        QualityGrade::Good,
        QualityGrade::Fair,
        QualityGrade::Poor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QualityGrade::Excellent => "Excellent",
            QualityGrade::Good => "Good",
            QualityGrade::Fair => "Fair",
            QualityGrade::Poor => "Poor",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|grade| grade.label().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowingConditions {
    pub seed: Option<QualityGrade>,
    pub soil: Option<QualityGrade>,
    /// Main condition reported by the weather lookup, e.g. "Clear" or "Rain".
    pub weather: Option<String>,
}

impl GrowingConditions {
    /// Every input must be known; neither grade may be poor and it must not be windy.
    pub fn is_optimal(&self) -> bool {
        let seed_ok = matches!(self.seed, Some(grade) if grade != QualityGrade::Poor);
        let soil_ok = matches!(self.soil, Some(grade) if grade != QualityGrade::Poor);
        let weather_ok = self
            .weather
            .as_deref()
            .is_some_and(|condition| !condition.eq_ignore_ascii_case(BLOCKING_WEATHER));
        seed_ok && soil_ok && weather_ok
    }

    pub fn blockers(&self) -> Vec<&'static str> {
        let mut reasons = Vec::new();
        match self.seed {
            None => reasons.push("Seed quality not assessed"),
            Some(QualityGrade::Poor) => reasons.push("Seed quality is poor"),
            Some(_) => {}
        }
        match self.soil {
            None => reasons.push("Soil quality not assessed"),
            Some(QualityGrade::Poor) => reasons.push("Soil quality is poor"),
            Some(_) => {}
        }
        match self.weather.as_deref() {
            None => reasons.push("Weather not checked"),
            Some(condition) if condition.eq_ignore_ascii_case(BLOCKING_WEATHER) => {
                reasons.push("Too windy to plant")
            }
            Some(_) => {}
        }
        reasons
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthStage {
    pub name: &'static str,
    pub first_day: u32,
    /// `None` for the open-ended final stage.
    pub last_day: Option<u32>,
}

impl GrowthStage {
    pub fn day_range(&self) -> String {
        match self.last_day {
            Some(last) => format!("Day {}-{}", self.first_day, last),
            None => format!("Day {}+", self.first_day),
        }
    }
}

pub static GROWTH_STAGES: [GrowthStage; 5] = [
    GrowthStage {
        name: "Seed Germination",
        first_day: 1,
        last_day: Some(7),
    },
    GrowthStage {
        name: "Seedling Stage",
        first_day: 8,
        last_day: Some(21),
    },
    GrowthStage {
        name: "Vegetative Stage",
        first_day: 22,
        last_day: Some(50),
    },
    GrowthStage {
        name: "Flowering Stage",
        first_day: 51,
        last_day: Some(80),
    },
    GrowthStage {
        name: "Harvest Stage",
        first_day: 81,
        last_day: None,
    },
];

/// Stage a crop is in on `day` of its cycle; day 0 precedes germination.
pub fn stage_for_day(day: u32) -> Option<&'static GrowthStage> {
    GROWTH_STAGES.iter().find(|stage| {
        day >= stage.first_day && stage.last_day.map_or(true, |last| day <= last)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(seed: QualityGrade, soil: QualityGrade, weather: &str) -> GrowingConditions {
        GrowingConditions {
            seed: Some(seed),
            soil: Some(soil),
            weather: Some(weather.to_string()),
        }
    }

    #[test]
    fn good_inputs_are_optimal() {
        let c = conditions(QualityGrade::Good, QualityGrade::Fair, "Clear");
        assert!(c.is_optimal());
        assert!(c.blockers().is_empty());
    }

    #[test]
    fn poor_grade_or_wind_blocks() {
        assert!(!conditions(QualityGrade::Poor, QualityGrade::Good, "Clear").is_optimal());
        assert!(!conditions(QualityGrade::Good, QualityGrade::Poor, "Clear").is_optimal());
        let windy = conditions(QualityGrade::Excellent, QualityGrade::Excellent, "windy");
        assert!(!windy.is_optimal());
        assert_eq!(windy.blockers(), ["Too windy to plant"]);
    }

    #[test]
    fn unknown_inputs_are_not_optimal() {
        let c = GrowingConditions::default();
        assert!(!c.is_optimal());
        assert_eq!(c.blockers().len(), 3);
    }

    #[test]
    fn grade_parsing_ignores_case() {
        assert_eq!(QualityGrade::parse(" excellent "), Some(QualityGrade::Excellent));
        assert_eq!(QualityGrade::parse("Great"), None);
    }

    #[test]
    fn stages_cover_every_day_after_sowing() {
        assert!(stage_for_day(0).is_none());
        assert_eq!(stage_for_day(7).unwrap().name, "Seed Germination");
        assert_eq!(stage_for_day(8).unwrap().name, "Seedling Stage");
        assert_eq!(stage_for_day(50).unwrap().name, "Vegetative Stage");
        assert_eq!(stage_for_day(80).unwrap().name, "Flowering Stage");
        assert_eq!(stage_for_day(400).unwrap().day_range(), "Day 81+");
    }
}
