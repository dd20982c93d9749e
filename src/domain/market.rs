//! Illustrative price series for the market view.
//!
//! History and forecast are synthetic: a fixed monthly calendar with noise
//! drawn from a [`RandomSource`]. Tests inject fixed sequences; the app keeps
//! a random seed per view so the series stays put across re-renders.

use rand::{rngs::SmallRng, Rng, SeedableRng};
use time::Month;

use super::catalog::MarketModel;
use super::entities::{MarketProfile, PricePoint, Sentiment, Trend};

pub const HISTORY_MONTHS: usize = 12;
pub const FORECAST_MONTHS: usize = 6;

const HISTORY_ANCHOR: (i32, Month) = (2023, Month::January);
const FORECAST_ANCHOR: (i32, Month) = (2024, Month::January);
const HISTORY_SPREAD: f64 = 0.2;

/// Uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next(&mut self) -> f64;
}

pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeRange {
    Three,
    Six,
    #[default]
    Twelve,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Three, TimeRange::Six, TimeRange::Twelve];

    pub fn months(&self) -> usize {
        match self {
            TimeRange::Three => 3,
            TimeRange::Six => 6,
            TimeRange::Twelve => 12,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Three => "3 months",
            TimeRange::Six => "6 months",
            TimeRange::Twelve => "12 months",
        }
    }

    pub fn from_months(months: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.months() == months)
    }
}

pub fn historical_series(
    model: &MarketModel,
    crop: &str,
    rng: &mut dyn RandomSource,
) -> Vec<PricePoint> {
    let base = model.base_price(crop);
    month_labels(HISTORY_ANCHOR, HISTORY_MONTHS)
        .into_iter()
        .map(|period_label| PricePoint {
            period_label,
            price: round_cents(base * (1.0 + (rng.next() - 0.5) * HISTORY_SPREAD)),
            projected: false,
        })
        .collect()
}

/// Point `i` (1-based) compounds the trend `i` times from `last_price`.
pub fn forecast_series(
    model: &MarketModel,
    crop: &str,
    last_price: f64,
    rng: &mut dyn RandomSource,
) -> Vec<PricePoint> {
    let trend = model.trend(crop).factor();
    let volatility = model.volatility(crop).factor();

    month_labels(FORECAST_ANCHOR, FORECAST_MONTHS)
        .into_iter()
        .zip(1..)
        .map(|(period_label, step)| PricePoint {
            period_label,
            price: round_cents(
                last_price * trend.powi(step) * (1.0 + (rng.next() - 0.5) * volatility),
            ),
            projected: true,
        })
        .collect()
}

/// Trailing `history_months` of the synthetic history, optionally followed by
/// the full forecast. The forecast always continues from the last point of the
/// complete history, regardless of the window.
pub fn project_prices(
    model: &MarketModel,
    crop: &str,
    history_months: usize,
    include_forecast: bool,
    rng: &mut dyn RandomSource,
) -> Vec<PricePoint> {
    let history = historical_series(model, crop, rng);
    let last_price = history
        .last()
        .map(|point| point.price)
        .unwrap_or_else(|| model.base_price(crop));

    let skip = history.len().saturating_sub(history_months);
    let mut series: Vec<PricePoint> = history.into_iter().skip(skip).collect();

    if include_forecast {
        series.extend(forecast_series(model, crop, last_price, rng));
    }
    series
}

/// Percentage change against the previous point; `None` where undefined.
pub fn price_changes(points: &[PricePoint]) -> Vec<Option<f64>> {
    let mut changes = Vec::with_capacity(points.len());
    let mut previous: Option<f64> = None;
    for point in points {
        let change = previous
            .filter(|prev| *prev != 0.0)
            .map(|prev| (point.price - prev) / prev * 100.0);
        changes.push(change);
        previous = Some(point.price);
    }
    changes
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarketSnapshot {
    pub crop: String,
    pub current_price_per_kg: f64,
    pub trend: Trend,
    pub forecast: Sentiment,
}

impl MarketSnapshot {
    /// Unknown crops display a zero price with stable/neutral outlook.
    pub fn for_crop(model: &MarketModel, crop: &str) -> Self {
        let profile: Option<&MarketProfile> = model.profile(crop);
        Self {
            crop: crop.to_string(),
            current_price_per_kg: profile.map(|p| p.current_price_per_kg).unwrap_or(0.0),
            trend: profile.map(|p| p.trend).unwrap_or_default(),
            forecast: profile.map(|p| p.forecast).unwrap_or_default(),
        }
    }
}

fn month_labels((year, month): (i32, Month), count: usize) -> Vec<String> {
    let mut labels = Vec::with_capacity(count);
    let (mut year, mut month) = (year, month);
    for _ in 0..count {
        labels.push(format!("{} {year}", short_month(month)));
        if month == Month::December {
            year += 1;
        }
        month = month.next();
    }
    labels
}

fn short_month(month: Month) -> String {
    month.to_string().chars().take(3).collect()
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed cycle of samples.
    struct FixedRandom {
        values: Vec<f64>,
        cursor: usize,
    }

    impl FixedRandom {
        fn constant(value: f64) -> Self {
            Self::cycle(vec![value])
        }

        fn cycle(values: Vec<f64>) -> Self {
            Self { values, cursor: 0 }
        }
    }

    impl RandomSource for FixedRandom {
        fn next(&mut self) -> f64 {
            let value = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            value
        }
    }

    #[test]
    fn full_history_without_forecast_has_twelve_points() {
        let model = MarketModel::builtin();
        let mut rng = SeededRandom::from_seed(7);
        let series = project_prices(&model, "Tomatoes", 12, false, &mut rng);
        assert_eq!(series.len(), 12);
        assert_eq!(series[0].period_label, "Jan 2023");
        assert_eq!(series[11].period_label, "Dec 2023");
        assert!(series.iter().all(|p| !p.projected));
    }

    #[test]
    fn windowed_history_keeps_latest_points_before_forecast() {
        let model = MarketModel::builtin();
        let history = historical_series(&model, "Peppers", &mut SeededRandom::from_seed(42));
        let series = project_prices(&model, "Peppers", 3, true, &mut SeededRandom::from_seed(42));

        assert_eq!(series.len(), 9);
        assert_eq!(&series[..3], &history[9..]);
        let labels: Vec<_> = series[3..].iter().map(|p| p.period_label.as_str()).collect();
        assert_eq!(
            labels,
            ["Jan 2024", "Feb 2024", "Mar 2024", "Apr 2024", "May 2024", "Jun 2024"]
        );
        assert!(series[3..].iter().all(|p| p.projected));
    }

    #[test]
    fn midpoint_noise_reproduces_base_price() {
        let model = MarketModel::builtin();
        let history = historical_series(&model, "Carrots", &mut FixedRandom::constant(0.5));
        assert!(history.iter().all(|p| p.price == 1.2));
    }

    #[test]
    fn history_stays_within_ten_percent_band() {
        let model = MarketModel::builtin();
        let mut rng = FixedRandom::cycle(vec![0.0, 0.999_999]);
        let history = historical_series(&model, "Tomatoes", &mut rng);
        assert_eq!(history[0].price, 2.25);
        assert_eq!(history[1].price, 2.75);
    }

    #[test]
    fn forecast_compounds_trend_from_last_price() {
        let model = MarketModel::builtin();
        let forecast = forecast_series(&model, "Tomatoes", 2.0, &mut FixedRandom::constant(0.5));
        let expected: Vec<f64> = (1..=6)
            .map(|i| round_cents(2.0 * 1.02_f64.powi(i)))
            .collect();
        let prices: Vec<f64> = forecast.iter().map(|p| p.price).collect();
        assert_eq!(prices, expected);
    }

    #[test]
    fn falling_trend_declines() {
        let model = MarketModel::builtin();
        let forecast = forecast_series(&model, "Lettuce", 1.8, &mut FixedRandom::constant(0.5));
        assert!(forecast.windows(2).all(|w| w[1].price <= w[0].price));
        assert_eq!(forecast[0].price, 1.76);
    }

    #[test]
    fn unknown_crop_uses_unit_base_price() {
        let model = MarketModel::builtin();
        let series = project_prices(&model, "Kale", 6, true, &mut FixedRandom::constant(0.5));
        assert_eq!(series.len(), 12);
        assert!(series.iter().all(|p| p.price == 1.0));
    }

    #[test]
    fn oversized_window_is_clamped() {
        let model = MarketModel::builtin();
        let series = project_prices(&model, "Corn", 24, false, &mut SeededRandom::from_seed(1));
        assert_eq!(series.len(), HISTORY_MONTHS);
    }

    #[test]
    fn changes_skip_first_point_and_zero_prices() {
        let points: Vec<PricePoint> = [2.0, 2.2, 0.0, 1.0]
            .into_iter()
            .map(|price| PricePoint {
                period_label: String::new(),
                price,
                projected: false,
            })
            .collect();
        let changes = price_changes(&points);
        assert_eq!(changes[0], None);
        assert!((changes[1].unwrap() - 10.0).abs() < 1e-9);
        assert!((changes[2].unwrap() + 100.0).abs() < 1e-9);
        assert_eq!(changes[3], None);
    }

    #[test]
    fn snapshot_defaults_for_unknown_crop() {
        let model = MarketModel::builtin();
        let snapshot = MarketSnapshot::for_crop(&model, "Garlic");
        assert_eq!(snapshot.current_price_per_kg, 0.0);
        assert_eq!(snapshot.trend, Trend::Stable);
        assert_eq!(snapshot.forecast, Sentiment::Neutral);
    }

    #[test]
    fn time_range_round_trips_months() {
        for range in TimeRange::ALL {
            assert_eq!(TimeRange::from_months(range.months()), Some(range));
        }
        assert_eq!(TimeRange::from_months(9), None);
    }
}
