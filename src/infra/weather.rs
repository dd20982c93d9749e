//! Current-conditions lookup against the OpenWeather API.
//!
//! One request per call: no retries and no caching. Any failure collapses into
//! a [`WeatherError`] that the UI reports as a single failure message.

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use dioxus_logger::tracing::{info, warn};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/";
const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";
const USER_AGENT: &str = concat!("crop-planner/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("latitude and longitude are required")]
    MissingCoordinates,
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),
    #[error("OPENWEATHER_API_KEY is not set")]
    MissingApiKey,
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response: {0}")]
    Payload(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Parses user-entered text; both fields are required.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, WeatherError> {
        let (latitude, longitude) = (latitude.trim(), longitude.trim());
        if latitude.is_empty() || longitude.is_empty() {
            return Err(WeatherError::MissingCoordinates);
        }

        let latitude: f64 = latitude
            .parse()
            .map_err(|_| WeatherError::InvalidCoordinates(format!("latitude '{latitude}'")))?;
        let longitude: f64 = longitude
            .parse()
            .map_err(|_| WeatherError::InvalidCoordinates(format!("longitude '{longitude}'")))?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(WeatherError::InvalidCoordinates(format!(
                "latitude {latitude} outside -90..90"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates(format!(
                "longitude {longitude} outside -180..180"
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WeatherInfo {
    /// Condition group such as "Clear", "Rain" or "Windy".
    pub main: String,
    pub description: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_ms: f64,
    pub observed_at: Option<OffsetDateTime>,
}

impl WeatherInfo {
    pub fn observed_label(&self) -> Option<String> {
        self.observed_at.and_then(|at| at.format(&Rfc3339).ok())
    }
}

#[derive(Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl WeatherClient {
    pub fn from_env() -> Result<Self, WeatherError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(WeatherError::MissingApiKey)?;
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(base: &str, api_key: impl Into<String>) -> Result<Self, WeatherError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    pub async fn current(&self, at: Coordinates) -> Result<WeatherInfo, WeatherError> {
        let url = self.current_url(at)?;
        info!(
            "[weather] Requesting conditions for {:.4},{:.4}",
            at.latitude, at.longitude
        );

        let result = self.fetch(url).await;
        if let Err(err) = &result {
            warn!("[weather] Lookup failed: {err}");
        }
        result
    }

    async fn fetch(&self, url: Url) -> Result<WeatherInfo, WeatherError> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        let dto: CurrentWeatherDto = response.json().await?;
        WeatherInfo::try_from(dto)
    }

    fn current_url(&self, at: Coordinates) -> Result<Url, WeatherError> {
        let mut url = self.base_url.join("weather")?;
        url.query_pairs_mut()
            .append_pair("lat", &at.latitude.to_string())
            .append_pair("lon", &at.longitude.to_string())
            .append_pair("appid", &self.api_key)
            .append_pair("units", "metric");
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherDto {
    #[serde(default)]
    weather: Vec<ConditionDto>,
    main: MainDto,
    wind: WindDto,
    #[serde(default)]
    dt: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ConditionDto {
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainDto {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct WindDto {
    speed: f64,
}

impl TryFrom<CurrentWeatherDto> for WeatherInfo {
    type Error = WeatherError;

    fn try_from(value: CurrentWeatherDto) -> Result<Self, Self::Error> {
        let condition = value
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Payload("no weather conditions reported".into()))?;

        Ok(Self {
            main: condition.main,
            description: condition.description,
            temperature_c: value.main.temp,
            humidity_pct: value.main.humidity,
            wind_speed_ms: value.wind.speed,
            observed_at: value
                .dt
                .and_then(|ts| OffsetDateTime::from_unix_timestamp(ts).ok()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_require_both_fields() {
        assert!(matches!(
            Coordinates::parse("", "10"),
            Err(WeatherError::MissingCoordinates)
        ));
        assert!(matches!(
            Coordinates::parse("12.5", "  "),
            Err(WeatherError::MissingCoordinates)
        ));
    }

    #[test]
    fn coordinates_reject_garbage_and_out_of_range() {
        assert!(matches!(
            Coordinates::parse("north", "10"),
            Err(WeatherError::InvalidCoordinates(_))
        ));
        assert!(matches!(
            Coordinates::parse("91", "10"),
            Err(WeatherError::InvalidCoordinates(_))
        ));
        let ok = Coordinates::parse(" 51.5 ", "-0.12").unwrap();
        assert_eq!(ok.latitude, 51.5);
        assert_eq!(ok.longitude, -0.12);
    }

    #[test]
    fn request_url_carries_query_parameters() {
        let client = WeatherClient::with_base_url("https://example.test/data/2.5/", "k3y").unwrap();
        let url = client
            .current_url(Coordinates {
                latitude: 10.0,
                longitude: -20.5,
            })
            .unwrap();
        assert_eq!(url.path(), "/data/2.5/weather");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("lat".into(), "10".into())));
        assert!(pairs.contains(&("lon".into(), "-20.5".into())));
        assert!(pairs.contains(&("appid".into(), "k3y".into())));
        assert!(pairs.contains(&("units".into(), "metric".into())));
    }

    #[test]
    fn payload_maps_first_condition() {
        let raw = r#"{
            "weather": [{"main": "Clouds", "description": "broken clouds"}, {"main": "Mist"}],
            "main": {"temp": 18.4, "humidity": 71},
            "wind": {"speed": 4.6},
            "dt": 1700000000
        }"#;
        let dto: CurrentWeatherDto = serde_json::from_str(raw).unwrap();
        let info = WeatherInfo::try_from(dto).unwrap();
        assert_eq!(info.main, "Clouds");
        assert_eq!(info.description, "broken clouds");
        assert_eq!(info.humidity_pct, 71.0);
        assert_eq!(info.wind_speed_ms, 4.6);
        assert_eq!(info.observed_label().as_deref(), Some("2023-11-14T22:13:20Z"));
    }

    #[test]
    fn payload_without_conditions_is_an_error() {
        let raw = r#"{"weather": [], "main": {"temp": 1.0, "humidity": 2}, "wind": {"speed": 0}}"#;
        let dto: CurrentWeatherDto = serde_json::from_str(raw).unwrap();
        assert!(matches!(
            WeatherInfo::try_from(dto),
            Err(WeatherError::Payload(_))
        ));
    }
}
