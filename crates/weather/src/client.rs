//! Open-Meteo HTTP client.
//!
//! Two unauthenticated GET endpoints are used:
//! - geocoding: `{geocoding_url}/search?name=..&count=1`
//! - forecast:  `{forecast_url}/forecast?latitude=..&longitude=..&current=..|daily=..`

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use skycast_config::WeatherConfig;
use skycast_core::error::WeatherError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::conditions::translate;
use crate::forecast::DailySeries;
use crate::types::{CurrentWeather, ForecastSelection, Location};

const CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,wind_gusts_10m,weather_code";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_probability_mean,weathercode";

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodingCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingCandidate {
    latitude: f64,
    longitude: f64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    apparent_temperature: f64,
    relative_humidity_2m: f64,
    wind_speed_10m: f64,
    wind_gusts_10m: f64,
    weather_code: i64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailySeries,
}

/// Stateless Open-Meteo client. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Arc<Client>,
    geocoding_url: String,
    forecast_url: String,
}

impl OpenMeteoClient {
    pub fn new(
        geocoding_url: impl Into<String>,
        forecast_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WeatherError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client: Arc::new(client),
            geocoding_url: geocoding_url.into().trim_end_matches('/').to_string(),
            forecast_url: forecast_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &WeatherConfig) -> Result<Self, WeatherError> {
        Self::new(
            &config.geocoding_url,
            &config.forecast_url,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// GET `url` with `query` and decode a JSON body. Any failure is `Transport`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| WeatherError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%url, status = status.as_u16(), body = %body, "Weather service returned error");
            return Err(WeatherError::Transport(format!("{url} returned status {status}")));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WeatherError::Transport(format!("Failed to parse response from {url}: {e}")))
    }

    /// Resolve a free-text place name. The first candidate wins.
    pub async fn resolve(&self, name: &str) -> Result<Location, WeatherError> {
        debug!(location = %name, "Geocoding location");

        let url = format!("{}/search", self.geocoding_url);
        let response: GeocodingResponse = self
            .get_json(&url, &[("name", name.to_string()), ("count", "1".to_string())])
            .await?;

        let candidate = response
            .results
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| {
                warn!(location = %name, "No geocoding candidates");
                WeatherError::NotFound(name.to_string())
            })?;

        info!(
            location = %name,
            resolved = %candidate.name,
            latitude = candidate.latitude,
            longitude = candidate.longitude,
            "Resolved location"
        );

        Ok(Location {
            query: name.to_string(),
            latitude: candidate.latitude,
            longitude: candidate.longitude,
            canonical_name: candidate.name,
        })
    }

    fn coordinates(location: &Location) -> [(&'static str, String); 2] {
        [
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
        ]
    }

    /// Current conditions at `location`, labelled with its canonical name.
    pub async fn fetch_current(&self, location: &Location) -> Result<CurrentWeather, WeatherError> {
        debug!(location = %location.canonical_name, "Fetching current weather");

        let url = format!("{}/forecast", self.forecast_url);
        let [lat, lon] = Self::coordinates(location);
        let response: CurrentResponse = self
            .get_json(&url, &[lat, lon, ("current", CURRENT_FIELDS.to_string())])
            .await?;

        let current = response.current;
        Ok(CurrentWeather {
            temperature: current.temperature_2m,
            feels_like: current.apparent_temperature,
            humidity: current.relative_humidity_2m,
            wind_speed: current.wind_speed_10m,
            wind_gust: current.wind_gusts_10m,
            conditions: translate(current.weather_code).to_string(),
            location: location.canonical_name.clone(),
        })
    }

    /// Daily forecast over the upstream's default window, optionally narrowed
    /// to the single day whose date string equals `target_date`.
    pub async fn fetch_forecast(
        &self,
        location: &Location,
        target_date: Option<&str>,
    ) -> Result<ForecastSelection, WeatherError> {
        debug!(
            location = %location.canonical_name,
            date = target_date.unwrap_or("all"),
            "Fetching daily forecast"
        );

        let url = format!("{}/forecast", self.forecast_url);
        let [lat, lon] = Self::coordinates(location);
        let response: ForecastResponse = self
            .get_json(
                &url,
                &[
                    lat,
                    lon,
                    ("daily", DAILY_FIELDS.to_string()),
                    ("timezone", "auto".to_string()),
                ],
            )
            .await?;

        response.daily.select(&location.canonical_name, target_date)
    }

    /// Geocode `location`, then read its current weather.
    pub async fn get_weather(&self, location: &str) -> Result<CurrentWeather, WeatherError> {
        let resolved = self.resolve(location).await?;
        self.fetch_current(&resolved).await
    }
}
