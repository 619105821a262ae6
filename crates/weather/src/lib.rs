//! Weather lookup and forecast resolution over the Open-Meteo API.
//!
//! Two entry points are built from four pieces:
//!
//! - [`conditions::translate`] maps WMO weather codes to display text
//! - [`OpenMeteoClient::resolve`] geocodes a free-text place name
//! - [`OpenMeteoClient::fetch_current`] / [`OpenMeteoClient::fetch_forecast`]
//!   read the current snapshot or the daily forecast for a location
//! - [`activities::suggest_activities`] bundles a forecast with an activity
//!   category for a language model to reason over
//!
//! Nothing here is cached or retried: every call goes upstream and every
//! failure surfaces as a [`WeatherError`].

pub mod activities;
pub mod client;
pub mod conditions;
pub mod forecast;
pub mod types;

pub use activities::{suggest_activities, DEFAULT_MAX_RESULTS, MAX_RESULTS_RANGE};
pub use client::OpenMeteoClient;
pub use forecast::DailySeries;
pub use skycast_core::error::WeatherError;
pub use types::{
    ActivitySuggestionPayload, ActivityType, CurrentWeather, DailyForecastEntry,
    ForecastSelection, Location,
};
