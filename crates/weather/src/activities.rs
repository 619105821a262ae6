//! Data gathering for activity recommendations.
//!
//! Only the forecast is fetched here. Choosing activities is left to the
//! language model that receives the payload.

use std::ops::RangeInclusive;

use skycast_core::error::WeatherError;
use tracing::info;

use crate::client::OpenMeteoClient;
use crate::types::{ActivitySuggestionPayload, ActivityType};

pub const DEFAULT_MAX_RESULTS: u8 = 5;
pub const MAX_RESULTS_RANGE: RangeInclusive<u8> = 1..=10;

/// Geocode `location`, fetch its forecast (one day if `target_date` is set)
/// and return it alongside the caller's preferences unchanged.
///
/// `max_results` is carried through as-is; nothing is truncated here.
pub async fn suggest_activities(
    client: &OpenMeteoClient,
    location: &str,
    activity_type: ActivityType,
    target_date: Option<&str>,
    max_results: u8,
) -> Result<ActivitySuggestionPayload, WeatherError> {
    let resolved = client.resolve(location).await?;
    let forecast = client.fetch_forecast(&resolved, target_date).await?;

    info!(
        location = %resolved.canonical_name,
        activity = %activity_type,
        days = forecast.entries().len(),
        "Assembled activity suggestion payload"
    );

    Ok(ActivitySuggestionPayload {
        forecast,
        activity_type,
        max_results,
    })
}
