use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A geocoded place. Only `canonical_name` ever reaches a caller, as the
/// `location` field of weather and forecast records.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// The name exactly as the caller supplied it
    pub query: String,
    pub latitude: f64,
    pub longitude: f64,
    /// The geocoder's name for the place (may differ from `query`)
    pub canonical_name: String,
}

/// Current conditions at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    /// Air temperature at 2m, °C
    pub temperature: f64,
    /// Apparent temperature, °C
    pub feels_like: f64,
    /// Relative humidity at 2m, %
    pub humidity: f64,
    /// Wind speed at 10m, km/h
    pub wind_speed: f64,
    /// Wind gusts at 10m, km/h
    pub wind_gust: f64,
    pub conditions: String,
    pub location: String,
}

/// One day of a daily forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecastEntry {
    /// Date string as emitted upstream (YYYY-MM-DD)
    pub date: String,
    pub max_temp: f64,
    pub min_temp: f64,
    /// Mean precipitation probability, 0..=100
    pub precipitation_chance: f64,
    pub condition: String,
    pub location: String,
}

/// Either the one day that was asked for or the whole forecast window.
///
/// Serializes untagged: a single object or an array of objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForecastSelection {
    SingleDay(DailyForecastEntry),
    MultiDay(Vec<DailyForecastEntry>),
}

impl ForecastSelection {
    /// The selected entries in date order.
    pub fn entries(&self) -> &[DailyForecastEntry] {
        match self {
            Self::SingleDay(entry) => std::slice::from_ref(entry),
            Self::MultiDay(entries) => entries,
        }
    }
}

/// Activity categories a recommendation can focus on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    OutdoorRecreation,
    IndoorEntertainment,
    Cultural,
    Dining,
    Shopping,
    Sports,
    FamilyFriendly,
    Nightlife,
    Relaxation,
    Educational,
}

impl ActivityType {
    pub const ALL: [ActivityType; 10] = [
        Self::OutdoorRecreation,
        Self::IndoorEntertainment,
        Self::Cultural,
        Self::Dining,
        Self::Shopping,
        Self::Sports,
        Self::FamilyFriendly,
        Self::Nightlife,
        Self::Relaxation,
        Self::Educational,
    ];

    /// Wire name, e.g. `outdoor_recreation`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OutdoorRecreation => "outdoor_recreation",
            Self::IndoorEntertainment => "indoor_entertainment",
            Self::Cultural => "cultural",
            Self::Dining => "dining",
            Self::Shopping => "shopping",
            Self::Sports => "sports",
            Self::FamilyFriendly => "family_friendly",
            Self::Nightlife => "nightlife",
            Self::Relaxation => "relaxation",
            Self::Educational => "educational",
        }
    }

    /// Examples of what falls under this category.
    pub fn description(self) -> &'static str {
        match self {
            Self::OutdoorRecreation => "hiking, biking, parks, beaches, etc.",
            Self::IndoorEntertainment => "museums, theaters, indoor attractions, etc.",
            Self::Cultural => "historical sites, art galleries, local cultural experiences, etc.",
            Self::Dining => "restaurants, food tours, culinary experiences, etc.",
            Self::Shopping => "malls, markets, boutiques, etc.",
            Self::Sports => "sporting events, recreational sports, etc.",
            Self::FamilyFriendly => "activities suitable for families with children",
            Self::Nightlife => "bars, clubs, evening entertainment, etc.",
            Self::Relaxation => "spas, wellness centers, peaceful locations, etc.",
            Self::Educational => "workshops, classes, educational tours, etc.",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<_> = Self::ALL.iter().map(|a| a.as_str()).collect();
                format!("unknown activity type '{s}' (expected one of: {})", valid.join(", "))
            })
    }
}

/// What the activities tool hands to the language model: the forecast plus
/// the caller's preferences, untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySuggestionPayload {
    pub forecast: ForecastSelection,
    pub activity_type: ActivityType,
    pub max_results: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str) -> DailyForecastEntry {
        DailyForecastEntry {
            date: date.into(),
            max_temp: 18.2,
            min_temp: 9.1,
            precipitation_chance: 35.0,
            condition: "Overcast".into(),
            location: "Paris".into(),
        }
    }

    #[test]
    fn current_weather_serializes_camel_case() {
        let weather = CurrentWeather {
            temperature: 12.5,
            feels_like: 10.9,
            humidity: 81.0,
            wind_speed: 14.4,
            wind_gust: 30.2,
            conditions: "Slight rain".into(),
            location: "Paris".into(),
        };
        let json = serde_json::to_value(&weather).unwrap();
        assert_eq!(json["feelsLike"], 10.9);
        assert_eq!(json["windGust"], 30.2);
        assert_eq!(json["conditions"], "Slight rain");
    }

    #[test]
    fn single_day_serializes_as_object() {
        let json = serde_json::to_value(ForecastSelection::SingleDay(entry("2026-10-17"))).unwrap();
        assert!(json.is_object());
        assert_eq!(json["precipitationChance"], 35.0);
    }

    #[test]
    fn multi_day_serializes_as_array() {
        let selection = ForecastSelection::MultiDay(vec![entry("2026-10-17"), entry("2026-10-18")]);
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(2));
        assert_eq!(json[1]["date"], "2026-10-18");
        assert_eq!(selection.entries().len(), 2);
    }

    #[test]
    fn activity_type_wire_names_match_serde() {
        for activity in ActivityType::ALL {
            let json = serde_json::to_value(activity).unwrap();
            assert_eq!(json, activity.as_str());
            assert_eq!(activity.as_str().parse::<ActivityType>(), Ok(activity));
        }
    }

    #[test]
    fn unknown_activity_type_is_rejected() {
        let err = "skydiving".parse::<ActivityType>().unwrap_err();
        assert!(err.contains("skydiving"));
        assert!(err.contains("outdoor_recreation"));
        assert!(serde_json::from_value::<ActivityType>(serde_json::json!("Dining")).is_err());
    }

    #[test]
    fn payload_shape() {
        let payload = ActivitySuggestionPayload {
            forecast: ForecastSelection::SingleDay(entry("2026-10-17")),
            activity_type: ActivityType::FamilyFriendly,
            max_results: 5,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["activityType"], "family_friendly");
        assert_eq!(json["maxResults"], 5);
        assert_eq!(json["forecast"]["date"], "2026-10-17");
    }
}
