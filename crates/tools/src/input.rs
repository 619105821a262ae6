//! Typed tool inputs and their validation.
//!
//! Arguments arrive as loosely-typed JSON from the model. They are decoded
//! into these structs and checked before any upstream request is made;
//! every failure is a `ToolError::InvalidArguments`.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use skycast_core::error::ToolError;
use skycast_weather::{ActivityType, DEFAULT_MAX_RESULTS, MAX_RESULTS_RANGE};

/// Decode tool arguments, reporting serde's message on mismatch.
pub fn parse_arguments<T: DeserializeOwned>(arguments: serde_json::Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments(e.to_string()))
}

fn require_location(location: &str) -> Result<(), ToolError> {
    if location.trim().is_empty() {
        return Err(ToolError::InvalidArguments("'location' must not be empty".into()));
    }
    Ok(())
}

/// Arguments of `get-weather`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetWeatherInput {
    pub location: String,
}

impl GetWeatherInput {
    pub fn validate(&self) -> Result<(), ToolError> {
        require_location(&self.location)
    }
}

/// Arguments of `recommend-activities`, as the model sends them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendActivitiesInput {
    pub location: String,
    pub activity_type: ActivityType,
    #[serde(default)]
    pub date: Option<String>,
    /// Wide integer so out-of-range values get a range message, not a serde one
    #[serde(default)]
    pub max_results: Option<i64>,
}

/// A `recommend-activities` call that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRequest {
    pub location: String,
    pub activity_type: ActivityType,
    pub date: Option<String>,
    pub max_results: u8,
}

impl RecommendActivitiesInput {
    /// Check ranges and apply the `maxResults` default.
    pub fn validate(self) -> Result<ActivityRequest, ToolError> {
        require_location(&self.location)?;

        let max_results = match self.max_results {
            None => DEFAULT_MAX_RESULTS,
            Some(n) => u8::try_from(n)
                .ok()
                .filter(|n| MAX_RESULTS_RANGE.contains(n))
                .ok_or_else(|| {
                    ToolError::InvalidArguments(format!(
                        "'maxResults' must be between {} and {}, got {n}",
                        MAX_RESULTS_RANGE.start(),
                        MAX_RESULTS_RANGE.end()
                    ))
                })?,
        };

        Ok(ActivityRequest {
            location: self.location,
            activity_type: self.activity_type,
            date: self.date,
            max_results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn activities(args: serde_json::Value) -> Result<ActivityRequest, ToolError> {
        parse_arguments::<RecommendActivitiesInput>(args)?.validate()
    }

    #[test]
    fn max_results_boundaries() {
        for n in [0, 11, -1, 256] {
            let err = activities(json!({"location": "Paris", "activityType": "dining", "maxResults": n}))
                .unwrap_err();
            assert!(matches!(err, ToolError::InvalidArguments(ref m) if m.contains("maxResults")), "{n}");
        }
        for n in [1, 10] {
            let req = activities(json!({"location": "Paris", "activityType": "dining", "maxResults": n})).unwrap();
            assert_eq!(i64::from(req.max_results), n);
        }
    }

    #[test]
    fn max_results_defaults_to_five() {
        let req = activities(json!({"location": "Paris", "activityType": "sports"})).unwrap();
        assert_eq!(req.max_results, 5);
        assert_eq!(req.activity_type, ActivityType::Sports);
        assert!(req.date.is_none());
    }

    #[test]
    fn fractional_max_results_rejected() {
        let err = activities(json!({"location": "Paris", "activityType": "sports", "maxResults": 2.5})).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn unknown_activity_type_rejected() {
        let err = activities(json!({"location": "Paris", "activityType": "skydiving"})).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(ref m) if m.contains("skydiving")));
    }

    #[test]
    fn missing_required_fields_rejected() {
        assert!(activities(json!({"activityType": "dining"})).is_err());
        assert!(activities(json!({"location": "Paris"})).is_err());
        assert!(parse_arguments::<GetWeatherInput>(json!({})).is_err());
    }

    #[test]
    fn blank_location_rejected() {
        let input: GetWeatherInput = parse_arguments(json!({"location": "   "})).unwrap();
        assert!(input.validate().is_err());
        assert!(activities(json!({"location": "", "activityType": "dining"})).is_err());
    }

    #[test]
    fn date_passes_through_untouched() {
        let req = activities(json!({
            "location": "Paris",
            "activityType": "nightlife",
            "date": "2026-10-18",
            "maxResults": 3
        }))
        .unwrap();
        assert_eq!(req.date.as_deref(), Some("2026-10-18"));
        assert_eq!(req.max_results, 3);
    }

    #[test]
    fn null_optionals_are_absent() {
        let req = activities(json!({
            "location": "Paris",
            "activityType": "relaxation",
            "date": null,
            "maxResults": null
        }))
        .unwrap();
        assert!(req.date.is_none());
        assert_eq!(req.max_results, 5);
    }
}
