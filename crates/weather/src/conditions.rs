//! WMO weather interpretation codes.
//!
//! See: https://open-meteo.com/en/docs#weathervariables

/// Display text for every code Open-Meteo emits, sorted by code.
pub static WMO_CONDITIONS: &[(i64, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Foggy"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Light freezing drizzle"),
    (57, "Dense freezing drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Light freezing rain"),
    (67, "Heavy freezing rain"),
    (71, "Slight snow fall"),
    (73, "Moderate snow fall"),
    (75, "Heavy snow fall"),
    (77, "Snow grains"),
    (80, "Slight rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

/// Returned for any code outside [`WMO_CONDITIONS`].
pub const UNKNOWN_CONDITION: &str = "Unknown";

/// Translate a WMO weather code into display text. Never empty.
pub fn translate(code: i64) -> &'static str {
    WMO_CONDITIONS
        .binary_search_by_key(&code, |(c, _)| *c)
        .map(|i| WMO_CONDITIONS[i].1)
        .unwrap_or(UNKNOWN_CONDITION)
}
