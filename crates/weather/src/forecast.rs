//! Daily forecast selection.
//!
//! Open-Meteo returns a daily forecast as parallel arrays indexed by day.
//! Selection works on those arrays directly: no date parsing, no timezone
//! handling, exact string equality on `time` only.

use serde::Deserialize;
use skycast_core::error::WeatherError;

use crate::conditions::translate;
use crate::types::{DailyForecastEntry, ForecastSelection};

/// The `daily` block of an Open-Meteo forecast response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub precipitation_probability_mean: Vec<f64>,
    pub weathercode: Vec<i64>,
}

impl DailySeries {
    /// Number of days, after checking every array has the same length.
    fn checked_len(&self) -> Result<usize, WeatherError> {
        let days = self.time.len();
        let lengths = [
            ("temperature_2m_max", self.temperature_2m_max.len()),
            ("temperature_2m_min", self.temperature_2m_min.len()),
            ("precipitation_probability_mean", self.precipitation_probability_mean.len()),
            ("weathercode", self.weathercode.len()),
        ];
        if let Some((field, len)) = lengths.into_iter().find(|(_, len)| *len != days) {
            return Err(WeatherError::Transport(format!(
                "Malformed daily forecast: {field} has {len} values for {days} days"
            )));
        }
        Ok(days)
    }

    /// Build the entry for day `index`. Caller guarantees `index` is in range.
    fn entry(&self, index: usize, location: &str) -> DailyForecastEntry {
        DailyForecastEntry {
            date: self.time[index].clone(),
            max_temp: self.temperature_2m_max[index],
            min_temp: self.temperature_2m_min[index],
            precipitation_chance: self.precipitation_probability_mean[index],
            condition: translate(self.weathercode[index]).to_string(),
            location: location.to_string(),
        }
    }

    /// Select the day matching `target_date`, or every day when it is `None`.
    pub fn select(
        &self,
        location: &str,
        target_date: Option<&str>,
    ) -> Result<ForecastSelection, WeatherError> {
        let days = self.checked_len()?;

        let Some(date) = target_date else {
            let entries = (0..days).map(|i| self.entry(i, location)).collect();
            return Ok(ForecastSelection::MultiDay(entries));
        };

        let index = self
            .time
            .iter()
            .position(|d| d == date)
            .ok_or_else(|| WeatherError::DateNotAvailable(date.to_string()))?;
        Ok(ForecastSelection::SingleDay(self.entry(index, location)))
    }
}
