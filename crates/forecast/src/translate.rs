// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `OpenWeatherMap` forecast documents and their translation into domain
//! weather observations.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use umbrella_domain::{DateRange, Weather, WeatherType};

/// The subset of an `OpenWeatherMap` 5 day / 3 hour forecast we consume.
#[derive(Debug, Clone, Deserialize)]
pub struct OwForecastResponse {
    /// Forecast entries, one per 3 hour step.
    #[serde(default)]
    pub list: Vec<OwForecastEntry>,
}

/// A single forecast step.
#[derive(Debug, Clone, Deserialize)]
pub struct OwForecastEntry {
    /// Forecast time, unix epoch seconds (UTC).
    pub dt: i64,
    /// Weather conditions for the step.
    #[serde(default)]
    pub weather: Vec<OwWeatherSummary>,
}

/// One weather condition within a step.
#[derive(Debug, Clone, Deserialize)]
pub struct OwWeatherSummary {
    /// Condition group (e.g. "Rain", "Clouds").
    pub main: String,
}

/// Maps an `OpenWeatherMap` condition group to a known weather type.
#[must_use]
pub fn map_category(main: &str) -> Option<WeatherType> {
    match main {
        "Rain" => Some(WeatherType::Rain),
        _ => None,
    }
}

/// Selects the observations within `range` whose category is requested.
///
/// An empty `types` slice requests every known category. Conditions with
/// no mapping to a [`WeatherType`] are skipped.
#[must_use]
pub fn filter_and_translate(
    response: &OwForecastResponse,
    range: &DateRange,
    types: &[WeatherType],
) -> Vec<Weather> {
    let wanted: &[WeatherType] = if types.is_empty() {
        WeatherType::ALL
    } else {
        types
    };

    response
        .list
        .iter()
        .filter_map(|entry| DateTime::<Utc>::from_timestamp(entry.dt, 0).map(|date| (date, entry)))
        .filter(|(date, _)| range.contains(*date))
        .flat_map(|(date, entry)| {
            entry
                .weather
                .iter()
                .filter_map(|summary| map_category(&summary.main))
                .filter(|kind| wanted.contains(kind))
                .map(move |kind| Weather::new(date, kind))
        })
        .collect()
}
