// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use umbrella_domain::{DateRange, Weather, WeatherType};

use crate::error::ForecastError;
use crate::provider::ForecastProvider;
use crate::translate::{OwForecastResponse, filter_and_translate};

/// `OpenWeatherMap`-format forecast for Toronto, 2017-02-15 21:00 to
/// 2017-02-21 09:00 UTC.
const SAMPLE_RESPONSE: &str = include_str!("../fixtures/forecast_sample.json");

/// Provider that answers every query from bundled sample data.
///
/// The location is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockProvider;

impl MockProvider {
    /// Creates a new mock provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ForecastProvider for MockProvider {
    async fn upcoming_weather(
        &self,
        _city: &str,
        _country_code: &str,
        range: DateRange,
        types: &[WeatherType],
    ) -> Result<Vec<Weather>, ForecastError> {
        let response: OwForecastResponse = serde_json::from_str(SAMPLE_RESPONSE)?;
        Ok(filter_and_translate(&response, &range, types))
    }
}
