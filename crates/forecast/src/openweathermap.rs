// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use umbrella_domain::{DateRange, Weather, WeatherType};

use crate::error::ForecastError;
use crate::provider::ForecastProvider;
use crate::translate::{OwForecastResponse, filter_and_translate};

/// Live client for the `OpenWeatherMap` 5 day / 3 hour forecast API.
#[derive(Debug, Clone)]
pub struct OpenWeatherMapProvider {
    base_url: String,
    api_key: String,
    http: Client,
}

impl OpenWeatherMapProvider {
    /// Creates a client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn new(
        base_url: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, ForecastError> {
        let http: Client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            api_key,
            http,
        })
    }

    async fn fetch_forecast(
        &self,
        city: &str,
        country_code: &str,
    ) -> Result<OwForecastResponse, ForecastError> {
        let location: String = format!("{city},{country_code}");
        debug!(url = %self.base_url, location = %location, "Requesting forecast");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[("q", location.as_str()), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body: String = res.text().await?;

        if !status.is_success() {
            return Err(ForecastError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ForecastProvider for OpenWeatherMapProvider {
    async fn upcoming_weather(
        &self,
        city: &str,
        country_code: &str,
        range: DateRange,
        types: &[WeatherType],
    ) -> Result<Vec<Weather>, ForecastError> {
        let response: OwForecastResponse = self.fetch_forecast(city, country_code).await?;
        Ok(filter_and_translate(&response, &range, types))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
