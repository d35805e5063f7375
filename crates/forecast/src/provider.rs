// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, TimeDelta};
use std::{fmt::Debug, str::FromStr, sync::Arc, time::Duration};
use umbrella_domain::{DateRange, Weather, WeatherType};

use crate::{error::ForecastError, mock::MockProvider, openweathermap::OpenWeatherMapProvider};

/// Public sample endpoint; it only serves data for February 2017.
pub const DEFAULT_FORECAST_URL: &str = "https://samples.openweathermap.org/data/2.5/forecast";

/// Key accepted by the public sample endpoint.
pub const SAMPLE_API_KEY: &str = "b6907d289e10d714a6e88b30761fae22";

/// Longest forecast window accepted, in days.
pub const MAX_FORECAST_DAYS: u32 = 366;

/// Default transport timeout for live providers.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of upcoming weather for a location.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Returns observations for `(city, country_code)` that fall within
    /// `range` (inclusive) and whose category is one of `types`.
    ///
    /// If `types` is empty every known category is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider could not be reached or its answer
    /// could not be understood.
    async fn upcoming_weather(
        &self,
        city: &str,
        country_code: &str,
        range: DateRange,
        types: &[WeatherType],
    ) -> Result<Vec<Weather>, ForecastError>;
}

/// Which provider implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderKind {
    /// Bundled sample data; no network access.
    #[default]
    Mock,
    /// The `OpenWeatherMap` forecast HTTP API.
    OpenWeatherMap,
}

impl ProviderKind {
    /// Converts this provider kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::OpenWeatherMap => "openweathermap",
        }
    }

    /// Every supported provider kind.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Mock, Self::OpenWeatherMap]
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "openweathermap" => Ok(Self::OpenWeatherMap),
            _ => Err(ForecastError::Config(format!(
                "unknown provider '{s}'. Supported providers: mock, openweathermap"
            ))),
        }
    }
}

/// Settings needed to construct a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastConfig {
    /// Which implementation to build.
    pub kind: ProviderKind,
    /// Forecast endpoint for live providers.
    pub base_url: String,
    /// API key for live providers.
    pub api_key: String,
    /// Transport timeout for live providers.
    pub timeout: Duration,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::Mock,
            base_url: DEFAULT_FORECAST_URL.to_string(),
            api_key: SAMPLE_API_KEY.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// The fixed span of days a forecast is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastWindow {
    /// First day of the window (midnight UTC).
    pub start: NaiveDate,
    /// Length of the window in days.
    pub days: u32,
}

impl ForecastWindow {
    /// Creates a new window.
    #[must_use]
    pub const fn new(start: NaiveDate, days: u32) -> Self {
        Self { start, days }
    }

    /// Returns the window as a closed range: `[start, start + days]`.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::Config` if `days` exceeds
    /// [`MAX_FORECAST_DAYS`] or the end of the window is not a
    /// representable date.
    pub fn range(&self) -> Result<DateRange, ForecastError> {
        if self.days > MAX_FORECAST_DAYS {
            return Err(ForecastError::Config(format!(
                "forecast window of {} days exceeds the maximum of {MAX_FORECAST_DAYS}",
                self.days
            )));
        }

        let start = self.start.and_time(NaiveTime::MIN).and_utc();
        let end = start
            .checked_add_signed(TimeDelta::days(i64::from(self.days)))
            .ok_or_else(|| {
                ForecastError::Config(format!(
                    "forecast window starting {} runs past the last representable date",
                    self.start
                ))
            })?;

        Ok(DateRange::new(start, end))
    }
}

impl Default for ForecastWindow {
    /// 2017-02-16 for 5 days, the span covered by the sample endpoint.
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2017, 2, 16).unwrap_or_default(),
            days: 5,
        }
    }
}

/// Constructs a provider from configuration.
///
/// # Errors
///
/// Returns an error if the live HTTP client cannot be built.
pub fn build_provider(config: &ForecastConfig) -> Result<Arc<dyn ForecastProvider>, ForecastError> {
    let provider: Arc<dyn ForecastProvider> = match config.kind {
        ProviderKind::Mock => Arc::new(MockProvider::new()),
        ProviderKind::OpenWeatherMap => Arc::new(OpenWeatherMapProvider::new(
            config.base_url.clone(),
            config.api_key.clone(),
            config.timeout,
        )?),
    };

    Ok(provider)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn provider_kind_as_str_roundtrip() {
        for kind in ProviderKind::all() {
            let parsed: ProviderKind = kind.as_str().parse().unwrap();
            assert_eq!(*kind, parsed);
        }
    }

    #[test]
    fn provider_kind_parse_ignores_case() {
        let parsed: ProviderKind = "OpenWeatherMap".parse().unwrap();
        assert_eq!(parsed, ProviderKind::OpenWeatherMap);
    }

    #[test]
    fn unknown_provider_error() {
        let err = "doesnotexist".parse::<ProviderKind>().unwrap_err();
        assert!(err.to_string().contains("unknown provider"));
    }

    #[test]
    fn default_window_covers_sample_data() {
        let range: DateRange = ForecastWindow::default().range().unwrap();

        assert_eq!(range.start, Utc.with_ymd_and_hms(2017, 2, 16, 0, 0, 0).unwrap());
        assert_eq!(range.end, Utc.with_ymd_and_hms(2017, 2, 21, 0, 0, 0).unwrap());
    }

    #[test]
    fn oversized_window_is_rejected() {
        let start: NaiveDate = NaiveDate::from_ymd_opt(2017, 2, 16).unwrap();
        let err: ForecastError = ForecastWindow::new(start, u32::MAX).range().unwrap_err();

        assert!(matches!(err, ForecastError::Config(_)));
        assert!(err.to_string().contains("exceeds the maximum"));
    }

    #[test]
    fn window_past_last_date_is_rejected() {
        let err: ForecastError = ForecastWindow::new(NaiveDate::MAX, 1).range().unwrap_err();

        assert!(matches!(err, ForecastError::Config(_)));
    }

    #[test]
    fn longest_window_is_accepted() {
        let start: NaiveDate = NaiveDate::from_ymd_opt(2017, 2, 16).unwrap();
        let range: DateRange = ForecastWindow::new(start, MAX_FORECAST_DAYS)
            .range()
            .unwrap();

        assert_eq!(range.end, Utc.with_ymd_and_hms(2018, 2, 17, 0, 0, 0).unwrap());
    }

    #[test]
    fn default_config_uses_mock_provider() {
        let config: ForecastConfig = ForecastConfig::default();
        assert_eq!(config.kind, ProviderKind::Mock);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn build_provider_for_each_kind() {
        for kind in ProviderKind::all() {
            let config: ForecastConfig = ForecastConfig {
                kind: *kind,
                ..ForecastConfig::default()
            };
            assert!(build_provider(&config).is_ok());
        }
    }
}
