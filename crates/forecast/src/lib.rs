// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weather forecast providers.
//!
//! Providers return upcoming [`umbrella_domain::Weather`] observations for a
//! city and ISO country code, filtered to a date window and a set of weather
//! categories. Two implementations exist:
//!
//! - [`OpenWeatherMapProvider`] queries the `OpenWeatherMap` forecast API
//! - [`MockProvider`] answers from bundled sample data

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod mock;
mod openweathermap;
mod provider;
mod translate;

pub use error::ForecastError;
pub use mock::MockProvider;
pub use openweathermap::OpenWeatherMapProvider;
pub use provider::{
    DEFAULT_FORECAST_URL, DEFAULT_TIMEOUT, ForecastConfig, ForecastProvider, ForecastWindow,
    MAX_FORECAST_DAYS, ProviderKind, SAMPLE_API_KEY, build_provider,
};
pub use translate::{
    OwForecastEntry, OwForecastResponse, OwWeatherSummary, filter_and_translate, map_category,
};
