// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::Value;
use tokio::sync::Notify;
use umbrella_domain::{Address, Customer, DateRange, Weather, WeatherType};
use umbrella_forecast::{ForecastError, ForecastProvider};
use umbrella_persistence::CustomerRepository;

use crate::{CustomerService, IdGenerator, Payload};

/// Forecast provider that counts calls and answers per city.
#[derive(Debug, Default)]
pub struct RecordingProvider {
    calls: AtomicUsize,
    fail: bool,
}

impl RecordingProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: true,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ForecastProvider for RecordingProvider {
    async fn upcoming_weather(
        &self,
        city: &str,
        _country_code: &str,
        _range: DateRange,
        _types: &[WeatherType],
    ) -> Result<Vec<Weather>, ForecastError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        if self.fail {
            return Err(ForecastError::Status {
                status: 503,
                body: String::from("unavailable"),
            });
        }

        Ok(weather_for(city))
    }
}

/// Forecast provider that holds lookups for one city until released.
///
/// Other cities are answered immediately. Answers match
/// `RecordingProvider`.
#[derive(Debug)]
pub struct GatedProvider {
    gated_city: &'static str,
    entered: Notify,
    release: Notify,
    calls: AtomicUsize,
}

impl GatedProvider {
    pub fn new(gated_city: &'static str) -> Arc<Self> {
        Arc::new(Self {
            gated_city,
            entered: Notify::new(),
            release: Notify::new(),
            calls: AtomicUsize::new(0),
        })
    }

    /// Waits until a lookup for the gated city is held.
    pub async fn parked(&self) {
        self.entered.notified().await;
    }

    /// Lets the held lookup finish.
    pub fn release(&self) {
        self.release.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ForecastProvider for GatedProvider {
    async fn upcoming_weather(
        &self,
        city: &str,
        _country_code: &str,
        _range: DateRange,
        _types: &[WeatherType],
    ) -> Result<Vec<Weather>, ForecastError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if city == self.gated_city {
            self.entered.notify_one();
            self.release.notified().await;
        }

        Ok(weather_for(city))
    }
}

/// Hands out `id-1`, `id-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicUsize,
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        format!("id-{}", self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// Always hands out the same identifier.
#[derive(Debug)]
pub struct FixedId(pub &'static str);

impl IdGenerator for FixedId {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

/// The observations `RecordingProvider` returns for `city`.
///
/// Different city name lengths give different dates.
pub fn weather_for(city: &str) -> Vec<Weather> {
    let day: u32 = u32::try_from(city.len()).unwrap() % 5 + 16;
    vec![Weather::new(
        Utc.with_ymd_and_hms(2017, 2, day, 12, 0, 0).unwrap(),
        WeatherType::Rain,
    )]
}

pub fn create_test_customer(id: &str, name: &str, contact_number: &str) -> Customer {
    let mut address: Address = Address::new("Toronto", "Canada");
    address.country_code = Some(String::from("CA"));

    Customer {
        id: Some(id.to_string()),
        name: name.to_string(),
        contact: None,
        contact_number: contact_number.to_string(),
        address,
        weather: weather_for("Toronto"),
    }
}

pub fn create_existing_customer() -> Customer {
    create_test_customer("1", "Existing Customer", "4161234567")
}

pub fn create_test_service(
    provider: Arc<dyn ForecastProvider>,
    customers: Vec<Customer>,
) -> CustomerService {
    CustomerService::new(provider)
        .with_repository(CustomerRepository::with_customers(customers).unwrap())
        .with_id_generator(Arc::new(SequentialIds::default()))
}

pub fn payload(value: Value) -> Payload {
    value.as_object().cloned().unwrap()
}
