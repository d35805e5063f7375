// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The customer upsert workflow.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use umbrella_domain::{
    Address, CountryResolver, Customer, DateRange, IsoCountryResolver, Weather, WeatherType,
    normalize_address, validate_customer_fields, validate_customer_unique,
};
use umbrella_forecast::{ForecastProvider, ForecastWindow};
use umbrella_persistence::{CustomerRepository, PersistenceError};

use crate::error::{
    ApiError, translate_domain_error, translate_forecast_error, translate_persistence_error,
};
use crate::id::{IdGenerator, RandomIdGenerator};
use crate::payload::{Payload, decode_customer};

/// Weather categories attached to customers.
const TRACKED_WEATHER: &[WeatherType] = &[WeatherType::Rain];

/// Attempts made to draw an identifier not already in use.
const MAX_ID_ATTEMPTS: usize = 8;

/// What an upsert will do, decided against the current repository contents.
#[derive(Debug)]
enum Plan {
    /// Store a new customer.
    Create,
    /// Replace the stored customer with the same id.
    Update {
        /// Weather currently stored for the customer.
        stored_weather: Vec<Weather>,
        /// Whether the address differs from the stored one.
        address_changed: bool,
    },
}

/// Creates and updates customers, enriching them with upcoming weather.
///
/// The repository is guarded by a single lock. An update that keeps its
/// address is planned and committed in one critical section. Otherwise the
/// lock is released while the forecast provider is queried and every check
/// is repeated once it is re-acquired. The committed weather is always the
/// weather fetched for the committed address, so concurrent upserts never
/// violate uniqueness and never pair weather with a stale address.
#[derive(Debug)]
pub struct CustomerService {
    repository: Mutex<CustomerRepository>,
    forecast: Arc<dyn ForecastProvider>,
    resolver: Arc<dyn CountryResolver>,
    ids: Arc<dyn IdGenerator>,
    window: ForecastWindow,
}

impl CustomerService {
    /// Creates a service with an empty repository, ISO country resolution,
    /// random identifiers and the default forecast window.
    #[must_use]
    pub fn new(forecast: Arc<dyn ForecastProvider>) -> Self {
        Self {
            repository: Mutex::new(CustomerRepository::new()),
            forecast,
            resolver: Arc::new(IsoCountryResolver::new()),
            ids: Arc::new(RandomIdGenerator::new()),
            window: ForecastWindow::default(),
        }
    }

    /// Replaces the repository.
    #[must_use]
    pub fn with_repository(mut self, repository: CustomerRepository) -> Self {
        self.repository = Mutex::new(repository);
        self
    }

    /// Replaces the country resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: Arc<dyn CountryResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replaces the identifier generator.
    #[must_use]
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Replaces the forecast window.
    #[must_use]
    pub fn with_window(mut self, window: ForecastWindow) -> Self {
        self.window = window;
        self
    }

    /// Returns the forecast window in use.
    #[must_use]
    pub const fn window(&self) -> ForecastWindow {
        self.window
    }

    /// Returns every stored customer in insertion order.
    pub async fn list_customers(&self) -> Vec<Customer> {
        self.repository.lock().await.snapshot()
    }

    /// Creates or updates a customer from a decoded request payload.
    ///
    /// A payload without an `id` creates a customer; a payload with an `id`
    /// replaces the stored customer with that id. The returned customer is
    /// the committed record, including its id and weather.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `Decode` or `Validation` if the payload is malformed or breaks a
    ///   field rule
    /// - `Conflict` if a new customer's name or contact number is taken
    /// - `NotFound` if the `id` is unknown
    /// - `ExternalService` if the forecast could not be obtained
    ///
    /// The repository is unchanged whenever an error is returned.
    pub async fn upsert_customer(&self, payload: &Payload) -> Result<Customer, ApiError> {
        let candidate: Customer = decode_customer(payload)?;
        self.upsert(candidate).await
    }

    /// Creates or updates an already decoded customer.
    ///
    /// # Errors
    ///
    /// Same as [`Self::upsert_customer`], minus decode failures.
    pub async fn upsert(&self, candidate: Customer) -> Result<Customer, ApiError> {
        validate_customer_fields(&candidate, self.resolver.as_ref())
            .map_err(translate_domain_error)?;
        let address: Address = normalize_address(&candidate.address, self.resolver.as_ref())
            .map_err(translate_domain_error)?;
        let mut candidate: Customer = Customer {
            address,
            weather: Vec::new(),
            ..candidate
        };

        {
            let mut repository = self.repository.lock().await;
            if let Plan::Update {
                stored_weather,
                address_changed: false,
            } = plan_upsert(&repository, &candidate)
                .inspect_err(|e| log_rejection(&candidate, e))?
            {
                candidate.weather = stored_weather;
                return commit_update(&mut repository, candidate);
            }
        }

        candidate.weather = self.fetch_weather(&candidate.address).await?;

        let mut repository = self.repository.lock().await;
        match plan_upsert(&repository, &candidate).inspect_err(|e| log_rejection(&candidate, e))? {
            Plan::Create => self.commit_create(&mut repository, candidate),
            Plan::Update { .. } => commit_update(&mut repository, candidate),
        }
    }

    async fn fetch_weather(&self, address: &Address) -> Result<Vec<Weather>, ApiError> {
        let country_code: &str = address.country_code.as_deref().unwrap_or_default();
        let range: DateRange = self.window.range().map_err(|e| ApiError::Internal {
            message: e.to_string(),
        })?;

        debug!(
            city = %address.city,
            country_code,
            "Requesting upcoming weather"
        );

        self.forecast
            .upcoming_weather(
                &address.city,
                country_code,
                range,
                TRACKED_WEATHER,
            )
            .await
            .map_err(|e| {
                warn!(
                    city = %address.city,
                    country_code,
                    error = %e,
                    "Forecast lookup failed"
                );
                translate_forecast_error(&e)
            })
    }

    fn commit_create(
        &self,
        repository: &mut CustomerRepository,
        mut customer: Customer,
    ) -> Result<Customer, ApiError> {
        let id: String = (0..MAX_ID_ATTEMPTS)
            .map(|_| self.ids.generate())
            .find(|id| repository.find(id).is_none())
            .ok_or_else(|| ApiError::Internal {
                message: String::from("could not allocate a customer id"),
            })?;
        customer.id = Some(id);

        let stored: Customer = repository
            .append(customer)
            .map_err(translate_persistence_error)?
            .clone();

        info!(
            id = ?stored.id(),
            name = %stored.name,
            weather = stored.weather.len(),
            "Created customer"
        );

        Ok(stored)
    }
}

fn commit_update(
    repository: &mut CustomerRepository,
    customer: Customer,
) -> Result<Customer, ApiError> {
    let stored: Customer = repository
        .replace(customer)
        .map_err(translate_persistence_error)?
        .clone();

    info!(
        id = ?stored.id(),
        name = %stored.name,
        weather = stored.weather.len(),
        "Updated customer"
    );

    Ok(stored)
}

fn log_rejection(candidate: &Customer, err: &ApiError) {
    warn!(
        id = ?candidate.id(),
        name = %candidate.name,
        error = %err,
        "Upsert rejected"
    );
}

/// Decides how `candidate` would be stored given the current contents.
///
/// Uniqueness is only enforced for new customers.
fn plan_upsert(repository: &CustomerRepository, candidate: &Customer) -> Result<Plan, ApiError> {
    let Some(id) = candidate.id() else {
        validate_customer_unique(candidate, repository.all()).map_err(translate_domain_error)?;
        return Ok(Plan::Create);
    };

    let stored: &Customer = repository.find(id).ok_or_else(|| {
        translate_persistence_error(PersistenceError::CustomerNotFound(id.to_string()))
    })?;

    Ok(Plan::Update {
        stored_weather: stored.weather.clone(),
        address_changed: !stored.address.same_location(&candidate.address),
    })
}
