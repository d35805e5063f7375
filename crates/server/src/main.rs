// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use umbrella_api::{
    ApiError, CustomerResponse, CustomerService, ErrorResponse, ListCustomersResponse, Payload,
    parse_payload,
};
use umbrella_forecast::{
    DEFAULT_FORECAST_URL, ForecastConfig, ForecastProvider, ForecastWindow, MAX_FORECAST_DAYS,
    ProviderKind, SAMPLE_API_KEY, build_provider,
};

/// Umbrella Server - customer records enriched with upcoming weather
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Forecast provider to use (`mock` or `openweathermap`)
    #[arg(long, default_value_t = ProviderKind::Mock)]
    forecast_provider: ProviderKind,

    /// Base URL of the `OpenWeatherMap` forecast endpoint
    #[arg(long, default_value = DEFAULT_FORECAST_URL)]
    forecast_url: String,

    /// `OpenWeatherMap` API key
    #[arg(long, default_value = SAMPLE_API_KEY)]
    forecast_api_key: String,

    /// Timeout for a single forecast request, in seconds
    #[arg(long, default_value_t = 30)]
    forecast_timeout_secs: u64,

    /// First day of the forecast window (YYYY-MM-DD)
    #[arg(long, default_value = "2017-02-16")]
    forecast_start: NaiveDate,

    /// Length of the forecast window in days
    #[arg(
        long,
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_FORECAST_DAYS))
    )]
    forecast_days: u32,

    /// Largest request body accepted, in bytes
    #[arg(long, default_value_t = 1_000_000)]
    max_body_bytes: usize,
}

impl Args {
    fn forecast_config(&self) -> ForecastConfig {
        ForecastConfig {
            kind: self.forecast_provider,
            base_url: self.forecast_url.clone(),
            api_key: self.forecast_api_key.clone(),
            timeout: Duration::from_secs(self.forecast_timeout_secs),
        }
    }

    const fn forecast_window(&self) -> ForecastWindow {
        ForecastWindow::new(self.forecast_start, self.forecast_days)
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The upsert workflow and the repository it guards.
    service: Arc<CustomerService>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse::new(self.message));
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::Decode { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::ExternalService { service, .. } => {
                error!(service = %service, error = %err, "Upstream service failure");
                StatusCode::BAD_GATEWAY
            }
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET /customers endpoint.
///
/// Returns every stored customer in insertion order.
async fn handle_list_customers(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListCustomersResponse> {
    let customers = app_state.service.list_customers().await;
    Json(ListCustomersResponse { customers })
}

/// Handler for POST and PUT /customers endpoint.
///
/// Creates a customer when the payload has no `id`, otherwise updates the
/// customer with that `id`.
async fn handle_upsert_customer(
    AxumState(app_state): AxumState<AppState>,
    body: Bytes,
) -> Result<Json<CustomerResponse>, HttpError> {
    let payload: Payload = parse_payload(&body)?;
    let customer = app_state.service.upsert_customer(&payload).await?;
    Ok(Json(CustomerResponse { customer }))
}

/// Builds the application router.
fn build_router(app_state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route(
            "/customers",
            get(handle_list_customers)
                .post(handle_upsert_customer)
                .put(handle_upsert_customer),
        )
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Umbrella Server");

    let window: ForecastWindow = args.forecast_window();
    window.range()?;
    let provider: Arc<dyn ForecastProvider> = build_provider(&args.forecast_config())?;
    info!(
        provider = %args.forecast_provider,
        start = %window.start,
        days = window.days,
        "Using forecast provider"
    );

    let app_state: AppState = AppState {
        service: Arc::new(CustomerService::new(provider).with_window(window)),
    };

    // Build router
    let app: Router = build_router(app_state, args.max_body_bytes);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
