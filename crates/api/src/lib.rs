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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! API boundary for the customer service.
//!
//! Decodes request payloads, runs the upsert workflow against the
//! repository and the forecast provider, and maps every failure onto
//! [`ApiError`].

mod error;
mod id;
mod payload;
mod request_response;
mod service;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_domain_error, translate_forecast_error, translate_persistence_error,
};
pub use id::{IdGenerator, RandomIdGenerator};
pub use payload::{
    ADDRESS_SCHEMA, CUSTOMER_SCHEMA, FieldKind, FieldSpec, Payload, decode_customer,
    parse_payload, validate_payload,
};
pub use request_response::{CustomerResponse, ErrorResponse, ListCustomersResponse};
pub use service::CustomerService;
