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

mod country;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use country::{CountryResolver, IsoCountryResolver};
pub use isocountry::CountryCode;
pub use error::DomainError;
pub use types::{Address, Customer, DateRange, Weather, WeatherType};
pub use validation::{
    CONTACT_NUMBER_MIN_LENGTH, normalize_address, validate_address, validate_customer_fields,
    validate_customer_unique,
};
