// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use umbrella_domain::DomainError;
use umbrella_forecast::ForecastError;
use umbrella_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// contract seen by callers of the upsert workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request body could not be decoded.
    Decode {
        /// A human-readable description of the decode failure.
        message: String,
    },
    /// A required field is missing or a field value is invalid.
    Validation {
        /// The field that failed validation.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A uniqueness rule was violated.
    Conflict {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    NotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An upstream dependency failed.
    ExternalService {
        /// The dependency that failed.
        service: String,
        /// The underlying cause.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Builds the error reported for a missing or empty required field.
    #[must_use]
    pub fn required(field: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: format!("{field} required"),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode { message } => write!(f, "failed to decode request: {message}"),
            Self::Validation { message, .. }
            | Self::Conflict { message, .. }
            | Self::NotFound { message, .. } => f.write_str(message),
            Self::ExternalService { message, .. } => {
                write!(f, "failed to obtain upcoming weather: {message}")
            }
            Self::Internal { message } => write!(f, "internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::ContactNumberTooShort { .. } => ApiError::Validation {
            field: String::from("contact_number"),
            message,
        },
        DomainError::AddressIncomplete => ApiError::Validation {
            field: String::from("address"),
            message,
        },
        DomainError::CountryUnresolved { .. } => ApiError::Validation {
            field: String::from("address.country"),
            message,
        },
        DomainError::DuplicateName { .. } => ApiError::Conflict {
            rule: String::from("unique_name"),
            message,
        },
        DomainError::DuplicateContactNumber { .. } => ApiError::Conflict {
            rule: String::from("unique_contact_number"),
            message,
        },
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::CustomerNotFound(_) => ApiError::NotFound {
            resource_type: String::from("Customer"),
            message: err.to_string(),
        },
        PersistenceError::MissingId | PersistenceError::DuplicateId(_) => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a forecast provider failure into an API error.
#[must_use]
pub fn translate_forecast_error(err: &ForecastError) -> ApiError {
    ApiError::ExternalService {
        service: String::from("forecast"),
        message: err.to_string(),
    }
}
