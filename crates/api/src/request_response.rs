// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API response data transfer objects.

use umbrella_domain::Customer;

/// API response for a successful create or update.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CustomerResponse {
    /// The committed customer.
    pub customer: Customer,
}

/// API response for listing customers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListCustomersResponse {
    /// All stored customers, oldest first.
    pub customers: Vec<Customer>,
}

/// Body returned for any failed request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    /// Always `true`.
    pub error: bool,
    /// A human-readable description of the failure.
    pub message: String,
}

impl ErrorResponse {
    /// Creates an error body carrying `message`.
    #[must_use]
    pub const fn new(message: String) -> Self {
        Self {
            error: true,
            message,
        }
    }
}
