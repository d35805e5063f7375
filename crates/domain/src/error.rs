// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Contact number is shorter than the allowed minimum.
    ContactNumberTooShort {
        /// The minimum number of characters required.
        min_length: usize,
    },
    /// City or country is missing from the address.
    AddressIncomplete,
    /// The address country does not identify a single ISO country.
    CountryUnresolved {
        /// The country text as supplied.
        country: String,
    },
    /// Another customer already uses this name (ignoring case).
    DuplicateName {
        /// The conflicting name.
        name: String,
    },
    /// Another customer already uses this contact number.
    DuplicateContactNumber {
        /// The conflicting contact number.
        contact_number: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContactNumberTooShort { .. } => write!(f, "contact number too short"),
            Self::AddressIncomplete => write!(f, "address incomplete"),
            Self::CountryUnresolved { .. } => write!(f, "country unresolved"),
            Self::DuplicateName { .. } => write!(f, "duplicate name"),
            Self::DuplicateContactNumber { .. } => write!(f, "duplicate contact number"),
        }
    }
}

impl std::error::Error for DomainError {}
