// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::country::CountryResolver;
use crate::error::DomainError;
use crate::types::{Address, Customer};

/// Minimum number of characters in a contact number.
pub const CONTACT_NUMBER_MIN_LENGTH: usize = 7;

/// Validates a customer's business rules.
///
/// Required-field presence is checked by the request decoder; this
/// function checks what the decoder cannot:
///
/// - the contact number is at least [`CONTACT_NUMBER_MIN_LENGTH`] characters
/// - the address is complete and its country resolves
///
/// It does NOT check for uniqueness (that requires context).
///
/// # Errors
///
/// Returns the first rule that fails, in the order listed above.
pub fn validate_customer_fields(
    customer: &Customer,
    resolver: &dyn CountryResolver,
) -> Result<(), DomainError> {
    if customer.contact_number.chars().count() < CONTACT_NUMBER_MIN_LENGTH {
        return Err(DomainError::ContactNumberTooShort {
            min_length: CONTACT_NUMBER_MIN_LENGTH,
        });
    }

    validate_address(&customer.address, resolver)
}

/// Validates that an address can be used for a forecast lookup.
///
/// # Errors
///
/// Returns an error if:
/// - The city or country is empty
/// - The country does not resolve to a single ISO code
pub fn validate_address(
    address: &Address,
    resolver: &dyn CountryResolver,
) -> Result<(), DomainError> {
    normalize_address(address, resolver).map(|_| ())
}

/// Returns a copy of `address` with its country code resolved.
///
/// Any country code already present is discarded and recomputed.
///
/// # Errors
///
/// Same as [`validate_address`].
pub fn normalize_address(
    address: &Address,
    resolver: &dyn CountryResolver,
) -> Result<Address, DomainError> {
    if !address.is_complete() {
        return Err(DomainError::AddressIncomplete);
    }

    let code: String = resolver
        .resolve(&address.country)
        .ok_or_else(|| DomainError::CountryUnresolved {
            country: address.country.clone(),
        })?;

    Ok(Address {
        city: address.city.clone(),
        country: address.country.clone(),
        country_code: Some(code),
    })
}

/// Validates that a new customer does not collide with an existing one.
///
/// Names are compared ignoring case across the whole collection before
/// contact numbers are compared, so a name conflict is always reported in
/// preference to a contact number conflict.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Errors
///
/// Returns `DuplicateName` or `DuplicateContactNumber` on the first violation.
pub fn validate_customer_unique(
    candidate: &Customer,
    existing: &[Customer],
) -> Result<(), DomainError> {
    if existing.iter().any(|customer| customer.same_name(candidate)) {
        return Err(DomainError::DuplicateName {
            name: candidate.name.clone(),
        });
    }

    if existing
        .iter()
        .any(|customer| customer.contact_number == candidate.contact_number)
    {
        return Err(DomainError::DuplicateContactNumber {
            contact_number: candidate.contact_number.clone(),
        });
    }

    Ok(())
}
