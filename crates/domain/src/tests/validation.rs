// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Address, Customer, DomainError, IsoCountryResolver, normalize_address,
    validate_customer_fields, validate_customer_unique,
};

fn create_test_customer(name: &str, contact_number: &str) -> Customer {
    Customer::new(name, contact_number, Address::new("Toronto", "CA"))
}

fn validate(customer: &Customer) -> Result<(), DomainError> {
    validate_customer_fields(customer, &IsoCountryResolver::new())
}

#[test]
fn test_validate_customer_fields_rejects_empty_contact_number() {
    let customer: Customer = create_test_customer("Awesome Company", "");

    let result: Result<(), DomainError> = validate(&customer);
    assert_eq!(
        result,
        Err(DomainError::ContactNumberTooShort { min_length: 7 })
    );
}

#[test]
fn test_validate_customer_fields_rejects_short_contact_number() {
    let customer: Customer = create_test_customer("Awesome Company", "3848");

    let result: Result<(), DomainError> = validate(&customer);
    assert!(matches!(
        result,
        Err(DomainError::ContactNumberTooShort { .. })
    ));
}

#[test]
fn test_validate_customer_fields_accepts_seven_character_contact_number() {
    let customer: Customer = create_test_customer("Awesome Company", "5555555");

    assert!(validate(&customer).is_ok());
}

#[test]
fn test_validate_customer_fields_checks_contact_before_address() {
    let customer: Customer = Customer::new("Awesome Company", "123", Address::default());

    let result: Result<(), DomainError> = validate(&customer);
    assert!(matches!(
        result,
        Err(DomainError::ContactNumberTooShort { .. })
    ));
}

#[test]
fn test_validate_customer_fields_rejects_city_only() {
    let customer: Customer =
        Customer::new("Awesome Company", "4165555555", Address::new("Toronto", ""));

    assert_eq!(validate(&customer), Err(DomainError::AddressIncomplete));
}

#[test]
fn test_validate_customer_fields_rejects_country_only() {
    let customer: Customer = Customer::new("Awesome Company", "4165555555", Address::new("", "CA"));

    assert_eq!(validate(&customer), Err(DomainError::AddressIncomplete));
}

#[test]
fn test_validate_customer_fields_rejects_unknown_country() {
    let customer: Customer = Customer::new(
        "Awesome Company",
        "4165555555",
        Address::new("Toronto", "Fake Country"),
    );

    assert_eq!(
        validate(&customer),
        Err(DomainError::CountryUnresolved {
            country: String::from("Fake Country"),
        })
    );
}

#[test]
fn test_validate_customer_fields_accepts_known_locations() {
    for (city, country) in [
        ("Toronto", "Canada"),
        ("Toronto", "CA"),
        ("Chicago", "US"),
        ("Chicago", "USA"),
    ] {
        let customer: Customer =
            Customer::new("Awesome Company", "4165555555", Address::new(city, country));
        assert!(validate(&customer).is_ok(), "{city}, {country}");
    }
}

#[test]
fn test_normalize_address_sets_country_code() {
    let address: Address = Address::new("Toronto", "Canada");

    let normalized: Address = normalize_address(&address, &IsoCountryResolver::new()).unwrap();

    assert_eq!(normalized.city, "Toronto");
    assert_eq!(normalized.country, "Canada");
    assert_eq!(normalized.country_code.as_deref(), Some("CA"));
}

#[test]
fn test_normalize_address_recomputes_existing_code() {
    let mut address: Address = Address::new("Chicago", "USA");
    address.country_code = Some(String::from("CA"));

    let normalized: Address = normalize_address(&address, &IsoCountryResolver::new()).unwrap();

    assert_eq!(normalized.country_code.as_deref(), Some("US"));
}

#[test]
fn test_validate_customer_unique_with_no_existing_customers() {
    let candidate: Customer = create_test_customer("Awesome Company", "5165555555");

    assert!(validate_customer_unique(&candidate, &[]).is_ok());
}

#[test]
fn test_validate_customer_unique_rejects_existing_name() {
    let existing: Vec<Customer> = vec![create_test_customer("Awesome Company", "5165555555")];
    let candidate: Customer = create_test_customer("Awesome Company", "5165555558");

    let result: Result<(), DomainError> = validate_customer_unique(&candidate, &existing);
    assert!(matches!(result, Err(DomainError::DuplicateName { .. })));
}

#[test]
fn test_validate_customer_unique_rejects_name_differing_only_by_case() {
    let existing: Vec<Customer> = vec![create_test_customer("Awesome Company", "5165555555")];
    let candidate: Customer = create_test_customer("awesome COMPANY", "5165555558");

    let result: Result<(), DomainError> = validate_customer_unique(&candidate, &existing);
    assert!(matches!(result, Err(DomainError::DuplicateName { .. })));
}

#[test]
fn test_validate_customer_unique_rejects_existing_contact_number() {
    let existing: Vec<Customer> = vec![create_test_customer("Fortune 500 Company", "5165555555")];
    let candidate: Customer = create_test_customer("Awesome Company", "5165555555");

    let result: Result<(), DomainError> = validate_customer_unique(&candidate, &existing);
    assert_eq!(
        result,
        Err(DomainError::DuplicateContactNumber {
            contact_number: String::from("5165555555"),
        })
    );
}

#[test]
fn test_validate_customer_unique_reports_name_before_contact_number() {
    // The contact number collides with the first record and the name with
    // the second; the name conflict wins even though it is found later.
    let existing: Vec<Customer> = vec![
        create_test_customer("Fortune 500 Company", "5165555555"),
        create_test_customer("Awesome Company", "6165555555"),
    ];
    let candidate: Customer = create_test_customer("Awesome Company", "5165555555");

    let result: Result<(), DomainError> = validate_customer_unique(&candidate, &existing);
    assert!(matches!(result, Err(DomainError::DuplicateName { .. })));
}

#[test]
fn test_validate_customer_unique_accepts_net_new_customer() {
    let existing: Vec<Customer> = vec![create_test_customer("Fortune 500 Company", "5165555555")];
    let candidate: Customer = create_test_customer("Awesome Company", "5165555557");

    assert!(validate_customer_unique(&candidate, &existing).is_ok());
}
