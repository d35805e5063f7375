// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request payload decoding.
//!
//! Payloads are checked against a declarative schema before any value is
//! extracted. The schema lists every field the decoder understands, whether
//! it must be present, and what shape its value has. Required-field checking
//! walks the schema in declaration order and reports the first field that is
//! missing, `null`, or an empty string. Nested records are only checked when
//! the record itself is required and present.

use serde_json::{Map, Value};
use umbrella_domain::{Address, Customer};

use crate::error::ApiError;

/// A decoded JSON object.
pub type Payload = Map<String, Value>;

/// The expected shape of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON string.
    Text,
    /// A JSON object described by its own schema.
    Record(&'static [FieldSpec]),
    /// A JSON array whose elements are never read.
    List,
}

/// A single entry in a payload schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The JSON key.
    pub name: &'static str,
    /// Whether the field must be present and non-empty.
    pub required: bool,
    /// The expected value shape.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Declares a field that must be present.
    #[must_use]
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            required: true,
            kind,
        }
    }

    /// Declares a field that may be absent.
    #[must_use]
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            required: false,
            kind,
        }
    }
}

/// Schema for an address object.
///
/// City and country are not marked required here; completeness is a
/// business rule checked after decoding.
pub const ADDRESS_SCHEMA: &[FieldSpec] = &[
    FieldSpec::optional("city", FieldKind::Text),
    FieldSpec::optional("country", FieldKind::Text),
];

/// Schema for a customer upsert payload.
pub const CUSTOMER_SCHEMA: &[FieldSpec] = &[
    FieldSpec::optional("id", FieldKind::Text),
    FieldSpec::required("name", FieldKind::Text),
    FieldSpec::optional("contact", FieldKind::Text),
    FieldSpec::required("contact_number", FieldKind::Text),
    FieldSpec::required("address", FieldKind::Record(ADDRESS_SCHEMA)),
    FieldSpec::optional("weather", FieldKind::List),
];

/// Parses a raw request body into a payload.
///
/// An empty body (or a literal `null`) is treated as an empty object so that
/// the caller sees the first missing required field rather than a decode
/// failure.
///
/// # Errors
///
/// Returns `ApiError::Decode` if the body is not valid JSON or is not an
/// object.
pub fn parse_payload(body: &[u8]) -> Result<Payload, ApiError> {
    if body.trim_ascii().is_empty() {
        return Ok(Payload::new());
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| ApiError::Decode {
        message: e.to_string(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Payload::new()),
        _ => Err(ApiError::Decode {
            message: String::from("expected a JSON object"),
        }),
    }
}

/// Checks `payload` against `schema`.
///
/// Value shapes are checked first, then required fields.
///
/// # Errors
///
/// Returns `ApiError::Decode` for a value of the wrong shape and
/// `ApiError::Validation` for the first missing required field.
pub fn validate_payload(payload: &Payload, schema: &[FieldSpec]) -> Result<(), ApiError> {
    check_kinds(payload, schema)?;
    check_required(Some(payload), schema)
}

fn check_kinds(payload: &Payload, schema: &[FieldSpec]) -> Result<(), ApiError> {
    for field in schema {
        let Some(value) = present(payload, field.name) else {
            continue;
        };

        match field.kind {
            FieldKind::Text if !value.is_string() => {
                return Err(ApiError::Decode {
                    message: format!("{}: expected a string", field.name),
                });
            }
            FieldKind::Record(nested) => {
                let Some(record) = value.as_object() else {
                    return Err(ApiError::Decode {
                        message: format!("{}: expected an object", field.name),
                    });
                };
                check_kinds(record, nested)?;
            }
            FieldKind::List if !value.is_array() => {
                return Err(ApiError::Decode {
                    message: format!("{}: expected an array", field.name),
                });
            }
            _ => {}
        }
    }

    Ok(())
}

fn check_required(payload: Option<&Payload>, schema: &[FieldSpec]) -> Result<(), ApiError> {
    for field in schema.iter().filter(|field| field.required) {
        let Some(value) = payload.and_then(|map| present(map, field.name)) else {
            return Err(ApiError::required(field.name));
        };

        match field.kind {
            FieldKind::Text if value.as_str().is_some_and(str::is_empty) => {
                return Err(ApiError::required(field.name));
            }
            FieldKind::Record(nested) => check_required(value.as_object(), nested)?,
            _ => {}
        }
    }

    Ok(())
}

/// Returns the value for `key`, treating `null` as absent.
fn present<'a>(payload: &'a Payload, key: &str) -> Option<&'a Value> {
    payload.get(key).filter(|value| !value.is_null())
}

fn text<'a>(payload: &'a Payload, key: &str) -> &'a str {
    payload.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn optional_text(payload: &Payload, key: &str) -> Option<String> {
    Some(text(payload, key))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Decodes a customer from an upsert payload.
///
/// An empty `id` is treated as absent. A `weather` array supplied by the
/// caller is discarded once its shape has been checked.
///
/// # Errors
///
/// Returns an error if the payload does not satisfy [`CUSTOMER_SCHEMA`].
pub fn decode_customer(payload: &Payload) -> Result<Customer, ApiError> {
    validate_payload(payload, CUSTOMER_SCHEMA)?;

    let address: Address = payload
        .get("address")
        .and_then(Value::as_object)
        .map(|record| Address::new(text(record, "city"), text(record, "country")))
        .unwrap_or_default();

    Ok(Customer {
        id: optional_text(payload, "id"),
        name: text(payload, "name").to_string(),
        contact: optional_text(payload, "contact"),
        contact_number: text(payload, "contact_number").to_string(),
        address,
        weather: Vec::new(),
    })
}
