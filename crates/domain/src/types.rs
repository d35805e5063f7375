// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A category of weather the service knows how to report.
///
/// Only rain is tracked today; provider categories without a mapping here
/// are dropped during translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherType {
    /// Precipitation in the form of rain.
    Rain,
}

impl WeatherType {
    /// Every known weather category.
    pub const ALL: &'static [Self] = &[Self::Rain];

    /// Converts this weather type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rain => "Rain",
        }
    }
}

impl std::fmt::Display for WeatherType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single forecast observation attached to a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weather {
    /// When the observation applies (UTC).
    pub date: DateTime<Utc>,
    /// The observed weather category.
    #[serde(rename = "type")]
    pub kind: WeatherType,
}

impl Weather {
    /// Creates a new `Weather` observation.
    #[must_use]
    pub const fn new(date: DateTime<Utc>, kind: WeatherType) -> Self {
        Self { date, kind }
    }
}

/// A closed interval of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Inclusive lower bound.
    pub start: DateTime<Utc>,
    /// Inclusive upper bound.
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a new `DateRange`.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Returns whether `instant` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// A physical address.
///
/// `country` is kept exactly as the caller supplied it. `country_code` is
/// derived from it during normalization and is never taken from input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// City name.
    pub city: String,
    /// Country name or ISO code as supplied by the caller.
    pub country: String,
    /// Resolved ISO-3166 alpha-2 code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

impl Address {
    /// Creates an unresolved address.
    #[must_use]
    pub fn new(city: &str, country: &str) -> Self {
        Self {
            city: city.to_string(),
            country: country.to_string(),
            country_code: None,
        }
    }

    /// Returns whether both city and country are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.city.is_empty() && !self.country.is_empty()
    }

    /// Returns whether `other` refers to the same location.
    ///
    /// Compares city, country text and resolved code.
    #[must_use]
    pub fn same_location(&self, other: &Self) -> bool {
        self.city == other.city
            && self.country == other.country
            && self.country_code == other.country_code
    }
}

/// A customer record.
///
/// `id` is `None` until the repository assigns one. Once assigned it never
/// changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Server-assigned opaque identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name. Unique across customers, ignoring case.
    pub name: String,
    /// Optional free-text contact note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    /// Contact number. Unique across customers.
    pub contact_number: String,
    /// Where the customer is located.
    pub address: Address,
    /// Upcoming weather for the customer's address.
    #[serde(default)]
    pub weather: Vec<Weather>,
}

impl Customer {
    /// Creates a customer that has not been stored yet.
    #[must_use]
    pub fn new(name: &str, contact_number: &str, address: Address) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            contact: None,
            contact_number: contact_number.to_string(),
            address,
            weather: Vec::new(),
        }
    }

    /// Returns the identifier, if one has been assigned.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns whether `other` has the same name, ignoring case.
    #[must_use]
    pub fn same_name(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}
