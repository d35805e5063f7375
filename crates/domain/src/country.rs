// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! ISO-3166 country resolution.
//!
//! Addresses carry a free-text country supplied by the caller. Before a
//! forecast can be requested the text must be reduced to a single alpha-2
//! code. Resolution tries, in order:
//!
//! 1. an exact (case-insensitive) match on the country's ISO short name,
//! 2. the text as an alpha-2 code,
//! 3. the text as an alpha-3 code.

use std::fmt::Debug;

use isocountry::CountryCode;

/// Maps free-text country names or codes to a canonical alpha-2 code.
pub trait CountryResolver: Send + Sync + Debug {
    /// Resolves `text` to an ISO-3166 alpha-2 code.
    ///
    /// Returns `None` when the text does not identify exactly one country.
    fn resolve(&self, text: &str) -> Option<String>;
}

/// Resolver backed by the `isocountry` ISO-3166-1 registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoCountryResolver;

impl IsoCountryResolver {
    /// Creates a new resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns every country whose ISO short name equals `name`, ignoring case.
    #[must_use]
    pub fn find_by_name(name: &str) -> Vec<CountryCode> {
        let wanted: String = name.to_lowercase();
        CountryCode::iter()
            .filter(|country| country.name().to_lowercase() == wanted)
            .copied()
            .collect()
    }

    /// Looks up a country by its alpha-2 code, ignoring case.
    #[must_use]
    pub fn by_alpha2(code: &str) -> Option<CountryCode> {
        if code.len() != 2 {
            return None;
        }
        CountryCode::for_alpha2(&code.to_ascii_uppercase()).ok()
    }

    /// Looks up a country by its alpha-3 code, ignoring case.
    #[must_use]
    pub fn by_alpha3(code: &str) -> Option<CountryCode> {
        if code.len() != 3 {
            return None;
        }
        CountryCode::for_alpha3(&code.to_ascii_uppercase()).ok()
    }
}

impl CountryResolver for IsoCountryResolver {
    fn resolve(&self, text: &str) -> Option<String> {
        if let [country] = Self::find_by_name(text).as_slice() {
            return Some(country.alpha2().to_string());
        }

        Self::by_alpha2(text)
            .or_else(|| Self::by_alpha3(text))
            .map(|country| country.alpha2().to_string())
    }
}
