// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A customer without an identifier cannot be stored.
    MissingId,
    /// The identifier is already held by another customer.
    DuplicateId(String),
    /// No customer has the requested identifier.
    CustomerNotFound(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingId => write!(f, "customer has no id"),
            Self::DuplicateId(id) => write!(f, "customer id {id} already in use"),
            Self::CustomerNotFound(id) => write!(f, "no customer with id {id}"),
        }
    }
}

impl std::error::Error for PersistenceError {}
