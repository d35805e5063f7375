// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tracing::debug;
use umbrella_domain::Customer;

use crate::error::PersistenceError;

/// An ordered, in-memory collection of customers.
///
/// Insertion order is preserved and updates happen in place, so a
/// snapshot always lists customers in the order they were created.
/// Every stored customer has an identifier and no identifier appears
/// twice.
///
/// The repository is not synchronized; callers that share it must guard
/// it with a single lock.
#[derive(Debug, Clone, Default)]
pub struct CustomerRepository {
    customers: Vec<Customer>,
}

impl CustomerRepository {
    /// Creates an empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            customers: Vec::new(),
        }
    }

    /// Creates a repository pre-populated with `customers`.
    ///
    /// # Errors
    ///
    /// Returns an error if any customer lacks an identifier or two share one.
    pub fn with_customers(customers: Vec<Customer>) -> Result<Self, PersistenceError> {
        let mut repository: Self = Self::new();
        for customer in customers {
            repository.append(customer)?;
        }
        Ok(repository)
    }

    /// Returns every customer in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Customer] {
        &self.customers
    }

    /// Returns an owned copy of every customer in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Customer> {
        self.customers.clone()
    }

    /// Returns the number of stored customers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Returns whether the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Looks up a customer by identifier.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|customer| customer.id() == Some(id))
    }

    /// Appends a new customer to the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The customer has no identifier
    /// - The identifier is already in use
    pub fn append(&mut self, customer: Customer) -> Result<&Customer, PersistenceError> {
        let id: &str = customer.id().ok_or(PersistenceError::MissingId)?;
        if self.find(id).is_some() {
            return Err(PersistenceError::DuplicateId(id.to_string()));
        }

        let position: usize = self.customers.len();
        debug!(customer_id = %id, position, "Appending customer");
        self.customers.push(customer);
        Ok(&self.customers[position])
    }

    /// Overwrites the stored customer with the same identifier, keeping
    /// its position.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The customer has no identifier
    /// - No stored customer has that identifier
    pub fn replace(&mut self, customer: Customer) -> Result<&Customer, PersistenceError> {
        let id: &str = customer.id().ok_or(PersistenceError::MissingId)?;
        let slot: &mut Customer = self
            .customers
            .iter_mut()
            .find(|existing| existing.id() == Some(id))
            .ok_or_else(|| PersistenceError::CustomerNotFound(id.to_string()))?;

        debug!(customer_id = %id, "Replacing customer");
        *slot = customer;
        Ok(&*slot)
    }
}
