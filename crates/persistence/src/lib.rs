// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Umbrella customer service.
//!
//! Customers live in an ordered in-memory collection for the lifetime of
//! the process. Nothing is written to disk; a restart starts empty.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod repository;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use repository::CustomerRepository;
