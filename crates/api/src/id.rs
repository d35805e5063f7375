// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Customer identifier generation.

use std::fmt::Debug;

/// Source of opaque customer identifiers.
pub trait IdGenerator: Send + Sync + Debug {
    /// Returns a fresh identifier.
    fn generate(&self) -> String;
}

/// Generates 128-bit random identifiers rendered as 32 lowercase hex digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        format!("{:032x}", rand::random::<u128>())
    }
}
