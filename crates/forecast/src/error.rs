// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for forecast providers.

use thiserror::Error;

/// Forecast provider errors.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The HTTP request could not be built, sent, or read.
    #[error("error making request to forecast provider: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("forecast provider returned status {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The (truncated) response body.
        body: String,
    },

    /// The response body was not a forecast document.
    #[error("error parsing response from forecast provider: {0}")]
    Parse(#[from] serde_json::Error),

    /// The provider was configured incorrectly.
    #[error("invalid forecast configuration: {0}")]
    Config(String),
}
