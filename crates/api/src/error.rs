// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use railbook::EngineError;
use thiserror::Error;

/// API-level errors.
///
/// These are the only conditions that escape the response envelope and
/// surface as transport-level failures. Everything else (absent
/// tickets, rejected seats, unknown discount codes) is reported inside
/// a 200 envelope per the message taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Both sections are full at purchase time.
    #[error("No available seats in either section")]
    CapacityExceeded,
    /// The request carried a price that is not a representable amount.
    #[error("Invalid price: {message}")]
    InvalidPrice {
        /// A human-readable description of the problem.
        message: String,
    },
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::CapacityExceeded => Self::CapacityExceeded,
        }
    }
}
