// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Section identifier is not one of the two known sections.
    InvalidSection(String),
    /// Seat number lies outside the valid seat range.
    SeatOutOfRange {
        /// The requested seat number.
        seat: i64,
        /// The lowest valid seat number.
        min: u8,
        /// The highest valid seat number.
        max: u8,
    },
    /// Price value cannot be represented as a currency amount.
    InvalidPrice(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSection(value) => {
                write!(f, "Invalid section '{value}'. Must be 'A' or 'B'")
            }
            Self::SeatOutOfRange { seat, min, max } => {
                write!(
                    f,
                    "Invalid seat number {seat}. Seat number must be between {min} and {max}"
                )
            }
            Self::InvalidPrice(msg) => write!(f, "Invalid price: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
