// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents one of the two fixed seat sections on the train.
///
/// Each section owns a contiguous block of seat numbers: section A
/// covers seats 1 through 20, section B covers seats 21 through 40.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Section A, seats 1-20.
    A,
    /// Section B, seats 21-40.
    B,
}

impl Section {
    /// The number of seats in each section.
    pub const CAPACITY: u8 = 20;

    /// Converts this section to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }

    /// Returns the lowest seat number in this section's block.
    #[must_use]
    pub const fn first_seat(&self) -> u8 {
        match self {
            Self::A => 1,
            Self::B => Self::CAPACITY + 1,
        }
    }

    /// Returns the highest seat number in this section's block.
    #[must_use]
    pub const fn last_seat(&self) -> u8 {
        match self {
            Self::A => Self::CAPACITY,
            Self::B => Self::CAPACITY * 2,
        }
    }
}

impl FromStr for Section {
    type Err = DomainError;

    /// Parses a section identifier case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            other => Err(DomainError::InvalidSection(other.to_string())),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a validated seat number.
///
/// Seat numbers are globally unique across the train: the two section
/// blocks partition the range 1-40, so a seat number alone identifies
/// both the physical seat and the section block it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatNumber {
    /// The seat number value (1-40).
    value: u8,
}

impl SeatNumber {
    /// The lowest valid seat number.
    pub const MIN: u8 = 1;
    /// The highest valid seat number across both sections.
    pub const MAX: u8 = Section::CAPACITY * 2;

    /// Creates a new `SeatNumber`.
    ///
    /// # Arguments
    ///
    /// * `value` - The seat number value
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeatOutOfRange` if the value is outside
    /// the range 1-40.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if !(i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            return Err(DomainError::SeatOutOfRange {
                seat: value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self { value: value as u8 })
    }

    /// Returns the seat number value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns the section whose seat block contains this seat number.
    #[must_use]
    pub const fn section(&self) -> Section {
        if self.value <= Section::CAPACITY {
            Section::A
        } else {
            Section::B
        }
    }
}

impl std::fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a unique ticket identifier.
///
/// Ticket ids are issued by the booking engine from a monotonically
/// increasing counter and are never reused while the process lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketId {
    /// The numeric identifier.
    value: u64,
}

impl TicketId {
    /// Creates a new `TicketId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The numeric identifier
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self { value }
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a currency amount in fixed-point cents.
///
/// Amounts are stored as integer cents to keep discount comparisons
/// exact. The wire representation is a decimal number; conversion
/// happens at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    /// The amount in cents.
    cents: i64,
}

impl Price {
    /// Creates a `Price` from an amount in cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a `Price` from a decimal amount, rounding to cents.
    ///
    /// # Arguments
    ///
    /// * `value` - The decimal amount (e.g., 12.50)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the value is not finite
    /// or is negative.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_decimal(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::InvalidPrice(format!(
                "Price must be a finite number, got {value}"
            )));
        }
        if value < 0.0 {
            return Err(DomainError::InvalidPrice(format!(
                "Price cannot be negative, got {value}"
            )));
        }
        Ok(Self {
            cents: (value * 100.0).round() as i64,
        })
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the amount as a decimal number.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Subtracts another price, returning `None` if the result would
    /// be negative.
    #[must_use]
    pub const fn checked_sub(&self, other: Self) -> Option<Self> {
        let cents: i64 = self.cents - other.cents;
        if cents < 0 {
            None
        } else {
            Some(Self { cents })
        }
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, (self.cents % 100).abs())
    }
}

/// Represents a booked ticket.
///
/// A ticket is created only by a successful purchase and destroyed
/// only by a successful delete. The section is fixed at purchase time;
/// only the seat number may change afterwards, and a seat update that
/// crosses into the other section's block deliberately does not touch
/// the stored section (mirroring the observable behavior this engine
/// preserves).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// The unique ticket identifier.
    pub ticket_id: TicketId,
    /// The journey origin label.
    pub origin: String,
    /// The journey destination label.
    pub destination: String,
    /// The purchasing user's name.
    pub user_name: String,
    /// The purchasing user's email.
    pub user_email: String,
    /// The price paid, after any discount.
    pub price_paid: Price,
    /// The section assigned at purchase.
    pub section: Section,
    /// The currently allocated seat number.
    pub seat_number: SeatNumber,
}

impl Ticket {
    /// Creates a new `Ticket`.
    ///
    /// # Arguments
    ///
    /// * `ticket_id` - The unique ticket identifier
    /// * `origin` - The journey origin label
    /// * `destination` - The journey destination label
    /// * `user_name` - The purchasing user's name
    /// * `user_email` - The purchasing user's email
    /// * `price_paid` - The price paid, after any discount
    /// * `section` - The section assigned at purchase
    /// * `seat_number` - The allocated seat number
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        ticket_id: TicketId,
        origin: String,
        destination: String,
        user_name: String,
        user_email: String,
        price_paid: Price,
        section: Section,
        seat_number: SeatNumber,
    ) -> Self {
        Self {
            ticket_id,
            origin,
            destination,
            user_name,
            user_email,
            price_paid,
            section,
            seat_number,
        }
    }
}
