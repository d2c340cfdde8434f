// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use railbook_domain::{Price, SeatNumber, Ticket};

/// The result of the discount half of a combined update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscountOutcome {
    /// No discount code was supplied.
    NotRequested,
    /// The discount was subtracted from the stored price.
    Applied {
        /// The price after the discount.
        price: Price,
    },
    /// The discount is not strictly less than the stored price; the
    /// price is unchanged.
    ExceedsPrice,
    /// The code has no value in the catalogue; the price is unchanged.
    UnknownCode,
}

/// The result of the seat half of a combined update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatOutcome {
    /// No seat number was supplied.
    NotRequested,
    /// The ticket now holds the new seat.
    Updated {
        /// The newly allocated seat.
        seat: SeatNumber,
    },
    /// The requested seat number lies outside the valid range.
    OutOfRange {
        /// The rejected seat number.
        requested: i64,
    },
    /// The requested seat is already occupied; the ticket's seat is
    /// unchanged.
    Occupied {
        /// The rejected seat.
        seat: SeatNumber,
    },
}

/// The combined result of a seat/discount update.
///
/// The two halves are independent: a discount already applied is not
/// rolled back when the seat half is rejected. Callers compose their
/// status message from both sub-results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No ticket with the requested id exists; nothing was changed.
    TicketNotFound,
    /// The ticket exists; each half carries its own sub-result.
    Updated {
        /// The discount sub-result.
        discount: DiscountOutcome,
        /// The seat sub-result.
        seat: SeatOutcome,
        /// The ticket after both halves ran.
        ticket: Ticket,
    },
}

/// The result of a delete-by-username operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The ticket was removed and its seat released.
    Removed(Ticket),
    /// The pool did not hold the ticket's seat; the ticket was kept
    /// as a consistency guard. The matched ticket's data is still
    /// returned.
    SeatMissing(Ticket),
    /// No ticket matched the username; nothing was changed.
    NotFound,
}
