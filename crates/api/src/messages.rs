// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed response messages for the booking API.
//!
//! Callers distinguish "found" from "not found" by message, not by
//! HTTP status, so these strings are part of the API contract.

/// Message for a successful ticket booking.
pub const TICKET_BOOKING_SUCCESSFUL: &str = "Ticket Booking Successful";

/// Message for successfully fetching a user receipt.
pub const USER_RECEIPT_FETCHED: &str = "User Receipt Fetched Successfully";

/// Message for when a ticket is not found.
pub const TICKET_NOT_FOUND: &str = "Ticket Not Found";

/// Message for when the ticket list is found.
pub const TICKET_LIST_FOUND: &str = "Ticket List Found";

/// Message for when the ticket list is not found.
pub const TICKET_LIST_NOT_FOUND: &str = "Ticket List Not Found";

/// Message for a successful seat update.
pub const USER_DETAIL_UPDATED: &str = "User Detail Updated successfully.";

/// Message for an update against a nonexistent ticket.
pub const FAILED_TO_UPDATE_USER: &str = "Failed To Update User";

/// Message for a successful user deletion.
pub const USER_DELETED: &str = "User Deleted Successfully";

/// Message for a deletion when no ticket matches the username.
pub const USER_NOT_FOUND: &str = "User not found.";

/// Message for a seat update targeting an occupied seat.
pub const SEAT_ALREADY_OCCUPIED: &str = "Seat is already occupied.";

/// Message for when tickets exist in the requested section.
pub const USERS_IN_SECTION_FOUND: &str = "Users in the specified section found.";

/// Message for when no tickets exist in the requested section.
pub const USERS_IN_SECTION_NOT_FOUND: &str = "No users found in the specified section.";

// Combined-update messages are composed from one discount fragment and
// one seat fragment.

/// Discount fragment when no code was supplied.
pub const NO_DISCOUNT_OPTED: &str = "No discount is opted for ticket and ";

/// Discount fragment when the discount was applied.
pub const DISCOUNT_APPLIED: &str = "Discount applied to price and ";

/// Discount fragment when the discount is not strictly below the price.
pub const DISCOUNT_EXCEEDS_PRICE: &str = "Discount amount is higher than booking price and ";

/// Discount fragment when the code has no catalogue value.
pub const NO_DISCOUNT_VALUE_FOUND: &str = "No discount value found for code and ";

/// Seat fragment when no seat number was supplied.
pub const NO_SEAT_UPDATE: &str = "no seat update preferred.";
