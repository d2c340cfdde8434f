// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod mapper;
pub mod messages;
mod request_response;

#[cfg(test)]
mod tests;

use std::str::FromStr;

use railbook::{
    BookingState, DiscountOutcome, PurchaseRequest, ReleaseOutcome, SeatOutcome, UpdateOutcome,
    purchase, receipt, release_booking, tickets_for_email, tickets_in_section, update_booking,
};
use railbook_domain::{DomainError, Price, Section, SeatNumber, Ticket, TicketId};

pub use error::ApiError;
pub use mapper::ticket_to_dto;
pub use request_response::{ApiResponse, PurchaseTicketRequest, TicketDto};

/// Purchases a ticket, allocating a section and seat.
///
/// # Arguments
///
/// * `state` - The booking state to mutate
/// * `request` - The purchase request DTO
///
/// # Errors
///
/// Returns `ApiError::InvalidPrice` if the request price is not a
/// representable amount, or `ApiError::CapacityExceeded` if both
/// sections are full. Both escape the envelope so the transport can
/// answer with an error status.
pub fn purchase_ticket(
    state: &mut BookingState,
    request: &PurchaseTicketRequest,
) -> Result<ApiResponse<TicketDto>, ApiError> {
    let price: Price = Price::from_decimal(request.price_paid).map_err(|err| match err {
        DomainError::InvalidPrice(message) => ApiError::InvalidPrice { message },
        other => ApiError::InvalidPrice {
            message: other.to_string(),
        },
    })?;

    let engine_request: PurchaseRequest = PurchaseRequest {
        origin: request.origin.clone(),
        destination: request.destination.clone(),
        user_name: request.user_name.clone(),
        user_email: request.user_email.clone(),
        price,
        discount_code: request.discount.clone(),
    };

    let ticket: Ticket = purchase(state, engine_request)?;
    Ok(ApiResponse::ok(
        messages::TICKET_BOOKING_SUCCESSFUL,
        Some(ticket_to_dto(&ticket)),
    ))
}

/// Fetches the receipt for a ticket id.
///
/// Absence is a 200 envelope carrying the not-found message.
#[must_use]
pub fn user_receipt(state: &BookingState, ticket_id: u64) -> ApiResponse<TicketDto> {
    receipt(state, TicketId::new(ticket_id)).map_or_else(
        || ApiResponse::ok(messages::TICKET_NOT_FOUND, None),
        |ticket| {
            ApiResponse::ok(
                messages::USER_RECEIPT_FETCHED,
                Some(ticket_to_dto(&ticket)),
            )
        },
    )
}

/// Lists every ticket held under an email address.
///
/// An empty result is reported as a distinct list-not-found envelope
/// with no payload, never as an empty list.
#[must_use]
pub fn ticket_list(state: &BookingState, email: &str) -> ApiResponse<Vec<TicketDto>> {
    let tickets: Vec<TicketDto> = tickets_for_email(state, email)
        .iter()
        .map(ticket_to_dto)
        .collect();

    if tickets.is_empty() {
        ApiResponse::ok(messages::TICKET_LIST_NOT_FOUND, None)
    } else {
        ApiResponse::ok(messages::TICKET_LIST_FOUND, Some(tickets))
    }
}

/// Applies an optional discount and an optional seat change to a
/// ticket, composing the status message from the two sub-results.
///
/// The envelope status is 400 when the seat half was rejected
/// (out-of-range or occupied); the ticket payload is attached only
/// when the seat half succeeded.
#[must_use]
pub fn update_seat_allocation(
    state: &mut BookingState,
    ticket_id: u64,
    seat_number: Option<i64>,
    discount: Option<&str>,
) -> ApiResponse<TicketDto> {
    let outcome: UpdateOutcome =
        update_booking(state, TicketId::new(ticket_id), seat_number, discount);

    let UpdateOutcome::Updated {
        discount,
        seat,
        ticket,
    } = outcome
    else {
        return ApiResponse::ok(messages::FAILED_TO_UPDATE_USER, None);
    };

    let discount_fragment: &str = match discount {
        DiscountOutcome::NotRequested => messages::NO_DISCOUNT_OPTED,
        DiscountOutcome::Applied { .. } => messages::DISCOUNT_APPLIED,
        DiscountOutcome::ExceedsPrice => messages::DISCOUNT_EXCEEDS_PRICE,
        DiscountOutcome::UnknownCode => messages::NO_DISCOUNT_VALUE_FOUND,
    };

    let (status, seat_fragment, data): (u16, String, Option<TicketDto>) = match seat {
        SeatOutcome::NotRequested => (200, messages::NO_SEAT_UPDATE.to_string(), None),
        SeatOutcome::Updated { .. } => (
            200,
            messages::USER_DETAIL_UPDATED.to_string(),
            Some(ticket_to_dto(&ticket)),
        ),
        SeatOutcome::OutOfRange { requested } => (
            400,
            format!(
                "Invalid seat number {requested}. Seat number must be between {} and {}.",
                SeatNumber::MIN,
                SeatNumber::MAX
            ),
            None,
        ),
        SeatOutcome::Occupied { .. } => (400, messages::SEAT_ALREADY_OCCUPIED.to_string(), None),
    };

    ApiResponse::new(status, format!("{discount_fragment}{seat_fragment}"), data)
}

/// Deletes the first ticket matching a username, releasing its seat.
///
/// The matched ticket's data is returned even when the consistency
/// guard keeps the registry entry because the pool did not hold the
/// seat.
#[must_use]
pub fn delete_user(state: &mut BookingState, user_name: &str) -> ApiResponse<TicketDto> {
    match release_booking(state, user_name) {
        ReleaseOutcome::Removed(ticket) | ReleaseOutcome::SeatMissing(ticket) => {
            ApiResponse::ok(messages::USER_DELETED, Some(ticket_to_dto(&ticket)))
        }
        ReleaseOutcome::NotFound => ApiResponse::ok(messages::USER_NOT_FOUND, None),
    }
}

/// Lists every ticket whose stored section matches the identifier.
///
/// An unknown section identifier matches nothing and reports the same
/// not-found envelope as an empty section; it is never a fault.
#[must_use]
pub fn users_by_section(state: &BookingState, section: &str) -> ApiResponse<Vec<TicketDto>> {
    let tickets: Vec<TicketDto> = Section::from_str(section).map_or_else(
        |_| Vec::new(),
        |section| {
            tickets_in_section(state, section)
                .iter()
                .map(ticket_to_dto)
                .collect()
        },
    );

    if tickets.is_empty() {
        ApiResponse::ok(messages::USERS_IN_SECTION_NOT_FOUND, None)
    } else {
        ApiResponse::ok(messages::USERS_IN_SECTION_FOUND, Some(tickets))
    }
}
