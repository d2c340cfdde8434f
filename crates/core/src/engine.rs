// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::EngineError;
use crate::outcome::{DiscountOutcome, ReleaseOutcome, SeatOutcome, UpdateOutcome};
use crate::state::BookingState;
use railbook_domain::{
    Price, Section, SeatNumber, Ticket, TicketId, discount_value, eq_ignore_case,
};

/// A ticket purchase request.
///
/// Intent as data only; the engine derives the section, seat, and id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRequest {
    /// The journey origin label.
    pub origin: String,
    /// The journey destination label.
    pub destination: String,
    /// The purchasing user's name.
    pub user_name: String,
    /// The purchasing user's email.
    pub user_email: String,
    /// The requested price before any discount.
    pub price: Price,
    /// An optional discount code.
    pub discount_code: Option<String>,
}

/// Purchases a ticket, allocating a section and seat.
///
/// A known discount code is subtracted from the requested price unless
/// the deduction would make it negative, in which case the discount is
/// rejected and the price left unchanged. Unknown codes are silently
/// ignored. Section allocation is greedy-first-fit on A before B; seat
/// allocation picks the lowest unoccupied number in the section's
/// block.
///
/// # Arguments
///
/// * `state` - The booking state to mutate
/// * `request` - The purchase request
///
/// # Returns
///
/// * `Ok(Ticket)` with the created ticket
/// * `Err(EngineError::CapacityExceeded)` if both sections are full
///
/// # Errors
///
/// Returns an error if both sections are full. On failure nothing is
/// mutated: no ticket is created and no seat is marked occupied.
pub fn purchase(state: &mut BookingState, request: PurchaseRequest) -> Result<Ticket, EngineError> {
    let price_paid: Price = match request.discount_code.as_deref().and_then(discount_value) {
        Some(amount) => request.price.checked_sub(amount).unwrap_or(request.price),
        None => request.price,
    };

    let section: Section = allocate_section(state)?;
    let seat_number: SeatNumber = state
        .pool(section)
        .lowest_free()
        .ok_or(EngineError::CapacityExceeded)?;

    let ticket_id: TicketId = state.issue_ticket_id();
    state.pool_mut(section).occupy(seat_number);

    let ticket: Ticket = Ticket::new(
        ticket_id,
        request.origin,
        request.destination,
        request.user_name,
        request.user_email,
        price_paid,
        section,
        seat_number,
    );
    state.insert_ticket(ticket.clone());

    Ok(ticket)
}

/// Picks the section to allocate into: A while it has capacity, else B.
fn allocate_section(state: &BookingState) -> Result<Section, EngineError> {
    if !state.pool(Section::A).is_full() {
        Ok(Section::A)
    } else if !state.pool(Section::B).is_full() {
        Ok(Section::B)
    } else {
        Err(EngineError::CapacityExceeded)
    }
}

/// Looks up a ticket receipt by id.
///
/// Lookup never mutates state; absence is a normal outcome, not an
/// error.
#[must_use]
pub fn receipt(state: &BookingState, ticket_id: TicketId) -> Option<Ticket> {
    state.ticket(ticket_id).cloned()
}

/// Returns every ticket whose stored email matches case-insensitively.
#[must_use]
pub fn tickets_for_email(state: &BookingState, email: &str) -> Vec<Ticket> {
    state
        .tickets()
        .filter(|ticket| eq_ignore_case(&ticket.user_email, email))
        .cloned()
        .collect()
}

/// Returns every ticket whose stored section matches.
///
/// Matching follows the section recorded at purchase, not the block
/// the current seat number falls in.
#[must_use]
pub fn tickets_in_section(state: &BookingState, section: Section) -> Vec<Ticket> {
    state
        .tickets()
        .filter(|ticket| ticket.section == section)
        .cloned()
        .collect()
}

/// Applies an optional discount and an optional seat change to a
/// ticket in one call.
///
/// The two halves are independent and composable; each reports its own
/// sub-result. The discount half is applied first and is NOT rolled
/// back if the seat half is subsequently rejected. A seat move that
/// crosses into the other section's block updates the pools but leaves
/// the ticket's stored section untouched.
///
/// # Arguments
///
/// * `state` - The booking state to mutate
/// * `ticket_id` - The ticket to update
/// * `new_seat` - The requested seat number, if any
/// * `discount_code` - The discount code, if any
#[must_use]
pub fn update_booking(
    state: &mut BookingState,
    ticket_id: TicketId,
    new_seat: Option<i64>,
    discount_code: Option<&str>,
) -> UpdateOutcome {
    let Some(current) = state.ticket(ticket_id).cloned() else {
        return UpdateOutcome::TicketNotFound;
    };

    let discount: DiscountOutcome = match discount_code {
        None => DiscountOutcome::NotRequested,
        Some(code) => match discount_value(code) {
            None => DiscountOutcome::UnknownCode,
            // Rule: the stored price must be strictly greater than the
            // discount, so the remainder is strictly positive.
            Some(amount) => match current.price_paid.checked_sub(amount) {
                Some(price) if price.cents() > 0 => {
                    if let Some(ticket) = state.ticket_mut(ticket_id) {
                        ticket.price_paid = price;
                    }
                    DiscountOutcome::Applied { price }
                }
                _ => DiscountOutcome::ExceedsPrice,
            },
        },
    };

    let seat: SeatOutcome = match new_seat {
        None => SeatOutcome::NotRequested,
        Some(requested) => match SeatNumber::new(requested) {
            Err(_) => SeatOutcome::OutOfRange { requested },
            Ok(seat_number) => {
                // Occupancy is checked system-wide, across both pools.
                if state.is_seat_occupied(seat_number) {
                    SeatOutcome::Occupied { seat: seat_number }
                } else {
                    state.pool_mut(current.section).release(current.seat_number);
                    state.pool_mut(seat_number.section()).occupy(seat_number);
                    if let Some(ticket) = state.ticket_mut(ticket_id) {
                        ticket.seat_number = seat_number;
                    }
                    SeatOutcome::Updated { seat: seat_number }
                }
            }
        },
    };

    let ticket: Ticket = state.ticket(ticket_id).cloned().unwrap_or(current);
    UpdateOutcome::Updated {
        discount,
        seat,
        ticket,
    }
}

/// Deletes the first ticket whose username matches, releasing its
/// seat.
///
/// Only one ticket is deleted per call even if the user holds several.
/// The registry entry is removed only if the pool actually held the
/// ticket's seat; if the release found nothing the ticket is kept and
/// reported as `SeatMissing` so an inconsistency never silently drops
/// a live booking.
///
/// # Arguments
///
/// * `state` - The booking state to mutate
/// * `user_name` - The username to match case-insensitively
#[must_use]
pub fn release_booking(state: &mut BookingState, user_name: &str) -> ReleaseOutcome {
    let matched: Option<Ticket> = state
        .tickets()
        .find(|ticket| eq_ignore_case(&ticket.user_name, user_name))
        .cloned();

    let Some(ticket) = matched else {
        return ReleaseOutcome::NotFound;
    };

    let released: bool = state.pool_mut(ticket.section).release(ticket.seat_number);
    if released {
        state.remove_ticket(ticket.ticket_id);
        ReleaseOutcome::Removed(ticket)
    } else {
        ReleaseOutcome::SeatMissing(ticket)
    }
}
