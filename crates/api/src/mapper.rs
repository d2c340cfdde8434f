// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::TicketDto;
use railbook_domain::Ticket;

/// Converts an internal `Ticket` into its external representation.
#[must_use]
pub fn ticket_to_dto(ticket: &Ticket) -> TicketDto {
    TicketDto {
        ticket_id: ticket.ticket_id.value(),
        origin: ticket.origin.clone(),
        destination: ticket.destination.clone(),
        user_name: ticket.user_name.clone(),
        user_email: ticket.user_email.clone(),
        price_paid: ticket.price_paid.as_decimal(),
        section: ticket.section,
        seat_number: ticket.seat_number.value(),
    }
}
