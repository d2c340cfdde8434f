// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiResponse, PurchaseTicketRequest, TicketDto, purchase_ticket};
use railbook::BookingState;

/// Creates a purchase request DTO for a named user.
pub fn create_purchase_request(user_name: &str, user_email: &str) -> PurchaseTicketRequest {
    PurchaseTicketRequest {
        origin: String::from("London"),
        destination: String::from("Paris"),
        user_name: user_name.to_string(),
        user_email: user_email.to_string(),
        price_paid: 20.0,
        discount: None,
    }
}

/// Purchases a ticket through the API layer, returning the DTO.
pub fn purchase_one(state: &mut BookingState, user_name: &str, user_email: &str) -> TicketDto {
    let response: ApiResponse<TicketDto> =
        purchase_ticket(state, &create_purchase_request(user_name, user_email))
            .expect("purchase should succeed");
    response.data.expect("purchase response should carry data")
}
