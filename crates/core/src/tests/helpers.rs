// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingState, PurchaseRequest, purchase};
use railbook_domain::{Price, Ticket};

/// Creates a purchase request for a named user at 20.00 with no
/// discount.
pub fn create_test_request(user_name: &str, user_email: &str) -> PurchaseRequest {
    PurchaseRequest {
        origin: String::from("London"),
        destination: String::from("Paris"),
        user_name: user_name.to_string(),
        user_email: user_email.to_string(),
        price: Price::from_cents(2_000),
        discount_code: None,
    }
}

/// Purchases `count` tickets for distinct users, returning them in
/// purchase order.
pub fn purchase_many(state: &mut BookingState, count: usize) -> Vec<Ticket> {
    (0..count)
        .map(|n| {
            let request: PurchaseRequest =
                create_test_request(&format!("user-{n}"), &format!("user-{n}@example.com"));
            purchase(state, request).expect("purchase should succeed while capacity remains")
        })
        .collect()
}
