// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Price;

/// Looks up a discount code in the fixed catalogue.
///
/// The catalogue maps each known code to a flat deduction amount.
/// Unknown codes return `None`; they are never an error.
///
/// # Arguments
///
/// * `code` - The discount code to look up
#[must_use]
pub fn discount_value(code: &str) -> Option<Price> {
    match code {
        "DISCOUNT1" => Some(Price::from_cents(100)),
        "DISCOUNT2" => Some(Price::from_cents(200)),
        "DISCOUNT3" => Some(Price::from_cents(1_000)),
        _ => None,
    }
}
