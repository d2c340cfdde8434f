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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod engine;
mod error;
mod outcome;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use engine::{
    PurchaseRequest, purchase, receipt, release_booking, tickets_for_email, tickets_in_section,
    update_booking,
};
pub use error::EngineError;
pub use outcome::{DiscountOutcome, ReleaseOutcome, SeatOutcome, UpdateOutcome};
pub use state::{BookingState, SectionPool};
