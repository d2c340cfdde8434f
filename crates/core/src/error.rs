// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can abort a booking operation.
///
/// Everything else the engine reports (absent tickets, rejected seats,
/// skipped discounts) is a normal structured outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Both sections are full; no ticket can be created.
    CapacityExceeded,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityExceeded => {
                write!(f, "No available seats in either section")
            }
        }
    }
}

impl std::error::Error for EngineError {}
