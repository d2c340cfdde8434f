// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use railbook_domain::Section;
use serde::{Deserialize, Serialize};

/// The generic response envelope carried by every endpoint.
///
/// `status` is the envelope status, which can differ from the HTTP
/// status: seat rejections embed 400 here while the transport still
/// answers 200.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// The envelope status code.
    pub status: u16,
    /// A human-readable message from the fixed taxonomy.
    pub message: String,
    /// The operation payload, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Creates an envelope with an explicit status.
    #[must_use]
    pub const fn new(status: u16, message: String, data: Option<T>) -> Self {
        Self {
            status,
            message,
            data,
        }
    }

    /// Creates a 200 envelope.
    #[must_use]
    pub fn ok(message: &str, data: Option<T>) -> Self {
        Self::new(200, message.to_string(), data)
    }
}

/// API request to purchase a ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseTicketRequest {
    /// The journey origin label.
    pub origin: String,
    /// The journey destination label.
    pub destination: String,
    /// The purchasing user's name.
    pub user_name: String,
    /// The purchasing user's email.
    pub user_email: String,
    /// The requested price as a decimal amount.
    pub price_paid: f64,
    /// An optional discount code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
}

/// External representation of a ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    /// The unique ticket identifier.
    pub ticket_id: u64,
    /// The journey origin label.
    pub origin: String,
    /// The journey destination label.
    pub destination: String,
    /// The user's name.
    pub user_name: String,
    /// The user's email.
    pub user_email: String,
    /// The price paid as a decimal amount.
    pub price_paid: f64,
    /// The section assigned at purchase.
    pub section: Section,
    /// The currently allocated seat number.
    pub seat_number: u8,
}
