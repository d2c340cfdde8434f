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
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use railbook::BookingState;
use railbook_api::{
    ApiError, ApiResponse, PurchaseTicketRequest, TicketDto, delete_user, purchase_ticket,
    ticket_list, update_seat_allocation, user_receipt, users_by_section,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// RailBook Server - HTTP server for the RailBook Ticketing System
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The whole booking state sits behind one Mutex so every
/// ticket-affecting operation runs its read-check-then-write sequence
/// atomically. State is volatile by design; nothing survives a
/// restart.
#[derive(Clone)]
struct AppState {
    /// The booking engine state.
    bookings: Arc<Mutex<BookingState>>,
}

impl AppState {
    /// Creates application state with an empty booking engine.
    fn new() -> Self {
        Self {
            bookings: Arc::new(Mutex::new(BookingState::new())),
        }
    }
}

/// Query parameters for the receipt endpoint.
#[derive(Debug, Deserialize)]
struct ReceiptQuery {
    /// The ticket id.
    #[serde(rename = "ticketId")]
    ticket_id: u64,
}

/// Query parameters for the ticket list endpoint.
#[derive(Debug, Deserialize)]
struct TicketListQuery {
    /// The user's email.
    email: String,
}

/// Query parameters for the seat/discount update endpoint.
#[derive(Debug, Deserialize)]
struct UpdateQuery {
    /// The requested seat number, if any.
    #[serde(rename = "seatNumber")]
    seat_number: Option<i64>,
    /// The discount code, if any.
    discount: Option<String>,
}

/// Query parameters for the delete endpoint.
#[derive(Debug, Deserialize)]
struct DeleteQuery {
    /// The username to delete.
    #[serde(rename = "userName")]
    user_name: String,
}

/// Query parameters for the users-by-section endpoint.
#[derive(Debug, Deserialize)]
struct SectionQuery {
    /// The section identifier.
    section: String,
}

/// Error response type.
#[derive(Debug, Clone, serde::Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::CapacityExceeded => {
                error!(error = %err, "Capacity exhausted");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
            ApiError::InvalidPrice { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
        }
    }
}

/// Handler for POST `/ticket-booking`.
///
/// Purchases a ticket and allocates a seat.
async fn handle_purchase_ticket(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<PurchaseTicketRequest>,
) -> Result<Json<ApiResponse<TicketDto>>, HttpError> {
    info!(
        user_name = %request.user_name,
        origin = %request.origin,
        destination = %request.destination,
        "Handling purchase_ticket request"
    );

    let mut bookings = app_state.bookings.lock().await;
    let response: ApiResponse<TicketDto> = purchase_ticket(&mut bookings, &request)?;
    drop(bookings);

    Ok(Json(response))
}

/// Handler for GET `/ticket-booking/user-receipt-detail`.
///
/// Fetches a ticket receipt by id. Absence is a 200 with a not-found
/// message.
async fn handle_user_receipt(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ReceiptQuery>,
) -> Json<ApiResponse<TicketDto>> {
    info!(ticket_id = query.ticket_id, "Handling user_receipt request");

    let bookings = app_state.bookings.lock().await;
    let response: ApiResponse<TicketDto> = user_receipt(&bookings, query.ticket_id);
    drop(bookings);

    Json(response)
}

/// Handler for GET `/ticket-booking/ticket-list`.
///
/// Lists all tickets held under an email address.
async fn handle_ticket_list(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<TicketListQuery>,
) -> Json<ApiResponse<Vec<TicketDto>>> {
    info!(email = %query.email, "Handling ticket_list request");

    let bookings = app_state.bookings.lock().await;
    let response: ApiResponse<Vec<TicketDto>> = ticket_list(&bookings, &query.email);
    drop(bookings);

    Json(response)
}

/// Handler for PUT `/ticket-booking/{ticketId}`.
///
/// Applies an optional discount and an optional seat change. Seat
/// rejections are reported inside the envelope (status 400) while the
/// transport still answers 200.
async fn handle_update_seat_allocation(
    AxumState(app_state): AxumState<AppState>,
    Path(ticket_id): Path<u64>,
    Query(query): Query<UpdateQuery>,
) -> Json<ApiResponse<TicketDto>> {
    info!(
        ticket_id = ticket_id,
        seat_number = ?query.seat_number,
        discount = ?query.discount,
        "Handling update_seat_allocation request"
    );

    let mut bookings = app_state.bookings.lock().await;
    let response: ApiResponse<TicketDto> = update_seat_allocation(
        &mut bookings,
        ticket_id,
        query.seat_number,
        query.discount.as_deref(),
    );
    drop(bookings);

    Json(response)
}

/// Handler for DELETE `/ticket-booking`.
///
/// Deletes the first ticket matching a username and releases its seat.
async fn handle_delete_user(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Json<ApiResponse<TicketDto>> {
    info!(user_name = %query.user_name, "Handling delete_user request");

    let mut bookings = app_state.bookings.lock().await;
    let response: ApiResponse<TicketDto> = delete_user(&mut bookings, &query.user_name);
    drop(bookings);

    Json(response)
}

/// Handler for GET `/ticket-booking/users-by-section`.
///
/// Lists all tickets whose stored section matches.
async fn handle_users_by_section(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<SectionQuery>,
) -> Json<ApiResponse<Vec<TicketDto>>> {
    info!(section = %query.section, "Handling users_by_section request");

    let bookings = app_state.bookings.lock().await;
    let response: ApiResponse<Vec<TicketDto>> = users_by_section(&bookings, &query.section);
    drop(bookings);

    Json(response)
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/ticket-booking", post(handle_purchase_ticket))
        .route("/ticket-booking", delete(handle_delete_user))
        .route(
            "/ticket-booking/user-receipt-detail",
            get(handle_user_receipt),
        )
        .route("/ticket-booking/ticket-list", get(handle_ticket_list))
        .route(
            "/ticket-booking/users-by-section",
            get(handle_users_by_section),
        )
        .route(
            "/ticket-booking/{ticket_id}",
            put(handle_update_seat_allocation),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing RailBook Server");

    let app_state: AppState = AppState::new();

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use railbook_api::messages;
    use tower::ServiceExt;

    /// Helper to create a purchase request body.
    fn create_purchase_body(user_name: &str, user_email: &str) -> PurchaseTicketRequest {
        PurchaseTicketRequest {
            origin: String::from("London"),
            destination: String::from("Paris"),
            user_name: user_name.to_string(),
            user_email: user_email.to_string(),
            price_paid: 20.0,
            discount: None,
        }
    }

    /// Helper to purchase a ticket through the router, returning the
    /// envelope.
    async fn purchase_via_router(app: &Router, user_name: &str) -> ApiResponse<TicketDto> {
        let body: PurchaseTicketRequest =
            create_purchase_body(user_name, &format!("{user_name}@example.com"));
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/ticket-booking")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Helper for GET-style endpoints that return a ticket envelope.
    async fn get_envelope<T: serde::de::DeserializeOwned>(app: &Router, uri: &str) -> ApiResponse<T> {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_purchase_allocates_first_seat_in_section_a() {
        let app: Router = build_router(AppState::new());

        let envelope: ApiResponse<TicketDto> = purchase_via_router(&app, "John").await;
        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.message, messages::TICKET_BOOKING_SUCCESSFUL);

        let dto: TicketDto = envelope.data.unwrap();
        assert_eq!(dto.ticket_id, 1);
        assert_eq!(dto.seat_number, 1);
    }

    #[tokio::test]
    async fn test_receipt_roundtrip() {
        let app: Router = build_router(AppState::new());
        let purchased: TicketDto = purchase_via_router(&app, "John").await.data.unwrap();

        let envelope: ApiResponse<TicketDto> = get_envelope(
            &app,
            &format!(
                "/ticket-booking/user-receipt-detail?ticketId={}",
                purchased.ticket_id
            ),
        )
        .await;
        assert_eq!(envelope.message, messages::USER_RECEIPT_FETCHED);
        assert_eq!(envelope.data.unwrap(), purchased);
    }

    #[tokio::test]
    async fn test_receipt_not_found_is_http_200() {
        let app: Router = build_router(AppState::new());

        let envelope: ApiResponse<TicketDto> =
            get_envelope(&app, "/ticket-booking/user-receipt-detail?ticketId=42").await;
        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.message, messages::TICKET_NOT_FOUND);
        assert!(envelope.data.is_none());
    }

    #[tokio::test]
    async fn test_ticket_list_matches_email_case_insensitively() {
        let app: Router = build_router(AppState::new());
        purchase_via_router(&app, "John").await;

        let envelope: ApiResponse<Vec<TicketDto>> =
            get_envelope(&app, "/ticket-booking/ticket-list?email=JOHN@example.com").await;
        assert_eq!(envelope.message, messages::TICKET_LIST_FOUND);
        assert_eq!(envelope.data.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ticket_list_empty_reports_not_found() {
        let app: Router = build_router(AppState::new());

        let envelope: ApiResponse<Vec<TicketDto>> =
            get_envelope(&app, "/ticket-booking/ticket-list?email=nobody@example.com").await;
        assert_eq!(envelope.message, messages::TICKET_LIST_NOT_FOUND);
        assert!(envelope.data.is_none());
    }

    #[tokio::test]
    async fn test_update_seat_via_put() {
        let app: Router = build_router(AppState::new());
        let purchased: TicketDto = purchase_via_router(&app, "John").await.data.unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!(
                        "/ticket-booking/{}?seatNumber=15",
                        purchased.ticket_id
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let envelope: ApiResponse<TicketDto> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.data.unwrap().seat_number, 15);
    }

    #[tokio::test]
    async fn test_update_invalid_seat_embeds_400_in_envelope() {
        let app: Router = build_router(AppState::new());
        let purchased: TicketDto = purchase_via_router(&app, "John").await.data.unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!(
                        "/ticket-booking/{}?seatNumber=41",
                        purchased.ticket_id
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Transport answers 200; the rejection lives in the envelope.
        assert_eq!(response.status(), HttpStatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let envelope: ApiResponse<TicketDto> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(envelope.status, 400);
        assert!(envelope.data.is_none());
    }

    #[tokio::test]
    async fn test_delete_user_frees_seat_for_next_purchase() {
        let app: Router = build_router(AppState::new());
        let first: TicketDto = purchase_via_router(&app, "John").await.data.unwrap();
        purchase_via_router(&app, "Jane").await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/ticket-booking?userName=john")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let envelope: ApiResponse<TicketDto> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(envelope.message, messages::USER_DELETED);
        assert_eq!(envelope.data.unwrap().ticket_id, first.ticket_id);

        // The freed seat (1) is the lowest available again.
        let replacement: TicketDto = purchase_via_router(&app, "Jill").await.data.unwrap();
        assert_eq!(replacement.seat_number, first.seat_number);
    }

    #[tokio::test]
    async fn test_delete_unknown_user_reports_not_found() {
        let app: Router = build_router(AppState::new());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/ticket-booking?userName=ghost")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let envelope: ApiResponse<TicketDto> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(envelope.message, messages::USER_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_users_by_section_endpoint() {
        let app: Router = build_router(AppState::new());
        purchase_via_router(&app, "John").await;

        let found: ApiResponse<Vec<TicketDto>> =
            get_envelope(&app, "/ticket-booking/users-by-section?section=a").await;
        assert_eq!(found.message, messages::USERS_IN_SECTION_FOUND);
        assert_eq!(found.data.unwrap().len(), 1);

        let empty: ApiResponse<Vec<TicketDto>> =
            get_envelope(&app, "/ticket-booking/users-by-section?section=B").await;
        assert_eq!(empty.message, messages::USERS_IN_SECTION_NOT_FOUND);
        assert!(empty.data.is_none());
    }

    #[tokio::test]
    async fn test_purchase_when_full_returns_http_500() {
        let app: Router = build_router(AppState::new());
        for n in 0..40 {
            purchase_via_router(&app, &format!("user-{n}")).await;
        }

        let body: PurchaseTicketRequest = create_purchase_body("Late", "late@example.com");
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/ticket-booking")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(error.error);
        assert_eq!(error.message, "No available seats in either section");
    }
}
