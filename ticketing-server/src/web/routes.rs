//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDate;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::BookingId;
use crate::reservation::ReservationError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/services", get(list_services))
        .route("/services/:id/boarding", get(boarding))
        .route("/services/:id/alighting", get(alighting))
        .route("/services/:id/between", get(between))
        .route("/services/:id/seats/:carriage/:seat", get(seat_occupant))
        .route("/reservations", post(create_reservation))
        .route("/bookings", get(list_bookings))
        .route("/bookings/:id", get(get_booking))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a `YYYY-MM-DD` date.
fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::BadRequest {
        message: format!("Invalid date: {s} (expected YYYY-MM-DD)"),
    })
}

/// List registered services.
async fn list_services(State(state): State<AppState>) -> Json<ServicesResponse> {
    let system = state.system.read().await;
    let services = system
        .services()
        .into_iter()
        .map(|s| ServiceResult::from_service(s))
        .collect();
    Json(ServicesResponse { services })
}

/// Reserve seats.
async fn create_reservation(
    State(state): State<AppState>,
    Json(body): Json<ReservationBody>,
) -> Result<(StatusCode, Json<BookingResult>), AppError> {
    let date = parse_date(&body.date)?;
    let request = body.into_request(date);

    let booking = state.system.write().await.make_reservation(&request)?;

    Ok((StatusCode::CREATED, Json(BookingResult::from_booking(&booking))))
}

/// List every booking.
async fn list_bookings(State(state): State<AppState>) -> Json<BookingsResponse> {
    let bookings = state
        .system
        .read()
        .await
        .get_all_bookings()
        .iter()
        .map(BookingResult::from_booking)
        .collect();
    Json(BookingsResponse { bookings })
}

/// Fetch one booking by id.
async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookingResult>, AppError> {
    let booking_id = BookingId::parse(&id).map_err(|e| AppError::BadRequest {
        message: format!("Invalid booking id {id}: {e}"),
    })?;

    let booking = state
        .system
        .read()
        .await
        .get_booking(booking_id)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Booking {booking_id} not found"),
        })?;

    Ok(Json(BookingResult::from_booking(&booking)))
}

/// Passengers boarding at a station.
async fn boarding(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    Query(query): Query<StationQuery>,
) -> Result<Json<ManifestResponse>, AppError> {
    let date = parse_date(&query.date)?;
    let entries = state
        .system
        .read()
        .await
        .boarding_manifest(&service_id, &query.station, date);
    Ok(manifest(service_id, date, entries))
}

/// Passengers alighting at a station.
async fn alighting(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    Query(query): Query<StationQuery>,
) -> Result<Json<ManifestResponse>, AppError> {
    let date = parse_date(&query.date)?;
    let entries = state
        .system
        .read()
        .await
        .alighting_manifest(&service_id, &query.station, date);
    Ok(manifest(service_id, date, entries))
}

/// Passengers on board for the whole of a segment.
async fn between(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    Query(query): Query<SegmentQuery>,
) -> Result<Json<ManifestResponse>, AppError> {
    let date = parse_date(&query.date)?;
    let entries = state
        .system
        .read()
        .await
        .between_manifest(&service_id, &query.from, &query.to, date);
    Ok(manifest(service_id, date, entries))
}

/// Who sits in a seat. The body is `null` when the seat is free.
async fn seat_occupant(
    State(state): State<AppState>,
    Path((service_id, carriage, seat)): Path<(String, String, String)>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Option<ManifestResult>>, AppError> {
    let date = parse_date(&query.date)?;
    let occupant = state
        .system
        .read()
        .await
        .seat_occupant(&service_id, &carriage, &seat, date)
        .map(ManifestResult::from);
    Ok(Json(occupant))
}

fn manifest(
    service_id: String,
    date: NaiveDate,
    entries: Vec<crate::reservation::ManifestEntry>,
) -> Json<ManifestResponse> {
    Json(ManifestResponse {
        service_id,
        date,
        passengers: entries.into_iter().map(ManifestResult::from).collect(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Reservation(ReservationError),
}

impl From<ReservationError> for AppError {
    fn from(e: ReservationError) -> Self {
        AppError::Reservation(e)
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Reservation(ReservationError::ServiceNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Reservation(ReservationError::SeatAlreadyBooked { .. }) => {
                StatusCode::CONFLICT
            }
            AppError::Reservation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest { .. } => "BAD_REQUEST",
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::Reservation(e) => e.code(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let code = self.code();
        let message = match self {
            AppError::BadRequest { message } | AppError::NotFound { message } => message,
            AppError::Reservation(e) => e.to_string(),
        };

        warn!(%status, code, "{message}");

        let body = Json(ErrorResponse {
            error: message,
            code,
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::sample_system;
    use axum::body::to_bytes;
    use axum::response::Response;
    use serde_json::Value;

    fn state() -> AppState {
        AppState::new(sample_system().unwrap())
    }

    fn seat(carriage: &str, seat: &str) -> SeatBody {
        SeatBody {
            carriage: carriage.into(),
            seat: seat.into(),
        }
    }

    fn body(passengers: &[&str], seats: Vec<SeatBody>) -> ReservationBody {
        ReservationBody {
            service_id: "5160".into(),
            origin: "Paris".into(),
            destination: "Amsterdam".into(),
            date: "2021-04-01".into(),
            passengers: passengers.iter().map(|p| p.to_string()).collect(),
            seats,
        }
    }

    async fn json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn reserve(state: &AppState, body: ReservationBody) -> Response {
        match create_reservation(State(state.clone()), Json(body)).await {
            Ok(ok) => ok.into_response(),
            Err(e) => e.into_response(),
        }
    }

    #[test]
    fn router_builds() {
        let _router = create_router(state());
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn services_are_listed() {
        let Json(response) = list_services(State(state())).await;
        let ids: Vec<_> = response.services.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["5160", "5161", "5162"]);
        assert_eq!(response.services[0].stops.len(), 4);
    }

    #[tokio::test]
    async fn reservation_is_created() {
        let state = state();
        let response = reserve(
            &state,
            body(&["Ada", "Grace"], vec![seat("A", "A11"), seat("A", "A12")]),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = json(response).await;
        assert_eq!(json["id"], "B0001");
        assert_eq!(json["tickets"][1]["passenger"], "Grace");
        assert_eq!(json["tickets"][1]["distance"], 520);
        assert_eq!(json["tickets"][0]["comfort"], "first");
    }

    #[tokio::test]
    async fn double_booking_is_conflict() {
        let state = state();
        reserve(&state, body(&["Ada"], vec![seat("A", "A11")])).await;
        let response = reserve(&state, body(&["Linus"], vec![seat("A", "A11")])).await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(json(response).await["code"], "SEAT_ALREADY_BOOKED");
    }

    #[tokio::test]
    async fn seat_taken_under_another_date_is_conflict() {
        let state = state();
        let mut first = body(&["Ada"], vec![seat("A", "A11")]);
        first.date = "2025-09-01".into();
        let response = reserve(&state, first).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(json(response).await["tickets"][0]["date"], "2021-04-01");

        let response = reserve(&state, body(&["Linus"], vec![seat("A", "A11")])).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn reservation_errors_map_to_status() {
        let state = state();

        let mut unknown = body(&["Ada"], vec![seat("A", "A1")]);
        unknown.service_id = "9999".into();
        let response = reserve(&state, unknown).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json(response).await["code"], "SERVICE_NOT_FOUND");

        let mut backwards = body(&["Ada"], vec![seat("A", "A1")]);
        backwards.origin = "Amsterdam".into();
        backwards.destination = "Paris".into();
        let response = reserve(&state, backwards).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json(response).await["code"], "INVALID_ROUTE");

        let response = reserve(&state, body(&["Ada", "Grace"], vec![seat("A", "A1")])).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json(response).await["code"], "PASSENGER_SEAT_MISMATCH");

        let response = reserve(&state, body(&["Ada"], vec![seat("Z", "Z1")])).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json(response).await["code"], "SEAT_NOT_FOUND");

        let Json(bookings) = list_bookings(State(state)).await;
        assert!(bookings.bookings.is_empty());
    }

    #[tokio::test]
    async fn bad_date_is_rejected() {
        let state = state();
        let mut bad = body(&["Ada"], vec![seat("A", "A1")]);
        bad.date = "01/04/2021".into();
        let response = reserve(&state, bad).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json(response).await["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn booking_lookup() {
        let state = state();
        reserve(&state, body(&["Ada"], vec![seat("A", "A11")])).await;

        let Json(found) = get_booking(State(state.clone()), Path("B0001".into()))
            .await
            .unwrap();
        assert_eq!(found.passengers, vec!["Ada"]);

        let missing = get_booking(State(state.clone()), Path("B0002".into()))
            .await
            .unwrap_err();
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let invalid = get_booking(State(state), Path("nonsense".into()))
            .await
            .unwrap_err();
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn conductor_manifests() {
        let state = state();
        reserve(
            &state,
            body(&["Ada", "Grace"], vec![seat("A", "A11"), seat("A", "A12")]),
        )
        .await;
        let mut short = body(&["Linus"], vec![seat("H", "H1")]);
        short.origin = "Calais".into();
        short.destination = "Antwerp".into();
        reserve(&state, short).await;

        let Json(on) = boarding(
            State(state.clone()),
            Path("5160".into()),
            Query(StationQuery {
                station: "Paris".into(),
                date: "2021-04-01".into(),
            }),
        )
        .await
        .unwrap();
        let names: Vec<_> = on.passengers.iter().map(|p| p.passenger.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Grace"]);

        let Json(off) = alighting(
            State(state.clone()),
            Path("5160".into()),
            Query(StationQuery {
                station: "Antwerp".into(),
                date: "2021-04-01".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(off.passengers.len(), 1);
        assert_eq!(off.passengers[0].booking_id, "B0002");

        let Json(through) = between(
            State(state.clone()),
            Path("5160".into()),
            Query(SegmentQuery {
                from: "Calais".into(),
                to: "Antwerp".into(),
                date: "2021-04-01".into(),
            }),
        )
        .await
        .unwrap();
        let names: Vec<_> = through
            .passengers
            .iter()
            .map(|p| p.passenger.as_str())
            .collect();
        assert_eq!(names, vec!["Ada", "Grace", "Linus"]);

        let Json(other_day) = boarding(
            State(state),
            Path("5160".into()),
            Query(StationQuery {
                station: "Paris".into(),
                date: "2021-04-02".into(),
            }),
        )
        .await
        .unwrap();
        assert!(other_day.passengers.is_empty());
    }

    #[tokio::test]
    async fn seat_lookup() {
        let state = state();
        reserve(&state, body(&["Ada"], vec![seat("A", "A11")])).await;

        let query = || {
            Query(DateQuery {
                date: "2021-04-01".into(),
            })
        };

        let Json(taken) = seat_occupant(
            State(state.clone()),
            Path(("5160".into(), "A".into(), "A11".into())),
            query(),
        )
        .await
        .unwrap();
        assert_eq!(taken.map(|m| m.passenger), Some("Ada".to_string()));

        let response = seat_occupant(
            State(state),
            Path(("5160".into(), "A".into(), "A12".into())),
            query(),
        )
        .await
        .unwrap()
        .into_response();
        assert_eq!(json(response).await, Value::Null);
    }
}
