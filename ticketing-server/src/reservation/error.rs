//! Reservation error types.

/// Why a reservation request was rejected.
///
/// Every variant describes a request that failed validation; none of them
/// leaves anything behind in the booking store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    /// No service registered under the requested id
    #[error("service {0} not found")]
    ServiceNotFound(String),

    /// Origin and destination are not both stops in forward order
    #[error("invalid route from {origin} to {destination} for service {service_id}")]
    InvalidRoute {
        service_id: String,
        origin: String,
        destination: String,
    },

    /// Passenger and seat lists have different lengths
    #[error("number of passengers ({passengers}) must match number of seat requests ({seats})")]
    PassengerSeatMismatch { passengers: usize, seats: usize },

    /// The carriage or seat does not exist on the service
    #[error("seat {seat_number} in carriage {carriage_id} not found in service {service_id}")]
    SeatNotFound {
        service_id: String,
        carriage_id: String,
        seat_number: String,
    },

    /// Someone already holds the seat on that service and date
    #[error("seat {seat_number} in carriage {carriage_id} is already booked for service {service_id}")]
    SeatAlreadyBooked {
        service_id: String,
        carriage_id: String,
        seat_number: String,
    },
}

impl ReservationError {
    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ReservationError::ServiceNotFound(_) => "SERVICE_NOT_FOUND",
            ReservationError::InvalidRoute { .. } => "INVALID_ROUTE",
            ReservationError::PassengerSeatMismatch { .. } => "PASSENGER_SEAT_MISMATCH",
            ReservationError::SeatNotFound { .. } => "SEAT_NOT_FOUND",
            ReservationError::SeatAlreadyBooked { .. } => "SEAT_ALREADY_BOOKED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ReservationError::ServiceNotFound("9999".into());
        assert_eq!(err.to_string(), "service 9999 not found");

        let err = ReservationError::InvalidRoute {
            service_id: "5160".into(),
            origin: "Amsterdam".into(),
            destination: "Paris".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid route from Amsterdam to Paris for service 5160"
        );

        let err = ReservationError::PassengerSeatMismatch {
            passengers: 2,
            seats: 1,
        };
        assert_eq!(
            err.to_string(),
            "number of passengers (2) must match number of seat requests (1)"
        );

        let err = ReservationError::SeatNotFound {
            service_id: "5160".into(),
            carriage_id: "A".into(),
            seat_number: "A99".into(),
        };
        assert_eq!(
            err.to_string(),
            "seat A99 in carriage A not found in service 5160"
        );

        let err = ReservationError::SeatAlreadyBooked {
            service_id: "5160".into(),
            carriage_id: "A".into(),
            seat_number: "A11".into(),
        };
        assert_eq!(
            err.to_string(),
            "seat A11 in carriage A is already booked for service 5160"
        );
    }

    #[test]
    fn error_codes() {
        assert_eq!(
            ReservationError::ServiceNotFound("x".into()).code(),
            "SERVICE_NOT_FOUND"
        );
        assert_eq!(
            ReservationError::PassengerSeatMismatch {
                passengers: 0,
                seats: 1
            }
            .code(),
            "PASSENGER_SEAT_MISMATCH"
        );
        assert_eq!(
            ReservationError::SeatAlreadyBooked {
                service_id: "5160".into(),
                carriage_id: "A".into(),
                seat_number: "A1".into(),
            }
            .code(),
            "SEAT_ALREADY_BOOKED"
        );
    }
}
