use async_trait::async_trait;
use chrono::NaiveDate;

use crate::offer::{FlightOffer, HotelOffer};

/// Source of flight offers for a route and date.
///
/// Implementations absorb every upstream failure: a degraded or unreachable
/// provider yields synthetic offers, never an error, so callers get an
/// infallible (possibly empty) list.
#[async_trait]
pub trait FlightSource: Send + Sync {
    async fn search(
        &self,
        origin: &str,
        destination: &str,
        departure_date: NaiveDate,
    ) -> Vec<FlightOffer>;
}

/// Source of hotel offers for a city and stay window. Same failure
/// absorption contract as [`FlightSource`].
#[async_trait]
pub trait HotelSource: Send + Sync {
    async fn search(
        &self,
        city_code: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Vec<HotelOffer>;
}
