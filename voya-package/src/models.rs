use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use voya_core::{FlightOffer, HotelOffer};

/// A priced flight+hotel combination for a trip window.
///
/// Always synthesized, never constructed directly: either from a fresh
/// search or by decoding an identifier. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPackage {
    /// Opaque token; fully reconstructable, see [`crate::token`].
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// `flight.price + hotel.price_per_night * nights`.
    pub price: Decimal,
    pub description: String,
    pub airline: String,
    pub hotel_name: String,
    pub hotel_rating: u8,
    pub flight_departure: NaiveDateTime,
    pub flight_arrival: NaiveDateTime,
    pub return_flight_included: bool,
    /// Destination artwork key for the UI, derived from the code alone.
    pub image_tag: String,
    pub flight: FlightOffer,
    pub hotel: HotelOffer,
}

/// Artwork key for a destination code.
pub fn destination_image_tag(destination: &str) -> String {
    let tag = match destination.trim().to_uppercase().as_str() {
        "BCN" => "barcelona",
        "ROM" | "FCO" => "rome",
        "PAR" | "CDG" => "paris",
        "LON" | "LHR" => "london",
        "DXB" => "dubai",
        "NYC" | "JFK" => "newyork",
        _ => "default-destination",
    };
    tag.to_string()
}
