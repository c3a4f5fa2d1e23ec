use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single flight listing, either parsed from the provider or synthesized
/// locally. Immutable once built; the package token embeds it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub flight_number: String,
    pub airline: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    /// Currency-agnostic, non-negative.
    pub price: Decimal,
}

/// A single hotel listing for a stay window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelOffer {
    pub hotel_name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    /// 1-5 stars, 0 meaning unrated.
    pub star_rating: u8,
    pub check_in: NaiveDate,
    /// Strictly after `check_in`.
    pub check_out: NaiveDate,
    pub room_type: String,
    pub price_per_night: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_offer_round_trips_through_json() {
        let json = r#"
            {
                "flight_number": "SK1587",
                "airline": "SAS",
                "departure_airport": "CPH",
                "arrival_airport": "BCN",
                "departure_time": "2025-07-01T09:30:00",
                "arrival_time": "2025-07-01T12:45:00",
                "price": "199.99"
            }
        "#;
        let offer: FlightOffer = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(offer.airline, "SAS");
        assert_eq!(offer.price, Decimal::new(19999, 2));

        let encoded = serde_json::to_string(&offer).expect("Failed to serialize");
        let decoded: FlightOffer = serde_json::from_str(&encoded).expect("Failed to re-parse");
        assert_eq!(decoded, offer);
    }

    #[test]
    fn test_hotel_offer_round_trips_through_json() {
        let offer = HotelOffer {
            hotel_name: "Grand Hotel Barcelona".to_string(),
            address: "12 Main Street".to_string(),
            city: "Barcelona".to_string(),
            country: "ES".to_string(),
            star_rating: 4,
            check_in: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 7, 8).unwrap(),
            room_type: "Double Room".to_string(),
            price_per_night: Decimal::new(22000, 2),
        };
        let encoded = serde_json::to_string(&offer).expect("Failed to serialize");
        let decoded: HotelOffer = serde_json::from_str(&encoded).expect("Failed to re-parse");
        assert_eq!(decoded, offer);
    }
}
