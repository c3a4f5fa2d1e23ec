use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use voya_core::json;
use voya_core::{FlightOffer, FlightSource};

use crate::client::{ProviderClient, ProviderError};
use crate::synthetic::SyntheticOffers;

/// Flight offers adapter over the provider's flight-offers endpoint.
pub struct AmadeusFlights {
    client: ProviderClient,
    synthetic: SyntheticOffers,
}

impl AmadeusFlights {
    pub fn new(client: ProviderClient, synthetic: SyntheticOffers) -> Self {
        Self { client, synthetic }
    }

    async fn fetch(
        &self,
        origin: &str,
        destination: &str,
        departure_date: NaiveDate,
    ) -> Result<Vec<FlightOffer>, ProviderError> {
        let path = format!(
            "/v2/shopping/flight-offers?originLocationCode={origin}\
             &destinationLocationCode={destination}\
             &departureDate={}&adults=1&max=5",
            departure_date.format("%Y-%m-%d")
        );
        let body = self.client.get_json(&path).await?;

        let offers = body
            .pointer("/data")
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::Payload("no data array in flight response".into()))?;
        if offers.is_empty() {
            return Err(ProviderError::Payload("empty flight offer list".into()));
        }
        tracing::info!(count = offers.len(), "flight offers in provider response");

        let parsed: Vec<FlightOffer> = offers.iter().filter_map(parse_offer).collect();
        if parsed.is_empty() {
            return Err(ProviderError::Payload("no flight offer parsed".into()));
        }
        Ok(parsed)
    }
}

#[async_trait]
impl FlightSource for AmadeusFlights {
    async fn search(
        &self,
        origin: &str,
        destination: &str,
        departure_date: NaiveDate,
    ) -> Vec<FlightOffer> {
        if origin.trim().is_empty() || destination.trim().is_empty() {
            tracing::warn!("flight search with empty origin or destination, using synthetic offers");
            return self.synthetic.flights(origin, destination, departure_date);
        }

        match self.fetch(origin, destination, departure_date).await {
            Ok(offers) => offers,
            Err(err) => {
                tracing::warn!(%err, origin, destination, "flight provider degraded, using synthetic offers");
                self.synthetic.flights(origin, destination, departure_date)
            }
        }
    }
}

/// Normalize one provider offer. Missing fields become empty strings or
/// zero; only a non-object entry is dropped outright.
fn parse_offer(offer: &Value) -> Option<FlightOffer> {
    if !offer.is_object() {
        tracing::warn!("skipping non-object flight offer entry");
        return None;
    }

    let carrier = json::string_at(offer, "/itineraries/0/segments/0/carrierCode");
    let number = json::string_at(offer, "/itineraries/0/segments/0/number");

    Some(FlightOffer {
        flight_number: format!("{carrier}{number}"),
        airline: carrier,
        departure_airport: json::string_at(offer, "/itineraries/0/segments/0/departure/iataCode"),
        arrival_airport: json::string_at(offer, "/itineraries/0/segments/0/arrival/iataCode"),
        departure_time: parse_datetime(json::str_at(offer, "/itineraries/0/segments/0/departure/at")),
        arrival_time: parse_datetime(json::str_at(offer, "/itineraries/0/segments/0/arrival/at")),
        price: json::decimal_at(offer, "/price/total").unwrap_or_default(),
    })
}

fn parse_datetime(value: Option<&str>) -> NaiveDateTime {
    value
        .and_then(|s| {
            s.parse::<NaiveDateTime>()
                .ok()
                .or_else(|| chrono::DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc()))
        })
        .unwrap_or_else(|| Utc::now().naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::token::StaticTokens;

    fn provider_offer() -> Value {
        json!({
            "itineraries": [{
                "segments": [{
                    "carrierCode": "SK",
                    "number": "1587",
                    "departure": { "iataCode": "CPH", "at": "2025-07-01T09:30:00" },
                    "arrival": { "iataCode": "BCN", "at": "2025-07-01T12:45:00" }
                }]
            }],
            "price": { "total": "199.99" }
        })
    }

    #[test]
    fn test_parse_offer_reads_nested_fields() {
        let offer = parse_offer(&provider_offer()).unwrap();
        assert_eq!(offer.flight_number, "SK1587");
        assert_eq!(offer.airline, "SK");
        assert_eq!(offer.departure_airport, "CPH");
        assert_eq!(offer.arrival_airport, "BCN");
        assert_eq!(offer.price, Decimal::new(19999, 2));
        assert_eq!(
            offer.departure_time,
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap().and_hms_opt(9, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_offer_defaults_missing_fields() {
        let offer = parse_offer(&json!({ "price": {} })).unwrap();
        assert_eq!(offer.flight_number, "");
        assert_eq!(offer.airline, "");
        assert_eq!(offer.price, Decimal::ZERO);
    }

    #[test]
    fn test_parse_offer_skips_non_object_entries() {
        assert!(parse_offer(&json!("garbage")).is_none());
        assert!(parse_offer(&json!(12)).is_none());
    }

    #[tokio::test]
    async fn test_unreachable_provider_falls_back_to_synthetic() {
        let client = ProviderClient::new(
            "http://127.0.0.1:9",
            Arc::new(StaticTokens("t".into())),
            Duration::from_millis(200),
        )
        .unwrap();
        let adapter = AmadeusFlights::new(client, SyntheticOffers::with_seed(3));

        let flights = adapter
            .search("CPH", "BCN", NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
            .await;

        assert!((3..=5).contains(&flights.len()));
        assert!(flights.iter().all(|f| f.departure_airport == "CPH"));
    }

    #[tokio::test]
    async fn test_empty_origin_skips_provider_entirely() {
        let client = ProviderClient::new(
            "http://127.0.0.1:9",
            Arc::new(StaticTokens("t".into())),
            Duration::from_millis(200),
        )
        .unwrap();
        let adapter = AmadeusFlights::new(client, SyntheticOffers::with_seed(3));

        let flights = adapter
            .search("", "BCN", NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
            .await;

        assert!(!flights.is_empty());
        assert!(flights.iter().all(|f| f.departure_airport.is_empty()));
    }
}
