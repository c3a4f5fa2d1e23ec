use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use voya_core::json;
use voya_core::{HotelOffer, HotelSource};

use crate::cities;
use crate::client::{ProviderClient, ProviderError};
use crate::synthetic::SyntheticOffers;

/// Max hotel ids forwarded to the offers endpoint per search.
const MAX_HOTEL_IDS: usize = 20;
/// Max offers normalized from one response.
const MAX_OFFERS: usize = 10;

/// Hotel offers adapter. The provider has no direct city search, so this is
/// a two-step flow: resolve the city to hotel ids, then fetch offers for
/// those ids.
pub struct AmadeusHotels {
    client: ProviderClient,
    synthetic: SyntheticOffers,
}

impl AmadeusHotels {
    pub fn new(client: ProviderClient, synthetic: SyntheticOffers) -> Self {
        Self { client, synthetic }
    }

    async fn fetch(
        &self,
        city_code: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<HotelOffer>, ProviderError> {
        let lookup_path =
            format!("/v1/reference-data/locations/hotels/by-city?cityCode={city_code}");
        let lookup = self.client.get_json(&lookup_path).await?;

        let hotel_ids = hotel_ids(&lookup);
        if hotel_ids.is_empty() {
            return Err(ProviderError::Payload(format!("no hotel ids for city {city_code}")));
        }

        let offers_path = format!(
            "/v3/shopping/hotel-offers?hotelIds={}\
             &checkInDate={}&checkOutDate={}&adults=1&roomQuantity=1",
            hotel_ids.join(","),
            check_in.format("%Y-%m-%d"),
            check_out.format("%Y-%m-%d")
        );
        let body = self.client.get_json(&offers_path).await?;

        let offers = body
            .pointer("/data")
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::Payload("no data array in hotel response".into()))?;
        if offers.is_empty() {
            return Err(ProviderError::Payload("empty hotel offer list".into()));
        }
        tracing::info!(count = offers.len(), "hotel offers in provider response");

        let parsed: Vec<HotelOffer> = offers
            .iter()
            .take(MAX_OFFERS)
            .enumerate()
            .filter_map(|(i, offer)| parse_offer(offer, i, city_code, check_in, check_out))
            .collect();
        if parsed.is_empty() {
            return Err(ProviderError::Payload("no hotel offer parsed".into()));
        }
        Ok(parsed)
    }
}

#[async_trait]
impl HotelSource for AmadeusHotels {
    async fn search(&self, city_code: &str, check_in: NaiveDate, check_out: NaiveDate) -> Vec<HotelOffer> {
        let city = cities::city_code(city_code);

        if city.is_empty() {
            tracing::warn!("hotel search with empty city code, using synthetic offers");
            return self.synthetic.hotels(&city, check_in, check_out);
        }

        match self.fetch(&city, check_in, check_out).await {
            Ok(offers) => offers,
            Err(err) => {
                tracing::warn!(%err, city, "hotel provider degraded, using synthetic offers");
                self.synthetic.hotels(&city, check_in, check_out)
            }
        }
    }
}

/// Distinct hotel ids from the city lookup, original order, capped.
fn hotel_ids(lookup: &Value) -> Vec<String> {
    let mut ids = Vec::new();
    let entries = match lookup.pointer("/data").and_then(Value::as_array) {
        Some(entries) => entries,
        None => return ids,
    };
    for entry in entries {
        if let Some(id) = json::str_at(entry, "/hotelId") {
            if !id.is_empty() && !ids.iter().any(|seen| seen == id) {
                ids.push(id.to_string());
            }
        }
        if ids.len() == MAX_HOTEL_IDS {
            break;
        }
    }
    ids
}

/// Normalize one hotel offer entry. Display fields fall back to
/// placeholders; a missing price drops the entry.
fn parse_offer(
    offer: &Value,
    index: usize,
    city_code: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Option<HotelOffer> {
    if !offer.is_object() {
        tracing::warn!(index, "skipping non-object hotel offer entry");
        return None;
    }

    let price_per_night = json::decimal_at(offer, "/offers/0/price/base")
        .or_else(|| json::decimal_at(offer, "/offers/0/price/total"));
    let Some(price_per_night) = price_per_night else {
        tracing::warn!(index, "skipping hotel offer without a price");
        return None;
    };

    let hotel_name = json::str_at(offer, "/hotel/name")
        .map(str::to_string)
        .unwrap_or_else(|| format!("Hotel {}", index + 1));
    let room_type = json::str_at(offer, "/offers/0/room/typeEstimated/category")
        .or_else(|| json::str_at(offer, "/offers/0/room/type"))
        .unwrap_or("Standard Room")
        .to_string();

    Some(HotelOffer {
        hotel_name,
        address: json::str_at(offer, "/hotel/address/lines/0")
            .unwrap_or("Main Street 1")
            .to_string(),
        city: json::str_at(offer, "/hotel/address/cityName")
            .unwrap_or(city_code)
            .to_string(),
        country: json::str_at(offer, "/hotel/address/countryCode")
            .unwrap_or("Unknown")
            .to_string(),
        star_rating: json::u8_at(offer, "/hotel/rating").unwrap_or(3),
        check_in,
        check_out,
        room_type,
        price_per_night,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::token::StaticTokens;

    fn stay() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 8).unwrap(),
        )
    }

    fn provider_offer() -> Value {
        json!({
            "hotel": {
                "name": "Hotel Arts Barcelona",
                "rating": "5",
                "address": {
                    "lines": ["Carrer de la Marina 19"],
                    "cityName": "Barcelona",
                    "countryCode": "ES"
                }
            },
            "offers": [{
                "room": { "typeEstimated": { "category": "DELUXE_ROOM" } },
                "price": { "base": "220.00", "total": "242.00" }
            }]
        })
    }

    #[test]
    fn test_parse_offer_prefers_base_price() {
        let (check_in, check_out) = stay();
        let offer = parse_offer(&provider_offer(), 0, "BCN", check_in, check_out).unwrap();
        assert_eq!(offer.hotel_name, "Hotel Arts Barcelona");
        assert_eq!(offer.star_rating, 5);
        assert_eq!(offer.room_type, "DELUXE_ROOM");
        assert_eq!(offer.price_per_night, Decimal::new(22000, 2));
        assert_eq!(offer.address, "Carrer de la Marina 19");
    }

    #[test]
    fn test_parse_offer_defaults_display_fields() {
        let (check_in, check_out) = stay();
        let sparse = json!({ "offers": [{ "price": { "total": "99.50" } }] });
        let offer = parse_offer(&sparse, 2, "BCN", check_in, check_out).unwrap();
        assert_eq!(offer.hotel_name, "Hotel 3");
        assert_eq!(offer.city, "BCN");
        assert_eq!(offer.country, "Unknown");
        assert_eq!(offer.star_rating, 3);
        assert_eq!(offer.room_type, "Standard Room");
        assert_eq!(offer.price_per_night, Decimal::new(9950, 2));
    }

    #[test]
    fn test_parse_offer_drops_unpriced_entries() {
        let (check_in, check_out) = stay();
        let unpriced = json!({ "hotel": { "name": "No Price Inn" }, "offers": [{}] });
        assert!(parse_offer(&unpriced, 0, "BCN", check_in, check_out).is_none());
    }

    #[test]
    fn test_hotel_ids_dedupe_and_cap() {
        let mut entries: Vec<Value> = (0..30).map(|i| json!({ "hotelId": format!("H{i}") })).collect();
        entries.insert(1, json!({ "hotelId": "H0" }));
        entries.insert(2, json!({ "other": true }));
        let lookup = json!({ "data": entries });

        let ids = hotel_ids(&lookup);
        assert_eq!(ids.len(), MAX_HOTEL_IDS);
        assert_eq!(ids[0], "H0");
        assert_eq!(ids[1], "H1");
    }

    #[tokio::test]
    async fn test_unreachable_provider_falls_back_to_synthetic() {
        let client = ProviderClient::new(
            "http://127.0.0.1:9",
            Arc::new(StaticTokens("t".into())),
            Duration::from_millis(200),
        )
        .unwrap();
        let adapter = AmadeusHotels::new(client, SyntheticOffers::with_seed(5));

        let (check_in, check_out) = stay();
        let hotels = adapter.search("LHR", check_in, check_out).await;

        assert!((3..=5).contains(&hotels.len()));
        // Airport code was translated before the synthetic fallback.
        assert!(hotels.iter().all(|h| h.city == "London"));
    }
}
