//! The opaque package identifier.
//!
//! The identifier is the only persistence mechanism for package contents:
//! the search-context tuple plus the chosen flight and hotel are serialized
//! to JSON and base64-url encoded, so decoding needs no database or provider
//! call and encode/decode is an exact field-for-field round trip. The `v`
//! field tags the format so outstanding identifiers survive future field
//! additions; unknown versions are rejected.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use voya_core::{FlightOffer, HotelOffer};

pub const TOKEN_VERSION: u8 = 1;

#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error("invalid package identifier {token:?}: {reason}")]
    InvalidToken { token: String, reason: String },

    #[error("package identifier encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The reconstructable tuple behind a package identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageToken {
    pub v: u8,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub flight: FlightOffer,
    pub hotel: HotelOffer,
}

impl PackageToken {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date: NaiveDate,
        return_date: NaiveDate,
        flight: FlightOffer,
        hotel: HotelOffer,
    ) -> Self {
        Self {
            v: TOKEN_VERSION,
            origin: origin.into(),
            destination: destination.into(),
            departure_date,
            return_date,
            flight,
            hotel,
        }
    }

    /// Serialize to the opaque identifier string. Deterministic: the same
    /// tuple always yields the same identifier.
    pub fn encode(&self) -> Result<String, PackageError> {
        let json = serde_json::to_vec(self)?;
        Ok(URL_SAFE_NO_PAD.encode(json))
    }

    /// Parse and validate an identifier. Any malformed, truncated, or
    /// semantically incomplete token is rejected with the offending
    /// identifier in the error; this never partially succeeds.
    pub fn decode(token: &str) -> Result<Self, PackageError> {
        let invalid = |reason: String| PackageError::InvalidToken {
            token: token.to_string(),
            reason,
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|e| invalid(format!("not base64: {e}")))?;
        let parsed: PackageToken = serde_json::from_slice(&bytes)
            .map_err(|e| invalid(format!("not a package payload: {e}")))?;

        if parsed.v != TOKEN_VERSION {
            return Err(invalid(format!("unsupported format version {}", parsed.v)));
        }
        if parsed.origin.trim().is_empty() || parsed.destination.trim().is_empty() {
            return Err(invalid("empty origin or destination".to_string()));
        }
        if parsed.return_date < parsed.departure_date {
            return Err(invalid("return date before departure date".to_string()));
        }
        if parsed.hotel.check_out <= parsed.hotel.check_in {
            return Err(invalid("hotel check-out not after check-in".to_string()));
        }
        if parsed.flight.price < Decimal::ZERO || parsed.hotel.price_per_night < Decimal::ZERO {
            return Err(invalid("negative price".to_string()));
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> PackageToken {
        let departure = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let ret = NaiveDate::from_ymd_opt(2025, 7, 8).unwrap();
        PackageToken::new(
            "CPH",
            "BCN",
            departure,
            ret,
            FlightOffer {
                flight_number: "SK1587".to_string(),
                airline: "SAS".to_string(),
                departure_airport: "CPH".to_string(),
                arrival_airport: "BCN".to_string(),
                departure_time: departure.and_hms_opt(9, 30, 0).unwrap(),
                arrival_time: departure.and_hms_opt(12, 45, 0).unwrap(),
                price: Decimal::new(19999, 2),
            },
            HotelOffer {
                hotel_name: "Grand Hotel Barcelona".to_string(),
                address: "12 Main Street".to_string(),
                city: "Barcelona".to_string(),
                country: "ES".to_string(),
                star_rating: 4,
                check_in: departure,
                check_out: ret,
                room_type: "Double Room".to_string(),
                price_per_night: Decimal::new(22000, 2),
            },
        )
    }

    #[test]
    fn test_encode_decode_is_an_exact_round_trip() {
        let token = sample();
        let encoded = token.encode().unwrap();
        let decoded = PackageToken::decode(&encoded).unwrap();
        assert_eq!(decoded, token);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let token = sample();
        assert_eq!(token.encode().unwrap(), token.encode().unwrap());
    }

    #[test]
    fn test_non_base64_token_is_rejected_with_the_token_named() {
        let err = PackageToken::decode("not-a-valid-token!!").unwrap_err();
        match err {
            PackageError::InvalidToken { token, reason } => {
                assert_eq!(token, "not-a-valid-token!!");
                assert!(reason.contains("base64"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_base64_of_garbage_is_rejected() {
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;
        use base64::Engine;

        let token = URL_SAFE_NO_PAD.encode(b"{\"hello\":\"world\"}");
        let err = PackageToken::decode(&token).unwrap_err();
        assert!(matches!(err, PackageError::InvalidToken { .. }));
    }

    #[test]
    fn test_truncated_token_is_rejected() {
        let encoded = sample().encode().unwrap();
        let truncated = &encoded[..encoded.len() / 2];
        assert!(matches!(
            PackageToken::decode(truncated),
            Err(PackageError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_unknown_format_version_is_rejected() {
        let mut token = sample();
        token.v = 9;
        let encoded = token.encode().unwrap();
        let err = PackageToken::decode(&encoded).unwrap_err();
        match err {
            PackageError::InvalidToken { reason, .. } => {
                assert!(reason.contains("version 9"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_semantically_broken_tokens_are_rejected() {
        let mut inverted = sample();
        inverted.return_date = inverted.departure_date - chrono::Duration::days(1);
        let encoded = inverted.encode().unwrap();
        assert!(PackageToken::decode(&encoded).is_err());

        let mut blank = sample();
        blank.destination = "  ".to_string();
        let encoded = blank.encode().unwrap();
        assert!(PackageToken::decode(&encoded).is_err());
    }
}
