//! Offer retrieval adapters.
//!
//! Each adapter queries the external offers provider, normalizes the
//! response into the shared offer types, and falls back to synthetic data
//! whenever the provider is degraded. The booking flow must never hard-fail
//! because upstream is down, so nothing in this crate surfaces provider
//! errors to callers.

pub mod cities;
pub mod client;
pub mod flights;
pub mod hotels;
pub mod synthetic;
pub mod token;

pub use client::{ProviderClient, ProviderError};
pub use flights::AmadeusFlights;
pub use hotels::AmadeusHotels;
pub use synthetic::SyntheticOffers;
pub use token::{ClientCredentialsTokens, StaticTokens, TokenProvider};
