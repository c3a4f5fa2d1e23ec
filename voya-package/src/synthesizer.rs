use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use voya_core::{FlightSource, HotelSource};

use crate::models::{destination_image_tag, TravelPackage};
use crate::token::{PackageError, PackageToken};

/// Combines flight and hotel offers into priced packages.
///
/// Stateless: search and reconstruction are pure request/response
/// operations, and both price through [`build_package`] so the number shown
/// in search results is the number a later booking sees.
pub struct PackageSynthesizer {
    flights: Arc<dyn FlightSource>,
    hotels: Arc<dyn HotelSource>,
}

impl PackageSynthesizer {
    pub fn new(flights: Arc<dyn FlightSource>, hotels: Arc<dyn HotelSource>) -> Self {
        Self { flights, hotels }
    }

    /// Full flights × hotels cross-product for the trip window, ascending
    /// by total price. Blank or inverted input yields an empty list, not an
    /// error; adapter failures never surface here because the sources
    /// already fall back to synthetic offers.
    pub async fn search_packages(
        &self,
        origin: &str,
        destination: &str,
        departure_date: NaiveDate,
        return_date: NaiveDate,
    ) -> Result<Vec<TravelPackage>, PackageError> {
        if origin.trim().is_empty() || destination.trim().is_empty() {
            tracing::warn!("package search with blank origin or destination");
            return Ok(Vec::new());
        }
        if return_date < departure_date {
            tracing::warn!(%departure_date, %return_date, "package search with inverted dates");
            return Ok(Vec::new());
        }

        // A same-day trip still needs a valid one-night hotel window; the
        // package price only counts nights between the trip dates.
        let check_out = if return_date > departure_date {
            return_date
        } else {
            departure_date + chrono::Duration::days(1)
        };

        let (flights, hotels) = tokio::join!(
            self.flights.search(origin, destination, departure_date),
            self.hotels.search(destination, departure_date, check_out),
        );

        if flights.is_empty() || hotels.is_empty() {
            tracing::info!(
                flights = flights.len(),
                hotels = hotels.len(),
                "no packages possible for search"
            );
            return Ok(Vec::new());
        }

        let mut packages = Vec::with_capacity(flights.len() * hotels.len());
        for flight in &flights {
            for hotel in &hotels {
                let token = PackageToken::new(
                    origin,
                    destination,
                    departure_date,
                    return_date,
                    flight.clone(),
                    hotel.clone(),
                );
                packages.push(build_package(token)?);
            }
        }

        // Stable sort keeps iteration order for equal prices.
        packages.sort_by(|a, b| a.price.cmp(&b.price));
        tracing::info!(count = packages.len(), origin, destination, "synthesized packages");
        Ok(packages)
    }

    /// Rebuild a package from its identifier alone. No provider or store
    /// calls; price and description are recomputed with the search-time
    /// formula rather than trusted from anywhere else.
    pub fn get_package_by_id(&self, id: &str) -> Result<TravelPackage, PackageError> {
        let token = PackageToken::decode(id)?;
        build_package(token)
    }
}

/// The one place a package is assembled, for both search and reconstruction.
fn build_package(token: PackageToken) -> Result<TravelPackage, PackageError> {
    let nights = (token.return_date - token.departure_date).num_days();
    let price = token.flight.price + token.hotel.price_per_night * Decimal::from(nights);
    let description = format!(
        "Enjoy a {nights}-night stay in {} at the {}-star {}, with flights via {}.",
        token.destination, token.hotel.star_rating, token.hotel.hotel_name, token.flight.airline
    );
    let id = token.encode()?;

    Ok(TravelPackage {
        id,
        image_tag: destination_image_tag(&token.destination),
        origin: token.origin,
        destination: token.destination,
        start_date: token.departure_date,
        end_date: token.return_date,
        price,
        description,
        airline: token.flight.airline.clone(),
        hotel_name: token.hotel.hotel_name.clone(),
        hotel_rating: token.hotel.star_rating,
        flight_departure: token.flight.departure_time,
        flight_arrival: token.flight.arrival_time,
        return_flight_included: true,
        flight: token.flight,
        hotel: token.hotel,
    })
}
