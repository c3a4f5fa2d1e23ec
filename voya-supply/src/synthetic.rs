use std::sync::Mutex;

use chrono::{Duration, NaiveDate, NaiveTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use voya_core::{FlightOffer, HotelOffer};

use crate::cities;

const AIRLINES: &[&str] = &["SAS", "Norwegian", "Lufthansa", "KLM", "Air France"];
const ROOM_TYPES: &[&str] = &[
    "Standard Room",
    "Double Room",
    "Superior Room",
    "Deluxe Room",
    "Suite",
];

/// Generator for plausible offer records used when the provider is
/// unreachable, empty, or unparseable. Prices and times are randomized but
/// bounded; the caller's location strings are used verbatim so the rest of
/// the pipeline behaves identically to a real response.
///
/// Seedable so tests can pin the output.
pub struct SyntheticOffers {
    rng: Mutex<StdRng>,
}

impl SyntheticOffers {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// 3-5 flights on the requested route, departing between 07:00 and
    /// 18:00, 2-6 hours long, priced 100.00-999.99.
    pub fn flights(
        &self,
        origin: &str,
        destination: &str,
        departure_date: NaiveDate,
    ) -> Vec<FlightOffer> {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let count = rng.gen_range(3..=5);
        let mut flights = Vec::with_capacity(count);

        for _ in 0..count {
            let airline = AIRLINES[rng.gen_range(0..AIRLINES.len())];
            let depart_hour = rng.gen_range(7..19);
            let departure_time = departure_date.and_time(
                NaiveTime::from_hms_opt(depart_hour, 0, 0).unwrap_or_default(),
            );
            let duration = Duration::hours(rng.gen_range(2..7));

            flights.push(FlightOffer {
                flight_number: format!("{}{}", airline, rng.gen_range(100..1000)),
                airline: airline.to_string(),
                departure_airport: origin.to_string(),
                arrival_airport: destination.to_string(),
                departure_time,
                arrival_time: departure_time + duration,
                price: Decimal::new(rng.gen_range(10_000..100_000), 2),
            });
        }

        tracing::info!(count = flights.len(), origin, destination, "created synthetic flights");
        flights
    }

    /// 3-5 hotels in the requested city, 3-5 stars, 50.00-349.99 per night.
    pub fn hotels(&self, city_code: &str, check_in: NaiveDate, check_out: NaiveDate) -> Vec<HotelOffer> {
        let (city_name, country) =
            cities::city_display(city_code).unwrap_or(("Unknown City", "XX"));
        let hotel_names = [
            format!("Grand Hotel {city_name}"),
            format!("{city_name} Plaza"),
            format!("Royal {city_name}"),
            format!("{city_name} Hilton"),
            format!("Luxury {city_name}"),
        ];

        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let count = rng.gen_range(3..=5);
        let mut hotels = Vec::with_capacity(count);

        for _ in 0..count {
            hotels.push(HotelOffer {
                hotel_name: hotel_names[rng.gen_range(0..hotel_names.len())].clone(),
                address: format!("{} Main Street", rng.gen_range(1..200)),
                city: city_name.to_string(),
                country: country.to_string(),
                star_rating: rng.gen_range(3..=5),
                check_in,
                check_out,
                room_type: ROOM_TYPES[rng.gen_range(0..ROOM_TYPES.len())].to_string(),
                price_per_night: Decimal::new(rng.gen_range(5_000..35_000), 2),
            });
        }

        tracing::info!(count = hotels.len(), city_code, "created synthetic hotels");
        hotels
    }
}

impl Default for SyntheticOffers {
    fn default() -> Self {
        Self::new()
    }
}
