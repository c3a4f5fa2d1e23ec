pub mod json;
pub mod offer;
pub mod source;

pub use offer::{FlightOffer, HotelOffer};
pub use source::{FlightSource, HotelSource};
