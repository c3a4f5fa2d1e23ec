use std::sync::Arc;

use chrono::Utc;
use voya_package::TravelPackage;

use crate::activity::ActivityLogService;
use crate::models::{Booking, BookingStatus};
use crate::repository::{BookingStore, StoreError};

/// Books packages and answers booking queries.
///
/// A booking snapshots the whole package; the charged price is exactly the
/// package price the synthesizer computed.
#[derive(Clone)]
pub struct BookingService {
    store: Arc<dyn BookingStore>,
    activity: ActivityLogService,
}

impl BookingService {
    pub fn new(store: Arc<dyn BookingStore>, activity: ActivityLogService) -> Self {
        Self { store, activity }
    }

    pub async fn create_booking(
        &self,
        user_email: &str,
        package: TravelPackage,
    ) -> Result<Booking, StoreError> {
        tracing::info!(user_email, destination = %package.destination, "creating booking");

        let booking = self
            .store
            .insert(Booking {
                id: 0,
                user_email: user_email.to_string(),
                booking_date: Utc::now(),
                status: BookingStatus::Confirmed,
                total_price: package.price,
                package,
            })
            .await?;

        self.activity
            .log(
                user_email,
                "Booking Created",
                &format!(
                    "Booked {} ({} to {}) for {}",
                    booking.package.destination,
                    booking.package.start_date,
                    booking.package.end_date,
                    booking.total_price
                ),
            )
            .await;

        Ok(booking)
    }

    pub async fn user_bookings(&self, user_email: &str) -> Result<Vec<Booking>, StoreError> {
        self.store.list_for_user(user_email).await
    }

    pub async fn booking(&self, id: u64) -> Result<Option<Booking>, StoreError> {
        self.store.get(id).await
    }

    /// A booking, only if it belongs to the given user.
    pub async fn booking_for_user(
        &self,
        id: u64,
        user_email: &str,
    ) -> Result<Option<Booking>, StoreError> {
        Ok(self
            .store
            .get(id)
            .await?
            .filter(|b| b.user_email.eq_ignore_ascii_case(user_email)))
    }

    /// Cancel a booking on behalf of its owner. Returns false when the
    /// booking does not exist, belongs to someone else, or is already
    /// cancelled.
    pub async fn cancel_booking(&self, id: u64, user_email: &str) -> Result<bool, StoreError> {
        let Some(booking) = self.booking_for_user(id, user_email).await? else {
            tracing::warn!(id, user_email, "cancel refused: no such booking for user");
            return Ok(false);
        };
        if booking.status == BookingStatus::Cancelled {
            return Ok(false);
        }

        self.store.set_status(id, BookingStatus::Cancelled).await?;
        self.activity
            .log(
                user_email,
                "Booking Cancelled",
                &format!(
                    "Cancelled booking {id} for {} - originally scheduled for {}",
                    booking.package.destination, booking.package.start_date
                ),
            )
            .await;
        Ok(true)
    }

    pub async fn all_bookings(&self, skip: usize, take: usize) -> Result<Vec<Booking>, StoreError> {
        self.store.list_all(skip, take).await
    }
}
