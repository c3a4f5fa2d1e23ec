use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{ActivityLog, Booking, BookingStatus, CustomerInquiry, CustomerMessage};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Booking persistence seam.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Persist a booking; the store assigns the id on the returned record.
    async fn insert(&self, booking: Booking) -> Result<Booking, StoreError>;

    async fn get(&self, id: u64) -> Result<Option<Booking>, StoreError>;

    /// A user's bookings, newest first.
    async fn list_for_user(&self, email: &str) -> Result<Vec<Booking>, StoreError>;

    /// Staff listing across all users, newest first, paged.
    async fn list_all(&self, skip: usize, take: usize) -> Result<Vec<Booking>, StoreError>;

    async fn set_status(&self, id: u64, status: BookingStatus) -> Result<(), StoreError>;
}

/// Append-only activity trail seam.
#[async_trait]
pub trait ActivityLogStore: Send + Sync {
    async fn append(&self, entry: ActivityLog) -> Result<(), StoreError>;

    async fn list(&self, skip: usize, take: usize) -> Result<Vec<ActivityLog>, StoreError>;

    async fn list_for_user(
        &self,
        user: &str,
        skip: usize,
        take: usize,
    ) -> Result<Vec<ActivityLog>, StoreError>;

    async fn count(&self) -> Result<usize, StoreError>;

    /// Case-insensitive substring match over user, action and details.
    async fn search(
        &self,
        term: &str,
        skip: usize,
        take: usize,
    ) -> Result<Vec<ActivityLog>, StoreError>;
}

/// Staff-to-customer message seam.
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn insert(&self, message: CustomerMessage) -> Result<CustomerMessage, StoreError>;

    async fn get(&self, id: u64) -> Result<Option<CustomerMessage>, StoreError>;

    async fn list_for_recipient(&self, email: &str) -> Result<Vec<CustomerMessage>, StoreError>;

    async fn list_for_sender(&self, sender_id: &str) -> Result<Vec<CustomerMessage>, StoreError>;

    async fn set_read(&self, id: u64, read_at: DateTime<Utc>) -> Result<(), StoreError>;

    async fn unread_count(&self, email: &str) -> Result<usize, StoreError>;
}

/// Customer inquiry seam.
#[async_trait]
pub trait InquiryStore: Send + Sync {
    async fn insert(&self, inquiry: CustomerInquiry) -> Result<CustomerInquiry, StoreError>;

    async fn get(&self, id: u64) -> Result<Option<CustomerInquiry>, StoreError>;

    async fn list(&self, skip: usize, take: usize) -> Result<Vec<CustomerInquiry>, StoreError>;

    async fn update(&self, inquiry: CustomerInquiry) -> Result<(), StoreError>;
}
