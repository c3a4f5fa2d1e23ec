//! In-memory store implementations behind the repository traits.
//!
//! Relational persistence is out of scope here; these keep the trait seams
//! honest and make the services fully testable without infrastructure.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::models::{ActivityLog, Booking, BookingStatus, CustomerInquiry, CustomerMessage};
use crate::repository::{
    ActivityLogStore, BookingStore, InquiryStore, MessageStore, StoreError,
};

#[derive(Default)]
pub struct InMemoryBookings {
    next_id: AtomicU64,
    rows: RwLock<Vec<Booking>>,
}

impl InMemoryBookings {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookings {
    async fn insert(&self, mut booking: Booking) -> Result<Booking, StoreError> {
        booking.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.rows.write().await.push(booking.clone());
        Ok(booking)
    }

    async fn get(&self, id: u64) -> Result<Option<Booking>, StoreError> {
        Ok(self.rows.read().await.iter().find(|b| b.id == id).cloned())
    }

    async fn list_for_user(&self, email: &str) -> Result<Vec<Booking>, StoreError> {
        let mut rows: Vec<Booking> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|b| b.user_email.eq_ignore_ascii_case(email))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.booking_date.cmp(&a.booking_date));
        Ok(rows)
    }

    async fn list_all(&self, skip: usize, take: usize) -> Result<Vec<Booking>, StoreError> {
        let mut rows: Vec<Booking> = self.rows.read().await.clone();
        rows.sort_by(|a, b| b.booking_date.cmp(&a.booking_date));
        Ok(rows.into_iter().skip(skip).take(take).collect())
    }

    async fn set_status(&self, id: u64, status: BookingStatus) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|b| b.id == id) {
            Some(row) => {
                row.status = status;
                Ok(())
            }
            None => Err(StoreError::NotFound(format!("booking {id}"))),
        }
    }
}

#[derive(Default)]
pub struct InMemoryActivityLog {
    next_id: AtomicU64,
    rows: RwLock<Vec<ActivityLog>>,
}

impl InMemoryActivityLog {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(rows: &mut [ActivityLog]) {
    rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

#[async_trait]
impl ActivityLogStore for InMemoryActivityLog {
    async fn append(&self, mut entry: ActivityLog) -> Result<(), StoreError> {
        entry.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.rows.write().await.push(entry);
        Ok(())
    }

    async fn list(&self, skip: usize, take: usize) -> Result<Vec<ActivityLog>, StoreError> {
        let mut rows = self.rows.read().await.clone();
        newest_first(&mut rows);
        Ok(rows.into_iter().skip(skip).take(take).collect())
    }

    async fn list_for_user(
        &self,
        user: &str,
        skip: usize,
        take: usize,
    ) -> Result<Vec<ActivityLog>, StoreError> {
        let mut rows: Vec<ActivityLog> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|e| e.user.eq_ignore_ascii_case(user))
            .cloned()
            .collect();
        newest_first(&mut rows);
        Ok(rows.into_iter().skip(skip).take(take).collect())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.rows.read().await.len())
    }

    async fn search(
        &self,
        term: &str,
        skip: usize,
        take: usize,
    ) -> Result<Vec<ActivityLog>, StoreError> {
        let needle = term.to_lowercase();
        let mut rows: Vec<ActivityLog> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|e| {
                needle.is_empty()
                    || e.user.to_lowercase().contains(&needle)
                    || e.action.to_lowercase().contains(&needle)
                    || e.details.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        newest_first(&mut rows);
        Ok(rows.into_iter().skip(skip).take(take).collect())
    }
}

#[derive(Default)]
pub struct InMemoryMessages {
    next_id: AtomicU64,
    rows: RwLock<Vec<CustomerMessage>>,
}

impl InMemoryMessages {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessages {
    async fn insert(&self, mut message: CustomerMessage) -> Result<CustomerMessage, StoreError> {
        message.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.rows.write().await.push(message.clone());
        Ok(message)
    }

    async fn get(&self, id: u64) -> Result<Option<CustomerMessage>, StoreError> {
        Ok(self.rows.read().await.iter().find(|m| m.id == id).cloned())
    }

    async fn list_for_recipient(&self, email: &str) -> Result<Vec<CustomerMessage>, StoreError> {
        let mut rows: Vec<CustomerMessage> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|m| m.recipient_email.eq_ignore_ascii_case(email))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));
        Ok(rows)
    }

    async fn list_for_sender(&self, sender_id: &str) -> Result<Vec<CustomerMessage>, StoreError> {
        let mut rows: Vec<CustomerMessage> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|m| m.sender_id == sender_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));
        Ok(rows)
    }

    async fn set_read(&self, id: u64, read_at: DateTime<Utc>) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|m| m.id == id) {
            Some(row) => {
                row.read_at.get_or_insert(read_at);
                Ok(())
            }
            None => Err(StoreError::NotFound(format!("message {id}"))),
        }
    }

    async fn unread_count(&self, email: &str) -> Result<usize, StoreError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|m| m.recipient_email.eq_ignore_ascii_case(email) && !m.is_read())
            .count())
    }
}

#[derive(Default)]
pub struct InMemoryInquiries {
    next_id: AtomicU64,
    rows: RwLock<Vec<CustomerInquiry>>,
}

impl InMemoryInquiries {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InquiryStore for InMemoryInquiries {
    async fn insert(&self, mut inquiry: CustomerInquiry) -> Result<CustomerInquiry, StoreError> {
        inquiry.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.rows.write().await.push(inquiry.clone());
        Ok(inquiry)
    }

    async fn get(&self, id: u64) -> Result<Option<CustomerInquiry>, StoreError> {
        Ok(self.rows.read().await.iter().find(|i| i.id == id).cloned())
    }

    async fn list(&self, skip: usize, take: usize) -> Result<Vec<CustomerInquiry>, StoreError> {
        let mut rows = self.rows.read().await.clone();
        rows.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(rows.into_iter().skip(skip).take(take).collect())
    }

    async fn update(&self, inquiry: CustomerInquiry) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|i| i.id == inquiry.id) {
            Some(row) => {
                *row = inquiry;
                Ok(())
            }
            None => Err(StoreError::NotFound(format!("inquiry {}", inquiry.id))),
        }
    }
}
