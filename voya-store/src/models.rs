use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use voya_package::TravelPackage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

/// A confirmed purchase of one travel package.
///
/// The package fields are snapshotted at booking time; the price charged is
/// the price the synthesizer computed from the package identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: u64,
    pub user_email: String,
    pub booking_date: DateTime<Utc>,
    pub status: BookingStatus,
    pub total_price: Decimal,
    pub package: TravelPackage,
}

/// One entry in the append-only staff audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: u64,
    pub user: String,
    pub action: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    General,
    BookingChange,
    BookingConfirmation,
    Support,
    SystemNotification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessagePriority {
    Low,
    Normal,
    High,
    Urgent,
}

/// A staff-to-customer message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerMessage {
    pub id: u64,
    pub sender_id: String,
    pub sender_name: String,
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
    pub message_type: MessageType,
    pub priority: MessagePriority,
    pub related_booking_id: Option<u64>,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

impl CustomerMessage {
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InquiryStatus {
    Open,
    Answered,
    Closed,
}

/// A customer support inquiry, optionally tied to a booking, with the
/// agent's reply recorded in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInquiry {
    pub id: u64,
    pub customer_name: String,
    pub customer_email: String,
    pub booking_id: Option<u64>,
    pub subject: String,
    pub message: String,
    pub status: InquiryStatus,
    pub priority: MessagePriority,
    pub submitted_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub agent_reply: Option<String>,
    pub replied_by: Option<String>,
    pub reply_at: Option<DateTime<Utc>>,
}
