//! Persistence layer and back-office services: bookings, activity logs,
//! customer messages and inquiries, plus application configuration.
//!
//! Stores are trait seams with in-memory implementations; package contents
//! themselves are never persisted (the package identifier carries them).

pub mod activity;
pub mod app_config;
pub mod booking;
pub mod memory;
pub mod messaging;
pub mod models;
pub mod repository;

pub use activity::ActivityLogService;
pub use app_config::Config;
pub use booking::BookingService;
pub use memory::{InMemoryActivityLog, InMemoryBookings, InMemoryInquiries, InMemoryMessages};
pub use messaging::{CustomerMessageService, InquiryService};
pub use models::{
    ActivityLog, Booking, BookingStatus, CustomerInquiry, CustomerMessage, InquiryStatus,
    MessagePriority, MessageType,
};
pub use repository::{ActivityLogStore, BookingStore, InquiryStore, MessageStore, StoreError};
