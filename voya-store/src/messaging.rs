use std::sync::Arc;

use chrono::Utc;

use crate::models::{
    CustomerInquiry, CustomerMessage, InquiryStatus, MessagePriority, MessageType,
};
use crate::repository::{InquiryStore, MessageStore, StoreError};

/// Staff-to-customer messaging.
#[derive(Clone)]
pub struct CustomerMessageService {
    store: Arc<dyn MessageStore>,
}

impl CustomerMessageService {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn send(
        &self,
        sender_id: &str,
        sender_name: &str,
        recipient_email: &str,
        subject: &str,
        body: &str,
        message_type: MessageType,
        priority: MessagePriority,
        related_booking_id: Option<u64>,
    ) -> Result<CustomerMessage, StoreError> {
        tracing::info!(sender_id, recipient_email, subject, "sending customer message");
        self.store
            .insert(CustomerMessage {
                id: 0,
                sender_id: sender_id.to_string(),
                sender_name: sender_name.to_string(),
                recipient_email: recipient_email.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
                message_type,
                priority,
                related_booking_id,
                sent_at: Utc::now(),
                read_at: None,
            })
            .await
    }

    pub async fn messages_for(&self, email: &str) -> Result<Vec<CustomerMessage>, StoreError> {
        self.store.list_for_recipient(email).await
    }

    pub async fn sent_by(&self, sender_id: &str) -> Result<Vec<CustomerMessage>, StoreError> {
        self.store.list_for_sender(sender_id).await
    }

    /// Mark a message read, but only by its recipient. Returns false when
    /// the message does not exist or belongs to another recipient.
    pub async fn mark_read(&self, id: u64, recipient_email: &str) -> Result<bool, StoreError> {
        let Some(message) = self.store.get(id).await? else {
            return Ok(false);
        };
        if !message.recipient_email.eq_ignore_ascii_case(recipient_email) {
            tracing::warn!(id, recipient_email, "mark-read refused for non-recipient");
            return Ok(false);
        }
        self.store.set_read(id, Utc::now()).await?;
        Ok(true)
    }

    pub async fn unread_count(&self, email: &str) -> Result<usize, StoreError> {
        self.store.unread_count(email).await
    }
}

/// Customer inquiries and the agents' replies to them.
#[derive(Clone)]
pub struct InquiryService {
    store: Arc<dyn InquiryStore>,
}

impl InquiryService {
    pub fn new(store: Arc<dyn InquiryStore>) -> Self {
        Self { store }
    }

    pub async fn submit(
        &self,
        customer_name: &str,
        customer_email: &str,
        subject: &str,
        message: &str,
        booking_id: Option<u64>,
    ) -> Result<CustomerInquiry, StoreError> {
        let now = Utc::now();
        self.store
            .insert(CustomerInquiry {
                id: 0,
                customer_name: customer_name.to_string(),
                customer_email: customer_email.to_string(),
                booking_id,
                subject: subject.to_string(),
                message: message.to_string(),
                status: InquiryStatus::Open,
                priority: MessagePriority::Normal,
                submitted_at: now,
                last_updated: now,
                agent_reply: None,
                replied_by: None,
                reply_at: None,
            })
            .await
    }

    pub async fn list(&self, skip: usize, take: usize) -> Result<Vec<CustomerInquiry>, StoreError> {
        self.store.list(skip, take).await
    }

    /// Record an agent's reply and mark the inquiry answered.
    pub async fn reply(
        &self,
        id: u64,
        agent: &str,
        reply: &str,
    ) -> Result<CustomerInquiry, StoreError> {
        let mut inquiry = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("inquiry {id}")))?;

        let now = Utc::now();
        inquiry.agent_reply = Some(reply.to_string());
        inquiry.replied_by = Some(agent.to_string());
        inquiry.reply_at = Some(now);
        inquiry.status = InquiryStatus::Answered;
        inquiry.last_updated = now;

        self.store.update(inquiry.clone()).await?;
        tracing::info!(id, agent, "inquiry answered");
        Ok(inquiry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{InMemoryInquiries, InMemoryMessages};

    fn messages() -> CustomerMessageService {
        CustomerMessageService::new(Arc::new(InMemoryMessages::new()))
    }

    fn inquiries() -> InquiryService {
        InquiryService::new(Arc::new(InMemoryInquiries::new()))
    }

    #[tokio::test]
    async fn test_unread_count_tracks_mark_read() {
        let svc = messages();
        let sent = svc
            .send(
                "agent-1",
                "Sam Agent",
                "anna@example.com",
                "Your trip",
                "Gate change for your flight.",
                MessageType::BookingChange,
                MessagePriority::High,
                Some(1),
            )
            .await
            .unwrap();

        assert_eq!(svc.unread_count("anna@example.com").await.unwrap(), 1);
        assert!(svc.mark_read(sent.id, "anna@example.com").await.unwrap());
        assert_eq!(svc.unread_count("anna@example.com").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_only_the_recipient_can_mark_read() {
        let svc = messages();
        let sent = svc
            .send(
                "agent-1",
                "Sam Agent",
                "anna@example.com",
                "Hello",
                "body",
                MessageType::General,
                MessagePriority::Normal,
                None,
            )
            .await
            .unwrap();

        assert!(!svc.mark_read(sent.id, "bob@example.com").await.unwrap());
        assert!(!svc.mark_read(999, "anna@example.com").await.unwrap());
        assert_eq!(svc.unread_count("anna@example.com").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_recipient_listing_is_scoped() {
        let svc = messages();
        for recipient in ["anna@example.com", "bob@example.com", "anna@example.com"] {
            svc.send(
                "agent-1",
                "Sam Agent",
                recipient,
                "s",
                "b",
                MessageType::General,
                MessagePriority::Normal,
                None,
            )
            .await
            .unwrap();
        }

        assert_eq!(svc.messages_for("anna@example.com").await.unwrap().len(), 2);
        assert_eq!(svc.sent_by("agent-1").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_agent_reply_marks_inquiry_answered() {
        let svc = inquiries();
        let inquiry = svc
            .submit(
                "Anna",
                "anna@example.com",
                "Where is my confirmation?",
                "I booked yesterday but got no mail.",
                Some(1),
            )
            .await
            .unwrap();
        assert_eq!(inquiry.status, InquiryStatus::Open);

        let replied = svc
            .reply(inquiry.id, "agent-1", "It was re-sent just now.")
            .await
            .unwrap();
        assert_eq!(replied.status, InquiryStatus::Answered);
        assert_eq!(replied.replied_by.as_deref(), Some("agent-1"));
        assert!(replied.reply_at.is_some());

        let listed = svc.list(0, 10).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].status, InquiryStatus::Answered);
    }

    #[tokio::test]
    async fn test_reply_to_missing_inquiry_is_not_found() {
        let err = inquiries().reply(42, "agent-1", "hello").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
