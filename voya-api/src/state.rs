use std::sync::Arc;

use voya_package::PackageSynthesizer;
use voya_store::{ActivityLogService, BookingService, CustomerMessageService, InquiryService};

#[derive(Clone)]
pub struct AppState {
    pub synthesizer: Arc<PackageSynthesizer>,
    pub bookings: BookingService,
    pub messages: CustomerMessageService,
    pub inquiries: InquiryService,
    pub activity: ActivityLogService,
}
