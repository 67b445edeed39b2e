//! Contact form forwarding

use log::{info, warn};

use crate::application::ports::{ContactSubmission, SharedCrmSync};
use crate::domain::{DomainError, DomainResult};

pub struct ContactService {
    crm: SharedCrmSync,
}

impl ContactService {
    pub fn new(crm: SharedCrmSync) -> Self {
        Self { crm }
    }

    /// Forward a lead to the CRM. Unlike booking sync, a CRM failure here
    /// is reported to the caller.
    pub async fn submit(&self, submission: ContactSubmission) -> DomainResult<()> {
        if let (Some(check_in), Some(check_out)) = (submission.check_in, submission.check_out) {
            if check_out <= check_in {
                return Err(DomainError::Validation(
                    "Check-out date must be after check-in date".to_string(),
                ));
            }
        }

        self.crm.submit_contact(&submission).await.map_err(|e| {
            metrics::counter!("crm_sync_failures_total", "kind" => "contact").increment(1);
            warn!("Contact submission from {} failed: {}", submission.email, e);
            DomainError::Upstream(e.to_string())
        })?;
        info!("Contact submission from {} forwarded", submission.email);
        Ok(())
    }
}
