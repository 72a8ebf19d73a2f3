use myn_core_health_contracts::{HealthService, HealthStatus};
use myn_email_contracts::EmailService;

#[derive(Debug, Clone)]
pub struct HealthServiceImpl<Email> {
    email: Email,
}

impl<Email> HealthServiceImpl<Email> {
    pub fn new(email: Email) -> Self {
        Self { email }
    }
}

impl<EmailS> HealthService for HealthServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn health(&self) -> HealthStatus {
        let email = match self.email.ping().await {
            Ok(()) => true,
            Err(err) => {
                tracing::error!("Failed to ping smtp server: {err:#}");
                false
            }
        };

        HealthStatus { email }
    }
}
