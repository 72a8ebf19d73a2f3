use std::{sync::Arc, time::Duration};

use myn_core_contact_contracts::ContactService;
use myn_email_contracts::{ContentType, Email, EmailService};
use myn_models::{
    contact::SubmissionResult, email_address::EmailAddressWithName, inquiry::InquiryInput,
};
use myn_templates_contracts::{InquiryEmailTemplate, TemplateService};

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email, Template> {
    email: Email,
    template: Template,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Intake address of the business.
    pub recipient: Arc<EmailAddressWithName>,
    /// Upper bound on the outbound smtp call. Expiry is reported as a
    /// delivery failure.
    pub delivery_timeout: Duration,
}

impl<Email, Template> ContactServiceImpl<Email, Template> {
    pub fn new(email: Email, template: Template, config: ContactServiceConfig) -> Self {
        Self {
            email,
            template,
            config,
        }
    }
}

impl<EmailS, TemplateS> ContactService for ContactServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn submit_inquiry(
        &self,
        _previous: Option<SubmissionResult>,
        input: InquiryInput,
    ) -> SubmissionResult {
        let inquiry = match input.validate() {
            Ok(inquiry) => inquiry,
            Err(errors) => return SubmissionResult::validation_failed(errors),
        };

        let subject = format!(
            "Nueva consulta de {} {} - {}",
            *inquiry.first_name, *inquiry.last_name, inquiry.service
        );
        let reply_to = inquiry.email.clone().with_name(format!(
            "{} {}",
            *inquiry.first_name, *inquiry.last_name
        ));

        let body = match self.template.render(&InquiryEmailTemplate {
            first_name: inquiry.first_name.into_inner(),
            last_name: inquiry.last_name.into_inner(),
            phone: inquiry.phone.into_inner(),
            email: inquiry.email.as_str().into(),
            service: inquiry.service.to_string(),
            message: inquiry.message.into_inner().replace('\n', "<br>"),
        }) {
            Ok(body) => body,
            Err(err) => {
                tracing::error!("Failed to render inquiry email: {err:#}");
                return SubmissionResult::delivery_failed();
            }
        };

        let email = Email {
            recipient: (*self.config.recipient).clone(),
            subject,
            body,
            content_type: ContentType::Html,
            reply_to: Some(reply_to),
        };

        match tokio::time::timeout(self.config.delivery_timeout, self.email.send(email)).await {
            Ok(Ok(true)) => SubmissionResult::succeeded(),
            Ok(Ok(false)) => {
                tracing::error!("Smtp server rejected the inquiry email");
                SubmissionResult::delivery_failed()
            }
            Ok(Err(err)) => {
                tracing::error!("Failed to send inquiry email: {err:#}");
                SubmissionResult::delivery_failed()
            }
            Err(_) => {
                tracing::error!(
                    timeout = ?self.config.delivery_timeout,
                    "Timed out sending inquiry email"
                );
                SubmissionResult::delivery_failed()
            }
        }
    }
}
