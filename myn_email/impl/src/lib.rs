use anyhow::anyhow;
use lettre::{
    message::header, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use myn_email_contracts::{ContentType, Email, EmailService};
use myn_models::email_address::EmailAddressWithName;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    pub async fn new(url: &str, from: EmailAddressWithName) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self { from, transport })
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let mut builder = Message::builder()
            .from(self.from.0.clone())
            .to(email.recipient.0)
            .subject(email.subject)
            .header(match email.content_type {
                ContentType::Text => header::ContentType::TEXT_PLAIN,
                ContentType::Html => header::ContentType::TEXT_HTML,
            });
        if let Some(reply_to) = email.reply_to {
            builder = builder.reply_to(reply_to.0);
        }
        let message = builder.body(email.body)?;

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}
