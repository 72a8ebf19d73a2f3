use anyhow::ensure;
use clap::Subcommand;
use myn_config::Config;
use myn_email_contracts::{ContentType, Email, EmailService};
use myn_models::email_address::EmailAddressWithName;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddressWithName },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let email_service = crate::email::connect(&config.email).await?;

    let ok = email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            body: "Email deliverability seems to be working!".into(),
            content_type: ContentType::Text,
            reply_to: None,
        })
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}
