use std::sync::Arc;

use myn_api_rest::RestServer;
use myn_config::Config;
use myn_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use myn_core_health_impl::HealthServiceImpl;
use myn_email_contracts::EmailService;
use myn_templates_impl::TemplateServiceImpl;
use tracing::info;

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email).await?;
    email.ping().await?;

    let contact = ContactServiceImpl::new(
        email.clone(),
        TemplateServiceImpl::new(),
        ContactServiceConfig {
            recipient: Arc::new(config.contact.email),
            delivery_timeout: config.contact.delivery_timeout.into(),
        },
    );
    let health = HealthServiceImpl::new(email);

    let server = RestServer::new(health, contact);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
