use std::net::IpAddr;

use axum::Router;
use myn_core_contact_contracts::ContactService;
use myn_core_health_contracts::HealthService;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthService,
    Contact: ContactService,
{
    pub fn new(health: Health, contact: Contact) -> Self {
        Self { health, contact }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .layer(TraceLayer::new_for_http())
            // The website is served separately.
            .layer(CorsLayer::permissive())
    }
}
