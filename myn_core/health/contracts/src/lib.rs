use std::future::Future;

use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait HealthService: Send + Sync + 'static {
    /// Check the availability of the services this backend depends on.
    fn health(&self) -> impl Future<Output = HealthStatus> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub email: bool,
}

impl HealthStatus {
    pub fn ok(&self) -> bool {
        self.email
    }
}

#[cfg(feature = "mock")]
impl MockHealthService {
    pub fn with_health(mut self, status: HealthStatus) -> Self {
        self.expect_health()
            .once()
            .return_once(move || Box::pin(std::future::ready(status)));
        self
    }
}
