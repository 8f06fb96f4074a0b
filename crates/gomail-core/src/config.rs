//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration shared by the core components.
///
/// The domain constants are deployment configuration, never user input:
/// `mail_domain` gates registration, `admin_domain_suffix` marks privileged
/// identities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Base URL of the service, including the API prefix.
    pub api_base_url: String,
    /// Only addresses under this domain may register.
    pub mail_domain: String,
    /// Identities ending with this suffix hold the admin role.
    pub admin_domain_suffix: String,
    /// Maximum gap between two clicks to count as one open-detail gesture.
    pub double_click_threshold_ms: u64,
    /// How long a notification stays visible unless dismissed.
    pub notification_ttl_ms: u64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8081/api/v1".to_string(),
            mail_domain: "gomail.kurs".to_string(),
            admin_domain_suffix: "admin.gomail.kurs".to_string(),
            double_click_threshold_ms: 300,
            notification_ttl_ms: 2000,
        }
    }
}

impl CoreConfig {
    /// Double-click window as a [`Duration`].
    #[must_use]
    pub const fn double_click_threshold(&self) -> Duration {
        Duration::from_millis(self.double_click_threshold_ms)
    }

    /// Notification lifetime as a [`Duration`].
    #[must_use]
    pub const fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}
