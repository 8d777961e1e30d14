//! Shared-secret comparison.

use std::time::Duration;

use crate::config::NibbleConfig;

/// Delay applied before every comparison result is returned.
pub const AUTH_DELAY: Duration = Duration::from_millis(100);

/// Compares presented tokens against the configured secret.
///
/// Every call sleeps for the configured delay first, whatever the outcome,
/// to throttle brute-force probing. The sleep suspends only the calling
/// task. The comparison itself is plain string equality.
#[derive(Debug, Clone, Copy)]
pub struct Authenticator {
    delay: Duration,
}

impl Authenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn authenticate(&self, config: &NibbleConfig, token: &str) -> bool {
        tokio::time::sleep(self.delay).await;
        config.token == token
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new(AUTH_DELAY)
    }
}

/// Compare `token` against `config` with the default delay.
pub async fn authenticate(config: &NibbleConfig, token: &str) -> bool {
    Authenticator::default().authenticate(config, token).await
}
