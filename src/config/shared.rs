//! Process-wide configuration handle.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::AppConfig;

/// Shared, swappable configuration.
///
/// Created once with defaults, filled by the loader, then read by whoever
/// holds a clone. Readers always see a complete `AppConfig`, never a
/// half-applied one.
#[derive(Debug, Clone)]
pub struct SharedConfig {
    inner: Arc<ArcSwap<AppConfig>>,
}

impl SharedConfig {
    pub fn new(config: AppConfig) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// Snapshot of the current configuration.
    pub fn get(&self) -> Arc<AppConfig> {
        self.inner.load_full()
    }

    /// Replace the configuration wholesale.
    pub fn store(&self, config: AppConfig) {
        self.inner.store(Arc::new(config));
    }
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
