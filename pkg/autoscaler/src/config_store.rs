use crate::error::ScalerError;
use pkg_types::config::AutoscalerConfig;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Holds the current autoscaler policy and swaps it atomically on each
/// config update. Decisions read an independent snapshot, so a concurrent
/// update can never tear a multi-step decision.
///
/// The lock is held only for the copy or swap itself, never across I/O.
pub struct ConfigStore {
    current: RwLock<Option<AutoscalerConfig>>,
}

impl ConfigStore {
    /// Create an empty store. The first successful [`ConfigStore::apply`]
    /// must happen before any decision is made.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    /// Entry point for the external config watcher: install a freshly
    /// parsed configuration, or record a parse failure.
    ///
    /// A failure after at least one good configuration keeps the last-good
    /// value and returns [`ScalerError::ConfigUpdate`] (recoverable). A
    /// failure before any configuration was ever installed returns
    /// [`ScalerError::ConfigInitialization`], on which the embedding
    /// process must not proceed.
    pub async fn apply(
        &self,
        update: anyhow::Result<AutoscalerConfig>,
    ) -> Result<(), ScalerError> {
        let mut current = self.current.write().await;
        match update {
            Ok(config) => {
                info!(
                    "Autoscaler config installed: idle-period={}s grace-period={}s",
                    config.scale_to_zero_idle_period.as_secs(),
                    config.scale_to_zero_grace_period.as_secs()
                );
                *current = Some(config);
                Ok(())
            }
            Err(err) if current.is_some() => {
                warn!("Rejecting autoscaler config update, keeping previous: {:#}", err);
                Err(ScalerError::ConfigUpdate(err))
            }
            Err(err) => Err(ScalerError::ConfigInitialization(err)),
        }
    }

    /// Callback-shaped entry point for config-map watch events: parse
    /// the raw data and install it in one step.
    pub async fn on_config_update(
        &self,
        data: &BTreeMap<String, String>,
    ) -> Result<(), ScalerError> {
        self.apply(AutoscalerConfig::from_map(data)).await
    }

    /// An independent copy of the current configuration, safe to use
    /// across a multi-step decision while updates race in.
    pub async fn snapshot(&self) -> Result<AutoscalerConfig, ScalerError> {
        self.current
            .read()
            .await
            .clone()
            .ok_or_else(|| ScalerError::ConfigInitialization(anyhow::anyhow!("store is empty")))
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
