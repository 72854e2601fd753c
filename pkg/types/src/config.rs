use anyhow::{Context, bail};
use pkg_constants::autoscaling::{
    DEFAULT_SCALE_TO_ZERO_GRACE_PERIOD_SECS, DEFAULT_SCALE_TO_ZERO_IDLE_PERIOD_SECS,
    KEY_SCALE_TO_ZERO_GRACE_PERIOD, KEY_SCALE_TO_ZERO_IDLE_PERIOD,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Autoscaler policy, replaced wholesale on every config-map update.
///
/// Example `config-autoscaler` data:
/// ```yaml
/// scale-to-zero-idle-period: "300"
/// scale-to-zero-grace-period: "30"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoscalerConfig {
    /// Minimum continuous active time before a target may be marked inactive.
    pub scale_to_zero_idle_period: Duration,
    /// Minimum continuous inactive time before a target may scale to zero.
    pub scale_to_zero_grace_period: Duration,
}

impl Default for AutoscalerConfig {
    fn default() -> Self {
        Self {
            scale_to_zero_idle_period: Duration::from_secs(
                DEFAULT_SCALE_TO_ZERO_IDLE_PERIOD_SECS,
            ),
            scale_to_zero_grace_period: Duration::from_secs(
                DEFAULT_SCALE_TO_ZERO_GRACE_PERIOD_SECS,
            ),
        }
    }
}

impl AutoscalerConfig {
    /// Parse the policy from config-map data. Missing keys take the
    /// defaults; unparsable or zero periods are an error (a zero period
    /// would defeat the scale-to-zero hysteresis entirely).
    pub fn from_map(data: &BTreeMap<String, String>) -> anyhow::Result<Self> {
        Ok(Self {
            scale_to_zero_idle_period: parse_period_secs(
                data,
                KEY_SCALE_TO_ZERO_IDLE_PERIOD,
                DEFAULT_SCALE_TO_ZERO_IDLE_PERIOD_SECS,
            )?,
            scale_to_zero_grace_period: parse_period_secs(
                data,
                KEY_SCALE_TO_ZERO_GRACE_PERIOD,
                DEFAULT_SCALE_TO_ZERO_GRACE_PERIOD_SECS,
            )?,
        })
    }
}

fn parse_period_secs(
    data: &BTreeMap<String, String>,
    key: &str,
    default_secs: u64,
) -> anyhow::Result<Duration> {
    let secs = match data.get(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("invalid value {:?} for {}", raw, key))?,
        None => default_secs,
    };
    if secs == 0 {
        bail!("{} must be greater than zero", key);
    }
    Ok(Duration::from_secs(secs))
}
