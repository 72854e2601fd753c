//! Autoscaler policy and annotation constants.

/// Name of the config map carrying the autoscaler policy.
pub const CONFIG_NAME: &str = "config-autoscaler";

/// Config key: minimum continuous active time before a target may be
/// marked inactive, in whole seconds.
pub const KEY_SCALE_TO_ZERO_IDLE_PERIOD: &str = "scale-to-zero-idle-period";

/// Config key: minimum continuous inactive time before a target may
/// actually scale to zero, in whole seconds.
pub const KEY_SCALE_TO_ZERO_GRACE_PERIOD: &str = "scale-to-zero-grace-period";

/// Default idle period (5 minutes) when the config map omits the key.
pub const DEFAULT_SCALE_TO_ZERO_IDLE_PERIOD_SECS: u64 = 300;

/// Default grace period (30 seconds) when the config map omits the key.
pub const DEFAULT_SCALE_TO_ZERO_GRACE_PERIOD_SECS: u64 = 30;

/// Annotation holding a target's minimum replica count.
pub const MIN_SCALE_ANNOTATION: &str = "autoscaling.kpa.dev/min-scale";

/// Annotation holding a target's maximum replica count (0 = unbounded).
pub const MAX_SCALE_ANNOTATION: &str = "autoscaling.kpa.dev/max-scale";

/// Kind of the controller owner a pod autoscaler must hang off of.
pub const OWNER_KIND: &str = "Revision";

/// API version of the controller owner.
pub const OWNER_API_VERSION: &str = "serving.kpa.dev/v1alpha1";
