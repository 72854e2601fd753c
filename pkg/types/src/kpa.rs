use chrono::{DateTime, Utc};
use pkg_constants::autoscaling::{MAX_SCALE_ANNOTATION, MIN_SCALE_ANNOTATION};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

// --- Target references ---

/// Reference to the resource whose scale sub-resource is manipulated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleTargetRef {
    /// `version` or `group/version`, e.g. `apps/v1`
    pub api_version: String,
    pub kind: String,
    pub name: String,
}

/// Reference to the controller object that owns a pod autoscaler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerRef {
    pub api_version: String,
    pub kind: String,
    pub name: String,
}

// --- Activation status ---

/// Where the target is on the path between serving and scaled-to-zero.
/// Transitions are driven by the reconciler; this crate only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ActivationState {
    /// Scale-up in progress, readiness not yet confirmed.
    Activating,
    /// Serving traffic since the given instant.
    Active { since: DateTime<Utc> },
    /// Not serving traffic since the given instant.
    Inactive { since: DateTime<Utc> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpaStatus {
    pub activation: ActivationState,
}

impl KpaStatus {
    pub fn is_activating(&self) -> bool {
        matches!(self.activation, ActivationState::Activating)
    }

    pub fn is_active(&self) -> bool {
        matches!(self.activation, ActivationState::Active { .. })
    }

    /// True when the target has been continuously active for at least
    /// `idle` and may therefore be marked inactive by the reconciler.
    pub fn can_mark_inactive(&self, idle: Duration) -> bool {
        match self.activation {
            ActivationState::Active { since } => elapsed_at_least(since, idle),
            _ => false,
        }
    }

    /// True when the target has been continuously inactive for at least
    /// `grace` and may therefore actually scale to zero.
    pub fn can_scale_to_zero(&self, grace: Duration) -> bool {
        match self.activation {
            ActivationState::Inactive { since } => elapsed_at_least(since, grace),
            _ => false,
        }
    }
}

/// A `since` in the future (clock skew across nodes) counts as not elapsed.
fn elapsed_at_least(since: DateTime<Utc>, d: Duration) -> bool {
    Utc::now()
        .signed_duration_since(since)
        .to_std()
        .map(|elapsed| elapsed >= d)
        .unwrap_or(false)
}

// --- Scale bounds ---

/// Per-target replica bounds. `max == 0` means unbounded.
/// Invariant: `min <= max` whenever `max != 0` (enforced upstream).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleBounds {
    pub min: u32,
    pub max: u32,
}

impl ScaleBounds {
    /// Clamp a replica count into the bounds.
    pub fn apply(&self, replicas: u32) -> u32 {
        if replicas < self.min {
            self.min
        } else if self.max != 0 && replicas > self.max {
            self.max
        } else {
            replicas
        }
    }
}

// --- Pod autoscaler ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpaSpec {
    pub scale_target_ref: ScaleTargetRef,
}

/// Scale-to-zero-capable pod autoscaler for a single target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodAutoscaler {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
    #[serde(default)]
    pub owner_ref: Option<OwnerRef>,
    pub spec: KpaSpec,
    pub status: KpaStatus,
    pub created_at: DateTime<Utc>,
}

impl PodAutoscaler {
    /// Replica bounds from the min-scale/max-scale annotations.
    /// Absent or unparsable values fall back to 0 (no minimum / unbounded).
    pub fn scale_bounds(&self) -> ScaleBounds {
        ScaleBounds {
            min: annotation_u32(&self.annotations, MIN_SCALE_ANNOTATION),
            max: annotation_u32(&self.annotations, MAX_SCALE_ANNOTATION),
        }
    }
}

fn annotation_u32(annotations: &HashMap<String, String>, key: &str) -> u32 {
    annotations
        .get(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}
