use crate::config_store::ConfigStore;
use crate::error::ScalerError;
use crate::scale_client::{GroupResource, ScaleClient};
use pkg_constants::autoscaling::{OWNER_API_VERSION, OWNER_KIND};
use pkg_types::kpa::{ActivationState, PodAutoscaler};
use std::sync::Arc;
use tracing::{debug, info};

/// Scales a pod autoscaler's target up or down, including to zero.
///
/// Stateless across calls; safe to invoke concurrently for distinct
/// targets. The only shared state is the injected [`ConfigStore`].
pub struct KpaScaler {
    scale_client: Arc<dyn ScaleClient>,
    config: Arc<ConfigStore>,
}

impl KpaScaler {
    pub fn new(scale_client: Arc<dyn ScaleClient>, config: Arc<ConfigStore>) -> Self {
        Self {
            scale_client,
            config,
        }
    }

    /// Decide the replica count to apply for `kpa`, given the
    /// metrics-derived `desired_scale` (`None` = no metrics collected
    /// yet), and push it to the scale sub-resource when it differs from
    /// the current count. Returns the intended scale, or `None` when
    /// there is not enough information to act this cycle.
    pub async fn scale(
        &self,
        kpa: &PodAutoscaler,
        desired_scale: Option<u32>,
    ) -> Result<Option<u32>, ScalerError> {
        // This engine only arbitrates for targets under its own object
        // model; the reconciler enforces the ownership chain upstream.
        if !owned_by_revision(kpa) {
            debug!("{}/{} is not owned by a Revision", kpa.namespace, kpa.name);
            return Ok(desired_scale);
        }

        let resource = GroupResource::from_target_ref(&kpa.spec.scale_target_ref)?;
        let target_name = &kpa.spec.scale_target_ref.name;

        let current = self
            .scale_client
            .get_scale(&resource, &kpa.namespace, target_name)
            .await
            .map_err(|err| ScalerError::scale_access("get", &kpa.namespace, target_name, err))?;

        let mut desired = desired_scale;
        if desired == Some(0) {
            // Scaling to zero requires both hysteresis timers to have
            // elapsed: active for the idle period first, then inactive
            // for the grace period.
            let config = self.config.snapshot().await?;
            match kpa.status.activation {
                ActivationState::Activating => {
                    // Never scale to zero mid-activation
                    desired = None;
                }
                ActivationState::Active { .. } => {
                    if kpa
                        .status
                        .can_mark_inactive(config.scale_to_zero_idle_period)
                    {
                        // The reconciler marks it inactive; no scaling this cycle
                        return Ok(Some(current));
                    }
                    // Hold one warm replica until the idle period elapses
                    desired = Some(1);
                }
                ActivationState::Inactive { .. } => {
                    if !kpa
                        .status
                        .can_scale_to_zero(config.scale_to_zero_grace_period)
                    {
                        return Ok(Some(current));
                    }
                }
            }
        }

        // Scale from zero: with no metrics yet, bring up a single replica
        // to start collecting signal.
        if current == 0 && desired.is_none() {
            debug!("{}/{}: scaling up from 0 to 1", kpa.namespace, kpa.name);
            desired = Some(1);
        }

        let Some(mut replicas) = desired else {
            debug!("{}/{}: metrics are not yet collected", kpa.namespace, kpa.name);
            return Ok(None);
        };

        let clamped = kpa.scale_bounds().apply(replicas);
        if clamped != replicas {
            debug!(
                "{}/{}: adjusting desired scale {} -> {}",
                kpa.namespace, kpa.name, replicas, clamped
            );
            replicas = clamped;
        }

        if replicas == current {
            return Ok(Some(replicas));
        }

        info!(
            "Scaling {}/{} from {} to {} replicas",
            kpa.namespace, kpa.name, current, replicas
        );
        self.scale_client
            .update_scale(&resource, &kpa.namespace, target_name, replicas)
            .await
            .map_err(|err| ScalerError::scale_access("update", &kpa.namespace, target_name, err))?;

        debug!("{}/{}: successfully scaled", kpa.namespace, kpa.name);
        Ok(Some(replicas))
    }
}

fn owned_by_revision(kpa: &PodAutoscaler) -> bool {
    kpa.owner_ref
        .as_ref()
        .is_some_and(|owner| owner.kind == OWNER_KIND && owner.api_version == OWNER_API_VERSION)
}
