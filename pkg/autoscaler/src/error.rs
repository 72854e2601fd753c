use thiserror::Error;

/// Errors surfaced by the scale-decision core. The engine never retries
/// internally; the reconcile loop owns retry and backoff.
#[derive(Debug, Error)]
pub enum ScalerError {
    /// The scale target reference cannot be resolved to a resource.
    /// Not retryable without operator intervention.
    #[error("invalid scale target reference: {reason}")]
    InvalidTargetReference { reason: String },

    /// A get or update of the scale sub-resource failed. Transient;
    /// the caller retries on the next reconciliation.
    #[error("scale {op} failed for {namespace}/{name}")]
    ScaleAccess {
        op: &'static str,
        namespace: String,
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// No valid autoscaler configuration has ever been installed.
    /// Fatal at process start: scale-to-zero cannot be decided without policy.
    #[error("autoscaler configuration was never initialized")]
    ConfigInitialization(#[source] anyhow::Error),

    /// A configuration update failed to parse. The previous configuration
    /// is retained; the process keeps running on the last-good policy.
    #[error("autoscaler configuration update rejected, previous retained")]
    ConfigUpdate(#[source] anyhow::Error),
}

impl ScalerError {
    pub(crate) fn invalid_target_ref(reason: impl Into<String>) -> Self {
        Self::InvalidTargetReference {
            reason: reason.into(),
        }
    }

    pub(crate) fn scale_access(
        op: &'static str,
        namespace: &str,
        name: &str,
        source: anyhow::Error,
    ) -> Self {
        Self::ScaleAccess {
            op,
            namespace: namespace.to_string(),
            name: name.to_string(),
            source,
        }
    }
}
