use crate::error::ScalerError;
use async_trait::async_trait;
use pkg_types::kpa::ScaleTargetRef;
use pkg_types::validate::validate_name;

/// Identifies a scalable resource kind, e.g. `("apps", "deployments")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupResource {
    pub group: String,
    pub resource: String,
}

impl GroupResource {
    /// Derive the group/resource pair from a scale target reference.
    /// `api_version` is `version` or `group/version`; anything else is
    /// a malformed reference.
    pub fn from_target_ref(target: &ScaleTargetRef) -> Result<Self, ScalerError> {
        let parts: Vec<&str> = target.api_version.split('/').collect();
        let group = match parts.as_slice() {
            [version] if !version.is_empty() => String::new(),
            [group, version] if !version.is_empty() => group.to_string(),
            _ => {
                return Err(ScalerError::invalid_target_ref(format!(
                    "unparsable api version {:?}",
                    target.api_version
                )));
            }
        };
        if target.kind.is_empty() {
            return Err(ScalerError::invalid_target_ref("missing kind"));
        }
        validate_name(&target.name)
            .map_err(|err| ScalerError::invalid_target_ref(err.to_string()))?;
        Ok(Self {
            group,
            resource: kind_to_resource(&target.kind),
        })
    }
}

/// Guess the resource name for a kind the way apimachinery does:
/// lowercase, then `…s` -> `…ses`, `…y` -> `…ies`, otherwise append `s`.
fn kind_to_resource(kind: &str) -> String {
    let lower = kind.to_ascii_lowercase();
    if let Some(stem) = lower.strip_suffix('y') {
        format!("{}ies", stem)
    } else if lower.ends_with('s') {
        format!("{}es", lower)
    } else {
        format!("{}s", lower)
    }
}

/// Access to the remote scale sub-resource of a target. Updates are
/// last-writer-wins at the remote store; timeout and retry policy belong
/// to the implementation, not to the decision engine.
#[async_trait]
pub trait ScaleClient: Send + Sync {
    /// Current replica count of the scale sub-resource.
    async fn get_scale(
        &self,
        resource: &GroupResource,
        namespace: &str,
        name: &str,
    ) -> anyhow::Result<u32>;

    /// Set the replica count of the scale sub-resource.
    async fn update_scale(
        &self,
        resource: &GroupResource,
        namespace: &str,
        name: &str,
        replicas: u32,
    ) -> anyhow::Result<()>;
}
