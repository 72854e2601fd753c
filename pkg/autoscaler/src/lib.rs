//! Scale-decision core of the kpa-rs autoscaler.
//!
//! Arbitrates between the metrics-derived desired scale, the target's
//! activation state, and operator policy to produce the replica count a
//! reconciler should apply. The reconcile loop, metric collection, and
//! the remote scale store all live outside this crate.

pub mod config_store;
pub mod error;
pub mod scale_client;
pub mod scaler;

pub use config_store::ConfigStore;
pub use error::ScalerError;
pub use scale_client::{GroupResource, ScaleClient};
pub use scaler::KpaScaler;
