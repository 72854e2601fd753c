//! Shared data model for the kpa-rs autoscaler.

pub mod config;
pub mod kpa;
pub mod validate;
