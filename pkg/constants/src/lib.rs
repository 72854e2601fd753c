//! Centralized constants for the kpa-rs project.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod autoscaling;
