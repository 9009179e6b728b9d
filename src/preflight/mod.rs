//! Environment verification.
//!
//! The verifier confirms an interpreter is on PATH and every required file
//! exists before anything else is allowed to run. It stops at the first
//! missing prerequisite and never retries.
//!
//! # Modules
//!
//! - [`verifier`] - The fail-fast checks and remediation hints
//! - [`report`] - Serializable results for `launchpad check`

pub mod report;
pub mod verifier;

pub use report::{CheckReport, FileCheck};
pub use verifier::{remediation_hint, VerifiedEnvironment, Verifier};
