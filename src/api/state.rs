//! Application state for the Child Support Calculation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PolicyConfig;

/// Shared application state.
///
/// Holds the statutory policy loaded once at startup and shared read-only
/// across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The statutory policy for the active tax year.
    policy: Arc<PolicyConfig>,
}

impl AppState {
    /// Creates a new application state around the given policy.
    pub fn new(policy: PolicyConfig) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns a reference to the statutory policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }
}
