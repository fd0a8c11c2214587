//! Application layer: discovery, rendering and the reconcile/sync workflows

pub mod services;
pub mod use_cases;
