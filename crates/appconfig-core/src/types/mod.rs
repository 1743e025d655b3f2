//! Core types for credential resolution
//!
//! This module contains the shared types used by sources, the resolver and
//! the build integration.

mod secret;
mod resolved;

pub use secret::SecretName;
pub use resolved::{
    ResolvedConfig, SupabaseConfig, UserbaseConfig, ResolvedVariable, ConfigurationStatus,
};
