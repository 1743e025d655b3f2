//! Credential resolution and validation
//!
//! This module provides the single entry point for resolving the front-end's
//! secrets from multiple sources with proper priority ordering, and for
//! judging whether the result is usable.

mod placeholder;
mod config_resolver;

pub use placeholder::{PlaceholderRules, is_accepted, DEFAULT_PLACEHOLDER_PATTERNS, UNDEFINED_LITERAL};
pub use config_resolver::{ConfigResolver, ConfigResolverBuilder};
