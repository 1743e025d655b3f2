//! Variable source abstractions and implementations
//!
//! This module provides the pluggable lookup layer the resolver walks:
//! - `VariableSource` trait for implementing custom sources
//! - Built-in implementations: `BuildTimeSource`, `RuntimeGlobalSource`,
//!   `ProcessEnvSource`, `MemorySource`

mod traits;
mod build_time;
mod runtime_global;
mod env_source;
mod memory_source;

pub use traits::{VariableSource, SharedSource};
pub use build_time::BuildTimeSource;
pub use runtime_global::RuntimeGlobalSource;
pub use env_source::ProcessEnvSource;
pub use memory_source::MemorySource;
