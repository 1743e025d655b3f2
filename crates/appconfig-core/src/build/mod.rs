//! Build pipeline integration
//!
//! Mirrors what a front-end build config does with the three secrets: load
//! mode-specific `.env` files, pick the prefixed form of each variable over
//! the bare form, and emit both a runtime global object and compile-time
//! define constants.

mod env_files;
mod injection;

pub use env_files::{load_env, env_file_names};
pub use injection::{BuildInjection, RUNTIME_GLOBAL_NAME};
