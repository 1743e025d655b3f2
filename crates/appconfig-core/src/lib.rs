//! AppConfig Core
//!
//! Layered resolution and validation of the credentials a front-end needs to
//! reach its hosted backends (Supabase and Userbase).
//!
//! A [`ConfigResolver`] probes an ordered list of sources for each secret
//! (build-time values, a runtime global object, the process environment and
//! a development fallback table), rejects template placeholders, and reports
//! problems through a logger and a host-supplied [`HelpSurface`]. Missing
//! configuration is never an error: the host keeps running and the backend
//! SDKs fail on their own terms.
//!
//! ```rust,ignore
//! use appconfig_core::{ConfigResolver, ResolverSettings, RuntimeGlobalSource};
//!
//! let settings = ResolverSettings::discover(".")?;
//! let resolver = ConfigResolver::builder()
//!     .settings(&settings)
//!     .runtime_global(RuntimeGlobalSource::from_json_str(injected_env)?)
//!     .help_surface(|req: &HelpRequest| show_panel(req.element_id, &req.markup()))
//!     .build();
//!
//! if resolver.is_configured() {
//!     init_backends(resolver.get());
//! }
//! ```

pub mod types;
pub mod sources;
pub mod logging;
pub mod config;
pub mod resolver;
pub mod help;
pub mod build;

// Re-export commonly used types
pub use types::{
    SecretName, ResolvedConfig, SupabaseConfig, UserbaseConfig,
    ResolvedVariable, ConfigurationStatus,
};

pub use sources::{
    VariableSource, SharedSource,
    BuildTimeSource, RuntimeGlobalSource, ProcessEnvSource, MemorySource,
};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger, MemoryLogger};

pub use config::{ConfigError, ConfigResult, ResolverSettings, SettingsFile};

pub use resolver::{ConfigResolver, ConfigResolverBuilder, PlaceholderRules};

pub use help::{HelpSurface, HelpRequest, LogHelpSurface, NoHelpSurface, HELP_ELEMENT_ID};

pub use build::{BuildInjection, load_env};
