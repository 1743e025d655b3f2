//! Layered resolution of the front-end's backend credentials
//!
//! Source priority (first accepted value wins), each probed with the prefixed
//! variable name first and the bare name second:
//! 1. Build-time injected variables
//! 2. Runtime global object (`__ENV__`)
//! 3. Process environment
//! 4. Development fallback table (empty unless configured)
//!
//! The resolver is built once, resolves and validates in its constructor, and
//! is then read-only. Pass it (or the [`ResolvedConfig`] it produced) to
//! whatever needs it; there is no global instance.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use super::placeholder::{is_accepted, PlaceholderRules};
use crate::config::{ResolverSettings, DEFAULT_PREFIX};
use crate::{log_debug, log_warn};
use crate::help::{HelpRequest, LogHelpSurface, SharedHelpSurface, HelpSurface};
use crate::logging::{ConsoleLogger, Logger, SharedLogger};
use crate::sources::{
    BuildTimeSource, MemorySource, ProcessEnvSource, RuntimeGlobalSource, SharedSource,
    VariableSource,
};
use crate::types::{ConfigurationStatus, ResolvedConfig, ResolvedVariable, SecretName};

/// Resolves, stores and validates the three backend secrets
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use appconfig_core::resolver::ConfigResolver;
/// use appconfig_core::sources::{BuildTimeSource, RuntimeGlobalSource};
/// use appconfig_core::logging::NoOpLogger;
///
/// let resolver = ConfigResolver::builder()
///     .logger(Arc::new(NoOpLogger))
///     .build_time(BuildTimeSource::from_map([
///         ("VITE_SUPABASE_URL", "https://abcd1234.supabase.co"),
///         ("VITE_SUPABASE_ANON_KEY", "eyJhbGciOi.anon"),
///         ("VITE_USERBASE_APP_ID", "5f1c2e9a-app"),
///     ]))
///     .runtime_global(RuntimeGlobalSource::missing())
///     .build();
///
/// assert!(resolver.is_configured());
/// assert_eq!(resolver.get().supabase.url.as_deref(), Some("https://abcd1234.supabase.co"));
/// ```
pub struct ConfigResolver {
    sources: Vec<SharedSource>,
    prefix: String,
    rules: PlaceholderRules,
    logger: SharedLogger,
    help: SharedHelpSurface,
    config: ResolvedConfig,
    origins: HashMap<SecretName, ResolvedVariable>,
}

impl ConfigResolver {
    /// Start building a resolver
    pub fn builder() -> ConfigResolverBuilder {
        ConfigResolverBuilder::new()
    }

    /// Resolver over the standard sources, configured from settings
    ///
    /// Build-time values come from `option_env!` captures, the runtime global
    /// is whatever the host injected (pass [`RuntimeGlobalSource::missing`]
    /// when there is none).
    pub fn from_settings(
        settings: &ResolverSettings,
        runtime_global: RuntimeGlobalSource,
        logger: SharedLogger,
    ) -> Self {
        Self::builder()
            .settings(settings)
            .runtime_global(runtime_global)
            .logger(logger)
            .build()
    }

    /// Look up one secret, first accepted value wins
    ///
    /// Returns `None` when no source has an accepted value. That is an
    /// expected outcome, reported with a warning rather than an error.
    pub fn resolve(&self, name: SecretName) -> Option<String> {
        self.resolve_with_source(name).map(|resolved| resolved.value)
    }

    /// Like [`resolve`](Self::resolve), but also reports where the value came from
    pub fn resolve_with_source(&self, name: SecretName) -> Option<ResolvedVariable> {
        let candidates = name.candidates(&self.prefix);

        for source in &self.sources {
            if !source.is_available() {
                log_debug!(self.logger, "Source '{}' not available, skipping", source.name());
                continue;
            }
            for variable in &candidates {
                let Some(value) = source.get(variable) else {
                    continue;
                };
                if !is_accepted(&value) {
                    log_debug!(
                        self.logger,
                        "Ignoring empty or undefined {} in source '{}'",
                        variable,
                        source.name()
                    );
                    continue;
                }
                log_debug!(
                    self.logger,
                    "Resolved {} from source '{}' ({})",
                    name,
                    source.name(),
                    variable
                );
                return Some(ResolvedVariable {
                    value,
                    source: source.name().to_string(),
                    variable: variable.clone(),
                });
            }
        }

        let tried: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        log_warn!(
            self.logger,
            "{} not found; tried {} in sources [{}]",
            name,
            candidates.join(", "),
            tried.join(", ")
        );
        None
    }

    /// Re-check the stored values and report problems
    ///
    /// Missing or placeholder values are logged and the help surface is shown.
    /// Never fails; returns the offending secrets (empty when all is well).
    pub fn validate(&self) -> Vec<SecretName> {
        let invalid: Vec<SecretName> = SecretName::ALL
            .into_iter()
            .filter(|name| !self.rules.is_set(self.config.value(*name)))
            .collect();

        if invalid.is_empty() {
            self.logger.info("Configuration loaded: all backend credentials are set");
            return invalid;
        }

        let paths: Vec<&str> = invalid.iter().map(|name| name.field_path()).collect();
        log_warn!(
            self.logger,
            "Missing or placeholder configuration values: {}",
            paths.join(", ")
        );
        self.help.show(&HelpRequest::new(invalid.clone(), &self.prefix));
        invalid
    }

    /// Whether all three values are present and not placeholders
    pub fn is_configured(&self) -> bool {
        let configured = self.configuration_status().all();
        log_debug!(
            self.logger,
            "Configuration status: {}",
            if configured { "configured" } else { "not configured" }
        );
        configured
    }

    /// Per-field readiness
    pub fn configuration_status(&self) -> ConfigurationStatus {
        let mut status = ConfigurationStatus::default();
        for name in SecretName::ALL {
            status.set(name, self.rules.is_set(self.config.value(name)));
        }
        status
    }

    /// The resolved configuration, for SDK initializers
    pub fn get(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Consume the resolver, keeping only the configuration
    pub fn into_config(self) -> ResolvedConfig {
        self.config
    }

    /// Where a stored value came from, if it was resolved
    pub fn origin(&self, name: SecretName) -> Option<&ResolvedVariable> {
        self.origins.get(&name)
    }

    /// Prefix tried before bare variable names
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Source names in probe order
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Placeholder rules used by validation
    pub fn rules(&self) -> &PlaceholderRules {
        &self.rules
    }

    fn resolve_all(&mut self) {
        for name in SecretName::ALL {
            let resolved = self.resolve_with_source(name);
            self.config.set(name, resolved.as_ref().map(|r| r.value.clone()));
            if let Some(resolved) = resolved {
                self.origins.insert(name, resolved);
            }
        }
    }
}

impl std::fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Values are credentials; only show which ones are present
        f.debug_struct("ConfigResolver")
            .field("sources", &self.source_names())
            .field("prefix", &self.prefix)
            .field("status", &self.configuration_status())
            .finish()
    }
}

/// Builder for [`ConfigResolver`]
///
/// Unset slots fall back to the standard sources: compiled-in build-time
/// values, no runtime global, the live process environment and an empty
/// development fallback table.
pub struct ConfigResolverBuilder {
    build_time: Option<SharedSource>,
    runtime_global: Option<SharedSource>,
    process_env: Option<SharedSource>,
    dev_fallback: BTreeMap<String, String>,
    custom_sources: Option<Vec<SharedSource>>,
    prefix: String,
    rules: PlaceholderRules,
    logger: Option<SharedLogger>,
    help: Option<SharedHelpSurface>,
}

impl Default for ConfigResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolverBuilder {
    pub fn new() -> Self {
        Self {
            build_time: None,
            runtime_global: None,
            process_env: None,
            dev_fallback: BTreeMap::new(),
            custom_sources: None,
            prefix: DEFAULT_PREFIX.to_string(),
            rules: PlaceholderRules::default(),
            logger: None,
            help: None,
        }
    }

    /// Apply prefix, extra placeholder patterns and dev fallback from settings
    ///
    /// Extra patterns are added to the current rules. Dev fallback entries are
    /// merged; entries given through [`dev_fallback`](Self::dev_fallback) win.
    pub fn settings(mut self, settings: &ResolverSettings) -> Self {
        self.prefix = settings.prefix.clone();
        self.rules = self
            .rules
            .extended(settings.extra_placeholder_patterns.iter().cloned());
        for (variable, value) in &settings.dev_fallback {
            self.dev_fallback
                .entry(variable.clone())
                .or_insert_with(|| value.clone());
        }
        self
    }

    /// Replace the build-time source
    pub fn build_time(mut self, source: impl VariableSource + 'static) -> Self {
        self.build_time = Some(Arc::new(source));
        self
    }

    /// Replace the runtime global source
    pub fn runtime_global(mut self, source: impl VariableSource + 'static) -> Self {
        self.runtime_global = Some(Arc::new(source));
        self
    }

    /// Replace the process environment source
    pub fn process_env(mut self, source: impl VariableSource + 'static) -> Self {
        self.process_env = Some(Arc::new(source));
        self
    }

    /// Add a manual override to the development fallback table
    ///
    /// Overrides any entry for the same variable coming from settings.
    pub fn dev_fallback(mut self, variable: impl Into<String>, value: impl Into<String>) -> Self {
        self.dev_fallback.insert(variable.into(), value.into());
        self
    }

    /// Probe exactly these sources, in this order, instead of the standard ones
    pub fn sources(mut self, sources: Vec<SharedSource>) -> Self {
        self.custom_sources = Some(sources);
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn placeholder_rules(mut self, rules: PlaceholderRules) -> Self {
        self.rules = rules;
        self
    }

    /// Logger for diagnostics (default: console)
    pub fn logger(mut self, logger: SharedLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Callback invoked when validation fails (default: log the help text)
    pub fn help_surface(mut self, help: impl HelpSurface + 'static) -> Self {
        self.help = Some(Arc::new(help));
        self
    }

    /// Resolve every secret, validate, and return the resolver
    pub fn build(self) -> ConfigResolver {
        let logger: SharedLogger = self
            .logger
            .unwrap_or_else(|| Arc::new(ConsoleLogger::new()));
        let help: SharedHelpSurface = self
            .help
            .unwrap_or_else(|| Arc::new(LogHelpSurface::new(logger.clone())));

        let sources: Vec<SharedSource> = match self.custom_sources {
            Some(sources) => sources,
            None => vec![
                self.build_time
                    .unwrap_or_else(|| Arc::new(BuildTimeSource::compiled())),
                self.runtime_global
                    .unwrap_or_else(|| Arc::new(RuntimeGlobalSource::missing())),
                self.process_env
                    .unwrap_or_else(|| Arc::new(ProcessEnvSource::new())),
                Arc::new(MemorySource::with_values("dev-fallback", self.dev_fallback)) as SharedSource,
            ],
        };

        let mut resolver = ConfigResolver {
            sources,
            prefix: self.prefix,
            rules: self.rules,
            logger,
            help,
            config: ResolvedConfig::new(),
            origins: HashMap::new(),
        };
        resolver.resolve_all();
        resolver.validate();
        resolver
    }
}
