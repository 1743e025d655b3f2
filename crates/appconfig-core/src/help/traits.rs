//! Help surface trait and request type

use std::sync::Arc;

use crate::types::SecretName;

/// Identifier of the page element that hosts the help panel
pub const HELP_ELEMENT_ID: &str = "configHelp";

/// What the host needs to show help for a failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpRequest {
    /// Element the help panel lives in
    pub element_id: &'static str,
    /// Secrets that are missing or still placeholders
    pub invalid: Vec<SecretName>,
    /// Variable names the user should set, prefixed form first
    pub variables: Vec<String>,
}

impl HelpRequest {
    pub fn new(invalid: Vec<SecretName>, prefix: &str) -> Self {
        let variables = SecretName::ALL
            .iter()
            .flat_map(|name| name.candidates(prefix))
            .collect();
        Self {
            element_id: HELP_ELEMENT_ID,
            invalid,
            variables,
        }
    }

    /// Field paths of the offending secrets
    pub fn field_paths(&self) -> Vec<&'static str> {
        self.invalid.iter().map(|name| name.field_path()).collect()
    }

    /// Instructional HTML for the help panel
    pub fn markup(&self) -> String {
        super::text::help_markup(&self.variables)
    }
}

/// The "on-invalid" callback a host provides
///
/// Any `Fn(&HelpRequest)` closure is a help surface:
///
/// ```
/// use appconfig_core::help::{HelpSurface, HelpRequest};
///
/// let surface = |req: &HelpRequest| println!("show #{}", req.element_id);
/// surface.show(&HelpRequest::new(vec![], "VITE_"));
/// ```
pub trait HelpSurface: Send + Sync {
    /// Reveal help for the given request
    fn show(&self, request: &HelpRequest);
}

impl<F> HelpSurface for F
where
    F: Fn(&HelpRequest) + Send + Sync,
{
    fn show(&self, request: &HelpRequest) {
        self(request)
    }
}

/// Type alias for an Arc-wrapped help surface
pub type SharedHelpSurface = Arc<dyn HelpSurface>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_lists_every_variable() {
        let request = HelpRequest::new(vec![SecretName::UserbaseAppId], "VITE_");

        assert_eq!(request.element_id, "configHelp");
        assert_eq!(request.field_paths(), vec!["userbase.appId"]);
        assert_eq!(request.variables.len(), 6);
        assert_eq!(request.variables[0], "VITE_SUPABASE_URL");
        assert!(request.variables.contains(&"USERBASE_APP_ID".to_string()));
        assert!(request.markup().contains("VITE_USERBASE_APP_ID"));
    }

    #[test]
    fn test_closure_surface() {
        let shown = parking_lot::Mutex::new(Vec::new());
        let surface = |req: &HelpRequest| shown.lock().push(req.field_paths());

        surface.show(&HelpRequest::new(vec![SecretName::SupabaseUrl], ""));
        assert_eq!(shown.lock().as_slice(), &[vec!["supabase.url"]]);
    }
}
