//! Acceptance and placeholder detection

use once_cell::sync::Lazy;

/// What a bundler substitutes for a variable that was never defined
pub const UNDEFINED_LITERAL: &str = "undefined";

/// Substrings found in template values shipped with `.env.example` files
pub const DEFAULT_PLACEHOLDER_PATTERNS: &[&str] = &[
    "your_",
    "YOUR_",
    "your-project.supabase.co",
    "your-project-ref",
    "your-anon-key",
    "your-app-id",
];

static STANDARD_RULES: Lazy<PlaceholderRules> = Lazy::new(|| PlaceholderRules {
    patterns: DEFAULT_PLACEHOLDER_PATTERNS.iter().map(|p| p.to_string()).collect(),
});

/// Whether a raw candidate from a source can be used at all
///
/// Empty strings and the literal `"undefined"` count as absent.
pub fn is_accepted(candidate: &str) -> bool {
    !candidate.is_empty() && candidate != UNDEFINED_LITERAL
}

/// Placeholder detection rules
///
/// Always contains [`DEFAULT_PLACEHOLDER_PATTERNS`]; extra patterns can be
/// added but the standard ones can't be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderRules {
    patterns: Vec<String>,
}

impl Default for PlaceholderRules {
    fn default() -> Self {
        Self::standard().clone()
    }
}

impl PlaceholderRules {
    /// The standard patterns plus `extra`
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::standard().extended(extra)
    }

    /// The built-in pattern set
    pub fn standard() -> &'static PlaceholderRules {
        &STANDARD_RULES
    }

    /// Copy of these rules with more patterns; empty and duplicate patterns are ignored
    pub fn extended<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut patterns = self.patterns.clone();
        for pattern in extra.into_iter().map(Into::into) {
            if !pattern.is_empty() && !patterns.contains(&pattern) {
                patterns.push(pattern);
            }
        }
        Self { patterns }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether the value contains a placeholder pattern
    pub fn is_placeholder(&self, value: &str) -> bool {
        self.patterns.iter().any(|p| value.contains(p.as_str()))
    }

    /// Whether a stored value counts as configured
    pub fn is_set(&self, value: Option<&str>) -> bool {
        match value {
            Some(v) => is_accepted(v) && !self.is_placeholder(v),
            None => false,
        }
    }
}
