//! User-facing help when configuration is missing
//!
//! The resolver never touches a UI directly. When validation fails it hands a
//! [`HelpRequest`] to whatever [`HelpSurface`] the host supplied: a closure
//! that reveals the page's help panel, a logger-backed surface, or nothing.

mod traits;
mod text;
mod surfaces;

pub use traits::{HelpSurface, HelpRequest, SharedHelpSurface, HELP_ELEMENT_ID};
pub use text::{help_text, help_markup, SUPABASE_SETUP_URL, USERBASE_SETUP_URL};
pub use surfaces::{LogHelpSurface, NoHelpSurface};
