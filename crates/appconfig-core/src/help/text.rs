//! Setup instructions

pub const SUPABASE_SETUP_URL: &str = "https://supabase.com";
pub const USERBASE_SETUP_URL: &str = "https://userbase.com";

/// Plain-text setup instructions, suitable for a console
pub fn help_text() -> String {
    format!(
        "Configuration Setup Required

Please set up your environment variables:

1. Supabase Setup:
   - Go to {supabase}
   - Create a new project or use an existing one
   - Go to Settings > API
   - Copy your Project URL and anon/public key

2. Userbase Setup:
   - Go to {userbase}
   - Create an account and a new app
   - Copy your App ID

3. Update your .env file with the actual values
",
        supabase = SUPABASE_SETUP_URL,
        userbase = USERBASE_SETUP_URL,
    )
}

/// Instructional HTML naming the variables to set
pub fn help_markup(variables: &[String]) -> String {
    let items: String = variables
        .iter()
        .map(|v| format!("<li><code>{}</code></li>", escape(v)))
        .collect();

    format!(
        "<h3>Configuration Setup Required</h3>\
         <p>Set these variables in your <code>.env</code> file and restart the dev server:</p>\
         <ul>{items}</ul>\
         <p>Get your Supabase project URL and anon key from \
         <a href=\"{supabase}\" target=\"_blank\" rel=\"noopener\">Supabase</a> (Settings &gt; API) \
         and your App ID from \
         <a href=\"{userbase}\" target=\"_blank\" rel=\"noopener\">Userbase</a>.</p>",
        items = items,
        supabase = SUPABASE_SETUP_URL,
        userbase = USERBASE_SETUP_URL,
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_text_mentions_services() {
        let text = help_text();
        assert!(text.contains("https://supabase.com"));
        assert!(text.contains("https://userbase.com"));
        assert!(text.contains("Settings > API"));
        assert!(text.contains(".env"));
    }

    #[test]
    fn test_help_markup() {
        let html = help_markup(&["VITE_SUPABASE_URL".to_string(), "<x>".to_string()]);
        assert!(html.contains("<code>VITE_SUPABASE_URL</code>"));
        assert!(html.contains("<code>&lt;x&gt;</code>"));
        assert!(html.contains("href=\"https://userbase.com\""));
    }
}
