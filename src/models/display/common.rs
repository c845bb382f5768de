//! Common display utilities and helpers

use chrono::{DateTime, Utc};

use crate::client::models::{Variable, Visibility};

/// Calendar date of a timestamp, `YYYY-MM-DD`
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// Sentence describing who can read an organization variable.
///
/// Empty for variables without a visibility.
pub fn describe_visibility(var: &Variable) -> String {
    match var.visibility {
        Visibility::All => "Visible to all repositories".to_string(),
        Visibility::Private => "Visible to private repositories".to_string(),
        Visibility::Selected => match var.selected_repo_count.unwrap_or(0) {
            1 => "Visible to 1 selected repository".to_string(),
            n => format!("Visible to {} selected repositories", n),
        },
        Visibility::Unset => String::new(),
    }
}
