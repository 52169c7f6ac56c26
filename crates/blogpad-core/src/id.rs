// ABOUTME: Id generation and date formatting shared by posts and comments.
// ABOUTME: Ids are ULIDs; dates are plain YYYY-MM-DD strings.

use chrono::Utc;
use ulid::Ulid;

/// Generate a new entity id: a millisecond timestamp plus 80 random bits.
/// Collision resistant for a single local user, not a security token.
pub fn generate_id() -> String {
    Ulid::new().to_string()
}

/// Return `explicit` unchanged when given, otherwise today's UTC date.
pub fn format_date(explicit: Option<&str>) -> String {
    match explicit {
        Some(date) if !date.is_empty() => date.to_string(),
        _ => Utc::now().date_naive().format("%Y-%m-%d").to_string(),
    }
}
