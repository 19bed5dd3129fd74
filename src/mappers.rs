pub mod github_mapper;
pub mod post_mapper;
pub mod user_mapper;

use crate::models::envelope::Metadata;

/// "Showing 3 posts" when the envelope reported a count.
pub fn to_summary(metadata: &Metadata, singular: &str, plural: &str) -> Option<String> {
    metadata.count.map(|count| {
        let noun = if count == 1 { singular } else { plural };
        format!("Showing {} {}", count, noun)
    })
}

// Absent and blank optional fields are both omitted.
fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
