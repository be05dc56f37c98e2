//! Display model for profile bookmarks.

use serde::Serialize;

/// Structured profile fields derived from a profile bookmark, either passed
/// through from a structured capture or cleaned out of scraped text.
///
/// Text fields default to empty strings; empty means "not captured".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileCard {
    pub name: String,
    pub headline: String,
    pub profile_photo: Option<String>,
    pub profile_url: Option<String>,
    pub location: String,
    pub current_company: String,
    /// Always contains the word "connections" when non-empty.
    pub connections_count: String,
    pub followers_count: String,
    pub connection_degree: String,
    pub website: String,
    /// Cleaned about text: no duplicated block, no "Top skills" tail.
    pub about: String,
    /// Each entry is non-empty and shorter than 30 characters.
    pub skills: Vec<String>,
}
