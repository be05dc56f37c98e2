//! Profile data extractor for Stashboard.
//!
//! Turns profile bookmarks into structured [`ProfileCard`]s. Newer extension
//! versions ship a structured `linkedinProfileData` payload which passes
//! through as-is; older captures only have duplicated, concatenated scraped
//! text, which goes through the ordered cleaning pipeline below.
//!
//! The pipeline is best-effort by contract. Every step is a total pure
//! function over the text and the whole thing never errors; unparseable
//! input comes out cleaned as far as possible.

use crate::types::bookmark::Bookmark;
use crate::types::profile::ProfileCard;

const DUP_MARKER: &str = "get started.";
const SKILLS_MARKER: &str = "Top skills";
const LOCATION_MARKER: &str = "Available globally from";
const SKILL_MAX_CHARS: usize = 30;

/// Derive the profile display model from a profile-classified bookmark.
pub fn extract_profile(bookmark: &Bookmark) -> ProfileCard {
    if let Some(profile) = bookmark.linkedin_profile_data.as_ref() {
        // Clean path: structured capture, used verbatim. Only the
        // connections-count wording invariant still applies.
        if profile.name.as_deref().is_some_and(|n| !n.is_empty()) {
            return ProfileCard {
                name: profile.name.clone().unwrap_or_default(),
                headline: profile.headline.clone().unwrap_or_default(),
                profile_photo: profile.profile_photo.clone(),
                profile_url: profile
                    .profile_url
                    .clone()
                    .or_else(|| Some(bookmark.url.clone())),
                location: profile.location.clone().unwrap_or_default(),
                current_company: profile.current_company.clone().unwrap_or_default(),
                connections_count: normalize_connections(
                    profile.connections_count.as_deref().unwrap_or_default(),
                ),
                followers_count: profile.followers_count.clone().unwrap_or_default(),
                connection_degree: profile.connection_degree.clone().unwrap_or_default(),
                website: profile.website.clone().unwrap_or_default(),
                about: profile.about.clone().unwrap_or_default(),
                skills: profile.skills.clone(),
            };
        }
    }

    extract_from_scraped(bookmark)
}

/// Heuristic path over the linkedin post payload and bookmark description.
fn extract_from_scraped(bookmark: &Bookmark) -> ProfileCard {
    let author = bookmark
        .linkedin_data
        .as_ref()
        .and_then(|d| d.author.as_ref());

    let raw = bookmark
        .linkedin_data
        .as_ref()
        .and_then(|d| d.content.clone())
        .filter(|c| !c.is_empty())
        .or_else(|| bookmark.description.clone())
        .unwrap_or_default();

    let content = collapse_duplicate_halves(&raw);
    let content = collapse_marker_duplicate(&content);
    let (content, skills) = split_top_skills(&content);
    let content = strip_about_prefix(&content);
    let location = backfill_location(&content).unwrap_or_default();

    ProfileCard {
        name: author
            .and_then(|a| a.name.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| bookmark.title.clone()),
        headline: author.and_then(|a| a.headline.clone()).unwrap_or_default(),
        profile_photo: author.and_then(|a| a.avatar.clone()),
        profile_url: Some(bookmark.url.clone()),
        location,
        about: content,
        skills,
        ..ProfileCard::default()
    }
}

/// Step 1: capture payloads sometimes contain the about text repeated twice
/// back-to-back. Split at the character midpoint (floor of length / 2); if
/// the trimmed halves are equal, keep just the first half.
pub fn collapse_duplicate_halves(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mid = chars.len() / 2;
    let first: String = chars[..mid].iter().collect();
    let second: String = chars[mid..].iter().collect();
    if !first.trim().is_empty() && first.trim() == second.trim() {
        first.trim().to_string()
    } else {
        text.to_string()
    }
}

/// Step 2: marker-based fallback for duplicates the midpoint split misses.
/// Splitting on the literal `"get started."` into more than two parts means
/// the section repeated; keep only the first copy.
pub fn collapse_marker_duplicate(text: &str) -> String {
    let parts: Vec<&str> = text.split(DUP_MARKER).collect();
    if parts.len() > 2 {
        format!("{}{}{}", parts[0], DUP_MARKER, parts[1])
    } else {
        text.to_string()
    }
}

/// Step 3: pull the `"Top skills …"` tail out of the about text. Skills come
/// from everything after the LAST marker occurrence, split on `•`; tokens
/// must be non-empty and shorter than 30 characters. The remaining content
/// is everything before the FIRST occurrence.
pub fn split_top_skills(text: &str) -> (String, Vec<String>) {
    let Some(first_idx) = text.find(SKILLS_MARKER) else {
        return (text.to_string(), Vec::new());
    };
    let tail = match text.rsplit_once(SKILLS_MARKER) {
        Some((_, tail)) => tail,
        None => "",
    };
    let skills = tail
        .split('•')
        .map(str::trim)
        .filter(|s| !s.is_empty() && s.chars().count() < SKILL_MAX_CHARS)
        .map(str::to_string)
        .collect();
    (text[..first_idx].trim_end().to_string(), skills)
}

/// Step 4: drop a leading `"About "` label left over from the page section
/// heading.
pub fn strip_about_prefix(text: &str) -> String {
    text.strip_prefix("About ").unwrap_or(text).to_string()
}

/// Step 5: location backfill when no structured location was captured.
/// Prefers the `"Available globally from"` phrasing (up to the first period
/// or newline); otherwise takes the text after the LAST `|` separator.
pub fn backfill_location(text: &str) -> Option<String> {
    if let Some(idx) = text.find(LOCATION_MARKER) {
        let rest = &text[idx + LOCATION_MARKER.len()..];
        let end = rest.find(['.', '\n']).unwrap_or(rest.len());
        let location = rest[..end].trim();
        if !location.is_empty() {
            return Some(location.to_string());
        }
        return None;
    }
    if let Some((_, after)) = text.rsplit_once('|') {
        let location = after.trim();
        if !location.is_empty() {
            return Some(location.to_string());
        }
    }
    None
}

/// Step 6: a connections count always reads as "... connections". Appends
/// the word unless it is already there (case-insensitive).
pub fn normalize_connections(count: &str) -> String {
    if count.is_empty() || count.to_lowercase().contains("connections") {
        count.to_string()
    } else {
        format!("{} connections", count)
    }
}
