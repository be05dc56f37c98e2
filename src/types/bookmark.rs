//! Bookmark record and per-platform capture payloads.
//!
//! Bookmarks arrive from the REST backend in a heterogeneous shape: exactly
//! one of the platform payloads is meaningfully populated depending on the
//! bookmark kind, and every nested field may be missing. All payload fields
//! are therefore optional-tolerant so a partial capture never fails the
//! whole list response.

use serde::{Deserialize, Serialize};

/// Sentinel tag that marks a bookmark as a saved person/profile.
pub const PROFILE_TAG: &str = "profile";

/// Classification of a saved bookmark.
///
/// Unknown kinds sent by a newer backend deserialize to `Link` so the list
/// degrades to generic website rendering instead of rejecting the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookmarkKind {
    Tweet,
    Linkedin,
    LinkedinProfile,
    Article,
    Thread,
    Twitter,
    #[serde(other)]
    Link,
}

impl Default for BookmarkKind {
    fn default() -> Self {
        BookmarkKind::Link
    }
}

/// Where the bookmark was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkSource {
    Web,
    #[serde(other)]
    Extension,
}

impl Default for BookmarkSource {
    fn default() -> Self {
        BookmarkSource::Web
    }
}

/// Media asset type inside a capture payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Gif,
}

impl Default for MediaKind {
    fn default() -> Self {
        MediaKind::Image
    }
}

/// A single media asset. Video items may carry only a `poster` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(rename = "type", default)]
    pub kind: MediaKind,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
}

/// Engagement counters attached to post-type payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostStats {
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub reposts: u64,
    #[serde(default)]
    pub likes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetAuthor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetData {
    #[serde(default)]
    pub author: Option<TweetAuthor>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub stats: Option<PostStats>,
    #[serde(default)]
    pub images: Vec<MediaItem>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedinAuthor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedinData {
    #[serde(default)]
    pub author: Option<LinkedinAuthor>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub stats: Option<PostStats>,
    #[serde(default)]
    pub images: Vec<MediaItem>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    /// Set by the capture tool when the page was a person profile rather
    /// than a feed post.
    #[serde(default)]
    pub is_profile: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadAuthor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadData {
    #[serde(default)]
    pub author: Option<ThreadAuthor>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub stats: Option<PostStats>,
    #[serde(default)]
    pub images: Vec<MediaItem>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleData {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<MediaItem>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

/// Structured profile capture produced by newer extension versions.
/// When present, profile rendering uses it verbatim (the clean path).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedinProfileData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub current_company: Option<String>,
    #[serde(default)]
    pub connections_count: Option<String>,
    #[serde(default)]
    pub followers_count: Option<String>,
    #[serde(default)]
    pub connection_degree: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterProfileData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub followers_count: Option<String>,
}

fn default_folder() -> String {
    "uncategorized".to_string()
}

/// A saved reference to external content plus its captured payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub favicon: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub workspace_id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: BookmarkKind,
    #[serde(default)]
    pub source: BookmarkSource,
    #[serde(default = "default_folder")]
    pub folder: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tweet_data: Option<TweetData>,
    #[serde(default)]
    pub linkedin_data: Option<LinkedinData>,
    #[serde(default)]
    pub article_data: Option<ArticleData>,
    #[serde(default)]
    pub thread_data: Option<ThreadData>,
    #[serde(default)]
    pub linkedin_profile_data: Option<LinkedinProfileData>,
    #[serde(default)]
    pub twitter_profile_data: Option<TwitterProfileData>,
}

impl Bookmark {
    /// The profile predicate. A bookmark represents a saved person when the
    /// profile tag is present, the linkedin capture flagged a profile page,
    /// or a structured profile payload exists.
    ///
    /// Every place that distinguishes profile bookmarks from post bookmarks
    /// (list filtering, card badges, detail routing) must go through this.
    pub fn is_profile(&self) -> bool {
        self.tags.iter().any(|t| t == PROFILE_TAG)
            || self
                .linkedin_data
                .as_ref()
                .is_some_and(|d| d.is_profile)
            || self.linkedin_profile_data.is_some()
    }
}
