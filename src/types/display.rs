//! Normalized display model derived from a [`Bookmark`](crate::types::bookmark::Bookmark).
//!
//! Never persisted; recomputed at render time.

use serde::Serialize;

use crate::types::bookmark::MediaItem;

/// Author identity shown on a bookmark card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardAuthor {
    pub name: String,
    /// May be empty; `@`-prefixed for tweet authors.
    pub handle: String,
    pub avatar: Option<String>,
}

/// Engagement counters shown on post-type cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngagementStats {
    pub comments: u64,
    pub reposts: u64,
    pub likes: u64,
}

/// Content-type badge with its fixed label/color mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardBadge {
    pub label: &'static str,
    pub color: &'static str,
}

/// Uniform display model for one bookmark card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookmarkCard {
    pub author: CardAuthor,
    pub content: String,
    pub stats: Option<EngagementStats>,
    /// Deduplicated, blob-free, order-preserving media sequence.
    pub media: Vec<MediaItem>,
    pub badge: CardBadge,
}

/// Card body after the collapsed-view truncation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardPreview {
    pub text: String,
    /// True when the full content exceeds the preview limit; the caller owns
    /// the show-more toggle and resets it per rendered bookmark.
    pub truncated: bool,
}
