//! Bookmark normalizer for Stashboard.
//!
//! Derives the uniform card display model from the heterogeneous per-platform
//! capture payloads. Pure and total: deterministic for a given bookmark, and
//! missing fields degrade to safe defaults instead of failing — rendering
//! must never crash on partial data.

use std::collections::HashSet;

use url::Url;

use crate::types::bookmark::{Bookmark, BookmarkKind, MediaItem, PostStats};
use crate::types::display::{BookmarkCard, CardAuthor, CardBadge, CardPreview, EngagementStats};

/// Maximum card body length before the collapsed view truncates.
pub const PREVIEW_LIMIT: usize = 280;

/// Local object URLs captured by the extension are ephemeral and must never
/// reach the rendered media list.
const BLOB_SCHEME: &str = "blob:";

/// Derive the display model for one bookmark.
pub fn normalize(bookmark: &Bookmark) -> BookmarkCard {
    BookmarkCard {
        author: derive_author(bookmark),
        content: derive_content(bookmark),
        stats: derive_stats(bookmark),
        media: merge_media(bookmark),
        badge: derive_badge(bookmark),
    }
}

/// Collapsed-view body: content over [`PREVIEW_LIMIT`] chars is cut and
/// marked truncated. The show-more toggle lives with the caller and resets
/// whenever a different bookmark is rendered.
pub fn preview(card: &BookmarkCard) -> CardPreview {
    let char_count = card.content.chars().count();
    if char_count <= PREVIEW_LIMIT {
        return CardPreview {
            text: card.content.clone(),
            truncated: false,
        };
    }
    let mut text: String = card.content.chars().take(PREVIEW_LIMIT).collect();
    text.push('…');
    CardPreview {
        text,
        truncated: true,
    }
}

/// Author precedence by kind. The match is exhaustive on purpose: adding a
/// new kind must force a decision here rather than silently falling through
/// to the hostname fallback.
fn derive_author(bookmark: &Bookmark) -> CardAuthor {
    match bookmark.kind {
        BookmarkKind::Tweet => {
            let author = bookmark.tweet_data.as_ref().and_then(|d| d.author.as_ref());
            CardAuthor {
                name: author
                    .and_then(|a| a.name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                handle: author
                    .and_then(|a| a.handle.as_deref())
                    .filter(|h| !h.is_empty())
                    .map(|h| format!("@{}", h.trim_start_matches('@')))
                    .unwrap_or_default(),
                avatar: author.and_then(|a| a.avatar.clone()),
            }
        }
        BookmarkKind::Linkedin => {
            let author = bookmark
                .linkedin_data
                .as_ref()
                .and_then(|d| d.author.as_ref());
            CardAuthor {
                name: author
                    .and_then(|a| a.name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                handle: author.and_then(|a| a.headline.clone()).unwrap_or_default(),
                avatar: author.and_then(|a| a.avatar.clone()),
            }
        }
        BookmarkKind::Thread => {
            let author = bookmark
                .thread_data
                .as_ref()
                .and_then(|d| d.author.as_ref());
            CardAuthor {
                name: author
                    .and_then(|a| a.name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                handle: author.and_then(|a| a.username.clone()).unwrap_or_default(),
                avatar: author.and_then(|a| a.avatar.clone()),
            }
        }
        BookmarkKind::Link
        | BookmarkKind::Article
        | BookmarkKind::Twitter
        | BookmarkKind::LinkedinProfile => hostname_author(bookmark),
    }
}

/// Fallback author for generic captures: the hostname with a leading `www.`
/// stripped, or the literal `"Article"` when the URL does not parse.
fn hostname_author(bookmark: &Bookmark) -> CardAuthor {
    let name = Url::parse(&bookmark.url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
        .map(|h| h.trim_start_matches("www.").to_string())
        .unwrap_or_else(|| "Article".to_string());
    CardAuthor {
        name,
        handle: String::new(),
        avatar: bookmark.favicon.clone(),
    }
}

/// Content precedence: kind-matched payload content, then description,
/// then title. Empty strings count as missing.
fn derive_content(bookmark: &Bookmark) -> String {
    let payload_content = match bookmark.kind {
        BookmarkKind::Tweet => bookmark.tweet_data.as_ref().and_then(|d| d.content.clone()),
        BookmarkKind::Linkedin => bookmark
            .linkedin_data
            .as_ref()
            .and_then(|d| d.content.clone()),
        BookmarkKind::Thread => bookmark
            .thread_data
            .as_ref()
            .and_then(|d| d.content.clone()),
        BookmarkKind::Link
        | BookmarkKind::Article
        | BookmarkKind::Twitter
        | BookmarkKind::LinkedinProfile => None,
    };

    payload_content
        .filter(|c| !c.is_empty())
        .or_else(|| bookmark.description.clone().filter(|d| !d.is_empty()))
        .unwrap_or_else(|| bookmark.title.clone())
}

/// Stats exist only for post-type kinds whose payload carries them.
fn derive_stats(bookmark: &Bookmark) -> Option<EngagementStats> {
    let stats: &PostStats = match bookmark.kind {
        BookmarkKind::Tweet => bookmark.tweet_data.as_ref()?.stats.as_ref()?,
        BookmarkKind::Linkedin => bookmark.linkedin_data.as_ref()?.stats.as_ref()?,
        BookmarkKind::Thread => bookmark.thread_data.as_ref()?.stats.as_ref()?,
        BookmarkKind::Link
        | BookmarkKind::Article
        | BookmarkKind::Twitter
        | BookmarkKind::LinkedinProfile => return None,
    };
    Some(EngagementStats {
        comments: stats.comments,
        reposts: stats.reposts,
        likes: stats.likes,
    })
}

/// Merge the payload's `images` and `media` arrays into one deduplicated,
/// order-preserving sequence. The capture tool can place the same asset in
/// both arrays, so items are keyed by resolved URL (`url`, else `poster`);
/// empty keys, blob-scheme keys, and already-seen keys are skipped.
fn merge_media(bookmark: &Bookmark) -> Vec<MediaItem> {
    let (images, media): (&[MediaItem], &[MediaItem]) = match bookmark.kind {
        BookmarkKind::Tweet => match bookmark.tweet_data.as_ref() {
            Some(d) => (&d.images, &d.media),
            None => (&[], &[]),
        },
        BookmarkKind::Linkedin => match bookmark.linkedin_data.as_ref() {
            Some(d) => (&d.images, &d.media),
            None => (&[], &[]),
        },
        BookmarkKind::Thread => match bookmark.thread_data.as_ref() {
            Some(d) => (&d.images, &d.media),
            None => (&[], &[]),
        },
        BookmarkKind::Article | BookmarkKind::Link => match bookmark.article_data.as_ref() {
            Some(d) => (&d.images, &d.media),
            None => (&[], &[]),
        },
        BookmarkKind::Twitter | BookmarkKind::LinkedinProfile => (&[], &[]),
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for item in images.iter().chain(media.iter()) {
        let key = item
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
            .or_else(|| item.poster.as_deref().filter(|p| !p.is_empty()));
        let Some(key) = key else { continue };
        if key.starts_with(BLOB_SCHEME) {
            continue;
        }
        if !seen.insert(key.to_string()) {
            continue;
        }
        out.push(item.clone());
    }
    out
}

/// Badge mapping. The profile predicate takes priority over the kind; unknown
/// kinds land on `Link` at deserialization and get the generic Website badge.
fn derive_badge(bookmark: &Bookmark) -> CardBadge {
    if bookmark.is_profile() {
        return CardBadge {
            label: "Profile",
            color: "#0a66c2",
        };
    }
    match bookmark.kind {
        BookmarkKind::Tweet | BookmarkKind::Twitter => CardBadge {
            label: "Tweet",
            color: "#1d9bf0",
        },
        BookmarkKind::Linkedin => CardBadge {
            label: "LinkedIn",
            color: "#0a66c2",
        },
        BookmarkKind::LinkedinProfile => CardBadge {
            label: "Profile",
            color: "#0a66c2",
        },
        BookmarkKind::Thread => CardBadge {
            label: "Thread",
            color: "#8b5cf6",
        },
        BookmarkKind::Article => CardBadge {
            label: "Article",
            color: "#f59e0b",
        },
        BookmarkKind::Link => CardBadge {
            label: "Website",
            color: "#6b7280",
        },
    }
}
