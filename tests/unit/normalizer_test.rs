// Card derivation tests: author/content/stats precedence, media merging,
// badge mapping, and preview truncation.

use stashboard::services::normalizer::{normalize, preview, PREVIEW_LIMIT};
use stashboard::types::bookmark::{
    Bookmark, BookmarkKind, BookmarkSource, LinkedinAuthor, LinkedinData, MediaItem, MediaKind,
    PostStats, ThreadAuthor, ThreadData, TweetAuthor, TweetData,
};

fn bookmark(kind: BookmarkKind) -> Bookmark {
    Bookmark {
        id: "b1".to_string(),
        url: "https://www.example.com/page".to_string(),
        title: "Saved page".to_string(),
        description: None,
        favicon: None,
        created_at: None,
        workspace_id: None,
        kind,
        source: BookmarkSource::Web,
        folder: "uncategorized".to_string(),
        tags: Vec::new(),
        is_favorite: false,
        is_read: false,
        notes: None,
        tweet_data: None,
        linkedin_data: None,
        article_data: None,
        thread_data: None,
        linkedin_profile_data: None,
        twitter_profile_data: None,
    }
}

fn image(url: &str) -> MediaItem {
    MediaItem {
        kind: MediaKind::Image,
        url: Some(url.to_string()),
        alt: None,
        poster: None,
    }
}

#[test]
fn tweet_author_gets_at_prefix() {
    let mut b = bookmark(BookmarkKind::Tweet);
    b.tweet_data = Some(TweetData {
        author: Some(TweetAuthor {
            name: Some("Ada".to_string()),
            handle: Some("ada".to_string()),
            avatar: Some("https://pbs.example/ada.jpg".to_string()),
        }),
        ..TweetData::default()
    });

    let card = normalize(&b);
    assert_eq!(card.author.name, "Ada");
    assert_eq!(card.author.handle, "@ada");
    assert_eq!(card.author.avatar.as_deref(), Some("https://pbs.example/ada.jpg"));
}

#[test]
fn tweet_handle_with_existing_at_is_not_doubled() {
    let mut b = bookmark(BookmarkKind::Tweet);
    b.tweet_data = Some(TweetData {
        author: Some(TweetAuthor {
            name: Some("Ada".to_string()),
            handle: Some("@ada".to_string()),
            avatar: None,
        }),
        ..TweetData::default()
    });

    assert_eq!(normalize(&b).author.handle, "@ada");
}

#[test]
fn tweet_without_author_falls_back_to_unknown() {
    let mut b = bookmark(BookmarkKind::Tweet);
    b.tweet_data = Some(TweetData::default());

    let card = normalize(&b);
    assert_eq!(card.author.name, "Unknown");
    assert_eq!(card.author.handle, "");
}

#[test]
fn linkedin_headline_serves_as_handle() {
    let mut b = bookmark(BookmarkKind::Linkedin);
    b.linkedin_data = Some(LinkedinData {
        author: Some(LinkedinAuthor {
            name: Some("Grace".to_string()),
            headline: Some("Engineer at Navy".to_string()),
            username: None,
            avatar: None,
        }),
        ..LinkedinData::default()
    });

    let card = normalize(&b);
    assert_eq!(card.author.name, "Grace");
    assert_eq!(card.author.handle, "Engineer at Navy");
}

#[test]
fn article_author_is_hostname_without_www() {
    let mut b = bookmark(BookmarkKind::Article);
    b.favicon = Some("https://www.example.com/favicon.ico".to_string());

    let card = normalize(&b);
    assert_eq!(card.author.name, "example.com");
    assert_eq!(card.author.handle, "");
    assert_eq!(
        card.author.avatar.as_deref(),
        Some("https://www.example.com/favicon.ico")
    );
}

#[test]
fn unparseable_url_falls_back_to_article_label() {
    let mut b = bookmark(BookmarkKind::Link);
    b.url = "not a url".to_string();

    assert_eq!(normalize(&b).author.name, "Article");
}

#[test]
fn content_prefers_payload_over_description_over_title() {
    let mut b = bookmark(BookmarkKind::Tweet);
    b.description = Some("description".to_string());
    b.tweet_data = Some(TweetData {
        content: Some("tweet body".to_string()),
        ..TweetData::default()
    });
    assert_eq!(normalize(&b).content, "tweet body");

    b.tweet_data = Some(TweetData {
        content: Some(String::new()),
        ..TweetData::default()
    });
    assert_eq!(normalize(&b).content, "description");

    b.description = None;
    assert_eq!(normalize(&b).content, "Saved page");
}

#[test]
fn stats_only_come_from_post_kind_payloads() {
    let mut b = bookmark(BookmarkKind::Thread);
    b.thread_data = Some(ThreadData {
        author: Some(ThreadAuthor::default()),
        stats: Some(PostStats {
            comments: 3,
            reposts: 5,
            likes: 9,
        }),
        ..ThreadData::default()
    });

    let stats = normalize(&b).stats.unwrap();
    assert_eq!((stats.comments, stats.reposts, stats.likes), (3, 5, 9));

    let b = bookmark(BookmarkKind::Article);
    assert!(normalize(&b).stats.is_none());
}

#[test]
fn media_merge_dedupes_and_preserves_order() {
    let mut b = bookmark(BookmarkKind::Tweet);
    b.tweet_data = Some(TweetData {
        images: vec![image("https://cdn/a.jpg"), image("https://cdn/b.jpg")],
        media: vec![image("https://cdn/a.jpg"), image("https://cdn/c.jpg")],
        ..TweetData::default()
    });

    let media = normalize(&b).media;
    let urls: Vec<_> = media.iter().filter_map(|m| m.url.as_deref()).collect();
    assert_eq!(urls, ["https://cdn/a.jpg", "https://cdn/b.jpg", "https://cdn/c.jpg"]);
}

#[test]
fn media_merge_keys_videos_by_poster() {
    let video = MediaItem {
        kind: MediaKind::Video,
        url: None,
        alt: None,
        poster: Some("https://cdn/poster.jpg".to_string()),
    };
    let mut b = bookmark(BookmarkKind::Tweet);
    b.tweet_data = Some(TweetData {
        images: vec![video.clone()],
        media: vec![video],
        ..TweetData::default()
    });

    assert_eq!(normalize(&b).media.len(), 1);
}

#[test]
fn media_merge_skips_blob_urls_and_keyless_items() {
    let mut b = bookmark(BookmarkKind::Tweet);
    b.tweet_data = Some(TweetData {
        images: vec![
            image("blob:https://x.com/abc123"),
            MediaItem {
                kind: MediaKind::Image,
                url: Some(String::new()),
                alt: None,
                poster: None,
            },
            image("https://cdn/keep.jpg"),
        ],
        ..TweetData::default()
    });

    let media = normalize(&b).media;
    assert_eq!(media.len(), 1);
    assert_eq!(media[0].url.as_deref(), Some("https://cdn/keep.jpg"));
}

#[test]
fn badge_maps_kind_to_label() {
    assert_eq!(normalize(&bookmark(BookmarkKind::Tweet)).badge.label, "Tweet");
    assert_eq!(normalize(&bookmark(BookmarkKind::Linkedin)).badge.label, "LinkedIn");
    assert_eq!(normalize(&bookmark(BookmarkKind::Thread)).badge.label, "Thread");
    assert_eq!(normalize(&bookmark(BookmarkKind::Article)).badge.label, "Article");
    assert_eq!(normalize(&bookmark(BookmarkKind::Link)).badge.label, "Website");
}

#[test]
fn profile_badge_takes_priority_over_kind() {
    let mut b = bookmark(BookmarkKind::Linkedin);
    b.linkedin_data = Some(LinkedinData {
        is_profile: true,
        ..LinkedinData::default()
    });

    let badge = normalize(&b).badge;
    assert_eq!(badge.label, "Profile");
    assert_eq!(badge.color, "#0a66c2");

    let mut b = bookmark(BookmarkKind::Tweet);
    b.tags = vec!["profile".to_string()];
    assert_eq!(normalize(&b).badge.label, "Profile");
}

#[test]
fn short_content_is_not_truncated() {
    let mut b = bookmark(BookmarkKind::Link);
    b.title = "short".to_string();

    let p = preview(&normalize(&b));
    assert_eq!(p.text, "short");
    assert!(!p.truncated);
}

#[test]
fn long_content_is_cut_at_the_limit_with_ellipsis() {
    let mut b = bookmark(BookmarkKind::Link);
    b.title = "x".repeat(PREVIEW_LIMIT + 50);

    let p = preview(&normalize(&b));
    assert!(p.truncated);
    assert_eq!(p.text.chars().count(), PREVIEW_LIMIT + 1);
    assert!(p.text.ends_with('…'));
}

#[test]
fn truncation_counts_chars_not_bytes() {
    let mut b = bookmark(BookmarkKind::Link);
    b.title = "é".repeat(PREVIEW_LIMIT + 10);

    let p = preview(&normalize(&b));
    assert!(p.truncated);
    assert_eq!(p.text.chars().count(), PREVIEW_LIMIT + 1);
}
