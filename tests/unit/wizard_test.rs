// Wizard tests: the pure reducer transition table, hook resolution, the
// auto-seeding helpers, and the async driver around the generation calls.

use std::sync::Arc;

use stashboard::managers::wizard::{
    apply, match_tone_author, seed_platform, GenerationWizard, WizardState,
};
use stashboard::services::api_client::ContentApi;
use stashboard::testing::FakeContentApi;
use stashboard::types::bookmark::{
    Bookmark, BookmarkKind, BookmarkSource, TweetAuthor, TweetData,
};
use stashboard::types::errors::{ApiError, WizardError};
use stashboard::types::generation::{
    GenerateResponse, GeneratedPost, Platform, ToneAuthor, WizardEvent, WizardStep,
};

fn bookmark(kind: BookmarkKind) -> Bookmark {
    Bookmark {
        id: "b1".to_string(),
        url: "https://example.com".to_string(),
        title: "Bookmark".to_string(),
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

fn post(id: &str, content: &str) -> GeneratedPost {
    GeneratedPost {
        id: id.to_string(),
        content: content.to_string(),
        platform: None,
        hook_text: None,
        created_at: None,
    }
}

// ─── Reducer ───

#[test]
fn happy_path_walks_all_five_steps() {
    let mut state = WizardState::new(Platform::Twitter);
    assert_eq!(state.step, WizardStep::SelectPlatform);

    apply(&mut state, WizardEvent::GenerateHooks);
    assert_eq!(state.step, WizardStep::GeneratingHooks);

    apply(
        &mut state,
        WizardEvent::HooksReady(vec!["hook one".to_string(), "hook two".to_string()]),
    );
    assert_eq!(state.step, WizardStep::PickHook);
    assert_eq!(state.selected_hook, 0);

    apply(&mut state, WizardEvent::GeneratePost);
    assert_eq!(state.step, WizardStep::GeneratingPost);

    apply(
        &mut state,
        WizardEvent::PostGenerated {
            id: "p1".to_string(),
            content: "the post".to_string(),
        },
    );
    assert_eq!(state.step, WizardStep::PostReady);
    assert_eq!(state.generated_post.as_deref(), Some("the post"));
    assert_eq!(state.generated_post_id.as_deref(), Some("p1"));
}

#[test]
fn hooks_failure_returns_to_platform_selection() {
    let mut state = WizardState::new(Platform::Twitter);
    apply(&mut state, WizardEvent::GenerateHooks);
    apply(&mut state, WizardEvent::HooksFailed);
    assert_eq!(state.step, WizardStep::SelectPlatform);
}

#[test]
fn post_failure_returns_to_hook_picking() {
    let mut state = WizardState::new(Platform::Twitter);
    apply(&mut state, WizardEvent::GenerateHooks);
    apply(&mut state, WizardEvent::HooksReady(vec!["h".to_string()]));
    apply(&mut state, WizardEvent::GeneratePost);
    apply(&mut state, WizardEvent::PostFailed);
    assert_eq!(state.step, WizardStep::PickHook);
    // The generated hooks survive the retry.
    assert_eq!(state.hooks, ["h"]);
}

#[test]
fn empty_resolved_hook_blocks_the_transition() {
    let mut state = WizardState::new(Platform::Twitter);
    apply(&mut state, WizardEvent::GenerateHooks);
    apply(&mut state, WizardEvent::HooksReady(Vec::new()));

    apply(&mut state, WizardEvent::GeneratePost);
    assert_eq!(state.step, WizardStep::PickHook);

    // A whitespace-only custom hook is just as empty.
    state.use_custom = true;
    state.custom_hook = "   ".to_string();
    apply(&mut state, WizardEvent::GeneratePost);
    assert_eq!(state.step, WizardStep::PickHook);
}

#[test]
fn custom_hook_is_trimmed_on_resolution() {
    let mut state = WizardState::new(Platform::Twitter);
    state.use_custom = true;
    state.custom_hook = "  my own hook  ".to_string();
    assert_eq!(state.resolved_hook().as_deref(), Some("my own hook"));
}

#[test]
fn generated_post_is_prepended_to_history_with_its_hook() {
    let mut state = WizardState::new(Platform::Linkedin);
    state.history = vec![post("old", "older post")];
    apply(&mut state, WizardEvent::GenerateHooks);
    apply(&mut state, WizardEvent::HooksReady(vec!["chosen hook".to_string()]));
    apply(&mut state, WizardEvent::GeneratePost);
    apply(
        &mut state,
        WizardEvent::PostGenerated {
            id: "new".to_string(),
            content: "fresh post".to_string(),
        },
    );

    assert_eq!(state.history.len(), 2);
    assert_eq!(state.history[0].id, "new");
    assert_eq!(state.history[0].hook_text.as_deref(), Some("chosen hook"));
    assert_eq!(state.history[0].platform, Some(Platform::Linkedin));
    assert_eq!(state.history[1].id, "old");
}

#[test]
fn regeneration_replaces_the_history_entry_in_place() {
    let mut state = WizardState::new(Platform::Twitter);
    apply(&mut state, WizardEvent::GenerateHooks);
    apply(&mut state, WizardEvent::HooksReady(vec!["h".to_string()]));
    apply(&mut state, WizardEvent::GeneratePost);
    apply(
        &mut state,
        WizardEvent::PostGenerated {
            id: "p1".to_string(),
            content: "take one".to_string(),
        },
    );

    apply(&mut state, WizardEvent::Regenerate);
    assert_eq!(state.step, WizardStep::GeneratingPost);
    apply(
        &mut state,
        WizardEvent::Regenerated {
            id: "p2".to_string(),
            content: "take two".to_string(),
        },
    );

    assert_eq!(state.step, WizardStep::PostReady);
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history[0].id, "p2");
    assert_eq!(state.history[0].content, "take two");
    assert_eq!(state.generated_post.as_deref(), Some("take two"));
}

#[test]
fn regenerate_failure_keeps_the_reviewed_post() {
    let mut state = WizardState::new(Platform::Twitter);
    apply(&mut state, WizardEvent::GenerateHooks);
    apply(&mut state, WizardEvent::HooksReady(vec!["h".to_string()]));
    apply(&mut state, WizardEvent::GeneratePost);
    apply(
        &mut state,
        WizardEvent::PostGenerated {
            id: "p1".to_string(),
            content: "take one".to_string(),
        },
    );
    apply(&mut state, WizardEvent::Regenerate);
    apply(&mut state, WizardEvent::RegenerateFailed);

    assert_eq!(state.step, WizardStep::PostReady);
    assert_eq!(state.generated_post.as_deref(), Some("take one"));
}

#[test]
fn start_over_resets_flow_but_keeps_platform_and_history() {
    let mut state = WizardState::new(Platform::Linkedin);
    apply(&mut state, WizardEvent::GenerateHooks);
    apply(&mut state, WizardEvent::HooksReady(vec!["h".to_string()]));
    apply(&mut state, WizardEvent::GeneratePost);
    apply(
        &mut state,
        WizardEvent::PostGenerated {
            id: "p1".to_string(),
            content: "post".to_string(),
        },
    );

    apply(&mut state, WizardEvent::StartOver);

    assert_eq!(state.step, WizardStep::SelectPlatform);
    assert_eq!(state.platform, Platform::Linkedin);
    assert!(state.hooks.is_empty());
    assert!(state.generated_post.is_none());
    assert_eq!(state.history.len(), 1);
}

#[test]
fn events_invalid_for_the_step_are_ignored() {
    let mut state = WizardState::new(Platform::Twitter);
    let before = state.clone();

    apply(&mut state, WizardEvent::HooksReady(vec!["h".to_string()]));
    apply(&mut state, WizardEvent::GeneratePost);
    apply(&mut state, WizardEvent::Regenerate);
    apply(
        &mut state,
        WizardEvent::PostGenerated {
            id: "p".to_string(),
            content: "c".to_string(),
        },
    );

    assert_eq!(state, before);
}

// ─── Seeding helpers ───

#[test]
fn platform_seeds_from_bookmark_kind() {
    assert_eq!(seed_platform(&bookmark(BookmarkKind::Linkedin)), Platform::Linkedin);
    assert_eq!(seed_platform(&bookmark(BookmarkKind::Tweet)), Platform::Twitter);
    assert_eq!(seed_platform(&bookmark(BookmarkKind::Article)), Platform::Twitter);
}

#[test]
fn tone_author_matches_exact_key_first() {
    let mut b = bookmark(BookmarkKind::Tweet);
    b.tweet_data = Some(TweetData {
        author: Some(TweetAuthor {
            name: Some("Ada".to_string()),
            handle: Some("@ada".to_string()),
            avatar: None,
        }),
        ..TweetData::default()
    });
    let authors = vec![
        ToneAuthor {
            name: "Ada".to_string(),
            username: "other".to_string(),
        },
        ToneAuthor {
            name: "Ada".to_string(),
            username: "ada".to_string(),
        },
    ];

    let matched = match_tone_author(&b, &authors).unwrap();
    assert_eq!(matched.username, "ada");
}

#[test]
fn tone_author_falls_back_to_case_insensitive_name() {
    let mut b = bookmark(BookmarkKind::Tweet);
    b.tweet_data = Some(TweetData {
        author: Some(TweetAuthor {
            name: Some("ADA".to_string()),
            handle: None,
            avatar: None,
        }),
        ..TweetData::default()
    });
    let authors = vec![ToneAuthor {
        name: "Ada".to_string(),
        username: "ada".to_string(),
    }];

    assert!(match_tone_author(&b, &authors).is_some());
}

#[test]
fn tone_author_is_none_for_authorless_kinds() {
    let authors = vec![ToneAuthor {
        name: "Ada".to_string(),
        username: "ada".to_string(),
    }];
    assert!(match_tone_author(&bookmark(BookmarkKind::Article), &authors).is_none());
}

// ─── Driver ───

fn wizard_api() -> Arc<FakeContentApi> {
    Arc::new(FakeContentApi::new())
}

async fn open(api: &Arc<FakeContentApi>, b: &Bookmark) -> GenerationWizard {
    let shared: Arc<dyn ContentApi> = api.clone();
    GenerationWizard::open(shared, "ws1", b).await
}

#[tokio::test]
async fn open_seeds_platform_tone_and_history() {
    let api = wizard_api();
    api.set_tone_authors(vec![ToneAuthor {
        name: "Ada".to_string(),
        username: "ada".to_string(),
    }]);
    api.set_posts(vec![post("h1", "older")]);

    let mut b = bookmark(BookmarkKind::Tweet);
    b.tweet_data = Some(TweetData {
        author: Some(TweetAuthor {
            name: Some("Ada".to_string()),
            handle: Some("ada".to_string()),
            avatar: None,
        }),
        ..TweetData::default()
    });

    let wizard = open(&api, &b).await;
    assert_eq!(wizard.state().platform, Platform::Twitter);
    assert_eq!(wizard.tone_author_key(), Some("Ada||ada"));
    assert_eq!(wizard.state().history.len(), 1);
}

#[tokio::test]
async fn full_generation_flow_through_the_driver() {
    let api = wizard_api();
    api.queue_generate(Ok(GenerateResponse {
        hooks: vec!["hook".to_string()],
        posts: Vec::new(),
    }));
    api.queue_generate(Ok(GenerateResponse {
        hooks: Vec::new(),
        posts: vec![post("p1", "the post")],
    }));
    api.queue_regenerate(Ok(post("p2", "better post")));

    let mut wizard = open(&api, &bookmark(BookmarkKind::Tweet)).await;

    wizard.generate_hooks().await.unwrap();
    assert_eq!(wizard.state().step, WizardStep::PickHook);

    wizard.generate_post().await.unwrap();
    assert_eq!(wizard.state().step, WizardStep::PostReady);
    assert_eq!(wizard.state().generated_post.as_deref(), Some("the post"));

    wizard.regenerate().await.unwrap();
    assert_eq!(wizard.state().generated_post.as_deref(), Some("better post"));
    assert_eq!(wizard.state().history.len(), 1);
    assert_eq!(wizard.state().history[0].id, "p2");
}

#[tokio::test]
async fn empty_hook_response_surfaces_and_resets() {
    let api = wizard_api();
    api.queue_generate(Ok(GenerateResponse::default()));

    let mut wizard = open(&api, &bookmark(BookmarkKind::Tweet)).await;
    let err = wizard.generate_hooks().await.unwrap_err();
    assert!(matches!(err, WizardError::EmptyResult));
    assert_eq!(wizard.state().step, WizardStep::SelectPlatform);
}

#[tokio::test]
async fn failed_hook_generation_resets_to_platform_selection() {
    let api = wizard_api();
    api.queue_generate(Err(ApiError::Http {
        status: 502,
        message: "upstream".to_string(),
    }));

    let mut wizard = open(&api, &bookmark(BookmarkKind::Tweet)).await;
    let err = wizard.generate_hooks().await.unwrap_err();
    assert!(matches!(err, WizardError::Api(ApiError::Http { status: 502, .. })));
    assert_eq!(wizard.state().step, WizardStep::SelectPlatform);
}

#[tokio::test]
async fn generate_post_requires_the_pick_hook_step() {
    let api = wizard_api();
    let mut wizard = open(&api, &bookmark(BookmarkKind::Tweet)).await;

    let err = wizard.generate_post().await.unwrap_err();
    assert!(matches!(err, WizardError::InvalidStep(_)));
}

#[tokio::test]
async fn generate_post_rejects_an_empty_custom_hook() {
    let api = wizard_api();
    api.queue_generate(Ok(GenerateResponse {
        hooks: vec!["hook".to_string()],
        posts: Vec::new(),
    }));

    let mut wizard = open(&api, &bookmark(BookmarkKind::Tweet)).await;
    wizard.generate_hooks().await.unwrap();
    wizard.set_custom_hook("   ");

    let err = wizard.generate_post().await.unwrap_err();
    assert!(matches!(err, WizardError::EmptyHook));
    assert_eq!(wizard.state().step, WizardStep::PickHook);
}

#[tokio::test]
async fn regenerate_requires_a_reviewed_post() {
    let api = wizard_api();
    let mut wizard = open(&api, &bookmark(BookmarkKind::Tweet)).await;

    let err = wizard.regenerate().await.unwrap_err();
    assert!(matches!(err, WizardError::InvalidStep(_)));
}

#[tokio::test]
async fn start_over_from_the_driver_keeps_the_session() {
    let api = wizard_api();
    api.queue_generate(Ok(GenerateResponse {
        hooks: vec!["hook".to_string()],
        posts: Vec::new(),
    }));

    let mut wizard = open(&api, &bookmark(BookmarkKind::Linkedin)).await;
    wizard.generate_hooks().await.unwrap();
    wizard.start_over();

    assert_eq!(wizard.state().step, WizardStep::SelectPlatform);
    assert_eq!(wizard.state().platform, Platform::Linkedin);
}
