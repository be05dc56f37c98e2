//! Generation wizard for Stashboard.
//!
//! Drives the multi-step AI post-generation flow (choose platform/tone →
//! generate hooks → pick or author a hook → generate post → review/
//! regenerate) as an explicit finite state machine: a plain state struct, an
//! event enum, and a single pure reducer implementing the transition table.
//! The async driver around it issues the generation calls and feeds their
//! outcomes back in as events, so every transition stays directly testable.

use std::sync::Arc;

use crate::services::api_client::ContentApi;
use crate::types::bookmark::{Bookmark, BookmarkKind};
use crate::types::errors::WizardError;
use crate::types::generation::{
    ContentType, GenerateRequest, GeneratedPost, Platform, ToneAuthor, WizardEvent, WizardStep,
};

/// How many history entries are side-loaded per dialog open.
pub const HISTORY_LIMIT: u32 = 10;

/// One wizard session. Created on dialog open, destroyed on close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub step: WizardStep,
    pub platform: Platform,
    /// Hooks exactly as returned by the generation call.
    pub hooks: Vec<String>,
    pub selected_hook: usize,
    pub custom_hook: String,
    pub use_custom: bool,
    pub generated_post: Option<String>,
    pub generated_post_id: Option<String>,
    /// Most-recent-first generation history for this bookmark.
    pub history: Vec<GeneratedPost>,
}

impl WizardState {
    pub fn new(platform: Platform) -> Self {
        Self {
            step: WizardStep::SelectPlatform,
            platform,
            hooks: Vec::new(),
            selected_hook: 0,
            custom_hook: String::new(),
            use_custom: false,
            generated_post: None,
            generated_post_id: None,
            history: Vec::new(),
        }
    }

    /// The active hook text when leaving `PickHook`: the trimmed custom hook
    /// when `use_custom`, otherwise the selected generated hook. `None` when
    /// the resolved text would be empty, which blocks the transition.
    pub fn resolved_hook(&self) -> Option<String> {
        if self.use_custom {
            let trimmed = self.custom_hook.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        } else {
            self.hooks
                .get(self.selected_hook)
                .filter(|h| !h.is_empty())
                .cloned()
        }
    }
}

/// The transition table. Events that are invalid for the current step are
/// ignored, leaving the state untouched.
pub fn apply(state: &mut WizardState, event: WizardEvent) {
    use WizardEvent as E;
    use WizardStep as S;

    match (state.step, event) {
        (S::SelectPlatform, E::GenerateHooks) => {
            state.step = S::GeneratingHooks;
        }
        (S::GeneratingHooks, E::HooksReady(hooks)) => {
            state.hooks = hooks;
            state.selected_hook = 0;
            state.use_custom = false;
            state.step = S::PickHook;
        }
        (S::GeneratingHooks, E::HooksFailed) => {
            state.step = S::SelectPlatform;
        }
        (S::PickHook, E::GeneratePost) => {
            // Guard: an empty resolved hook blocks the transition.
            if state.resolved_hook().is_some() {
                state.step = S::GeneratingPost;
            }
        }
        (S::GeneratingPost, E::PostGenerated { id, content }) => {
            let hook_text = state.resolved_hook();
            state.history.insert(
                0,
                GeneratedPost {
                    id: id.clone(),
                    content: content.clone(),
                    platform: Some(state.platform),
                    hook_text,
                    created_at: None,
                },
            );
            state.generated_post = Some(content);
            state.generated_post_id = Some(id);
            state.step = S::PostReady;
        }
        (S::GeneratingPost, E::PostFailed) => {
            state.step = S::PickHook;
        }
        (S::PostReady, E::Regenerate) => {
            state.step = S::GeneratingPost;
        }
        (S::GeneratingPost, E::Regenerated { id, content }) => {
            let previous_id = state.generated_post_id.take();
            if let Some(entry) = state
                .history
                .iter_mut()
                .find(|p| p.id == id || Some(&p.id) == previous_id.as_ref())
            {
                entry.id = id.clone();
                entry.content = content.clone();
            }
            state.generated_post = Some(content);
            state.generated_post_id = Some(id);
            state.step = S::PostReady;
        }
        (S::GeneratingPost, E::RegenerateFailed) => {
            state.step = S::PostReady;
        }
        (_, E::StartOver) => {
            // Full reset of hooks/selection/post; the chosen platform and
            // the history entries survive.
            state.hooks.clear();
            state.selected_hook = 0;
            state.custom_hook.clear();
            state.use_custom = false;
            state.generated_post = None;
            state.generated_post_id = None;
            state.step = S::SelectPlatform;
        }
        _ => {}
    }
}

/// Platform auto-seed: linkedin bookmarks open on linkedin, everything else
/// on twitter.
pub fn seed_platform(bookmark: &Bookmark) -> Platform {
    if bookmark.kind == BookmarkKind::Linkedin {
        Platform::Linkedin
    } else {
        Platform::Twitter
    }
}

/// Tone-author auto-selection: exact `name||username` key match first, then
/// case-insensitive name-only; `None` when neither matches and the user has
/// to pick manually.
pub fn match_tone_author<'a>(
    bookmark: &Bookmark,
    authors: &'a [ToneAuthor],
) -> Option<&'a ToneAuthor> {
    let (name, username) = author_identity(bookmark)?;
    let key = format!("{}||{}", name, username);
    authors
        .iter()
        .find(|a| a.key() == key)
        .or_else(|| {
            let lower = name.to_lowercase();
            authors.iter().find(|a| a.name.to_lowercase() == lower)
        })
}

/// Per-kind author identity, mirroring the card author derivation minus the
/// avatar.
fn author_identity(bookmark: &Bookmark) -> Option<(String, String)> {
    match bookmark.kind {
        BookmarkKind::Tweet => {
            let author = bookmark.tweet_data.as_ref()?.author.as_ref()?;
            Some((
                author.name.clone()?,
                author
                    .handle
                    .as_deref()
                    .map(|h| h.trim_start_matches('@').to_string())
                    .unwrap_or_default(),
            ))
        }
        BookmarkKind::Linkedin => {
            let author = bookmark.linkedin_data.as_ref()?.author.as_ref()?;
            Some((
                author.name.clone()?,
                author.username.clone().unwrap_or_default(),
            ))
        }
        BookmarkKind::Thread => {
            let author = bookmark.thread_data.as_ref()?.author.as_ref()?;
            Some((
                author.name.clone()?,
                author.username.clone().unwrap_or_default(),
            ))
        }
        BookmarkKind::Twitter => {
            let profile = bookmark.twitter_profile_data.as_ref()?;
            Some((
                profile.name.clone()?,
                profile.username.clone().unwrap_or_default(),
            ))
        }
        BookmarkKind::Link | BookmarkKind::Article | BookmarkKind::LinkedinProfile => None,
    }
}

/// Async driver around the reducer.
pub struct GenerationWizard {
    api: Arc<dyn ContentApi>,
    workspace_id: String,
    bookmark_id: String,
    tone_author_key: Option<String>,
    state: WizardState,
}

impl GenerationWizard {
    /// Open a wizard session for one bookmark: seed the platform, match a
    /// tone author, and side-load the history list. Seeding is best-effort;
    /// a failed lookup just leaves the tone unset or the history empty.
    pub async fn open(
        api: Arc<dyn ContentApi>,
        workspace_id: impl Into<String>,
        bookmark: &Bookmark,
    ) -> Self {
        let workspace_id = workspace_id.into();
        let mut wizard = Self {
            state: WizardState::new(seed_platform(bookmark)),
            tone_author_key: None,
            bookmark_id: bookmark.id.clone(),
            workspace_id,
            api,
        };

        match wizard.api.list_tone_authors(&wizard.workspace_id).await {
            Ok(authors) => {
                wizard.tone_author_key =
                    match_tone_author(bookmark, &authors).map(|a| a.key());
            }
            Err(err) => tracing::warn!(%err, "tone author lookup failed"),
        }

        match wizard
            .api
            .list_posts(&wizard.workspace_id, &wizard.bookmark_id, HISTORY_LIMIT)
            .await
        {
            Ok(history) => wizard.state.history = history,
            Err(err) => tracing::warn!(%err, "history load failed"),
        }

        wizard
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn tone_author_key(&self) -> Option<&str> {
        self.tone_author_key.as_deref()
    }

    pub fn set_tone_author_key(&mut self, key: Option<String>) {
        self.tone_author_key = key;
    }

    /// Platform can only change before hooks are generated.
    pub fn set_platform(&mut self, platform: Platform) {
        if self.state.step == WizardStep::SelectPlatform {
            self.state.platform = platform;
        }
    }

    pub fn select_hook(&mut self, index: usize) {
        if index < self.state.hooks.len() {
            self.state.selected_hook = index;
            self.state.use_custom = false;
        }
    }

    pub fn set_custom_hook(&mut self, text: impl Into<String>) {
        self.state.custom_hook = text.into();
        self.state.use_custom = true;
    }

    /// Generate hooks for the chosen platform. Valid only in
    /// `SelectPlatform`; a second submit while generating is rejected.
    pub async fn generate_hooks(&mut self) -> Result<(), WizardError> {
        match self.state.step {
            WizardStep::SelectPlatform => {}
            WizardStep::GeneratingHooks => return Err(WizardError::Busy),
            _ => return Err(WizardError::InvalidStep("generate hooks")),
        }
        apply(&mut self.state, WizardEvent::GenerateHooks);

        let request = self.request(ContentType::Hook, None);
        match self.api.generate(&request).await {
            Ok(response) if !response.hooks.is_empty() => {
                apply(&mut self.state, WizardEvent::HooksReady(response.hooks));
                Ok(())
            }
            Ok(_) => {
                apply(&mut self.state, WizardEvent::HooksFailed);
                Err(WizardError::EmptyResult)
            }
            Err(err) => {
                apply(&mut self.state, WizardEvent::HooksFailed);
                Err(err.into())
            }
        }
    }

    /// Generate the full post from the active hook. Valid only in
    /// `PickHook` with a non-empty resolved hook.
    pub async fn generate_post(&mut self) -> Result<(), WizardError> {
        match self.state.step {
            WizardStep::PickHook => {}
            WizardStep::GeneratingPost => return Err(WizardError::Busy),
            _ => return Err(WizardError::InvalidStep("generate post")),
        }
        let hook = self.state.resolved_hook().ok_or(WizardError::EmptyHook)?;
        apply(&mut self.state, WizardEvent::GeneratePost);

        let request = self.request(ContentType::Post, Some(hook));
        match self.api.generate(&request).await {
            Ok(response) => match response.posts.into_iter().next() {
                Some(post) => {
                    apply(
                        &mut self.state,
                        WizardEvent::PostGenerated {
                            id: post.id,
                            content: post.content,
                        },
                    );
                    Ok(())
                }
                None => {
                    apply(&mut self.state, WizardEvent::PostFailed);
                    Err(WizardError::EmptyResult)
                }
            },
            Err(err) => {
                apply(&mut self.state, WizardEvent::PostFailed);
                Err(err.into())
            }
        }
    }

    /// Regenerate the reviewed post in place; the history entry is replaced
    /// by id rather than refetched.
    pub async fn regenerate(&mut self) -> Result<(), WizardError> {
        if self.state.step != WizardStep::PostReady {
            return Err(WizardError::InvalidStep("regenerate"));
        }
        let post_id = self
            .state
            .generated_post_id
            .clone()
            .ok_or(WizardError::InvalidStep("regenerate"))?;
        apply(&mut self.state, WizardEvent::Regenerate);

        match self.api.regenerate(&post_id).await {
            Ok(post) => {
                apply(
                    &mut self.state,
                    WizardEvent::Regenerated {
                        id: post.id,
                        content: post.content,
                    },
                );
                Ok(())
            }
            Err(err) => {
                apply(&mut self.state, WizardEvent::RegenerateFailed);
                Err(err.into())
            }
        }
    }

    /// "Start over": back to platform selection, keeping the session open.
    pub fn start_over(&mut self) {
        apply(&mut self.state, WizardEvent::StartOver);
    }

    fn request(&self, content_type: ContentType, hook_text: Option<String>) -> GenerateRequest {
        GenerateRequest {
            workspace_id: self.workspace_id.clone(),
            bookmark_ids: vec![self.bookmark_id.clone()],
            platform: self.state.platform,
            content_type,
            hook_text,
            tone_author_key: self.tone_author_key.clone(),
        }
    }
}
