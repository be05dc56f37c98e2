//! Extension bridge for Stashboard.
//!
//! The companion browser extension and the dashboard exchange custom-event
//! messages: the dashboard hands the extension the auth token and workspace
//! identifiers, the extension asks for logout/token refresh and announces
//! freshly saved bookmarks. Messaging is fire-and-forget, best-effort — no
//! acknowledgment or retry.
//!
//! The bus is an explicit injected interface (not ambient global listeners)
//! so tests can substitute a recording fake.

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::services::local_store::{LocalStore, LocalStoreTrait};
use crate::types::auth::AuthUser;
use crate::types::local::Theme;

/// Outbound and inbound bridge events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeEvent {
    /// Dashboard → extension: a fresh token plus identifiers to sync under.
    TokenIssued {
        token: String,
        user_id: String,
        workspace_id: String,
    },
    /// Dashboard → extension: the session ended, drop the token.
    LoggedOut,
    /// Extension → dashboard: the stored token was rejected, re-issue one.
    TokenRefreshRequested,
    /// Extension → dashboard: a bookmark was just saved; the list should refresh.
    BookmarkSaved { id: String },
}

/// Trait defining the event bus the bridge publishes on.
pub trait BridgeBus: Send + Sync {
    fn publish(&self, event: BridgeEvent);
}

type Listener = Box<dyn Fn(&BridgeEvent) + Send>;

/// Bus that fans events out to registered listeners synchronously.
#[derive(Default)]
pub struct ListenerBus {
    listeners: Mutex<Vec<Listener>>,
}

impl ListenerBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&BridgeEvent) + Send + 'static) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(Box::new(listener));
        }
    }
}

impl BridgeBus for ListenerBus {
    fn publish(&self, event: BridgeEvent) {
        if let Ok(listeners) = self.listeners.lock() {
            for listener in listeners.iter() {
                listener(&event);
            }
        }
    }
}

/// Handles inbound JSON messages from the extension and the dashboard shell.
pub struct ExtensionBridge {
    store: Arc<Mutex<LocalStore>>,
    bus: Arc<dyn BridgeBus>,
    user: Mutex<Option<AuthUser>>,
}

impl ExtensionBridge {
    pub fn new(store: Arc<Mutex<LocalStore>>, bus: Arc<dyn BridgeBus>) -> Self {
        Self {
            store,
            bus,
            user: Mutex::new(None),
        }
    }

    /// Record the signed-in user so token handoff can include identifiers.
    pub fn set_user(&self, user: Option<AuthUser>) {
        if let Ok(mut guard) = self.user.lock() {
            *guard = user;
        }
    }

    /// Dispatch a bridge message to the appropriate handler.
    ///
    /// Returns `Ok(Value)` on success or `Err(String)` with an error message.
    pub fn handle_message(&self, method: &str, params: &Value) -> Result<Value, String> {
        match method {
            // ─── Extension sync ───
            "bridge.request-token" => {
                let store = self.store.lock().map_err(|e| e.to_string())?;
                let token = store.auth_token().ok_or("not authenticated")?.to_string();
                let user = self.user.lock().map_err(|e| e.to_string())?;
                let user = user.as_ref().ok_or("not authenticated")?;
                self.bus.publish(BridgeEvent::TokenIssued {
                    token: token.clone(),
                    user_id: user.id.clone(),
                    workspace_id: user.workspace_id.clone(),
                });
                Ok(json!({
                    "token": token,
                    "userId": user.id,
                    "workspaceId": user.workspace_id,
                }))
            }
            "bridge.logout" => {
                let mut store = self.store.lock().map_err(|e| e.to_string())?;
                store.set_auth_token(None).map_err(|e| e.to_string())?;
                self.set_user(None);
                self.bus.publish(BridgeEvent::LoggedOut);
                Ok(json!({"ok": true}))
            }
            "bridge.refresh-token" => {
                self.bus.publish(BridgeEvent::TokenRefreshRequested);
                Ok(json!({"ok": true}))
            }
            "bridge.bookmark-saved" => {
                let id = params.get("id").and_then(|v| v.as_str()).ok_or("missing id")?;
                self.bus.publish(BridgeEvent::BookmarkSaved {
                    id: id.to_string(),
                });
                Ok(json!({"ok": true}))
            }

            // ─── Local state ───
            "store.dismiss-banner" => {
                let mut store = self.store.lock().map_err(|e| e.to_string())?;
                store.dismiss_banner().map_err(|e| e.to_string())?;
                Ok(json!({"ok": true}))
            }
            "store.set-theme" => {
                let theme = params.get("theme").and_then(|v| v.as_str()).ok_or("missing theme")?;
                let theme: Theme = serde_json::from_value(json!(theme))
                    .map_err(|_| format!("invalid theme: {}", theme))?;
                let mut store = self.store.lock().map_err(|e| e.to_string())?;
                store.set_theme(theme).map_err(|e| e.to_string())?;
                Ok(json!({"ok": true}))
            }

            _ => Err(format!("unknown method: {}", method)),
        }
    }
}
