//! Auth service for Stashboard.
//!
//! Drives the session lifecycle against the bookmark-auth API: register,
//! login, session bootstrap from a persisted token, logout. Token issuance
//! and teardown are mirrored into the local store and announced on the
//! bridge bus so the extension stays in sync.

use std::sync::{Arc, Mutex};

use crate::services::api_client::ApiClient;
use crate::services::extension_bridge::{BridgeBus, BridgeEvent};
use crate::services::local_store::{LocalStore, LocalStoreTrait};
use crate::types::auth::{AuthUser, Credentials};
use crate::types::errors::AuthError;

pub struct AuthService {
    api: Arc<ApiClient>,
    store: Arc<Mutex<LocalStore>>,
    bus: Arc<dyn BridgeBus>,
    user: Option<AuthUser>,
}

impl AuthService {
    pub fn new(
        api: Arc<ApiClient>,
        store: Arc<Mutex<LocalStore>>,
        bus: Arc<dyn BridgeBus>,
    ) -> Self {
        Self {
            api,
            store,
            bus,
            user: None,
        }
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Restore a session from the persisted token, validating it against
    /// `/me`. Returns `NotAuthenticated` when no token is stored.
    pub async fn bootstrap(&mut self) -> Result<AuthUser, AuthError> {
        let token = {
            let store = self.store.lock().map_err(poisoned_store)?;
            store.auth_token().map(str::to_string)
        };
        let token = token.ok_or(AuthError::NotAuthenticated)?;
        self.api.set_token(Some(token));

        let user = self.api.me().await?;
        tracing::info!(user_id = %user.id, "session restored");
        self.user = Some(user.clone());
        Ok(user)
    }

    pub async fn register(&mut self, credentials: &Credentials) -> Result<AuthUser, AuthError> {
        let response = self.api.register(credentials).await?;
        self.establish_session(response.token, response.user)
    }

    pub async fn login(&mut self, credentials: &Credentials) -> Result<AuthUser, AuthError> {
        let response = self.api.login(credentials).await?;
        self.establish_session(response.token, response.user)
    }

    /// Clears the persisted token and announces the logout to the extension.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        {
            let mut store = self.store.lock().map_err(poisoned_store)?;
            store.set_auth_token(None)?;
        }
        self.api.set_token(None);
        self.user = None;
        self.bus.publish(BridgeEvent::LoggedOut);
        tracing::info!("logged out");
        Ok(())
    }

    fn establish_session(&mut self, token: String, user: AuthUser) -> Result<AuthUser, AuthError> {
        {
            let mut store = self.store.lock().map_err(poisoned_store)?;
            store.set_auth_token(Some(token.clone()))?;
        }
        self.api.set_token(Some(token.clone()));
        self.bus.publish(BridgeEvent::TokenIssued {
            token,
            user_id: user.id.clone(),
            workspace_id: user.workspace_id.clone(),
        });
        tracing::info!(user_id = %user.id, "session established");
        self.user = Some(user.clone());
        Ok(user)
    }
}

fn poisoned_store<T>(_: std::sync::PoisonError<T>) -> AuthError {
    AuthError::Store(crate::types::errors::StoreError::Io(
        "local store lock poisoned".to_string(),
    ))
}
