//! Session Store
//!
//! Single owner of "who is signed in right now". Starts in `Loading`
//! until `bootstrap` resolves the persisted token, then holds either
//! `Guest` or `Authenticated`. Reads are cheap snapshots so callers
//! never hold the lock across an await point.

use std::sync::{Arc, RwLock};

use platform::token::{AccessToken, TokenStore};

use crate::domain::entity::{Identity, LoginSession};
use crate::domain::gateway::AuthGateway;

// ============================================================
// State
// ============================================================

#[derive(Debug, Clone)]
enum State {
    Loading,
    Guest,
    Authenticated { identity: Identity },
}

/// Point-in-time view of the session, safe to hand to UI code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSnapshot {
    /// Bootstrap has not finished yet
    Loading,
    /// No session
    Guest,
    /// Signed in as the contained identity
    Authenticated(Identity),
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionSnapshot::Authenticated(_))
    }

    /// The signed-in identity, if any
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionSnapshot::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

// ============================================================
// Store
// ============================================================

/// Shared session state over a persisted token store
pub struct SessionStore<S> {
    state: RwLock<State>,
    tokens: Arc<S>,
}

impl<S> SessionStore<S>
where
    S: TokenStore + Send + Sync,
{
    /// Create a store in the `Loading` state
    pub fn new(tokens: Arc<S>) -> Self {
        Self {
            state: RwLock::new(State::Loading),
            tokens,
        }
    }

    /// Resolve the persisted token into a session, fail closed.
    ///
    /// No stored token means `Guest` without touching the network.
    /// A stored token is exchanged for a fresh one via `refresh`; any
    /// failure discards the token and lands in `Guest`.
    pub async fn bootstrap<G>(&self, gateway: &G)
    where
        G: AuthGateway + Sync,
    {
        let stored = match self.tokens.load().await {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read persisted token");
                None
            }
        };

        if stored.is_none() {
            tracing::debug!("No persisted token, starting as guest");
            self.set_state(State::Guest);
            return;
        }

        match gateway.refresh().await {
            Ok(session) => {
                tracing::info!(user_id = %session.identity.id, "Session restored");
                self.install(session).await;
            }
            Err(err) => {
                err.log();
                tracing::info!("Token refresh failed, discarding session");
                self.clear_token().await;
                self.set_state(State::Guest);
            }
        }
    }

    /// Install a fresh login session
    pub async fn login(&self, session: LoginSession) {
        tracing::info!(user_id = %session.identity.id, "Signed in");
        self.install(session).await;
    }

    /// Tear down the local session. Idempotent; callers invoke this
    /// regardless of whether the server-side logout succeeded.
    pub async fn logout(&self) {
        self.clear_token().await;
        self.set_state(State::Guest);
    }

    /// Drop local session state after the HTTP layer reported expiry.
    /// The token is already cleared by then.
    pub fn expire_local(&self) {
        self.set_state(State::Guest);
    }

    /// Replace the cached identity in place, keeping the session.
    /// No-op unless authenticated.
    pub fn update_identity(&self, f: impl FnOnce(&mut Identity)) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if let State::Authenticated { identity } = &mut *state {
            f(identity);
        }
    }

    /// Current state as an owned snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        match &*state {
            State::Loading => SessionSnapshot::Loading,
            State::Guest => SessionSnapshot::Guest,
            State::Authenticated { identity } => SessionSnapshot::Authenticated(identity.clone()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.snapshot(), SessionSnapshot::Loading)
    }

    async fn install(&self, session: LoginSession) {
        self.save_token(session.access_token).await;
        self.set_state(State::Authenticated {
            identity: session.identity,
        });
    }

    fn set_state(&self, next: State) {
        *self.state.write().unwrap_or_else(|e| e.into_inner()) = next;
    }

    async fn save_token(&self, token: AccessToken) {
        if let Err(err) = self.tokens.save(&token).await {
            // Session still works in memory; only restart persistence is lost
            tracing::warn!(error = %err, "Failed to persist access token");
        }
    }

    async fn clear_token(&self) {
        if let Err(err) = self.tokens.clear().await {
            tracing::warn!(error = %err, "Failed to clear persisted token");
        }
    }
}
