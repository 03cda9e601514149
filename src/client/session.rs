//! Session Context
//!
//! The client's belief about who is logged in.
//!
//! ```text
//!            init / refresh ok
//! Unknown ───────────────────────▶ Authenticated(user)
//!    │                               │      ▲
//!    │ init / refresh failed         │      │ login, refresh ok
//!    ▼                               ▼      │
//! Anonymous ◀──── logout, refresh failed ───┘
//! ```
//!
//! The profile endpoint is the only source of truth: a stored token is never
//! trusted on its own, and *any* profile failure (no token, 401, network
//! error, malformed body) means anonymous.
//!
//! Every transition claims an epoch before its network call. When the call
//! settles, its result is applied only if no newer transition started in the
//! meantime, so a refresh overtaken by a logout cannot resurrect the user.
//! State changes are broadcast on a [`watch`] channel.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::client::api::BlogApi;
use crate::client::password::HashedPassword;
use crate::shared::error::Result;
use crate::shared::types::{Post, RegisterResponse, SessionUser};

/// Authentication state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Initial state, before the first profile fetch settles
    #[default]
    Unknown,
    /// Profile fetch succeeded
    Authenticated(SessionUser),
    /// Logged out, or the profile fetch failed
    Anonymous,
}

impl SessionState {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// True until the first transition completes
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Unknown)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Session bound to one API client
#[derive(Debug)]
pub struct Session {
    api: BlogApi,
    state: watch::Sender<SessionState>,
    epoch: AtomicU64,
}

impl Session {
    /// Session in the `Unknown` state; nothing is fetched yet
    pub fn new(api: BlogApi) -> Self {
        let (state, _) = watch::channel(SessionState::Unknown);
        Self {
            api,
            state,
            epoch: AtomicU64::new(0),
        }
    }

    /// Create a session and run the initial profile fetch
    pub async fn init(api: BlogApi) -> Self {
        let session = Self::new(api);
        session.refresh().await;
        session
    }

    pub fn api(&self) -> &BlogApi {
        &self.api
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.state.borrow().user().cloned()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Re-run the profile fetch; failures become `Anonymous`, never errors
    pub async fn refresh(&self) -> SessionState {
        let epoch = self.begin();
        let next = match self.api.profile().await {
            Ok(profile) => {
                tracing::debug!("Session authenticated as {}", profile.username);
                SessionState::Authenticated(profile.into())
            }
            Err(e) => {
                tracing::warn!("Profile fetch failed, session is anonymous: {}", e);
                SessionState::Anonymous
            }
        };
        self.apply(epoch, next)
    }

    /// Log in (persisting the token), then refresh the profile
    ///
    /// A failed login is returned as is and leaves the state untouched. A
    /// login overtaken by a newer transition (such as a logout) keeps no
    /// token and skips the refresh.
    pub async fn login(&self, email: &str, password: &HashedPassword) -> Result<SessionState> {
        let epoch = self.begin();
        let response = self.api.authenticate(email, password).await?;

        // checked under the state lock so a concurrent logout is ordered
        // either before the check or after the write
        let mut current = Ok(false);
        self.state.send_if_modified(|_| {
            current = if self.epoch.load(Ordering::SeqCst) == epoch {
                self.api.store_login_token(email, &response).map(|_| true)
            } else {
                Ok(false)
            };
            false
        });
        if !current? {
            tracing::debug!("Discarding stale login for {}", email);
            return Ok(self.state());
        }
        Ok(self.refresh().await)
    }

    /// Register, then log in with the same credentials
    pub async fn register_and_login(
        &self,
        username: &str,
        email: &str,
        password: &HashedPassword,
    ) -> Result<RegisterResponse> {
        let registered = self.api.register(username, email, password).await?;
        self.login(email, password).await?;
        Ok(registered)
    }

    /// Clear the token and go straight to `Anonymous`; no network call
    ///
    /// The in-memory state is anonymous even when removing the persisted
    /// token fails; that failure is still returned.
    pub fn logout(&self) -> Result<()> {
        self.state.send_modify(|state| {
            self.epoch.fetch_add(1, Ordering::SeqCst);
            *state = SessionState::Anonymous;
        });
        self.api.logout()
    }

    /// Whether the current user authored `post`
    pub fn can_edit(&self, post: &Post) -> bool {
        match (self.user(), post.author_user_id()) {
            (Some(user), Some(author)) => user.id == author,
            _ => false,
        }
    }

    fn begin(&self) -> u64 {
        self.epoch.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn apply(&self, epoch: u64, next: SessionState) -> SessionState {
        self.state.send_if_modified(|state| {
            if self.epoch.load(Ordering::SeqCst) != epoch {
                tracing::debug!("Discarding stale session transition");
                return false;
            }
            let changed = *state != next;
            *state = next;
            changed
        });
        self.state()
    }
}
