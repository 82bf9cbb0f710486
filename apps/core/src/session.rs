use std::sync::{Arc, RwLock};

use crate::models::user::User;

/// The single source of truth for "is there a logged-in user".
///
/// The original app read a raw token out of `localStorage` from a dozen
/// components; here the token and the current user live in one shared,
/// injected object. The token is opaque — stored and attached to requests,
/// never parsed.
#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionState>>,
}

#[derive(Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a session after a successful login or register.
    pub fn authenticate(&self, token: String, user: User) {
        let mut state = self.inner.write().expect("session lock poisoned");
        state.token = Some(token);
        state.user = Some(user);
    }

    /// Drops the session. Also invoked when the backend answers 401 —
    /// an expired token is treated the same as being logged out.
    pub fn clear(&self) {
        let mut state = self.inner.write().expect("session lock poisoned");
        state.token = None;
        state.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .expect("session lock poisoned")
            .token
            .is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .token
            .clone()
    }

    pub fn user(&self) -> Option<User> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .user
            .clone()
    }

    /// True when the current user may moderate content.
    pub fn is_admin(&self) -> bool {
        self.user().map(|u| u.role.is_admin()).unwrap_or(false)
    }
}
