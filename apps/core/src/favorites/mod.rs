//! Favorite status, scoped to the current session.
//!
//! This boundary is deliberately not splittable from auth state: an
//! unauthenticated caller gets `false` without a network round-trip (no
//! point collecting 401s), and a toggle without a session never reaches
//! the backend.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::errors::{Error, Result};
use crate::services::FavoriteService;
use crate::session::Session;

pub struct FavoriteGate {
    service: Arc<dyn FavoriteService>,
    session: Session,
    /// Last state confirmed by (or optimistically sent to) the backend.
    known: Mutex<HashMap<String, bool>>,
    /// Cars with a mutation in flight. At most one outstanding mutation
    /// per car: a toggle while one is pending is dropped, the in-process
    /// analogue of a disabled button.
    pending: Mutex<HashSet<String>>,
}

impl FavoriteGate {
    pub fn new(service: Arc<dyn FavoriteService>, session: Session) -> Self {
        FavoriteGate {
            service,
            session,
            known: Mutex::new(HashMap::new()),
            pending: Mutex::new(HashSet::new()),
        }
    }

    /// Whether the current user has favorited `car_id`. Unauthenticated
    /// callers get `false` immediately — the favorite service is not
    /// consulted at all.
    pub async fn is_favorite(&self, car_id: &str) -> Result<bool> {
        if !self.session.is_authenticated() {
            return Ok(false);
        }
        if let Some(&state) = self.lock_known().get(car_id) {
            return Ok(state);
        }
        let state = self.service.check_favorite(car_id).await?;
        self.lock_known().insert(car_id.to_string(), state);
        Ok(state)
    }

    /// True while a mutation for this car is in flight; callers disable
    /// the triggering control on it.
    pub fn is_pending(&self, car_id: &str) -> bool {
        self.lock_pending().contains(car_id)
    }

    /// Flips the favorite state with exactly one add-or-remove call and
    /// returns the new state.
    ///
    /// Without a session this signals `AuthenticationRequired` before any
    /// mutation; an authorization failure from the backend surfaces the
    /// same way (expired session and logged-out are treated identically).
    pub async fn toggle(&self, car_id: &str) -> Result<bool> {
        if !self.session.is_authenticated() {
            return Err(Error::AuthenticationRequired);
        }

        if self.is_pending(car_id) {
            debug!("favorite toggle for {car_id} already in flight, ignoring");
            return Ok(self.lock_known().get(car_id).copied().unwrap_or(false));
        }

        let current = self.is_favorite(car_id).await?;

        {
            let mut pending = self.lock_pending();
            if !pending.insert(car_id.to_string()) {
                return Ok(current);
            }
        }

        let result = if current {
            self.service.remove_favorite(car_id).await
        } else {
            self.service.add_favorite(car_id).await
        };

        self.lock_pending().remove(car_id);

        match result {
            Ok(()) => {
                let new_state = !current;
                self.lock_known().insert(car_id.to_string(), new_state);
                Ok(new_state)
            }
            Err(err) => Err(err),
        }
    }

    /// Drops the cached state for one car, forcing the next
    /// `is_favorite` to re-check with the backend.
    pub fn invalidate(&self, car_id: &str) {
        self.lock_known().remove(car_id);
    }

    fn lock_known(&self) -> std::sync::MutexGuard<'_, HashMap<String, bool>> {
        self.known.lock().expect("favorite cache lock poisoned")
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
        self.pending.lock().expect("favorite pending lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::models::car::Car;
    use crate::models::user::{Role, User};

    /// Counting fake; favorites start empty unless seeded.
    #[derive(Default)]
    struct FakeFavoriteService {
        favorited: Mutex<HashSet<String>>,
        calls: AtomicUsize,
        fail_with_auth: bool,
    }

    impl FakeFavoriteService {
        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl FavoriteService for FakeFavoriteService {
        async fn add_favorite(&self, car_id: &str) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_with_auth {
                return Err(Error::AuthenticationRequired);
            }
            self.favorited.lock().unwrap().insert(car_id.to_string());
            Ok(())
        }

        async fn remove_favorite(&self, car_id: &str) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.favorited.lock().unwrap().remove(car_id);
            Ok(())
        }

        async fn get_favorites(&self) -> Result<Vec<Car>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn check_favorite(&self, car_id: &str) -> Result<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.favorited.lock().unwrap().contains(car_id))
        }
    }

    fn logged_in_session() -> Session {
        let session = Session::new();
        session.authenticate(
            "token".into(),
            User {
                id: "u1".into(),
                username: "carla".into(),
                email: "carla@example.com".into(),
                role: Role::User,
            },
        );
        session
    }

    #[tokio::test]
    async fn test_unauthenticated_is_favorite_is_false_with_zero_calls() {
        let service = Arc::new(FakeFavoriteService::default());
        let gate = FavoriteGate::new(service.clone(), Session::new());

        assert!(!gate.is_favorite("c1").await.unwrap());
        assert_eq!(service.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unauthenticated_toggle_signals_login_without_mutating() {
        let service = Arc::new(FakeFavoriteService::default());
        let gate = FavoriteGate::new(service.clone(), Session::new());

        let err = gate.toggle("c1").await.unwrap_err();
        assert!(err.is_authentication_required());
        assert_eq!(service.call_count(), 0);
    }

    #[tokio::test]
    async fn test_toggle_adds_then_removes() {
        let service = Arc::new(FakeFavoriteService::default());
        let gate = FavoriteGate::new(service.clone(), logged_in_session());

        assert!(gate.toggle("c1").await.unwrap());
        assert!(gate.is_favorite("c1").await.unwrap());
        assert!(!gate.toggle("c1").await.unwrap());
        assert!(!gate.is_favorite("c1").await.unwrap());
    }

    #[tokio::test]
    async fn test_is_favorite_caches_backend_answer() {
        let service = Arc::new(FakeFavoriteService::default());
        service.favorited.lock().unwrap().insert("c9".to_string());
        let gate = FavoriteGate::new(service.clone(), logged_in_session());

        assert!(gate.is_favorite("c9").await.unwrap());
        assert!(gate.is_favorite("c9").await.unwrap());
        // One check_favorite, then served from cache.
        assert_eq!(service.call_count(), 1);

        gate.invalidate("c9");
        assert!(gate.is_favorite("c9").await.unwrap());
        assert_eq!(service.call_count(), 2);
    }

    #[tokio::test]
    async fn test_backend_auth_failure_maps_to_authentication_required() {
        let service = Arc::new(FakeFavoriteService {
            fail_with_auth: true,
            ..FakeFavoriteService::default()
        });
        let gate = FavoriteGate::new(service.clone(), logged_in_session());

        let err = gate.toggle("c1").await.unwrap_err();
        assert!(err.is_authentication_required());
        // The gate is usable again afterwards — pending flag released.
        assert!(!gate.is_pending("c1"));
    }
}
