//! Session store: the single source of truth for who is signed in

use crate::auth::jwt::{decode_token, Claims};
use crate::auth::models::Identity;
use crate::auth::navigator::{Navigator, Route};
use crate::auth::storage::TokenStorage;
use crate::error::{Error, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Identity plus the expiry of the token backing it
#[derive(Debug, Clone, Copy)]
struct SessionState {
    identity: Identity,
    expires_at: i64,
}

impl SessionState {
    fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at <= now
    }
}

/// Owns the token lifecycle and the identity derived from it.
///
/// Cloning yields another handle onto the same session.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn TokenStorage>,
    navigator: Arc<dyn Navigator>,
    state: Arc<RwLock<Option<SessionState>>>,
}

impl SessionStore {
    /// Build the store from whatever token storage holds right now.
    ///
    /// A missing, undecodable or expired token yields a signed-out session;
    /// the latter two are purged from storage.
    pub fn hydrate(storage: Arc<dyn TokenStorage>, navigator: Arc<dyn Navigator>) -> Self {
        Self::hydrate_at(storage, navigator, now())
    }

    pub(crate) fn hydrate_at(
        storage: Arc<dyn TokenStorage>,
        navigator: Arc<dyn Navigator>,
        now: i64,
    ) -> Self {
        let state = initial_state(storage.as_ref(), now);
        match &state {
            Some(s) => tracing::debug!(identity = %s.identity, "Session hydrated"),
            None => tracing::debug!("No active session"),
        }

        Self {
            storage,
            navigator,
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Current identity, or `None` when signed out.
    ///
    /// An identity is only returned while storage still holds its token and
    /// that token has not expired. An expired token is purged before
    /// returning.
    pub async fn identity(&self) -> Option<Identity> {
        let now = now();
        {
            let state = self.state.read().await;
            match *state {
                None => return None,
                Some(s) if !s.is_expired_at(now) && self.stored_token().is_some() => {
                    return Some(s.identity)
                }
                Some(_) => {}
            }
        }

        let mut state = self.state.write().await;
        if let Some(s) = *state {
            if s.is_expired_at(now) {
                tracing::debug!("Session token expired");
                self.purge();
                *state = None;
            } else if self.stored_token().is_none() {
                tracing::debug!("Stored token is gone, dropping identity");
                *state = None;
            }
        }
        state.map(|s| s.identity)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.identity().await.is_some()
    }

    /// Inform the store of the identity a sign-in produced, without decoding
    /// it from the response. The identity is only adopted while storage
    /// holds a live token; its expiry is taken from that token.
    pub async fn set_identity(&self, identity: Option<Identity>) {
        let mut state = self.state.write().await;
        *state = identity.and_then(|identity| {
            let expires_at = self
                .stored_token()
                .and_then(|token| decode_token(&token).ok())
                .and_then(|claims| live_expiry(&claims, now()));
            match expires_at {
                Some(expires_at) => Some(SessionState {
                    identity,
                    expires_at,
                }),
                None => {
                    tracing::warn!(identity = %identity, "No live token stored, identity not adopted");
                    None
                }
            }
        });
    }

    /// Persist a freshly issued token and adopt the identity it carries
    pub async fn establish(&self, token: &str) -> Result<Identity> {
        let claims = decode_token(token)?;
        let expires_at = live_expiry(&claims, now())
            .ok_or_else(|| Error::InvalidToken("token is already expired".to_string()))?;
        let identity = claims.identity()?;

        let mut state = self.state.write().await;
        self.storage.store(token)?;
        *state = Some(SessionState {
            identity,
            expires_at,
        });
        tracing::debug!(identity = %identity, "Signed in");
        Ok(identity)
    }

    /// Raw token for the next request, if one is stored
    pub async fn token(&self) -> Option<String> {
        let _state = self.state.read().await;
        self.stored_token()
    }

    /// Sign out locally and go to the sign-in screen. Never fails.
    pub async fn logout(&self) {
        self.clear_and_redirect("logout").await;
    }

    /// Drop a session the server rejected and go to the sign-in screen
    pub async fn invalidate(&self) {
        self.clear_and_redirect("rejected by server").await;
    }

    async fn clear_and_redirect(&self, reason: &str) {
        // Held across purge and navigation so no request picks up the old token.
        let mut state = self.state.write().await;
        self.purge();
        *state = None;
        tracing::debug!(reason, "Session cleared");
        self.navigator.navigate(Route::SignIn);
    }

    fn stored_token(&self) -> Option<String> {
        match self.storage.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Failed to read stored token: {}", e);
                None
            }
        }
    }

    fn purge(&self) {
        if let Err(e) = self.storage.clear() {
            tracing::warn!("Failed to remove stored token: {}", e);
        }
    }
}

fn initial_state(storage: &dyn TokenStorage, now: i64) -> Option<SessionState> {
    let token = match storage.load() {
        Ok(Some(token)) => token,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!("Failed to read stored token: {}", e);
            return None;
        }
    };

    let decoded = decode_token(&token).and_then(|claims| {
        let expires_at = live_expiry(&claims, now)
            .ok_or_else(|| Error::InvalidToken("token expired".to_string()))?;
        Ok(SessionState {
            identity: claims.identity()?,
            expires_at,
        })
    });

    match decoded {
        Ok(state) => Some(state),
        Err(e) => {
            tracing::debug!("Discarding stored token: {}", e);
            if let Err(e) = storage.clear() {
                tracing::warn!("Failed to remove stored token: {}", e);
            }
            None
        }
    }
}

/// Expiry of a token that is still valid at `now`; a token without `exp` has none
fn live_expiry(claims: &Claims, now: i64) -> Option<i64> {
    claims.exp.filter(|_| !claims.is_expired_at(now))
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::Role;
    use crate::auth::storage::MemoryTokenStorage;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Route>>);

    impl Navigator for Recorder {
        fn navigate(&self, route: Route) {
            self.0.lock().unwrap().push(route);
        }
    }

    fn token(sub: &str, role: &str, exp: i64) -> String {
        encode(
            &Header::default(),
            &serde_json::json!({"sub": sub, "role": role, "exp": exp}),
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_hydrate_at_fixed_clock() {
        let storage = MemoryTokenStorage::with_token(token("5", "freelancer", 1_000));
        let store = SessionStore::hydrate_at(
            Arc::new(storage.clone()),
            Arc::new(Recorder::default()),
            999,
        );
        assert!(storage.contains_token());
        // the real clock is far past 1_000, so the first read drops it
        assert_eq!(store.identity().await, None);
        assert!(!storage.contains_token());
    }

    #[tokio::test]
    async fn test_hydrate_exactly_at_expiry_is_expired() {
        let storage = MemoryTokenStorage::with_token(token("5", "client", 1_000));
        let store = SessionStore::hydrate_at(
            Arc::new(storage.clone()),
            Arc::new(Recorder::default()),
            1_000,
        );
        assert!(!storage.contains_token());
        assert_eq!(store.identity().await, None);
    }

    #[tokio::test]
    async fn test_unknown_role_is_treated_as_missing() {
        let exp = now() + 3600;
        let storage = MemoryTokenStorage::with_token(token("5", "viewer", exp));
        let store = SessionStore::hydrate(Arc::new(storage.clone()), Arc::new(Recorder::default()));
        assert_eq!(store.identity().await, None);
        assert!(!storage.contains_token());
    }

    #[tokio::test]
    async fn test_set_identity_takes_expiry_from_stored_token() {
        let storage = MemoryTokenStorage::new();
        let store = SessionStore::hydrate(Arc::new(storage.clone()), Arc::new(Recorder::default()));
        storage.store(&token("9", "client", now() + 60)).unwrap();

        store.set_identity(Some(Identity::new(9, Role::Client))).await;
        assert_eq!(store.identity().await, Some(Identity::new(9, Role::Client)));

        store.set_identity(None).await;
        assert_eq!(store.identity().await, None);
        assert!(storage.contains_token());
    }

    #[tokio::test]
    async fn test_set_identity_without_token_is_ignored() {
        let storage = MemoryTokenStorage::new();
        let store = SessionStore::hydrate(Arc::new(storage.clone()), Arc::new(Recorder::default()));

        store.set_identity(Some(Identity::new(9, Role::Client))).await;
        assert_eq!(store.identity().await, None);
        assert_eq!(store.token().await, None);
    }

    #[tokio::test]
    async fn test_identity_dropped_when_token_removed_externally() {
        let storage = MemoryTokenStorage::with_token(token("4", "freelancer", now() + 60));
        let store = SessionStore::hydrate(Arc::new(storage.clone()), Arc::new(Recorder::default()));
        assert!(store.is_authenticated().await);

        storage.clear().unwrap();
        assert_eq!(store.identity().await, None);
    }

    #[tokio::test]
    async fn test_establish_rejects_expired_token() {
        let storage = MemoryTokenStorage::new();
        let store = SessionStore::hydrate(Arc::new(storage.clone()), Arc::new(Recorder::default()));

        let result = store.establish(&token("1", "client", now() - 5)).await;
        assert!(matches!(result, Err(Error::InvalidToken(_))));
        assert!(!storage.contains_token());
        assert_eq!(store.identity().await, None);
    }

    #[tokio::test]
    async fn test_invalidate_navigates_once() {
        let storage = MemoryTokenStorage::with_token(token("1", "admin", now() + 60));
        let recorder = Arc::new(Recorder::default());
        let store = SessionStore::hydrate(Arc::new(storage.clone()), recorder.clone());

        store.invalidate().await;
        assert_eq!(*recorder.0.lock().unwrap(), vec![Route::SignIn]);
        assert!(store.token().await.is_none());
    }
}
