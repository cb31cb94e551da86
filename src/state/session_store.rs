//! Persisted, reactive session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single source of truth for who is signed in. Provided through Leptos
//! context by `App`; route guards subscribe to it and the API client reads
//! it at send time. Login and logout flows are its only writers.
//!
//! DESIGN
//! ======
//! The session lives in an `RwSignal` so guards re-evaluate when it changes.
//! Identity and credential are written through to the injected
//! `StorageBackend` on every mutation; `initialized` is in-memory only and is
//! set by `rehydrate` after the persisted record has been read. A record that
//! fails to decode is treated as "no session".

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::session::{Credential, Identity, Session, SignedIn};
use crate::util::storage::StorageBackend;

/// Storage key the session record is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "auth-store";

/// Handle to the shared session. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct SessionStore {
    session: RwSignal<Session>,
    storage: Arc<dyn StorageBackend>,
    key: Arc<str>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn StorageBackend>, key: impl Into<Arc<str>>) -> Self {
        Self { session: RwSignal::new(Session::default()), storage, key: key.into() }
    }

    /// Current session, tracked by the surrounding reactive scope.
    pub fn session(&self) -> Session {
        self.session.get()
    }

    /// Current session without subscribing.
    pub fn session_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    /// Current credential without subscribing. Read at request send time.
    pub fn credential_untracked(&self) -> Option<Credential> {
        self.session.with_untracked(|s| s.credential().cloned())
    }

    pub fn is_initialized(&self) -> bool {
        self.session.with(|s| s.initialized)
    }

    /// Replace identity and credential together and persist them.
    pub fn set_session(&self, identity: Identity, credential: Credential) {
        let signed_in = SignedIn { identity, credential };
        self.persist(&signed_in);
        log::info!("session set for {} ({})", signed_in.identity.email, signed_in.identity.role);
        self.session.update(|s| s.signed_in = Some(signed_in));
    }

    /// Drop identity and credential and remove the persisted record.
    pub fn clear_session(&self) {
        self.storage.remove(&self.key);
        log::info!("session cleared");
        self.session.update(|s| s.signed_in = None);
    }

    /// Flip `initialized` to true. No write happens if it already is.
    pub fn mark_initialized(&self) {
        if self.session.with_untracked(|s| s.initialized) {
            return;
        }
        self.session.update(|s| s.initialized = true);
    }

    /// Load the persisted record into memory and mark the store initialized.
    ///
    /// Runs once per process; later calls are no-ops. A session set before
    /// rehydration (a login that raced startup) is kept over the stored one.
    pub fn rehydrate(&self) {
        if self.session.with_untracked(|s| s.initialized) {
            return;
        }
        let restored = decode_persisted(self.storage.get(&self.key).as_deref());
        if let Some(signed_in) = restored {
            if self.session.with_untracked(|s| s.signed_in.is_none()) {
                log::debug!("restored session for {}", signed_in.identity.email);
                self.session.update(|s| s.signed_in = Some(signed_in));
            }
        }
        self.mark_initialized();
    }

    fn persist(&self, signed_in: &SignedIn) {
        let raw = match encode_persisted(signed_in) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("session encode failed: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &raw) {
            log::warn!("session persist failed: {e}");
        }
    }
}

fn encode_persisted(signed_in: &SignedIn) -> Result<String, serde_json::Error> {
    serde_json::to_string(signed_in)
}

/// Decode a persisted session record. Absent or malformed input yields `None`.
fn decode_persisted(raw: Option<&str>) -> Option<SignedIn> {
    let raw = raw?;
    match serde_json::from_str::<SignedIn>(raw) {
        Ok(signed_in) => Some(signed_in),
        Err(e) => {
            log::warn!("discarding unreadable persisted session: {e}");
            None
        }
    }
}
