use std::sync::Arc;

use super::*;
use crate::state::session::{Credential, Identity, Role};
use crate::util::storage::MemoryStorage;

#[test]
fn greeting_uses_display_name() {
    let store = SessionStore::new(Arc::new(MemoryStorage::new()), "auth-store");
    let identity = Identity {
        company_name: Some("Acme".to_owned()),
        ..Identity::new("hr@acme.test", Role::Employer)
    };
    store.set_session(identity, Credential::new("t"));
    assert_eq!(greeting(&store.session_untracked()), "Welcome back, Acme");
}

#[test]
fn greeting_without_identity_is_generic() {
    assert_eq!(greeting(&Session::default()), "Welcome");
}
