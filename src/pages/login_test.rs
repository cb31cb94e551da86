use std::sync::Arc;

use super::*;
use crate::state::session::{Credential, Identity};
use crate::util::storage::MemoryStorage;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input(Role::Jobseeker, "  ada@example.test ", "pw"),
        Ok(LoginForm {
            role: Role::Jobseeker,
            email: "ada@example.test".to_owned(),
            password: "pw".to_owned(),
        })
    );
}

#[test]
fn validate_login_input_rejects_bad_email() {
    assert_eq!(
        validate_login_input(Role::Employer, "not-an-email", "pw"),
        Err("Enter a valid email address.")
    );
    assert_eq!(validate_login_input(Role::Employer, "@acme.test", "pw"), Err("Enter a valid email address."));
    assert_eq!(validate_login_input(Role::Employer, "   ", "pw"), Err("Enter a valid email address."));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input(Role::Jobseeker, "ada@example.test", ""),
        Err("Password is required.")
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let form = validate_login_input(Role::Jobseeker, "a@b.test", " spaced ").unwrap();
    assert_eq!(form.password, " spaced ");
}

#[test]
fn complete_login_sets_session_and_returns_dashboard() {
    let store = SessionStore::new(Arc::new(MemoryStorage::new()), "auth-store");
    let signed_in = SignedIn {
        identity: Identity::new("hr@acme.test", Role::Employer),
        credential: Credential::new("tok123"),
    };

    let target = complete_login(&store, signed_in.clone());

    assert_eq!(target, "/dashboard/employer");
    let session = store.session_untracked();
    assert!(session.initialized);
    assert_eq!(session.signed_in, Some(signed_in));
}

#[test]
fn login_failed_message_prefers_server_message() {
    let err = ApiError::Status { status: 404, message: "You're not registered as an employer yet".to_owned() };
    assert_eq!(login_failed_message(&err), "You're not registered as an employer yet");
    assert_eq!(login_failed_message(&ApiError::Network("offline".to_owned())), "Login failed: network error: offline");
}

#[test]
fn email_label_depends_on_role() {
    assert_eq!(email_label(Role::Jobseeker), "Email");
    assert_eq!(email_label(Role::Employer), "Company email");
}

#[test]
fn tab_class_marks_active_tab() {
    assert_eq!(tab_class(true), "login-tab login-tab--active");
    assert_eq!(tab_class(false), "login-tab");
}
