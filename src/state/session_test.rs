use super::*;

fn employer() -> Identity {
    Identity {
        company_name: Some("Acme Hiring".to_owned()),
        company_email: Some("jobs@acme.test".to_owned()),
        user_id: Some(UserId::Number(42)),
        ..Identity::new("jobs@acme.test", Role::Employer)
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Jobseeker).unwrap(), "\"jobseeker\"");
    assert_eq!(serde_json::from_str::<Role>("\"employer\"").unwrap(), Role::Employer);
}

#[test]
fn role_rejects_unknown_names() {
    assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
}

#[test]
fn role_dashboard_roots() {
    assert_eq!(Role::Jobseeker.dashboard_root(), "/dashboard/jobseeker");
    assert_eq!(Role::Employer.dashboard_root(), "/dashboard/employer");
}

// =============================================================
// UserId / Credential
// =============================================================

#[test]
fn user_id_accepts_number_or_string() {
    assert_eq!(serde_json::from_str::<UserId>("7").unwrap(), UserId::Number(7));
    assert_eq!(
        serde_json::from_str::<UserId>("\"c-19\"").unwrap(),
        UserId::Text("c-19".to_owned())
    );
    assert_eq!(UserId::Number(7).to_string(), "7");
}

#[test]
fn credential_debug_is_redacted() {
    let cred = Credential::new("secret-token");
    assert_eq!(format!("{cred:?}"), "Credential(***)");
    assert_eq!(cred.as_str(), "secret-token");
}

#[test]
fn credential_bearer_value() {
    assert_eq!(Credential::new("abc").bearer(), "Bearer abc");
}

#[test]
fn credential_serializes_as_plain_string() {
    assert_eq!(serde_json::to_string(&Credential::new("t")).unwrap(), "\"t\"");
}

// =============================================================
// Identity
// =============================================================

#[test]
fn identity_missing_optional_fields_deserialize() {
    let identity: Identity =
        serde_json::from_str(r#"{"email":"a@b.test","role":"jobseeker"}"#).unwrap();
    assert_eq!(identity, Identity::new("a@b.test", Role::Jobseeker));
}

#[test]
fn display_name_for_employer_uses_company() {
    assert_eq!(employer().display_name(), "Acme Hiring");
}

#[test]
fn display_name_for_jobseeker_joins_names() {
    let identity = Identity {
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        ..Identity::new("ada@b.test", Role::Jobseeker)
    };
    assert_eq!(identity.display_name(), "Ada Lovelace");
}

#[test]
fn display_name_falls_back_to_email() {
    let identity = Identity {
        first_name: Some("  ".to_owned()),
        ..Identity::new("ada@b.test", Role::Jobseeker)
    };
    assert_eq!(identity.display_name(), "ada@b.test");
}

#[test]
fn account_id_prefers_company_id() {
    let identity = Identity { company_id: Some(UserId::Text("c-7".to_owned())), ..employer() };
    assert_eq!(identity.account_id(), Some(&UserId::Text("c-7".to_owned())));
    assert_eq!(employer().account_id(), Some(&UserId::Number(42)));
    assert_eq!(Identity::new("a@b.test", Role::Jobseeker).account_id(), None);
}

#[test]
fn identity_without_company_id_still_decodes() {
    let identity: Identity =
        serde_json::from_str(r#"{"email":"a@b.test","role":"jobseeker","user_id":3}"#).unwrap();
    assert_eq!(identity.company_id, None);
    assert_eq!(identity.user_id, Some(UserId::Number(3)));
}

// =============================================================
// Session
// =============================================================

#[test]
fn default_session_is_empty_and_uninitialized() {
    let session = Session::default();
    assert!(session.identity().is_none());
    assert!(session.credential().is_none());
    assert!(session.role().is_none());
    assert!(!session.is_initialized());
    assert!(!session.is_signed_in());
}

#[test]
fn signed_in_session_exposes_identity_and_credential() {
    let session = Session {
        signed_in: Some(SignedIn { identity: employer(), credential: Credential::new("tok123") }),
        initialized: true,
    };
    assert_eq!(session.role(), Some(Role::Employer));
    assert_eq!(session.credential().map(Credential::as_str), Some("tok123"));
    assert_eq!(session.identity(), Some(&employer()));
}
