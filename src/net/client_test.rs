use super::*;
use crate::state::session::{Credential, Identity, Role};
use crate::util::storage::MemoryStorage;

fn client() -> ApiClient {
    let store = SessionStore::new(Arc::new(MemoryStorage::new()), "auth-store");
    ApiClient::new(&ClientConfig::default(), store)
}

// =============================================================
// Enrichment
// =============================================================

#[test]
fn enrich_without_credential_leaves_request_untouched() {
    let client = client();
    let request = client.get("/jobs/");
    assert_eq!(client.enrich(request.clone()), request);
}

#[test]
fn enrich_attaches_bearer_then_stops_after_clear() {
    let client = client();
    client
        .store()
        .set_session(Identity::new("a@b.test", Role::Jobseeker), Credential::new("abc"));

    let first = client.enrich(client.get("/jobs/saved/"));
    assert_eq!(first.header_value(AUTHORIZATION), Some("Bearer abc"));

    client.store().clear_session();
    let second = client.enrich(client.get("/jobs/saved/"));
    assert_eq!(second.header_value(AUTHORIZATION), None);
}

#[test]
fn enrich_observes_credential_change_between_calls() {
    let client = client();
    let store = client.store().clone();
    store.set_session(Identity::new("a@b.test", Role::Employer), Credential::new("one"));
    assert_eq!(client.enrich(client.get("/x")).header_value(AUTHORIZATION), Some("Bearer one"));

    store.set_session(Identity::new("a@b.test", Role::Employer), Credential::new("two"));
    assert_eq!(client.enrich(client.get("/x")).header_value(AUTHORIZATION), Some("Bearer two"));
}

#[test]
fn enrich_replaces_caller_supplied_authorization() {
    let client = client();
    client
        .store()
        .set_session(Identity::new("a@b.test", Role::Employer), Credential::new("tok"));
    let request = client.get("/x").header("authorization", "Basic zzz");
    let enriched = client.enrich(request);
    assert_eq!(enriched.header_value(AUTHORIZATION), Some("Bearer tok"));
    assert_eq!(enriched.headers().len(), 1);
}

#[test]
fn enrich_preserves_body_and_other_headers() {
    let client = client();
    client
        .store()
        .set_session(Identity::new("a@b.test", Role::Employer), Credential::new("tok"));
    let request = client
        .post("/employer/jobs/")
        .json(&serde_json::json!({ "title": "Rust engineer" }))
        .unwrap();
    let enriched = client.enrich(request);
    assert_eq!(enriched.header_value(CONTENT_TYPE), Some("application/json"));
    assert_eq!(enriched.body(), Some(r#"{"title":"Rust engineer"}"#));
}

// =============================================================
// Request construction
// =============================================================

#[test]
fn url_joins_base_and_path() {
    let client = client();
    assert_eq!(client.url("/auth/login/"), "http://localhost:8000/api/auth/login/");
    assert_eq!(client.url("jobs/"), "http://localhost:8000/api/jobs/");
    assert_eq!(client.url("https://cdn.test/a.png"), "https://cdn.test/a.png");
}

#[test]
fn request_carries_method() {
    assert_eq!(client().post("/auth/login/").method, Method::Post);
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

#[test]
fn json_body_serialization_failure_is_build_error() {
    let mut bad = std::collections::HashMap::new();
    bad.insert(vec![1_u8], "non-string key");
    let err = PreparedRequest::new(Method::Post, "http://x").json(&bad).unwrap_err();
    assert!(matches!(err, ApiError::Build(_)));
}

#[test]
fn timeout_millis_saturates() {
    assert_eq!(timeout_millis(Duration::from_millis(10_000)), 10_000);
    assert_eq!(timeout_millis(Duration::from_secs(u64::MAX / 1000)), u32::MAX);
}

// =============================================================
// Responses
// =============================================================

#[test]
fn response_success_range() {
    assert!(ApiResponse { status: 204, body: String::new() }.is_success());
    assert!(!ApiResponse { status: 401, body: String::new() }.is_success());
}

#[test]
fn response_json_decode_error_is_reported() {
    let resp = ApiResponse { status: 200, body: "<html>".to_owned() };
    let err = resp.json::<serde_json::Value>().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
