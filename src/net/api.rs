//! Typed wrappers over `ApiClient` for the endpoints this client calls.
//!
//! ERROR HANDLING
//! ==============
//! Unlike `ApiClient::send`, these helpers interpret the response: a
//! non-success status becomes `ApiError::Status` carrying the server's
//! `message`, and a success without the expected payload is a decode error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::client::{ApiClient, ApiResponse, PreparedRequest};
use super::error::ApiError;
use super::types::{Envelope, ErrorEnvelope, JobSummary, LoginData, LoginForm, LoginRequest};
use crate::state::session::{Credential, Identity, Role, SignedIn};

const LOGIN_PATH: &str = "/auth/login/";

/// Sign in with email and password via `POST /auth/login/`.
///
/// Returns the identity and credential to hand to `SessionStore::set_session`;
/// this function does not touch the store itself.
///
/// # Errors
///
/// Returns `ApiError` if the request fails, the server rejects the
/// credentials, or the response lacks an access token.
pub async fn login(client: &ApiClient, form: &LoginForm) -> Result<SignedIn, ApiError> {
    let request = login_request(client, form)?;
    let resp = client.send(request).await?;
    parse_login_response(form.role, &resp)
}

/// `GET` an authenticated resource and decode its envelope's `data`.
///
/// # Errors
///
/// Returns `ApiError` on transport failure, non-success status, or a body
/// that does not decode to `T`.
pub async fn get_json<T: DeserializeOwned>(client: &ApiClient, path: &str) -> Result<T, ApiError> {
    let resp = client.send(client.get(path)).await?;
    unwrap_envelope(&resp)
}

/// Fetch one job posting via `GET /jobs/{id}/`.
///
/// # Errors
///
/// Returns `ApiError` on transport failure, non-success status, or an
/// unexpected body.
pub async fn fetch_job(client: &ApiClient, job_id: &str) -> Result<JobSummary, ApiError> {
    get_json(client, &job_endpoint(job_id)).await
}

fn job_endpoint(job_id: &str) -> String {
    format!("/jobs/{job_id}/")
}

fn login_request(client: &ApiClient, form: &LoginForm) -> Result<PreparedRequest, ApiError> {
    client.post(LOGIN_PATH).json(&LoginRequest::from(form))
}

fn parse_login_response(role: Role, resp: &ApiResponse) -> Result<SignedIn, ApiError> {
    let data: LoginData = unwrap_envelope(resp)?;
    Ok(signed_in_from_login(role, data))
}

/// Decode `{ data }` from a successful response, or turn a failure into
/// `ApiError::Status`.
fn unwrap_envelope<T: DeserializeOwned>(resp: &ApiResponse) -> Result<T, ApiError> {
    if !resp.is_success() {
        return Err(status_error(resp));
    }
    let envelope: Envelope<T> = resp.json()?;
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("response envelope has no data".to_owned()))
}

fn status_error(resp: &ApiResponse) -> ApiError {
    let message = serde_json::from_str::<ErrorEnvelope>(&resp.body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed with status {}", resp.status));
    ApiError::Status { status: resp.status, message }
}

/// Map login response data to a session. The role is the one the user chose
/// on the login form.
fn signed_in_from_login(role: Role, data: LoginData) -> SignedIn {
    let company_email = (role == Role::Employer).then(|| data.email.clone());
    let identity = Identity {
        first_name: data.first_name,
        last_name: data.last_name,
        company_name: data.company_name,
        company_email,
        company_id: data.user_id.clone(),
        user_id: data.user_id,
        profile_picture: data.profile_picture,
        ..Identity::new(data.email, role)
    };
    SignedIn { identity, credential: Credential::new(data.access_token) }
}
