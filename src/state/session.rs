//! Session model for the signed-in browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held by `SessionStore` and read by route guards and the API client. The
//! identity and bearer credential travel together as one `SignedIn` value, so
//! a session can never carry a token without an identity or the reverse.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account kind a user signed in as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Jobseeker,
    Employer,
}

impl Role {
    /// Wire name used by the API (`"jobseeker"` / `"employer"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jobseeker => "jobseeker",
            Self::Employer => "employer",
        }
    }

    /// Root route of this role's dashboard.
    pub fn dashboard_root(self) -> &'static str {
        match self {
            Self::Jobseeker => "/dashboard/jobseeker",
            Self::Employer => "/dashboard/employer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User or company identifier. The API returns numeric ids for accounts but
/// some profile endpoints hand back string ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Opaque bearer token issued by the API at login.
///
/// The contents are never inspected. `Debug` is redacted so sessions can be
/// logged without leaking the token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for an `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Who is signed in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Account id that profile, resume-view, and job-ownership lookups key
    /// on. Login fills it from the response's `user_id` for both roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl Identity {
    /// Bare identity with only the required fields set.
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            role,
            first_name: None,
            last_name: None,
            company_name: None,
            company_email: None,
            user_id: None,
            company_id: None,
            profile_picture: None,
        }
    }

    /// Id for per-account API paths: `company_id`, else `user_id`.
    pub fn account_id(&self) -> Option<&UserId> {
        self.company_id.as_ref().or(self.user_id.as_ref())
    }

    /// Name shown in headers and sidebars: company name for employers,
    /// "first last" for jobseekers, falling back to the email.
    pub fn display_name(&self) -> String {
        let name = match self.role {
            Role::Employer => self.company_name.clone().unwrap_or_default(),
            Role::Jobseeker => [self.first_name.as_deref(), self.last_name.as_deref()]
                .into_iter()
                .flatten()
                .filter(|part| !part.trim().is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        };
        if name.trim().is_empty() { self.email.clone() } else { name }
    }
}

/// Identity and credential of an authenticated user. Always set and cleared
/// as a unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedIn {
    pub identity: Identity,
    pub credential: Credential,
}

/// Snapshot of the session held by the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub signed_in: Option<SignedIn>,
    /// Set once persisted state has been loaded at startup. Never persisted.
    pub initialized: bool,
}

impl Session {
    pub fn identity(&self) -> Option<&Identity> {
        self.signed_in.as_ref().map(|s| &s.identity)
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.signed_in.as_ref().map(|s| &s.credential)
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(|i| i.role)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in.is_some()
    }
}
