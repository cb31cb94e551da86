//! Wire DTOs for the Job Connect API.
//!
//! DESIGN
//! ======
//! The API wraps every payload in `{ success, message, data }`. Field names
//! mirror the server's JSON so serde needs no custom glue.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::{Role, UserId};

/// Standard response envelope.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Envelope shape used only to pull `message` out of error responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub message: Option<String>,
}

/// Credentials typed into the login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub role: Role,
    pub email: String,
    pub password: String,
}

/// `POST /auth/login/` body. Employers log in with company-prefixed field
/// names; the server accepts either shape.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum LoginRequest<'a> {
    Jobseeker {
        email: &'a str,
        password: &'a str,
        #[serde(rename = "userType")]
        user_type: Role,
    },
    Employer {
        #[serde(rename = "companyEmail")]
        company_email: &'a str,
        #[serde(rename = "companyPassword")]
        company_password: &'a str,
        #[serde(rename = "userType")]
        user_type: Role,
    },
}

impl<'a> From<&'a LoginForm> for LoginRequest<'a> {
    fn from(form: &'a LoginForm) -> Self {
        match form.role {
            Role::Jobseeker => Self::Jobseeker {
                email: &form.email,
                password: &form.password,
                user_type: form.role,
            },
            Role::Employer => Self::Employer {
                company_email: &form.email,
                company_password: &form.password,
                user_type: form.role,
            },
        }
    }
}

/// `data` of a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginData {
    pub access_token: String,
    pub email: String,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// Job posting as returned by `GET /jobs/{id}/`. Only the fields this client
/// renders are decoded.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct JobSummary {
    pub title: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub is_saved: bool,
    #[serde(default)]
    pub is_applied: bool,
    #[serde(default)]
    pub application_status: Option<String>,
}
