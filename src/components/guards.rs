//! Route guard components.
//!
//! `AuthGuard`, `JobseekerGuard`, and `EmployerGuard` are the ways to protect
//! a route subtree. Each shows `LoadingIndicator` until the session store has
//! rehydrated, then renders its children or redirects. A denied guard renders
//! nothing. Without `redirect_to`, signed-out visitors go to the configured
//! login route.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::loading_indicator::LoadingIndicator;
use crate::config::{ClientConfig, DEFAULT_LOGIN_ROUTE};
use crate::state::session::Role;
use crate::state::session_store::SessionStore;
use crate::util::auth::{GuardPhase, RoleRequirement, install_guard};

#[component]
fn RoleGuard(requirement: RoleRequirement, redirect_to: Option<String>, children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let fallback = redirect_to
        .or_else(|| use_context::<ClientConfig>().map(|c| c.login_route))
        .unwrap_or_else(|| DEFAULT_LOGIN_ROUTE.to_owned());
    let phase = install_guard(store, requirement, fallback, navigate);

    view! {
        <Show when=move || phase.get() == GuardPhase::Pending>
            <LoadingIndicator/>
        </Show>
        <Show when=move || phase.get() == GuardPhase::Authorized>
            {children()}
        </Show>
    }
}

/// Admit any signed-in user.
#[component]
pub fn AuthGuard(#[prop(optional, into)] redirect_to: Option<String>, children: ChildrenFn) -> impl IntoView {
    view! {
        <RoleGuard requirement=RoleRequirement::Any redirect_to=redirect_to>
            {children()}
        </RoleGuard>
    }
}

/// Admit signed-in jobseekers; employers are sent to their dashboard.
#[component]
pub fn JobseekerGuard(#[prop(optional, into)] redirect_to: Option<String>, children: ChildrenFn) -> impl IntoView {
    view! {
        <RoleGuard requirement={RoleRequirement::Only(Role::Jobseeker)} redirect_to=redirect_to>
            {children()}
        </RoleGuard>
    }
}

/// Admit signed-in employers; jobseekers are sent to their dashboard.
#[component]
pub fn EmployerGuard(#[prop(optional, into)] redirect_to: Option<String>, children: ChildrenFn) -> impl IntoView {
    view! {
        <RoleGuard requirement={RoleRequirement::Only(Role::Employer)} redirect_to=redirect_to>
            {children()}
        </RoleGuard>
    }
}
