//! Role dashboards with the sign-out action.
//!
//! Both pages are mounted behind role guards in `App`, so they can assume a
//! signed-in session of the matching role.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::{ClientConfig, DEFAULT_LOGIN_ROUTE};
use crate::state::session::Session;
use crate::state::session_store::SessionStore;

fn greeting(session: &Session) -> String {
    match session.identity() {
        Some(identity) => format!("Welcome back, {}", identity.display_name()),
        None => "Welcome".to_owned(),
    }
}

/// Jobseeker dashboard root (`/dashboard/jobseeker`).
#[component]
pub fn JobseekerDashboard() -> impl IntoView {
    view! { <DashboardShell title="Jobseeker Dashboard"/> }
}

/// Employer dashboard root (`/dashboard/employer`).
#[component]
pub fn EmployerDashboard() -> impl IntoView {
    view! { <DashboardShell title="Employer Dashboard"/> }
}

#[component]
fn DashboardShell(title: &'static str) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let login_route = use_context::<ClientConfig>()
        .map_or_else(|| DEFAULT_LOGIN_ROUTE.to_owned(), |c| c.login_route);
    let navigate = use_navigate();

    let reader = store.clone();
    let on_sign_out = move |_| {
        store.clear_session();
        navigate(&login_route, NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{title}</h1>
                <p class="dashboard-page__greeting">{move || greeting(&reader.session())}</p>
                <button class="btn" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </header>
        </div>
    }
}
