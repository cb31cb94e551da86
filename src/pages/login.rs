//! Login page for jobseekers and employers.
//!
//! On success the page writes the returned identity and credential into the
//! session store and moves to the signed-in role's dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::client::ApiClient;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::types::LoginForm;
use crate::state::session::Role;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::session::SignedIn;
use crate::state::session_store::SessionStore;

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, .. } => message.clone(),
        other => format!("Login failed: {other}"),
    }
}

fn validate_login_input(role: Role, email: &str, password: &str) -> Result<LoginForm, &'static str> {
    let email = email.trim();
    let valid_email = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid_email {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Password is required.");
    }
    Ok(LoginForm { role, email: email.to_owned(), password: password.to_owned() })
}

/// Record a successful login in the store and return where to go next.
#[cfg(any(test, feature = "hydrate"))]
fn complete_login(store: &SessionStore, signed_in: SignedIn) -> &'static str {
    let role = signed_in.identity.role;
    store.set_session(signed_in.identity, signed_in.credential);
    store.mark_initialized();
    role.dashboard_root()
}

fn tab_class(active: bool) -> &'static str {
    if active { "login-tab login-tab--active" } else { "login-tab" }
}

fn email_label(role: Role) -> &'static str {
    match role {
        Role::Jobseeker => "Email",
        Role::Employer => "Company email",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let role = RwSignal::new(Role::Jobseeker);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let select_role = move |next: Role| {
        if role.get_untracked() != next {
            role.set(next);
            email.set(String::new());
            password.set(String::new());
            info.set(String::new());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match validate_login_input(role.get(), &email.get(), &password.get()) {
            Ok(form) => form,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&client, &form).await {
                    Ok(signed_in) => {
                        let target = complete_login(&store, signed_in);
                        navigate(target, NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(login_failed_message(&e));
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, &client, &store, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Job Connect"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <div class="login-tabs" role="tablist">
                    <button
                        class=move || tab_class(role.get() == Role::Jobseeker)
                        on:click=move |_| select_role(Role::Jobseeker)
                    >
                        "Job Seeker"
                    </button>
                    <button
                        class=move || tab_class(role.get() == Role::Employer)
                        on:click=move |_| select_role(Role::Employer)
                    >
                        "Employer"
                    </button>
                </div>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        {move || email_label(role.get())}
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
