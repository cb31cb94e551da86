//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guards::{AuthGuard, EmployerGuard, JobseekerGuard};
use crate::config::ClientConfig;
use crate::net::client::ApiClient;
use crate::pages::{
    dashboard::{EmployerDashboard, JobseekerDashboard},
    job::JobPage,
    login::LoginPage,
};
use crate::state::session_store::SessionStore;
use crate::util::storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session store and API client, provides them (and the config)
/// as context, and rehydrates the session once on the client. Guards stay in
/// their loading state until that rehydration marks the store initialized,
/// which never happens during a server render.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let store = SessionStore::new(Arc::new(LocalStorage), config.storage_key.clone());
    let client = ApiClient::new(&config, store.clone());

    provide_context(config);
    provide_context(store.clone());
    provide_context(client);

    // Effects only run in the browser.
    Effect::new(move || store.rehydrate());

    view! {
        <Stylesheet id="leptos" href="/pkg/jobconnect.css"/>
        <Title text="Job Connect"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("jobseeker"))
                    view=|| view! { <JobseekerGuard><JobseekerDashboard/></JobseekerGuard> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("employer"))
                    view=|| view! { <EmployerGuard><EmployerDashboard/></EmployerGuard> }
                />
                <Route
                    path=(StaticSegment("jobs"), ParamSegment("id"))
                    view=|| view! { <AuthGuard><JobPage/></AuthGuard> }
                />
            </Routes>
        </Router>
    }
}
