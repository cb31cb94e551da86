//! Full-screen spinner shown while a route guard is waiting on the session.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__spinner"></div>
            <p class="loading-screen__label">"Loading..."</p>
        </div>
    }
}
