//! Job detail page (`/jobs/:id`), mounted behind `AuthGuard`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::loading_indicator::LoadingIndicator;
use crate::net::client::ApiClient;
use crate::net::types::JobSummary;

#[component]
pub fn JobPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let params = use_params_map();

    let job = LocalResource::new(move || {
        let client = client.clone();
        let job_id = params.read().get("id").unwrap_or_default();
        async move { crate::net::api::fetch_job(&client, &job_id).await }
    });

    view! {
        <div class="job-page">
            <Suspense fallback=move || view! { <LoadingIndicator/> }>
                {move || {
                    job.get()
                        .map(|result| match result {
                            Ok(job) => view! { <JobDetails job=job/> }.into_any(),
                            Err(e) => view! { <p class="job-page__error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn JobDetails(job: JobSummary) -> impl IntoView {
    let saved = job.is_saved;
    let meta = [job.company_name, job.location, job.job_type]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");
    let status = if job.is_applied {
        Some(job.application_status.unwrap_or_else(|| "Applied".to_owned()))
    } else {
        None
    };

    view! {
        <article class="job-page__details">
            <h1>{job.title}</h1>
            <p class="job-page__meta">{meta}</p>
            {status.map(|s| view! { <span class="job-page__status">{s}</span> })}
            <Show when=move || saved>
                <span class="job-page__saved">"Saved"</span>
            </Show>
        </article>
    }
}
