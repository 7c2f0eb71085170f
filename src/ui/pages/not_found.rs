//! Not found page component
//!
//! Shown for every path other than the home route, including `/about`
//! which the navigation links to before it has content.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Mark the SSR response as 404
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found - CipherPlay" />

        <section class="not-found">
            <div class="container">
                <h1 class="not-found-code">"404"</h1>
                <h2 class="section-title">"Page Not Found"</h2>
                <p class="section-subtitle">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <A href="/" attr:class="btn btn-primary">
                    "Go Home"
                </A>
            </div>
        </section>
    }
}
