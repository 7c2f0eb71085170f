//! Page chrome: fixed navigation bar wrapped around every route
//!
//! The bar switches to its scrolled style once the window is scrolled past
//! the threshold, and swaps its link set depending on whether the current
//! route is the home page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::core::content::{COMPANY_NAME, LOGO_SOLID};
use crate::core::nav::{NavLink, NavTarget, NavVariant};
use crate::core::scroll::ScrollTracker;

/// Layout wrapping page content with the navigation bar
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let location = use_location();
    let tracker = RwSignal::new(ScrollTracker::new());

    // Re-evaluate on every scroll event; only flag changes notify subscribers
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let handle_scroll = window_event_listener(scroll, move |_| {
            let offset = window().scroll_y().unwrap_or_default();
            tracker.maybe_update(|t| t.observe(offset));
        });

        // The handle has no Drop impl; the listener stays attached until removed
        on_cleanup(move || handle_scroll.remove());
    }

    let variant = Memo::new(move |_| location.pathname.with(|path| NavVariant::for_path(path)));

    view! {
        <div class="layout">
            <nav class=move || tracker.with(ScrollTracker::nav_class)>
                <div class="nav-container">
                    <A href="/" attr:class="nav-logo">
                        <img src=LOGO_SOLID alt=COMPANY_NAME />
                    </A>
                    <div class="nav-links">
                        {move || {
                            variant
                                .get()
                                .links()
                                .iter()
                                .map(|link| view! { <NavItem link=*link /> })
                                .collect_view()
                        }}
                    </div>
                </div>
            </nav>
            <main class="layout-content">
                {children()}
            </main>
        </div>
    }
}

#[component]
fn NavItem(link: NavLink) -> impl IntoView {
    match link.target {
        NavTarget::Section(id) => view! {
            <a class=link.class() on:click=move |_| scroll_to_section(id)>
                {link.label}
            </a>
        }
        .into_any(),
        NavTarget::Route(path) => view! {
            <A href=path attr:class=link.class()>
                {link.label}
            </A>
        }
        .into_any(),
    }
}

/// Smooth-scroll the element with id `id` into view
///
/// Does nothing when no such element is mounted.
pub fn scroll_to_section(id: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        let Some(element) = document().get_element_by_id(id) else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(feature = "ssr")]
    {
        let _ = id;
    }
}
