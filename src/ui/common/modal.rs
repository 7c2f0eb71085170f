use leptos::prelude::*;

/// Generic detail modal shown while `selected` holds a title
///
/// Clicking the backdrop, the close button or pressing Escape clears the selection.
#[component]
pub fn DetailModal(
    /// Title of the detail being shown, `None` keeps the modal closed
    selected: RwSignal<Option<String>>,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            close_on_escape(selected, &ev.key());
        });

        // The handle has no Drop impl; the listener stays attached until removed
        on_cleanup(move || handle_keydown.remove());
    }

    view! {
        <Show when=move || selected.with(Option::is_some)>
            <div class="modal-overlay" on:click=move |_| selected.set(None)>
                <div class="modal-content" on:click=|e| e.stop_propagation()>
                    <button
                        class="modal-close"
                        on:click=move |_| selected.set(None)
                        aria-label="Close modal"
                    >
                        "×"
                    </button>
                    <h2>{move || selected.get().unwrap_or_default()}</h2>
                    <p>"Detailed information coming soon..."</p>
                </div>
            </div>
        </Show>
    }
}

/// Clear `selected` when `key` is Escape and the modal is open
///
/// Returns whether the modal was closed. A disposed selection is ignored.
#[cfg_attr(feature = "ssr", allow(dead_code))]
fn close_on_escape(selected: RwSignal<Option<String>>, key: &str) -> bool {
    if key != "Escape" || !selected.try_with_untracked(Option::is_some).unwrap_or(false) {
        return false;
    }
    selected.try_set(None).is_none()
}
