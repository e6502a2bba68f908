use leptos::ev;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Modal dialog frame: dimmed overlay, centered surface, close on overlay
/// click or Escape. The open/closed decision belongs to the caller's state,
/// so this component renders unconditionally once mounted.
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    /// Extra style for the dialog surface (e.g. a wider max-width).
    #[prop(optional, into)]
    surface_style: String,
    children: Children,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div
                class="modal-surface"
                style=surface_style
                on:click=|event| event.stop_propagation()
            >
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
