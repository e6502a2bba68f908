use leptos::prelude::*;

use super::modal::Modal;

/// Non-blocking delete confirmation. Replaces the browser `confirm()` popup:
/// nothing is sent until the operator explicitly confirms, and cancelling
/// closes the dialog without a request.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] message: Signal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal
            title=Signal::derive(|| "Are you sure?".to_string())
            on_close=on_cancel
            surface_style="max-width: 420px;"
        >
            <p class="confirm-message">{message}</p>
            <div class="modal-actions">
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="button button--danger" on:click=move |_| on_confirm.run(())>
                    "Yes, delete"
                </button>
            </div>
        </Modal>
    }
}
