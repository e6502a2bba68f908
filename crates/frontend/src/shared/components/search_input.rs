use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::icons::icon;

const DEBOUNCE_MS: i32 = 300;

/// Search box with debounce and a clear button. The filter itself lives in
/// the caller's collection store; this component only reports term changes.
#[component]
pub fn SearchInput(
    /// Callback fired (debounced) when the term changes
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search by name...".to_string()
    } else {
        placeholder
    };

    // Local input state, ahead of the debounce. The pending closure lives
    // next to its timeout id so cancelling the timer also drops it.
    let (input_value, set_input_value) = signal(String::new());
    let debounce =
        StoredValue::new_local(None::<(i32, wasm_bindgen::closure::Closure<dyn Fn()>)>);

    let cancel_pending = move || {
        if let Some((timeout_id, _closure)) = debounce.write_value().take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }
    };

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        cancel_pending();

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        if let Ok(timeout_id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            DEBOUNCE_MS,
        ) {
            debounce.set_value(Some((timeout_id, closure)));
        }
    };

    on_cleanup(cancel_pending);

    let clear = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
