use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::{end_session, use_auth};

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let user_email = move || {
        auth_state
            .get()
            .user
            .map(|u| u.email)
            .unwrap_or_default()
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">"Delicrem"</div>
            <div class="top-header__actions">
                <span class="top-header__user">{user_email}</span>
                <button
                    class="button button--secondary"
                    on:click=move |_| end_session(set_auth_state)
                >
                    {icon("logout")}
                    "Log out"
                </button>
            </div>
        </header>
    }
}
