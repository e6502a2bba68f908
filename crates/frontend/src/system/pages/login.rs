use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::notify::NotificationService;
use crate::system::auth::{api, context};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = context::use_auth();
    let notify = expect_context::<NotificationService>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        set_is_loading.set(true);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    context::establish_session(set_auth_state, response.token, response.user);
                    notify.success("Access granted");
                }
                Err(e) => {
                    log::error!("login failed: {e}");
                    notify.error("Invalid credentials. Please try again.");
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Delicrem"</h1>
                <h2>"Sign in"</h2>
                <p class="login-hint">"Enter your email and password to sign in."</p>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="user@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="********"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
