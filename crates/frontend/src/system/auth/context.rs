use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

/// Auth context provider component.
///
/// Restores the session token from localStorage on mount; the token's
/// validity is ultimately the backend's call — a stale token simply makes
/// the first authorized request fail with 401.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        token: storage::get_token(),
        user: None,
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store the freshly issued session and flip the app into the main layout.
pub fn establish_session(set_auth_state: WriteSignal<AuthState>, token: String, user: Option<UserInfo>) {
    storage::save_token(&token);
    set_auth_state.set(AuthState {
        token: Some(token),
        user,
    });
}

/// Drop the session; the router falls back to the login page.
pub fn end_session(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}
