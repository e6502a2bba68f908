use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::shared::notify::{NotificationHost, NotificationService};
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_context(NotificationService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <NotificationHost />
        </AuthProvider>
    }
}
