use leptos::prelude::*;

use crate::shared::icons::icon;

use super::Screen;

#[component]
pub fn Sidebar(active: RwSignal<Screen>) -> impl IntoView {
    view! {
        <nav class="sidebar">
            <ul class="sidebar__menu">
                {Screen::ALL
                    .into_iter()
                    .map(|screen| {
                        view! {
                            <li class="sidebar__item">
                                <button
                                    class="sidebar__link"
                                    class:sidebar__link--active=move || active.get() == screen
                                    on:click=move |_| active.set(screen)
                                >
                                    {icon(screen.icon_name())}
                                    <span>{screen.label()}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
