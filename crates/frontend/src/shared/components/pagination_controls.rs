use leptos::prelude::*;

use crate::shared::icons::icon;

/// Numbered page buttons with prev/next chevrons. Only existing pages are
/// rendered, so `on_page` can never receive an out-of-range target.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (always at least 1)
    #[prop(into)]
    page_count: Signal<usize>,

    /// Callback when the operator picks a page
    on_page: Callback<usize>,
) -> impl IntoView {
    view! {
        <nav class="pagination">
            <button
                class="pagination__btn"
                disabled=move || current_page.get() <= 1
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page.run(page - 1);
                    }
                }
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                (1..=page_count.get())
                    .map(|number| {
                        let active = current_page.get() == number;
                        view! {
                            <button
                                class="pagination__btn"
                                class:pagination__btn--active=active
                                on:click=move |_| on_page.run(number)
                            >
                                {number.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination__btn"
                disabled=move || current_page.get() >= page_count.get()
                on:click=move |_| {
                    let page = current_page.get();
                    if page < page_count.get() {
                        on_page.run(page + 1);
                    }
                }
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </nav>
    }
}
