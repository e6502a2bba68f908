use contracts::domain::customers::Customer;
use contracts::domain::orders::Order;
use contracts::domain::products::Product;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list::ListVm;

use super::details::{OrderDetails, OrderForm};

const PAGE_SIZE: usize = 5;

#[component]
pub fn OrderList() -> impl IntoView {
    let vm: ListVm<Order> = ListVm::new(PAGE_SIZE);
    vm.load();

    // Customer and product options for the form, fetched once per screen.
    let customers = RwSignal::new(Vec::<Customer>::new());
    let products = RwSignal::new(Vec::<Product>::new());
    spawn_local(async move {
        match api::fetch_all::<Customer>().await {
            Ok(list) => customers.set(list),
            Err(e) => log::error!("loading customers failed: {e}"),
        }
    });
    spawn_local(async move {
        match api::fetch_all::<Product>().await {
            Ok(list) => products.set(list),
            Err(e) => log::error!("loading products failed: {e}"),
        }
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Orders"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| vm.start_create()>
                        {icon("plus")}
                        "New order"
                    </button>
                    <button class="button button--secondary" on:click=move |_| vm.load()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <SearchInput
                on_change=Callback::new(move |term| vm.set_search_term(term))
                placeholder="Search by customer"
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Delivery date"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Paid"</th>
                            <th class="table__header-cell">"Lines"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || vm.page_items().into_iter().map(|row| {
                            let edit = row.clone();
                            let doomed = row.clone();
                            let shown = row.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.customer_name().to_string()}</td>
                                    <td class="table__cell">{format_date(row.delivery_date)}</td>
                                    <td class="table__cell">
                                        <span class=format!("badge badge--{}", row.status.as_str())>
                                            {row.status.label()}
                                        </span>
                                    </td>
                                    <td class="table__cell">{if row.paid { "Yes" } else { "No" }}</td>
                                    <td class="table__cell">{row.items.len()}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="icon-button"
                                            title="Edit"
                                            on:click=move |_| vm.start_edit(edit.clone())
                                        >
                                            {icon("pencil")}
                                        </button>
                                        <button
                                            class="icon-button icon-button--danger"
                                            title="Delete"
                                            on:click=move |_| vm.request_delete(doomed.clone())
                                        >
                                            {icon("trash")}
                                        </button>
                                        <button
                                            class="icon-button"
                                            title="Details"
                                            on:click=move |_| vm.open_details(shown.clone())
                                        >
                                            {icon("eye")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || vm.current_page())
                page_count=Signal::derive(move || vm.page_count())
                on_page=Callback::new(move |page| vm.go_to_page(page))
            />

            <Show when=move || vm.form_open()>
                <OrderForm vm=vm customers=customers products=products />
            </Show>

            <Show when=move || vm.details_record().is_some()>
                <OrderDetails vm=vm products=products />
            </Show>

            <Show when=move || vm.delete_candidate().is_some()>
                <ConfirmDialog
                    message=Signal::derive(move || {
                        let name = vm
                            .delete_candidate()
                            .map(|o| o.customer_name().to_string())
                            .unwrap_or_default();
                        format!("Do you really want to delete the order for {name}?")
                    })
                    on_confirm=Callback::new(move |_| vm.confirm_delete())
                    on_cancel=Callback::new(move |_| vm.cancel_delete())
                />
            </Show>
        </div>
    }
}
