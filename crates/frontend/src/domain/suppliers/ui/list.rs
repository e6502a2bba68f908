use contracts::domain::suppliers::Supplier;
use leptos::prelude::*;

use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list::ListVm;

use super::details::{SupplierDetails, SupplierForm};

const PAGE_SIZE: usize = 5;

#[component]
pub fn SupplierList() -> impl IntoView {
    let vm: ListVm<Supplier> = ListVm::new(PAGE_SIZE);
    vm.load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Suppliers"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| vm.start_create()>
                        {icon("plus")}
                        "New supplier"
                    </button>
                    <button class="button button--secondary" on:click=move |_| vm.load()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <SearchInput
                on_change=Callback::new(move |term| vm.set_search_term(term))
                placeholder="Search by name"
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Contact"</th>
                            <th class="table__header-cell">"Advisor"</th>
                            <th class="table__header-cell">"Created"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || vm.page_items().into_iter().map(|row| {
                            let edit = row.clone();
                            let doomed = row.clone();
                            let shown = row.clone();
                            let advisor = if row.advisor.is_empty() {
                                "Not assigned".to_string()
                            } else {
                                row.advisor.clone()
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.name.clone()}</td>
                                    <td class="table__cell">{row.contact.clone()}</td>
                                    <td class="table__cell">{advisor}</td>
                                    <td class="table__cell">{format_timestamp(row.created_at)}</td>
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
                <SupplierForm vm=vm />
            </Show>

            <Show when=move || vm.details_record().is_some()>
                <SupplierDetails vm=vm />
            </Show>

            <Show when=move || vm.delete_candidate().is_some()>
                <ConfirmDialog
                    message=Signal::derive(move || {
                        let name = vm
                            .delete_candidate()
                            .map(|s| s.name)
                            .unwrap_or_default();
                        format!("Do you really want to delete supplier {name}?")
                    })
                    on_confirm=Callback::new(move |_| vm.confirm_delete())
                    on_cancel=Callback::new(move |_| vm.cancel_delete())
                />
            </Show>
        </div>
    }
}
