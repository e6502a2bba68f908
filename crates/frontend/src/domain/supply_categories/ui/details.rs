use contracts::domain::supply_categories::SupplyCategory;
use leptos::prelude::*;

use crate::shared::components::modal::Modal;
use crate::shared::icons::icon;
use crate::shared::list::{FormMode, ListVm};

#[component]
pub fn SupplyCategoryForm(vm: ListVm<SupplyCategory>) -> impl IntoView {
    let record = move || vm.form_record().unwrap_or_default();
    let title = Signal::derive(move || {
        match vm.form_mode() {
            Some(FormMode::Edit) => "Edit category",
            _ => "New category",
        }
        .to_string()
    });

    view! {
        <Modal title=title on_close=Callback::new(move |_| vm.close_dialog())>
            <div class="form-group">
                <label for="category-name">"Name"</label>
                <input
                    type="text"
                    id="category-name"
                    prop:value=move || record().name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_record(|r| r.name = value);
                    }
                />
                {move || vm.form_error("name").map(|e| view! { <span class="field-error">{e}</span> })}
            </div>

            <div class="form-group">
                <label for="category-description">"Description"</label>
                <textarea
                    id="category-description"
                    prop:value=move || record().description
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_record(|r| r.description = value);
                    }
                />
                {move || vm.form_error("description").map(|e| view! { <span class="field-error">{e}</span> })}
            </div>

            <div class="modal-actions">
                <button class="button button--secondary" on:click=move |_| vm.close_dialog()>
                    "Cancel"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || vm.is_busy()
                    on:click=move |_| vm.save()
                >
                    {icon("save")}
                    {move || match (vm.is_busy(), vm.form_mode()) {
                        (true, _) => "Saving...",
                        (false, Some(FormMode::Edit)) => "Save changes",
                        _ => "Create category",
                    }}
                </button>
            </div>
        </Modal>
    }
}

#[component]
pub fn SupplyCategoryDetails(vm: ListVm<SupplyCategory>) -> impl IntoView {
    let record = move || vm.details_record().unwrap_or_default();

    view! {
        <Modal
            title=Signal::derive(|| "Category details".to_string())
            on_close=Callback::new(move |_| vm.close_dialog())
        >
            <table class="details-table">
                <tbody>
                    <tr>
                        <td class="details-table__label">"Name:"</td>
                        <td>{move || record().name}</td>
                    </tr>
                    <tr>
                        <td class="details-table__label">"Description:"</td>
                        <td>{move || record().description}</td>
                    </tr>
                </tbody>
            </table>
        </Modal>
    }
}
