use contracts::domain::customers::Customer;
use leptos::prelude::*;

use crate::shared::components::modal::Modal;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list::{FormMode, ListVm};

#[component]
pub fn CustomerForm(vm: ListVm<Customer>) -> impl IntoView {
    let record = move || vm.form_record().unwrap_or_default();
    let title = Signal::derive(move || {
        match vm.form_mode() {
            Some(FormMode::Edit) => "Edit customer",
            _ => "New customer",
        }
        .to_string()
    });

    view! {
        <Modal title=title on_close=Callback::new(move |_| vm.close_dialog())>
            <div class="form-group">
                <label for="customer-name">"Name"</label>
                <input
                    type="text"
                    id="customer-name"
                    prop:value=move || record().name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_record(|r| r.name = value);
                    }
                />
                {move || vm.form_error("name").map(|e| view! { <span class="field-error">{e}</span> })}
            </div>

            <div class="form-group">
                <label for="customer-contact">"Contact"</label>
                <input
                    type="text"
                    id="customer-contact"
                    prop:value=move || record().contact
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_record(|r| r.contact = value);
                    }
                />
                {move || vm.form_error("contact").map(|e| view! { <span class="field-error">{e}</span> })}
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
                        _ => "Create customer",
                    }}
                </button>
            </div>
        </Modal>
    }
}

#[component]
pub fn CustomerDetails(vm: ListVm<Customer>) -> impl IntoView {
    let record = move || vm.details_record().unwrap_or_default();

    view! {
        <Modal
            title=Signal::derive(|| "Customer details".to_string())
            on_close=Callback::new(move |_| vm.close_dialog())
        >
            <table class="details-table">
                <tbody>
                    <tr>
                        <td class="details-table__label">"Name:"</td>
                        <td>{move || record().name}</td>
                    </tr>
                    <tr>
                        <td class="details-table__label">"Contact:"</td>
                        <td>{move || record().contact}</td>
                    </tr>
                    <tr>
                        <td class="details-table__label">"Created:"</td>
                        <td>{move || format_timestamp(record().created_at)}</td>
                    </tr>
                    <tr>
                        <td class="details-table__label">"Updated:"</td>
                        <td>{move || format_timestamp(record().updated_at)}</td>
                    </tr>
                </tbody>
            </table>
        </Modal>
    }
}
