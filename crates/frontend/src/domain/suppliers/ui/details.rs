use contracts::domain::suppliers::Supplier;
use leptos::prelude::*;

use crate::shared::components::modal::Modal;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list::{FormMode, ListVm};

/// Create/edit form dialog, bound to the record held by the controller.
#[component]
pub fn SupplierForm(vm: ListVm<Supplier>) -> impl IntoView {
    let record = move || vm.form_record().unwrap_or_default();
    let title = Signal::derive(move || {
        match vm.form_mode() {
            Some(FormMode::Edit) => "Edit supplier",
            _ => "New supplier",
        }
        .to_string()
    });

    view! {
        <Modal title=title on_close=Callback::new(move |_| vm.close_dialog())>
            <div class="form-group">
                <label for="supplier-name">"Name"</label>
                <input
                    type="text"
                    id="supplier-name"
                    prop:value=move || record().name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_record(|r| r.name = value);
                    }
                />
                {move || vm.form_error("name").map(|e| view! { <span class="field-error">{e}</span> })}
            </div>

            <div class="form-group">
                <label for="supplier-contact">"Contact"</label>
                <input
                    type="text"
                    id="supplier-contact"
                    prop:value=move || record().contact
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_record(|r| r.contact = value);
                    }
                />
                {move || vm.form_error("contact").map(|e| view! { <span class="field-error">{e}</span> })}
            </div>

            <div class="form-group">
                <label for="supplier-advisor">"Advisor"</label>
                <input
                    type="text"
                    id="supplier-advisor"
                    prop:value=move || record().advisor
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_record(|r| r.advisor = value);
                    }
                />
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
                        _ => "Create supplier",
                    }}
                </button>
            </div>
        </Modal>
    }
}

/// Read-only details dialog.
#[component]
pub fn SupplierDetails(vm: ListVm<Supplier>) -> impl IntoView {
    let record = move || vm.details_record().unwrap_or_default();

    view! {
        <Modal
            title=Signal::derive(|| "Supplier details".to_string())
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
                        <td class="details-table__label">"Advisor:"</td>
                        <td>{move || {
                            let advisor = record().advisor;
                            if advisor.is_empty() { "Not assigned".to_string() } else { advisor }
                        }}</td>
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
