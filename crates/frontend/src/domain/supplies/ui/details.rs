use contracts::domain::supplies::Supply;
use contracts::domain::supply_categories::SupplyCategory;
use leptos::prelude::*;

use crate::shared::components::modal::Modal;
use crate::shared::icons::icon;
use crate::shared::list::{FormMode, ListVm};

#[component]
pub fn SupplyForm(vm: ListVm<Supply>, categories: RwSignal<Vec<SupplyCategory>>) -> impl IntoView {
    let record = move || vm.form_record().unwrap_or_default();
    let title = Signal::derive(move || {
        match vm.form_mode() {
            Some(FormMode::Edit) => "Edit supply",
            _ => "New supply",
        }
        .to_string()
    });

    view! {
        <Modal title=title on_close=Callback::new(move |_| vm.close_dialog())>
            <div class="form-group">
                <label for="supply-name">"Name"</label>
                <input
                    type="text"
                    id="supply-name"
                    prop:value=move || record().name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_record(|r| r.name = value);
                    }
                />
                {move || vm.form_error("name").map(|e| view! { <span class="field-error">{e}</span> })}
            </div>

            <div class="form-group">
                <label for="supply-unit">"Unit"</label>
                <input
                    type="text"
                    id="supply-unit"
                    placeholder="kg, l, pcs"
                    prop:value=move || record().unit
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_record(|r| r.unit = value);
                    }
                />
                {move || vm.form_error("unit").map(|e| view! { <span class="field-error">{e}</span> })}
            </div>

            <div class="form-group">
                <label for="supply-stock">"Current stock"</label>
                <input
                    type="number"
                    id="supply-stock"
                    step="0.01"
                    prop:value=move || record().current_stock.to_string()
                    on:input=move |ev| {
                        let value = event_target_value(&ev).parse().unwrap_or(0.0);
                        vm.update_record(|r| r.current_stock = value);
                    }
                />
                {move || vm.form_error("current_stock").map(|e| view! { <span class="field-error">{e}</span> })}
            </div>

            <div class="form-group">
                <label for="supply-category">"Category"</label>
                <select
                    id="supply-category"
                    prop:value=move || {
                        record().category_id.map(|id| id.to_string()).unwrap_or_default()
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev).parse::<i64>().ok();
                        vm.update_record(|r| r.category_id = value);
                    }
                >
                    <option value="">"Select a category"</option>
                    <For
                        each=move || categories.get()
                        key=|c| c.id
                        let:category
                    >
                        <option value=category.id.map(|id| id.to_string()).unwrap_or_default()>
                            {category.name.clone()}
                        </option>
                    </For>
                </select>
                {move || vm.form_error("category_id").map(|e| view! { <span class="field-error">{e}</span> })}
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
                        _ => "Create supply",
                    }}
                </button>
            </div>
        </Modal>
    }
}

#[component]
pub fn SupplyDetails(vm: ListVm<Supply>) -> impl IntoView {
    let record = move || vm.details_record().unwrap_or_default();

    view! {
        <Modal
            title=Signal::derive(|| "Supply details".to_string())
            on_close=Callback::new(move |_| vm.close_dialog())
        >
            <table class="details-table">
                <tbody>
                    <tr>
                        <td class="details-table__label">"Name:"</td>
                        <td>{move || record().name}</td>
                    </tr>
                    <tr>
                        <td class="details-table__label">"Current stock:"</td>
                        <td>{move || format!("{:.2} {}", record().current_stock, record().unit)}</td>
                    </tr>
                    <tr>
                        <td class="details-table__label">"Category:"</td>
                        <td>{move || record().category_name().to_string()}</td>
                    </tr>
                </tbody>
            </table>
        </Modal>
    }
}
