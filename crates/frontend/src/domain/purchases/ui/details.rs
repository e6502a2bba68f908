use contracts::domain::purchases::{Purchase, PurchaseItem};
use contracts::domain::suppliers::Supplier;
use contracts::domain::supplies::Supply;
use leptos::prelude::*;

use crate::shared::components::modal::Modal;
use crate::shared::date_utils::{format_date, parse_date};
use crate::shared::icons::icon;
use crate::shared::list::{FormMode, ListVm};

fn supply_name(supplies: &[Supply], supply_id: i64) -> String {
    supplies
        .iter()
        .find(|s| s.id == Some(supply_id))
        .map(|s| s.name.clone())
        .unwrap_or_else(|| format!("#{supply_id}"))
}

#[component]
pub fn PurchaseForm(
    vm: ListVm<Purchase>,
    suppliers: RwSignal<Vec<Supplier>>,
    supplies: RwSignal<Vec<Supply>>,
) -> impl IntoView {
    let record = move || vm.form_record().unwrap_or_default();
    let title = Signal::derive(move || {
        match vm.form_mode() {
            Some(FormMode::Edit) => "Edit purchase",
            _ => "New purchase",
        }
        .to_string()
    });

    view! {
        <Modal
            title=title
            on_close=Callback::new(move |_| vm.close_dialog())
            surface_style="width: 40rem"
        >
            <div class="form-group">
                <label for="purchase-supplier">"Supplier"</label>
                <select
                    id="purchase-supplier"
                    prop:value=move || {
                        record().supplier_id.map(|id| id.to_string()).unwrap_or_default()
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev).parse::<i64>().ok();
                        vm.update_record(|r| r.supplier_id = value);
                    }
                >
                    <option value="">"Select a supplier"</option>
                    <For
                        each=move || suppliers.get()
                        key=|s| s.id
                        let:supplier
                    >
                        <option value=supplier.id.map(|id| id.to_string()).unwrap_or_default()>
                            {supplier.name.clone()}
                        </option>
                    </For>
                </select>
                {move || vm.form_error("supplier_id").map(|e| view! { <span class="field-error">{e}</span> })}
            </div>

            <div class="form-group">
                <label for="purchase-date">"Purchase date"</label>
                <input
                    type="date"
                    id="purchase-date"
                    prop:value=move || format_date(record().purchase_date)
                    on:input=move |ev| {
                        let value = parse_date(&event_target_value(&ev));
                        vm.update_record(|r| r.purchase_date = value);
                    }
                />
                {move || vm.form_error("purchase_date").map(|e| view! { <span class="field-error">{e}</span> })}
            </div>

            <div class="form-group">
                <label for="purchase-status">"Status"</label>
                <input
                    type="text"
                    id="purchase-status"
                    placeholder="pending"
                    prop:value=move || record().status
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_record(|r| r.status = value);
                    }
                />
                {move || vm.form_error("status").map(|e| view! { <span class="field-error">{e}</span> })}
            </div>

            <div class="form-group">
                <div class="form-group__header">
                    <label>"Supplies"</label>
                    <button
                        class="button button--secondary button--small"
                        on:click=move |_| {
                            vm.update_record(|r| r.items.push(PurchaseItem::default()));
                        }
                    >
                        {icon("plus")}
                        "Add line"
                    </button>
                </div>

                {move || record().items.into_iter().enumerate().map(|(index, item)| {
                    let supply_id = item.supply_id;
                    let quantity = item.quantity;
                    let unit_price = item.unit_price;
                    view! {
                        <div class="order-line">
                            <select
                                prop:value=move || {
                                    if supply_id > 0 { supply_id.to_string() } else { String::new() }
                                }
                                on:change=move |ev| {
                                    let value = event_target_value(&ev).parse::<i64>().unwrap_or(0);
                                    vm.update_record(|r| {
                                        if let Some(line) = r.items.get_mut(index) {
                                            line.supply_id = value;
                                        }
                                    });
                                }
                            >
                                <option value="">"Select a supply"</option>
                                <For
                                    each=move || supplies.get()
                                    key=|s| s.id
                                    let:supply
                                >
                                    <option value=supply.id.map(|id| id.to_string()).unwrap_or_default()>
                                        {supply.name.clone()}
                                    </option>
                                </For>
                            </select>
                            <input
                                type="number"
                                min="1"
                                prop:value=move || quantity.to_string()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev).parse::<i64>().unwrap_or(0);
                                    vm.update_record(|r| {
                                        if let Some(line) = r.items.get_mut(index) {
                                            line.quantity = value;
                                        }
                                    });
                                }
                            />
                            <input
                                type="number"
                                min="0"
                                step="0.01"
                                prop:value=move || unit_price.to_string()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                    vm.update_record(|r| {
                                        if let Some(line) = r.items.get_mut(index) {
                                            line.unit_price = value;
                                        }
                                    });
                                }
                            />
                            <button
                                class="icon-button icon-button--danger"
                                title="Remove line"
                                on:click=move |_| {
                                    vm.update_record(|r| {
                                        if index < r.items.len() {
                                            r.items.remove(index);
                                        }
                                    });
                                }
                            >
                                {icon("trash")}
                            </button>
                        </div>
                    }
                }).collect_view()}
                {move || vm.form_error("items").map(|e| view! { <span class="field-error">{e}</span> })}
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
                        _ => "Create purchase",
                    }}
                </button>
            </div>
        </Modal>
    }
}

#[component]
pub fn PurchaseDetails(vm: ListVm<Purchase>, supplies: RwSignal<Vec<Supply>>) -> impl IntoView {
    let record = move || vm.details_record().unwrap_or_default();

    view! {
        <Modal
            title=Signal::derive(|| "Purchase details".to_string())
            on_close=Callback::new(move |_| vm.close_dialog())
        >
            <table class="details-table">
                <tbody>
                    <tr>
                        <td class="details-table__label">"Supplier:"</td>
                        <td>{move || record().supplier_name().to_string()}</td>
                    </tr>
                    <tr>
                        <td class="details-table__label">"Purchase date:"</td>
                        <td>{move || format_date(record().purchase_date)}</td>
                    </tr>
                    <tr>
                        <td class="details-table__label">"Status:"</td>
                        <td>{move || record().status}</td>
                    </tr>
                    <tr>
                        <td class="details-table__label">"Total:"</td>
                        <td>{move || format!("{:.2}", record().total())}</td>
                    </tr>
                </tbody>
            </table>

            <h3>"Supplies"</h3>
            <table class="details-table">
                <tbody>
                    {move || {
                        let list = supplies.get();
                        record().items.into_iter().map(|item| {
                            view! {
                                <tr>
                                    <td>{supply_name(&list, item.supply_id)}</td>
                                    <td>{format!("x{}", item.quantity)}</td>
                                    <td>{format!("{:.2}", item.unit_price)}</td>
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </Modal>
    }
}
