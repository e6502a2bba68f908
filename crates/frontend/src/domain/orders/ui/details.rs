use contracts::domain::customers::Customer;
use contracts::domain::orders::{Order, OrderItem, OrderStatus};
use contracts::domain::products::Product;
use leptos::prelude::*;

use crate::shared::components::modal::Modal;
use crate::shared::date_utils::{format_date, parse_date};
use crate::shared::icons::icon;
use crate::shared::list::{FormMode, ListVm};

fn product_name(products: &[Product], product_id: i64) -> String {
    products
        .iter()
        .find(|p| p.id == Some(product_id))
        .map(|p| p.name.clone())
        .unwrap_or_else(|| format!("#{product_id}"))
}

#[component]
pub fn OrderForm(
    vm: ListVm<Order>,
    customers: RwSignal<Vec<Customer>>,
    products: RwSignal<Vec<Product>>,
) -> impl IntoView {
    let record = move || vm.form_record().unwrap_or_default();
    let title = Signal::derive(move || {
        match vm.form_mode() {
            Some(FormMode::Edit) => "Edit order",
            _ => "New order",
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
                <label for="order-customer">"Customer"</label>
                <select
                    id="order-customer"
                    prop:value=move || {
                        record().customer_id.map(|id| id.to_string()).unwrap_or_default()
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev).parse::<i64>().ok();
                        vm.update_record(|r| r.customer_id = value);
                    }
                >
                    <option value="">"Select a customer"</option>
                    <For
                        each=move || customers.get()
                        key=|c| c.id
                        let:customer
                    >
                        <option value=customer.id.map(|id| id.to_string()).unwrap_or_default()>
                            {customer.name.clone()}
                        </option>
                    </For>
                </select>
                {move || vm.form_error("customer_id").map(|e| view! { <span class="field-error">{e}</span> })}
            </div>

            <div class="form-group">
                <label for="order-date">"Delivery date"</label>
                <input
                    type="date"
                    id="order-date"
                    prop:value=move || format_date(record().delivery_date)
                    on:input=move |ev| {
                        let value = parse_date(&event_target_value(&ev));
                        vm.update_record(|r| r.delivery_date = value);
                    }
                />
                {move || vm.form_error("delivery_date").map(|e| view! { <span class="field-error">{e}</span> })}
            </div>

            <div class="form-group">
                <label for="order-status">"Status"</label>
                <select
                    id="order-status"
                    prop:value=move || record().status.as_str()
                    on:change=move |ev| {
                        if let Some(status) = OrderStatus::from_str(&event_target_value(&ev)) {
                            vm.update_record(|r| r.status = status);
                        }
                    }
                >
                    {OrderStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        prop:checked=move || record().paid
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            vm.update_record(|r| r.paid = checked);
                        }
                    />
                    "Paid"
                </label>
            </div>

            <div class="form-group">
                <div class="form-group__header">
                    <label>"Products"</label>
                    <button
                        class="button button--secondary button--small"
                        on:click=move |_| {
                            vm.update_record(|r| r.items.push(OrderItem::default()));
                        }
                    >
                        {icon("plus")}
                        "Add line"
                    </button>
                </div>

                {move || record().items.into_iter().enumerate().map(|(index, item)| {
                    let product_id = item.product_id;
                    let quantity = item.quantity;
                    view! {
                        <div class="order-line">
                            <select
                                prop:value=move || {
                                    if product_id > 0 { product_id.to_string() } else { String::new() }
                                }
                                on:change=move |ev| {
                                    let value = event_target_value(&ev).parse::<i64>().unwrap_or(0);
                                    vm.update_record(|r| {
                                        if let Some(line) = r.items.get_mut(index) {
                                            line.product_id = value;
                                        }
                                    });
                                }
                            >
                                <option value="">"Select a product"</option>
                                <For
                                    each=move || products.get()
                                    key=|p| p.id
                                    let:product
                                >
                                    <option value=product.id.map(|id| id.to_string()).unwrap_or_default()>
                                        {product.name.clone()}
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
                        _ => "Create order",
                    }}
                </button>
            </div>
        </Modal>
    }
}

#[component]
pub fn OrderDetails(vm: ListVm<Order>, products: RwSignal<Vec<Product>>) -> impl IntoView {
    let record = move || vm.details_record().unwrap_or_default();

    view! {
        <Modal
            title=Signal::derive(|| "Order details".to_string())
            on_close=Callback::new(move |_| vm.close_dialog())
        >
            <table class="details-table">
                <tbody>
                    <tr>
                        <td class="details-table__label">"Customer:"</td>
                        <td>{move || record().customer_name().to_string()}</td>
                    </tr>
                    <tr>
                        <td class="details-table__label">"Delivery date:"</td>
                        <td>{move || format_date(record().delivery_date)}</td>
                    </tr>
                    <tr>
                        <td class="details-table__label">"Status:"</td>
                        <td>{move || record().status.label()}</td>
                    </tr>
                    <tr>
                        <td class="details-table__label">"Paid:"</td>
                        <td>{move || if record().paid { "Yes" } else { "No" }}</td>
                    </tr>
                </tbody>
            </table>

            <h3>"Products"</h3>
            <table class="details-table">
                <tbody>
                    {move || {
                        let list = products.get();
                        record().items.into_iter().map(|item| {
                            view! {
                                <tr>
                                    <td>{product_name(&list, item.product_id)}</td>
                                    <td>{format!("x{}", item.quantity)}</td>
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </Modal>
    }
}
