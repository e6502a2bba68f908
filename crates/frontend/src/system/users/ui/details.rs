use contracts::system::users::{Role, User};
use leptos::prelude::*;

use crate::shared::components::modal::Modal;
use crate::shared::icons::icon;
use crate::shared::list::{FormMode, ListVm};

#[component]
pub fn UserForm(vm: ListVm<User>, roles: RwSignal<Vec<Role>>) -> impl IntoView {
    let record = move || vm.form_record().unwrap_or_default();
    let is_edit = move || matches!(vm.form_mode(), Some(FormMode::Edit));
    let title = Signal::derive(move || {
        if is_edit() { "Edit user" } else { "New user" }.to_string()
    });

    view! {
        <Modal title=title on_close=Callback::new(move |_| vm.close_dialog())>
            <div class="form-group">
                <label for="user-name">"Name"</label>
                <input
                    type="text"
                    id="user-name"
                    prop:value=move || record().name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_record(|r| r.name = value);
                    }
                />
                {move || vm.form_error("name").map(|e| view! { <span class="field-error">{e}</span> })}
            </div>

            <div class="form-group">
                <label for="user-email">"Email"</label>
                <input
                    type="email"
                    id="user-email"
                    prop:value=move || record().email
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_record(|r| r.email = value);
                    }
                />
                {move || vm.form_error("email").map(|e| view! { <span class="field-error">{e}</span> })}
            </div>

            <div class="form-group">
                <label for="user-password">"Password"</label>
                <input
                    type="password"
                    id="user-password"
                    placeholder=move || {
                        if is_edit() { "Leave empty to keep the current password" } else { "" }
                    }
                    prop:value=move || record().password
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_record(|r| r.password = value);
                    }
                />
                {move || vm.form_error("password").map(|e| view! { <span class="field-error">{e}</span> })}
            </div>

            <div class="form-group">
                <label for="user-role">"Role"</label>
                <select
                    id="user-role"
                    prop:value=move || {
                        record().role_id.map(|id| id.to_string()).unwrap_or_default()
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev).parse::<i64>().ok();
                        vm.update_record(|r| r.role_id = value);
                    }
                >
                    <option value="">"Select a role"</option>
                    <For
                        each=move || roles.get()
                        key=|r| r.id
                        let:role
                    >
                        <option value=role.id.map(|id| id.to_string()).unwrap_or_default()>
                            {role.name.clone()}
                        </option>
                    </For>
                </select>
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
                        _ => "Create user",
                    }}
                </button>
            </div>
        </Modal>
    }
}

#[component]
pub fn UserDetails(vm: ListVm<User>) -> impl IntoView {
    let record = move || vm.details_record().unwrap_or_default();

    view! {
        <Modal
            title=Signal::derive(|| "User details".to_string())
            on_close=Callback::new(move |_| vm.close_dialog())
        >
            <table class="details-table">
                <tbody>
                    <tr>
                        <td class="details-table__label">"Name:"</td>
                        <td>{move || record().name}</td>
                    </tr>
                    <tr>
                        <td class="details-table__label">"Email:"</td>
                        <td>{move || record().email}</td>
                    </tr>
                    <tr>
                        <td class="details-table__label">"Role:"</td>
                        <td>{move || record().role_name().to_string()}</td>
                    </tr>
                </tbody>
            </table>
        </Modal>
    }
}
