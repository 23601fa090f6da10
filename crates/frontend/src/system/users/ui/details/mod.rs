use contracts::system::roles::Role;
use contracts::system::users::CreateUserDto;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_utils::use_api;
use crate::system::users::api;

/// Add-user form rendered inside a modal on the user list and the admin
/// dashboard. Validation and server errors stay inside the form.
#[component]
pub fn AddUserForm(on_created: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Sales.as_str().to_string());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let dto = CreateUserDto {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            role: Role::parse(&role.get_untracked()).unwrap_or(Role::Sales),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        saving.set(true);
        let client = api.get_value();
        spawn_local(async move {
            match api::create_user(&client, &dto).await {
                Ok(()) => {
                    name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    on_created.run(());
                }
                Err(e) => {
                    let _ = error.try_set(Some(format!("Failed to create user: {e}")));
                }
            }
            let _ = saving.try_set(false);
        });
    };

    view! {
        <form class="form" on:submit=on_submit>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Name *"</Label>
                <Input value=name placeholder="Full name" disabled=saving />
            </div>
            <div class="form__group">
                <Label>"Email *"</Label>
                <Input value=email input_type=InputType::Email placeholder="name@company.com" disabled=saving />
            </div>
            <div class="form__group">
                <Label>"Password *"</Label>
                <Input value=password input_type=InputType::Password disabled=saving />
            </div>
            <div class="form__group">
                <Label>"Role"</Label>
                <Select value=role>
                    {Role::ALL.into_iter().map(|r| view! {
                        <option value=r.as_str()>{r.label()}</option>
                    }).collect_view()}
                </Select>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=saving
                >
                    "Cancel"
                </Button>
                <button type="submit" class="btn-primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Create User" }}
                </button>
            </div>
        </form>
    }
}
