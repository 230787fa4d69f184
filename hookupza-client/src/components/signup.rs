use std::rc::Rc;

use hookupza_common::AccountType;
use leptos::*;

use super::{show_message, PasswordField};
use crate::{
    app::AuthContext, in_flight::InFlight, message::StatusMessage, validation::SignupInput,
};

#[component]
fn AccountTypeOption(
    cx: Scope,
    value: AccountType,
    id: &'static str,
    label: &'static str,
    form: RwSignal<SignupInput>,
) -> impl IntoView {
    let selected = move || form.with(|f| f.account_type == value);
    view! { cx,
        <div class="form-check form-check-inline">
            <input
                class="form-check-input"
                type="radio"
                name="accountType"
                id=id
                value=value.as_str()
                prop:checked=selected
                on:change=move |_| form.update(|f| f.account_type = value)
            />
            <label class="form-check-label" for=id>{label}</label>
        </div>
    }
}

#[component]
fn TextField<F>(
    cx: Scope,
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] required: bool,
    on_input: F,
) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    view! { cx,
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                class="form-control"
                type=input_type.unwrap_or("text")
                id=id
                name=id
                prop:required=required
                on:input=move |ev| on_input(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn SignupForm(cx: Scope, auth: AuthContext) -> impl IntoView {
    let form = create_rw_signal(cx, SignupInput::default());
    let in_flight = create_rw_signal(cx, InFlight::default());
    let AuthContext {
        controller,
        messages,
        modal,
        ..
    } = auth;
    let signup_action = create_action(cx, move |input: &SignupInput| {
        let input = input.clone();
        let controller = Rc::clone(&controller);
        async move {
            let result = controller.signup(&input).await;
            in_flight.update(InFlight::finish);
            if result.is_ok() {
                modal.set(None);
            }
            show_message(messages, StatusMessage::for_signup(&result));
        }
    });
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        in_flight.update(|guard| started = guard.try_begin());
        if !started {
            return;
        }
        signup_action.dispatch(form.get());
    };
    let vendor_class = move || {
        if form.with(|f| f.account_type == AccountType::Vendor) {
            "vendor-fields"
        } else {
            "vendor-fields d-none"
        }
    };

    view! { cx,
        <form id="signupForm" on:submit=on_submit>
            <TextField id="signupUsername" label="Username" required=true
                on_input=move |value: String| form.update(|f| f.username = value)/>
            <PasswordField id="signupPassword" label="Password (min 8 characters)"
                on_input=move |value: String| form.update(|f| f.password = value)/>
            <TextField id="signupAge" label="Age" required=true
                on_input=move |value: String| form.update(|f| f.age = value)/>
            <TextField id="signupLocation" label="Location"
                on_input=move |value: String| form.update(|f| f.location = value)/>
            <TextField id="signupEmail" label="Email" input_type="email"
                on_input=move |value: String| form.update(|f| f.email = value)/>
            <div class="my-2">
                <AccountTypeOption value=AccountType::Free id="freeAccount" label="Free" form=form/>
                <AccountTypeOption value=AccountType::Vendor id="vendorAccount" label="Vendor" form=form/>
            </div>
            <div id="vendorFields" class=vendor_class>
                <TextField id="businessName" label="Business name"
                    on_input=move |value: String| form.update(|f| f.business_name = value)/>
                <TextField id="whatsapp" label="WhatsApp number" input_type="tel"
                    on_input=move |value: String| form.update(|f| f.whatsapp = value)/>
                <TextField id="serviceDescription" label="Service description"
                    on_input=move |value: String| form.update(|f| f.service_description = value)/>
            </div>
            <button class="btn btn-primary mt-3" type="submit" prop:disabled=move || in_flight.with(InFlight::is_busy)>
                {move || {
                    if in_flight.with(InFlight::is_busy) {
                        view! { cx,
                            <span class="spinner-border spinner-border-sm me-2"></span>
                            "Creating account..."
                        }
                            .into_view(cx)
                    } else {
                        "Create Account".into_view(cx)
                    }
                }}
            </button>
        </form>
    }
}
