use std::rc::Rc;

use leptos::*;

use super::show_message;
use crate::{
    app::AuthContext, in_flight::InFlight, message::StatusMessage, validation::LoginInput,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordVisibility {
    #[default]
    Masked,
    Shown,
}

impl PasswordVisibility {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Shown,
            Self::Shown => Self::Masked,
        }
    }

    pub const fn input_type(&self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Shown => "text",
        }
    }

    pub const fn toggle_label(&self) -> &'static str {
        match self {
            Self::Masked => "Show",
            Self::Shown => "Hide",
        }
    }
}

/// Password input with a show/hide toggle
#[component]
pub fn PasswordField<F>(
    cx: Scope,
    id: &'static str,
    label: &'static str,
    on_input: F,
) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    let (visibility, set_visibility) = create_signal(cx, PasswordVisibility::Masked);
    view! { cx,
        <div class="form-group">
            <label for=id>{label}</label>
            <div class="input-group">
                <input
                    class="form-control"
                    type=move || visibility.get().input_type()
                    id=id
                    name=id
                    required
                    on:input=move |ev| on_input(event_target_value(&ev))
                />
                <button
                    class="btn btn-outline-secondary"
                    type="button"
                    on:click=move |_| set_visibility.update(|v| *v = v.toggled())
                >
                    {move || visibility.get().toggle_label()}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn LoginForm(cx: Scope, auth: AuthContext) -> impl IntoView {
    let (username, set_username) = create_signal(cx, String::new());
    let (password, set_password) = create_signal(cx, String::new());
    let in_flight = create_rw_signal(cx, InFlight::default());
    let AuthContext {
        controller,
        messages,
        modal,
        ..
    } = auth;
    let login_action = create_action(cx, move |input: &LoginInput| {
        let input = input.clone();
        let controller = Rc::clone(&controller);
        async move {
            let result = controller.login(&input).await;
            in_flight.update(InFlight::finish);
            if result.is_ok() {
                modal.set(None);
            }
            show_message(messages, StatusMessage::for_login(&result));
        }
    });
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        in_flight.update(|guard| started = guard.try_begin());
        if !started {
            return;
        }
        login_action.dispatch(LoginInput {
            username: username.get(),
            password: password.get(),
        });
    };

    view! { cx,
        <form id="loginForm" class="login-form" on:submit=on_submit>
            <div class="form-group">
                <label for="loginUsername">"Username"</label>
                <input
                    class="form-control"
                    type="text"
                    id="loginUsername"
                    name="username"
                    required
                    on:input=move |ev| set_username.update(|v| *v = event_target_value(&ev))
                />
            </div>
            <PasswordField
                id="loginPassword"
                label="Password"
                on_input=move |value: String| set_password.update(|v| *v = value)
            />
            <button class="btn btn-primary mt-3" type="submit" prop:disabled=move || in_flight.with(InFlight::is_busy)>
                {move || {
                    if in_flight.with(InFlight::is_busy) {
                        view! { cx,
                            <span class="spinner-border spinner-border-sm me-2"></span>
                            "Logging in..."
                        }
                            .into_view(cx)
                    } else {
                        "Login".into_view(cx)
                    }
                }}
            </button>
        </form>
    }
}
