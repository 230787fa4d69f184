use std::rc::Rc;

use leptos::*;

use super::{display_style, show_message, ModalKind};
use crate::{
    affordance::{Affordances, Control, USERNAME_DISPLAY_ID},
    app::AuthContext,
    in_flight::InFlight,
    message::StatusMessage,
    navigation::{self, LOGOUT_REDIRECT_DELAY},
};

#[component]
fn UserMenu(cx: Scope, affordances: Memo<Affordances>, auth: AuthContext) -> impl IntoView {
    let AuthContext {
        controller,
        messages,
        ..
    } = auth;
    let in_flight = create_rw_signal(cx, InFlight::default());
    let logout_action = create_action(cx, move |_: &()| {
        let controller = Rc::clone(&controller);
        async move {
            let redirect = controller.logout(&navigation::current_path()).await;
            in_flight.update(InFlight::finish);
            show_message(messages, StatusMessage::logged_out());
            if let Some(target) = redirect {
                set_timeout(move || navigation::navigate_to(target), LOGOUT_REDIRECT_DELAY);
            }
        }
    });
    let logout_class = move || {
        if in_flight.with(InFlight::is_busy) {
            "dropdown-item disabled"
        } else {
            "dropdown-item"
        }
    };
    let style = move |control: Control| display_style(affordances.with(|a| a.visibility(control)));

    view! { cx,
        <li id=Control::UserMenu.dom_id() class="nav-item dropdown"
            style=move || style(Control::UserMenu)>
            <a class="nav-link dropdown-toggle" href="#" role="button" data-bs-toggle="dropdown"
                aria-expanded="false">
                <span id=USERNAME_DISPLAY_ID>
                    {move || affordances.with(|a| a.username_display.clone().unwrap_or_default())}
                </span>
            </a>
            <ul class="dropdown-menu dropdown-menu-end">
                <li><a class="dropdown-item" href="dashboard.html">"Dashboard"</a></li>
                <li><a class="dropdown-item" href="my-ads.html">"My Ads"</a></li>
                <li>
                    <a id=Control::AdminLink.dom_id() class="dropdown-item" href="admin-dashboard.html"
                        style=move || style(Control::AdminLink)>
                        "Admin Dashboard"
                    </a>
                </li>
                <li>
                    <a
                        id="logoutBtn"
                        href="#"
                        class=logout_class
                        on:click=move |ev: ev::MouseEvent| {
                            ev.prevent_default();
                            let mut started = false;
                            in_flight.update(|guard| started = guard.try_begin());
                            if started {
                                logout_action.dispatch(());
                            }
                        }
                    >
                        "Logout"
                    </a>
                </li>
            </ul>
        </li>
    }
}

#[component]
pub fn NavBar(cx: Scope, auth: AuthContext) -> impl IntoView {
    let session = auth.session;
    let modal = auth.modal;
    let affordances = create_memo(cx, move |_| session.with(Affordances::from_state));
    let style = move |control: Control| display_style(affordances.with(|a| a.visibility(control)));

    view! { cx,
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark" id="mainNavBar">
            <div class="container-fluid">
                <a class="navbar-brand" href="index.html">"HookUpZA"</a>
                <ul class="navbar-nav me-auto">
                    <li class="nav-item">
                        <a class="nav-link" href="index.html">"Home"</a>
                    </li>
                    <li class="nav-item">
                        <a class="nav-link" href="post-ad.html">"Post an Ad"</a>
                    </li>
                </ul>
                <ul class="navbar-nav ms-auto">
                    <li class="nav-item">
                        <button id=Control::LoginButton.dom_id() class="btn btn-outline-light me-2"
                            type="button" style=move || style(Control::LoginButton)
                            on:click=move |_| modal.set(Some(ModalKind::Login))>
                            "Login"
                        </button>
                    </li>
                    <li class="nav-item">
                        <button id=Control::SignupButton.dom_id() class="btn btn-warning"
                            type="button" style=move || style(Control::SignupButton)
                            on:click=move |_| modal.set(Some(ModalKind::Signup))>
                            "Sign Up"
                        </button>
                    </li>
                    <UserMenu affordances=affordances auth=auth/>
                </ul>
            </div>
        </nav>
    }
}
