use std::rc::Rc;

use leptos::*;

use crate::{
    components::{LoginForm, Modal, ModalKind, NavBar, SignupForm, StatusArea},
    message::MessageSlot,
    navigation,
    session::{BrowserAuthController, SessionState},
};

/// Reactive handles shared by the components. The controller is the only writer of `session`.
#[derive(Clone)]
pub struct AuthContext {
    pub controller: Rc<BrowserAuthController>,
    pub session: RwSignal<SessionState>,
    pub messages: RwSignal<MessageSlot>,
    pub modal: RwSignal<Option<ModalKind>>,
}

impl AuthContext {
    pub fn new(cx: Scope, controller: Rc<BrowserAuthController>) -> Self {
        let session = create_rw_signal(cx, controller.state());
        controller.subscribe(move |state| session.set(state.clone()));
        Self {
            controller,
            session,
            messages: create_rw_signal(cx, MessageSlot::default()),
            modal: create_rw_signal(cx, None),
        }
    }

    /// Render from the advisory record, then confirm with the backend
    pub fn start(&self) {
        self.controller.restore_advisory();
        let controller = Rc::clone(&self.controller);
        spawn_local(async move {
            let affordances = controller.sync().await;
            log::debug!("Initial affordances {affordances:?}");
            let path = navigation::current_path();
            if controller.state().is_logged_in() && navigation::is_admin_page(&path) {
                let is_admin = controller.check_admin().await;
                log::info!("Admin role confirmed on {path}: {is_admin}");
            }
        });
    }
}

#[component]
pub fn App(cx: Scope, auth: AuthContext) -> impl IntoView {
    let modal = auth.modal;
    let messages = auth.messages;
    let login_auth = auth.clone();
    let signup_auth = auth.clone();
    view! { cx,
        <NavBar auth=auth/>
        <Modal kind=ModalKind::Login open=modal>
            <LoginForm auth=login_auth/>
        </Modal>
        <Modal kind=ModalKind::Signup open=modal>
            <SignupForm auth=signup_auth/>
        </Modal>
        <StatusArea messages=messages/>
    }
}
