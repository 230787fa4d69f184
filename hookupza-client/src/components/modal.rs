use leptos::*;

use super::display_style;
use crate::affordance::Visibility;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Login,
    Signup,
}

impl ModalKind {
    pub const fn dom_id(&self) -> &'static str {
        match self {
            Self::Login => "loginModal",
            Self::Signup => "signupModal",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login to HookUpZA",
            Self::Signup => "Create your HookUpZA account",
        }
    }
}

/// Dialog shown while `open` holds `kind`. At most one modal is open at a time; setting `open` to
/// `None` closes them all.
#[component]
pub fn Modal(
    cx: Scope,
    kind: ModalKind,
    open: RwSignal<Option<ModalKind>>,
    children: Children,
) -> impl IntoView {
    let visibility = move || Visibility::from_bool(open.get() == Some(kind));
    view! { cx,
        <div class="modal-backdrop fade show" style=move || display_style(visibility())></div>
        <div id=kind.dom_id() class="modal fade show" tabindex="-1" style=move || display_style(visibility())>
            <div class="modal-dialog modal-dialog-centered">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{kind.title()}</h5>
                        <button type="button" class="btn-close" aria-label="Close"
                            on:click=move |_| open.set(None)></button>
                    </div>
                    <div class="modal-body">
                        {children(cx)}
                    </div>
                </div>
            </div>
        </div>
    }
}
