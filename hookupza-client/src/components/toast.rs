use leptos::*;

use super::display_style;
use crate::{
    affordance::Visibility,
    message::{MessageKind, MessageSlot, StatusMessage, AUTO_DISMISS},
};

/// Show `message` in the status area and hide it again after [AUTO_DISMISS]
pub fn show_message(messages: RwSignal<MessageSlot>, message: StatusMessage) {
    match message.kind {
        MessageKind::Success => log::info!("{}", message.text),
        MessageKind::Error => log::warn!("{}", message.text),
    }
    let mut ticket = 0;
    messages.update(|slot| ticket = slot.show(message));
    set_timeout(move || messages.update(|slot| slot.dismiss(ticket)), AUTO_DISMISS);
}

#[component]
pub fn StatusArea(cx: Scope, messages: RwSignal<MessageSlot>) -> impl IntoView {
    let current = move || messages.with(|slot| slot.current().cloned());
    view! { cx,
        <div
            id="authMessage"
            role="alert"
            class=move || current().map_or("alert", |message| message.kind.alert_class())
            style=move || display_style(Visibility::from_bool(current().is_some()))
        >
            {move || current().map(|message| message.text).unwrap_or_default()}
        </div>
    }
}
