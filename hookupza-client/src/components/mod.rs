mod credentials;
mod modal;
mod nav;
mod signup;
mod toast;

pub use credentials::{LoginForm, PasswordField, PasswordVisibility};
pub use modal::{Modal, ModalKind};
pub use nav::NavBar;
pub use signup::SignupForm;
pub use toast::{show_message, StatusArea};

fn display_style(visibility: crate::affordance::Visibility) -> String {
    format!("display: {};", visibility.css_display())
}
