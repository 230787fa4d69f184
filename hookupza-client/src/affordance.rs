use crate::session::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub const fn from_bool(visible: bool) -> Self {
        if visible {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    pub const fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }

    /// Value of the CSS `display` property
    pub const fn css_display(&self) -> &'static str {
        match self {
            Self::Visible => "block",
            Self::Hidden => "none",
        }
    }
}

/// Session-dependent controls of the site chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    LoginButton,
    SignupButton,
    UserMenu,
    AdminLink,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Self::LoginButton,
        Self::SignupButton,
        Self::UserMenu,
        Self::AdminLink,
    ];

    /// Element id used by the site's pages
    pub const fn dom_id(&self) -> &'static str {
        match self {
            Self::LoginButton => "loginBtn",
            Self::SignupButton => "signupBtn",
            Self::UserMenu => "userMenu",
            Self::AdminLink => "adminDashboardLink",
        }
    }
}

pub const USERNAME_DISPLAY_ID: &str = "usernameDisplay";

/// Declarative UI state derived from a [SessionState]. Renderers apply it as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordances {
    pub login_button: Visibility,
    pub signup_button: Visibility,
    pub user_menu: Visibility,
    pub admin_link: Visibility,
    pub username_display: Option<String>,
}

impl Affordances {
    pub fn from_state(state: &SessionState) -> Self {
        let Some(user) = state.user() else {
            return Self::logged_out();
        };
        let is_admin = state.admin_override().unwrap_or(user.role.is_admin());
        Self {
            login_button: Visibility::Hidden,
            signup_button: Visibility::Hidden,
            user_menu: Visibility::Visible,
            admin_link: Visibility::from_bool(is_admin),
            username_display: Some(user.username.clone()),
        }
    }

    pub fn logged_out() -> Self {
        Self {
            login_button: Visibility::Visible,
            signup_button: Visibility::Visible,
            user_menu: Visibility::Hidden,
            admin_link: Visibility::Hidden,
            username_display: None,
        }
    }

    pub fn visibility(&self, control: Control) -> Visibility {
        match control {
            Control::LoginButton => self.login_button,
            Control::SignupButton => self.signup_button,
            Control::UserMenu => self.user_menu,
            Control::AdminLink => self.admin_link,
        }
    }
}

#[cfg(test)]
mod test {
    use hookupza_common::{Role, SessionRecord};
    use rstest::rstest;

    use super::{Affordances, Control, Visibility};
    use crate::session::SessionState;

    fn logged_in(role: Role) -> SessionState {
        SessionState::logged_in(SessionRecord {
            username: "alice".to_owned(),
            role,
        })
    }

    #[test]
    fn logged_out_state_should_show_entry_points_only() {
        let affordances = Affordances::from_state(&SessionState::default());

        assert_eq!(affordances, Affordances::logged_out());
        assert!(affordances.visibility(Control::LoginButton).is_visible());
        assert!(affordances.visibility(Control::SignupButton).is_visible());
        assert!(!affordances.visibility(Control::UserMenu).is_visible());
        assert!(!affordances.visibility(Control::AdminLink).is_visible());
    }

    #[rstest]
    #[case::user(Role::User, None, Visibility::Hidden)]
    #[case::admin(Role::Admin, None, Visibility::Visible)]
    #[case::other(Role::Other("moderator".to_owned()), None, Visibility::Hidden)]
    #[case::confirmed_admin(Role::User, Some(true), Visibility::Visible)]
    #[case::revoked_admin(Role::Admin, Some(false), Visibility::Hidden)]
    fn admin_link_should_follow_role_and_check(
        #[case] role: Role,
        #[case] admin_check: Option<bool>,
        #[case] expected: Visibility,
    ) {
        let mut state = logged_in(role);
        if let Some(is_admin) = admin_check {
            state.set_admin(is_admin);
        }

        let affordances = Affordances::from_state(&state);

        assert_eq!(affordances.admin_link, expected);
        assert_eq!(affordances.user_menu, Visibility::Visible);
        assert_eq!(affordances.login_button, Visibility::Hidden);
        assert_eq!(affordances.signup_button, Visibility::Hidden);
        assert_eq!(affordances.username_display.as_deref(), Some("alice"));
    }

    #[test]
    fn every_control_should_have_distinct_id() {
        let mut ids: Vec<&str> = Control::ALL.iter().map(Control::dom_id).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), Control::ALL.len());
    }
}
