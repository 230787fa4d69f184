use std::time::Duration;

use hookupza_common::SessionRecord;

use crate::error::AuthResult;

/// How long a status message stays on screen
pub const AUTO_DISMISS: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub const fn alert_class(&self) -> &'static str {
        match self {
            Self::Success => "alert alert-success mt-2",
            Self::Error => "alert alert-danger mt-2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl StatusMessage {
    pub fn success<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    pub fn for_login(result: &AuthResult<SessionRecord>) -> Self {
        match result {
            Ok(user) => Self::success(format!("Welcome back, {}!", user.username)),
            Err(error) => Self::error(error.user_message("Login failed")),
        }
    }

    pub fn for_signup(result: &AuthResult<SessionRecord>) -> Self {
        match result {
            Ok(user) => Self::success(format!("Welcome, {}! Account created.", user.username)),
            Err(error) => Self::error(error.user_message("Signup failed")),
        }
    }

    pub fn logged_out() -> Self {
        Self::success("Logged out successfully")
    }
}

/// The single status area. Each shown message gets a ticket so the timer of a replaced message
/// cannot dismiss its successor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSlot {
    current: Option<StatusMessage>,
    ticket: u64,
}

impl MessageSlot {
    pub fn show(&mut self, message: StatusMessage) -> u64 {
        self.ticket = self.ticket.wrapping_add(1);
        self.current = Some(message);
        self.ticket
    }

    pub fn dismiss(&mut self, ticket: u64) {
        if ticket == self.ticket {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }
}
