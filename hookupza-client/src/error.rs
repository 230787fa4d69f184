use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Check your connection.";

/// All failures an auth action can end with. Every variant is shown to the user the same way, as
/// a transient error message.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Network error\n{0}")]
    Transport(#[from] gloo_net::Error),
    #[error("Backend rejected request with status {status}. {message:?}")]
    Rejected { status: u16, message: Option<String> },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AuthError {
    /// Text shown in the status area. `default` is used when the backend rejected the request
    /// without saying why.
    pub fn user_message(&self, default: &str) -> String {
        match self {
            Self::Transport(_) => NETWORK_ERROR_MESSAGE.to_owned(),
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            Self::Rejected { .. } => default.to_owned(),
            Self::Validation(error) => error.to_string(),
        }
    }
}

/// Form input rejected before any request is sent
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    #[error("Please enter username and password")]
    MissingCredentials,
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Business name is required for vendor accounts")]
    MissingBusinessName,
}

/// Deployment configuration that cannot be used
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API base must be an absolute http(s) origin, got `{0}`")]
    InvalidApiBase(String),
    #[error("Unknown log level `{0}`")]
    InvalidLogLevel(String),
}

pub type AuthResult<T> = std::result::Result<T, AuthError>;
