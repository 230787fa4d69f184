use std::cell::RefCell;

use hookupza_common::{AuthUser, SessionRecord};

use crate::{
    affordance::Affordances,
    api::{AuthBackend, HttpAuthBackend},
    error::{AuthError, AuthResult},
    navigation,
    storage::{AdvisoryStore, LocalAdvisoryStore},
    validation::{LoginInput, SignupInput},
};

/// Last known session of the page. Written only by [AuthController].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    user: Option<SessionRecord>,
    admin: Option<bool>,
}

impl SessionState {
    pub fn logged_in(record: SessionRecord) -> Self {
        Self {
            user: Some(record),
            admin: None,
        }
    }

    pub fn user(&self) -> Option<&SessionRecord> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Result of the last explicit admin role check since the session was loaded
    pub fn admin_override(&self) -> Option<bool> {
        self.admin
    }

    pub fn set_admin(&mut self, is_admin: bool) {
        self.admin = Some(is_admin);
    }
}

type Observer = Box<dyn Fn(&SessionState)>;

/// Owns the page's [SessionState] and performs every auth action against the backend. Observers
/// are notified after each state write so renderers can follow.
pub struct AuthController<B, S> {
    backend: B,
    store: S,
    state: RefCell<SessionState>,
    observers: RefCell<Vec<Observer>>,
}

pub type BrowserAuthController = AuthController<HttpAuthBackend, LocalAdvisoryStore>;

impl<B, S> AuthController<B, S>
where
    B: AuthBackend,
    S: AdvisoryStore,
{
    pub fn new(backend: B, store: S) -> Self {
        Self {
            backend,
            store,
            state: RefCell::new(SessionState::default()),
            observers: RefCell::new(Vec::new()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn affordances(&self) -> Affordances {
        Affordances::from_state(&self.state.borrow())
    }

    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn(&SessionState) + 'static,
    {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    /// Render from the advisory record while the session check is pending
    pub fn restore_advisory(&self) {
        if let Some(record) = self.store.load() {
            log::debug!("Restoring advisory session for {}", record.username);
            self.replace_state(SessionState::logged_in(record));
        }
    }

    /// Ask the backend whether a session is active and mirror the answer into the state, the
    /// advisory record and the observers. Any failure counts as logged out.
    pub async fn sync(&self) -> Affordances {
        let record = match self.backend.check_auth().await {
            Ok(response) => response.into_record(),
            Err(error) => {
                log::debug!("Session check failed, treating as logged out. {error}");
                None
            }
        };
        match record {
            Some(record) => {
                log::info!("Session active for {}", record.username);
                self.establish(record);
            }
            None => self.end_session(),
        }
        self.affordances()
    }

    pub async fn login(&self, input: &LoginInput) -> AuthResult<SessionRecord> {
        let credentials = input.validate()?;
        let user = self.backend.login(&credentials).await.map_err(|error| {
            log::warn!("Login failed for {}. {error}", credentials.username);
            error
        })?;
        Ok(self.complete_auth(user).await)
    }

    pub async fn signup(&self, input: &SignupInput) -> AuthResult<SessionRecord> {
        let request = input.validate()?;
        let user = self.backend.signup(&request).await.map_err(|error| {
            log::warn!("Signup failed for {}. {error}", request.username);
            error
        })?;
        Ok(self.complete_auth(user).await)
    }

    /// End the session on the backend (ignoring failures) and locally. Returns the page to leave
    /// for when `current_path` is protected.
    pub async fn logout(&self, current_path: &str) -> Option<&'static str> {
        if let Err(error) = self.backend.logout().await {
            log::debug!("Ignoring logout failure. {error}");
        }
        self.end_session();
        let redirect = navigation::logout_redirect(current_path);
        self.sync().await;
        redirect
    }

    /// Ask the backend whether the current user is an admin. Failures count as not admin.
    pub async fn check_admin(&self) -> bool {
        let is_admin = match self.backend.check_admin_role().await {
            Ok(response) => response.is_admin,
            Err(AuthError::Rejected { status, .. }) => {
                log::debug!("Admin role check rejected with status {status}");
                false
            }
            Err(error) => {
                log::debug!("Admin role check failed. {error}");
                false
            }
        };
        let mut state = self.state();
        if state.is_logged_in() {
            state.set_admin(is_admin);
            self.replace_state(state);
        }
        is_admin
    }

    async fn complete_auth(&self, user: AuthUser) -> SessionRecord {
        let record = user.to_record();
        self.establish(record.clone());
        self.sync().await;
        record
    }

    fn establish(&self, record: SessionRecord) {
        self.store.save(&record);
        self.replace_state(SessionState::logged_in(record));
    }

    fn end_session(&self) {
        self.store.clear();
        self.replace_state(SessionState::default());
    }

    fn replace_state(&self, state: SessionState) {
        *self.state.borrow_mut() = state;
        let state = self.state.borrow();
        for observer in self.observers.borrow().iter() {
            observer(&state);
        }
    }
}
