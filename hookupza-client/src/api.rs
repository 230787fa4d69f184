use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use hookupza_common::{
    endpoints, AdminRoleResponse, AuthUser, CheckAuthResponse, Credentials, ErrorBody,
    SignupRequest,
};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use crate::{
    config::ApiBase,
    error::{AuthError, AuthResult},
};

/// Calls the HookUpZA auth endpoints. Implementations must send the session cookie with every
/// request.
#[async_trait(?Send)]
pub trait AuthBackend {
    async fn check_auth(&self) -> AuthResult<CheckAuthResponse>;
    async fn login(&self, credentials: &Credentials) -> AuthResult<AuthUser>;
    async fn signup(&self, request: &SignupRequest) -> AuthResult<AuthUser>;
    async fn logout(&self) -> AuthResult<()>;
    async fn check_admin_role(&self) -> AuthResult<AdminRoleResponse>;
}

/// [AuthBackend] over the browser's fetch API
#[derive(Debug, Clone)]
pub struct HttpAuthBackend {
    base: ApiBase,
}

impl HttpAuthBackend {
    pub fn new(base: ApiBase) -> Self {
        Self { base }
    }

    fn get(&self, path: &str) -> Request {
        Request::get(&self.base.url(path)).credentials(RequestCredentials::Include)
    }

    fn post(&self, path: &str) -> Request {
        Request::post(&self.base.url(path)).credentials(RequestCredentials::Include)
    }
}

#[async_trait(?Send)]
impl AuthBackend for HttpAuthBackend {
    async fn check_auth(&self) -> AuthResult<CheckAuthResponse> {
        let response = self.get(endpoints::CHECK_AUTH).send().await?;
        parse_response(response).await
    }

    async fn login(&self, credentials: &Credentials) -> AuthResult<AuthUser> {
        let response = self
            .post(endpoints::LOGIN)
            .json(credentials)?
            .send()
            .await?;
        parse_response(response).await
    }

    async fn signup(&self, request: &SignupRequest) -> AuthResult<AuthUser> {
        let response = self.post(endpoints::SIGNUP).json(request)?.send().await?;
        parse_response(response).await
    }

    async fn logout(&self) -> AuthResult<()> {
        let response = self.post(endpoints::LOGOUT).send().await?;
        if response.ok() {
            return Ok(());
        }
        Err(rejection(response).await)
    }

    async fn check_admin_role(&self) -> AuthResult<AdminRoleResponse> {
        let response = self.get(endpoints::ADMIN_CHECK_ROLE).send().await?;
        parse_response(response).await
    }
}

async fn parse_response<T>(response: Response) -> AuthResult<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        return Ok(response.json::<T>().await?);
    }
    Err(rejection(response).await)
}

async fn rejection(response: Response) -> AuthError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(error) => {
            log::debug!("Rejection body for status {status} is not an error object. {error}");
            None
        }
    };
    AuthError::Rejected { status, message }
}
