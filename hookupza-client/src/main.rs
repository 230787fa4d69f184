use std::rc::Rc;

use hookupza_client::{
    api::HttpAuthBackend,
    config::{page_api_base, DeploymentConfig},
    session::AuthController,
    storage::LocalAdvisoryStore,
    App, AuthContext,
};
use leptos::*;

pub fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match DeploymentConfig::resolve(page_api_base().as_deref()) {
        Ok(config) => (config, None),
        Err(error) => (DeploymentConfig::default(), Some(error)),
    };
    if let Err(error) = console_log::init_with_level(config.log_level) {
        leptos::error!("Could not start logging. {error}");
    }
    if let Some(error) = config_error {
        log::error!("Invalid deployment config, falling back to same-origin. {error}");
    }
    log::info!("API base: {:?}", config.api_base);

    let controller = Rc::new(AuthController::new(
        HttpAuthBackend::new(config.api_base),
        LocalAdvisoryStore,
    ));
    mount_to_body(move |cx| {
        let auth = AuthContext::new(cx, controller);
        auth.start();
        view! { cx, <App auth=auth/> }
    })
}
