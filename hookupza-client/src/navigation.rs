use std::time::Duration;

pub const LANDING_PAGE: &str = "index.html";

/// Pages that only make sense with a session. Logging out on one of them leaves for
/// [LANDING_PAGE].
pub const PROTECTED_PAGES: [&str; 6] = [
    "dashboard.html",
    "post-ad.html",
    "my-ads.html",
    "admin-dashboard.html",
    "edit-ad.html",
    "admin-users.html",
];

/// Pages that confirm the admin role with the backend on load
pub const ADMIN_PAGES: [&str; 2] = ["admin-dashboard.html", "admin-users.html"];

/// Delay before leaving a protected page, long enough to read the logout message
pub const LOGOUT_REDIRECT_DELAY: Duration = Duration::from_millis(1000);

fn page_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

pub fn is_protected(path: &str) -> bool {
    PROTECTED_PAGES.contains(&page_name(path))
}

pub fn is_admin_page(path: &str) -> bool {
    ADMIN_PAGES.contains(&page_name(path))
}

/// Where to go after logging out from `path`, if anywhere
pub fn logout_redirect(path: &str) -> Option<&'static str> {
    is_protected(path).then_some(LANDING_PAGE)
}

/// Path of the page currently loaded
pub fn current_path() -> String {
    match leptos::window().location().pathname() {
        Ok(path) => path,
        Err(error) => {
            log::warn!("Could not read current path. {error:?}");
            String::new()
        }
    }
}

/// Full page navigation to `target`, relative to the current page
pub fn navigate_to(target: &str) {
    if let Err(error) = leptos::window().location().set_href(target) {
        log::error!("Could not navigate to {target}. {error:?}");
    }
}
