use std::str::FromStr;

use log::Level;

use crate::error::ConfigError;

/// Origin of the backend during local development
pub const LOCAL_API_ORIGIN: &str = "http://127.0.0.1:5000";
/// Name of the `<meta>` tag a page can use to point the client at another backend
pub const API_BASE_META_NAME: &str = "hookupza-api-base";

const BUILD_API_BASE: Option<&str> = option_env!("HOOKUPZA_API_BASE");
const BUILD_LOG_LEVEL: Option<&str> = option_env!("HOOKUPZA_LOG_LEVEL");

/// Where API requests are sent
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ApiBase {
    /// Relative paths, for deployments where the backend serves the pages
    #[default]
    SameOrigin,
    /// Absolute origin without a trailing slash
    Origin(String),
}

impl ApiBase {
    pub fn url(&self, path: &str) -> String {
        match self {
            Self::SameOrigin => path.to_owned(),
            Self::Origin(origin) => format!("{origin}{path}"),
        }
    }
}

impl FromStr for ApiBase {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::SameOrigin);
        }
        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        match host {
            Some(host) if !host.is_empty() && !host.contains('/') => {
                Ok(Self::Origin(trimmed.to_owned()))
            }
            _ => Err(ConfigError::InvalidApiBase(s.to_owned())),
        }
    }
}

/// Settings resolved once at startup and passed to everything that talks to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    pub api_base: ApiBase,
    pub log_level: Level,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            api_base: ApiBase::SameOrigin,
            log_level: Level::Info,
        }
    }
}

impl DeploymentConfig {
    /// Config for running against a backend on the developer's machine
    pub fn local() -> Self {
        Self {
            api_base: ApiBase::Origin(LOCAL_API_ORIGIN.to_owned()),
            log_level: Level::Debug,
        }
    }

    /// Build the config from the page's meta tag (if any) and the build environment. A non-blank
    /// meta tag wins over `HOOKUPZA_API_BASE`.
    pub fn resolve(page_api_base: Option<&str>) -> Result<Self, ConfigError> {
        Self::from_sources(page_api_base, BUILD_API_BASE, BUILD_LOG_LEVEL)
    }

    fn from_sources(
        page_api_base: Option<&str>,
        build_api_base: Option<&str>,
        build_log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let page_api_base = page_api_base.filter(|value| !value.trim().is_empty());
        let api_base = match page_api_base.or(build_api_base) {
            Some(value) => value.parse()?,
            None => ApiBase::SameOrigin,
        };
        let log_level = match build_log_level {
            Some(value) => Level::from_str(value.trim())
                .map_err(|_| ConfigError::InvalidLogLevel(value.to_owned()))?,
            None => Level::Info,
        };
        Ok(Self {
            api_base,
            log_level,
        })
    }
}

/// Content of the api base `<meta>` tag of the current document
pub fn page_api_base() -> Option<String> {
    let selector = format!("meta[name=\"{API_BASE_META_NAME}\"]");
    let element = leptos::document().query_selector(&selector).ok()??;
    element.get_attribute("content")
}

#[cfg(test)]
mod test {
    use log::Level;
    use rstest::rstest;

    use super::{ApiBase, DeploymentConfig, LOCAL_API_ORIGIN};
    use crate::error::ConfigError;

    #[rstest]
    #[case::empty("", ApiBase::SameOrigin)]
    #[case::whitespace("  ", ApiBase::SameOrigin)]
    #[case::local("http://127.0.0.1:5000", ApiBase::Origin("http://127.0.0.1:5000".to_owned()))]
    #[case::trailing_slash("https://api.hookupza.co.za/", ApiBase::Origin("https://api.hookupza.co.za".to_owned()))]
    fn api_base_should_parse(#[case] raw: &str, #[case] expected: ApiBase) {
        assert_eq!(raw.parse::<ApiBase>(), Ok(expected));
    }

    #[rstest]
    #[case::no_scheme("127.0.0.1:5000")]
    #[case::relative("/api")]
    #[case::with_path("http://localhost:5000/api")]
    #[case::scheme_only("https://")]
    fn api_base_should_reject(#[case] raw: &str) {
        assert_eq!(
            raw.parse::<ApiBase>(),
            Err(ConfigError::InvalidApiBase(raw.to_owned()))
        );
    }

    #[rstest]
    #[case(ApiBase::SameOrigin, "/api/login")]
    #[case(ApiBase::Origin("http://127.0.0.1:5000".to_owned()), "http://127.0.0.1:5000/api/login")]
    fn url_should_join_path(#[case] base: ApiBase, #[case] expected: &str) {
        assert_eq!(base.url("/api/login"), expected);
    }

    #[test]
    fn page_meta_should_win_over_build_env() -> Result<(), ConfigError> {
        let config = DeploymentConfig::from_sources(
            Some("https://page.example"),
            Some("https://build.example"),
            Some("warn"),
        )?;

        assert_eq!(config.api_base, ApiBase::Origin("https://page.example".to_owned()));
        assert_eq!(config.log_level, Level::Warn);
        Ok(())
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   ")]
    fn blank_page_meta_should_defer_to_build_env(#[case] page: &str) -> Result<(), ConfigError> {
        let config = DeploymentConfig::from_sources(Some(page), Some(LOCAL_API_ORIGIN), None)?;

        assert_eq!(config.api_base, ApiBase::Origin(LOCAL_API_ORIGIN.to_owned()));
        Ok(())
    }

    #[test]
    fn blank_page_meta_without_build_env_should_be_same_origin() -> Result<(), ConfigError> {
        let config = DeploymentConfig::from_sources(Some(""), None, None)?;

        assert_eq!(config.api_base, ApiBase::SameOrigin);
        Ok(())
    }

    #[test]
    fn local_config_should_target_dev_backend() {
        let config = DeploymentConfig::local();

        assert_eq!(config.api_base.url("/api/check_auth"), "http://127.0.0.1:5000/api/check_auth");
        assert_eq!(config.log_level, Level::Debug);
    }

    #[test]
    fn missing_sources_should_default_to_same_origin() -> Result<(), ConfigError> {
        let config = DeploymentConfig::from_sources(None, None, None)?;

        assert_eq!(config, DeploymentConfig::default());
        Ok(())
    }

    #[test]
    fn bad_log_level_should_fail() {
        let result = DeploymentConfig::from_sources(None, None, Some("loud"));

        assert_eq!(result, Err(ConfigError::InvalidLogLevel("loud".to_owned())));
    }
}
