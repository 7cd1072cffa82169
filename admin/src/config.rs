//! Admin client configuration loaded via OrthoConfig.
//!
//! Values come from defaults, configuration files and `SAREE_ADMIN_*`
//! environment variables. Command-line flags override them in
//! [`crate::app`].

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const TOKEN_DIR_NAME: &str = ".saree-admin";

/// Configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Layered configuration could not be merged.
    #[error("failed to load configuration: {message}")]
    Load {
        /// Loader diagnostic.
        message: String,
    },
    /// The base URL is not an absolute http(s) URL.
    #[error("invalid base URL {url:?}: {message}")]
    InvalidBaseUrl {
        /// Rejected value.
        url: String,
        /// Parser diagnostic.
        message: String,
    },
}

/// Settings for the admin client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SAREE_ADMIN")]
pub struct AdminSettings {
    /// Root of the admin REST API.
    pub base_url: Option<String>,
    /// Directory holding the bearer token file.
    pub token_dir: Option<PathBuf>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
    /// Emit logs as JSON lines.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl AdminSettings {
    /// Load settings from files and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_iter([OsString::from("saree-admin")]).map_err(|error| ConfigError::Load {
            message: error.to_string(),
        })
    }

    /// Configured base URL, normalised to end with `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for relative or non-http URLs.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let raw = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        parse_base_url(raw)
    }

    /// Configured token directory, else `$HOME/.saree-admin`, else
    /// `.saree-admin` in the working directory.
    pub fn token_dir(&self) -> PathBuf {
        self.token_dir.clone().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .filter(|home| !home.is_empty())
                .map_or_else(
                    || PathBuf::from(TOKEN_DIR_NAME),
                    |home| PathBuf::from(home).join(TOKEN_DIR_NAME),
                )
        })
    }

    /// Per-request timeout; zero is raised to one second.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS).max(1))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidBaseUrl {
        url: raw.to_owned(),
        message,
    };
    let mut url = Url::parse(raw).map_err(|error| invalid(error.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    //! Unit tests for admin configuration parsing.

    use super::*;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "SAREE_ADMIN_BASE_URL",
        "SAREE_ADMIN_TOKEN_DIR",
        "SAREE_ADMIN_REQUEST_TIMEOUT_SECS",
        "SAREE_ADMIN_LOG_JSON",
        "HOME",
    ];

    fn cleared() -> [(&'static str, Option<String>); 5] {
        VARS.map(|name| (name, None::<String>))
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(cleared());

        let settings = AdminSettings::load().expect("config should load");
        assert_eq!(
            settings.base_url().expect("default url").as_str(),
            DEFAULT_BASE_URL
        );
        assert_eq!(settings.token_dir(), PathBuf::from(TOKEN_DIR_NAME));
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
        assert!(!settings.log_json);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let mut vars = cleared();
        vars[0].1 = Some("https://shop.example.test/api".to_owned());
        vars[1].1 = Some("/tmp/saree-admin-test".to_owned());
        vars[2].1 = Some("5".to_owned());
        vars[3].1 = Some("true".to_owned());
        let _guard = lock_env(vars);

        let settings = AdminSettings::load().expect("config should load");
        assert_eq!(
            settings.base_url().expect("url").as_str(),
            "https://shop.example.test/api/"
        );
        assert_eq!(settings.token_dir(), PathBuf::from("/tmp/saree-admin-test"));
        assert_eq!(settings.request_timeout(), Duration::from_secs(5));
        assert!(settings.log_json);
    }

    #[rstest]
    fn token_dir_defaults_under_home() {
        let mut vars = cleared();
        vars[4].1 = Some("/home/asha".to_owned());
        let _guard = lock_env(vars);

        let settings = AdminSettings::load().expect("config should load");
        assert_eq!(settings.token_dir(), PathBuf::from("/home/asha/.saree-admin"));
    }

    #[rstest]
    #[case::relative("api/")]
    #[case::ftp("ftp://example.test/")]
    fn rejects_unusable_base_urls(#[case] raw: &str) {
        let settings = settings_with(Some(raw), None);
        assert!(matches!(
            settings.base_url(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    fn settings_with(base_url: Option<&str>, request_timeout_secs: Option<u64>) -> AdminSettings {
        AdminSettings {
            base_url: base_url.map(str::to_owned),
            token_dir: None,
            request_timeout_secs,
            log_json: false,
        }
    }

    #[test]
    fn zero_timeout_is_raised() {
        let settings = settings_with(None, Some(0));
        assert_eq!(settings.request_timeout(), Duration::from_secs(1));
    }
}
