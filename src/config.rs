use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

pub const SANDBOX_URL: &str = "https://api.sandbox.paypal.com/";
pub const LIVE_URL: &str = "https://api.paypal.com/";

/// Environment variable selecting [`Mode`] (`sandbox` or `live`).
pub const ENV_MODE: &str = "PAYPAL_MODE";
/// Environment variable overriding the API base URL.
pub const ENV_ENDPOINT: &str = "PAYPAL_ENDPOINT";

/// Which PayPal environment requests are sent to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Sandbox,
    Live,
}

impl Mode {
    #[must_use]
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_URL,
            Self::Live => LIVE_URL,
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Self::Sandbox),
            "live" => Ok(Self::Live),
            other => Err(format!("unknown PayPal mode '{other}'")),
        }
    }
}

/// Settings shared by every call made through an [`ApiContext`](crate::ApiContext).
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub mode: Mode,
    /// Overrides the base URL implied by `mode`.
    pub endpoint: Option<Url>,
    /// Passed to the HTTP client; no timeout when unset.
    pub timeout: Option<Duration>,
}

impl Config {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reads `PAYPAL_MODE` and `PAYPAL_ENDPOINT`, defaulting to sandbox.
    pub fn from_env() -> Result<Self> {
        let mode = match std::env::var(ENV_MODE) {
            Ok(value) => value.parse().unwrap_or_else(|e: String| {
                warn!("{e}, falling back to sandbox");
                Mode::Sandbox
            }),
            Err(_) => Mode::Sandbox,
        };

        let endpoint = match std::env::var(ENV_ENDPOINT) {
            Ok(value) => Some(Url::parse(&value).map_err(|_| Error::InvalidEndpoint)?),
            Err(_) => None,
        };

        Ok(Self {
            mode,
            endpoint,
            timeout: None,
        })
    }

    /// The base URL every resource path is joined onto. Always ends with `/`.
    pub fn base_url(&self) -> Result<Url> {
        let mut url = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => Url::parse(self.mode.base_url()).map_err(|_| Error::InvalidEndpoint)?,
        };
        if url.cannot_be_a_base() {
            return Err(Error::InvalidEndpoint);
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_selects_base_url() {
        assert_eq!(
            Config::new(Mode::Sandbox).base_url().unwrap().as_str(),
            SANDBOX_URL
        );
        assert_eq!(Config::new(Mode::Live).base_url().unwrap().as_str(), LIVE_URL);
    }

    #[test]
    fn endpoint_override_gets_trailing_slash() {
        let config = Config::default().with_endpoint(Url::parse("http://127.0.0.1:8080/paypal").unwrap());
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "http://127.0.0.1:8080/paypal/"
        );
    }

    #[test]
    fn non_base_endpoint_is_rejected() {
        let config = Config::default().with_endpoint(Url::parse("mailto:merchant@example.com").unwrap());
        assert!(matches!(config.base_url(), Err(Error::InvalidEndpoint)));
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("LIVE".parse::<Mode>().unwrap(), Mode::Live);
        assert_eq!(" sandbox ".parse::<Mode>().unwrap(), Mode::Sandbox);
        assert!("production".parse::<Mode>().is_err());
    }
}
