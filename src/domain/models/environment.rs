use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::errors::ConfigError;

/// Named configuration profile selected per build target.
///
/// Exactly one profile is active per artifact: the `production` cargo feature
/// selects [`Profile::Production`], its absence selects
/// [`Profile::Development`]. Switching environments means producing a
/// different build, not toggling a runtime flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Local development against the Flask API on 127.0.0.1.
    Development,
    /// Deployed storefront build.
    Production,
}

impl Profile {
    /// The profile compiled into this artifact.
    #[must_use]
    pub const fn active() -> Self {
        if cfg!(feature = "production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::UnknownProfile(other.to_string())),
        }
    }
}

/// Environment configuration for the storefront client.
///
/// A single immutable record per build target. All fields are present and
/// validated at load time; consumers read it many times and never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EnvironmentConfig {
    /// Build mode flag; toggles environment-specific behavior in consumers
    /// (e.g. disabling debug logging in production).
    #[serde(default)]
    pub production: bool,

    /// Base URL of the backend API server, including scheme and port.
    #[serde(default = "default_api_server_url")]
    pub api_server_url: Url,

    /// Identity-provider settings; never partially populated.
    #[serde(default)]
    pub auth0: Auth0Config,
}

fn default_api_server_url() -> Url {
    Url::parse("http://127.0.0.1:5000").expect("literal URL parses")
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            production: false,
            api_server_url: default_api_server_url(),
            auth0: Auth0Config::default(),
        }
    }
}

impl EnvironmentConfig {
    /// The baked configuration literals for a profile.
    ///
    /// Development carries the local Flask API and Ionic callback addresses;
    /// production points at the deployed storefront. Both share the same
    /// registered Auth0 application.
    #[must_use]
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Development => Self::default(),
            Profile::Production => Self {
                production: true,
                api_server_url: Url::parse("https://api.byerscoffee.com")
                    .expect("literal URL parses"),
                auth0: Auth0Config {
                    callback_url: "https://app.byerscoffee.com".to_string(),
                    ..Auth0Config::default()
                },
            },
        }
    }
}

/// Identity-provider (Auth0) settings used to drive the redirect login flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Auth0Config {
    /// Tenant domain prefix; `{url}.auth0.com` is the authorization host.
    #[serde(default = "default_auth0_tenant")]
    pub url: String,

    /// Identifier of the protected API resource tokens are scoped to.
    #[serde(default = "default_auth0_audience")]
    pub audience: String,

    /// Public identifier of the registered client application.
    #[serde(default = "default_auth0_client_id")]
    pub client_id: String,

    /// Redirect URL the provider returns control to after authentication.
    /// Kept as the literal string so it round-trips verbatim into the
    /// `redirect_uri` parameter; validated as an absolute URL at load time.
    #[serde(default = "default_auth0_callback_url")]
    pub callback_url: String,
}

fn default_auth0_tenant() -> String {
    "udacity-tbyers".to_string()
}

fn default_auth0_audience() -> String {
    "ByersCoffee".to_string()
}

fn default_auth0_client_id() -> String {
    "oJ55uKfxzH2gnsJ5aqbcfl0w616W2KmX".to_string()
}

fn default_auth0_callback_url() -> String {
    "http://localhost:8100".to_string()
}

impl Default for Auth0Config {
    fn default() -> Self {
        Self {
            url: default_auth0_tenant(),
            audience: default_auth0_audience(),
            client_id: default_auth0_client_id(),
            callback_url: default_auth0_callback_url(),
        }
    }
}
