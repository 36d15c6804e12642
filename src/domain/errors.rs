//! Domain errors for the environment configuration record.

use thiserror::Error;

/// Configuration errors surfaced at load/validation time.
///
/// The runtime contract assumes a validated record: once a config value has
/// passed validation it cannot fail retrieval, so none of these variants are
/// produced after startup except by the URL builders when handed bad input.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("api_server_url must use http or https, got scheme {0:?}")]
    UnsupportedApiScheme(String),

    #[error("api_server_url must include a host")]
    MissingApiHost,

    #[error("auth0.url (tenant prefix) cannot be empty")]
    EmptyTenant,

    #[error("auth0.url must be a bare tenant prefix, not a domain or URL: {0:?}")]
    InvalidTenant(String),

    #[error("auth0.audience cannot be empty")]
    EmptyAudience,

    #[error("auth0.client_id cannot be empty")]
    EmptyClientId,

    #[error("auth0.callback_url is not a valid absolute http(s) URL: {0:?}")]
    InvalidCallbackUrl(String),

    #[error("unknown profile: {0:?}. Must be one of: development, production")]
    UnknownProfile(String),

    #[error("cannot build request URL for path {path:?}: {source}")]
    MalformedRequestPath {
        path: String,
        source: url::ParseError,
    },

    #[error("cannot build authorize URL for tenant {tenant:?}: {source}")]
    MalformedAuthorizeUrl {
        tenant: String,
        source: url::ParseError,
    },
}

/// Convenience alias for results carrying a [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;
