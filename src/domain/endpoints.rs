//! URL construction against the environment record.
//!
//! The two external collaborators are addressed from here: request URLs for
//! the backend API server, and the authorization redirect for the identity
//! provider's implicit login flow.

use url::Url;

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::{Auth0Config, EnvironmentConfig};

impl EnvironmentConfig {
    /// Build a request URL for a path under the API server base.
    ///
    /// A leading `/` on `path` is optional; the base's own path is preserved
    /// either way, so `http://127.0.0.1:5000` + `/coffees` yields
    /// `http://127.0.0.1:5000/coffees`.
    pub fn api_url(&self, path: &str) -> ConfigResult<Url> {
        let mut base = self.api_server_url.clone();
        // Url::join replaces the last segment unless the base path ends in '/'.
        if !base.path().ends_with('/') {
            let slashed = format!("{}/", base.path());
            base.set_path(&slashed);
        }
        base.join(path.trim_start_matches('/'))
            .map_err(|source| ConfigError::MalformedRequestPath {
                path: path.to_string(),
                source,
            })
    }
}

impl Auth0Config {
    /// Fully-qualified authorization host for the tenant.
    #[must_use]
    pub fn domain(&self) -> String {
        format!("{}.auth0.com", self.url)
    }

    /// The authorize redirect that starts the implicit login flow.
    ///
    /// Carries `audience`, `response_type=token`, `client_id`, and
    /// `redirect_uri` as query parameters, percent-encoded where the URL
    /// syntax requires.
    pub fn authorize_url(&self) -> ConfigResult<Url> {
        let mut url = Url::parse(&format!("https://{}/authorize", self.domain())).map_err(
            |source| ConfigError::MalformedAuthorizeUrl {
                tenant: self.url.clone(),
                source,
            },
        )?;
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.callback_url)
            .finish();
        Ok(url)
    }
}
