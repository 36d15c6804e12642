use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use tracing::debug;

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::{EnvironmentConfig, Profile};

/// Environment file consulted relative to the working directory.
const ENVIRONMENT_FILE: &str = ".barista/environment.yaml";
/// Optional local overrides, useful for one-off development tweaks.
const LOCAL_FILE: &str = ".barista/local.yaml";
/// Prefix for environment variable overrides, nested fields split on `__`.
const ENV_PREFIX: &str = "BARISTA_";

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the environment configuration for a profile.
    ///
    /// Precedence (lowest to highest):
    /// 1. Baked profile literals (Serialized)
    /// 2. .barista/environment.yaml (optional operator overrides)
    /// 3. .barista/local.yaml (optional local overrides)
    /// 4. Environment variables (`BARISTA_*` prefix, highest priority)
    ///
    /// The baked literals are a complete, valid record on their own; the
    /// override layers are additive. Every load re-validates the merged
    /// record so a malformed override fails here, never at use sites.
    pub fn load(profile: Profile) -> Result<EnvironmentConfig> {
        debug!(%profile, "loading environment configuration");
        let config: EnvironmentConfig = Figment::new()
            .merge(Serialized::defaults(EnvironmentConfig::for_profile(
                profile,
            )))
            .merge(Yaml::file(ENVIRONMENT_FILE))
            .merge(Yaml::file(LOCAL_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract environment configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file over the profile's literals.
    pub fn load_from_file(
        profile: Profile,
        path: impl AsRef<std::path::Path>,
    ) -> Result<EnvironmentConfig> {
        let config: EnvironmentConfig = Figment::new()
            .merge(Serialized::defaults(EnvironmentConfig::for_profile(
                profile,
            )))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load environment from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate a configuration record after loading.
    ///
    /// Enforces the record invariants: the API base is an absolute http(s)
    /// URL with a host, and every identity-provider field is populated with
    /// a value of the expected shape.
    pub fn validate(config: &EnvironmentConfig) -> ConfigResult<()> {
        // Validate the API server base; host first, since hostless URLs
        // (e.g. data:) also carry a scheme this check would mask.
        if config.api_server_url.host_str().is_none() {
            return Err(ConfigError::MissingApiHost);
        }

        let scheme = config.api_server_url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::UnsupportedApiScheme(scheme.to_string()));
        }

        // Validate the identity-provider record; it is never partially populated
        let auth0 = &config.auth0;
        if auth0.url.is_empty() {
            return Err(ConfigError::EmptyTenant);
        }

        // The tenant is a bare DNS label, not a domain or URL
        if auth0.url.contains(['.', '/', ':', '@']) {
            return Err(ConfigError::InvalidTenant(auth0.url.clone()));
        }

        if auth0.audience.is_empty() {
            return Err(ConfigError::EmptyAudience);
        }

        if auth0.client_id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }

        match url::Url::parse(&auth0.callback_url) {
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
            _ => {
                return Err(ConfigError::InvalidCallbackUrl(auth0.callback_url.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn test_baked_profiles_are_valid() {
        for profile in [Profile::Development, Profile::Production] {
            let config = EnvironmentConfig::for_profile(profile);
            ConfigLoader::validate(&config).expect("baked profile should be valid");
        }
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
production: true
api_server_url: https://api.example.com:8443
auth0:
  url: example-tenant
  audience: ExampleAPI
  client_id: abc123
  callback_url: https://shop.example.com
";

        let config: EnvironmentConfig = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert!(config.production);
        assert_eq!(config.api_server_url.as_str(), "https://api.example.com:8443/");
        assert_eq!(config.auth0.url, "example-tenant");
        assert_eq!(config.auth0.audience, "ExampleAPI");
        assert_eq!(config.auth0.client_id, "abc123");
        assert_eq!(config.auth0.callback_url, "https://shop.example.com");

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_yaml_malformed_url_rejected_at_parse() {
        let yaml = "api_server_url: not a url\n";
        assert!(serde_yaml::from_str::<EnvironmentConfig>(yaml).is_err());
    }

    #[test]
    fn test_validate_unsupported_scheme() {
        let config = EnvironmentConfig {
            api_server_url: Url::parse("ftp://127.0.0.1:5000").unwrap(),
            ..EnvironmentConfig::default()
        };

        let result = ConfigLoader::validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::UnsupportedApiScheme(scheme) if scheme == "ftp"
        ));
    }

    #[test]
    fn test_validate_hostless_api_url() {
        let config = EnvironmentConfig {
            api_server_url: Url::parse("data:text/plain,menu").unwrap(),
            ..EnvironmentConfig::default()
        };

        let result = ConfigLoader::validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::MissingApiHost));
    }

    #[test]
    fn test_validate_empty_tenant() {
        let mut config = EnvironmentConfig::default();
        config.auth0.url = String::new();

        let result = ConfigLoader::validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::EmptyTenant));
    }

    #[test]
    fn test_validate_tenant_must_be_bare_prefix() {
        let mut config = EnvironmentConfig::default();
        config.auth0.url = "udacity-tbyers.auth0.com".to_string();

        let result = ConfigLoader::validate(&config);
        match result.unwrap_err() {
            ConfigError::InvalidTenant(tenant) => {
                assert_eq!(tenant, "udacity-tbyers.auth0.com");
            }
            other => panic!("Expected InvalidTenant, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_tenant_with_path_separator() {
        let mut config = EnvironmentConfig::default();
        config.auth0.url = "udacity/tbyers".to_string();

        let result = ConfigLoader::validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidTenant(tenant) if tenant == "udacity/tbyers"
        ));
    }

    #[test]
    fn test_validate_empty_audience() {
        let mut config = EnvironmentConfig::default();
        config.auth0.audience = String::new();

        let result = ConfigLoader::validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::EmptyAudience));
    }

    #[test]
    fn test_validate_empty_client_id() {
        let mut config = EnvironmentConfig::default();
        config.auth0.client_id = String::new();

        let result = ConfigLoader::validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::EmptyClientId));
    }

    #[test]
    fn test_validate_relative_callback_url() {
        let mut config = EnvironmentConfig::default();
        config.auth0.callback_url = "/tabs/user-page".to_string();

        let result = ConfigLoader::validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidCallbackUrl(_)
        ));
    }

    #[test]
    fn test_validate_non_http_callback_url() {
        let mut config = EnvironmentConfig::default();
        config.auth0.callback_url = "capacitor://localhost".to_string();

        let result = ConfigLoader::validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidCallbackUrl(_)
        ));
    }

    #[test]
    fn test_hierarchical_merging() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        // Create base config
        let mut base_file = NamedTempFile::new().unwrap();
        writeln!(
            base_file,
            "production: false\nauth0:\n  audience: BaseAudience\n  client_id: base-client"
        )
        .unwrap();
        base_file.flush().unwrap();

        // Create override config
        let mut override_file = NamedTempFile::new().unwrap();
        writeln!(override_file, "auth0:\n  audience: OverrideAudience").unwrap();
        override_file.flush().unwrap();

        let config: EnvironmentConfig = Figment::new()
            .merge(Serialized::defaults(EnvironmentConfig::default()))
            .merge(Yaml::file(base_file.path()))
            .merge(Yaml::file(override_file.path()))
            .extract()
            .unwrap();

        assert_eq!(
            config.auth0.audience, "OverrideAudience",
            "Override should win for nested fields"
        );
        assert_eq!(
            config.auth0.client_id, "base-client",
            "Base value should persist when not overridden"
        );
        assert_eq!(
            config.api_server_url.as_str(),
            "http://127.0.0.1:5000/",
            "Baked default should persist when no layer overrides it"
        );
    }

    #[test]
    fn test_env_override() {
        temp_env::with_vars(
            [
                ("BARISTA_PRODUCTION", Some("true")),
                ("BARISTA_AUTH0__AUDIENCE", Some("EnvAudience")),
            ],
            || {
                let config: EnvironmentConfig = Figment::new()
                    .merge(Serialized::defaults(EnvironmentConfig::default()))
                    .merge(Env::prefixed(ENV_PREFIX).split("__"))
                    .extract()
                    .unwrap();

                assert!(config.production, "Env var should override baked flag");
                assert_eq!(config.auth0.audience, "EnvAudience");
                assert_eq!(
                    config.auth0.client_id, "oJ55uKfxzH2gnsJ5aqbcfl0w616W2KmX",
                    "Untouched fields keep the baked literal"
                );
            },
        );
    }

    #[test]
    fn test_load_from_file_rejects_invalid_override() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "auth0:\n  client_id: \"\"").unwrap();
        file.flush().unwrap();

        let result = ConfigLoader::load_from_file(Profile::Development, file.path());
        assert!(result.is_err(), "Empty client_id must fail validation");
    }
}
