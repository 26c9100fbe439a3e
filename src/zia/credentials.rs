//! ZIA credential resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{credentials, defaults};
use crate::error::{Result, ZiaError};
use crate::zia::client::ClientSettings;

/// Profile file structure (all keys optional)
#[derive(Deserialize, Debug, Default)]
pub struct Profile {
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub api_key: Option<String>,
    pub retries: Option<u32>,
    pub backoff_seconds: Option<u64>,
    pub page_size: Option<u32>,
}

/// Credential values taken from the command line
#[derive(Debug, Default, Clone)]
pub struct CredentialOverrides {
    pub host: Option<String>,
    pub cloud: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub api_key: Option<String>,
}

/// Map a cloud name to its API host
fn cloud_host(cloud: &str) -> Result<String> {
    if defaults::CLOUDS.contains(&cloud) {
        Ok(format!("zsapi.{}.net", cloud))
    } else {
        Err(ZiaError::Config(format!(
            "Unknown cloud '{}'. Known clouds: {}",
            cloud,
            defaults::CLOUDS.join(", ")
        )))
    }
}

/// Credential resolution with fallback logic
#[derive(Debug)]
pub struct CredentialResolver {
    profile: Profile,
    path: Option<PathBuf>,
}

impl CredentialResolver {
    /// Load the profile file.
    ///
    /// An explicitly named file (CLI argument or ZIACTL_CONFIG) must exist
    /// and parse; the default location is optional and silently skipped when
    /// absent.
    pub fn load(config_arg: Option<&str>) -> Result<Self> {
        let explicit = config_arg.map(PathBuf::from).or_else(|| {
            std::env::var(credentials::CONFIG_ENV_VAR)
                .ok()
                .map(PathBuf::from)
        });

        if let Some(path) = explicit {
            debug!("Loading profile file: {}", path.display());
            let content = fs::read_to_string(&path).map_err(|e| {
                ZiaError::Credentials(format!(
                    "Could not read profile file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            let profile = Self::parse_profile(&content, &path)?;
            return Ok(Self {
                profile,
                path: Some(path),
            });
        }

        let Some(path) = Self::default_profile_path() else {
            return Ok(Self {
                profile: Profile::default(),
                path: None,
            });
        };

        debug!("Looking for profile file at: {}", path.display());
        match fs::read_to_string(&path) {
            Ok(content) => {
                let profile = Self::parse_profile(&content, &path)?;
                Ok(Self {
                    profile,
                    path: Some(path),
                })
            }
            Err(_) => Ok(Self {
                profile: Profile::default(),
                path: Some(path),
            }),
        }
    }

    fn parse_profile(content: &str, path: &std::path::Path) -> Result<Profile> {
        serde_json::from_str(content).map_err(|e| {
            ZiaError::Config(format!(
                "Could not parse profile file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Resolve the full client settings.
    ///
    /// Each credential falls back through: CLI argument, environment
    /// variable, profile file. Host additionally accepts a cloud name and
    /// defaults to the standard cloud; tuning values default from the
    /// profile or built-ins.
    pub fn resolve(&self, overrides: &CredentialOverrides) -> Result<ClientSettings> {
        let host = match (&overrides.host, &overrides.cloud) {
            (Some(host), _) => {
                debug!("Using host from CLI argument");
                host.clone()
            }
            (None, Some(cloud)) => cloud_host(cloud)?,
            (None, None) => std::env::var(credentials::HOST_ENV_VAR)
                .ok()
                .or_else(|| self.profile.host.clone())
                .unwrap_or_else(|| defaults::HOST.to_string()),
        };

        let username = self.resolve_credential(
            "username",
            "username",
            credentials::USERNAME_ENV_VAR,
            overrides.username.as_deref(),
            self.profile.username.as_deref(),
        )?;
        let password = self.resolve_credential(
            "password",
            "password",
            credentials::PASSWORD_ENV_VAR,
            overrides.password.as_deref(),
            self.profile.password.as_deref(),
        )?;
        let api_key = self.resolve_credential(
            "API key",
            "api-key",
            credentials::API_KEY_ENV_VAR,
            overrides.api_key.as_deref(),
            self.profile.api_key.as_deref(),
        )?;

        Ok(ClientSettings {
            host,
            username,
            password,
            api_key,
            retries: self.profile.retries.unwrap_or(defaults::RETRIES),
            backoff: Duration::from_secs(
                self.profile
                    .backoff_seconds
                    .unwrap_or(defaults::BACKOFF_SECONDS),
            ),
            page_size: self.profile.page_size.unwrap_or(defaults::PAGE_SIZE),
        })
    }

    /// Resolve a single credential with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable
    /// 3. Profile file
    fn resolve_credential(
        &self,
        what: &str,
        flag: &str,
        env_var: &str,
        cli_value: Option<&str>,
        profile_value: Option<&str>,
    ) -> Result<String> {
        if let Some(value) = cli_value {
            debug!("Using {} from CLI argument", what);
            return Ok(value.to_string());
        }

        if let Ok(value) = std::env::var(env_var) {
            debug!("Using {} from {} environment variable", what, env_var);
            return Ok(value);
        }

        if let Some(value) = profile_value {
            debug!("Using {} from profile file", what);
            return Ok(value.to_string());
        }

        Err(ZiaError::Credentials(
            self.missing_credential_message(what, flag, env_var),
        ))
    }

    /// Generate helpful error message when a credential is not found
    fn missing_credential_message(&self, what: &str, flag: &str, env_var: &str) -> String {
        let profile_path = self
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| format!("~/.config/{}", credentials::FILE_NAME));

        format!(
            "No {} configured. Please provide one using one of:\n\
             \n\
             1. CLI argument:      ziactl --{} <VALUE>\n\
             2. Environment var:   export {}=<VALUE>\n\
             3. Profile file:      {}\n",
            what, flag, env_var, profile_path
        )
    }

    /// Path of the default profile file
    /// - Windows: %APPDATA%\ziactl\config.json
    /// - Linux/macOS: ~/.config/ziactl/config.json
    fn default_profile_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(credentials::FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver_with(profile: Profile) -> CredentialResolver {
        CredentialResolver {
            profile,
            path: None,
        }
    }

    #[test]
    fn test_profile_parsing() {
        let json = r#"{
            "host": "zsapi.zscalertwo.net",
            "username": "admin@example.com",
            "password": "secret",
            "api_key": "0123456789AbCdEf",
            "retries": 6,
            "backoff_seconds": 1,
            "page_size": 250
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.host.as_deref(), Some("zsapi.zscalertwo.net"));
        assert_eq!(profile.retries, Some(6));
        assert_eq!(profile.page_size, Some(250));
    }

    #[test]
    fn test_profile_parsing_empty() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert!(profile.host.is_none());
        assert!(profile.username.is_none());
    }

    #[test]
    fn test_cloud_host_mapping() {
        assert_eq!(cloud_host("zscalertwo").unwrap(), "zsapi.zscalertwo.net");
        assert_eq!(cloud_host("zscloud").unwrap(), "zsapi.zscloud.net");

        let err = cloud_host("nonsuch").unwrap_err();
        match err {
            ZiaError::Config(msg) => {
                assert!(msg.contains("nonsuch"));
                assert!(msg.contains("zscalerbeta"));
            }
            other => panic!("Expected ZiaError::Config, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_cli_takes_precedence() {
        let resolver = resolver_with(Profile {
            username: Some("profile@example.com".to_string()),
            password: Some("profile-pass".to_string()),
            api_key: Some("profile-key-1234".to_string()),
            ..Profile::default()
        });

        let overrides = CredentialOverrides {
            username: Some("cli@example.com".to_string()),
            ..CredentialOverrides::default()
        };

        let settings = resolver.resolve(&overrides).unwrap();
        assert_eq!(settings.username, "cli@example.com");
        assert_eq!(settings.password, "profile-pass");
        assert_eq!(settings.api_key, "profile-key-1234");
        assert_eq!(settings.host, defaults::HOST);
    }

    #[test]
    fn test_resolve_cloud_builds_host() {
        let resolver = resolver_with(Profile::default());
        let overrides = CredentialOverrides {
            cloud: Some("zscalerthree".to_string()),
            username: Some("a".to_string()),
            password: Some("b".to_string()),
            api_key: Some("c".to_string()),
            ..CredentialOverrides::default()
        };

        let settings = resolver.resolve(&overrides).unwrap();
        assert_eq!(settings.host, "zsapi.zscalerthree.net");
    }

    #[test]
    fn test_resolve_host_flag_beats_cloud() {
        let resolver = resolver_with(Profile::default());
        let overrides = CredentialOverrides {
            host: Some("zsapi.internal.example.net".to_string()),
            cloud: Some("zscaler".to_string()),
            username: Some("a".to_string()),
            password: Some("b".to_string()),
            api_key: Some("c".to_string()),
        };

        let settings = resolver.resolve(&overrides).unwrap();
        assert_eq!(settings.host, "zsapi.internal.example.net");
    }

    #[test]
    fn test_resolve_tuning_defaults() {
        let resolver = resolver_with(Profile::default());
        let overrides = CredentialOverrides {
            username: Some("a".to_string()),
            password: Some("b".to_string()),
            api_key: Some("c".to_string()),
            ..CredentialOverrides::default()
        };

        let settings = resolver.resolve(&overrides).unwrap();
        assert_eq!(settings.retries, defaults::RETRIES);
        assert_eq!(settings.backoff, Duration::from_secs(defaults::BACKOFF_SECONDS));
        assert_eq!(settings.page_size, defaults::PAGE_SIZE);
    }

    #[test]
    fn test_resolve_tuning_from_profile() {
        let resolver = resolver_with(Profile {
            retries: Some(9),
            backoff_seconds: Some(1),
            page_size: Some(100),
            ..Profile::default()
        });
        let overrides = CredentialOverrides {
            username: Some("a".to_string()),
            password: Some("b".to_string()),
            api_key: Some("c".to_string()),
            ..CredentialOverrides::default()
        };

        let settings = resolver.resolve(&overrides).unwrap();
        assert_eq!(settings.retries, 9);
        assert_eq!(settings.backoff, Duration::from_secs(1));
        assert_eq!(settings.page_size, 100);
    }

    #[test]
    fn test_missing_credential_message_format() {
        let resolver = resolver_with(Profile::default());
        let msg = resolver.missing_credential_message("API key", "api-key", "ZIA_API_KEY");
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("ziactl --api-key"));
        assert!(msg.contains("export ZIA_API_KEY"));
        assert!(msg.contains("ziactl/config.json"));
    }

    #[test]
    fn test_load_explicit_profile() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            r#"{"username": "file@example.com", "page_size": 42}"#,
        )
        .unwrap();

        let resolver =
            CredentialResolver::load(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(
            resolver.profile.username.as_deref(),
            Some("file@example.com")
        );
        assert_eq!(resolver.profile.page_size, Some(42));
    }

    #[test]
    fn test_load_explicit_profile_missing() {
        let err = CredentialResolver::load(Some("/nonexistent/ziactl.json")).unwrap_err();
        match err {
            ZiaError::Credentials(msg) => assert!(msg.contains("/nonexistent/ziactl.json")),
            other => panic!("Expected ZiaError::Credentials, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_profile() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "{not json").unwrap();

        let err = CredentialResolver::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert!(matches!(err, ZiaError::Config(_)));
    }
}
