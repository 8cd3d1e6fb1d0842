//! Client configuration, read from `MEALPLAN_*` environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

const PREFIX: &str = "MEALPLAN_";

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Local development: requests and responses are logged.
    Development,
    /// Deployed build.
    #[default]
    Production,
}

impl Environment {
    /// Returns true in development.
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            _ => Err(DomainError::UnknownEnvironment(s.to_string())),
        }
    }
}

/// Optional features, all disabled unless switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools, missing_docs)]
pub struct FeatureFlags {
    pub contact: bool,
    pub diet_choice: bool,
    /// Send users who never picked a diet to the diet choice after login.
    pub diet_choice_at_login: bool,
    pub diet_diagnosis_results: bool,
    pub diet_force_slim_diagnosis: bool,
    pub discussion: bool,
    pub emails: bool,
    pub facebook: bool,
    pub flymenu: bool,
    pub google_analytics: bool,
    pub legal: bool,
    pub logo: bool,
    pub newsletter: bool,
    pub nutrient_packs: bool,
    pub password_change: bool,
    pub public_pages: bool,
    pub public_payment: bool,
    pub sentry: bool,
    pub sponsors: bool,
    pub unsubscribe: bool,
}

type FlagSlot = fn(&mut FeatureFlags) -> &mut bool;

/// `MEALPLAN_ENABLE_<NAME>` suffixes and the flag each one sets.
const FEATURES: &[(&str, FlagSlot)] = &[
    ("CONTACT", |f| &mut f.contact),
    ("DIET_CHOICE", |f| &mut f.diet_choice),
    ("DIET_CHOICE_AT_LOGIN", |f| &mut f.diet_choice_at_login),
    ("DIET_DIAGNOSIS_RESULTS", |f| &mut f.diet_diagnosis_results),
    ("DIET_FORCE_SLIM_DIAGNOSIS", |f| &mut f.diet_force_slim_diagnosis),
    ("DISCUSSION", |f| &mut f.discussion),
    ("EMAILS", |f| &mut f.emails),
    ("FACEBOOK", |f| &mut f.facebook),
    ("FLYMENU", |f| &mut f.flymenu),
    ("GOOGLE_ANALYTICS", |f| &mut f.google_analytics),
    ("LEGAL", |f| &mut f.legal),
    ("LOGO", |f| &mut f.logo),
    ("NEWSLETTER", |f| &mut f.newsletter),
    ("NUTRIENT_PACKS", |f| &mut f.nutrient_packs),
    ("PASSWORD_CHANGE", |f| &mut f.password_change),
    ("PUBLIC_PAGES", |f| &mut f.public_pages),
    ("PUBLIC_PAYMENT", |f| &mut f.public_payment),
    ("SENTRY", |f| &mut f.sentry),
    ("SPONSORS", |f| &mut f.sponsors),
    ("UNSUBSCRIBE", |f| &mut f.unsubscribe),
];

/// Everything the client needs to know about its deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is joined to.
    pub api_host: Url,
    /// Runtime environment.
    pub environment: Environment,
    /// When off, role flags of the user record are ignored.
    pub secure_mode: bool,
    /// Optional features.
    pub features: FeatureFlags,
    /// Where the token pair is persisted; `None` means the platform default.
    pub token_file: Option<PathBuf>,
}

impl ClientConfig {
    /// A production configuration for `api_host` with every feature off.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if `api_host` is not an absolute
    /// http(s) URL.
    pub fn new(api_host: &str) -> DomainResult<Self> {
        Ok(Self {
            api_host: parse_api_host(api_host)?,
            environment: Environment::default(),
            secure_mode: true,
            features: FeatureFlags::default(),
            token_file: None,
        })
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_lookup`].
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns an error if `MEALPLAN_API_HOST` is missing or not a URL, if
    /// `MEALPLAN_ENV` is not a known environment, or if a boolean variable
    /// is neither `true` nor `false`.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| {
            let name = format!("{PREFIX}{suffix}");
            let value = lookup(&name).filter(|v| !v.trim().is_empty());
            (name, value)
        };

        let (name, host) = var("API_HOST");
        let mut config = Self::new(&host.ok_or(DomainError::MissingConfig(name))?)?;

        if let (_, Some(env)) = var("ENV") {
            config.environment = env.parse()?;
        }
        if let (name, Some(value)) = var("SECURE_MODE") {
            config.secure_mode = parse_bool(&name, &value)?;
        }
        for (suffix, slot) in FEATURES {
            if let (name, Some(value)) = var(&format!("ENABLE_{suffix}")) {
                *slot(&mut config.features) = parse_bool(&name, &value)?;
            }
        }
        if let (_, Some(path)) = var("TOKEN_FILE") {
            config.token_file = Some(PathBuf::from(path));
        }

        Ok(config)
    }
}

fn parse_api_host(raw: &str) -> DomainResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| DomainError::InvalidUrl(format!("{e}: {raw}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(DomainError::InvalidUrl(format!(
            "unsupported scheme {other}: {raw}"
        ))),
    }
}

fn parse_bool(name: &str, value: &str) -> DomainResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(DomainError::InvalidConfig {
            name: name.to_string(),
            expected: "true or false",
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            ClientConfig::from_lookup(lookup(&[("MEALPLAN_API_HOST", "https://api.example.com")]))
                .unwrap();
        assert_eq!(config.api_host.as_str(), "https://api.example.com/");
        assert_eq!(config.environment, Environment::Production);
        assert!(config.secure_mode);
        assert_eq!(config.features, FeatureFlags::default());
        assert_eq!(config.token_file, None);
    }

    #[test]
    fn test_all_variables() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("MEALPLAN_API_HOST", "http://localhost:8000/api/"),
            ("MEALPLAN_ENV", "Development"),
            ("MEALPLAN_SECURE_MODE", "FALSE"),
            ("MEALPLAN_ENABLE_DIET_CHOICE_AT_LOGIN", "true"),
            ("MEALPLAN_ENABLE_UNSUBSCRIBE", "True"),
            ("MEALPLAN_ENABLE_FACEBOOK", "false"),
            ("MEALPLAN_TOKEN_FILE", "/tmp/tokens.json"),
        ]))
        .unwrap();

        assert!(config.environment.is_development());
        assert!(!config.secure_mode);
        assert!(config.features.diet_choice_at_login);
        assert!(config.features.unsubscribe);
        assert!(!config.features.facebook);
        assert!(!config.features.diet_choice);
        assert_eq!(config.token_file, Some(PathBuf::from("/tmp/tokens.json")));
    }

    #[test]
    fn test_missing_host() {
        assert_eq!(
            ClientConfig::from_lookup(lookup(&[])),
            Err(DomainError::MissingConfig("MEALPLAN_API_HOST".to_string()))
        );
    }

    #[test]
    fn test_invalid_host() {
        let result = ClientConfig::from_lookup(lookup(&[("MEALPLAN_API_HOST", "api.example.com")]));
        assert!(matches!(result, Err(DomainError::InvalidUrl(_))));
        let result = ClientConfig::from_lookup(lookup(&[("MEALPLAN_API_HOST", "ftp://example.com")]));
        assert!(matches!(result, Err(DomainError::InvalidUrl(_))));
    }

    #[test]
    fn test_invalid_bool_names_variable() {
        let result = ClientConfig::from_lookup(lookup(&[
            ("MEALPLAN_API_HOST", "https://api.example.com"),
            ("MEALPLAN_ENABLE_SENTRY", "yes"),
        ]));
        assert_eq!(
            result,
            Err(DomainError::InvalidConfig {
                name: "MEALPLAN_ENABLE_SENTRY".to_string(),
                expected: "true or false",
                value: "yes".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_environment() {
        let result = ClientConfig::from_lookup(lookup(&[
            ("MEALPLAN_API_HOST", "https://api.example.com"),
            ("MEALPLAN_ENV", "staging"),
        ]));
        assert_eq!(
            result,
            Err(DomainError::UnknownEnvironment("staging".to_string()))
        );
    }

    #[test]
    fn test_every_feature_has_a_variable() {
        let vars: Vec<(String, &str)> = FEATURES
            .iter()
            .map(|(suffix, _)| (format!("MEALPLAN_ENABLE_{suffix}"), "true"))
            .collect();
        let mut pairs: Vec<(&str, &str)> = vars.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        pairs.push(("MEALPLAN_API_HOST", "https://api.example.com"));

        let config = ClientConfig::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(FEATURES.len(), 20);
        assert!(config.features.contact && config.features.sponsors && config.features.logo);
    }
}
