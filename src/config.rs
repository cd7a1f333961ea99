use std::path::PathBuf;

use http::Uri;
use thiserror::Error;

use crate::content::{SiteVariant, UnknownVariant};

pub const DEFAULT_BASE_URL: &str = "https://jaysonreales.vercel.app";
const DEFAULT_ASSET_ROOT: &str = "public";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base url `{0}` is not an absolute http(s) url")]
    InvalidBaseUrl(String),
    #[error("unknown site variant `{0}` (expected `mentoring` or `coaching`)")]
    UnknownVariant(String),
}

impl From<UnknownVariant> for ConfigError {
    fn from(value: UnknownVariant) -> Self {
        Self::UnknownVariant(value.0)
    }
}

/// Site metadata and deployment knobs that are not part of the Leptos options.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub base_url: String,
    pub title: String,
    pub description: String,
    pub asset_root: PathBuf,
    pub variant: SiteVariant,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            title: "Jayson Reales | Web Developer".to_string(),
            description: "Jayson Reales is a passionate Web Developer specializing in modern, responsive, and user-friendly websites.".to_string(),
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            variant: SiteVariant::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// The config a server function should act on: the one the router
    /// provided, else whatever the environment describes.
    pub fn provided_or_env(provided: Option<Self>) -> Result<Self, ConfigError> {
        Self::provided_or_lookup(provided, |key| std::env::var(key).ok())
    }

    pub fn provided_or_lookup<F>(provided: Option<Self>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match provided {
            Some(config) => Ok(config),
            None => Self::from_lookup(lookup),
        }
    }

    /// Build from an arbitrary key lookup so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("PORTFOLIO_BASE_URL") {
            config.base_url = validate_base_url(&url)?;
        }
        if let Some(root) = lookup("PORTFOLIO_ASSET_ROOT").or_else(|| lookup("LEPTOS_SITE_ROOT")) {
            config.asset_root = PathBuf::from(root);
        }
        if let Some(variant) = lookup("PORTFOLIO_VARIANT") {
            config.variant = variant.parse()?;
        }

        Ok(config)
    }

    pub fn og_image(&self) -> String {
        format!("{}/jayson_og.png", self.base_url)
    }
}

fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let uri: Uri = trimmed
        .parse()
        .map_err(|_| ConfigError::InvalidBaseUrl(raw.to_string()))?;
    match (uri.scheme_str(), uri.host()) {
        (Some("http" | "https"), Some(_)) => Ok(trimmed.to_string()),
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = SiteConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.og_image(), "https://jaysonreales.vercel.app/jayson_og.png");
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("PORTFOLIO_BASE_URL", "http://localhost:3000/"),
            ("LEPTOS_SITE_ROOT", "target/site"),
            ("PORTFOLIO_VARIANT", "coaching"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.asset_root, PathBuf::from("target/site"));
        assert_eq!(config.variant, SiteVariant::Coaching);
    }

    #[test]
    fn test_asset_root_prefers_portfolio_key() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("PORTFOLIO_ASSET_ROOT", "assets"),
            ("LEPTOS_SITE_ROOT", "target/site"),
        ]))
        .unwrap();
        assert_eq!(config.asset_root, PathBuf::from("assets"));
    }

    #[test]
    fn test_invalid_base_url() {
        for bad in ["not a url", "/relative/path", "ftp://example.com"] {
            let err = SiteConfig::from_lookup(lookup_from(&[("PORTFOLIO_BASE_URL", bad)]))
                .unwrap_err();
            assert_eq!(err, ConfigError::InvalidBaseUrl(bad.to_string()));
        }
    }

    #[test]
    fn test_provided_config_wins() {
        let provided = SiteConfig {
            variant: SiteVariant::Coaching,
            ..SiteConfig::default()
        };
        let config = SiteConfig::provided_or_lookup(
            Some(provided.clone()),
            lookup_from(&[("PORTFOLIO_VARIANT", "mentoring")]),
        )
        .unwrap();
        assert_eq!(config, provided);
    }

    #[test]
    fn test_missing_config_reads_lookup() {
        let config =
            SiteConfig::provided_or_lookup(None, lookup_from(&[("PORTFOLIO_VARIANT", "coaching")]))
                .unwrap();
        assert_eq!(config.variant, SiteVariant::Coaching);

        let err =
            SiteConfig::provided_or_lookup(None, lookup_from(&[("PORTFOLIO_VARIANT", "nope")]))
                .unwrap_err();
        assert_eq!(err, ConfigError::UnknownVariant("nope".to_string()));
    }

    #[test]
    fn test_unknown_variant() {
        let err = SiteConfig::from_lookup(lookup_from(&[("PORTFOLIO_VARIANT", "tutoring")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::UnknownVariant("tutoring".to_string()));
    }
}
