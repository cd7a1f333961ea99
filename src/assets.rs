use std::sync::LazyLock;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use std::path::Path;

pub static GLOBAL_ANIMATION_CACHE: LazyLock<DashMap<String, AnimationPayload>> =
    LazyLock::new(DashMap::new);

/// A Lottie animation document, kept as raw JSON and handed to the player
/// element untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimationPayload(serde_json::Value);

impl AnimationPayload {
    pub fn to_json(&self) -> String {
        self.0.to_string()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("invalid animation name `{0}`")]
    InvalidName(String),
    #[error("animation `{0}` not found")]
    NotFound(String),
    #[error("couldn't read animation `{name}`: {reason}")]
    Io { name: String, reason: String },
    #[error("couldn't parse animation `{name}`: {reason}")]
    Parse { name: String, reason: String },
}

/// Names map straight onto file names, so only `[a-z0-9-]` is accepted.
pub fn validate_name(name: &str) -> Result<(), AssetError> {
    let ok = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if ok {
        Ok(())
    } else {
        Err(AssetError::InvalidName(name.to_string()))
    }
}

pub fn parse_payload(name: &str, bytes: &[u8]) -> Result<AnimationPayload, AssetError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| AssetError::Parse {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
    if !value.is_object() {
        return Err(AssetError::Parse {
            name: name.to_string(),
            reason: "expected a JSON object".to_string(),
        });
    }
    Ok(AnimationPayload(value))
}

#[cfg(feature = "ssr")]
pub async fn load_animation(root: &Path, name: &str) -> Result<AnimationPayload, AssetError> {
    validate_name(name)?;
    let cache = &*GLOBAL_ANIMATION_CACHE;
    if let Some(hit) = cache.get(name) {
        return Ok(hit.clone());
    }

    let path = root.join("lottie").join(format!("{name}.json"));
    let bytes = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AssetError::NotFound(name.to_string()),
        _ => AssetError::Io {
            name: name.to_string(),
            reason: e.to_string(),
        },
    })?;
    let payload = parse_payload(name, &bytes)?;
    tracing::debug!(name, path = %path.display(), "loaded animation");
    cache.insert(name.to_string(), payload.clone());
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("under-development").is_ok());
        assert!(validate_name("v2").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        for bad in ["", "../secrets", "Under", "a/b", "x.json", "sp ace"] {
            assert_eq!(
                validate_name(bad),
                Err(AssetError::InvalidName(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_object() {
        let payload = parse_payload("spin", br#"{"v":"5.7.4","layers":[]}"#).unwrap();
        assert!(payload.to_json().contains("\"layers\":[]"));
    }

    #[test]
    fn test_parse_failures() {
        assert!(matches!(
            parse_payload("spin", b"{not json"),
            Err(AssetError::Parse { .. })
        ));
        let err = parse_payload("spin", b"[1,2,3]").unwrap_err();
        assert_eq!(
            err,
            AssetError::Parse {
                name: "spin".to_string(),
                reason: "expected a JSON object".to_string()
            }
        );
    }
}
