//! Effective theme configuration.
//!
//! Themes may declare options in their metadata's `config` block, but only
//! an allow-listed subset is honored; everything else is dropped silently.
//! The result is the declared values layered over hard-coded defaults.

use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Effective configuration for one theme.
pub type ThemeConfig = BTreeMap<String, Value>;

/// Recognized config options and their defaults. Keys a theme declares
/// outside this list never reach the rendered site.
fn defaults() -> ThemeConfig {
    BTreeMap::from([("posts_per_page".to_string(), json!(5))])
}

/// Derive the effective config for a theme from its parsed metadata.
///
/// Missing metadata or a missing `config` block yields the defaults
/// unchanged. Pure and side-effect-free.
pub fn create(package_json: Option<&Map<String, Value>>) -> ThemeConfig {
    let mut config = defaults();

    let declared = package_json
        .and_then(|meta| meta.get("config"))
        .and_then(Value::as_object);

    if let Some(declared) = declared {
        for (key, value) in declared {
            if config.contains_key(key) {
                config.insert(key.clone(), value.clone());
            }
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(json: Value) -> Map<String, Value> {
        json.as_object().unwrap().clone()
    }

    #[test]
    fn no_metadata_yields_defaults() {
        assert_eq!(create(None), defaults());
        assert_eq!(create(None)["posts_per_page"], json!(5));
    }

    #[test]
    fn metadata_without_config_yields_defaults() {
        let package_json = meta(json!({"name": "aquarius"}));
        assert_eq!(create(Some(&package_json)), defaults());
    }

    #[test]
    fn declared_value_overrides_default() {
        let package_json = meta(json!({"name": "aquarius", "config": {"posts_per_page": 3}}));
        let config = create(Some(&package_json));
        assert_eq!(config["posts_per_page"], json!(3));
    }

    #[test]
    fn unlisted_keys_are_dropped() {
        let package_json = meta(json!({"name": "aquarius", "config": {"magic": "roundabout"}}));
        let config = create(Some(&package_json));
        assert_eq!(config, defaults());
        assert!(!config.contains_key("magic"));
    }

    #[test]
    fn non_object_config_block_is_ignored() {
        let package_json = meta(json!({"name": "aquarius", "config": "nope"}));
        assert_eq!(create(Some(&package_json)), defaults());
    }
}
