use serde_json::{Map, Value};

use crate::core::errors::{AppEnvError, Result};
use crate::core::models::environment::ResolvedEnvironment;

/// Builds the environment-specific app manifest from a base config.
///
/// Fields of the base pass through unchanged; only `icon` and the
/// environment keys inside `extra` are set.
pub struct ManifestService;

impl ManifestService {
    /// Unwrap `{ "expo": { ... } }` if present, otherwise use the object as is.
    pub fn base_from_json(value: Value) -> Result<Map<String, Value>> {
        let mut object = match value {
            Value::Object(map) => map,
            other => {
                return Err(AppEnvError::InvalidConfig {
                    detail: format!("base app config must be a JSON object, got {}", kind(&other)),
                });
            }
        };

        match object.remove("expo") {
            Some(Value::Object(inner)) => Ok(inner),
            Some(other) => {
                object.insert("expo".to_string(), other);
                Ok(object)
            }
            None => Ok(object),
        }
    }

    /// Merge the resolved environment into `base`.
    ///
    /// `timestamp_ms` is stored as `extra.timestamp`.
    pub fn assemble(
        &self,
        mut base: Map<String, Value>,
        resolved: &ResolvedEnvironment,
        timestamp_ms: i64,
    ) -> Map<String, Value> {
        base.insert(
            "icon".to_string(),
            Value::String(icon_path(resolved.environment.as_str())),
        );

        let mut extra = match base.remove("extra") {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        extra.insert("apiKey".into(), Value::String(resolved.secret.clone()));
        extra.insert(
            "backendUrl".into(),
            Value::String(resolved.profile.backend_url.clone()),
        );
        extra.insert(
            "environment".into(),
            Value::String(resolved.environment.to_string()),
        );
        extra.insert("timestamp".into(), Value::from(timestamp_ms));
        base.insert("extra".to_string(), Value::Object(extra));

        base
    }
}

/// Icon asset for an environment.
pub fn icon_path(environment: &str) -> String {
    format!("./assets/app-icon.{environment}.png")
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::core::models::environment::{Environment, EnvironmentProfile};

    fn resolved() -> ResolvedEnvironment {
        ResolvedEnvironment {
            environment: Environment::new("development"),
            profile: EnvironmentProfile {
                backend_url: "https://dev.api.example.com".into(),
            },
            api_key_var: "DEVELOPMENT_API_KEY".into(),
            secret: "dev-local-api-key".into(),
        }
    }

    fn base(value: Value) -> Map<String, Value> {
        ManifestService::base_from_json(value).unwrap()
    }

    #[test]
    fn assemble_sets_icon_and_extra() {
        let manifest = ManifestService.assemble(
            base(json!({ "name": "Example", "slug": "example" })),
            &resolved(),
            1_700_000_000_000,
        );

        assert_eq!(manifest["icon"], "./assets/app-icon.development.png");
        assert_eq!(manifest["extra"]["apiKey"], "dev-local-api-key");
        assert_eq!(manifest["extra"]["backendUrl"], "https://dev.api.example.com");
        assert_eq!(manifest["extra"]["environment"], "development");
        assert_eq!(manifest["extra"]["timestamp"], 1_700_000_000_000i64);
    }

    #[test]
    fn assemble_passes_base_fields_through() {
        let manifest = ManifestService.assemble(
            base(json!({
                "name": "Example",
                "slug": "example",
                "version": "1.2.3",
                "platforms": ["ios", "android"],
                "orientation": "portrait"
            })),
            &resolved(),
            0,
        );

        assert_eq!(manifest["name"], "Example");
        assert_eq!(manifest["version"], "1.2.3");
        assert_eq!(manifest["platforms"], json!(["ios", "android"]));
        assert_eq!(manifest["orientation"], "portrait");
    }

    #[test]
    fn assemble_keeps_existing_extra_keys() {
        let manifest = ManifestService.assemble(
            base(json!({ "extra": { "eas": { "projectId": "abc" }, "apiKey": "stale" } })),
            &resolved(),
            0,
        );

        assert_eq!(manifest["extra"]["eas"]["projectId"], "abc");
        assert_eq!(manifest["extra"]["apiKey"], "dev-local-api-key");
    }

    #[test]
    fn assemble_overrides_base_icon() {
        let manifest = ManifestService.assemble(
            base(json!({ "icon": "./assets/icon.png" })),
            &resolved(),
            0,
        );

        assert_eq!(manifest["icon"], "./assets/app-icon.development.png");
    }

    #[test]
    fn base_unwraps_expo_key() {
        let map = base(json!({ "expo": { "name": "Inner" } }));

        assert_eq!(map["name"], "Inner");
        assert!(!map.contains_key("expo"));
    }

    #[test]
    fn base_keeps_non_object_expo_key() {
        let map = base(json!({ "expo": "1.0", "name": "Outer" }));

        assert_eq!(map["expo"], "1.0");
        assert_eq!(map["name"], "Outer");
    }

    #[test]
    fn base_must_be_object() {
        let err = ManifestService::base_from_json(json!(["not", "an", "object"]))
            .unwrap_err()
            .to_string();

        assert!(err.contains("an array"));
    }
}
