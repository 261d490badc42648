use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

const DEV_KEY: &str = "dev-local-api-key";

const APP_JSON: &str = r#"{
  "expo": {
    "name": "Example",
    "slug": "example",
    "version": "1.4.0",
    "platforms": ["ios", "android"],
    "icon": "./assets/icon.png",
    "extra": { "eas": { "projectId": "0000-1111" } }
  }
}"#;

/// Run appenv in `dir` with every variable it reads cleared.
fn appenv(dir: &assert_fs::TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("appenv");
    cmd.current_dir(dir.path())
        .env_remove("EAS_BUILD_PROFILE")
        .env_remove("DEVELOPMENT_API_KEY")
        .env_remove("PRODUCTION_API_KEY")
        .env_remove("APPENV_CONFIG")
        .env("NO_COLOR", "1");
    cmd
}

fn stdout_json(assert: &assert_cmd::assert::Assert) -> serde_json::Value {
    serde_json::from_slice(&assert.get_output().stdout).unwrap()
}

#[test]
fn manifest_for_development() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("app.json").write_str(APP_JSON).unwrap();

    let assert = appenv(&dir)
        .env("EAS_BUILD_PROFILE", "development")
        .env("DEVELOPMENT_API_KEY", DEV_KEY)
        .arg("manifest")
        .assert()
        .success();

    let manifest = stdout_json(&assert);
    assert_eq!(manifest["name"], "Example");
    assert_eq!(manifest["slug"], "example");
    assert_eq!(manifest["version"], "1.4.0");
    assert_eq!(manifest["platforms"], serde_json::json!(["ios", "android"]));
    assert_eq!(manifest["icon"], "./assets/app-icon.development.png");
    assert_eq!(manifest["extra"]["eas"]["projectId"], "0000-1111");
    assert_eq!(manifest["extra"]["apiKey"], DEV_KEY);
    assert_eq!(manifest["extra"]["backendUrl"], "https://dev.api.example.com");
    assert_eq!(manifest["extra"]["environment"], "development");
    assert!(manifest["extra"]["timestamp"].as_i64().unwrap() > 0);
}

#[test]
fn manifest_written_to_output_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("base.json")
        .write_str(r#"{ "name": "Bare", "slug": "bare" }"#)
        .unwrap();

    appenv(&dir)
        .env("EAS_BUILD_PROFILE", "development")
        .env("DEVELOPMENT_API_KEY", DEV_KEY)
        .args(["manifest", "--base", "base.json", "-o", "out.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("written to out.json"));

    let written = std::fs::read_to_string(dir.path().join("out.json")).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(manifest["name"], "Bare");
    assert_eq!(manifest["extra"]["environment"], "development");
}

#[test]
fn manifest_not_written_when_key_is_wrong() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("app.json").write_str(APP_JSON).unwrap();

    appenv(&dir)
        .env("EAS_BUILD_PROFILE", "production")
        .env("PRODUCTION_API_KEY", "wrong")
        .args(["manifest", "-o", "out.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown API key hash"));

    dir.child("out.json").assert(predicate::path::missing());
}

#[test]
fn manifest_without_profile_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("app.json").write_str(APP_JSON).unwrap();

    appenv(&dir)
        .arg("manifest")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Missing EAS_BUILD_PROFILE"));
}

#[test]
fn manifest_missing_base_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    appenv(&dir)
        .env("EAS_BUILD_PROFILE", "development")
        .env("DEVELOPMENT_API_KEY", DEV_KEY)
        .arg("manifest")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found: app.json"));
}

#[test]
fn manifest_rejects_non_object_base() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("app.json").write_str("[1, 2, 3]").unwrap();

    appenv(&dir)
        .env("EAS_BUILD_PROFILE", "development")
        .env("DEVELOPMENT_API_KEY", DEV_KEY)
        .arg("manifest")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a JSON object"));
}

#[test]
fn manifest_rejects_malformed_json() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("app.json").write_str("{ not json").unwrap();

    appenv(&dir)
        .env("EAS_BUILD_PROFILE", "development")
        .env("DEVELOPMENT_API_KEY", DEV_KEY)
        .arg("manifest")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error in app.json"));
}
