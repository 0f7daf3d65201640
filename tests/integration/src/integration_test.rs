//! End-to-end integration tests
//!
//! Exercises the complete flow: detect settings file -> build config ->
//! resolve a host program's settings.

use decouple::{Coercion, Config, EnvSource, Error, FixedEnv, Format, Source};
use decouple_test_utils::TestSettingsDir;
use pretty_assertions::assert_eq;
use serde_json::json;

/// Settings of a typical web service host program.
#[derive(Debug, PartialEq)]
struct ServiceSettings {
    debug: bool,
    port: u16,
    secret_key: String,
    allowed_hosts: Vec<String>,
    database_url: String,
}

impl ServiceSettings {
    fn load<E: EnvSource>(config: &Config<E>) -> decouple::Result<Self> {
        Ok(Self {
            debug: config.get_bool("DEBUG", Some(false))?,
            port: config.get_parsed("PORT", Some(8000))?,
            secret_key: config.get_str("SECRET_KEY", None)?,
            allowed_hosts: config
                .get_str("ALLOWED_HOSTS", Some("localhost"))?
                .split(',')
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
                .collect(),
            database_url: config.get_str("DATABASE_URL", Some("sqlite://db.sqlite3"))?,
        })
    }
}

#[test]
fn test_service_settings_from_env_file() {
    let dir = TestSettingsDir::new().with_env_file(
        r#"
# production overrides
DEBUG=no
SECRET_KEY="k3y=with=equals"
ALLOWED_HOSTS = example.com, www.example.com
"#,
    );

    let config = Config::from_dir(dir.root())
        .unwrap()
        .with_env(FixedEnv::new().with("PORT", "9000"));
    assert_eq!(config.repository().format(), Some(Format::EnvFile));

    let settings = ServiceSettings::load(&config).unwrap();
    assert_eq!(
        settings,
        ServiceSettings {
            debug: false,
            port: 9000,
            secret_key: "k3y=with=equals".into(),
            allowed_hosts: vec!["example.com".into(), "www.example.com".into()],
            database_url: "sqlite://db.sqlite3".into(),
        }
    );
}

#[test]
fn test_service_settings_from_settings_ini() {
    let dir = TestSettingsDir::new()
        .with_settings(&[
            ("DEBUG", "True"),
            ("SECRET_KEY", "from-ini"),
            ("DATABASE_URL", "postgres://localhost/app"),
        ])
        .with_env_file("SECRET_KEY=from-env-file\n");

    let config = Config::from_dir(dir.root()).unwrap().with_env(FixedEnv::new());
    assert_eq!(config.repository().format(), Some(Format::Ini));

    let settings = ServiceSettings::load(&config).unwrap();
    assert!(settings.debug);
    assert_eq!(settings.port, 8000);
    assert_eq!(settings.secret_key, "from-ini");
    assert_eq!(settings.allowed_hosts, vec!["localhost".to_string()]);
    assert_eq!(settings.database_url, "postgres://localhost/app");
}

#[test]
fn test_missing_required_setting_is_reported_not_fatal() {
    let dir = TestSettingsDir::new().with_env_file("DEBUG=1\n");
    let config = Config::from_dir(dir.root()).unwrap().with_env(FixedEnv::new());

    let err = ServiceSettings::load(&config).unwrap_err();
    assert!(matches!(err, Error::OptionNotFound { ref option } if option == "SECRET_KEY"));

    // Supplying it through the environment fixes the lookup on the same repository
    let config = config.with_env(FixedEnv::from_entries(["SECRET_KEY=late"]));
    assert_eq!(ServiceSettings::load(&config).unwrap().secret_key, "late");
}

#[test]
fn test_precedence_across_all_tiers() {
    let dir = TestSettingsDir::new().with_env_file("A=repo\nB=repo\n");
    let config = Config::from_dir(dir.root())
        .unwrap()
        .with_env(FixedEnv::new().with("A", "env"));

    assert_eq!(config.get("A", Some(json!("default")), Coercion::None).unwrap(), json!("env"));
    assert_eq!(config.get("B", Some(json!("default")), Coercion::None).unwrap(), json!("repo"));
    assert_eq!(config.get("C", Some(json!("default")), Coercion::None).unwrap(), json!("default"));
    assert!(config.get("D", None, Coercion::None).is_err());
}

#[test]
fn test_standalone_repository_sees_environment() {
    let dir = TestSettingsDir::new().with_env_file("A=1\n");
    let config = Config::from_dir(dir.root()).unwrap();

    // The repository alone still reports process variables through `contains`
    assert!(config.repository().contains("PATH"));
    assert!(!config.repository().has_key("PATH"));
}

#[test]
fn test_broken_settings_abort_construction() {
    let dir = TestSettingsDir::new().with_ini_file("[settings\nDEBUG=1\n");

    let err = Config::from_dir(dir.root()).unwrap_err();
    assert!(err.is_load_error());
    assert!(err.to_string().contains("settings.ini"));
}
