//! Layering behaviour of the configuration loader.

use std::{collections::HashMap, fs, time::Duration};

use folio_config::{ConfigLoadError, ConfigLoader, ConfigSource, MotionKind};
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + 'static {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn falls_back_to_defaults_in_empty_directory() {
    let dir = tempdir().expect("tempdir");
    let load = ConfigLoader::new()
        .with_search_root(dir.path())
        .with_env(env(&[]))
        .load()
        .expect("load");

    assert_eq!(load.source, ConfigSource::Default);
    assert!(!load.env_file_loaded);
    assert_eq!(load.config.api.base_url.as_str(), "http://localhost:8000/");
    assert_eq!(load.config.carousels.cover_arts.mode, MotionKind::Damped);
    assert_eq!(load.config.carousels.cover_arts.base_speed, 1.7);
}

#[test]
fn default_candidate_file_is_picked_up() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("folio.toml"),
        r#"
[api]
base_url = "https://api.example.org"
timeout = "5s"

[carousels.representative_works]
mode = "auto"
pause_on_hover = true
repeat_factor = 2
"#,
    )
    .expect("write config");

    let load = ConfigLoader::new()
        .with_search_root(dir.path())
        .with_env(env(&[]))
        .load()
        .expect("load");

    assert_eq!(load.source, ConfigSource::File(dir.path().join("folio.toml")));
    assert_eq!(load.config.api.timeout, Duration::from_secs(5));
    let works = &load.config.carousels.representative_works;
    assert_eq!(works.mode, MotionKind::Auto);
    assert!(works.pause_on_hover);
    assert_eq!(works.repeat_factor, 2);
    // Untouched presets keep their own defaults.
    assert_eq!(load.config.carousels.research_highlights.gap_px, 0.0);
}

#[test]
fn explicit_path_wins_over_candidates_and_env_url_overrides() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("folio.toml"), "[api]\ntimeout = \"9s\"\n")
        .expect("write candidate");
    fs::write(
        dir.path().join("custom.json"),
        r#"{"api": {"base_url": "https://from-file.example", "timeout": "2s"}}"#,
    )
    .expect("write custom");

    let load = ConfigLoader::new()
        .with_search_root(dir.path())
        .with_env(env(&[
            ("FOLIO_CONFIG_PATH", "custom.json"),
            ("FOLIO_API_URL", "https://cdn.example.net/base"),
        ]))
        .load()
        .expect("load");

    assert_eq!(
        load.source,
        ConfigSource::EnvPath(dir.path().join("custom.json"))
    );
    assert_eq!(load.config.api.timeout, Duration::from_secs(2));
    assert_eq!(
        load.config.api.base_url.as_str(),
        "https://cdn.example.net/base"
    );
}

#[test]
fn env_file_supplies_values_without_overriding_real_env() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join(".env"),
        "FOLIO_API_URL=https://dotenv.example\nFOLIO_API_TIMEOUT=12s\n",
    )
    .expect("write .env");

    let load = ConfigLoader::new()
        .with_search_root(dir.path())
        .with_env(env(&[("FOLIO_API_TIMEOUT", "3s")]))
        .load()
        .expect("load");

    assert!(load.env_file_loaded);
    assert_eq!(load.config.api.base_url.as_str(), "https://dotenv.example/");
    assert_eq!(load.config.api.timeout, Duration::from_secs(3));
}

#[test]
fn inline_json_is_used_when_no_path_is_set() {
    let dir = tempdir().expect("tempdir");
    let load = ConfigLoader::new()
        .with_search_root(dir.path())
        .with_env(env(&[(
            "FOLIO_CONFIG_JSON",
            r#"{"carousels": {"cover_arts": {"mode": "damped", "damping": 0.1}}}"#,
        )]))
        .load()
        .expect("load");

    assert_eq!(load.source, ConfigSource::EnvInline);
    assert_eq!(load.config.carousels.cover_arts.damping, 0.1);
}

#[test]
fn invalid_timeout_override_is_reported() {
    let dir = tempdir().expect("tempdir");
    let err = ConfigLoader::new()
        .with_search_root(dir.path())
        .with_env(env(&[("FOLIO_API_TIMEOUT", "soon")]))
        .load()
        .unwrap_err();

    assert!(matches!(
        err,
        ConfigLoadError::InvalidEnv {
            var: "FOLIO_API_TIMEOUT",
            ..
        }
    ));
}

#[test]
fn invalid_preset_fails_validation() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("folio.json"),
        r#"{"carousels": {"research_highlights": {"base_speed": 0.0}}}"#,
    )
    .expect("write config");

    let err = ConfigLoader::new()
        .with_search_root(dir.path())
        .with_env(env(&[]))
        .load()
        .unwrap_err();

    assert!(matches!(
        err,
        ConfigLoadError::InvalidPreset {
            preset: "research_highlights",
            ..
        }
    ));
}

#[test]
fn negative_zone_gain_is_rejected_at_load() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("folio.toml"),
        "[carousels.representative_works]\nzone_gain = -2.0\n",
    )
    .expect("write config");

    let err = ConfigLoader::new()
        .with_search_root(dir.path())
        .with_env(env(&[]))
        .load()
        .unwrap_err();

    assert!(matches!(
        err,
        ConfigLoadError::InvalidPreset {
            preset: "representative_works",
            ..
        }
    ));
}
