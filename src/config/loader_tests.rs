//! Tests for configuration file loading.

use super::*;
use crate::rotation::RotationMode;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_campusboard_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("campusboard") && path_str.ends_with("config.toml"),
        "Path should contain 'campusboard' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("campusboard_test_config.toml");

    let toml_content = r#"
institution = "riverside"
content_dir = "/srv/board"
applications_file = "/srv/board/applications.jsonl"
rotation_interval_ms = 8000
transition_settle_ms = 250
marquee_step_ms = 90
cell_width = 10
"#;
    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.institution, Some("riverside".to_string()));
    assert_eq!(config.content_dir, Some(PathBuf::from("/srv/board")));
    assert_eq!(config.rotation_interval_ms, Some(8000));
    assert_eq!(config.transition_settle_ms, Some(250));
    assert_eq!(config.marquee_step_ms, Some(90));
    assert_eq!(config.cell_width, Some(10));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("campusboard_test_invalid.toml");
    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write config");

    let result = load_config_file(&config_path);

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str(r#"theme = "dark""#);
    assert!(result.is_err(), "Unknown keys should be rejected");
}

#[test]
fn config_file_rejects_keybindings_table() {
    // Bindings are fixed; a table here is a typo, not a silent no-op
    let result: Result<ConfigFile, _> = toml::from_str(
        r#"
[keybindings]
next = "n"
"#,
    );
    assert!(result.is_err(), "keybindings table should be rejected");
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let file = ConfigFile {
        institution: Some("riverside".to_string()),
        rotation_interval_ms: Some(3000),
        marquee_step_ms: Some(50),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.institution, Some("riverside".to_string()));
    assert_eq!(resolved.rotation_interval, Duration::from_secs(3));
    assert_eq!(resolved.marquee_step, Duration::from_millis(50));
    assert_eq!(resolved.transition_settle, defaults.transition_settle);
    assert_eq!(resolved.content_dir, defaults.content_dir);
}

#[test]
fn merge_config_clamps_zero_cell_width() {
    let file = ConfigFile {
        cell_width: Some(0),
        ..ConfigFile::default()
    };
    assert_eq!(merge_config(Some(file)).cell_width, 1);
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();

    assert_eq!(config.institution, None);
    assert_eq!(config.content_dir, PathBuf::from("content"));
    assert_eq!(config.rotation_interval, Duration::from_secs(5));
    assert_eq!(config.transition_settle, Duration::from_millis(500));
    assert_eq!(config.marquee_step, Duration::from_millis(150));
    assert_eq!(config.cell_width, 8);
    assert!(!config.start_paused);
    assert!(config.color);
    assert!(config.log_file_path.to_string_lossy().ends_with("campusboard.log"));
    assert!(config
        .applications_file
        .to_string_lossy()
        .ends_with("applications.jsonl"));
}

#[test]
fn surface_configs_match_surface_table() {
    let surfaces = ResolvedConfig::default().surface_configs();

    assert_eq!(surfaces.images.mode, RotationMode::SingleItem);
    assert_eq!(surfaces.images.settle, Duration::from_millis(500));

    assert_eq!(surfaces.news.mode, RotationMode::SlidingWindow);
    assert_eq!(
        surfaces.news.view,
        ViewPolicy::Responsive(Breakpoints::default())
    );

    assert_eq!(surfaces.updates.view, ViewPolicy::Fixed(TICKER_ROWS));
    assert_eq!(surfaces.updates.settle, Duration::ZERO);

    assert_eq!(surfaces.marquee.mode, RotationMode::SingleItem);
    assert_eq!(surfaces.marquee.interval, Duration::from_millis(150));
    assert_eq!(surfaces.marquee.settle, Duration::ZERO);
}

#[test]
fn surface_configs_follow_configured_durations() {
    let config = ResolvedConfig {
        rotation_interval: Duration::from_secs(2),
        transition_settle: Duration::ZERO,
        ..ResolvedConfig::default()
    };
    let surfaces = config.surface_configs();

    assert_eq!(surfaces.news.interval, Duration::from_secs(2));
    assert_eq!(surfaces.news.settle, Duration::ZERO);
    assert_eq!(surfaces.updates.interval, Duration::from_secs(2));
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the var on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(campusboard_env)]
fn apply_env_overrides_respects_institution_and_content_dir() {
    let _institution = EnvGuard::new(ENV_INSTITUTION);
    let _content = EnvGuard::new(ENV_CONTENT_DIR);

    env::set_var(ENV_INSTITUTION, "riverside");
    env::set_var(ENV_CONTENT_DIR, "/tmp/board");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.institution, Some("riverside".to_string()));
    assert_eq!(result.content_dir, PathBuf::from("/tmp/board"));
}

#[test]
#[serial(campusboard_env)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _institution = EnvGuard::new(ENV_INSTITUTION);
    let _content = EnvGuard::new(ENV_CONTENT_DIR);

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(campusboard_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);

    let temp_dir = env::temp_dir();
    let explicit_path = temp_dir.join("campusboard_explicit.toml");
    fs::write(&explicit_path, r#"institution = "explicit""#).expect("write explicit");

    let env_path = temp_dir.join("campusboard_env.toml");
    fs::write(&env_path, r#"institution = "from-env""#).expect("write env");
    env::set_var(ENV_CONFIG, env_path.to_str().unwrap());

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(
        config.institution,
        Some("explicit".to_string()),
        "Should use explicit path, not CAMPUSBOARD_CONFIG env var"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(campusboard_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);

    let env_path = env::temp_dir().join("campusboard_env_only.toml");
    fs::write(&env_path, r#"marquee_step_ms = 99"#).expect("write env config");
    env::set_var(ENV_CONFIG, env_path.to_str().unwrap());

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.marquee_step_ms, Some(99));

    fs::remove_file(env_path).ok();
}

#[test]
#[serial(campusboard_config)]
fn load_config_with_precedence_rejects_empty_env_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);
    env::set_var(ENV_CONFIG, "");

    assert!(matches!(
        load_config_with_precedence(None),
        Err(ConfigError::InvalidPath(_))
    ));
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), CliOverrides::default()), base);
}

#[test]
fn apply_cli_overrides_sets_every_flag() {
    let cli = CliOverrides {
        institution: Some("riverside".to_string()),
        content_dir: Some(PathBuf::from("/cli/content")),
        paused: true,
        no_color: true,
    };

    let result = apply_cli_overrides(ResolvedConfig::default(), cli);

    assert_eq!(result.institution, Some("riverside".to_string()));
    assert_eq!(result.content_dir, PathBuf::from("/cli/content"));
    assert!(result.start_paused);
    assert!(!result.color);
}

#[test]
#[serial(campusboard_env)]
fn precedence_chain_full_defaults_to_cli() {
    let _institution = EnvGuard::new(ENV_INSTITUTION);
    let _content = EnvGuard::new(ENV_CONTENT_DIR);

    // File sets institution and content dir
    let file = ConfigFile {
        institution: Some("from-file".to_string()),
        content_dir: Some(PathBuf::from("/file/content")),
        ..ConfigFile::default()
    };
    let merged = merge_config(Some(file));

    // Env overrides institution only
    env::set_var(ENV_INSTITUTION, "from-env");
    let with_env = apply_env_overrides(merged);
    assert_eq!(with_env.institution, Some("from-env".to_string()));
    assert_eq!(with_env.content_dir, PathBuf::from("/file/content"));

    // CLI overrides content dir only
    let with_cli = apply_cli_overrides(
        with_env,
        CliOverrides {
            content_dir: Some(PathBuf::from("/cli/content")),
            ..CliOverrides::default()
        },
    );
    assert_eq!(with_cli.institution, Some("from-env".to_string()));
    assert_eq!(with_cli.content_dir, PathBuf::from("/cli/content"));
}
