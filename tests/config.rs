mod common;

use common::CapturedLogs;
use physics_edu_toolbox::config::{self, Config};
use physics_edu_toolbox::hooke::smoothing::MIN_TIME_CONSTANT_S;

#[test]
fn missing_keys_take_defaults() {
    let cfg = Config::from_toml_str("ui_scale = 1.2\n").expect("parse");
    assert_eq!(cfg.ui_scale, 1.2);
    assert!(!cfg.always_on_top);
    assert_eq!(cfg.window_alpha, 1.0);
    assert_eq!(cfg.animation_time_constant_s, 0.12);
    assert_eq!(cfg.log_filter, "info");
}

#[test]
fn out_of_range_values_are_sanitized() {
    let cfg = Config::from_toml_str(
        "ui_scale = 9.0\nwindow_alpha = 0.0\nanimation_time_constant_s = -1.0\nlog_filter = \"  \"\n",
    )
    .expect("parse");
    assert_eq!(cfg.ui_scale, 1.6);
    assert_eq!(cfg.window_alpha, 0.3);
    assert_eq!(cfg.animation_time_constant_s, MIN_TIME_CONSTANT_S);
    assert_eq!(cfg.log_filter, "info");
}

#[test]
fn malformed_file_is_a_parse_error() {
    let err = Config::from_toml_str("ui_scale = \"big\"").unwrap_err();
    assert!(matches!(err, config::ConfigError::Parse(_)), "{err}");
}

#[test]
fn missing_file_is_created_then_round_trips() {
    let dir = std::env::temp_dir().join(format!("physics_edu_toolbox_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("config.toml");
    let _ = std::fs::remove_file(&path);

    let mut cfg = config::load_or_create(&path).expect("create");
    assert!(path.exists());
    assert_eq!(cfg.path(), path.as_path());

    cfg.always_on_top = true;
    cfg.animation_time_constant_s = 0.3;
    cfg.save().expect("save");

    let reloaded = config::load_or_create(&path).expect("reload");
    assert!(reloaded.always_on_top);
    assert_eq!(reloaded.animation_time_constant_s, 0.3);
    assert_eq!(reloaded, cfg);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn unreadable_config_falls_back_to_defaults() {
    let dir = std::env::temp_dir().join(format!("physics_edu_toolbox_bad_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("config.toml");
    std::fs::write(&path, "window_alpha = [1, 2]").expect("write");

    let cfg = config::load_or_fallback(&path);
    assert_eq!(cfg.window_alpha, 1.0);
    assert_eq!(cfg.path(), path.as_path());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn fallback_and_creation_are_logged() {
    let dir = std::env::temp_dir().join(format!("physics_edu_toolbox_log_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let bad = dir.join("bad.toml");
    std::fs::write(&bad, "window_alpha = [1, 2]").expect("write");
    let fresh = dir.join("fresh.toml");
    let _ = std::fs::remove_file(&fresh);

    let logs = CapturedLogs::default();
    logs.capture(|| {
        config::load_or_fallback(&bad);
        config::load_or_create(&fresh).expect("create");
    });
    let out = logs.contents();
    let fallback = out
        .lines()
        .find(|l| l.contains("configuration unavailable, using defaults"))
        .expect("fallback warning");
    assert!(fallback.contains("WARN"), "{out}");
    assert!(out.contains("default configuration written"), "{out}");

    std::fs::remove_dir_all(&dir).ok();
}
