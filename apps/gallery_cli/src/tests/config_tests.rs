use super::{apply_env, apply_file, load_settings, Settings};

use std::{
    collections::HashMap,
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        r#"
server_url = "http://photos.local:8080"
comment_path = "/api/comments"
"#,
    );

    assert_eq!(settings.server_url, "http://photos.local:8080");
    assert_eq!(settings.comment_path, "/api/comments");
    assert_eq!(settings.like_path, Settings::default().like_path);
}

#[test]
fn malformed_file_keeps_defaults() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "server_url = [");
    assert_eq!(settings, Settings::default());
}

#[test]
fn app_prefixed_env_wins_over_plain_env() {
    let vars: HashMap<&str, &str> = [
        ("GALLERY_SERVER_URL", "http://plain"),
        ("APP__SERVER_URL", "http://app"),
        ("GALLERY_LIKE_PATH", "/like"),
    ]
    .into_iter()
    .collect();

    let mut settings = Settings::default();
    apply_env(&mut settings, |key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(settings.server_url, "http://app");
    assert_eq!(settings.like_path, "/like");
    assert_eq!(settings.favorite_path, "/photos/favorite");
}

#[test]
fn missing_config_file_yields_defaults_for_file_keys() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("gallery_cli_missing_{suffix}.toml"));

    let settings = load_settings(&path);
    assert_eq!(settings.comment_path, "/comments/new");
}

#[test]
fn reads_settings_from_disk() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("gallery_cli_config_{suffix}.toml"));
    fs::write(&path, "favorite_path = \"/fav\"\n").expect("write config");

    let settings = load_settings(&path);
    assert_eq!(settings.favorite_path, "/fav");

    fs::remove_file(path).expect("cleanup");
}
