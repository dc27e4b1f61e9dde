use std::{collections::HashMap, fs, path::Path};

pub const DEFAULT_CONFIG_FILE: &str = "gallery.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub like_path: String,
    pub favorite_path: String,
    pub comment_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:3000".into(),
            like_path: "/photos/like".into(),
            favorite_path: "/photos/favorite".into(),
            comment_path: "/comments/new".into(),
        }
    }
}

pub fn load_settings(config_path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(config_path) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        tracing::warn!("ignoring malformed gallery config file");
        return;
    };
    if let Some(v) = file_cfg.get("server_url") {
        settings.server_url = v.clone();
    }
    if let Some(v) = file_cfg.get("like_path") {
        settings.like_path = v.clone();
    }
    if let Some(v) = file_cfg.get("favorite_path") {
        settings.favorite_path = v.clone();
    }
    if let Some(v) = file_cfg.get("comment_path") {
        settings.comment_path = v.clone();
    }
}

/// `APP__*` variables win over the plain `GALLERY_*` ones.
fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let fields: [(&str, &str, &mut String); 4] = [
        ("GALLERY_SERVER_URL", "APP__SERVER_URL", &mut settings.server_url),
        ("GALLERY_LIKE_PATH", "APP__LIKE_PATH", &mut settings.like_path),
        (
            "GALLERY_FAVORITE_PATH",
            "APP__FAVORITE_PATH",
            &mut settings.favorite_path,
        ),
        (
            "GALLERY_COMMENT_PATH",
            "APP__COMMENT_PATH",
            &mut settings.comment_path,
        ),
    ];

    for (plain, app, slot) in fields {
        if let Some(v) = lookup(plain) {
            *slot = v;
        }
        if let Some(v) = lookup(app) {
            *slot = v;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
