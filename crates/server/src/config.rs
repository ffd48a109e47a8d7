use std::{fs, path::Path, str::FromStr};

use cascade::{catalog, Catalog};

pub const DEFAULT_SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub log_filter: String,
    pub htmx_src: String,
    pub initial_category: String,
    pub history_default: String,
    pub owner_default: String,
    pub owner_services: usize,
    pub user_services: usize,
    pub visible_services: usize,
    pub search_services: usize,
    pub owner_choices: usize,
    pub history_choices: usize,
    pub history_base_year: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            log_filter: "info".into(),
            htmx_src: "https://unpkg.com/htmx.org@2.0.4".into(),
            initial_category: "user".into(),
            history_default: "today".into(),
            owner_default: "Owner-1".into(),
            owner_services: catalog::DEFAULT_OWNER_SERVICES,
            user_services: catalog::DEFAULT_USER_SERVICES,
            visible_services: catalog::DEFAULT_VISIBLE_SERVICES,
            search_services: catalog::DEFAULT_SEARCH_SERVICES,
            owner_choices: catalog::DEFAULT_OWNER_CHOICES,
            history_choices: catalog::DEFAULT_HISTORY_CHOICES,
            history_base_year: catalog::DEFAULT_HISTORY_BASE_YEAR,
        }
    }
}

/// Keys accepted in the settings file and, upper-cased behind `APP__`,
/// in the environment.
pub const SETTING_KEYS: [&str; 13] = [
    "bind_addr",
    "log_filter",
    "htmx_src",
    "initial_category",
    "history_default",
    "owner_default",
    "owner_services",
    "user_services",
    "visible_services",
    "search_services",
    "owner_choices",
    "history_choices",
    "history_base_year",
];

impl Settings {
    /// Applies one key. Unknown keys and unparsable numbers are ignored.
    pub fn apply(&mut self, key: &str, value: &str) {
        match key {
            "bind_addr" => self.server_bind = value.to_string(),
            "log_filter" => self.log_filter = value.to_string(),
            "htmx_src" => self.htmx_src = value.to_string(),
            "initial_category" => self.initial_category = value.to_string(),
            "history_default" => self.history_default = value.to_string(),
            "owner_default" => self.owner_default = value.to_string(),
            "owner_services" => set_parsed(&mut self.owner_services, value),
            "user_services" => set_parsed(&mut self.user_services, value),
            "visible_services" => set_parsed(&mut self.visible_services, value),
            "search_services" => set_parsed(&mut self.search_services, value),
            "owner_choices" => set_parsed(&mut self.owner_choices, value),
            "history_choices" => set_parsed(&mut self.history_choices, value),
            "history_base_year" => set_parsed(&mut self.history_base_year, value),
            _ => {}
        }
    }

    pub fn apply_file(&mut self, raw: &str) {
        let Ok(table) = toml::from_str::<toml::Table>(raw) else {
            return;
        };
        for (key, value) in &table {
            match value {
                toml::Value::String(text) => self.apply(key, text),
                toml::Value::Integer(number) => self.apply(key, &number.to_string()),
                _ => {}
            }
        }
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("SERVER_BIND") {
            self.server_bind = v;
        }
        if let Some(v) = lookup("RUST_LOG") {
            self.log_filter = v;
        }
        for key in SETTING_KEYS {
            if let Some(v) = lookup(&format!("APP__{}", key.to_ascii_uppercase())) {
                self.apply(key, &v);
            }
        }
    }

    pub fn catalog(&self) -> Catalog {
        Catalog {
            owner_services: self.owner_services,
            user_services: self.user_services,
            visible_services: self.visible_services,
            search_services: self.search_services,
            owner_choices: self.owner_choices,
            history_choices: self.history_choices,
            history_base_year: self.history_base_year,
            initial_category: self.initial_category.clone(),
            history_default: self.history_default.clone(),
            owner_default: self.owner_default.clone(),
        }
    }
}

/// Defaults, then the settings file if readable, then the environment.
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        settings.apply_file(&raw);
    }
    settings.apply_env(|key| std::env::var(key).ok());

    settings
}

fn set_parsed<T: FromStr>(slot: &mut T, value: &str) {
    if let Ok(parsed) = value.trim().parse::<T>() {
        *slot = parsed;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
