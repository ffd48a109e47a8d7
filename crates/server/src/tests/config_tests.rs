use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_match_catalog_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.server_bind, "127.0.0.1:8080");
    assert_eq!(settings.catalog(), Catalog::default());
}

#[test]
fn file_values_accept_strings_and_integers() {
    let mut settings = Settings::default();
    settings.apply_file(
        r#"
bind_addr = "0.0.0.0:9000"
user_services = 3
owner_services = "7"
history_base_year = 1999
"#,
    );
    assert_eq!(settings.server_bind, "0.0.0.0:9000");
    assert_eq!(settings.user_services, 3);
    assert_eq!(settings.owner_services, 7);
    assert_eq!(settings.history_base_year, 1999);
}

#[test]
fn unparsable_numbers_keep_previous_value() {
    let mut settings = Settings::default();
    settings.apply_file("user_services = \"many\"\nsearch_services = -1\n");
    assert_eq!(settings.user_services, catalog::DEFAULT_USER_SERVICES);
    assert_eq!(settings.search_services, catalog::DEFAULT_SEARCH_SERVICES);
}

#[test]
fn invalid_toml_is_ignored() {
    let mut settings = Settings::default();
    settings.apply_file("this is = = not toml");
    assert_eq!(settings, Settings::default());
}

#[test]
fn prefixed_env_overrides_plain_env() {
    let mut settings = Settings::default();
    settings.apply_env(env_from(&[
        ("SERVER_BIND", "127.0.0.1:1"),
        ("APP__BIND_ADDR", "127.0.0.1:2"),
        ("RUST_LOG", "debug"),
        ("APP__OWNER_CHOICES", "4"),
        ("APP__INITIAL_CATEGORY", "owner"),
    ]));
    assert_eq!(settings.server_bind, "127.0.0.1:2");
    assert_eq!(settings.log_filter, "debug");
    assert_eq!(settings.owner_choices, 4);
    assert_eq!(settings.catalog().initial_category, "owner");
}

#[test]
fn load_settings_reads_file_from_path() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("cascade_server_config_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("server.toml");
    fs::write(&path, "visible_services = 9\nhtmx_src = \"/static/htmx.js\"\n").expect("write");

    let settings = load_settings(&path);
    assert_eq!(settings.visible_services, 9);
    assert_eq!(settings.htmx_src, "/static/htmx.js");

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn missing_file_keeps_defaults() {
    let settings = load_settings(Path::new("/definitely/not/here/server.toml"));
    assert_eq!(settings.visible_services, catalog::DEFAULT_VISIBLE_SERVICES);
}
