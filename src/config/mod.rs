//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON file holding settings, artists and collections.
    #[serde(default = "default_content_path")]
    pub content_path: PathBuf,

    /// Directory served as static files (overlay artwork etc).
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

fn default_port() -> u16 {
    3000
}

fn default_content_path() -> PathBuf {
    PathBuf::from("content/navigation.json")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

/// Get config directory (NAVBAR_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("NAVBAR_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/gallery-navbar");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("gallery-navbar");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config/gallery-navbar");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("gallery-navbar");
        }
    }

    PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", i64::from(default_port()))?
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // NAVBAR_PORT, NAVBAR_CONTENT_PATH, ...
        .add_source(
            ::config::Environment::with_prefix("NAVBAR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Precedence: NAVBAR_PORT > PORT > config file > default.
    // PORT is what most hosting platforms set.
    if std::env::var("NAVBAR_PORT").is_err() {
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                builder = builder.set_override("port", i64::from(port_num))?;
            } else {
                tracing::warn!("Ignoring invalid PORT value: {}", port);
            }
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const NO_CONFIG_DIR: &str = "/tmp/gallery-navbar-test-nonexistent";

    fn clear_env() {
        env::remove_var("NAVBAR_PORT");
        env::remove_var("NAVBAR_CONTENT_PATH");
        env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        env::set_var("NAVBAR_CONFIG_DIR", NO_CONFIG_DIR);

        let config = load_config().expect("config should load");

        env::remove_var("NAVBAR_CONFIG_DIR");

        assert_eq!(config.port, 3000);
        assert_eq!(config.content_path, PathBuf::from("content/navigation.json"));
        assert_eq!(config.public_dir, PathBuf::from("public"));
    }

    #[test]
    #[serial]
    fn test_port_env_fallback() {
        clear_env();
        env::set_var("NAVBAR_CONFIG_DIR", NO_CONFIG_DIR);
        env::set_var("PORT", "8080");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("NAVBAR_CONFIG_DIR");

        assert_eq!(config.port, 8080, "PORT env var should set config.port");
    }

    #[test]
    #[serial]
    fn test_navbar_port_takes_precedence_over_port() {
        clear_env();
        env::set_var("NAVBAR_CONFIG_DIR", NO_CONFIG_DIR);
        env::set_var("NAVBAR_PORT", "5000");
        env::set_var("PORT", "8080");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("NAVBAR_CONFIG_DIR");

        assert_eq!(config.port, 5000);
    }

    #[test]
    #[serial]
    fn test_invalid_port_uses_default() {
        clear_env();
        env::set_var("NAVBAR_CONFIG_DIR", NO_CONFIG_DIR);
        env::set_var("PORT", "not-a-number");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("NAVBAR_CONFIG_DIR");

        assert_eq!(config.port, 3000);
    }

    #[test]
    #[serial]
    fn test_config_file_sets_content_path() {
        clear_env();
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "content_path = \"/srv/site/navigation.json\"\n",
        )
        .unwrap();
        env::set_var("NAVBAR_CONFIG_DIR", temp_dir.path());

        let config = load_config().expect("config should load");

        env::remove_var("NAVBAR_CONFIG_DIR");

        assert_eq!(
            config.content_path,
            PathBuf::from("/srv/site/navigation.json")
        );
    }
}
