use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the API key stored on disk.
pub const API_KEY_ENV: &str = "LINEAR_API_KEY";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Linear personal API key, sent verbatim as the `Authorization` header.
    #[serde(default)]
    pub api_key: String,
}

impl Config {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// `~/.lazylinear`, home of the config file and the log.
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".lazylinear"))
}

const CONFIG_FILE: &str = "config.toml";

/// JSON file written by earlier releases, read only when `config.toml` is absent.
const LEGACY_CONFIG_FILE: &str = "config.json";

pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// Load the config, treating a missing file as an empty key.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(p) => load_file(p)?,
        None => load_from_dir(&config_dir()?)?,
    };

    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            config.api_key = key.trim().to_string();
        }
    }

    Ok(config)
}

fn load_from_dir(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    let legacy = dir.join(LEGACY_CONFIG_FILE);
    if !path.exists() && legacy.exists() {
        tracing::info!("Reading legacy config from {}", legacy.display());
        return load_legacy_file(&legacy);
    }
    load_file(&path)
}

fn load_legacy_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))
}

fn load_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!("No config at {}, continuing without API key", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    Ok(config)
}

/// Write the config, creating the containing directory if needed.
pub fn save(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    // Set file permissions to 0600 (Unix only)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}

pub fn init_wizard(path: Option<&Path>) -> Result<()> {
    use std::io::{self, Write};

    println!("lazylinear configuration");
    println!("========================\n");

    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if config_path.exists() {
        print!("Config already exists at {}. Overwrite? [y/N] ", config_path.display());
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    print!("Linear API key (https://linear.app/settings/api): ");
    io::stdout().flush()?;
    let mut api_key = String::new();
    io::stdin().read_line(&mut api_key)?;

    let config = Config {
        api_key: api_key.trim().to_string(),
    };
    save(&config, &config_path)?;

    println!("\nConfig saved to {}", config_path.display());
    println!("Run `lazylinear` to start the dashboard.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_file(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            api_key: "lin_api_123".to_string(),
        };

        save(&config, &path).unwrap();
        assert_eq!(load_file(&path).unwrap(), config);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_key = [").unwrap();
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn test_legacy_json_used_when_toml_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), r#"{"api_key": "lin_api_legacy"}"#)
            .unwrap();

        let config = load_from_dir(dir.path()).unwrap();
        assert_eq!(config.api_key, "lin_api_legacy");
    }

    #[test]
    fn test_toml_wins_over_legacy_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), r#"{"api_key": "old"}"#).unwrap();
        std::fs::write(dir.path().join("config.toml"), "api_key = \"new\"\n").unwrap();

        assert_eq!(load_from_dir(dir.path()).unwrap().api_key, "new");
    }

    #[test]
    fn test_empty_dir_is_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_from_dir(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_legacy_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "{").unwrap();
        assert!(load_from_dir(dir.path()).is_err());
    }

    #[test]
    fn test_file_without_key_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();
        assert_eq!(load_file(&path).unwrap().api_key, "");
    }
}
