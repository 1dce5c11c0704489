//! Settings loading and persistence

use std::path::{Path, PathBuf};

use launchpad_core::prelude::*;

use super::types::{default_graphql_url, default_rpc_url, Settings};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "launchpad-terminal";

/// Environment override for `network.launchpad_contract`
pub const CONTRACT_ENV_VAR: &str = "LPAD_LAUNCHPAD_CONTRACT";

/// `<config_dir>/launchpad-terminal/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
/// Invalid endpoint URLs fall back to their defaults. The contract id from
/// the environment wins over the file.
pub fn load_settings(config_path: &Path) -> Settings {
    let mut settings = read_settings_file(config_path);
    sanitize_urls(&mut settings);
    apply_env_overrides(&mut settings);
    settings
}

fn read_settings_file(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

fn sanitize_urls(settings: &mut Settings) {
    if let Err(e) = validate_http_url(&settings.network.rpc_url) {
        warn!("Ignoring network.rpc_url: {}", e);
        settings.network.rpc_url = default_rpc_url();
    }
    if let Err(e) = validate_http_url(&settings.network.graphql_url) {
        warn!("Ignoring network.graphql_url: {}", e);
        settings.network.graphql_url = default_graphql_url();
    }
}

fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(contract) = std::env::var(CONTRACT_ENV_VAR) {
        let contract = contract.trim();
        if !contract.is_empty() {
            debug!("{} overrides launchpad contract", CONTRACT_ENV_VAR);
            settings.network.launchpad_contract = contract.to_string();
        }
    }
}

/// Check that `raw` is an absolute http(s) URL
pub fn validate_http_url(raw: &str) -> Result<url::Url> {
    let parsed =
        url::Url::parse(raw).map_err(|e| Error::config(format!("invalid URL '{}': {}", raw, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(Error::config(format!(
            "unsupported scheme '{}' in '{}'",
            other, raw
        ))),
    }
}

/// Write a commented default config file if none exists
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    std::fs::write(config_path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(())
}

/// Save settings to `config_path`
///
/// Uses atomic write (temp file + rename).
pub fn save_settings(config_path: &Path, settings: &Settings) -> Result<()> {
    let dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let temp_path = dir.join(".config.toml.tmp");

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("{}{}", generate_config_header(), content);

    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, config_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", config_path);
    Ok(())
}

fn generate_config_header() -> String {
    "# Launchpad Terminal Configuration\n# Generated by lpad\n\n".to_string()
}

fn generate_default_config() -> String {
    r#"# Launchpad Terminal Configuration

[network]
rpc_url = "https://rpc.mainnet.near.org"
graphql_url = "http://localhost:4000/graphql"
# Launchpad contract account (LPAD_LAUNCHPAD_CONTRACT overrides this)
launchpad_contract = ""
request_timeout_ms = 10000

[wallet]
# Connected account; leave unset for an anonymous session
# account_id = "alice.near"

[ui]
icons = "unicode"          # or "nerd_fonts"
mobile_breakpoint = 81     # narrower terminals use the single-column dialog
wide_breakpoint = 120      # wider terminals show the page in two columns
tick_rate_ms = 50
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn test_load_settings_defaults() {
        std::env::remove_var(CONTRACT_ENV_VAR);
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    #[serial]
    fn test_load_settings_custom() {
        std::env::remove_var(CONTRACT_ENV_VAR);
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[network]
launchpad_contract = "launchpad.testnet"
rpc_url = "https://rpc.testnet.near.org"

[wallet]
account_id = "alice.testnet"

[ui]
wide_breakpoint = 140
"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.network.launchpad_contract, "launchpad.testnet");
        assert_eq!(settings.network.rpc_url, "https://rpc.testnet.near.org");
        assert_eq!(settings.account().unwrap().as_str(), "alice.testnet");
        assert_eq!(settings.ui.wide_breakpoint, 140);
        assert_eq!(settings.ui.mobile_breakpoint, 81);
    }

    #[test]
    #[serial]
    fn test_load_settings_invalid_toml() {
        std::env::remove_var(CONTRACT_ENV_VAR);
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    #[serial]
    fn test_invalid_url_falls_back_to_default() {
        std::env::remove_var(CONTRACT_ENV_VAR);
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[network]\nrpc_url = \"ftp://nope\"\n").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.network.rpc_url, default_rpc_url());
    }

    #[test]
    #[serial]
    fn test_env_overrides_contract() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[network]\nlaunchpad_contract = \"from-file.near\"\n").unwrap();

        std::env::set_var(CONTRACT_ENV_VAR, "from-env.near");
        let settings = load_settings(&path);
        std::env::remove_var(CONTRACT_ENV_VAR);

        assert_eq!(settings.network.launchpad_contract, "from-env.near");
    }

    #[test]
    #[serial]
    fn test_blank_env_does_not_override() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[network]\nlaunchpad_contract = \"from-file.near\"\n").unwrap();

        std::env::set_var(CONTRACT_ENV_VAR, "   ");
        let settings = load_settings(&path);
        std::env::remove_var(CONTRACT_ENV_VAR);

        assert_eq!(settings.network.launchpad_contract, "from-file.near");
    }

    #[test]
    fn test_validate_http_url() {
        assert!(validate_http_url("https://rpc.mainnet.near.org").is_ok());
        assert!(validate_http_url("http://localhost:4000/graphql").is_ok());
        assert!(validate_http_url("not a url").is_err());
        assert!(validate_http_url("ws://localhost").is_err());
    }

    #[test]
    fn test_init_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        init_config_file(&path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Settings =
            toml::from_str(&content).expect("Default config should be valid TOML");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_init_config_file_idempotent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");

        init_config_file(&path).unwrap();
        std::fs::write(&path, "[ui]\nicons = \"nerd_fonts\"\n").unwrap();
        init_config_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("nerd_fonts"));
    }

    #[test]
    #[serial]
    fn test_save_settings_round_trip() {
        std::env::remove_var(CONTRACT_ENV_VAR);
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");

        let mut settings = Settings::default();
        settings.ui.icons = IconMode::NerdFonts;
        settings.wallet.account_id = Some("bob.near".to_string());

        save_settings(&path, &settings).unwrap();
        assert!(!temp.path().join(".config.toml.tmp").exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Launchpad Terminal Configuration"));

        assert_eq!(load_settings(&path), settings);
    }
}
