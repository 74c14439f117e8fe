//! Server settings
//!
//! Loaded from a `tryon.xml` file. Missing elements fall back to defaults,
//! and out-of-range values are clamped after load. Mail credentials are
//! never stored here; they come from the environment.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use quick_xml::de::from_str;
use quick_xml::se::to_string;
use serde::{Deserialize, Serialize};

use crate::mannequin::RuleSet;

/// Longest simulated catalog load accepted from config
pub const MAX_CATALOG_DELAY_MS: u64 = 10_000;

fn default_api_port() -> u16 {
    5000
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_catalog_delay_ms() -> u64 {
    500
}

fn default_owner_email() -> String {
    "owner@virtualtryonplatform.com".to_string()
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    465
}

fn default_cors_enabled() -> bool {
    true
}

/// Server configuration stored in `tryon.xml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "TryOnServer")]
pub struct ServerSettings {
    /// HTTP port
    #[serde(rename = "apiPort", default = "default_api_port")]
    pub api_port: u16,

    #[serde(rename = "bindAddress", default = "default_bind_address")]
    pub bind_address: String,

    /// Root of `/models`, `/textures` and `/sounds`
    #[serde(rename = "assetDir", default = "default_asset_dir")]
    pub asset_dir: PathBuf,

    /// Brand settings JSON file; defaults under the user config directory
    #[serde(rename = "brandSettingsPath", default, skip_serializing_if = "Option::is_none")]
    pub brand_settings_path: Option<PathBuf>,

    /// Simulated catalog fetch latency
    #[serde(rename = "catalogDelayMs", default = "default_catalog_delay_ms")]
    pub catalog_delay_ms: u64,

    /// Recipient of booking notifications
    #[serde(rename = "ownerEmail", default = "default_owner_email")]
    pub owner_email: String,

    #[serde(rename = "smtpHost", default = "default_smtp_host")]
    pub smtp_host: String,

    #[serde(rename = "smtpPort", default = "default_smtp_port")]
    pub smtp_port: u16,

    #[serde(rename = "deformRuleSet", default)]
    pub deform_rule_set: RuleSet,

    /// Optional JSON rule file overriding `deformRuleSet`
    #[serde(rename = "deformRulesPath", default, skip_serializing_if = "Option::is_none")]
    pub deform_rules_path: Option<PathBuf>,

    #[serde(rename = "corsEnabled", default = "default_cors_enabled")]
    pub cors_enabled: bool,

    /// Directory for rotated log files; console only when absent
    #[serde(rename = "logDir", default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            api_port: default_api_port(),
            bind_address: default_bind_address(),
            asset_dir: default_asset_dir(),
            brand_settings_path: None,
            catalog_delay_ms: default_catalog_delay_ms(),
            owner_email: default_owner_email(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            deform_rule_set: RuleSet::default(),
            deform_rules_path: None,
            cors_enabled: default_cors_enabled(),
            log_dir: None,
        }
    }
}

impl ServerSettings {
    /// Default settings file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("TryOnServer");
            p.push("tryon.xml");
            p
        })
    }

    /// Load from an explicit path, else the default location, else defaults.
    ///
    /// An explicit path that fails to load is an error; a missing default file
    /// is not.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Clamp values into usable ranges
    pub fn sanitize(&mut self) {
        self.api_port = self.api_port.max(1);
        self.smtp_port = self.smtp_port.max(1);
        self.catalog_delay_ms = self.catalog_delay_ms.min(MAX_CATALOG_DELAY_MS);
        if self.bind_address.trim().is_empty() {
            self.bind_address = default_bind_address();
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        let mut settings: Self = from_str(&contents)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let xml = to_string(self)?;
        let formatted = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", xml);
        fs::write(path, formatted)?;
        Ok(())
    }

    pub fn catalog_delay(&self) -> Duration {
        Duration::from_millis(self.catalog_delay_ms)
    }

    /// Brand settings file, falling back to the config directory, then the
    /// working directory
    pub fn brand_settings_file(&self) -> PathBuf {
        self.brand_settings_path
            .clone()
            .or_else(crate::brand::BrandSettingsStore::default_path)
            .unwrap_or_else(|| PathBuf::from("brand-settings.json"))
    }
}

/// Settings error type
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::DeError),
    #[error("XML write error: {0}")]
    XmlWrite(#[from] quick_xml::SeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ServerSettings::default();
        assert_eq!(settings.api_port, 5000);
        assert_eq!(settings.catalog_delay(), Duration::from_millis(500));
        assert_eq!(settings.smtp_host, "smtp.gmail.com");
        assert_eq!(settings.smtp_port, 465);
        assert_eq!(settings.deform_rule_set, RuleSet::Basic);
        assert!(settings.cors_enabled);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tryon.xml");
        fs::write(
            &path,
            "<TryOnServer><apiPort>8080</apiPort><deformRuleSet>extended</deformRuleSet></TryOnServer>",
        )
        .unwrap();

        let settings = ServerSettings::load_from_file(&path).unwrap();
        assert_eq!(settings.api_port, 8080);
        assert_eq!(settings.deform_rule_set, RuleSet::Extended);
        assert_eq!(settings.asset_dir, PathBuf::from("public"));
        assert_eq!(settings.catalog_delay_ms, 500);
    }

    #[test]
    fn test_sanitize_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tryon.xml");
        fs::write(
            &path,
            "<TryOnServer><apiPort>0</apiPort><catalogDelayMs>60000</catalogDelayMs></TryOnServer>",
        )
        .unwrap();

        let settings = ServerSettings::load_from_file(&path).unwrap();
        assert_eq!(settings.api_port, 1);
        assert_eq!(settings.catalog_delay_ms, MAX_CATALOG_DELAY_MS);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("tryon.xml");
        let settings = ServerSettings {
            owner_email: "bookings@acme.example".to_string(),
            brand_settings_path: Some(PathBuf::from("/tmp/brand.json")),
            ..Default::default()
        };
        settings.save_to_file(&path).unwrap();
        assert_eq!(ServerSettings::load_from_file(&path).unwrap(), settings);
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.xml");
        assert!(matches!(
            ServerSettings::resolve(Some(&missing)),
            Err(SettingsError::Io(_))
        ));
    }
}
