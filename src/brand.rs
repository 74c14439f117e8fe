//! Brand settings
//!
//! Theme configuration for the try-on widget, persisted as a flat JSON object.
//! Fields present in the file override the defaults; missing fields keep them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_name() -> String {
    "Fashion Brand".to_string()
}

fn default_primary_color() -> String {
    "#3b82f6".to_string()
}

fn default_secondary_color() -> String {
    "#f97316".to_string()
}

fn default_accent_color() -> String {
    "#10b981".to_string()
}

fn default_font_family() -> String {
    "Inter, sans-serif".to_string()
}

/// Widget theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandSettings {
    #[serde(default = "default_name")]
    pub name: String,

    /// Logo URL or data URI; empty for none
    #[serde(default)]
    pub logo: String,

    #[serde(rename = "primaryColor", default = "default_primary_color")]
    pub primary_color: String,

    #[serde(rename = "secondaryColor", default = "default_secondary_color")]
    pub secondary_color: String,

    #[serde(rename = "accentColor", default = "default_accent_color")]
    pub accent_color: String,

    #[serde(rename = "fontFamily", default = "default_font_family")]
    pub font_family: String,
}

impl Default for BrandSettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            logo: String::new(),
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            accent_color: default_accent_color(),
            font_family: default_font_family(),
        }
    }
}

/// Partial edit; only the present fields change
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandSettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl BrandSettingsUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge present fields into `settings`
    pub fn apply_to(self, settings: &mut BrandSettings) {
        let fields = [
            (self.name, &mut settings.name),
            (self.logo, &mut settings.logo),
            (self.primary_color, &mut settings.primary_color),
            (self.secondary_color, &mut settings.secondary_color),
            (self.accent_color, &mut settings.accent_color),
            (self.font_family, &mut settings.font_family),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

/// Errors persisting brand settings
#[derive(Debug, thiserror::Error)]
pub enum BrandSettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Brand settings bound to their backing file
#[derive(Debug, Clone)]
pub struct BrandSettingsStore {
    path: PathBuf,
    settings: BrandSettings,
}

impl BrandSettingsStore {
    /// Default location under the user config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("TryOnServer");
            p.push("brand-settings.json");
            p
        })
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = Self::read(&path);
        Self { path, settings }
    }

    fn read(path: &Path) -> BrandSettings {
        if !path.exists() {
            return BrandSettings::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(BrandSettingsError::from)
            .and_then(|contents| serde_json::from_str(&contents).map_err(BrandSettingsError::from));

        match parsed {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable brand settings");
                BrandSettings::default()
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &BrandSettings {
        &self.settings
    }

    /// Merge a partial edit and persist.
    ///
    /// In-memory settings change only once the file is written.
    pub fn update(&mut self, update: BrandSettingsUpdate) -> Result<&BrandSettings, BrandSettingsError> {
        let mut next = self.settings.clone();
        update.apply_to(&mut next);
        self.commit(next)
    }

    /// Restore defaults and persist
    pub fn reset(&mut self) -> Result<&BrandSettings, BrandSettingsError> {
        self.commit(BrandSettings::default())
    }

    /// Write the settings file, creating parent directories
    pub fn save(&self) -> Result<(), BrandSettingsError> {
        Self::write(&self.path, &self.settings)
    }

    fn commit(&mut self, next: BrandSettings) -> Result<&BrandSettings, BrandSettingsError> {
        Self::write(&self.path, &next)?;
        self.settings = next;
        Ok(&self.settings)
    }

    fn write(path: &Path, settings: &BrandSettings) -> Result<(), BrandSettingsError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(path, json)?;
        tracing::debug!(path = %path.display(), "Brand settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = BrandSettings::default();
        assert_eq!(settings.name, "Fashion Brand");
        assert_eq!(settings.logo, "");
        assert_eq!(settings.primary_color, "#3b82f6");
        assert_eq!(settings.font_family, "Inter, sans-serif");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = BrandSettingsStore::load(dir.path().join("brand.json"));
        assert_eq!(store.settings(), &BrandSettings::default());
    }

    #[test]
    fn test_partial_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brand.json");
        fs::write(&path, r##"{"name":"Acme","accentColor":"#000000"}"##).unwrap();

        let store = BrandSettingsStore::load(&path);
        assert_eq!(store.settings().name, "Acme");
        assert_eq!(store.settings().accent_color, "#000000");
        assert_eq!(store.settings().primary_color, "#3b82f6");
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brand.json");
        fs::write(&path, "{not json").unwrap();
        let store = BrandSettingsStore::load(&path);
        assert_eq!(store.settings(), &BrandSettings::default());
    }

    #[test]
    fn test_update_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("brand.json");

        let mut store = BrandSettingsStore::load(&path);
        store
            .update(BrandSettingsUpdate {
                primary_color: Some("#111111".to_string()),
                ..Default::default()
            })
            .unwrap();

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["primaryColor"], "#111111");
        assert_eq!(raw["name"], "Fashion Brand");

        let reloaded = BrandSettingsStore::load(&path);
        assert_eq!(reloaded.settings().primary_color, "#111111");
    }

    #[test]
    fn test_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brand.json");
        let mut store = BrandSettingsStore::load(&path);
        store
            .update(BrandSettingsUpdate {
                name: Some("Other".to_string()),
                ..Default::default()
            })
            .unwrap();
        store.reset().unwrap();
        assert_eq!(BrandSettingsStore::load(&path).settings(), &BrandSettings::default());
    }

    #[test]
    fn test_failed_save_keeps_previous_settings() {
        let dir = tempfile::tempdir().unwrap();
        // The parent "directory" is a regular file, so every write fails
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let mut store = BrandSettingsStore::load(blocker.join("brand.json"));

        let result = store.update(BrandSettingsUpdate {
            name: Some("Unsaved".to_string()),
            ..Default::default()
        });
        assert!(matches!(result, Err(BrandSettingsError::Io(_))));
        assert_eq!(store.settings(), &BrandSettings::default());

        let mut store = BrandSettingsStore {
            path: blocker.join("brand.json"),
            settings: BrandSettings {
                name: "Custom".to_string(),
                ..Default::default()
            },
        };
        assert!(store.reset().is_err());
        assert_eq!(store.settings().name, "Custom");
    }

    #[test]
    fn test_update_wire_format() {
        let update: BrandSettingsUpdate = serde_json::from_str(r#"{"fontFamily":"Roboto"}"#).unwrap();
        assert!(!update.is_empty());
        let mut settings = BrandSettings::default();
        update.apply_to(&mut settings);
        assert_eq!(settings.font_family, "Roboto");
        assert_eq!(settings.name, "Fashion Brand");
    }
}
