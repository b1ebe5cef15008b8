use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use sokha_core::Locale;

use crate::error::ClientError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// On-device configuration for a kiosk installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Base URL of the questionnaire backend.
    pub base_url: String,
    /// Locale the device boots into; the respondent can still switch.
    pub default_locale: Locale,
    /// Human-readable device label shown in the admin dashboard. Added in
    /// v1; older configs get a generated label on load.
    #[serde(default)]
    pub device_label: String,
    pub created_at: jiff::Timestamp,
}

impl DeviceConfig {
    pub fn new(base_url: impl Into<String>, default_locale: Locale) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            base_url: base_url.into(),
            default_locale,
            device_label: generated_label(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

fn generated_label() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("device-{}", &id[..8])
}

fn config_dir() -> Result<PathBuf, ClientError> {
    let base = dirs::config_dir().ok_or(ClientError::NoConfigDir)?;
    Ok(base.join("org.sokha.kiosk"))
}

fn config_path() -> Result<PathBuf, ClientError> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> Result<DeviceConfig, ClientError> {
    let path = config_path()?;
    let contents = std::fs::read_to_string(&path).map_err(|source| ClientError::ReadConfig {
        path: path.clone(),
        source,
    })?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: DeviceConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, ClientError> {
    if from_version > CURRENT_VERSION {
        return Err(ClientError::VersionTooNew {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: add device_label (generated; pre-v1 installs were unnamed)
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(ClientError::MalformedConfig)?;
        obj.entry("device_label")
            .or_insert_with(|| serde_json::Value::String(generated_label()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added device_label)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(config: &DeviceConfig) -> Result<(), ClientError> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Set restrictive permissions on Unix before renaming
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn delete_config() -> Result<(), ClientError> {
    let path = config_path()?;
    if path.exists() {
        std::fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}
