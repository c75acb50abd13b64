use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::icon_spec::IconSpec;

pub const MANIFEST_FILENAME: &str = "Contents.json";
pub const WATCH_IDIOM: &str = "watch";
pub const MANIFEST_AUTHOR: &str = "xcode";
pub const MANIFEST_VERSION: u32 = 1;

/// `Contents.json` for an `.appiconset` directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<GeneratedEntry>,
    pub info: ManifestInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedEntry {
    pub filename: String,
    pub idiom: String,
    pub role: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            author: MANIFEST_AUTHOR.to_string(),
            version: MANIFEST_VERSION,
        }
    }
}

impl From<&IconSpec> for GeneratedEntry {
    fn from(spec: &IconSpec) -> Self {
        Self {
            filename: spec.filename.to_string(),
            idiom: WATCH_IDIOM.to_string(),
            role: spec.role.to_string(),
            size: spec.size.to_string(),
        }
    }
}

impl Manifest {
    pub fn new(images: Vec<GeneratedEntry>) -> Self {
        Self {
            images,
            info: ManifestInfo::default(),
        }
    }

    /// Two-space indented JSON, keys in declaration order.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize manifest")
    }

    /// Write `Contents.json` into `target_dir`, replacing any previous one.
    pub fn write_to_dir(&self, target_dir: &Path) -> Result<PathBuf> {
        let path = target_dir.join(MANIFEST_FILENAME);
        let json = self.to_json()?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
        log::debug!("wrote manifest with {} images to {}", self.images.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_from_spec_uses_watch_idiom() {
        let spec = IconSpec {
            size: "40x40",
            role: "appLauncher",
            filename: "AppIcon-40.png",
        };
        let entry = GeneratedEntry::from(&spec);
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({
                "filename": "AppIcon-40.png",
                "idiom": "watch",
                "role": "appLauncher",
                "size": "40x40"
            })
        );
    }

    #[test]
    fn manifest_json_layout() {
        let manifest = Manifest::new(vec![GeneratedEntry::from(&IconSpec {
            size: "27.5x27.5",
            role: "notificationCenter",
            filename: "AppIcon-27.5.png",
        })]);

        let expected = r#"{
  "images": [
    {
      "filename": "AppIcon-27.5.png",
      "idiom": "watch",
      "role": "notificationCenter",
      "size": "27.5x27.5"
    }
  ],
  "info": {
    "author": "xcode",
    "version": 1
  }
}"#;
        assert_eq!(manifest.to_json().unwrap(), expected);
    }

    #[test]
    fn empty_manifest_still_carries_info() {
        let value = serde_json::to_value(Manifest::new(Vec::new())).unwrap();
        assert_eq!(value["images"], serde_json::json!([]));
        assert_eq!(value["info"]["author"], "xcode");
        assert_eq!(value["info"]["version"], 1);
    }
}
