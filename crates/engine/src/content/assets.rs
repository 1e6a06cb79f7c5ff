use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::AppPaths;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Error)]
pub enum MissingAssetError {
    #[error("asset manifest unreadable at {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("asset manifest at {path} is not valid JSON: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("level file '{file}' declared in manifest is unreadable: {source}")]
    LevelRead {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("no level declared at index {index} (manifest declares {count})")]
    LevelIndex { index: usize, count: usize },
    #[error("image key '{key}' is not declared in the asset manifest")]
    ImageKey { key: String },
    #[error("audio key '{key}' is not declared in the asset manifest")]
    AudioKey { key: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageEntry {
    pub key: String,
    pub file: String,
    #[serde(default)]
    pub frame_width: Option<u32>,
    #[serde(default)]
    pub frame_height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AudioEntry {
    pub key: String,
    pub file: String,
}

/// Declares everything the game expects to find under `assets/`: level
/// documents plus the image and audio keys gameplay code refers to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetManifest {
    pub levels: Vec<String>,
    #[serde(default)]
    pub images: Vec<ImageEntry>,
    #[serde(default)]
    pub audio: Vec<AudioEntry>,
}

/// Loaded asset set. Level text is read eagerly so a broken install fails
/// at startup; image and audio entries stay opaque keys since decoding
/// backends live outside this crate.
#[derive(Debug)]
pub struct AssetCatalog {
    level_texts: Vec<String>,
    image_keys: HashSet<String>,
    audio_keys: HashSet<String>,
}

impl AssetCatalog {
    pub fn load(paths: &AppPaths) -> Result<Self, MissingAssetError> {
        let manifest_path = paths.assets_dir.join(MANIFEST_FILE);
        let raw = fs::read_to_string(&manifest_path).map_err(|source| {
            MissingAssetError::ManifestRead {
                path: manifest_path.clone(),
                source,
            }
        })?;
        let manifest: AssetManifest =
            serde_json::from_str(&raw).map_err(|source| MissingAssetError::ManifestParse {
                path: manifest_path,
                source,
            })?;

        let mut level_texts = Vec::with_capacity(manifest.levels.len());
        for file in &manifest.levels {
            let text = fs::read_to_string(paths.data_dir.join(file)).map_err(|source| {
                MissingAssetError::LevelRead {
                    file: file.clone(),
                    source,
                }
            })?;
            level_texts.push(text);
        }

        info!(
            levels = level_texts.len(),
            images = manifest.images.len(),
            audio = manifest.audio.len(),
            "assets_loaded"
        );

        Ok(Self::from_parts(
            level_texts,
            manifest.images.iter().map(|entry| entry.key.clone()),
            manifest.audio.iter().map(|entry| entry.key.clone()),
        ))
    }

    pub fn from_parts(
        level_texts: Vec<String>,
        image_keys: impl IntoIterator<Item = String>,
        audio_keys: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            level_texts,
            image_keys: image_keys.into_iter().collect(),
            audio_keys: audio_keys.into_iter().collect(),
        }
    }

    pub fn level_count(&self) -> usize {
        self.level_texts.len()
    }

    pub fn level_text(&self, index: usize) -> Result<&str, MissingAssetError> {
        self.level_texts
            .get(index)
            .map(String::as_str)
            .ok_or(MissingAssetError::LevelIndex {
                index,
                count: self.level_texts.len(),
            })
    }

    pub fn require_image(&self, key: &str) -> Result<(), MissingAssetError> {
        if self.image_keys.contains(key) {
            Ok(())
        } else {
            Err(MissingAssetError::ImageKey {
                key: key.to_string(),
            })
        }
    }

    pub fn require_audio(&self, key: &str) -> Result<(), MissingAssetError> {
        if self.audio_keys.contains(key) {
            Ok(())
        } else {
            Err(MissingAssetError::AudioKey {
                key: key.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths_in(dir: &std::path::Path) -> AppPaths {
        AppPaths {
            root: dir.to_path_buf(),
            assets_dir: dir.join("assets"),
            data_dir: dir.join("assets").join("data"),
        }
    }

    fn write_manifest(dir: &std::path::Path, manifest: &str) {
        fs::create_dir_all(dir.join("assets").join("data")).expect("mkdir");
        fs::write(dir.join("assets").join(MANIFEST_FILE), manifest).expect("write manifest");
    }

    #[test]
    fn load_reads_declared_levels_eagerly() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_manifest(
            dir.path(),
            r#"{
                "levels": ["level00.json"],
                "images": [{"key": "hero", "file": "hero.png"}],
                "audio": [{"key": "sfx:jump", "file": "jump.wav"}]
            }"#,
        );
        fs::write(
            dir.path().join("assets").join("data").join("level00.json"),
            "{\"platforms\": []}",
        )
        .expect("write level");

        let catalog = AssetCatalog::load(&paths_in(dir.path())).expect("catalog");
        assert_eq!(catalog.level_count(), 1);
        assert_eq!(catalog.level_text(0).expect("level"), "{\"platforms\": []}");
        assert!(catalog.require_image("hero").is_ok());
        assert!(catalog.require_audio("sfx:jump").is_ok());
    }

    #[test]
    fn missing_level_file_fails_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_manifest(dir.path(), r#"{"levels": ["level99.json"]}"#);

        let error = AssetCatalog::load(&paths_in(dir.path())).expect_err("must fail");
        assert!(matches!(error, MissingAssetError::LevelRead { .. }));
    }

    #[test]
    fn malformed_manifest_fails_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_manifest(dir.path(), "{not json");

        let error = AssetCatalog::load(&paths_in(dir.path())).expect_err("must fail");
        assert!(matches!(error, MissingAssetError::ManifestParse { .. }));
    }

    #[test]
    fn undeclared_keys_are_reported_by_name() {
        let catalog = AssetCatalog::from_parts(Vec::new(), std::iter::empty(), std::iter::empty());

        let image = catalog.require_image("ghost").expect_err("image");
        assert!(image.to_string().contains("ghost"));
        let level = catalog.level_text(2).expect_err("level");
        assert!(matches!(
            level,
            MissingAssetError::LevelIndex { index: 2, count: 0 }
        ));
    }
}
