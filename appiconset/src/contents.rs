use crate::target::{TargetSpec, MASTER_SIZE};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONTENTS_JSON: &str = "Contents.json";

/// `Contents.json` of an icon set.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Contents {
    #[serde(default)]
    pub images: Vec<ImageEntry>,
    #[serde(default)]
    pub info: Info,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ImageEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idiom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
}

impl ImageEntry {
    pub fn new(spec: &TargetSpec, filename: String) -> Self {
        Self {
            idiom: Some(spec.idiom.into()),
            platform: Some(spec.platform.into()),
            size: Some(spec.size.into()),
            filename: Some(filename),
            scale: spec.scale.map(Into::into),
        }
    }

    fn is_master(&self) -> bool {
        self.size.as_deref() == Some(MASTER_SIZE)
    }

    fn filename(&self) -> Option<&str> {
        self.filename.as_deref().filter(|name| !name.is_empty())
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Info {
    pub author: String,
    pub version: u32,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            author: "xcode".into(),
            version: 1,
        }
    }
}

impl Contents {
    pub fn new(images: Vec<ImageEntry>) -> Self {
        Self {
            images,
            info: Info::default(),
        }
    }

    pub fn read(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Names of all files referenced by an image entry.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.images.iter().filter_map(|entry| entry.filename())
    }

    fn master(&self) -> Option<&ImageEntry> {
        self.images.iter().find(|entry| entry.is_master())
    }
}

/// The source image an icon set is generated from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MasterImage {
    pub filename: String,
    pub path: PathBuf,
}

/// Returns whether `dir` contains a `Contents.json` with a named 1024x1024
/// entry. Unreadable manifests count as `false`.
pub fn has_master_entry(dir: &Path) -> bool {
    let path = dir.join(CONTENTS_JSON);
    if !path.exists() {
        return false;
    }
    match Contents::read(&path) {
        Ok(contents) => contents
            .images
            .iter()
            .any(|entry| entry.is_master() && entry.filename().is_some()),
        Err(err) => {
            tracing::warn!("skipping {}: {}", dir.display(), err);
            false
        }
    }
}

pub fn load_master_image(dir: &Path) -> Result<MasterImage> {
    let path = dir.join(CONTENTS_JSON);
    if !path.exists() {
        return Err(Error::ManifestMissing(dir.to_path_buf()));
    }
    let contents = Contents::read(&path)?;
    let master = contents
        .master()
        .ok_or_else(|| Error::NoMasterEntry(path.clone()))?;
    let filename = master
        .filename()
        .ok_or_else(|| Error::MissingFilename(path.clone()))?;
    let source = dir.join(filename);
    if !source.exists() {
        return Err(Error::SourceFileMissing(source));
    }
    Ok(MasterImage {
        filename: filename.to_string(),
        path: source,
    })
}
