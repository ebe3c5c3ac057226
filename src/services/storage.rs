//! File I/O for the fixed configuration and the wardrobe data document.
//!
//! Both documents are JSON and are always written whole, through a temp file
//! and a rename, so a crash mid-write leaves the previous version in place.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::models::{Article, Catalog, FixedData, OutfitHistory, Repair};

/// Fixed configuration together with the repairs made while loading it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedFixedData {
    /// Repaired, symmetric configuration
    pub data: FixedData,
    /// Reverse edges added to the compatibility graph
    pub repairs: Vec<Repair>,
}

/// Service for the fixed configuration document.
pub struct FixedDataService;

impl FixedDataService {
    /// Loads the fixed configuration and makes its compatibility graph symmetric.
    ///
    /// If any edge had to be added, the `compatibility` member of the file is
    /// rewritten so the fix survives restarts. Every other member is written
    /// back exactly as it was read.
    ///
    /// # Errors
    ///
    /// A missing or malformed file, or a color referenced without an entry of
    /// its own, is fatal: nothing can run without valid fixed data.
    pub fn load(path: &Path) -> Result<LoadedFixedData> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixed data from {}", path.display()))?;

        let mut document = Self::parse_document(&content)
            .with_context(|| format!("Invalid fixed data in {}", path.display()))?;
        let loaded = Self::from_document(&document)
            .with_context(|| format!("Invalid fixed data in {}", path.display()))?;

        if !loaded.repairs.is_empty() {
            info!(
                repairs = loaded.repairs.len(),
                path = %path.display(),
                "Writing repaired compatibility data"
            );
            let compatibility = serde_json::to_value(&loaded.data.compatibility)
                .context("Failed to serialize compatibility data")?;
            if let Some(members) = document.as_object_mut() {
                members.insert("compatibility".to_string(), compatibility);
            }
            let json = serde_json::to_string_pretty(&document)
                .context("Failed to serialize fixed data")?;
            atomic_write(path, &json)
                .with_context(|| format!("Failed to save fixed data to {}", path.display()))?;
        }

        Ok(loaded)
    }

    /// Parses and repairs a fixed configuration document without touching disk.
    pub fn parse(content: &str) -> Result<LoadedFixedData> {
        Self::from_document(&Self::parse_document(content)?)
    }

    fn parse_document(content: &str) -> Result<Value> {
        serde_json::from_str(content).context("Failed to parse fixed data JSON")
    }

    fn from_document(document: &Value) -> Result<LoadedFixedData> {
        let mut data =
            FixedData::deserialize(document).context("Failed to parse fixed data JSON")?;
        data.normalize();
        let repairs = data.compatibility.enforce_symmetry()?;

        for warning in data.warnings() {
            warn!("{warning}");
        }

        Ok(LoadedFixedData { data, repairs })
    }

    /// Writes a fixed configuration document.
    pub fn save(data: &FixedData, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(data).context("Failed to serialize fixed data")?;
        atomic_write(path, &json)
            .with_context(|| format!("Failed to save fixed data to {}", path.display()))
    }
}

/// On-disk shape: one key per article type plus `outfit_history`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct WardrobeDocument {
    #[serde(flatten)]
    articles: BTreeMap<String, Vec<Article>>,
    #[serde(default)]
    outfit_history: OutfitHistory,
}

/// Service for the wardrobe data document.
pub struct WardrobeService;

impl WardrobeService {
    /// Loads the catalog and outfit history.
    ///
    /// A missing file yields an empty catalog and history; the file is
    /// created on the first save.
    pub fn load(path: &Path, fixed: &FixedData) -> Result<(Catalog, OutfitHistory)> {
        if !path.exists() {
            info!(path = %path.display(), "No wardrobe data yet, starting empty");
            return Ok((Catalog::new(fixed), OutfitHistory::new()));
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read wardrobe data from {}", path.display()))?;

        Self::parse(&content, fixed)
            .with_context(|| format!("Failed to load wardrobe data from {}", path.display()))
    }

    /// Parses a wardrobe document without touching disk.
    pub fn parse(content: &str, fixed: &FixedData) -> Result<(Catalog, OutfitHistory)> {
        let document: WardrobeDocument =
            serde_json::from_str(content).context("Failed to parse wardrobe JSON")?;
        let catalog = Catalog::from_articles(fixed, document.articles)?;
        Ok((catalog, document.outfit_history))
    }

    /// Serializes the catalog and history as one pretty-printed document.
    pub fn to_json(catalog: &Catalog, history: &OutfitHistory) -> Result<String> {
        let document = WardrobeDocument {
            articles: catalog.as_map().clone(),
            outfit_history: history.clone(),
        };
        serde_json::to_string_pretty(&document).context("Failed to serialize wardrobe data")
    }

    /// Saves the catalog and history, replacing the whole file.
    pub fn save(path: &Path, catalog: &Catalog, history: &OutfitHistory) -> Result<()> {
        let json = Self::to_json(catalog, history)?;
        atomic_write(path, &json)
            .with_context(|| format!("Failed to save wardrobe data to {}", path.display()))?;
        info!(
            path = %path.display(),
            articles = catalog.len(),
            outfits = history.len(),
            "Saved wardrobe"
        );
        Ok(())
    }
}

/// Writes `content` to a sibling temp file, then renames it over `path`.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut temp_name = OsString::from(path.as_os_str());
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}
