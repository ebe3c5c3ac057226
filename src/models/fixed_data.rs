//! Fixed configuration: classifications, colors, palettes, weather and uses.

use super::article::normalize_tags;
use super::{Article, CompatibilityGraph};
use crate::constants::{NEUTRAL_PALETTE, WEATHER_ANY};
use crate::error::{Result, WardrobeError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read-mostly configuration shared by the catalog, filters and generator.
///
/// Loaded once at startup (see [`crate::services::FixedDataService`]) and
/// passed by reference to every component that needs it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedData {
    /// Article type to allowed subtypes
    #[serde(alias = "article_types")]
    pub classifications: BTreeMap<String, Vec<String>>,
    /// Color compatibility graph
    pub compatibility: CompatibilityGraph,
    /// Palette name to colors
    pub palettes: BTreeMap<String, Vec<String>>,
    /// Allowed weather tags
    #[serde(default)]
    pub weather: Vec<String>,
    /// Use name to subtypes valid for that use
    #[serde(default)]
    pub uses: BTreeMap<String, Vec<String>>,
}

impl FixedData {
    /// Starter document written by `wardrobe init`.
    pub const STARTER_JSON: &'static str = include_str!("../data/fixed.json");

    /// Lowercases the color, palette, weather and use vocabulary so it
    /// compares equal to normalized articles and criteria.
    ///
    /// Type and subtype names keep their case, as articles do.
    pub fn normalize(&mut self) {
        self.compatibility.normalize();

        let mut palettes: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, colors) in std::mem::take(&mut self.palettes) {
            palettes
                .entry(name.trim().to_lowercase())
                .or_default()
                .extend(colors);
        }
        for colors in palettes.values_mut() {
            *colors = normalize_tags(colors);
        }
        self.palettes = palettes;

        self.weather = normalize_tags(&self.weather);

        let mut uses: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, subtypes) in std::mem::take(&mut self.uses) {
            let merged = uses.entry(name.trim().to_lowercase()).or_default();
            for subtype in subtypes {
                if !merged.contains(&subtype) {
                    merged.push(subtype);
                }
            }
        }
        self.uses = uses;
    }

    /// Declared article types, sorted.
    pub fn article_types(&self) -> impl Iterator<Item = &str> {
        self.classifications.keys().map(String::as_str)
    }

    /// Subtypes allowed for `article_type`.
    pub fn subtypes(&self, article_type: &str) -> Option<&[String]> {
        self.classifications.get(article_type).map(Vec::as_slice)
    }

    /// Colors of a palette as stored.
    pub fn palette(&self, name: &str) -> Option<&[String]> {
        self.palettes.get(name).map(Vec::as_slice)
    }

    /// Colors of `name` unioned with the neutral palette.
    ///
    /// Computed fresh on every call; stored palettes are never modified. An
    /// unknown palette contributes no colors of its own.
    pub fn palette_with_neutral(&self, name: &str) -> Vec<String> {
        let mut colors: Vec<String> = self.palette(name).map(<[String]>::to_vec).unwrap_or_default();
        for neutral in self.palette(NEUTRAL_PALETTE).unwrap_or_default() {
            if !colors.contains(neutral) {
                colors.push(neutral.clone());
            }
        }
        colors
    }

    /// Subtypes valid for a use.
    pub fn subtypes_for_use(&self, name: &str) -> Option<&[String]> {
        self.uses.get(name).map(Vec::as_slice)
    }

    /// True if `tag` is a declared weather tag or the "any" sentinel.
    pub fn is_weather_tag(&self, tag: &str) -> bool {
        tag == WEATHER_ANY || self.weather.iter().any(|w| w == tag)
    }

    /// Checks an article against the declared vocabulary.
    ///
    /// Weather tags are only checked when weather tags are declared, and
    /// colors only when the compatibility graph is non-empty.
    pub fn check_article(&self, article: &Article) -> Result<()> {
        let subtypes = self
            .subtypes(article.article_type())
            .ok_or_else(|| WardrobeError::UnknownArticleType(article.article_type().to_string()))?;

        if !subtypes.iter().any(|s| s == article.subtype()) {
            return Err(WardrobeError::UnknownSubtype {
                article_type: article.article_type().to_string(),
                subtype: article.subtype().to_string(),
            });
        }

        if !self.weather.is_empty() {
            if let Some(tag) = article.weather().iter().find(|t| !self.is_weather_tag(t)) {
                return Err(WardrobeError::InvalidArticle(format!(
                    "unknown weather tag '{tag}'"
                )));
            }
        }

        if !self.compatibility.is_empty() {
            if let Some(color) = article
                .colors()
                .iter()
                .find(|c| !self.compatibility.contains(c))
            {
                return Err(WardrobeError::InvalidArticle(format!(
                    "unknown color '{color}'"
                )));
            }
        }

        Ok(())
    }

    /// Non-fatal inconsistencies worth reporting.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.classifications.is_empty() {
            warnings.push("No article types are declared".to_string());
        }

        if !self.palettes.contains_key(NEUTRAL_PALETTE) {
            warnings.push(format!(
                "No '{NEUTRAL_PALETTE}' palette; palette filtering will not admit neutral colors"
            ));
        }

        for (name, colors) in &self.palettes {
            for color in colors {
                if !self.compatibility.contains(color) {
                    warnings.push(format!(
                        "Palette '{name}' lists color '{color}' which has no compatibility entry"
                    ));
                }
            }
        }

        for (name, subtypes) in &self.uses {
            for subtype in subtypes {
                let declared = self
                    .classifications
                    .values()
                    .any(|list| list.iter().any(|s| s == subtype));
                if !declared {
                    warnings.push(format!(
                        "Use '{name}' lists subtype '{subtype}' which no article type declares"
                    ));
                }
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewArticle;

    fn fixed() -> FixedData {
        serde_json::from_str(
            r#"{
                "classifications": {"hat": ["beanie", "cap"], "shirt": ["tee"]},
                "compatibility": {"red": ["gray"], "gray": ["red"], "blue": []},
                "palettes": {"warm": ["red"], "neutral": ["gray"]},
                "weather": ["cold", "hot"],
                "uses": {"casual": ["tee", "cap"], "sport": ["jersey"]}
            }"#,
        )
        .unwrap()
    }

    fn article(article_type: &str, subtype: &str, color: &str, weather: &str) -> Article {
        Article::new(NewArticle {
            article_type: article_type.to_string(),
            subtype: subtype.to_string(),
            description: "test".to_string(),
            colors: vec![color.to_string()],
            weather: vec![weather.to_string()],
            price: 1.0,
        })
        .unwrap()
    }

    #[test]
    fn test_legacy_classifications_key() {
        let data: FixedData = serde_json::from_str(
            r#"{"article_types": {"hat": ["cap"]}, "compatibility": {}, "palettes": {}}"#,
        )
        .unwrap();
        assert_eq!(data.subtypes("hat"), Some(&["cap".to_string()][..]));
        assert!(data.weather.is_empty());
    }

    #[test]
    fn test_missing_compatibility_is_rejected() {
        let result = serde_json::from_str::<FixedData>(
            r#"{"classifications": {}, "palettes": {}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_palette_with_neutral_does_not_mutate() {
        let data = fixed();
        let before = data.clone();

        assert_eq!(data.palette_with_neutral("warm"), vec!["red", "gray"]);
        assert_eq!(data.palette_with_neutral("warm"), vec!["red", "gray"]);
        assert_eq!(data, before);
    }

    #[test]
    fn test_palette_with_neutral_unknown_palette() {
        assert_eq!(fixed().palette_with_neutral("pastel"), vec!["gray"]);
        assert_eq!(fixed().palette_with_neutral("neutral"), vec!["gray"]);
    }

    #[test]
    fn test_check_article() {
        let data = fixed();
        assert!(data.check_article(&article("hat", "cap", "red", "cold")).is_ok());
        assert!(data.check_article(&article("hat", "cap", "red", "any")).is_ok());
        assert_eq!(
            data.check_article(&article("shoe", "boot", "red", "cold")),
            Err(WardrobeError::UnknownArticleType("shoe".to_string()))
        );
        assert!(matches!(
            data.check_article(&article("hat", "tee", "red", "cold")),
            Err(WardrobeError::UnknownSubtype { .. })
        ));
        assert!(data.check_article(&article("hat", "cap", "red", "windy")).is_err());
        assert!(data.check_article(&article("hat", "cap", "teal", "cold")).is_err());
    }

    #[test]
    fn test_normalize_matches_article_case() {
        let mut data: FixedData = serde_json::from_str(
            r#"{
                "classifications": {"hat": ["Cap"]},
                "compatibility": {"Red": ["Gray"], "gray": ["red"]},
                "palettes": {"Warm": ["Red"], "neutral": ["GRAY"]},
                "weather": ["Cold"],
                "uses": {"Casual": ["Cap"]}
            }"#,
        )
        .unwrap();
        data.normalize();

        assert_eq!(data.palette_with_neutral("warm"), vec!["red", "gray"]);
        assert!(data.is_weather_tag("cold"));
        assert_eq!(data.subtypes_for_use("casual"), Some(&["Cap".to_string()][..]));
        assert_eq!(data.subtypes("hat"), Some(&["Cap".to_string()][..]));
        assert!(data.check_article(&article("hat", "Cap", "RED", "cold")).is_ok());
        assert!(data.compatibility.is_symmetric());
    }

    #[test]
    fn test_warnings() {
        let warnings = fixed().warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("jersey"));
    }

    #[test]
    fn test_starter_document_parses() {
        let mut data: FixedData = serde_json::from_str(FixedData::STARTER_JSON).unwrap();
        assert!(data.compatibility.enforce_symmetry().unwrap().is_empty());
        assert!(data.subtypes(crate::constants::ACCESSORY_TYPE).is_some());
        assert!(data.palette(NEUTRAL_PALETTE).is_some());
        assert!(data.warnings().is_empty(), "{:?}", data.warnings());
    }
}
