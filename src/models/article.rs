//! Clothing article records.

use crate::constants::{WEATHER_ALL_LEGACY, WEATHER_ANY};
use crate::error::{Result, WardrobeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Input for creating an [`Article`].
///
/// Fields are validated and normalized by [`Article::new`]; nothing here is
/// trusted until then.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewArticle {
    /// Top-level category (e.g. "hat")
    pub article_type: String,
    /// Category-specific classification (e.g. "beanie")
    pub subtype: String,
    /// Free-text description
    pub description: String,
    /// Color names
    pub colors: Vec<String>,
    /// Weather tags, or "any"
    pub weather: Vec<String>,
    /// Price, must be finite and non-negative
    pub price: f64,
}

/// A single clothing item.
///
/// # Validation
///
/// - Type, subtype and description must be non-empty
/// - At least one color and one weather tag
/// - Colors and weather tags are lowercased, trimmed and deduplicated
/// - A weather set containing "any" (or the legacy "all") collapses to `["any"]`
/// - Price must be finite and non-negative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ArticleRecord")]
pub struct Article {
    id: Uuid,
    article_type: String,
    subtype: String,
    description: String,
    colors: Vec<String>,
    weather: Vec<String>,
    price: f64,
}

/// Wire shape of an article; every field is required.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticleRecord {
    id: Uuid,
    article_type: String,
    subtype: String,
    description: String,
    #[serde(deserialize_with = "super::one_or_many::deserialize")]
    colors: Vec<String>,
    #[serde(deserialize_with = "super::one_or_many::deserialize")]
    weather: Vec<String>,
    price: f64,
}

impl TryFrom<ArticleRecord> for Article {
    type Error = WardrobeError;

    fn try_from(record: ArticleRecord) -> Result<Self> {
        Article::with_id(
            record.id,
            NewArticle {
                article_type: record.article_type,
                subtype: record.subtype,
                description: record.description,
                colors: record.colors,
                weather: record.weather,
                price: record.price,
            },
        )
    }
}

impl Article {
    /// Creates a new article with a fresh identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use wardrobe::models::{Article, NewArticle};
    ///
    /// let hat = Article::new(NewArticle {
    ///     article_type: "hat".into(),
    ///     subtype: "beanie".into(),
    ///     description: "Grey wool beanie".into(),
    ///     colors: vec!["Gray".into()],
    ///     weather: vec!["cold".into()],
    ///     price: 25.0,
    /// })
    /// .unwrap();
    /// assert_eq!(hat.colors(), ["gray"]);
    /// ```
    pub fn new(new: NewArticle) -> Result<Self> {
        Self::with_id(Uuid::new_v4(), new)
    }

    /// Creates an article with a known identity.
    pub fn with_id(id: Uuid, new: NewArticle) -> Result<Self> {
        let article_type = required_text("articleType", &new.article_type)?;
        let subtype = required_text("subtype", &new.subtype)?;
        let description = required_text("description", &new.description)?;

        let colors = normalize_tags(&new.colors);
        if colors.is_empty() {
            return Err(WardrobeError::InvalidArticle(
                "at least one color is required".to_string(),
            ));
        }

        let mut weather: Vec<String> = normalize_tags(&new.weather)
            .into_iter()
            .map(|tag| {
                if tag == WEATHER_ALL_LEGACY {
                    WEATHER_ANY.to_string()
                } else {
                    tag
                }
            })
            .collect();
        if weather.is_empty() {
            return Err(WardrobeError::InvalidArticle(
                "at least one weather tag is required".to_string(),
            ));
        }
        if weather.iter().any(|tag| tag == WEATHER_ANY) {
            weather = vec![WEATHER_ANY.to_string()];
        }

        if !new.price.is_finite() || new.price < 0.0 {
            return Err(WardrobeError::InvalidArticle(format!(
                "price must be a non-negative number, got {}",
                new.price
            )));
        }

        Ok(Self {
            id,
            article_type,
            subtype,
            description,
            colors,
            weather,
            price: new.price,
        })
    }

    /// Stable identity.
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Top-level category.
    pub fn article_type(&self) -> &str {
        &self.article_type
    }

    /// Category-specific classification.
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Lowercase color names.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Weather tags.
    pub fn weather(&self) -> &[String] {
        &self.weather
    }

    /// Price.
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// True if the article is suitable for `tag`, or for any weather.
    pub fn suits_weather(&self, tag: &str) -> bool {
        self.weather.iter().any(|w| w == tag || w == WEATHER_ANY)
    }

    /// True if any of the article's colors is in `colors`.
    pub fn has_any_color<S: AsRef<str>>(&self, colors: &[S]) -> bool {
        self.colors
            .iter()
            .any(|own| colors.iter().any(|c| c.as_ref() == own))
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}/{}] {} ({}; {}) ${:.2}",
            self.article_type,
            self.subtype,
            self.description,
            self.colors.join(", "),
            self.weather.join(", "),
            self.price
        )
    }
}

fn required_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(WardrobeError::InvalidArticle(format!(
            "{field} cannot be empty"
        )));
    }
    Ok(trimmed.to_string())
}

/// Trims, lowercases and deduplicates tags, keeping first-seen order.
pub(crate) fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}
