//! Generated outfits and the history they are recorded in.

use super::one_or_many::OneOrMany;
use super::Article;
use crate::error::{Result, WardrobeError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// One combination of articles, grouped by article type.
///
/// An outfit always holds at least one article; slots without articles are
/// not stored. Articles are snapshots: deleting an article from the catalog
/// leaves past outfits untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OutfitRecord")]
pub struct Outfit {
    id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    slots: BTreeMap<String, Vec<Article>>,
}

/// Wire shape of an outfit: `{id, created_at?, <type>: article-or-articles}`.
#[derive(Deserialize)]
struct OutfitRecord {
    id: Uuid,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    slots: BTreeMap<String, OneOrMany<Article>>,
}

impl TryFrom<OutfitRecord> for Outfit {
    type Error = WardrobeError;

    fn try_from(record: OutfitRecord) -> Result<Self> {
        let slots = record
            .slots
            .into_iter()
            .map(|(article_type, articles)| (article_type, Vec::from(articles)))
            .collect();
        Self::build(record.id, record.created_at, slots)
    }
}

impl Outfit {
    /// Creates an outfit from per-type selections.
    ///
    /// # Errors
    ///
    /// Returns [`WardrobeError::EmptyOutfit`] if no slot holds an article.
    pub fn new(slots: BTreeMap<String, Vec<Article>>) -> Result<Self> {
        Self::build(Uuid::new_v4(), Some(Utc::now()), slots)
    }

    fn build(
        id: Uuid,
        created_at: Option<DateTime<Utc>>,
        mut slots: BTreeMap<String, Vec<Article>>,
    ) -> Result<Self> {
        slots.retain(|_, articles| !articles.is_empty());
        if slots.is_empty() {
            return Err(WardrobeError::EmptyOutfit);
        }
        Ok(Self {
            id,
            created_at,
            slots,
        })
    }

    /// Stable identity.
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// When the outfit was generated, if recorded.
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Non-empty slots keyed by article type.
    pub fn slots(&self) -> &BTreeMap<String, Vec<Article>> {
        &self.slots
    }

    /// Articles in one slot.
    pub fn articles(&self, article_type: &str) -> &[Article] {
        self.slots
            .get(article_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every article, slot by slot.
    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.slots.values().flatten()
    }

    /// Total number of articles.
    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total price of all articles.
    pub fn total_price(&self) -> f64 {
        self.iter().map(Article::price).sum()
    }
}

impl fmt::Display for Outfit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Outfit {}", self.id)?;
        if let Some(created_at) = self.created_at {
            write!(f, " ({})", created_at.format("%Y-%m-%d %H:%M UTC"))?;
        }
        writeln!(f)?;
        for (article_type, articles) in &self.slots {
            for article in articles {
                writeln!(f, "  {article_type:<12} {article}")?;
            }
        }
        write!(f, "  {:<12} ${:.2}", "total", self.total_price())
    }
}

/// Ordered record of generated outfits, oldest first.
///
/// Grows by [`OutfitHistory::append`] and can only be emptied wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutfitHistory {
    outfits: Vec<Outfit>,
}

impl OutfitHistory {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an outfit at the end.
    pub fn append(&mut self, outfit: Outfit) {
        self.outfits.push(outfit);
    }

    /// Drops every recorded outfit.
    pub fn clear(&mut self) {
        self.outfits.clear();
    }

    /// All outfits, oldest first.
    pub fn list(&self) -> &[Outfit] {
        &self.outfits
    }

    /// Most recent outfit.
    pub fn last(&self) -> Option<&Outfit> {
        self.outfits.last()
    }

    /// Number of outfits.
    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }
}
