//! Random outfit generation.

use crate::constants::{ACCESSORY_TYPE, MAX_ACCESSORIES};
use crate::error::Result;
use crate::models::{Article, Catalog, Criteria, FixedData, Outfit, OutfitHistory};
use crate::services::filters::FilterPipeline;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Assembles outfits by filtering each article type and picking at random.
///
/// The random source is injected so that generation is reproducible under a
/// fixed seed.
pub struct OutfitGenerator<'f, R> {
    fixed: &'f FixedData,
    pipeline: FilterPipeline<'f>,
    rng: R,
}

impl<'f> OutfitGenerator<'f, StdRng> {
    /// Generator with a deterministic seed.
    pub fn seeded(fixed: &'f FixedData, seed: u64) -> Self {
        Self::new(fixed, StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy(fixed: &'f FixedData) -> Self {
        Self::new(fixed, StdRng::from_entropy())
    }
}

impl<'f, R: Rng> OutfitGenerator<'f, R> {
    /// Generator using the standard filter pipeline.
    pub fn new(fixed: &'f FixedData, rng: R) -> Self {
        Self::with_pipeline(fixed, FilterPipeline::new(fixed), rng)
    }

    /// Generator using a custom pipeline.
    pub fn with_pipeline(fixed: &'f FixedData, pipeline: FilterPipeline<'f>, rng: R) -> Self {
        Self {
            fixed,
            pipeline,
            rng,
        }
    }

    /// Picks an outfit without recording it.
    ///
    /// Every declared article type is filtered independently. A type with no
    /// remaining candidates is left out, and so are catalog lists under types
    /// the fixed data no longer declares. The accessory type gets between one
    /// and four distinct articles, every other type exactly one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WardrobeError::EmptyOutfit`] if no type has a
    /// candidate left.
    pub fn select(&mut self, catalog: &Catalog, criteria: &Criteria) -> Result<Outfit> {
        for (key, value) in &criteria.ignored {
            debug!(key = %key, value = %value, "Ignoring unrecognized criterion");
        }

        let mut slots: BTreeMap<String, Vec<Article>> = BTreeMap::new();

        for article_type in self.fixed.article_types() {
            let candidates = self.pipeline.apply(criteria, catalog.articles(article_type));
            if candidates.is_empty() {
                debug!(article_type, "No candidates left after filtering");
                continue;
            }

            let picked: Vec<Article> = if article_type == ACCESSORY_TYPE {
                let wanted = self.rng.gen_range(1..=MAX_ACCESSORIES);
                let count = wanted.min(candidates.len());
                candidates
                    .choose_multiple(&mut self.rng, count)
                    .map(|a| (*a).clone())
                    .collect()
            } else {
                candidates
                    .choose(&mut self.rng)
                    .map(|a| vec![(*a).clone()])
                    .unwrap_or_default()
            };

            debug!(
                article_type,
                candidates = candidates.len(),
                picked = picked.len(),
                "Selected articles"
            );
            slots.insert(article_type.to_string(), picked);
        }

        Outfit::new(slots)
    }

    /// Picks an outfit and appends it to `history`.
    ///
    /// Nothing is recorded when selection fails.
    pub fn generate(
        &mut self,
        catalog: &Catalog,
        criteria: &Criteria,
        history: &mut OutfitHistory,
    ) -> Result<Outfit> {
        let outfit = self.select(catalog, criteria)?;
        info!(id = %outfit.id(), articles = outfit.len(), "Generated outfit");
        history.append(outfit.clone());
        Ok(outfit)
    }
}
