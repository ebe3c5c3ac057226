//! Composable candidate filters for outfit generation.
//!
//! Each filter is a pure predicate over one article and the criteria. A
//! filter whose criterion is absent keeps everything, so filters compose in
//! any order with the same result.

use crate::models::{Article, Criteria, FixedData};
use tracing::trace;

/// A single narrowing step.
pub trait ArticleFilter {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// True if `article` survives this filter.
    fn keeps(&self, criteria: &Criteria, article: &Article) -> bool;

    /// Narrows `articles`, preserving order.
    fn apply<'a>(&self, criteria: &Criteria, mut articles: Vec<&'a Article>) -> Vec<&'a Article> {
        articles.retain(|a| self.keeps(criteria, a));
        articles
    }
}

/// Keeps articles whose subtype is valid for the requested use.
#[derive(Debug, Clone, Copy)]
pub struct UseFilter<'f> {
    fixed: &'f FixedData,
}

impl<'f> UseFilter<'f> {
    /// Creates the filter over the fixed use map.
    pub const fn new(fixed: &'f FixedData) -> Self {
        Self { fixed }
    }
}

impl ArticleFilter for UseFilter<'_> {
    fn name(&self) -> &'static str {
        "use"
    }

    fn keeps(&self, criteria: &Criteria, article: &Article) -> bool {
        let Some(usage) = &criteria.usage else {
            return true;
        };
        self.fixed
            .subtypes_for_use(usage)
            .is_some_and(|subtypes| subtypes.iter().any(|s| s == article.subtype()))
    }
}

/// Keeps articles suited to the requested weather, or to any weather.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherFilter;

impl ArticleFilter for WeatherFilter {
    fn name(&self) -> &'static str {
        "weather"
    }

    fn keeps(&self, criteria: &Criteria, article: &Article) -> bool {
        criteria
            .weather
            .as_deref()
            .is_none_or(|tag| article.suits_weather(tag))
    }
}

/// Keeps articles with a color from the requested palette or the neutral one.
#[derive(Debug, Clone, Copy)]
pub struct PaletteFilter<'f> {
    fixed: &'f FixedData,
}

impl<'f> PaletteFilter<'f> {
    /// Creates the filter over the fixed palettes.
    pub const fn new(fixed: &'f FixedData) -> Self {
        Self { fixed }
    }
}

impl ArticleFilter for PaletteFilter<'_> {
    fn name(&self) -> &'static str {
        "color"
    }

    fn keeps(&self, criteria: &Criteria, article: &Article) -> bool {
        criteria.color.as_deref().is_none_or(|palette| {
            article.has_any_color(&self.fixed.palette_with_neutral(palette))
        })
    }

    fn apply<'a>(&self, criteria: &Criteria, mut articles: Vec<&'a Article>) -> Vec<&'a Article> {
        if let Some(palette) = criteria.color.as_deref() {
            let target = self.fixed.palette_with_neutral(palette);
            articles.retain(|a| a.has_any_color(&target));
        }
        articles
    }
}

/// Ordered list of filters applied one after another.
pub struct FilterPipeline<'f> {
    filters: Vec<Box<dyn ArticleFilter + 'f>>,
}

impl<'f> FilterPipeline<'f> {
    /// The standard pipeline: use, then weather, then color.
    pub fn new(fixed: &'f FixedData) -> Self {
        Self {
            filters: vec![
                Box::new(UseFilter::new(fixed)),
                Box::new(WeatherFilter),
                Box::new(PaletteFilter::new(fixed)),
            ],
        }
    }

    /// A pipeline with no filters.
    pub fn empty() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Appends a filter.
    pub fn with_filter(mut self, filter: impl ArticleFilter + 'f) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters in application order.
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Runs every filter over `articles`.
    pub fn apply<'a>(&self, criteria: &Criteria, articles: &'a [Article]) -> Vec<&'a Article> {
        let mut candidates: Vec<&'a Article> = articles.iter().collect();
        for filter in &self.filters {
            let before = candidates.len();
            candidates = filter.apply(criteria, candidates);
            trace!(filter = filter.name(), before, after = candidates.len(), "Applied filter");
        }
        candidates
    }
}
