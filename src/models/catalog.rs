//! Article catalog grouped by article type.

use super::{Article, FixedData};
use crate::error::{Result, WardrobeError};
use std::collections::BTreeMap;
use tracing::{debug, warn};
use uuid::Uuid;

/// All articles, keyed by article type.
///
/// Every declared classification has an entry, possibly empty, and every
/// article sits under the key of its own type. Types present in stored data
/// but no longer declared are kept so that saving never drops articles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    articles: BTreeMap<String, Vec<Article>>,
}

/// Filter over a single article type's list.
///
/// Every field is optional; an empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleQuery {
    /// Exact subtype
    pub subtype: Option<String>,
    /// Case-insensitive description substring
    pub description: Option<String>,
    /// Matches if the article has any of these colors
    pub colors: Option<Vec<String>>,
    /// Matches if the article suits this weather tag
    pub weather: Option<String>,
    /// Inclusive price ceiling
    pub max_price: Option<f64>,
}

impl ArticleQuery {
    /// Query matching every article.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts to a subtype.
    pub fn subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    /// Restricts to descriptions containing `needle`.
    pub fn description(mut self, needle: impl Into<String>) -> Self {
        self.description = Some(needle.into());
        self
    }

    /// Restricts to articles sharing at least one color with `colors`.
    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(|c| c.into().to_lowercase()).collect());
        self
    }

    /// Restricts to articles suiting a weather tag.
    pub fn weather(mut self, tag: impl Into<String>) -> Self {
        self.weather = Some(tag.into());
        self
    }

    /// Restricts to articles priced at or below `price`.
    pub fn max_price(mut self, price: f64) -> Self {
        self.max_price = Some(price);
        self
    }

    /// True if `article` satisfies every set field.
    pub fn matches(&self, article: &Article) -> bool {
        if let Some(subtype) = &self.subtype {
            if article.subtype() != subtype {
                return false;
            }
        }
        if let Some(needle) = &self.description {
            if !article
                .description()
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(colors) = &self.colors {
            if !article.has_any_color(colors) {
                return false;
            }
        }
        if let Some(tag) = &self.weather {
            if !article.suits_weather(tag) {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if article.price() > max {
                return false;
            }
        }
        true
    }
}

impl Catalog {
    /// Creates an empty catalog with one list per declared type.
    pub fn new(fixed: &FixedData) -> Self {
        Self {
            articles: fixed
                .article_types()
                .map(|t| (t.to_string(), Vec::new()))
                .collect(),
        }
    }

    /// Builds a catalog from stored lists.
    ///
    /// # Errors
    ///
    /// Fails if an article is stored under a key other than its own type.
    pub fn from_articles(
        fixed: &FixedData,
        stored: BTreeMap<String, Vec<Article>>,
    ) -> Result<Self> {
        let mut catalog = Self::new(fixed);

        for (article_type, articles) in stored {
            if let Some(misplaced) = articles.iter().find(|a| a.article_type() != article_type) {
                return Err(WardrobeError::InvalidArticle(format!(
                    "article {} of type '{}' is stored under '{}'",
                    misplaced.id(),
                    misplaced.article_type(),
                    article_type
                )));
            }
            if fixed.subtypes(&article_type).is_none() {
                warn!(
                    article_type = %article_type,
                    count = articles.len(),
                    "Keeping articles of an undeclared type"
                );
            }
            catalog.articles.insert(article_type, articles);
        }

        Ok(catalog)
    }

    /// The underlying lists, keyed by type.
    pub fn as_map(&self) -> &BTreeMap<String, Vec<Article>> {
        &self.articles
    }

    /// Article types present in the catalog, sorted.
    pub fn article_types(&self) -> impl Iterator<Item = &str> {
        self.articles.keys().map(String::as_str)
    }

    /// All articles of one type, in insertion order.
    pub fn articles(&self, article_type: &str) -> &[Article] {
        self.articles
            .get(article_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Articles of one type matching `query`, in insertion order.
    pub fn query(&self, article_type: &str, query: &ArticleQuery) -> Vec<&Article> {
        self.articles(article_type)
            .iter()
            .filter(|a| query.matches(a))
            .collect()
    }

    /// Looks up an article by id across all types.
    pub fn find(&self, id: Uuid) -> Option<&Article> {
        self.articles.values().flatten().find(|a| a.id() == id)
    }

    /// Appends an article to its type's list and returns the stored copy.
    ///
    /// # Errors
    ///
    /// Fails if the article's type has no list in this catalog.
    pub fn add_article(&mut self, article: Article) -> Result<&Article> {
        let list = self
            .articles
            .get_mut(article.article_type())
            .ok_or_else(|| WardrobeError::UnknownArticleType(article.article_type().to_string()))?;

        debug!(id = %article.id(), article_type = %article.article_type(), "Adding article");
        list.push(article);
        // just pushed, so the list is non-empty
        Ok(&list[list.len() - 1])
    }

    /// Removes an article from its type's list.
    ///
    /// A missing article is reported as [`WardrobeError::ArticleNotFound`]
    /// and logged; the catalog is unchanged.
    pub fn remove_article(&mut self, article_type: &str, id: Uuid) -> Result<Article> {
        let position = self
            .articles
            .get(article_type)
            .and_then(|list| list.iter().position(|a| a.id() == id));

        match position {
            Some(index) => {
                debug!(%id, article_type, "Removing article");
                let list = self
                    .articles
                    .get_mut(article_type)
                    .ok_or_else(|| WardrobeError::UnknownArticleType(article_type.to_string()))?;
                Ok(list.remove(index))
            }
            None => {
                warn!(%id, article_type, "Article to remove was not found");
                Err(WardrobeError::ArticleNotFound {
                    article_type: article_type.to_string(),
                    id,
                })
            }
        }
    }

    /// Removes an article by id, whatever its type.
    pub fn remove_by_id(&mut self, id: Uuid) -> Result<Article> {
        let article_type = self
            .find(id)
            .map(|a| a.article_type().to_string())
            .ok_or_else(|| {
                warn!(%id, "Article to remove was not found");
                WardrobeError::UnknownArticle(id)
            })?;
        self.remove_article(&article_type, id)
    }

    /// Total number of articles.
    pub fn len(&self) -> usize {
        self.articles.values().map(Vec::len).sum()
    }

    /// True if no type holds any article.
    pub fn is_empty(&self) -> bool {
        self.articles.values().all(Vec::is_empty)
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
                "compatibility": {},
                "palettes": {}
            }"#,
        )
        .unwrap()
    }

    fn hat(subtype: &str, description: &str, colors: &[&str], weather: &[&str], price: f64) -> Article {
        Article::new(NewArticle {
            article_type: "hat".to_string(),
            subtype: subtype.to_string(),
            description: description.to_string(),
            colors: colors.iter().map(|c| (*c).to_string()).collect(),
            weather: weather.iter().map(|w| (*w).to_string()).collect(),
            price,
        })
        .unwrap()
    }

    fn stocked() -> Catalog {
        let mut catalog = Catalog::new(&fixed());
        catalog
            .add_article(hat("beanie", "Grey Wool beanie", &["gray"], &["cold"], 20.0))
            .unwrap();
        catalog
            .add_article(hat("cap", "Red baseball cap", &["red", "white"], &["hot"], 15.0))
            .unwrap();
        catalog
            .add_article(hat("cap", "Plain cap", &["black"], &["any"], 30.0))
            .unwrap();
        catalog
    }

    #[test]
    fn test_new_has_every_declared_type() {
        let catalog = Catalog::new(&fixed());
        assert_eq!(catalog.article_types().collect::<Vec<_>>(), vec!["hat", "shirt"]);
        assert!(catalog.is_empty());
        assert!(catalog.articles("hat").is_empty());
        assert!(catalog.articles("shoes").is_empty());
    }

    #[test]
    fn test_add_article_returns_stored() {
        let mut catalog = Catalog::new(&fixed());
        let article = hat("cap", "Cap", &["red"], &["hot"], 1.0);
        let id = article.id();

        let stored = catalog.add_article(article).unwrap();
        assert_eq!(stored.id(), id);
        assert_eq!(catalog.articles("hat").len(), 1);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_add_article_unknown_type() {
        let mut catalog = Catalog::new(&fixed());
        let shoe = Article::new(NewArticle {
            article_type: "shoes".to_string(),
            subtype: "boots".to_string(),
            description: "Boots".to_string(),
            colors: vec!["brown".to_string()],
            weather: vec!["wet".to_string()],
            price: 90.0,
        })
        .unwrap();
        assert_eq!(
            catalog.add_article(shoe),
            Err(WardrobeError::UnknownArticleType("shoes".to_string()))
        );
    }

    #[test]
    fn test_query_by_each_field() {
        let catalog = stocked();

        assert_eq!(catalog.query("hat", &ArticleQuery::all()).len(), 3);
        assert_eq!(catalog.query("hat", &ArticleQuery::all().subtype("cap")).len(), 2);
        assert_eq!(
            catalog.query("hat", &ArticleQuery::all().description("wool"))[0].subtype(),
            "beanie"
        );
        assert_eq!(catalog.query("hat", &ArticleQuery::all().colors(["White", "gray"])).len(), 2);
        // "any" weather always matches
        assert_eq!(catalog.query("hat", &ArticleQuery::all().weather("hot")).len(), 2);
        assert_eq!(catalog.query("hat", &ArticleQuery::all().max_price(20.0)).len(), 2);
        assert!(catalog.query("shirt", &ArticleQuery::all()).is_empty());
    }

    #[test]
    fn test_query_combines_fields_and_keeps_order() {
        let catalog = stocked();
        let found = catalog.query("hat", &ArticleQuery::all().subtype("cap").weather("hot"));
        let descriptions: Vec<_> = found.iter().map(|a| a.description()).collect();
        assert_eq!(descriptions, vec!["Red baseball cap", "Plain cap"]);
    }

    #[test]
    fn test_remove_article() {
        let mut catalog = stocked();
        let id = catalog.articles("hat")[1].id();

        let removed = catalog.remove_article("hat", id).unwrap();
        assert_eq!(removed.id(), id);
        assert_eq!(catalog.articles("hat").len(), 2);
        assert!(catalog.find(id).is_none());
    }

    #[test]
    fn test_remove_article_not_found() {
        let mut catalog = stocked();
        let id = catalog.articles("hat")[0].id();

        assert!(matches!(
            catalog.remove_article("shirt", id),
            Err(WardrobeError::ArticleNotFound { .. })
        ));
        assert!(matches!(
            catalog.remove_article("hat", Uuid::new_v4()),
            Err(WardrobeError::ArticleNotFound { .. })
        ));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_remove_by_id() {
        let mut catalog = stocked();
        let id = catalog.articles("hat")[2].id();
        assert!(catalog.remove_by_id(id).is_ok());
        assert_eq!(
            catalog.remove_by_id(id),
            Err(WardrobeError::UnknownArticle(id))
        );
    }

    #[test]
    fn test_from_articles_rejects_misplaced() {
        let mut stored = BTreeMap::new();
        stored.insert("shirt".to_string(), vec![hat("cap", "Cap", &["red"], &["hot"], 1.0)]);
        assert!(Catalog::from_articles(&fixed(), stored).is_err());
    }

    #[test]
    fn test_from_articles_keeps_undeclared_types() {
        let mut stored = BTreeMap::new();
        let sock = Article::new(NewArticle {
            article_type: "socks".to_string(),
            subtype: "ankle".to_string(),
            description: "Ankle socks".to_string(),
            colors: vec!["white".to_string()],
            weather: vec!["any".to_string()],
            price: 4.0,
        })
        .unwrap();
        stored.insert("socks".to_string(), vec![sock]);

        let catalog = Catalog::from_articles(&fixed(), stored).unwrap();
        assert_eq!(
            catalog.article_types().collect::<Vec<_>>(),
            vec!["hat", "shirt", "socks"]
        );
        assert_eq!(catalog.len(), 1);
    }
}
