//! List articles in the wardrobe.

use crate::cli::common::{print_json, require_choice, CliError, CliResult, DataArgs};
use crate::models::{Article, ArticleQuery};
use crate::services::import::parse_price;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;

/// List articles, optionally filtered
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Only list this article type
    #[arg(long = "type", value_name = "TYPE")]
    pub article_type: Option<String>,

    /// Only list this subtype
    #[arg(long, value_name = "SUBTYPE")]
    pub subtype: Option<String>,

    /// Only list descriptions containing this text (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Only list articles with any of these colors
    #[arg(long = "color", value_name = "COLOR", value_delimiter = ',')]
    pub colors: Vec<String>,

    /// Only list articles suited to this weather
    #[arg(long, value_name = "TAG")]
    pub weather: Option<String>,

    /// Only list articles costing at most this much
    #[arg(long, value_name = "PRICE")]
    pub max_price: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ListResponse<'a> {
    articles: BTreeMap<&'a str, Vec<&'a Article>>,
    count: usize,
}

impl ListArgs {
    fn query(&self) -> CliResult<ArticleQuery> {
        let mut query = ArticleQuery::all();
        if let Some(subtype) = &self.subtype {
            query = query.subtype(subtype.trim().to_lowercase());
        }
        if let Some(needle) = &self.description {
            query = query.description(needle.as_str());
        }
        if !self.colors.is_empty() {
            query = query.colors(self.colors.iter().map(|c| c.trim().to_string()));
        }
        if let Some(weather) = &self.weather {
            query = query.weather(weather.trim().to_lowercase());
        }
        if let Some(max) = &self.max_price {
            query = query.max_price(parse_price(max).map_err(CliError::validation)?);
        }
        Ok(query)
    }

    /// Execute the list command
    pub fn execute(&self, data: &DataArgs) -> CliResult<()> {
        let session = data.open()?;
        let query = self.query()?;

        let types: Vec<String> = match &self.article_type {
            Some(t) => vec![require_choice(
                "article type",
                t,
                session.catalog.article_types(),
            )?],
            None => session.catalog.article_types().map(str::to_string).collect(),
        };

        let mut articles = BTreeMap::new();
        for article_type in &types {
            let matched = session.catalog.query(article_type, &query);
            if !matched.is_empty() {
                articles.insert(article_type.as_str(), matched);
            }
        }
        let response = ListResponse {
            count: articles.values().map(Vec::len).sum(),
            articles,
        };

        if self.json {
            print_json(&response)?;
        } else if response.count == 0 {
            println!("No articles found.");
        } else {
            println!("Articles ({}):", response.count);
            for (article_type, matched) in &response.articles {
                println!();
                println!("{article_type}:");
                for article in matched {
                    println!("  {}  {}", article.id(), article);
                }
            }
        }

        Ok(())
    }
}
