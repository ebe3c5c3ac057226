//! Add an article to the wardrobe.

use crate::cli::common::{print_json, require_choice, CliError, CliResult, DataArgs};
use crate::constants::{WEATHER_ALL_LEGACY, WEATHER_ANY};
use crate::models::{Article, NewArticle};
use crate::services::import::parse_price;
use clap::Args;

/// Add an article to the wardrobe
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Article type (e.g. hat, shirt, accessory)
    #[arg(long = "type", value_name = "TYPE")]
    pub article_type: String,

    /// Subtype declared for the article type (e.g. beanie)
    #[arg(long, value_name = "SUBTYPE")]
    pub subtype: String,

    /// Free-text description
    #[arg(long, value_name = "TEXT")]
    pub description: String,

    /// Color; repeat or comma-separate for several
    #[arg(long = "color", value_name = "COLOR", value_delimiter = ',', required = true)]
    pub colors: Vec<String>,

    /// Weather tag; repeat or comma-separate for several ("any" fits all)
    #[arg(long = "weather", value_name = "TAG", value_delimiter = ',', required = true)]
    pub weather: Vec<String>,

    /// Price, e.g. 25 or 19.99
    #[arg(long, value_name = "PRICE")]
    pub price: String,

    /// Output the stored article as JSON
    #[arg(long)]
    pub json: bool,
}

impl AddArgs {
    /// Execute the add command
    pub fn execute(&self, data: &DataArgs) -> CliResult<()> {
        let mut session = data.open()?;
        let fixed = &session.fixed;

        let article_type = require_choice("article type", &self.article_type, fixed.article_types())?;
        let subtypes = fixed.subtypes(&article_type).unwrap_or_default();
        let subtype = require_choice(
            &format!("{article_type} subtype"),
            &self.subtype,
            subtypes.iter().map(String::as_str),
        )?;

        let colors = self
            .colors
            .iter()
            .map(|c| require_choice("color", c, fixed.compatibility.colors()))
            .collect::<CliResult<Vec<_>>>()?;

        let weather_choices: Vec<&str> = fixed
            .weather
            .iter()
            .map(String::as_str)
            .chain([WEATHER_ANY, WEATHER_ALL_LEGACY])
            .collect();
        let weather = self
            .weather
            .iter()
            .map(|w| require_choice("weather tag", w, weather_choices.iter().copied()))
            .collect::<CliResult<Vec<_>>>()?;

        let price = parse_price(&self.price).map_err(CliError::validation)?;

        let article = Article::new(NewArticle {
            article_type,
            subtype,
            description: self.description.clone(),
            colors,
            weather,
            price,
        })?;
        fixed.check_article(&article)?;

        let stored = session.catalog.add_article(article)?.clone();
        session.save()?;

        if self.json {
            print_json(&stored)?;
        } else {
            println!("Added {stored}");
            println!("ID: {}", stored.id());
        }
        Ok(())
    }
}
