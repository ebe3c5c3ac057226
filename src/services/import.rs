//! Line-oriented article import.
//!
//! One article per line:
//!
//! ```text
//! # type | subtype | description | colors | weather | price
//! hat | beanie | Grey wool beanie | gray, black | cold | 25
//! accessory | watch | Steel watch | gray | any | 120.50
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. A bad line is
//! reported and skipped; the rest of the file is still imported.

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::models::{Article, FixedData, NewArticle};

const FIELDS: [&str; 6] = ["type", "subtype", "description", "colors", "weather", "price"];

/// A line that could not be imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportIssue {
    /// 1-based line number
    pub line: usize,
    /// Why the line was skipped
    pub reason: String,
}

/// Outcome of an import run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    /// Validated articles, in file order
    pub imported: Vec<Article>,
    /// Skipped lines
    pub issues: Vec<ImportIssue>,
}

impl ImportReport {
    /// Number of articles successfully parsed.
    pub fn imported_count(&self) -> usize {
        self.imported.len()
    }
}

/// Parses a price strictly: digits with an optional fractional part.
///
/// Signs, exponents, `inf` and `NaN` are all rejected.
///
/// # Examples
///
/// ```
/// use wardrobe::services::import::parse_price;
///
/// assert_eq!(parse_price("25"), Ok(25.0));
/// assert_eq!(parse_price(" 19.99 "), Ok(19.99));
/// assert!(parse_price("1e3").is_err());
/// ```
pub fn parse_price(input: &str) -> std::result::Result<f64, String> {
    static PRICE: OnceLock<Regex> = OnceLock::new();
    let pattern = PRICE.get_or_init(|| {
        Regex::new(r"^\d+(\.\d+)?$").unwrap_or_else(|e| unreachable!("price pattern: {e}"))
    });

    let trimmed = input.trim();
    if !pattern.is_match(trimmed) {
        return Err(format!(
            "Invalid price '{trimmed}': expected a number like 25 or 19.99"
        ));
    }
    trimmed
        .parse::<f64>()
        .map_err(|e| format!("Invalid price '{trimmed}': {e}"))
}

/// Splits one record line into an unvalidated article.
pub fn parse_line(line: &str) -> std::result::Result<NewArticle, String> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();

    if fields.len() > FIELDS.len() {
        return Err(format!(
            "Expected {} fields, found {}",
            FIELDS.len(),
            fields.len()
        ));
    }
    for (index, name) in FIELDS.iter().enumerate() {
        if fields.get(index).is_none_or(|f| f.is_empty()) {
            return Err(format!("Missing field '{name}'"));
        }
    }

    Ok(NewArticle {
        article_type: fields[0].to_lowercase(),
        subtype: fields[1].to_lowercase(),
        description: fields[2].to_string(),
        colors: split_list(fields[3]),
        weather: split_list(fields[4]),
        price: parse_price(fields[5])?,
    })
}

fn split_list(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a whole import document, validating each record against `fixed`.
pub fn parse_import(content: &str, fixed: &FixedData) -> ImportReport {
    let mut report = ImportReport::default();

    for (index, raw) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let result = parse_line(line).and_then(|new| {
            let article = Article::new(new).map_err(|e| e.to_string())?;
            fixed.check_article(&article).map_err(|e| e.to_string())?;
            Ok(article)
        });

        match result {
            Ok(article) => {
                debug!(line = line_number, id = %article.id(), "Parsed import record");
                report.imported.push(article);
            }
            Err(reason) => {
                warn!(line = line_number, %reason, "Skipping import record");
                report.issues.push(ImportIssue {
                    line: line_number,
                    reason,
                });
            }
        }
    }

    report
}

/// Reads and parses an import file.
pub fn import_file(path: &Path, fixed: &FixedData) -> Result<ImportReport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read import file {}", path.display()))?;
    Ok(parse_import(&content, fixed))
}
