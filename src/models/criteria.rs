//! Generation criteria parsed from `key:value` tokens.

use super::FixedData;
use crate::error::{Result, WardrobeError};
use serde::Serialize;
use std::str::FromStr;

/// Filter parameters for outfit generation.
///
/// Recognized keys are `use`, `weather` and `color` (a palette name). Any
/// other key is kept in [`Criteria::ignored`] and has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Criteria {
    /// Use name (e.g. "formal")
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    /// Weather tag (e.g. "cold")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    /// Palette name (e.g. "warm")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Unrecognized `key:value` pairs
    #[serde(skip)]
    pub ignored: Vec<(String, String)>,
}

impl Criteria {
    /// Criteria with no filtering at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sets the use criterion.
    pub fn with_use(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// Sets the weather criterion.
    pub fn with_weather(mut self, weather: impl Into<String>) -> Self {
        self.weather = Some(weather.into());
        self
    }

    /// Sets the palette criterion.
    pub fn with_color(mut self, palette: impl Into<String>) -> Self {
        self.color = Some(palette.into());
        self
    }

    /// Parses a sequence of `key:value` tokens.
    ///
    /// Keys and values are trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Fails on a token without `:`, an empty key or value, or a recognized
    /// key given twice.
    pub fn parse_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut criteria = Self::default();

        for token in tokens {
            let token = token.as_ref();
            let (key, value) = token.split_once(':').ok_or_else(|| {
                WardrobeError::InvalidCriteria(format!("'{token}' is not of the form key:value"))
            })?;
            let key = key.trim().to_lowercase();
            let value = value.trim().to_lowercase();

            if key.is_empty() {
                return Err(WardrobeError::InvalidCriteria(format!(
                    "'{token}' has an empty key"
                )));
            }
            if value.is_empty() {
                return Err(WardrobeError::InvalidCriteria(format!(
                    "'{key}' has an empty value"
                )));
            }

            let slot = match key.as_str() {
                "use" => &mut criteria.usage,
                "weather" => &mut criteria.weather,
                "color" => &mut criteria.color,
                _ => {
                    criteria.ignored.push((key.clone(), value));
                    continue;
                }
            };
            if slot.is_some() {
                return Err(WardrobeError::InvalidCriteria(format!(
                    "'{key}' given more than once"
                )));
            }
            *slot = Some(value);
        }

        Ok(criteria)
    }

    /// True if no recognized criterion is set.
    pub fn is_empty(&self) -> bool {
        self.usage.is_none() && self.weather.is_none() && self.color.is_none()
    }

    /// Rejects names the fixed data does not declare.
    ///
    /// The filters accept unknown names (they simply match less); this check
    /// is for callers that want to report typos instead.
    pub fn validate(&self, fixed: &FixedData) -> Result<()> {
        if let Some(usage) = &self.usage {
            if fixed.subtypes_for_use(usage).is_none() {
                return Err(WardrobeError::InvalidCriteria(format!(
                    "unknown use '{usage}' (known: {})",
                    join_keys(fixed.uses.keys())
                )));
            }
        }
        if let Some(weather) = &self.weather {
            if !fixed.is_weather_tag(weather) {
                return Err(WardrobeError::InvalidCriteria(format!(
                    "unknown weather '{weather}' (known: {})",
                    fixed.weather.join(", ")
                )));
            }
        }
        if let Some(color) = &self.color {
            if fixed.palette(color).is_none() {
                return Err(WardrobeError::InvalidCriteria(format!(
                    "unknown palette '{color}' (known: {})",
                    join_keys(fixed.palettes.keys())
                )));
            }
        }
        Ok(())
    }
}

impl FromStr for Criteria {
    type Err = WardrobeError;

    /// Parses whitespace-separated `key:value` tokens.
    fn from_str(s: &str) -> Result<Self> {
        Self::parse_tokens(s.split_whitespace())
    }
}

fn join_keys<'a>(keys: impl Iterator<Item = &'a String>) -> String {
    keys.map(String::as_str).collect::<Vec<_>>().join(", ")
}
