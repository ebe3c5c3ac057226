//! Data models for articles, the catalog, outfits and fixed configuration.
//!
//! This module contains all the core data structures used throughout the application.
//! Models validate themselves on construction and are independent of storage and CLI.

pub mod article;
pub mod catalog;
pub mod compatibility;
pub mod criteria;
pub mod fixed_data;
mod one_or_many;
pub mod outfit;

// Re-export all model types
pub use article::{Article, NewArticle};
pub use catalog::{ArticleQuery, Catalog};
pub use compatibility::{CompatibilityGraph, Repair};
pub use criteria::Criteria;
pub use fixed_data::FixedData;
pub use outfit::{Outfit, OutfitHistory};
