//! Service layer for business logic.
//!
//! This module contains the outfit engine (filters and generator) and the
//! services that move documents between disk and the models.

pub mod filters;
pub mod generator;
pub mod import;
pub mod storage;

// Re-export commonly used types and functions
pub use filters::{ArticleFilter, FilterPipeline, PaletteFilter, UseFilter, WeatherFilter};
pub use generator::OutfitGenerator;
pub use import::{ImportIssue, ImportReport};
pub use storage::{FixedDataService, LoadedFixedData, WardrobeService};
