//! Wardrobe Library
//!
//! This library provides the core of the wardrobe application: the article
//! catalog, color compatibility rules, the candidate filter pipeline and the
//! random outfit generator, plus the services that persist them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Result, WardrobeError};
