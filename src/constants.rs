//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed vocabulary of the engine.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Wardrobe";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "wardrobe";

/// Name of the platform config subdirectory.
pub const CONFIG_DIR_NAME: &str = "Wardrobe";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "WARDROBE_CONFIG_DIR";

/// Default wardrobe data file, relative to the working directory.
pub const DEFAULT_WARDROBE_FILE: &str = "wardrobe.json";

/// Default fixed configuration file, relative to the working directory.
pub const DEFAULT_FIXED_FILE: &str = "fixed.json";

/// Article type that may hold several articles in one outfit.
pub const ACCESSORY_TYPE: &str = "accessory";

/// Upper bound on the number of accessories drawn for one outfit.
pub const MAX_ACCESSORIES: usize = 4;

/// Weather sentinel matching every weather tag.
pub const WEATHER_ANY: &str = "any";

/// Legacy spelling of [`WEATHER_ANY`] accepted on input.
pub const WEATHER_ALL_LEGACY: &str = "all";

/// Palette that is unioned into every other palette when filtering.
pub const NEUTRAL_PALETTE: &str = "neutral";

