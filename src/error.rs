//! Error type for the outfit engine.

use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the catalog, filters and generator.
#[derive(Debug, Error, PartialEq)]
pub enum WardrobeError {
    /// Every article type was filtered down to nothing
    #[error("Cannot build an empty outfit: no article matched the criteria")]
    EmptyOutfit,

    /// No article with this id under the given type
    #[error("Article {id} not found under type '{article_type}'")]
    ArticleNotFound {
        /// Type that was searched
        article_type: String,
        /// Requested id
        id: Uuid,
    },

    /// No article with this id under any type
    #[error("Article {0} not found")]
    UnknownArticle(Uuid),

    /// Type not declared in the fixed data
    #[error("Unknown article type: '{0}'")]
    UnknownArticleType(String),

    /// Subtype not declared for its type
    #[error("Unknown subtype '{subtype}' for article type '{article_type}'")]
    UnknownSubtype {
        /// Declared type
        article_type: String,
        /// Offending subtype
        subtype: String,
    },

    /// Field-level validation failure
    #[error("Invalid article: {0}")]
    InvalidArticle(String),

    /// Compatibility list names a color without its own entry
    #[error("Color '{missing}' is referenced by '{referenced_by}' but has no compatibility entry")]
    DanglingColor {
        /// Color with no entry
        missing: String,
        /// Color whose list mentions it
        referenced_by: String,
    },

    /// Malformed or unknown generation criteria
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, WardrobeError>;
