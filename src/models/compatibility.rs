//! Color compatibility graph with enforced symmetry.

use super::article::normalize_tags;
use crate::error::{Result, WardrobeError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Mapping from a color to the colors it may be paired with.
///
/// The graph is stored as directed adjacency lists. Pairing is a symmetric
/// relation, so [`CompatibilityGraph::enforce_symmetry`] must run before the
/// graph is queried; it adds every missing reverse edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompatibilityGraph {
    edges: BTreeMap<String, Vec<String>>,
}

/// A reverse edge added by [`CompatibilityGraph::enforce_symmetry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repair {
    /// Color that was missing from the other color's list
    pub color: String,
    /// Color whose list received `color`
    pub missing_from: String,
}

impl CompatibilityGraph {
    /// Creates a graph from raw adjacency lists.
    pub fn new(edges: BTreeMap<String, Vec<String>>) -> Self {
        Self { edges }
    }

    /// Trims and lowercases every color. Entries that only differed by case
    /// are merged.
    pub fn normalize(&mut self) {
        let mut merged: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (color, compatibles) in std::mem::take(&mut self.edges) {
            merged
                .entry(color.trim().to_lowercase())
                .or_default()
                .extend(compatibles);
        }
        for compatibles in merged.values_mut() {
            *compatibles = normalize_tags(compatibles);
        }
        self.edges = merged;
    }

    /// Adds every missing reverse edge.
    ///
    /// For each `color` and each `comp` listed as compatible with it, ensures
    /// `color` is listed as compatible with `comp`. Running this on an already
    /// symmetric graph changes nothing and returns no repairs.
    ///
    /// # Errors
    ///
    /// Returns [`WardrobeError::DanglingColor`] if a listed color has no entry
    /// of its own. The graph is left untouched in that case.
    pub fn enforce_symmetry(&mut self) -> Result<Vec<Repair>> {
        let mut repairs: Vec<Repair> = Vec::new();

        for (color, compatibles) in &self.edges {
            for comp in compatibles {
                let reverse =
                    self.edges
                        .get(comp)
                        .ok_or_else(|| WardrobeError::DanglingColor {
                            missing: comp.clone(),
                            referenced_by: color.clone(),
                        })?;

                let already_queued = repairs
                    .iter()
                    .any(|r| &r.color == color && &r.missing_from == comp);
                if !reverse.contains(color) && !already_queued {
                    repairs.push(Repair {
                        color: color.clone(),
                        missing_from: comp.clone(),
                    });
                }
            }
        }

        for repair in &repairs {
            warn!(
                color = %repair.color,
                missing_from = %repair.missing_from,
                "Fixing asymmetric compatibility entry"
            );
            if let Some(list) = self.edges.get_mut(&repair.missing_from) {
                list.push(repair.color.clone());
            }
        }

        debug!(repairs = repairs.len(), "Compatibility symmetry enforced");
        Ok(repairs)
    }

    /// True if every edge has its reverse.
    pub fn is_symmetric(&self) -> bool {
        self.edges.iter().all(|(color, compatibles)| {
            compatibles.iter().all(|comp| {
                self.edges
                    .get(comp)
                    .is_some_and(|reverse| reverse.contains(color))
            })
        })
    }

    /// Colors compatible with `color`.
    pub fn compatible_with(&self, color: &str) -> Option<&[String]> {
        self.edges.get(color).map(Vec::as_slice)
    }

    /// True if `a` lists `b` as compatible.
    pub fn are_compatible(&self, a: &str, b: &str) -> bool {
        self.edges
            .get(a)
            .is_some_and(|list| list.iter().any(|c| c == b))
    }

    /// True if `color` has an entry.
    pub fn contains(&self, color: &str) -> bool {
        self.edges.contains_key(color)
    }

    /// All colors with an entry, sorted.
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True if the graph has no colors.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
