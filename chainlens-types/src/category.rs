//! Category tables used by taxonomy-based chains.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ChainLensError;

/// Name of the reserved fallback category for unmapped actions.
pub const OTHERS_CATEGORY: &str = "others";

/// One named category with its display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Mapping key; the values of [`CategoryTable::mapping`] refer to it.
    pub name: String,
    /// Color name handed to the renderer (e.g. `green`).
    pub color: String,
    /// Optional display label; derived from `name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Category {
    /// Construct a category without a label override.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            label: None,
        }
    }

    /// Label shown in legends.
    #[must_use]
    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| display_case(&self.name))
    }
}

/// Upper-case the first character and lower-case the rest (`transfer` -> `Transfer`).
#[must_use]
pub fn display_case(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

#[derive(Serialize)]
struct CategoryTableRef<'a> {
    categories: &'a [Category],
    mapping: &'a BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct CategoryTableRepr {
    categories: Vec<Category>,
    #[serde(default)]
    mapping: BTreeMap<String, String>,
}

/// Ordered categories plus a raw-action-name to category-name mapping.
///
/// Construction validates the table: category names are unique and
/// non-empty and every mapping target exists. The [`OTHERS_CATEGORY`]
/// fallback is only required by chains aggregating by category, see
/// [`CategoryTable::require_fallback`]. Instances are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    categories: Vec<Category>,
    mapping: BTreeMap<String, String>,
    positions: HashMap<String, usize>,
}

impl CategoryTable {
    /// Build and validate a table.
    ///
    /// # Errors
    /// Returns `InvalidCategoryTable` when an invariant is violated.
    pub fn new(
        categories: Vec<Category>,
        mapping: BTreeMap<String, String>,
    ) -> Result<Self, ChainLensError> {
        let mut positions = HashMap::with_capacity(categories.len());
        for (i, c) in categories.iter().enumerate() {
            if c.name.is_empty() {
                return Err(ChainLensError::InvalidCategoryTable(format!(
                    "category #{i} has an empty name"
                )));
            }
            if positions.insert(c.name.clone(), i).is_some() {
                return Err(ChainLensError::InvalidCategoryTable(format!(
                    "duplicate category `{}`",
                    c.name
                )));
            }
        }
        if let Some((action, category)) = mapping
            .iter()
            .find(|(_, category)| !positions.contains_key(category.as_str()))
        {
            return Err(ChainLensError::InvalidCategoryTable(format!(
                "action `{action}` maps to undeclared category `{category}`"
            )));
        }
        Ok(Self {
            categories,
            mapping,
            positions,
        })
    }

    /// Parse and validate a table from its JSON asset form:
    /// `{"categories": [{"name", "color", "label"?}], "mapping": {action: category}}`.
    ///
    /// # Errors
    /// Returns `InvalidCategoryTable` for malformed JSON or violated invariants.
    pub fn from_json_str(json: &str) -> Result<Self, ChainLensError> {
        let repr: CategoryTableRepr = serde_json::from_str(json)
            .map_err(|e| ChainLensError::InvalidCategoryTable(e.to_string()))?;
        Self::new(repr.categories, repr.mapping)
    }

    /// Categories in table order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True when the table declares no category.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// True when the reserved [`OTHERS_CATEGORY`] is declared.
    #[must_use]
    pub fn has_fallback(&self) -> bool {
        self.positions.contains_key(OTHERS_CATEGORY)
    }

    /// Ensure unmapped actions have somewhere to go.
    ///
    /// # Errors
    /// Returns `InvalidCategoryTable` when [`OTHERS_CATEGORY`] is missing.
    pub fn require_fallback(&self) -> Result<(), ChainLensError> {
        if self.has_fallback() {
            Ok(())
        } else {
            Err(ChainLensError::InvalidCategoryTable(format!(
                "missing reserved `{OTHERS_CATEGORY}` category"
            )))
        }
    }

    /// Raw action name to category name mapping.
    #[must_use]
    pub fn mapping(&self) -> &BTreeMap<String, String> {
        &self.mapping
    }

    /// Category name for a raw action, falling back to [`OTHERS_CATEGORY`].
    #[must_use]
    pub fn category_of(&self, action: &str) -> &str {
        self.mapping
            .get(action)
            .map_or(OTHERS_CATEGORY, String::as_str)
    }

    /// Position of a category in table order.
    #[must_use]
    pub fn position(&self, category: &str) -> Option<usize> {
        self.positions.get(category).copied()
    }

    /// Display labels in table order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.categories.iter().map(Category::display_label).collect()
    }

    /// Colors in table order.
    #[must_use]
    pub fn colors(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.color.clone()).collect()
    }
}

impl Serialize for CategoryTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CategoryTableRef {
            categories: &self.categories,
            mapping: &self.mapping,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CategoryTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = CategoryTableRepr::deserialize(deserializer)?;
        Self::new(repr.categories, repr.mapping).map_err(serde::de::Error::custom)
    }
}
