use serde::{Deserialize, Serialize};

/// One scored channel of a face's blend-shape output.
///
/// Field names follow the vision library's JSON so recorded results
/// deserialize without a mapping layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlendShapeCategory {
    #[serde(default)]
    pub index: usize,
    pub score: f64,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub display_name: String,
}

impl BlendShapeCategory {
    pub fn new(index: usize, score: f64, category_name: impl Into<String>) -> Self {
        Self {
            index,
            score,
            category_name: category_name.into(),
            display_name: String::new(),
        }
    }

    /// A score with no name attached, addressable only by position.
    pub fn unnamed(index: usize, score: f64) -> Self {
        Self::new(index, score, "")
    }

    /// Display name when present, category name otherwise.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.category_name
        } else {
            &self.display_name
        }
    }
}
