use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::blend_shape::BlendShape;
use super::blend_shape_category::BlendShapeCategory;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlendShapeError {
    #[error("blend-shape list too short: need at least {required} entries, found {found}")]
    InsufficientData { required: usize, found: usize },
    #[error("blend-shape category '{0}' not present")]
    MissingCategory(&'static str),
}

/// Blend-shape categories for a single detected face.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceBlendShapes {
    pub categories: Vec<BlendShapeCategory>,
    #[serde(default = "default_head_index")]
    pub head_index: i32,
    #[serde(default)]
    pub head_name: String,
}

fn default_head_index() -> i32 {
    -1
}

impl FaceBlendShapes {
    pub fn new(categories: Vec<BlendShapeCategory>) -> Self {
        Self {
            categories,
            head_index: default_head_index(),
            head_name: String::new(),
        }
    }

    /// Builds an unnamed, position-only list from raw scores.
    pub fn from_scores(scores: &[f64]) -> Self {
        Self::new(
            scores
                .iter()
                .enumerate()
                .map(|(i, &s)| BlendShapeCategory::unnamed(i, s))
                .collect(),
        )
    }

    /// Builds a fully named list in canonical order from raw scores.
    pub fn from_canonical_scores(scores: &[f64]) -> Self {
        Self::new(
            scores
                .iter()
                .zip(BlendShape::ALL)
                .map(|(&s, shape)| BlendShapeCategory::new(shape.index(), s, shape.name()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Score of one channel.
    ///
    /// Looks the channel up by category name first, so a reordered list still
    /// resolves correctly. Falls back to the canonical position only when the
    /// entry there carries no name.
    pub fn score(&self, shape: BlendShape) -> Result<f64, BlendShapeError> {
        if let Some(cat) = self
            .categories
            .iter()
            .find(|c| c.category_name == shape.name())
        {
            return Ok(cat.score);
        }

        let index = shape.index();
        match self.categories.get(index) {
            None => Err(BlendShapeError::InsufficientData {
                required: index + 1,
                found: self.categories.len(),
            }),
            Some(cat) if cat.category_name.is_empty() => Ok(cat.score),
            Some(_) => Err(BlendShapeError::MissingCategory(shape.name())),
        }
    }
}
