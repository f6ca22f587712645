use crate::blendshapes::domain::face_blend_shapes::FaceBlendShapes;
use crate::shared::constants::BLEND_SHAPE_BAR_WIDTH;

/// Renders a face's blend-shape scores as a text list with bars.
///
/// One row per category: `label  bar  score`, score to four decimals.
pub struct BlendShapeListRenderer {
    bar_width: usize,
    label_width: usize,
}

impl BlendShapeListRenderer {
    pub fn new(bar_width: usize) -> Self {
        Self {
            bar_width,
            label_width: 20,
        }
    }

    /// Renders the first face; `None` when no face was detected.
    pub fn render(&self, faces: &[FaceBlendShapes]) -> Option<String> {
        let face = faces.first()?;
        let rows: Vec<String> = face
            .categories
            .iter()
            .map(|cat| {
                let filled = self.bar_len(cat.score);
                format!(
                    "{:<lw$} {}{} {:.4}",
                    cat.label(),
                    "#".repeat(filled),
                    " ".repeat(self.bar_width - filled),
                    cat.score,
                    lw = self.label_width,
                )
            })
            .collect();
        Some(rows.join("\n"))
    }

    fn bar_len(&self, score: f64) -> usize {
        if !score.is_finite() {
            return 0;
        }
        (score.clamp(0.0, 1.0) * self.bar_width as f64).round() as usize
    }
}

impl Default for BlendShapeListRenderer {
    fn default() -> Self {
        Self::new(BLEND_SHAPE_BAR_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blendshapes::domain::blend_shape_category::BlendShapeCategory;

    #[test]
    fn test_no_faces_renders_nothing() {
        assert!(BlendShapeListRenderer::default().render(&[]).is_none());
    }

    #[test]
    fn test_row_per_category_with_four_decimals() {
        let face = FaceBlendShapes::new(vec![
            BlendShapeCategory::new(0, 0.0, "_neutral"),
            BlendShapeCategory::new(1, 0.123456, "browDownLeft"),
        ]);
        let out = BlendShapeListRenderer::new(10).render(&[face]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("_neutral"));
        assert!(lines[0].ends_with("0.0000"));
        assert!(lines[1].ends_with("0.1235"));
    }

    #[test]
    fn test_bar_proportional_to_score() {
        let face = FaceBlendShapes::new(vec![BlendShapeCategory::new(0, 0.5, "jawOpen")]);
        let out = BlendShapeListRenderer::new(10).render(&[face]).unwrap();
        assert_eq!(out.matches('#').count(), 5);
    }

    #[test]
    fn test_bar_clamped_for_out_of_range_scores() {
        let face = FaceBlendShapes::new(vec![
            BlendShapeCategory::new(0, 1.7, "a"),
            BlendShapeCategory::new(1, -0.3, "b"),
        ]);
        let out = BlendShapeListRenderer::new(8).render(&[face]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].matches('#').count(), 8);
        assert_eq!(lines[1].matches('#').count(), 0);
    }

    #[test]
    fn test_uses_display_name_when_present() {
        let mut cat = BlendShapeCategory::new(25, 0.9, "jawOpen");
        cat.display_name = "Jaw open".to_string();
        let out = BlendShapeListRenderer::default()
            .render(&[FaceBlendShapes::new(vec![cat])])
            .unwrap();
        assert!(out.starts_with("Jaw open"));
    }

    #[test]
    fn test_only_first_face_rendered() {
        let a = FaceBlendShapes::new(vec![BlendShapeCategory::new(0, 0.1, "first")]);
        let b = FaceBlendShapes::new(vec![BlendShapeCategory::new(0, 0.1, "second")]);
        let out = BlendShapeListRenderer::default().render(&[a, b]).unwrap();
        assert!(out.contains("first"));
        assert!(!out.contains("second"));
    }
}
