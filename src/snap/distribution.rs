//! Equal-spacing detection.
//!
//! When three or more elements already sit at (nearly) equal gaps along
//! one direction, the editor shows a marker in the middle of every gap.

use serde::{Deserialize, Serialize};

use crate::model::Rect;

use super::{GuideAxis, SnapGuide, SnapSource, SnapTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributeDirection {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionConfig {
    /// Largest deviation from the mean gap (mm) still counted as equal.
    pub tolerance: f64,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self { tolerance: 0.5 }
    }
}

/// Gap markers for evenly distributed elements, using the default tolerance.
pub fn calculate_distribution_guides<T: SnapTarget>(
    elements: &[T],
    direction: DistributeDirection,
) -> Vec<SnapGuide> {
    calculate_distribution_guides_with(elements, direction, &DistributionConfig::default())
}

/// Gap markers for evenly distributed elements.
///
/// Elements are ordered by their leading edge along `direction`. If every
/// gap between consecutive trailing and leading edges lies within
/// `config.tolerance` of the mean gap, one guide is returned per gap at its
/// midpoint. Otherwise, or with fewer than three elements, none.
pub fn calculate_distribution_guides_with<T: SnapTarget>(
    elements: &[T],
    direction: DistributeDirection,
    config: &DistributionConfig,
) -> Vec<SnapGuide> {
    if elements.len() < 3 {
        return Vec::new();
    }

    let (lead, trail): (fn(&Rect) -> f64, fn(&Rect) -> f64) = match direction {
        DistributeDirection::Horizontal => (|r: &Rect| r.x, |r: &Rect| r.right()),
        DistributeDirection::Vertical => (|r: &Rect| r.y, |r: &Rect| r.bottom()),
    };

    let mut boxes: Vec<Rect> = elements.iter().map(|e| e.bounds()).collect();
    boxes.sort_by(|a, b| lead(a).total_cmp(&lead(b)));

    // (trailing edge of previous, leading edge of next)
    let gaps: Vec<(f64, f64)> = boxes
        .windows(2)
        .map(|pair| (trail(&pair[0]), lead(&pair[1])))
        .collect();

    let mean = gaps.iter().map(|(end, start)| start - end).sum::<f64>() / gaps.len() as f64;
    let even = gaps
        .iter()
        .all(|(end, start)| ((start - end) - mean).abs() <= config.tolerance);
    if !even {
        return Vec::new();
    }

    let axis = match direction {
        DistributeDirection::Horizontal => GuideAxis::Vertical,
        DistributeDirection::Vertical => GuideAxis::Horizontal,
    };

    gaps.into_iter()
        .map(|(end, start)| SnapGuide {
            axis,
            position: (end + start) / 2.0,
            source: SnapSource::Element,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LabelElement;

    fn el(id: &str, x: f64, y: f64, w: f64, h: f64) -> LabelElement {
        LabelElement::new(id, Rect::new(x, y, w, h))
    }

    #[test]
    fn even_horizontal_spacing() {
        // Gaps of 5mm, given out of order
        let elements = vec![
            el("c", 40.0, 0.0, 10.0, 5.0),
            el("a", 0.0, 0.0, 10.0, 5.0),
            el("b", 15.0, 0.0, 20.0, 5.0),
        ];
        let guides = calculate_distribution_guides(&elements, DistributeDirection::Horizontal);
        assert_eq!(guides.len(), 2);
        assert!((guides[0].position - 12.5).abs() < 1e-9);
        assert!((guides[1].position - 37.5).abs() < 1e-9);
        assert!(guides.iter().all(|g| g.axis == GuideAxis::Vertical));
    }

    #[test]
    fn uneven_spacing_yields_nothing() {
        let elements = vec![
            el("a", 0.0, 0.0, 10.0, 5.0),
            el("b", 15.0, 0.0, 10.0, 5.0),
            el("c", 32.0, 0.0, 10.0, 5.0),
        ];
        assert!(calculate_distribution_guides(&elements, DistributeDirection::Horizontal).is_empty());
    }

    #[test]
    fn within_tolerance_counts_as_even() {
        let elements = vec![
            el("a", 0.0, 0.0, 5.0, 10.0),
            el("b", 0.0, 14.0, 5.0, 10.0),
            el("c", 0.0, 28.6, 5.0, 10.0),
        ];
        let guides = calculate_distribution_guides(&elements, DistributeDirection::Vertical);
        assert_eq!(guides.len(), 2);
        assert!(guides.iter().all(|g| g.axis == GuideAxis::Horizontal));

        let strict = DistributionConfig { tolerance: 0.1 };
        assert!(
            calculate_distribution_guides_with(&elements, DistributeDirection::Vertical, &strict)
                .is_empty()
        );
    }

    #[test]
    fn fewer_than_three_elements() {
        let elements = vec![el("a", 0.0, 0.0, 5.0, 5.0), el("b", 10.0, 0.0, 5.0, 5.0)];
        assert!(calculate_distribution_guides(&elements, DistributeDirection::Horizontal).is_empty());
    }
}
