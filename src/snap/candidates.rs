//! Per-axis reference lists.
//!
//! The insertion order here is part of the tie-breaking contract:
//! canvas edges, canvas center, sibling edges and centers, grid lines.

use crate::log::debug;
use crate::model::Dimensions;

use super::{SnapConfig, SnapSource, SnapTarget};

/// A reference coordinate on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub value: f64,
    pub source: SnapSource,
}

impl Candidate {
    fn new(value: f64, source: SnapSource) -> Self {
        Self { value, source }
    }
}

/// Reference lists for the x axis (vertical lines) and y axis
/// (horizontal lines).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisCandidates {
    pub x: Vec<Candidate>,
    pub y: Vec<Candidate>,
}

impl AxisCandidates {
    pub fn collect<T, S>(
        siblings: &[T],
        canvas: Dimensions,
        config: &SnapConfig,
        exclude_ids: &[S],
    ) -> Self
    where
        T: SnapTarget,
        S: AsRef<str>,
    {
        let mut refs = AxisCandidates::default();

        if config.snap_to_canvas {
            refs.x.push(Candidate::new(0.0, SnapSource::Canvas));
            refs.x.push(Candidate::new(canvas.width, SnapSource::Canvas));
            refs.y.push(Candidate::new(0.0, SnapSource::Canvas));
            refs.y.push(Candidate::new(canvas.height, SnapSource::Canvas));

            if config.snap_to_center {
                refs.x.push(Candidate::new(canvas.width / 2.0, SnapSource::Center));
                refs.y.push(Candidate::new(canvas.height / 2.0, SnapSource::Center));
            }
        }

        if config.snap_to_elements {
            let participating = siblings.iter().filter(|s| {
                s.is_visible() && !exclude_ids.iter().any(|id| id.as_ref() == s.id())
            });
            for sibling in participating {
                let b = sibling.bounds();
                refs.x.push(Candidate::new(b.x, SnapSource::Element));
                refs.x.push(Candidate::new(b.right(), SnapSource::Element));
                refs.y.push(Candidate::new(b.y, SnapSource::Element));
                refs.y.push(Candidate::new(b.bottom(), SnapSource::Element));
                if config.snap_to_center {
                    refs.x.push(Candidate::new(b.center_x(), SnapSource::Element));
                    refs.y.push(Candidate::new(b.center_y(), SnapSource::Element));
                }
            }
        }

        if config.snap_to_grid {
            refs.x.extend(grid_lines(canvas.width, config.grid_size));
            refs.y.extend(grid_lines(canvas.height, config.grid_size));
        }

        refs
    }
}

/// Most grid lines one axis may contribute.
pub const MAX_GRID_LINES: usize = 10_000;

/// Every multiple of `pitch` from 0 up to and including `extent`.
///
/// A non-positive pitch or extent produces no lines, and so does a pitch
/// fine enough to need more than [`MAX_GRID_LINES`].
fn grid_lines(extent: f64, pitch: f64) -> impl Iterator<Item = Candidate> {
    let count = if pitch > 0.0 && extent >= 0.0 && extent.is_finite() {
        // Small tolerance so an extent that is an exact multiple keeps its
        // last line despite float error in the division.
        let spans = (extent / pitch + 1e-9).floor();
        if spans < MAX_GRID_LINES as f64 {
            spans as usize + 1
        } else {
            debug!(extent, pitch, "grid too fine, skipping grid lines");
            0
        }
    } else {
        0
    };
    (0..count).map(move |i| Candidate::new(i as f64 * pitch, SnapSource::Grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LabelElement, Rect};

    fn values(list: &[Candidate]) -> Vec<f64> {
        list.iter().map(|c| c.value).collect()
    }

    #[test]
    fn order_is_canvas_center_elements_grid() {
        let config = SnapConfig {
            snap_to_grid: true,
            grid_size: 30.0,
            ..Default::default()
        };
        let siblings = vec![LabelElement::new("a", Rect::new(10.0, 5.0, 20.0, 10.0))];
        let refs = AxisCandidates::collect(&siblings, Dimensions::new(60.0, 40.0), &config, &[""]);
        assert_eq!(values(&refs.x), vec![0.0, 60.0, 30.0, 10.0, 30.0, 20.0, 0.0, 30.0, 60.0]);
        assert_eq!(refs.x[2].source, SnapSource::Center);
        assert_eq!(refs.x[3].source, SnapSource::Element);
        assert_eq!(refs.x[6].source, SnapSource::Grid);
        assert_eq!(values(&refs.y), vec![0.0, 40.0, 20.0, 5.0, 15.0, 10.0, 0.0, 30.0]);
    }

    #[test]
    fn center_requires_canvas() {
        let config = SnapConfig {
            snap_to_canvas: false,
            snap_to_elements: false,
            ..Default::default()
        };
        let refs = AxisCandidates::collect::<LabelElement, &str>(
            &[],
            Dimensions::new(60.0, 40.0),
            &config,
            &[],
        );
        assert!(refs.x.is_empty());
        assert!(refs.y.is_empty());
    }

    #[test]
    fn grid_lines_include_far_edge() {
        let lines: Vec<f64> = grid_lines(0.3, 0.1).map(|c| c.value).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(grid_lines(10.0, 0.0).count(), 0);
        assert_eq!(grid_lines(10.0, -1.0).count(), 0);
        assert_eq!(grid_lines(12.0, 5.0).count(), 3);
    }

    #[test]
    fn too_fine_grid_is_skipped() {
        assert_eq!(grid_lines(60.0, 1e-300).count(), 0);
        assert_eq!(grid_lines(60.0, 1e-7).count(), 0);
        assert_eq!(grid_lines(60.0, f64::MIN_POSITIVE).count(), 0);
        // 9999 spans → 10 000 lines, still allowed
        assert_eq!(grid_lines(9999.0, 1.0).count(), MAX_GRID_LINES);

        let config = SnapConfig {
            snap_to_grid: true,
            grid_size: 1e-300,
            ..Default::default()
        };
        let refs = AxisCandidates::collect::<LabelElement, &str>(
            &[],
            Dimensions::new(60.0, 40.0),
            &config,
            &[],
        );
        assert!(refs.x.iter().all(|c| c.source != SnapSource::Grid));
        assert_eq!(refs.x.len(), 3);
    }
}
