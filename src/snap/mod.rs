//! # Snap Engine
//!
//! Turns a raw drag or resize into a corrected rectangle plus the guides
//! that explain the correction.
//!
//! The search is per axis and fully independent: an x match never moves y.
//! For a drag, three points of the moving rectangle are tried against the
//! axis's reference list (min edge, center, max edge). Each point keeps its
//! closest reference within the threshold, and the closest of the three
//! wins. Ties are resolved by order, never by value:
//!
//! - references are scanned canvas → canvas center → elements → grid, and
//!   the first one at the minimal distance is kept;
//! - between points, min edge beats center beats max edge on equal
//!   distance.
//!
//! Every call is stateless. During a drag the caller invokes it once per
//! pointer move and simply uses the latest result.

pub mod candidates;
pub mod distribution;
pub mod resize;

use serde::{Deserialize, Serialize};

use crate::log::{debug, trace};
use crate::model::{Dimensions, LabelElement, Rect};

use candidates::{AxisCandidates, Candidate};

pub use distribution::{
    calculate_distribution_guides, calculate_distribution_guides_with, DistributeDirection,
    DistributionConfig,
};
pub use resize::{calculate_resize_snap, resize_from_snapshot, ParseAnchorError, ResizeAnchor};

/// Anything that can act as a snap reference or be snapped.
///
/// Rendering layers keep their own element records; they only need to
/// expose the box, an id to exclude the moving element, and visibility.
pub trait SnapTarget {
    fn id(&self) -> &str;
    fn bounds(&self) -> Rect;
    fn is_visible(&self) -> bool {
        true
    }
}

impl SnapTarget for LabelElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn bounds(&self) -> Rect {
        self.rect()
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Which reference families participate in snapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapConfig {
    pub enabled: bool,
    /// Maximum distance in mm at which a reference attracts.
    pub threshold: f64,
    pub snap_to_canvas: bool,
    pub snap_to_elements: bool,
    pub snap_to_center: bool,
    pub snap_to_grid: bool,
    /// Grid pitch in mm.
    pub grid_size: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 2.0,
            snap_to_canvas: true,
            snap_to_elements: true,
            snap_to_center: true,
            snap_to_grid: false,
            grid_size: 5.0,
        }
    }
}

/// Orientation of a guide line. A vertical guide marks an x position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideAxis {
    Vertical,
    Horizontal,
}

/// What produced a guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapSource {
    Canvas,
    Element,
    Center,
    Grid,
}

/// A transient alignment line to draw during a drag or resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapGuide {
    pub axis: GuideAxis,
    /// Position in mm along the perpendicular axis.
    pub position: f64,
    pub source: SnapSource,
}

/// Corrected geometry plus the guides that justify it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapResult {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub guides: Vec<SnapGuide>,
}

impl SnapResult {
    pub(crate) fn unchanged(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            guides: Vec::new(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// The closest reference found for one point of the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SnapMatch {
    pub value: f64,
    pub source: SnapSource,
    pub distance: f64,
}

/// Closest candidate to `point` within `threshold` that `accept` allows.
///
/// Only a strictly smaller distance replaces the current best, so the
/// first candidate in list order wins a tie.
pub(crate) fn closest_match(
    point: f64,
    candidates: &[Candidate],
    threshold: f64,
    accept: impl Fn(f64) -> bool,
) -> Option<SnapMatch> {
    let mut best: Option<SnapMatch> = None;
    for c in candidates {
        let distance = (c.value - point).abs();
        if distance > threshold || !accept(c.value) {
            continue;
        }
        trace!(point, candidate = c.value, distance, "snap candidate in range");
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(SnapMatch {
                value: c.value,
                source: c.source,
                distance,
            });
        }
    }
    best
}

/// Snap one axis of a dragged box: returns the new min coordinate and the
/// match.
///
/// `min` and `size` describe the box along this axis. The new position is
/// derived from the reference value rather than by adding a delta, so the
/// matched point lands on the reference exactly.
fn snap_axis(
    min: f64,
    size: f64,
    candidates: &[Candidate],
    threshold: f64,
) -> Option<(f64, SnapMatch)> {
    let offsets = [0.0, size / 2.0, size];

    let mut best: Option<(f64, SnapMatch)> = None;
    for offset in offsets {
        let Some(m) = closest_match(min + offset, candidates, threshold, |_| true) else {
            continue;
        };
        if best.map_or(true, |(_, b)| m.distance < b.distance) {
            best = Some((m.value - offset, m));
        }
    }
    best
}

/// Snap a dragged rectangle to canvas, sibling, center and grid references.
///
/// Siblings that are hidden or whose id is in `exclude_ids` (normally the
/// moving element itself) are ignored. With `config.enabled == false` the
/// rectangle comes back unchanged with no guides.
pub fn calculate_snap<T, S>(
    rect: Rect,
    siblings: &[T],
    canvas_width: f64,
    canvas_height: f64,
    config: &SnapConfig,
    exclude_ids: &[S],
) -> SnapResult
where
    T: SnapTarget,
    S: AsRef<str>,
{
    if !config.enabled {
        return SnapResult::unchanged(rect);
    }

    let canvas = Dimensions::new(canvas_width, canvas_height);
    let AxisCandidates { x: x_refs, y: y_refs } =
        AxisCandidates::collect(siblings, canvas, config, exclude_ids);

    let mut result = SnapResult::unchanged(rect);

    if let Some((x, m)) = snap_axis(rect.x, rect.width, &x_refs, config.threshold) {
        debug!(from = rect.x, to = x, guide = m.value, source = ?m.source, "x snapped");
        result.x = x;
        result.guides.push(SnapGuide {
            axis: GuideAxis::Vertical,
            position: m.value,
            source: m.source,
        });
    }

    if let Some((y, m)) = snap_axis(rect.y, rect.height, &y_refs, config.threshold) {
        debug!(from = rect.y, to = y, guide = m.value, source = ?m.source, "y snapped");
        result.y = y;
        result.guides.push(SnapGuide {
            axis: GuideAxis::Horizontal,
            position: m.value,
            source: m.source,
        });
    }

    result
}
