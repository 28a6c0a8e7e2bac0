//! Resize snapping.
//!
//! Only the edges named by the anchor move, and only those edges are
//! matched. The opposite edges stay where the resize started: callers build
//! the live rectangle from the drag-start snapshot (see
//! [`resize_from_snapshot`]) instead of accumulating per-event deltas, which
//! is what keeps a long resize from drifting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::log::debug;
use crate::model::{Dimensions, Rect};

use super::candidates::AxisCandidates;
use super::{closest_match, GuideAxis, SnapConfig, SnapGuide, SnapResult, SnapTarget};

/// The handle being dragged, named by compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeAnchor {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

impl ResizeAnchor {
    pub fn moves_north(&self) -> bool {
        matches!(self, ResizeAnchor::N | ResizeAnchor::Ne | ResizeAnchor::Nw)
    }

    pub fn moves_south(&self) -> bool {
        matches!(self, ResizeAnchor::S | ResizeAnchor::Se | ResizeAnchor::Sw)
    }

    pub fn moves_east(&self) -> bool {
        matches!(self, ResizeAnchor::E | ResizeAnchor::Ne | ResizeAnchor::Se)
    }

    pub fn moves_west(&self) -> bool {
        matches!(self, ResizeAnchor::W | ResizeAnchor::Nw | ResizeAnchor::Sw)
    }

    fn as_str(&self) -> &'static str {
        match self {
            ResizeAnchor::N => "n",
            ResizeAnchor::S => "s",
            ResizeAnchor::E => "e",
            ResizeAnchor::W => "w",
            ResizeAnchor::Ne => "ne",
            ResizeAnchor::Nw => "nw",
            ResizeAnchor::Se => "se",
            ResizeAnchor::Sw => "sw",
        }
    }
}

impl fmt::Display for ResizeAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resize anchor `{0}` (expected one of n, s, e, w, ne, nw, se, sw)")]
pub struct ParseAnchorError(pub String);

impl FromStr for ResizeAnchor {
    type Err = ParseAnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" => Ok(ResizeAnchor::N),
            "s" => Ok(ResizeAnchor::S),
            "e" => Ok(ResizeAnchor::E),
            "w" => Ok(ResizeAnchor::W),
            "ne" => Ok(ResizeAnchor::Ne),
            "nw" => Ok(ResizeAnchor::Nw),
            "se" => Ok(ResizeAnchor::Se),
            "sw" => Ok(ResizeAnchor::Sw),
            _ => Err(ParseAnchorError(s.to_string())),
        }
    }
}

/// Live rectangle for a resize, from the drag-start snapshot and the total
/// pointer delta since the drag started.
///
/// Edges not named by `anchor` keep their snapshot coordinates. Sizes are
/// clamped to `min_size`; a clamped west/north edge stops against the fixed
/// opposite edge.
pub fn resize_from_snapshot(
    snapshot: Rect,
    anchor: ResizeAnchor,
    dx: f64,
    dy: f64,
    min_size: f64,
) -> Rect {
    let min_size = min_size.max(0.0);
    let mut rect = snapshot;

    if anchor.moves_east() {
        rect.width = (snapshot.width + dx).max(min_size);
    } else if anchor.moves_west() {
        rect.width = (snapshot.width - dx).max(min_size);
        rect.x = snapshot.right() - rect.width;
    }

    if anchor.moves_south() {
        rect.height = (snapshot.height + dy).max(min_size);
    } else if anchor.moves_north() {
        rect.height = (snapshot.height - dy).max(min_size);
        rect.y = snapshot.bottom() - rect.height;
    }

    rect
}

/// Snap the moving edges of a resize.
///
/// `rect` must already hold the snapshot coordinates for the fixed edges
/// (as produced by [`resize_from_snapshot`]). Only the moving edges are
/// matched against the same reference lists a drag uses; the box's own
/// center never participates. Canvas and sibling centers are still in
/// those lists, so a moving edge can land on one and produce a center
/// guide. A reference that would collapse the box to zero or negative size
/// is skipped. Each snapped edge yields one guide.
pub fn calculate_resize_snap<T, S>(
    rect: Rect,
    anchor: ResizeAnchor,
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
    let refs = AxisCandidates::collect(siblings, canvas, config, exclude_ids);
    let threshold = config.threshold;
    let mut result = SnapResult::unchanged(rect);

    if anchor.moves_east() {
        let left = rect.x;
        if let Some(m) = closest_match(rect.right(), &refs.x, threshold, |v| v > left) {
            debug!(%anchor, edge = "east", to = m.value, "resize snapped");
            result.width = m.value - left;
            result.guides.push(guide(GuideAxis::Vertical, m.value, m.source));
        }
    } else if anchor.moves_west() {
        let right = rect.right();
        if let Some(m) = closest_match(rect.x, &refs.x, threshold, |v| v < right) {
            debug!(%anchor, edge = "west", to = m.value, "resize snapped");
            result.x = m.value;
            result.width = right - m.value;
            result.guides.push(guide(GuideAxis::Vertical, m.value, m.source));
        }
    }

    if anchor.moves_south() {
        let top = rect.y;
        if let Some(m) = closest_match(rect.bottom(), &refs.y, threshold, |v| v > top) {
            debug!(%anchor, edge = "south", to = m.value, "resize snapped");
            result.height = m.value - top;
            result.guides.push(guide(GuideAxis::Horizontal, m.value, m.source));
        }
    } else if anchor.moves_north() {
        let bottom = rect.bottom();
        if let Some(m) = closest_match(rect.y, &refs.y, threshold, |v| v < bottom) {
            debug!(%anchor, edge = "north", to = m.value, "resize snapped");
            result.y = m.value;
            result.height = bottom - m.value;
            result.guides.push(guide(GuideAxis::Horizontal, m.value, m.source));
        }
    }

    result
}

fn guide(axis: GuideAxis, position: f64, source: super::SnapSource) -> SnapGuide {
    SnapGuide {
        axis,
        position,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LabelElement;
    use crate::snap::SnapSource;

    const NO_EXCLUDE: &[&str] = &[];

    fn sibling() -> Vec<LabelElement> {
        vec![LabelElement::new("a", Rect::new(30.0, 20.0, 10.0, 10.0))]
    }

    fn elements_only() -> SnapConfig {
        SnapConfig {
            snap_to_canvas: false,
            snap_to_center: false,
            ..Default::default()
        }
    }

    #[test]
    fn parse_anchor() {
        assert_eq!("se".parse::<ResizeAnchor>(), Ok(ResizeAnchor::Se));
        assert_eq!("NW".parse::<ResizeAnchor>(), Ok(ResizeAnchor::Nw));
        assert!("north".parse::<ResizeAnchor>().is_err());
        assert_eq!(ResizeAnchor::Sw.to_string(), "sw");
    }

    #[test]
    fn anchor_edges() {
        assert!(ResizeAnchor::Se.moves_south() && ResizeAnchor::Se.moves_east());
        assert!(!ResizeAnchor::Se.moves_north() && !ResizeAnchor::Se.moves_west());
        assert!(ResizeAnchor::N.moves_north() && !ResizeAnchor::N.moves_east());
    }

    #[test]
    fn east_edge_snaps_width() {
        let rect = Rect::new(5.0, 5.0, 24.0, 8.0); // right edge 29 near sibling's 30
        let result =
            calculate_resize_snap(rect, ResizeAnchor::E, &sibling(), 60.0, 40.0, &elements_only(), NO_EXCLUDE);
        assert!((result.x - 5.0).abs() < 1e-9);
        assert!((result.width - 25.0).abs() < 1e-9);
        assert!((result.height - 8.0).abs() < 1e-9);
        assert_eq!(result.guides.len(), 1);
        assert_eq!(result.guides[0].axis, GuideAxis::Vertical);
        assert_eq!(result.guides[0].position, 30.0);
    }

    #[test]
    fn west_edge_keeps_right_edge_fixed() {
        let rect = Rect::new(41.5, 5.0, 10.0, 5.0); // left edge near sibling right 40
        let result =
            calculate_resize_snap(rect, ResizeAnchor::W, &sibling(), 60.0, 40.0, &elements_only(), NO_EXCLUDE);
        assert!((result.x - 40.0).abs() < 1e-9);
        assert!((result.x + result.width - 51.5).abs() < 1e-9);
    }

    #[test]
    fn corner_snaps_both_edges() {
        let rect = Rect::new(5.0, 5.0, 24.0, 14.0); // right 29, bottom 19
        let result =
            calculate_resize_snap(rect, ResizeAnchor::Se, &sibling(), 60.0, 40.0, &elements_only(), NO_EXCLUDE);
        assert!((result.width - 25.0).abs() < 1e-9);
        assert!((result.height - 15.0).abs() < 1e-9);
        assert_eq!(result.guides.len(), 2);
    }

    #[test]
    fn own_center_is_ignored() {
        // Box center sits at canvas center 30, edges far from everything.
        let config = SnapConfig {
            snap_to_elements: false,
            ..Default::default()
        };
        let rect = Rect::new(20.0, 10.0, 20.0, 10.0);
        let result =
            calculate_resize_snap::<LabelElement, &str>(rect, ResizeAnchor::E, &[], 60.0, 40.0, &config, &[]);
        assert_eq!(result.rect(), rect);
        assert!(result.guides.is_empty());
    }

    #[test]
    fn moving_edge_lands_on_canvas_center() {
        let config = SnapConfig {
            snap_to_elements: false,
            ..Default::default()
        };
        let rect = Rect::new(5.0, 5.0, 24.0, 8.0); // right edge 29, canvas center 30
        let result =
            calculate_resize_snap::<LabelElement, &str>(rect, ResizeAnchor::E, &[], 60.0, 40.0, &config, &[]);
        assert_eq!(result.width, 25.0);
        assert_eq!(result.guides.len(), 1);
        assert_eq!(result.guides[0].position, 30.0);
        assert_eq!(result.guides[0].source, SnapSource::Center);
    }

    #[test]
    fn never_collapses_box() {
        // West edge would snap to the sibling edge at 30 = right edge of box.
        let rect = Rect::new(29.0, 0.0, 1.0, 5.0);
        let result =
            calculate_resize_snap(rect, ResizeAnchor::W, &sibling(), 60.0, 40.0, &elements_only(), NO_EXCLUDE);
        assert!(result.width > 0.0);
    }

    #[test]
    fn disabled_is_noop() {
        let config = SnapConfig {
            enabled: false,
            ..Default::default()
        };
        let rect = Rect::new(5.0, 5.0, 24.0, 14.0);
        let result =
            calculate_resize_snap(rect, ResizeAnchor::Se, &sibling(), 60.0, 40.0, &config, NO_EXCLUDE);
        assert_eq!(result.rect(), rect);
        assert!(result.guides.is_empty());
    }

    #[test]
    fn snapshot_resize_holds_opposite_edges() {
        let snapshot = Rect::new(10.0, 10.0, 20.0, 10.0);
        let r = resize_from_snapshot(snapshot, ResizeAnchor::Nw, 5.0, -3.0, 1.0);
        assert_eq!(r, Rect::new(15.0, 7.0, 15.0, 13.0));
        assert!((r.right() - 30.0).abs() < 1e-9);
        assert!((r.bottom() - 20.0).abs() < 1e-9);

        let clamped = resize_from_snapshot(snapshot, ResizeAnchor::W, 50.0, 0.0, 2.0);
        assert!((clamped.width - 2.0).abs() < 1e-9);
        assert!((clamped.x - 28.0).abs() < 1e-9);
    }

    #[test]
    fn repeated_events_do_not_drift() {
        let snapshot = Rect::new(5.0, 5.0, 20.0, 8.0);
        let siblings = sibling();
        let config = elements_only();
        let mut last = None;
        for step in 0..50 {
            // Pointer jitters around +4.6mm; each event starts from the snapshot.
            let dx = 4.6 + (step % 3) as f64 * 0.1;
            let live = resize_from_snapshot(snapshot, ResizeAnchor::E, dx, 0.0, 1.0);
            let result = calculate_resize_snap(live, ResizeAnchor::E, &siblings, 60.0, 40.0, &config, NO_EXCLUDE);
            assert!((result.x - 5.0).abs() < 1e-9);
            assert!((result.width - 25.0).abs() < 1e-9);
            assert_eq!(result.guides[0].source, SnapSource::Element);
            last = Some(result);
        }
        assert!(last.is_some());
    }
}
