//! # Units and Zoom
//!
//! Millimeters are the only unit the engine stores or compares. Pixels are
//! a view: `mm × (96 / 25.4) × zoom`. The 96 px/inch screen constant is
//! fixed; print export uses its own DPI (see [`PrintResolution`]) and the
//! two must never be mixed.

use serde::{Deserialize, Serialize};

use crate::model::{Dimensions, Rect};
use crate::snap::SnapTarget;

/// On-screen reference resolution, CSS pixels per inch.
pub const SCREEN_DPI: f64 = 96.0;

pub const MM_PER_INCH: f64 = 25.4;

/// PDF points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Float drift tolerance when comparing zoom levels.
pub const ZOOM_EPSILON: f64 = 0.001;

/// Screen pixels per millimeter at zoom 1.
pub const PX_PER_MM: f64 = SCREEN_DPI / MM_PER_INCH;

pub fn mm_to_px(mm: f64, zoom: f64) -> f64 {
    mm * PX_PER_MM * zoom
}

pub fn px_to_mm(px: f64, zoom: f64) -> f64 {
    px / (PX_PER_MM * zoom)
}

/// Millimeters to PDF points (1/72 inch).
pub fn mm_to_pt(mm: f64) -> f64 {
    mm / MM_PER_INCH * POINTS_PER_INCH
}

pub fn pt_to_mm(pt: f64) -> f64 {
    pt / POINTS_PER_INCH * MM_PER_INCH
}

/// Resolution used when rasterizing labels for print export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintResolution {
    pub dpi: f64,
}

impl Default for PrintResolution {
    fn default() -> Self {
        Self { dpi: 300.0 }
    }
}

impl PrintResolution {
    pub fn new(dpi: f64) -> Self {
        Self { dpi }
    }

    /// Device pixels for a length in mm at this resolution.
    pub fn mm_to_px(&self, mm: f64) -> f64 {
        mm / MM_PER_INCH * self.dpi
    }

    pub fn px_to_mm(&self, px: f64) -> f64 {
        if self.dpi <= 0.0 {
            return 0.0;
        }
        px / self.dpi * MM_PER_INCH
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomDirection {
    In,
    Out,
}

/// The discrete zoom steps offered by the editor, ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoomLevels(Vec<f64>);

impl Default for ZoomLevels {
    fn default() -> Self {
        Self(vec![0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0, 3.0, 4.0])
    }
}

impl ZoomLevels {
    /// Builds a level list, sorting it ascending.
    pub fn new(mut levels: Vec<f64>) -> Self {
        levels.retain(|z| z.is_finite() && *z > 0.0);
        levels.sort_by(|a, b| a.total_cmp(b));
        levels.dedup();
        Self(levels)
    }

    pub fn levels(&self) -> &[f64] {
        &self.0
    }

    /// The next level strictly above (`In`) or below (`Out`) `current`.
    ///
    /// At either end of the list the first/last level is returned. An
    /// empty list leaves `current` unchanged.
    pub fn next(&self, current: f64, direction: ZoomDirection) -> f64 {
        let (Some(&first), Some(&last)) = (self.0.first(), self.0.last()) else {
            return current;
        };
        match direction {
            ZoomDirection::In => self
                .0
                .iter()
                .copied()
                .find(|z| *z > current + ZOOM_EPSILON)
                .unwrap_or(last),
            ZoomDirection::Out => self
                .0
                .iter()
                .rev()
                .copied()
                .find(|z| *z < current - ZOOM_EPSILON)
                .unwrap_or(first),
        }
    }
}

/// Next zoom step using the default level list.
pub fn next_zoom_level(current: f64, direction: ZoomDirection) -> f64 {
    ZoomLevels::default().next(current, direction)
}

/// Zoom cap when fitting a label into the editor viewport.
pub const MAX_FIT_ZOOM: f64 = 2.0;

/// Zoom that makes `content` (mm) fit inside `container` (px).
///
/// The available area is the container minus `padding` on every side. The
/// result never exceeds `max_zoom` and is never NaN or infinite: empty
/// content yields the cap, a container smaller than its padding yields 0.
pub fn fit_zoom(content: Dimensions, container: Dimensions, padding: f64, max_zoom: f64) -> f64 {
    let content_w = mm_to_px(content.width, 1.0);
    let content_h = mm_to_px(content.height, 1.0);
    let available_w = (container.width - 2.0 * padding).max(0.0);
    let available_h = (container.height - 2.0 * padding).max(0.0);

    let ratio = |available: f64, content: f64| {
        if content > 0.0 {
            available / content
        } else {
            max_zoom
        }
    };

    ratio(available_w, content_w)
        .min(ratio(available_h, content_h))
        .min(max_zoom)
        .max(0.0)
}

/// Editor "fit to window" zoom, capped at 2×.
pub fn calculate_fit_zoom(
    content_width_mm: f64,
    content_height_mm: f64,
    container_width_px: f64,
    container_height_px: f64,
    padding: f64,
) -> f64 {
    fit_zoom(
        Dimensions::new(content_width_mm, content_height_mm),
        Dimensions::new(container_width_px, container_height_px),
        padding,
        MAX_FIT_ZOOM,
    )
}

/// Union of all visible element bounds, or `None` when nothing is visible.
///
/// Feeds [`calculate_fit_zoom`] for "zoom to content".
pub fn content_bounds<T: SnapTarget>(elements: &[T]) -> Option<Rect> {
    elements
        .iter()
        .filter(|e| e.is_visible())
        .map(|e| e.bounds())
        .reduce(|acc, r| acc.union(&r))
}
