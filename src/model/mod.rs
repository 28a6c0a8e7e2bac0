//! # Geometry Model
//!
//! The plain records the engine consumes and produces. Everything here is
//! measured in millimeters: pixels only exist as a derived view at a given
//! zoom (see [`crate::units`]).
//!
//! The records are shaped after the editor's DTOs so they can be produced
//! directly from JSON. The engine never keeps any of them around; every
//! call builds fresh values and hands ownership to the caller.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in millimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }
}

/// A freely positioned element on the label canvas.
///
/// Only the geometric fields live here. What the element draws (text,
/// barcode, shape, image...) belongs to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelElement {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees. Snapping works on the unrotated box.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub z_index: i32,
    #[serde(default)]
    pub locked: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl LabelElement {
    /// A visible, unlocked element with default opacity.
    pub fn new(id: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            rotation: 0.0,
            opacity: 1.0,
            z_index: 0,
            locked: false,
            visible: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

fn default_opacity() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

/// A width/height pair. Millimeters unless the field says otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaperSize {
    #[default]
    A4,
    A5,
    A6,
    Letter,
    Legal,
    /// Dimensions come from [`PageSettings::custom_dimensions`].
    Custom,
}

impl PaperSize {
    /// Portrait (width, height) of a preset in mm. `None` for `Custom`.
    pub fn preset_dimensions(&self) -> Option<Dimensions> {
        match self {
            PaperSize::A4 => Some(Dimensions::new(210.0, 297.0)),
            PaperSize::A5 => Some(Dimensions::new(148.0, 210.0)),
            PaperSize::A6 => Some(Dimensions::new(105.0, 148.0)),
            PaperSize::Letter => Some(Dimensions::new(215.9, 279.4)),
            PaperSize::Legal => Some(Dimensions::new(215.9, 355.6)),
            PaperSize::Custom => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Edge values (top, right, bottom, left) used for page margins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Gap between neighbouring labels on a sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Spacing {
    pub fn uniform(v: f64) -> Self {
        Self {
            horizontal: v,
            vertical: v,
        }
    }
}

/// Sheet configuration for a print job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSettings {
    #[serde(default)]
    pub paper_size: PaperSize,

    #[serde(default)]
    pub orientation: Orientation,

    /// Requested column count. Reduced when the columns don't fit.
    #[serde(default = "default_labels_per_row")]
    pub labels_per_row: u32,

    #[serde(default = "default_margins")]
    pub margins: Edges,

    #[serde(default = "default_spacing")]
    pub label_spacing: Spacing,

    /// Sheet size for `PaperSize::Custom`, already oriented by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_dimensions: Option<Dimensions>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            labels_per_row: default_labels_per_row(),
            margins: default_margins(),
            label_spacing: default_spacing(),
            custom_dimensions: None,
        }
    }
}

fn default_labels_per_row() -> u32 {
    3
}

fn default_margins() -> Edges {
    Edges::uniform(10.0)
}

fn default_spacing() -> Spacing {
    Spacing::uniform(2.0)
}

/// Resolved placement of one label instance on a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelPosition {
    /// Global index across all pages.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub page: usize,
    pub row: usize,
    pub column: usize,
}

/// A label instance together with where it lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLabel<T> {
    pub data: T,
    pub position: LabelPosition,
}

/// One physical sheet of a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPage<T> {
    pub page_index: usize,
    pub labels: Vec<PlacedLabel<T>>,
}

/// Complete result of paginating a print queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedLayout<T> {
    pub total_pages: usize,
    pub total_labels: usize,
    pub labels_per_page: usize,
    pub rows: usize,
    pub columns: usize,
    pub pages: Vec<LayoutPage<T>>,
    pub paper_dimensions: Dimensions,
    pub label_dimensions: Dimensions,
}

/// Grid geometry of a single empty sheet, for previews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutInfo {
    pub paper_dimensions: Dimensions,
    pub label_dimensions: Dimensions,
    pub rows: usize,
    pub columns: usize,
    pub labels_per_page: usize,
    /// One entry per slot on the sheet, in fill order.
    pub slots: Vec<LabelPosition>,
}
