//! # Sheet Layout
//!
//! Places an arbitrary number of same-size label instances onto a sequence
//! of physical paper sheets.
//!
//! The page is the unit here: the grid of one sheet is resolved first
//! (paper size, margins, spacing, label size), and every instance is then
//! placed by pure index arithmetic:
//!
//! ```text
//! page   = i / labels_per_page
//! local  = i % labels_per_page
//! row    = local / columns
//! column = local % columns
//! x      = margin.left + column × (label.width + spacing.horizontal)
//! y      = margin.top  + row    × (label.height + spacing.vertical)
//! ```
//!
//! Nothing about a job other than `(total, labels_per_page)` affects where
//! an instance lands, so the same functions back the live preview and the
//! export pipeline.

pub mod grid;
pub mod queue;

use crate::log::debug;
use crate::model::*;
use crate::units::fit_zoom;

pub use grid::SheetGrid;
pub use queue::{expand_queue, QueueEntry};

/// Thumbnails of a full sheet are never shown above true scale.
pub const MAX_SHEET_SCALE: f64 = 1.0;

/// Physical sheet size in mm for `settings`.
///
/// Presets are portrait and get swapped for landscape. Custom dimensions
/// are used exactly as given; a missing custom size falls back to A4.
pub fn paper_dimensions(settings: &PageSettings) -> Dimensions {
    match settings.paper_size.preset_dimensions() {
        Some(portrait) => match settings.orientation {
            Orientation::Portrait => portrait,
            Orientation::Landscape => portrait.swapped(),
        },
        None => settings.custom_dimensions.unwrap_or_else(|| {
            debug!("custom paper size without dimensions, using A4");
            Dimensions::new(210.0, 297.0)
        }),
    }
}

/// Resolve the grid for `label` on the sheet described by `settings`.
pub fn sheet_grid(settings: &PageSettings, label: Dimensions) -> SheetGrid {
    SheetGrid::fit(
        paper_dimensions(settings),
        settings.margins,
        settings.label_spacing,
        label,
        settings.labels_per_row,
    )
}

/// Placement of global instance `index` for a job with these settings.
pub fn label_position(index: usize, settings: &PageSettings, label: Dimensions) -> LabelPosition {
    sheet_grid(settings, label).position(index)
}

/// Paginate an already expanded, ordered list of label instances.
///
/// Pages hold `labels_per_page` instances each, the last one possibly
/// fewer. No instances means no pages.
pub fn calculate_layout<T: Clone>(
    labels: &[T],
    label: Dimensions,
    settings: &PageSettings,
) -> CalculatedLayout<T> {
    let grid = sheet_grid(settings, label);
    let per_page = grid.labels_per_page();

    let pages: Vec<LayoutPage<T>> = labels
        .chunks(per_page)
        .enumerate()
        .map(|(page_index, chunk)| {
            let first = page_index * per_page;
            LayoutPage {
                page_index,
                labels: chunk
                    .iter()
                    .enumerate()
                    .map(|(offset, data)| PlacedLabel {
                        data: data.clone(),
                        position: grid.position(first + offset),
                    })
                    .collect(),
            }
        })
        .collect();

    debug!(
        labels = labels.len(),
        pages = pages.len(),
        per_page,
        rows = grid.rows,
        columns = grid.columns,
        "layout calculated"
    );

    CalculatedLayout {
        total_pages: pages.len(),
        total_labels: labels.len(),
        labels_per_page: per_page,
        rows: grid.rows,
        columns: grid.columns,
        pages,
        paper_dimensions: paper_dimensions(settings),
        label_dimensions: label,
    }
}

/// Grid geometry of one empty sheet, for previewing before any data is
/// queued.
pub fn calculate_layout_info(label: Dimensions, settings: &PageSettings) -> LayoutInfo {
    let grid = sheet_grid(settings, label);
    LayoutInfo {
        paper_dimensions: paper_dimensions(settings),
        label_dimensions: label,
        rows: grid.rows,
        columns: grid.columns,
        labels_per_page: grid.labels_per_page(),
        slots: (0..grid.labels_per_page()).map(|i| grid.position(i)).collect(),
    }
}

/// Scale at which a whole sheet (mm) fits a preview container (px).
///
/// Same rule as the editor's fit zoom, but capped at 1.0.
pub fn scale_layout_to_fit(paper: Dimensions, container: Dimensions, padding: f64) -> f64 {
    fit_zoom(paper, container, padding, MAX_SHEET_SCALE)
}
