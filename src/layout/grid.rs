//! # Sheet Grid
//!
//! Fits a fixed label size onto the usable area of a sheet and maps a
//! global instance index to its page, row, column and offset.
//!
//! - Columns: the requested count if it fits, otherwise as many as fit.
//! - Rows: as many as fit.
//! - Both clamp to 1, so an oversized label still gets one cell.
//! - Both cap at [`MAX_GRID_TRACKS`], so a near-zero label size cannot
//!   ask for an unbounded page.

use crate::log::debug;
use crate::model::{Dimensions, Edges, LabelPosition, Spacing};

/// Tolerance for "exactly fits" comparisons.
const FIT_EPSILON: f64 = 1e-9;

/// Upper bound on columns and on rows of one sheet.
pub const MAX_GRID_TRACKS: usize = 1_000;

/// Resolved grid of one sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGrid {
    pub columns: usize,
    pub rows: usize,
    pub margins: Edges,
    pub spacing: Spacing,
    pub label: Dimensions,
}

impl SheetGrid {
    /// Fit `label` onto `paper` inside `margins`.
    pub fn fit(
        paper: Dimensions,
        margins: Edges,
        spacing: Spacing,
        label: Dimensions,
        labels_per_row: u32,
    ) -> Self {
        let usable = Dimensions::new(
            paper.width - margins.horizontal(),
            paper.height - margins.vertical(),
        );

        let requested = (labels_per_row.max(1) as usize).min(MAX_GRID_TRACKS);
        let needed_width = span_length(requested, label.width, spacing.horizontal);
        let columns = if needed_width > usable.width + FIT_EPSILON {
            let fitted = fit_count(usable.width, label.width, spacing.horizontal);
            debug!(requested, fitted, usable_width = usable.width, "column count reduced to fit sheet");
            fitted
        } else {
            requested
        };
        let rows = fit_count(usable.height, label.height, spacing.vertical);

        Self {
            columns,
            rows,
            margins,
            spacing,
            label,
        }
    }

    pub fn labels_per_page(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    /// Placement of global instance `index`. Holds for any index,
    /// independent of how many instances the job has.
    pub fn position(&self, index: usize) -> LabelPosition {
        let per_page = self.labels_per_page().max(1);
        let columns = self.columns.max(1);
        let local = index % per_page;
        let row = local / columns;
        let column = local % columns;

        LabelPosition {
            index,
            x: self.margins.left + track_offset(column, self.label.width, self.spacing.horizontal),
            y: self.margins.top + track_offset(row, self.label.height, self.spacing.vertical),
            width: self.label.width,
            height: self.label.height,
            page: index / per_page,
            row,
            column,
        }
    }
}

/// Length of `count` cells of `size` separated by `gap`.
pub fn span_length(count: usize, size: f64, gap: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    count as f64 * (size + gap) - gap
}

/// Offset of cell `index` from the start of its row or column track.
pub fn track_offset(index: usize, size: f64, gap: f64) -> f64 {
    index as f64 * (size + gap)
}

/// How many cells of `size` separated by `gap` fit in `available`, at
/// least 1 and at most [`MAX_GRID_TRACKS`].
pub fn fit_count(available: f64, size: f64, gap: f64) -> usize {
    let pitch = size + gap;
    if pitch <= 0.0 || !pitch.is_finite() || !available.is_finite() {
        return 1;
    }
    let count = ((available + gap) / pitch + FIT_EPSILON).floor();
    if count < 1.0 {
        1
    } else if count >= MAX_GRID_TRACKS as f64 {
        MAX_GRID_TRACKS
    } else {
        count as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a4() -> Dimensions {
        Dimensions::new(210.0, 297.0)
    }

    #[test]
    fn requested_columns_kept_when_they_fit() {
        let grid = SheetGrid::fit(
            a4(),
            Edges::uniform(10.0),
            Spacing::uniform(2.0),
            Dimensions::new(60.0, 40.0),
            3,
        );
        assert_eq!(grid.columns, 3);
        assert_eq!(grid.rows, 6);
        assert_eq!(grid.labels_per_page(), 18);
    }

    #[test]
    fn columns_fall_back_to_largest_fit() {
        let grid = SheetGrid::fit(
            a4(),
            Edges::uniform(10.0),
            Spacing::uniform(2.0),
            Dimensions::new(60.0, 40.0),
            5,
        );
        // (190 + 2) / 62 = 3.09
        assert_eq!(grid.columns, 3);
    }

    #[test]
    fn fewer_requested_columns_than_fit() {
        let grid = SheetGrid::fit(
            a4(),
            Edges::uniform(10.0),
            Spacing::uniform(2.0),
            Dimensions::new(30.0, 40.0),
            2,
        );
        assert_eq!(grid.columns, 2);
    }

    #[test]
    fn exact_fit_is_not_lost_to_rounding() {
        // 3 × 62 + 2 × 2 = 190 exactly
        let grid = SheetGrid::fit(
            a4(),
            Edges::uniform(10.0),
            Spacing::uniform(2.0),
            Dimensions::new(62.0, 40.0),
            3,
        );
        assert_eq!(grid.columns, 3);
        assert_eq!(fit_count(0.3, 0.1, 0.0), 3);
    }

    #[test]
    fn oversized_label_clamps_to_one_cell() {
        let grid = SheetGrid::fit(
            a4(),
            Edges::uniform(10.0),
            Spacing::uniform(2.0),
            Dimensions::new(500.0, 500.0),
            4,
        );
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.rows, 1);
    }

    #[test]
    fn zero_labels_per_row_clamps() {
        let grid = SheetGrid::fit(
            a4(),
            Edges::uniform(10.0),
            Spacing::uniform(2.0),
            Dimensions::new(60.0, 40.0),
            0,
        );
        assert_eq!(grid.columns, 1);
    }

    #[test]
    fn degenerate_label_size() {
        assert_eq!(fit_count(100.0, 0.0, 0.0), 1);
        assert_eq!(fit_count(-50.0, 10.0, 2.0), 1);
    }

    #[test]
    fn tiny_label_without_spacing_is_capped() {
        let grid = SheetGrid::fit(
            a4(),
            Edges::uniform(10.0),
            Spacing::uniform(0.0),
            Dimensions::new(60.0, 1e-300),
            3,
        );
        assert_eq!(grid.columns, 3);
        assert_eq!(grid.rows, MAX_GRID_TRACKS);
        assert_eq!(grid.labels_per_page(), 3 * MAX_GRID_TRACKS);

        let grid = SheetGrid::fit(
            a4(),
            Edges::uniform(10.0),
            Spacing::uniform(0.0),
            Dimensions::new(1e-9, 1e-9),
            u32::MAX,
        );
        assert_eq!(grid.columns, MAX_GRID_TRACKS);
        assert_eq!(grid.rows, MAX_GRID_TRACKS);
        assert_eq!(grid.labels_per_page(), MAX_GRID_TRACKS * MAX_GRID_TRACKS);

        let last = grid.position(grid.labels_per_page() - 1);
        assert_eq!(last.page, 0);
        assert_eq!(last.row, MAX_GRID_TRACKS - 1);
    }

    #[test]
    fn position_formula() {
        let grid = SheetGrid::fit(
            a4(),
            Edges::uniform(10.0),
            Spacing::uniform(2.0),
            Dimensions::new(60.0, 40.0),
            3,
        );
        let p = grid.position(22);
        // 22 = page 1, local 4 → row 1, column 1
        assert_eq!((p.page, p.row, p.column), (1, 1, 1));
        assert!((p.x - 72.0).abs() < 1e-9);
        assert!((p.y - 52.0).abs() < 1e-9);
        assert!((p.width - 60.0).abs() < 1e-9);

        let first = grid.position(0);
        assert!((first.x - 10.0).abs() < 1e-9);
        assert!((first.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn span_length_excludes_trailing_gap() {
        assert!((span_length(3, 60.0, 2.0) - 184.0).abs() < 1e-9);
        assert_eq!(span_length(0, 60.0, 2.0), 0.0);
    }
}
