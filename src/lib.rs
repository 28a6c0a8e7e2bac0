//! # Labelkit
//!
//! The geometry core of a label designer and its print queue.
//!
//! Two consumers share this crate. The interactive editor converts pointer
//! positions to millimeters, asks the snap engine for a corrected box and
//! draws the returned guides. The export pipeline hands over the expanded
//! print queue and gets back where every label instance lands on which
//! sheet. Rendering, event wiring, barcode generation and persistence all
//! live elsewhere.
//!
//! ## Architecture
//!
//! ```text
//! pointer event (px)
//!       ↓
//!   [units]    — px ↔ mm at a zoom, zoom steps, fit-to-container
//!       ↓
//!   [snap]     — per-axis reference search → corrected rect + guides
//!       ↓
//! editor applies correction
//!
//! export request
//!       ↓
//!   [layout]   — sheet grid + pagination → positioned instances
//!       ↓
//! rendering backend
//! ```
//!
//! Every function is pure: explicit inputs, a fresh owned output, no
//! shared state. Degenerate input (zero sizes, empty lists,
//! `labelsPerRow = 0`) is clamped to the nearest sane value instead of
//! failing. Only the JSON entry points below can return an error.

pub mod error;
pub mod layout;
pub mod log;
pub mod model;
pub mod request;
pub mod snap;
pub mod units;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::LabelError;

use layout::expand_queue;
use request::{DistributionRequest, LayoutJob, ResizeRequest, SnapRequest};

/// Instances of a job: explicit labels first, then the expanded queue.
fn job_instances(job: &LayoutJob) -> Vec<serde_json::Value> {
    let mut instances = job.labels.clone();
    instances.extend(expand_queue(&job.queue));
    instances
}

/// Paginate a print job given as JSON. Returns the layout as JSON.
pub fn layout_json(json: &str) -> Result<String, LabelError> {
    let job: LayoutJob = serde_json::from_str(json)?;
    let instances = job_instances(&job);
    let layout = layout::calculate_layout(&instances, job.label_dimensions, &job.page_settings);
    Ok(serde_json::to_string_pretty(&layout)?)
}

/// Empty-sheet grid for a print job given as JSON. Instances are ignored.
pub fn layout_info_json(json: &str) -> Result<String, LabelError> {
    let job: LayoutJob = serde_json::from_str(json)?;
    let info = layout::calculate_layout_info(job.label_dimensions, &job.page_settings);
    Ok(serde_json::to_string_pretty(&info)?)
}

/// Drag snapping for a request given as JSON.
pub fn snap_json(json: &str) -> Result<String, LabelError> {
    let req: SnapRequest = serde_json::from_str(json)?;
    let result = snap::calculate_snap(
        req.rect,
        &req.elements,
        req.canvas.width,
        req.canvas.height,
        &req.config,
        &req.exclude_ids,
    );
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Resize snapping for a request given as JSON.
pub fn resize_snap_json(json: &str) -> Result<String, LabelError> {
    let req: ResizeRequest = serde_json::from_str(json)?;
    let result = snap::calculate_resize_snap(
        req.rect,
        req.anchor,
        &req.elements,
        req.canvas.width,
        req.canvas.height,
        &req.config,
        &req.exclude_ids,
    );
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Even-spacing guides for a selection given as JSON.
pub fn distribution_json(json: &str) -> Result<String, LabelError> {
    let req: DistributionRequest = serde_json::from_str(json)?;
    let guides =
        snap::calculate_distribution_guides_with(&req.elements, req.direction, &req.config);
    Ok(serde_json::to_string_pretty(&guides)?)
}
