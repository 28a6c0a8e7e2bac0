//! JSON request shapes for the CLI and wasm surfaces.
//!
//! Field names are camelCase to match the editor and print-queue DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::layout::QueueEntry;
use crate::model::{Dimensions, LabelElement, PageSettings, Rect};
use crate::snap::{DistributeDirection, DistributionConfig, ResizeAnchor, SnapConfig};

/// A print job: sheet settings, the template's label size and the
/// instances to place.
///
/// Instances are `labels` (already expanded) followed by the expansion of
/// `queue`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutJob {
    #[serde(default)]
    pub page_settings: PageSettings,
    pub label_dimensions: Dimensions,
    #[serde(default)]
    pub labels: Vec<Value>,
    #[serde(default)]
    pub queue: Vec<QueueEntry<Value>>,
}

/// A drag in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapRequest {
    pub rect: Rect,
    #[serde(default)]
    pub elements: Vec<LabelElement>,
    pub canvas: Dimensions,
    #[serde(default)]
    pub config: SnapConfig,
    #[serde(default)]
    pub exclude_ids: Vec<String>,
}

/// A resize in progress. `rect` carries the snapshot values for the edges
/// that are not being dragged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeRequest {
    pub rect: Rect,
    pub anchor: ResizeAnchor,
    #[serde(default)]
    pub elements: Vec<LabelElement>,
    pub canvas: Dimensions,
    #[serde(default)]
    pub config: SnapConfig,
    #[serde(default)]
    pub exclude_ids: Vec<String>,
}

/// A selection to check for even spacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionRequest {
    pub elements: Vec<LabelElement>,
    pub direction: DistributeDirection,
    #[serde(default)]
    pub config: DistributionConfig,
}
