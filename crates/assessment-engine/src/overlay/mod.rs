//! Overlay layer: site constraints independent of the proposed structure
//!
//! Gates are checked in a fixed order (all of them, no short-circuit):
//! 1. Unknown zone / unknown BAL — insufficient data to clear the lot
//! 2. Zone outside the permitted set
//! 3. Flood control lot / explicit flood hazard category
//! 4. Extreme bushfire rating (BAL-40, BAL-FZ)

pub mod adapter;
pub mod rules;

pub use adapter::{normalize_overlay, RawOverlays};
pub use rules::evaluate_overlays;

use serde::{Deserialize, Serialize};

use crate::hazard::{Bal, FloodCategory};
use crate::zone::Zone;

/// Canonical per-lot overlay snapshot produced by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlaySnapshot {
    pub zone: Zone,
    pub bal: Bal,
    /// Kept for backward compatibility with older property feeds; never
    /// contradicts a known `flood_category`.
    pub flood_control_lot: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flood_category: Option<FloodCategory>,
}

/// Outcome of the overlay gates for one snapshot, snapshot echoed back for
/// downstream display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayFinding {
    pub ok: bool,
    pub reasons: Vec<String>,
    pub snapshot: OverlaySnapshot,
}
