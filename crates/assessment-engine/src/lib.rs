//! Exempt-development assessment engine
//!
//! Answers one question for a lot owner: can the proposed shed or patio go
//! ahead as exempt development, or does it need a full application? Two
//! independent layers gate the verdict — structural dimension checks and
//! site overlay checks (zoning, bushfire, flood) — and both must clear.
//!
//! The whole engine is a pure, synchronous computation: no I/O, no clock, no
//! shared state. Callers own input validation and any persistence.

pub mod assess;
pub mod hazard;
pub mod overlay;
pub mod property;
pub mod structure;
pub mod zone;

pub use assess::{assess, assess_snapshot, AssessmentDetails, AssessmentResult};
pub use hazard::{Bal, FloodCategory};
pub use overlay::{
    evaluate_overlays, normalize_overlay, OverlayFinding, OverlaySnapshot, RawOverlays,
};
pub use property::{load_properties, PropertyError, SampleProperty};
pub use structure::evaluate_structure;
pub use zone::{PermittedZones, Zone};

use shared_types::StructureProposal;

/// Assessment entry point carrying the permitted-zone scope.
pub struct AssessmentEngine {
    permitted: PermittedZones,
}

impl AssessmentEngine {
    /// Engine scoped to the default permitted zones.
    pub fn new() -> Self {
        Self {
            permitted: PermittedZones::default(),
        }
    }

    /// Engine scoped to another jurisdiction's permitted-zone list.
    pub fn with_permitted_zones(permitted: PermittedZones) -> Self {
        Self { permitted }
    }

    /// Assess a proposal against a raw provider attribute bag.
    pub fn assess(&self, proposal: &StructureProposal, raw: &RawOverlays) -> AssessmentResult {
        self.assess_snapshot(proposal, overlay::normalize_overlay(raw))
    }

    /// Assess a proposal against an already-canonical snapshot.
    pub fn assess_snapshot(
        &self,
        proposal: &StructureProposal,
        snapshot: OverlaySnapshot,
    ) -> AssessmentResult {
        assess::assess_with(proposal, snapshot, &self.permitted)
    }

    /// Run the overlay gates alone.
    pub fn evaluate_overlays(&self, snapshot: &OverlaySnapshot) -> OverlayFinding {
        overlay::evaluate_overlays(snapshot, &self.permitted)
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new()
    }
}
