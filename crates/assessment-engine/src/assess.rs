//! Combined assessment
//!
//! Runs the structural checks and the overlay gates, then merges them into a
//! single verdict. The combination is a strict logical AND: either layer
//! failing fails the whole assessment.

use serde::{Deserialize, Serialize};
use shared_types::{RuleCheck, StructuralResult, StructureProposal, Verdict};

use crate::overlay::{self, OverlayFinding, OverlaySnapshot, RawOverlays};
use crate::structure::evaluate_structure;
use crate::zone::PermittedZones;

const OVERLAY_CLAUSE: &str = "Part 10 Division D";
const OVERLAY_CITATION: &str = "Albury DCP 2010";

/// Both layer results, echoed for downstream display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentDetails {
    pub structure: StructuralResult,
    pub overlays: OverlayFinding,
}

/// Merged outcome of one assessment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub verdict: Verdict,
    pub reasons: Vec<String>,
    pub checks: Vec<RuleCheck>,
    pub details: AssessmentDetails,
}

/// Assess a proposal against a raw provider attribute bag, using the default
/// permitted-zone scope.
pub fn assess(proposal: &StructureProposal, raw: &RawOverlays) -> AssessmentResult {
    assess_snapshot(proposal, overlay::normalize_overlay(raw))
}

/// Assess a proposal against an already-canonical snapshot, using the default
/// permitted-zone scope.
pub fn assess_snapshot(proposal: &StructureProposal, snapshot: OverlaySnapshot) -> AssessmentResult {
    assess_with(proposal, snapshot, &PermittedZones::default())
}

pub(crate) fn assess_with(
    proposal: &StructureProposal,
    snapshot: OverlaySnapshot,
    permitted: &PermittedZones,
) -> AssessmentResult {
    let structure = evaluate_structure(proposal);
    let overlays = overlay::evaluate_overlays(&snapshot, permitted);

    let verdict = if structure.verdict == Verdict::LikelyExempt && overlays.ok {
        Verdict::LikelyExempt
    } else {
        Verdict::NotExempt
    };

    tracing::debug!(
        structure = ?structure.verdict,
        overlay_ok = overlays.ok,
        ?verdict,
        "combined assessment"
    );

    let mut checks = structure.checks.clone();
    checks.extend(overlay_checks(&overlays));

    // A passing run reports the three satisfied statements; a failing run
    // reports only failure text, never a mix. The satisfied statements stay
    // available under details.structure.reasons.
    let reasons = match verdict {
        Verdict::LikelyExempt => structure.reasons.clone(),
        Verdict::NotExempt => {
            let mut reasons = match structure.verdict {
                Verdict::NotExempt => structure.reasons.clone(),
                Verdict::LikelyExempt => Vec::new(),
            };
            reasons.extend(overlays.reasons.iter().cloned());
            reasons
        }
    };

    AssessmentResult {
        verdict,
        reasons,
        checks,
        details: AssessmentDetails {
            structure,
            overlays,
        },
    }
}

/// Wrap the overlay finding as checks: one failing check per reason, or a
/// single synthetic passing check when every gate cleared.
fn overlay_checks(finding: &OverlayFinding) -> Vec<RuleCheck> {
    if finding.ok {
        return vec![overlay_check("overlay-scope", true, "Overlay checks satisfied".to_string())];
    }
    finding
        .reasons
        .iter()
        .enumerate()
        .map(|(i, reason)| overlay_check(&format!("overlay-{}", i + 1), false, reason.clone()))
        .collect()
}

fn overlay_check(id: &str, ok: bool, message: String) -> RuleCheck {
    RuleCheck {
        id: id.to_string(),
        ok,
        message,
        clause: Some(OVERLAY_CLAUSE.to_string()),
        citation: Some(OVERLAY_CITATION.to_string()),
    }
}
