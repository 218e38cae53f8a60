//! Structural dimension checks
//!
//! Three fixed gates: floor area, height, and boundary setback. Thresholds
//! are inclusive on the passing side and every gate is evaluated
//! independently — a proposal failing one check still reports the others.

use shared_types::{RuleCheck, StructuralResult, StructureProposal, Verdict};

const AREA_LIMIT_M2: f64 = 20.0;
const HEIGHT_LIMIT_M: f64 = 3.0;
const SETBACK_MIN_M: f64 = 0.5;

const CODES_CITATION: &str = "SEPP (Exempt and Complying Development Codes) 2008";

/// Run the three structural checks against a proposal.
///
/// Never fails for finite input; nonsensical geometry (zero or negative
/// dimensions) simply produces a failing or trivially-passing verdict.
pub fn evaluate_structure(proposal: &StructureProposal) -> StructuralResult {
    let checks = vec![
        check_area(proposal),
        check_height(proposal),
        check_setback(proposal),
    ];

    let verdict = if checks.iter().all(|c| c.ok) {
        Verdict::LikelyExempt
    } else {
        Verdict::NotExempt
    };

    let reasons = match verdict {
        Verdict::LikelyExempt => checks.iter().map(|c| c.message.clone()).collect(),
        Verdict::NotExempt => checks
            .iter()
            .filter(|c| !c.ok)
            .map(|c| c.message.clone())
            .collect(),
    };

    StructuralResult {
        verdict,
        reasons,
        checks,
    }
}

fn check_area(proposal: &StructureProposal) -> RuleCheck {
    let area = proposal.area_m2();
    let ok = area <= AREA_LIMIT_M2;
    let message = if ok {
        "Area (≤ 20 m²) satisfied".to_string()
    } else {
        format!("Area {:.1} m² exceeds 20 m²", round1(area))
    };
    rule_check("structure-area", ok, message, "cl 2.18(1)(b)")
}

fn check_height(proposal: &StructureProposal) -> RuleCheck {
    let ok = proposal.height_m <= HEIGHT_LIMIT_M;
    let message = if ok {
        "Height (≤ 3.0 m) satisfied".to_string()
    } else {
        format!("Height {:.1} m exceeds 3.0 m", round1(proposal.height_m))
    };
    rule_check("structure-height", ok, message, "cl 2.18(1)(d)")
}

fn check_setback(proposal: &StructureProposal) -> RuleCheck {
    let ok = proposal.nearest_boundary_m >= SETBACK_MIN_M;
    let message = if ok {
        "Nearest boundary distance (≥ 0.5 m) satisfied".to_string()
    } else {
        format!(
            "Nearest boundary distance {:.1} m is under 0.5 m",
            round1(proposal.nearest_boundary_m)
        )
    };
    rule_check("structure-setback", ok, message, "cl 2.18(1)(f)")
}

fn rule_check(id: &str, ok: bool, message: String, clause: &str) -> RuleCheck {
    RuleCheck {
        id: id.to_string(),
        ok,
        message,
        clause: Some(clause.to_string()),
        citation: Some(CODES_CITATION.to_string()),
    }
}

/// Round to one decimal place, half away from zero, for display.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
