//! Overlay gating rules
//!
//! Every applicable gate is evaluated and the reasons accumulate in a fixed
//! order, so a caller can surface all of them at once rather than one per
//! round-trip. An empty reason list means the lot clears the overlay layer.

use super::{OverlayFinding, OverlaySnapshot};
use crate::hazard::Bal;
use crate::zone::{PermittedZones, Zone};

/// Apply the overlay gates to a canonical snapshot.
pub fn evaluate_overlays(snapshot: &OverlaySnapshot, permitted: &PermittedZones) -> OverlayFinding {
    let mut reasons = Vec::new();

    // Unknowns surface why the lot can't be cleared automatically
    if snapshot.zone == Zone::Unknown {
        reasons.push("Zone is unknown (insufficient data).".to_string());
    }
    if snapshot.bal == Bal::Unknown {
        reasons.push("BAL rating is unknown (insufficient data).".to_string());
    }

    if !permitted.contains(snapshot.zone) {
        reasons.push(format!(
            "Zone {} is not residential/permitted (allowed: {}).",
            snapshot.zone,
            permitted.describe()
        ));
    }
    if snapshot.flood_control_lot {
        reasons.push("Lot intersects a flood control/hazard area.".to_string());
    }
    if let Some(category) = snapshot.flood_category {
        if category.is_hazard() {
            reasons.push(format!("Flood category {category} present."));
        }
    }
    if snapshot.bal.is_extreme() {
        reasons.push(format!("Bushfire category {} (extreme).", snapshot.bal));
    }

    OverlayFinding {
        ok: reasons.is_empty(),
        reasons,
        snapshot: snapshot.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hazard::FloodCategory;

    fn base() -> OverlaySnapshot {
        OverlaySnapshot {
            zone: Zone::R2,
            bal: Bal::B12_5,
            flood_control_lot: false,
            flood_category: Some(FloodCategory::None),
        }
    }

    fn evaluate(snapshot: OverlaySnapshot) -> OverlayFinding {
        evaluate_overlays(&snapshot, &PermittedZones::default())
    }

    #[test]
    fn test_passes_for_all_permitted_zones() {
        for zone in [Zone::R1, Zone::R2, Zone::R3, Zone::R5, Zone::B1, Zone::B2, Zone::B4] {
            let finding = evaluate(OverlaySnapshot { zone, ..base() });
            assert!(finding.ok, "{zone} should pass");
            assert!(finding.reasons.is_empty());
        }
    }

    #[test]
    fn test_fails_for_non_permitted_zone() {
        let finding = evaluate(OverlaySnapshot { zone: Zone::IN1, ..base() });
        assert!(!finding.ok);
        assert_eq!(finding.reasons.len(), 1);
        assert_eq!(
            finding.reasons[0],
            "Zone IN1 is not residential/permitted (allowed: R1, R2, R3, R5, B1, B2, B4)."
        );
    }

    #[test]
    fn test_fails_for_flood_control_lot() {
        let finding = evaluate(OverlaySnapshot { flood_control_lot: true, ..base() });
        assert!(!finding.ok);
        assert!(finding.reasons[0].contains("flood control/hazard"));
    }

    #[test]
    fn test_fails_for_explicit_flood_category() {
        let finding = evaluate(OverlaySnapshot {
            flood_category: Some(FloodCategory::Floodway),
            ..base()
        });
        assert!(!finding.ok);
        assert!(finding.reasons.iter().any(|r| r == "Flood category FLOODWAY present."));
    }

    #[test]
    fn test_absent_flood_category_does_not_gate() {
        let finding = evaluate(OverlaySnapshot { flood_category: None, ..base() });
        assert!(finding.ok);
    }

    #[test]
    fn test_fails_for_extreme_bal_ratings() {
        for bal in [Bal::B40, Bal::Fz] {
            let finding = evaluate(OverlaySnapshot { bal, ..base() });
            assert!(!finding.ok);
            assert!(
                finding.reasons.iter().any(|r| r.contains("(extreme)")),
                "expected extreme reason for {bal}, got {:?}",
                finding.reasons
            );
        }
    }

    #[test]
    fn test_surfaces_unknown_zone_and_bal() {
        let unknown_zone = evaluate(OverlaySnapshot { zone: Zone::Unknown, ..base() });
        assert!(!unknown_zone.ok);
        assert!(unknown_zone.reasons[0].contains("Zone is unknown"));

        let unknown_bal = evaluate(OverlaySnapshot { bal: Bal::Unknown, ..base() });
        assert!(!unknown_bal.ok);
        assert!(unknown_bal.reasons[0].contains("BAL rating is unknown"));
    }

    #[test]
    fn test_stacks_reasons_in_gate_order() {
        let finding = evaluate(OverlaySnapshot {
            zone: Zone::IN1,
            bal: Bal::B40,
            flood_control_lot: true,
            flood_category: Some(FloodCategory::Floodway),
        });
        assert!(!finding.ok);
        assert_eq!(finding.reasons.len(), 4);
        assert!(finding.reasons[0].contains("not residential/permitted"));
        assert!(finding.reasons[1].contains("flood control/hazard"));
        assert!(finding.reasons[2].contains("Flood category FLOODWAY"));
        assert!(finding.reasons[3].contains("Bushfire category BAL-40"));
    }

    #[test]
    fn test_snapshot_echoed_back() {
        let snapshot = base();
        let finding = evaluate(snapshot.clone());
        assert_eq!(finding.snapshot, snapshot);
    }

    #[test]
    fn test_custom_permitted_zones() {
        let rural = PermittedZones::new([Zone::RU1, Zone::RU2]);
        let finding = evaluate_overlays(&OverlaySnapshot { zone: Zone::RU1, ..base() }, &rural);
        assert!(finding.ok);

        let finding = evaluate_overlays(&base(), &rural);
        assert!(!finding.ok);
        assert!(finding.reasons[0].contains("allowed: RU1, RU2"));
    }
}
