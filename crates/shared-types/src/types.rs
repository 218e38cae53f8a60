/// Outcome of an assessment: either the proposal can likely proceed as exempt
/// development, or a full application is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    LikelyExempt,
    NotExempt,
}

/// Kind of minor structure covered by the exempt-development pathway
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureKind {
    Shed,
    Patio,
}

/// A proposed structure, dimensions in metres.
///
/// Callers supply finite, non-negative values; the engine compares them as-is
/// and performs no range validation of its own.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StructureProposal {
    pub kind: StructureKind,
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,
    pub nearest_boundary_m: f64,
}

impl StructureProposal {
    /// Footprint area, computed on demand (never stored).
    pub fn area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }
}

/// Result of one named rule check.
///
/// `ok` is the source of truth; `message` is presentational only.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RuleCheck {
    pub id: String,
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

/// Verdict of the structural layer alone, with its three checks.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StructuralResult {
    pub verdict: Verdict,
    pub reasons: Vec<String>,
    pub checks: Vec<RuleCheck>,
}
