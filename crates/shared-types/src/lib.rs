pub mod types;

pub use types::{RuleCheck, StructuralResult, StructureKind, StructureProposal, Verdict};
