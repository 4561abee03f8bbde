use thiserror::Error;

/// Errors raised when requirement tables, counts, or milestone ids break the layer's contract.
///
/// These are content/contract defects, not runtime conditions a player can cause. Hosts surface
/// them at their boundaries (e.g. restoring stored rows) instead of clamping.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdvancementError {
    #[error("advancement count {count} is outside the requirement table (len {len})")]
    RequirementOutOfRange { count: u32, len: usize },

    #[error("requirement table is empty")]
    EmptyRequirements,

    #[error("requirement {index} is not a positive number")]
    InvalidRequirement { index: usize },

    #[error("requirement {index} is lower than the one before it")]
    UnsortedRequirements { index: usize },

    #[error("requirement table must end with an infinite entry")]
    MissingTerminalRequirement,

    #[error("unknown milestone bit index {0}")]
    UnknownMilestone(u8),
}
