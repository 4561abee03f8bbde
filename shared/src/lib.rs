pub mod bitmask_flags;
pub mod computed;
pub mod constants;
pub mod conversion;
pub mod error;
pub mod layer;
pub mod milestone;
pub mod reset;
pub mod signal;
pub mod thresholds;

pub use bitmask_flags::{BitmaskFlags, FlagBitmask};
pub use computed::{AquaBarSpeedup, ComputedParam, EarlyRunBoostDuration, ParamInputs};
pub use constants::{
    ADVANCEMENT_REQUIREMENTS, LAYER_COLOR, LAYER_ID, LAYER_NAME, MILESTONE_COUNT,
    REQUIREMENT_COUNT,
};
pub use conversion::{ConversionFlags, ConversionScaling, CumulativeConversion, ThresholdScaling};
pub use error::AdvancementError;
pub use layer::{AdvancementsLayer, ConvertOutcome, LayerSnapshot, MilestoneView, TreeNode};
pub use milestone::{EarnedBits, Milestone, MilestoneLadder, MilestoneState};
pub use reset::{Resettable, reset_all};
pub use signal::{Memo, Signal, Version};
pub use thresholds::ThresholdTable;
