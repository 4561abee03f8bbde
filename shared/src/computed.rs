//! Derived milestone parameters.
//!
//! Each parameter is a pure function of explicit inputs. Nothing here reads global state:
//! the duration at 5 Advancements takes the ladder as an argument, so the retroactive effect of
//! the milestone at 9 is visible in the signature.

use crate::{
    constants::{
        AQUA_BAR_GRID_LEVEL_ROOT, AQUA_BAR_SPEED_BASE, EARLY_RUN_BOOST_BASE_SECS,
        EARLY_RUN_BOOST_OFFSET, EARLY_RUN_BOOST_SECS_PER_ADVANCEMENT,
    },
    milestone::{Milestone, MilestoneLadder},
};

/// Inputs a derived parameter may read.
#[derive(Debug, Clone, Copy)]
pub struct ParamInputs<'a> {
    pub advancements: u32,
    pub ladder: &'a MilestoneLadder,
    pub grid_level: f64,
}

pub trait ComputedParam {
    /// The milestone whose effect this parameter feeds.
    const MILESTONE: Milestone;

    fn compute(inputs: &ParamInputs<'_>) -> f64;
}

/// Seconds of tripled Flame/Life/Aqua gain at the start of a run.
///
/// 120s, extended by 30s per Advancement after 7 once [`Milestone::EarlyRunBoostExtension`]
/// is earned.
pub struct EarlyRunBoostDuration;
impl ComputedParam for EarlyRunBoostDuration {
    const MILESTONE: Milestone = Milestone::EarlyRunBoost;

    fn compute(inputs: &ParamInputs<'_>) -> f64 {
        early_run_boost_secs(inputs.advancements, inputs.ladder)
    }
}

/// Aqua Bar speed multiplier from the Earth grid level.
pub struct AquaBarSpeedup;
impl ComputedParam for AquaBarSpeedup {
    const MILESTONE: Milestone = Milestone::SublinearWindSpeeds;

    fn compute(inputs: &ParamInputs<'_>) -> f64 {
        aqua_bar_speedup(inputs.grid_level)
    }
}

/// Milestone 5's duration. Once milestone 9 is earned this is `120 + (advancements - 7) * 30`
/// with no floor, so a restored ladder holding milestone 9 at a count below 7 yields less than 120.
pub fn early_run_boost_secs(advancements: u32, ladder: &MilestoneLadder) -> f64 {
    let mut secs = EARLY_RUN_BOOST_BASE_SECS;
    if ladder.is_earned(Milestone::EarlyRunBoostExtension) {
        let extra = advancements as f64 - EARLY_RUN_BOOST_OFFSET;
        secs += extra * EARLY_RUN_BOOST_SECS_PER_ADVANCEMENT;
    }
    secs
}

/// `2^(level^(1/1.5))`.
pub fn aqua_bar_speedup(grid_level: f64) -> f64 {
    AQUA_BAR_SPEED_BASE.powf(grid_level.powf(AQUA_BAR_GRID_LEVEL_ROOT.recip()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder_at(count: u32) -> MilestoneLadder {
        let mut ladder = MilestoneLadder::default();
        ladder.update(count);
        ladder
    }

    #[test]
    fn early_run_boost_is_flat_before_the_extension() {
        for count in 0..9 {
            assert_eq!(early_run_boost_secs(count, &ladder_at(count)), 120.0);
        }
    }

    #[test]
    fn early_run_boost_extends_after_seven() {
        assert_eq!(early_run_boost_secs(9, &ladder_at(9)), 180.0);
        assert_eq!(early_run_boost_secs(10, &ladder_at(10)), 210.0);
        assert_eq!(early_run_boost_secs(24, &ladder_at(24)), 630.0);
    }

    #[test]
    fn early_run_boost_reads_the_ladder_not_the_count() {
        // Count alone does not extend the boost; the milestone at 9 must be earned.
        assert_eq!(early_run_boost_secs(12, &MilestoneLadder::default()), 120.0);
    }

    #[test]
    fn early_run_boost_is_unfloored_below_seven() {
        let extended = MilestoneLadder::from_bits(1 << 8).expect("known milestone");
        assert!(extended.is_earned(Milestone::EarlyRunBoostExtension));
        assert_eq!(early_run_boost_secs(7, &extended), 120.0);
        assert_eq!(early_run_boost_secs(3, &extended), 0.0);
        assert_eq!(early_run_boost_secs(0, &extended), -90.0);
    }

    #[test]
    fn aqua_bar_speedup_from_grid_level() {
        assert_eq!(aqua_bar_speedup(0.0), 1.0);
        assert_eq!(aqua_bar_speedup(1.0), 2.0);
        assert!((aqua_bar_speedup(8.0) - 16.0).abs() < 1e-9);
        assert!((aqua_bar_speedup(27.0) - 512.0).abs() < 1e-6);
    }

    #[test]
    fn params_name_their_milestones() {
        let ladder = ladder_at(10);
        let inputs = ParamInputs {
            advancements: 10,
            ladder: &ladder,
            grid_level: 8.0,
        };
        assert_eq!(EarlyRunBoostDuration::MILESTONE.requirement(), 5);
        assert_eq!(EarlyRunBoostDuration::compute(&inputs), 210.0);
        assert_eq!(AquaBarSpeedup::MILESTONE.requirement(), 15);
        assert!((AquaBarSpeedup::compute(&inputs) - 16.0).abs() < 1e-9);
    }
}
