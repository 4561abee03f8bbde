//! The Advancement milestone ladder.
//!
//! # Model
//! - 24 milestones, declared in unlock order. Milestone `i` (1-indexed) requires `i` Advancements.
//! - Each milestone is `Locked` or `Earned`. `Locked -> Earned` happens once the count reaches the
//!   requirement and is never reversed, except by a full layer reset.
//! - Visibility is derived: a milestone is visible while `count >= requirement`.
//! - Earned flags are stored as a `u32` bitmask so hosts can keep them in a single column.

use crate::{
    bitmask_flags::{BitmaskFlags, FlagBitmask},
    define_bitmask_flags,
    error::AdvancementError,
};

define_bitmask_flags!(Milestone, u32, {
    UnlockLightning,
    FlameUpgradeRow,
    UnlockCryo,
    PassiveElementalGain,
    EarlyRunBoost,
    LifeBuyableRow,
    UnlockAir,
    AquaBar,
    EarlyRunBoostExtension,
    FreeLifeBuyables,
    EfficientAir,
    UnlockEarth,
    BranchResets,
    FlameUpgradeAutobuy,
    SublinearWindSpeeds,
    UnlockCombinators,
    LifeBuyableAutobuy,
    CubedSparkMolecule,
    DualLightningModes,
    SecondAquaBar,
    MoleculeLimit,
    PassiveAirGain,
    PassiveCryoGain,
    UnlockIntrabonds,
});

/// Raw storage for earned milestone flags.
pub type EarnedBits = u32;

impl Milestone {
    /// 1-indexed position on the ladder.
    pub fn position(self) -> u32 {
        self.bit_index() as u32 + 1
    }

    /// Advancements needed to earn this milestone.
    pub fn requirement(self) -> u32 {
        self.position()
    }

    /// The milestone at 1-indexed `position`.
    pub fn at_position(position: u32) -> Option<Self> {
        let index = position.checked_sub(1)?;
        u8::try_from(index).ok().and_then(Self::from_bit_index)
    }

    /// Effect text. Milestones 5 and 15 carry a live value and are rendered through
    /// [`crate::layer::AdvancementsLayer::describe`]; this is their template.
    pub fn description(self) -> &'static str {
        match self {
            Milestone::UnlockLightning => "Unlock Lightning",
            Milestone::FlameUpgradeRow => "Unlock a new row of Flame Upgrades",
            Milestone::UnlockCryo => "Unlock Cryo",
            Milestone::PassiveElementalGain => {
                "Gain 100% of Flame, Life, and Aqua Particles every second."
            }
            Milestone::EarlyRunBoost => {
                "Flame, Life, and Aqua Particle gain is tripled for the first {adv5} seconds of a run."
            }
            Milestone::LifeBuyableRow => "Unlock a new row of Life Buyables",
            Milestone::UnlockAir => "Unlock Air",
            Milestone::AquaBar => "Unlock a new Aqua Bar",
            Milestone::EarlyRunBoostExtension => {
                "The milestone at 5 Advancements lasts 30 seconds longer per Advancement after 7"
            }
            Milestone::FreeLifeBuyables => "Purchasing Life Buyables does not spend Life Particles",
            Milestone::EfficientAir => {
                "The Air requirement uses a more efficient formula, you can buy max Air, and you can buy all Life Buyables at once."
            }
            Milestone::UnlockEarth => "Unlock Earth, and all Aqua Bars are twice as fast.",
            Milestone::BranchResets => {
                "Layers only reset along their branches, rather than by row (this does NOT affect Cryo Challenges)."
            }
            Milestone::FlameUpgradeAutobuy => {
                "After 1 second of a reset, all Flame Upgrades are automatically purchased if you can afford them."
            }
            Milestone::SublinearWindSpeeds => {
                "Wind/Zephyr/Tornado Speeds work sublinearly (square root) rather than logarithmically, and Aqua Bars are faster based on your Earth Grid Level ({adv15}x)"
            }
            Milestone::UnlockCombinators => {
                "Unlock Particle Combinators, gain 100% of Lightning Particle gain every second, and starting a Cryo Challenge only resets the Aqua layer."
            }
            Milestone::LifeBuyableAutobuy => {
                "All Life Buyables are automatically purchased every second."
            }
            Milestone::CubedSparkMolecule => "The Spark Molecule effect is cubed.",
            Milestone::DualLightningModes => "You can activate two Lightning Modes at once.",
            Milestone::SecondAquaBar => "Unlock a new Aqua Bar.",
            Milestone::MoleculeLimit => "Increase the Molecule limit by 20%.",
            Milestone::PassiveAirGain => "Gain 100% of Air Particle gain every second.",
            Milestone::PassiveCryoGain => "Gain 100% of Cryo Particle gain every second.",
            Milestone::UnlockIntrabonds => "Unlock Intrabonds.",
        }
    }

    /// Requirement header, e.g. `"5 Advancement"`.
    pub fn requirement_label(self) -> String {
        format!("{} Advancement", self.requirement())
    }

    pub fn is_visible(self, count: u32) -> bool {
        count >= self.requirement()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneState {
    Locked,
    Earned,
}

/// Latched earned state for every milestone on the ladder.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneLadder {
    earned: BitmaskFlags<EarnedBits>,
}

impl MilestoneLadder {
    /// Restores a ladder from stored bits.
    ///
    /// Bits past the last milestone are rejected, since they cannot have been produced by
    /// [`MilestoneLadder::update`].
    pub fn from_bits(bits: EarnedBits) -> Result<Self, AdvancementError> {
        let known = Milestone::ALL.len() as u32;
        if known < EarnedBits::BITS && bits >> known != 0 {
            let unknown = (bits >> known).trailing_zeros() + known;
            return Err(AdvancementError::UnknownMilestone(unknown as u8));
        }
        Ok(Self {
            earned: BitmaskFlags::new(bits),
        })
    }

    pub fn bits(&self) -> EarnedBits {
        self.earned.bits
    }

    pub fn is_earned(&self, milestone: Milestone) -> bool {
        self.earned.has(milestone)
    }

    pub fn state(&self, milestone: Milestone) -> MilestoneState {
        if self.is_earned(milestone) {
            MilestoneState::Earned
        } else {
            MilestoneState::Locked
        }
    }

    pub fn earned_count(&self) -> u32 {
        self.earned.len()
    }

    /// Latches every milestone whose requirement `count` meets, returning the newly earned ones.
    pub fn update(&mut self, count: u32) -> Vec<Milestone> {
        let mut newly_earned = Vec::new();
        for &milestone in Milestone::ALL {
            if milestone.is_visible(count) && !self.is_earned(milestone) {
                self.earned.add(milestone);
                log::info!(
                    "Earned milestone {} ({})",
                    milestone.position(),
                    milestone.requirement_label()
                );
                newly_earned.push(milestone);
            }
        }
        newly_earned
    }

    /// Returns every milestone to `Locked`.
    pub fn reset_all(&mut self) {
        self.earned.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_has_one_milestone_per_count() {
        assert_eq!(Milestone::ALL.len(), 24);
        for (index, milestone) in Milestone::ALL.iter().enumerate() {
            assert_eq!(milestone.requirement(), index as u32 + 1);
        }
        assert_eq!(Milestone::UnlockLightning.requirement(), 1);
        assert_eq!(Milestone::EarlyRunBoost.requirement(), 5);
        assert_eq!(Milestone::EarlyRunBoostExtension.requirement(), 9);
        assert_eq!(Milestone::SublinearWindSpeeds.requirement(), 15);
        assert_eq!(Milestone::UnlockIntrabonds.requirement(), 24);
    }

    #[test]
    fn at_position_is_one_indexed() {
        assert_eq!(Milestone::at_position(0), None);
        assert_eq!(Milestone::at_position(1), Some(Milestone::UnlockLightning));
        assert_eq!(Milestone::at_position(24), Some(Milestone::UnlockIntrabonds));
        assert_eq!(Milestone::at_position(25), None);
        assert_eq!(Milestone::at_position(u32::MAX), None);
    }

    #[test]
    fn earned_iff_count_reaches_requirement() {
        for count in 0..=24u32 {
            let mut ladder = MilestoneLadder::default();
            ladder.update(count);
            for &milestone in Milestone::ALL {
                assert_eq!(
                    ladder.is_earned(milestone),
                    count >= milestone.requirement(),
                    "count {count}, milestone {}",
                    milestone.position()
                );
            }
            assert_eq!(ladder.earned_count(), count);
        }
    }

    #[test]
    fn update_is_monotonic_and_reports_new_milestones_once() {
        let mut ladder = MilestoneLadder::default();
        assert_eq!(
            ladder.update(2),
            vec![Milestone::UnlockLightning, Milestone::FlameUpgradeRow]
        );
        assert!(ladder.update(2).is_empty());
        assert_eq!(ladder.update(3), vec![Milestone::UnlockCryo]);

        // A lower count never unlatches anything.
        assert!(ladder.update(0).is_empty());
        assert_eq!(ladder.state(Milestone::UnlockCryo), MilestoneState::Earned);
        assert_eq!(ladder.state(Milestone::UnlockAir), MilestoneState::Locked);
    }

    #[test]
    fn reset_all_locks_everything() {
        let mut ladder = MilestoneLadder::default();
        ladder.update(24);
        assert_eq!(ladder.earned_count(), 24);

        ladder.reset_all();
        assert_eq!(ladder.earned_count(), 0);
        assert!(Milestone::ALL.iter().all(|m| !ladder.is_earned(*m)));
    }

    #[test]
    fn from_bits_rejects_unknown_milestones() {
        let mut ladder = MilestoneLadder::default();
        ladder.update(24);
        assert_eq!(MilestoneLadder::from_bits(ladder.bits()), Ok(ladder));

        assert_eq!(
            MilestoneLadder::from_bits(1 << 24),
            Err(AdvancementError::UnknownMilestone(24))
        );
        assert_eq!(
            MilestoneLadder::from_bits(1 << 31 | 1),
            Err(AdvancementError::UnknownMilestone(31))
        );
    }

    #[test]
    fn visibility_follows_the_count() {
        assert!(!Milestone::UnlockCryo.is_visible(2));
        assert!(Milestone::UnlockCryo.is_visible(3));
        assert!(Milestone::UnlockCryo.is_visible(24));
    }

    #[test]
    fn every_milestone_has_text() {
        for &milestone in Milestone::ALL {
            assert!(!milestone.description().is_empty());
        }
        assert_eq!(Milestone::UnlockAir.requirement_label(), "7 Advancement");
    }
}
