//! The Advancements layer.
//!
//! Owns the Advancement count and the milestone ladder, mirrors the two external inputs it reads
//! (the shared particle gain rate and the Earth grid level), and publishes everything the host
//! needs to drive purchases and show the layer.
//!
//! The count is the only cell this layer writes, through [`AdvancementsLayer::convert`] and
//! [`Resettable::reset`]. Milestones are re-evaluated after every write.

use crate::{
    bitmask_flags::FlagBitmask,
    computed::{AquaBarSpeedup, ComputedParam, EarlyRunBoostDuration, ParamInputs},
    constants::{
        BASE_RESOURCE_NAME, LAYER_COLOR, LAYER_ID, LAYER_NAME, TREE_NODE_GLOW_COLOR,
        TREE_NODE_SYMBOL,
    },
    conversion::{ConversionFlags, ConversionScaling, CumulativeConversion, ThresholdScaling},
    error::AdvancementError,
    milestone::{EarnedBits, Milestone, MilestoneLadder, MilestoneState},
    reset::{Resettable, reset_all},
    signal::{Memo, Signal},
    thresholds::ThresholdTable,
};

/// Static facts about the layer's node in the layer tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeNode {
    pub layer_id: &'static str,
    pub symbol: &'static str,
    pub color: &'static str,
    /// `Some` while a purchase is affordable.
    pub glow_color: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneView {
    pub milestone: Milestone,
    pub state: MilestoneState,
    pub visible: bool,
}

/// Everything the layer publishes to navigation and display.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSnapshot {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub base_resource_name: &'static str,
    pub advancements: u32,
    /// Rounded-up particle gain needed for the next Advancement.
    pub next_at: f64,
    pub can_convert: bool,
    pub adv5_time: f64,
    pub adv15_eff: f64,
    pub earned: EarnedBits,
    pub milestones: Vec<MilestoneView>,
    pub tree_node: TreeNode,
}

/// Result of a single purchase step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOutcome {
    pub gained: u32,
    pub newly_earned: Vec<Milestone>,
}

#[derive(Debug, Clone)]
pub struct AdvancementsLayer {
    conversion: CumulativeConversion<ThresholdScaling>,
    advancements: Signal<u32>,
    milestones: Signal<MilestoneLadder>,
    particle_gain: Signal<f64>,
    grid_level: Signal<f64>,
    adv5_time: Memo<f64, 2>,
    adv15_eff: Memo<f64, 1>,
}

impl Default for AdvancementsLayer {
    fn default() -> Self {
        Self::with_table(ThresholdTable::default())
    }
}

impl AdvancementsLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: ThresholdTable) -> Self {
        Self {
            conversion: CumulativeConversion::new(
                ThresholdScaling::new(table),
                ConversionFlags::default(),
            ),
            advancements: Signal::new(0),
            milestones: Signal::new(MilestoneLadder::default()),
            particle_gain: Signal::new(0.0),
            grid_level: Signal::new(0.0),
            adv5_time: Memo::default(),
            adv15_eff: Memo::default(),
        }
    }

    /// Rebuilds a layer on the default requirement table from state a host stored elsewhere.
    ///
    /// Fails if the count does not index into the requirement table or the bits name unknown
    /// milestones. Milestones the count already qualifies for are latched.
    pub fn restore(advancements: u32, earned: EarnedBits) -> Result<Self, AdvancementError> {
        Self::restore_with_table(ThresholdTable::default(), advancements, earned)
    }

    /// Like [`AdvancementsLayer::restore`], checking the count against `table`.
    pub fn restore_with_table(
        table: ThresholdTable,
        advancements: u32,
        earned: EarnedBits,
    ) -> Result<Self, AdvancementError> {
        table.check_count(advancements)?;
        let mut layer = Self::with_table(table);
        layer.advancements.set(advancements);
        layer.milestones.set(MilestoneLadder::from_bits(earned)?);
        layer.evaluate_milestones();
        Ok(layer)
    }

    pub fn advancements(&self) -> u32 {
        *self.advancements.get()
    }

    pub fn particle_gain(&self) -> f64 {
        *self.particle_gain.get()
    }

    pub fn grid_level(&self) -> f64 {
        *self.grid_level.get()
    }

    pub fn ladder(&self) -> &MilestoneLadder {
        self.milestones.get()
    }

    /// Mirrors the shared particle gain rate (owned by the main layer).
    pub fn set_particle_gain(&mut self, rate: f64) {
        self.particle_gain.set(rate);
    }

    /// Mirrors the Earth layer's grid level.
    pub fn set_grid_level(&mut self, level: f64) {
        self.grid_level.set(level);
    }

    /// Units obtainable right now: 1 if the rate meets the current requirement, else 0.
    pub fn current_gain(&self) -> u32 {
        self.conversion
            .scaling
            .current_gain(self.particle_gain(), self.advancements())
    }

    pub fn current_at(&self) -> f64 {
        self.conversion.scaling.current_at(self.advancements())
    }

    pub fn next_at(&self) -> f64 {
        self.conversion.scaling.next_at(self.advancements())
    }

    /// The requirement as shown on the reset button (rounded up).
    pub fn display_cost(&self) -> f64 {
        self.conversion.display_cost(self.advancements())
    }

    /// Whether a purchase would gain anything. Drives the tree node glow.
    pub fn can_convert(&self) -> bool {
        self.conversion
            .can_convert(self.particle_gain(), self.advancements())
    }

    pub fn tree_node(&self) -> TreeNode {
        TreeNode {
            layer_id: LAYER_ID,
            symbol: TREE_NODE_SYMBOL,
            color: LAYER_COLOR,
            glow_color: self.can_convert().then_some(TREE_NODE_GLOW_COLOR),
        }
    }

    /// Buys at most one Advancement and latches any milestones it unlocks.
    pub fn convert(&mut self) -> ConvertOutcome {
        let rate = self.particle_gain();
        let mut count = self.advancements();
        let gained = self.conversion.convert(rate, &mut count);
        if gained == 0 {
            return ConvertOutcome::default();
        }
        self.advancements.set(count);
        ConvertOutcome {
            gained,
            newly_earned: self.evaluate_milestones(),
        }
    }

    /// Re-checks every milestone against the current count.
    pub fn evaluate_milestones(&mut self) -> Vec<Milestone> {
        let mut ladder = *self.milestones.get();
        let newly_earned = ladder.update(self.advancements());
        self.milestones.set(ladder);
        newly_earned
    }

    pub fn milestone_state(&self, milestone: Milestone) -> MilestoneState {
        self.ladder().state(milestone)
    }

    pub fn has_milestone(&self, milestone: Milestone) -> bool {
        self.ladder().is_earned(milestone)
    }

    pub fn is_visible(&self, milestone: Milestone) -> bool {
        milestone.is_visible(self.advancements())
    }

    fn param_inputs(&self) -> ParamInputs<'_> {
        ParamInputs {
            advancements: self.advancements(),
            ladder: self.ladder(),
            grid_level: self.grid_level(),
        }
    }

    /// Duration in seconds of the boost granted at 5 Advancements.
    pub fn adv5_time(&self) -> f64 {
        self.adv5_time.get(
            [self.advancements.version(), self.milestones.version()],
            || EarlyRunBoostDuration::compute(&self.param_inputs()),
        )
    }

    /// Aqua Bar speed multiplier granted at 15 Advancements.
    pub fn adv15_eff(&self) -> f64 {
        self.adv15_eff.get([self.grid_level.version()], || {
            AquaBarSpeedup::compute(&self.param_inputs())
        })
    }

    /// Effect text for `milestone`, with live values filled in.
    pub fn describe(&self, milestone: Milestone) -> String {
        let text = milestone.description();
        if milestone == EarlyRunBoostDuration::MILESTONE {
            text.replace("{adv5}", &format!("{:.0}", self.adv5_time()))
        } else if milestone == AquaBarSpeedup::MILESTONE {
            text.replace("{adv15}", &format!("{:.2}", self.adv15_eff()))
        } else {
            text.to_string()
        }
    }

    pub fn snapshot(&self) -> LayerSnapshot {
        LayerSnapshot {
            id: LAYER_ID,
            name: LAYER_NAME,
            color: LAYER_COLOR,
            base_resource_name: BASE_RESOURCE_NAME,
            advancements: self.advancements(),
            next_at: self.display_cost(),
            can_convert: self.can_convert(),
            adv5_time: self.adv5_time(),
            adv15_eff: self.adv15_eff(),
            earned: self.ladder().bits(),
            milestones: Milestone::ALL
                .iter()
                .map(|&milestone| MilestoneView {
                    milestone,
                    state: self.milestone_state(milestone),
                    visible: self.is_visible(milestone),
                })
                .collect(),
            tree_node: self.tree_node(),
        }
    }
}

impl Resettable for AdvancementsLayer {
    /// Clears the count and every earned milestone. The mirrored inputs belong to other layers
    /// and are left alone.
    fn reset(&mut self) {
        let mut cells: [&mut dyn Resettable; 2] = [&mut self.advancements, &mut self.milestones];
        reset_all(&mut cells);
        log::info!("{LAYER_NAME} layer reset");
    }
}
