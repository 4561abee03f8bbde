//! Cumulative conversion from the particle gain rate into Advancements.
//!
//! The base resource is never spent: holding a high enough rate is what earns a unit. The
//! scaling callbacks decide how much can be gained and what the pending purchase costs; the
//! conversion applies the flags (round-up cost, buy-max) on top.

use crate::thresholds::ThresholdTable;

/// Scaling callbacks consumed by [`CumulativeConversion`].
///
/// `gained` is the current amount of the gain resource, `base` the current base resource value.
pub trait ConversionScaling {
    /// Units obtainable right now.
    fn current_gain(&self, base: f64, gained: u32) -> u32;

    /// Cost of the purchase currently being worked toward.
    fn current_at(&self, gained: u32) -> f64;

    /// Cost of the next purchase.
    fn next_at(&self, gained: u32) -> f64;
}

/// Threshold-indexed scaling: one unit whenever `base >= requirement(gained)`.
///
/// Only one unit is pending at a time, so `current_at` and `next_at` coincide. An infinite
/// requirement is never met, not even by an infinite base.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdScaling {
    pub table: ThresholdTable,
}

impl ThresholdScaling {
    pub fn new(table: ThresholdTable) -> Self {
        Self { table }
    }
}

impl ConversionScaling for ThresholdScaling {
    fn current_gain(&self, base: f64, gained: u32) -> u32 {
        let req = self.table.requirement(gained);
        if req.is_finite() && base >= req {
            1
        } else {
            0
        }
    }

    fn current_at(&self, gained: u32) -> f64 {
        self.table.requirement(gained)
    }

    fn next_at(&self, gained: u32) -> f64 {
        self.table.requirement(gained)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionFlags {
    /// Costs are shown rounded up; fractional purchases do not exist.
    pub round_up_cost: bool,
    /// When false, a single evaluation never yields more than one unit.
    pub buy_max: bool,
}

impl Default for ConversionFlags {
    fn default() -> Self {
        Self {
            round_up_cost: true,
            buy_max: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CumulativeConversion<S: ConversionScaling> {
    pub scaling: S,
    pub flags: ConversionFlags,
}

impl<S: ConversionScaling> CumulativeConversion<S> {
    pub fn new(scaling: S, flags: ConversionFlags) -> Self {
        Self { scaling, flags }
    }

    /// What a purchase would yield right now, after applying the buy-max flag.
    pub fn actual_gain(&self, base: f64, gained: u32) -> u32 {
        let gain = self.scaling.current_gain(base, gained);
        if self.flags.buy_max { gain } else { gain.min(1) }
    }

    pub fn can_convert(&self, base: f64, gained: u32) -> bool {
        self.actual_gain(base, gained) > 0
    }

    /// Cost of the pending purchase as displayed to the player.
    pub fn display_cost(&self, gained: u32) -> f64 {
        let cost = self.scaling.next_at(gained);
        if self.flags.round_up_cost {
            cost.ceil()
        } else {
            cost
        }
    }

    /// Applies one purchase step to `gained` and returns the amount added (0 when unaffordable).
    pub fn convert(&self, base: f64, gained: &mut u32) -> u32 {
        let gain = self.actual_gain(base, *gained);
        if gain > 0 {
            *gained = gained.saturating_add(gain);
            log::debug!("Converted {base} base into {gain} (now {gained})");
        }
        gain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ADVANCEMENT_REQUIREMENTS;

    fn layer_conversion() -> CumulativeConversion<ThresholdScaling> {
        CumulativeConversion::default()
    }

    #[test]
    fn current_and_next_at_match_the_table() {
        let conv = layer_conversion();
        for n in 0..24u32 {
            assert_eq!(conv.scaling.current_at(n), ADVANCEMENT_REQUIREMENTS[n as usize]);
            assert_eq!(conv.scaling.next_at(n), ADVANCEMENT_REQUIREMENTS[n as usize]);
        }
    }

    #[test]
    fn gain_is_binary_with_inclusive_boundary() {
        let conv = layer_conversion();
        for n in 0..24u32 {
            let req = ADVANCEMENT_REQUIREMENTS[n as usize];
            assert_eq!(conv.scaling.current_gain(req, n), 1);
            assert_eq!(conv.scaling.current_gain(req * 1000.0, n), 1);
            assert_eq!(conv.scaling.current_gain(req * 0.999, n), 0);
        }
    }

    #[test]
    fn terminal_count_never_gains() {
        let conv = layer_conversion();
        for rate in [0.0, 1e17, 1e300, f64::MAX, f64::INFINITY] {
            assert_eq!(conv.scaling.current_gain(rate, 24), 0);
            assert!(!conv.can_convert(rate, 24));
        }
        assert!(conv.display_cost(24).is_infinite());
    }

    #[test]
    #[should_panic(expected = "outside the requirement table")]
    fn gain_past_the_table_panics() {
        layer_conversion().scaling.current_gain(1.0, 25);
    }

    #[test]
    fn convert_buys_one_unit_at_a_time() {
        let conv = layer_conversion();
        let mut count = 0;

        // Enough for several requirements, still one per step.
        assert_eq!(conv.convert(1e4, &mut count), 1);
        assert_eq!(count, 1);
        assert_eq!(conv.convert(1e4, &mut count), 1);
        assert_eq!(conv.convert(1e4, &mut count), 1);
        assert_eq!(conv.convert(1e4, &mut count), 1);
        assert_eq!(count, 4);

        // 2.5e4 needed for the fifth.
        assert_eq!(conv.convert(1e4, &mut count), 0);
        assert_eq!(count, 4);
    }

    struct Bulk;
    impl ConversionScaling for Bulk {
        fn current_gain(&self, base: f64, _gained: u32) -> u32 {
            (base / 10.0) as u32
        }
        fn current_at(&self, _gained: u32) -> f64 {
            10.0
        }
        fn next_at(&self, _gained: u32) -> f64 {
            10.5
        }
    }

    #[test]
    fn flags_cap_gain_and_round_cost() {
        let capped = CumulativeConversion::new(Bulk, ConversionFlags::default());
        assert_eq!(capped.actual_gain(55.0, 0), 1);
        assert_eq!(capped.display_cost(0), 11.0);

        let bulk = CumulativeConversion::new(
            Bulk,
            ConversionFlags {
                round_up_cost: false,
                buy_max: true,
            },
        );
        assert_eq!(bulk.actual_gain(55.0, 0), 5);
        assert_eq!(bulk.display_cost(0), 10.5);
    }
}
