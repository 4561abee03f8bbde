//! Requirement table for buying Advancements.
//!
//! The table is indexed by the *current* Advancement count: entry `n` is the particle gain needed
//! to go from `n` to `n + 1`. The last entry is infinite, which makes its index the terminal count.
//!
//! Lookups past the end of the table are a content defect. [`ThresholdTable::requirement`] panics
//! on them and [`ThresholdTable::try_requirement`] reports them; neither clamps.

use crate::{constants::ADVANCEMENT_REQUIREMENTS, error::AdvancementError};

#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable {
    requirements: Vec<f64>,
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self {
            requirements: ADVANCEMENT_REQUIREMENTS.to_vec(),
        }
    }
}

impl ThresholdTable {
    /// Builds a table from custom requirements.
    ///
    /// Checks:
    /// - at least one entry
    /// - every entry is positive (NaN rejected)
    /// - entries never decrease
    /// - the last entry is `+inf`, so counts cannot run past the table through conversion
    pub fn new(requirements: Vec<f64>) -> Result<Self, AdvancementError> {
        let Some(last) = requirements.last() else {
            return Err(AdvancementError::EmptyRequirements);
        };
        if let Some(index) = requirements.iter().position(|req| req.is_nan() || *req <= 0.0) {
            return Err(AdvancementError::InvalidRequirement { index });
        }
        if let Some(index) = requirements.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(AdvancementError::UnsortedRequirements { index: index + 1 });
        }
        if *last != f64::INFINITY {
            return Err(AdvancementError::MissingTerminalRequirement);
        }
        Ok(Self { requirements })
    }

    /// Particle gain needed to buy the next Advancement while holding `count`.
    ///
    /// # Panics
    /// If `count` is past the end of the table.
    pub fn requirement(&self, count: u32) -> f64 {
        match self.try_requirement(count) {
            Ok(req) => req,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible version of [`ThresholdTable::requirement`].
    pub fn try_requirement(&self, count: u32) -> Result<f64, AdvancementError> {
        self.requirements
            .get(count as usize)
            .copied()
            .ok_or(AdvancementError::RequirementOutOfRange {
                count,
                len: self.requirements.len(),
            })
    }

    /// Validates that `count` indexes into the table. Use at boundaries where counts come from storage.
    pub fn check_count(&self, count: u32) -> Result<(), AdvancementError> {
        self.try_requirement(count).map(|_| ())
    }
}
