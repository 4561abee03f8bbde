use shared::LayerSnapshot;
use spacetimedb::{Identity, SpacetimeType};

/// Per-player view of the Advancements layer.
///
/// Only values that change with play are sent; names, colors and milestone texts are static
/// and live in `shared`.
#[derive(SpacetimeType, Debug, Clone, PartialEq)]
pub struct AdvancementsSnapshot {
    pub identity: Identity,
    pub advancements: u32,
    pub earned: u32,
    /// Particles/s needed for the next Advancement (rounded up, infinite at the last one).
    pub next_at: f64,
    pub can_convert: bool,
    /// Seconds of tripled gain granted at 5 Advancements.
    pub adv5_time: f64,
    /// Aqua Bar speed multiplier granted at 15 Advancements.
    pub adv15_eff: f64,
}

impl AdvancementsSnapshot {
    pub fn new(identity: Identity, snapshot: &LayerSnapshot) -> Self {
        Self {
            identity,
            advancements: snapshot.advancements,
            earned: snapshot.earned,
            next_at: snapshot.next_at,
            can_convert: snapshot.can_convert,
            adv5_time: snapshot.adv5_time,
            adv15_eff: snapshot.adv15_eff,
        }
    }
}
