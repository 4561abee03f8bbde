use shared::{AdvancementError, AdvancementsLayer, EarnedBits};
use spacetimedb::{table, Identity, ReducerContext, SpacetimeType, Table};

/// The Advancements layer state of one player: the resource count and the latched milestones.
///
/// This is the only state the layer writes. Purchases and resets rewrite the whole row.
#[table(name = advancements_tbl, public)]
pub struct AdvancementsRow {
    #[primary_key]
    pub identity: Identity,

    pub data: AdvancementsData,
}

#[derive(SpacetimeType, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AdvancementsData {
    pub advancements: u32,
    /// Earned milestone bitmask. Interpret with `shared::MilestoneLadder`.
    pub earned: EarnedBits,
}

impl AdvancementsData {
    /// Rebuilds the shared layer from stored values, rejecting counts past the requirement
    /// table and unknown milestone bits.
    pub fn to_layer(self) -> Result<AdvancementsLayer, AdvancementError> {
        AdvancementsLayer::restore(self.advancements, self.earned)
    }

    pub fn from_layer(layer: &AdvancementsLayer) -> Self {
        Self {
            advancements: layer.advancements(),
            earned: layer.ladder().bits(),
        }
    }
}

impl AdvancementsRow {
    pub fn find(ctx: &ReducerContext, identity: Identity) -> Option<Self> {
        ctx.db.advancements_tbl().identity().find(identity)
    }

    pub fn insert(ctx: &ReducerContext, identity: Identity, data: AdvancementsData) {
        ctx.db.advancements_tbl().insert(Self { identity, data });
    }

    /// Stores the layer's count and earned flags. Writes nothing when they did not change.
    pub fn store(mut self, ctx: &ReducerContext, layer: &AdvancementsLayer) {
        let data = AdvancementsData::from_layer(layer);
        if data == self.data {
            return;
        }
        self.data = data;
        ctx.db.advancements_tbl().identity().update(self);
    }
}
