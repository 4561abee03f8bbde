use spacetimedb::{table, Identity, ReducerContext, Table};

/// Values the Advancements layer reads from sibling layers, mirrored per player.
///
/// `particle_gain` is owned by the main layer and `grid_level` by the Earth layer. The layer
/// never writes them; `can_convert` is the derived tree-node glow refreshed every tick.
#[table(name = layer_inputs_tbl, public)]
pub struct LayerInputsRow {
    #[primary_key]
    pub identity: Identity,

    /// Particles per second.
    pub particle_gain: f64,

    /// Earth grid level.
    pub grid_level: f64,

    /// Whether a purchase is currently affordable.
    pub can_convert: bool,
}

impl LayerInputsRow {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            particle_gain: 0.0,
            grid_level: 0.0,
            can_convert: false,
        }
    }

    pub fn find(ctx: &ReducerContext, identity: Identity) -> Option<Self> {
        ctx.db.layer_inputs_tbl().identity().find(identity)
    }

    pub fn insert(ctx: &ReducerContext, row: Self) {
        ctx.db.layer_inputs_tbl().insert(row);
    }

    pub fn update(self, ctx: &ReducerContext) {
        ctx.db.layer_inputs_tbl().identity().update(self);
    }
}
