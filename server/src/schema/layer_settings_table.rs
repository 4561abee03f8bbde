use spacetimedb::*;

/// Host settings for the Advancements layer.
///
/// Single-row table (`id = 1`) seeded by `init`. Clients may subscribe to it to know how often
/// the glow indicator refreshes.
#[table(name = layer_settings, public)]
pub struct LayerSettings {
    /// Unique id (primary key). Use a single row with `id = 1`.
    #[primary_key]
    pub id: u32,

    /// Interval between conversion ticks (microseconds).
    pub tick_interval_micros: i64,

    /// When set, the tick buys an Advancement as soon as one is affordable instead of waiting
    /// for `convert_advancement`.
    pub auto_convert: bool,
}

impl LayerSettings {
    pub const ID: u32 = 1;

    pub fn find(ctx: &ReducerContext) -> Option<Self> {
        ctx.db.layer_settings().id().find(Self::ID)
    }
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            id: Self::ID,
            tick_interval_micros: 100_000, // 10HZ
            auto_convert: false,
        }
    }
}
