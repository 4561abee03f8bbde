mod layer_host;
mod reducers {
    mod connection;
    pub(crate) mod conversion_tick;
    pub mod convert;
    pub mod inputs;
    pub mod reset;
}
pub mod schema;
pub mod types;
pub mod views;

use crate::schema::*;
use reducers::conversion_tick::init_conversion_tick;
use spacetimedb::*;

#[reducer(init)]
pub fn init(ctx: &ReducerContext) {
    let settings = LayerSettings::default();
    ctx.db.layer_settings().id().delete(LayerSettings::ID);
    init_conversion_tick(ctx, &settings);
    ctx.db.layer_settings().insert(settings);
}
