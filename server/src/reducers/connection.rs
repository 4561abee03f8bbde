//! Connection lifecycle reducers.
//!
//! On connect, make sure the caller has an Advancements row and an inputs row so every other
//! reducer can rely on them. Rows are kept on disconnect; the layer only resets through
//! `reset_advancements`.

use crate::schema::*;
use spacetimedb::ReducerContext;

#[spacetimedb::reducer(client_connected)]
pub fn identity_connected(ctx: &ReducerContext) {
    log::info!("Client connected: {:?}", ctx.sender);

    if AdvancementsRow::find(ctx, ctx.sender).is_none() {
        AdvancementsRow::insert(ctx, ctx.sender, AdvancementsData::default());
    }
    if LayerInputsRow::find(ctx, ctx.sender).is_none() {
        LayerInputsRow::insert(ctx, LayerInputsRow::new(ctx.sender));
    }
}

#[spacetimedb::reducer(client_disconnected)]
pub fn identity_disconnected(ctx: &ReducerContext) {
    log::info!("Client disconnected: {:?}", ctx.sender);
}
