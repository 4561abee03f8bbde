use crate::{layer_host::load_layer, schema::*};
use shared::Resettable;
use spacetimedb::ReducerContext;

/// Resets the caller's Advancements layer: count back to 0, every milestone locked.
///
/// The mirrored inputs are left alone since they belong to other layers.
#[spacetimedb::reducer]
pub fn reset_advancements(ctx: &ReducerContext) -> Result<(), String> {
    let Some(row) = AdvancementsRow::find(ctx, ctx.sender) else {
        return Err("Advancements not found".into());
    };
    let Some(mut inputs) = LayerInputsRow::find(ctx, ctx.sender) else {
        return Err("Layer inputs not found".into());
    };

    let mut layer = load_layer(row.data, &inputs)?;
    let (advancements, earned) = (layer.advancements(), layer.ladder().earned_count());
    layer.reset();
    log::info!(
        "Reset Advancements for {:?} ({advancements} advancements, {earned} milestones)",
        ctx.sender
    );
    row.store(ctx, &layer);

    let can_convert = layer.can_convert();
    if inputs.can_convert != can_convert {
        inputs.can_convert = can_convert;
        inputs.update(ctx);
    }
    Ok(())
}
