use crate::{layer_host::load_layer, schema::*};
use spacetimedb::ReducerContext;

/// Buys one Advancement for the caller (the layer's reset button).
///
/// Behavior:
/// - Loads the caller's stored count, earned milestones and mirrored inputs.
/// - Rejects the purchase when the particle gain is below the current requirement.
/// - Stores the new count and any newly earned milestones.
#[spacetimedb::reducer]
pub fn convert_advancement(ctx: &ReducerContext) -> Result<(), String> {
    let Some(row) = AdvancementsRow::find(ctx, ctx.sender) else {
        return Err("Advancements not found".into());
    };
    let Some(mut inputs) = LayerInputsRow::find(ctx, ctx.sender) else {
        return Err("Layer inputs not found".into());
    };

    let mut layer = load_layer(row.data, &inputs)?;
    let outcome = layer.convert();
    if outcome.gained == 0 {
        return Err(format!(
            "Requires {} particles/s, have {}",
            layer.display_cost(),
            inputs.particle_gain
        ));
    }

    for milestone in &outcome.newly_earned {
        log::info!(
            "{:?} earned Advancement milestone {}",
            ctx.sender,
            milestone.position()
        );
    }
    row.store(ctx, &layer);

    let can_convert = layer.can_convert();
    if inputs.can_convert != can_convert {
        inputs.can_convert = can_convert;
        inputs.update(ctx);
    }
    Ok(())
}
