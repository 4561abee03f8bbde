use crate::{
    layer_host::load_layer,
    schema::{advancements_tbl__view, layer_inputs_tbl__view},
    types::AdvancementsSnapshot,
};

#[spacetimedb::view(name = advancements_view, public)]
fn advancements_view(ctx: &spacetimedb::ViewContext) -> Vec<AdvancementsSnapshot> {
    let Some(row) = ctx.db.advancements_tbl().identity().find(ctx.sender) else {
        return Vec::new();
    };
    let Some(inputs) = ctx.db.layer_inputs_tbl().identity().find(ctx.sender) else {
        return Vec::new();
    };

    match load_layer(row.data, &inputs) {
        Ok(layer) => vec![AdvancementsSnapshot::new(ctx.sender, &layer.snapshot())],
        Err(err) => {
            log::error!("Invalid Advancements row for {:?}: {err}", ctx.sender);
            Vec::new()
        }
    }
}
