//! Glue between stored rows and the shared layer logic.

use crate::schema::{AdvancementsData, LayerInputsRow};
use shared::AdvancementsLayer;

/// Rebuilds the caller's layer from its stored state and mirrored inputs.
///
/// Errors when the stored state breaks the layer's contract (count past the requirement table,
/// unknown milestone bits). Those rows are never produced by this module, so the error means the
/// data was written elsewhere and must not be clamped into shape.
pub fn load_layer(
    data: AdvancementsData,
    inputs: &LayerInputsRow,
) -> Result<AdvancementsLayer, String> {
    let mut layer = data.to_layer().map_err(|err| err.to_string())?;
    layer.set_particle_gain(inputs.particle_gain);
    layer.set_grid_level(inputs.grid_level);
    Ok(layer)
}
