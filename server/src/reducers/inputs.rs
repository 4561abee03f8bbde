//! Reducers through which sibling layers publish the values this layer reads.

use crate::schema::*;
use spacetimedb::ReducerContext;

fn validate_input(name: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{name} must be a finite, non-negative number"));
    }
    Ok(())
}

/// Sets the caller's particle gain (particles/s).
#[spacetimedb::reducer]
pub fn set_particle_gain(ctx: &ReducerContext, particle_gain: f64) -> Result<(), String> {
    validate_input("Particle gain", particle_gain)?;
    let Some(mut inputs) = LayerInputsRow::find(ctx, ctx.sender) else {
        return Err("Layer inputs not found".into());
    };
    if inputs.particle_gain == particle_gain {
        return Ok(());
    }
    inputs.particle_gain = particle_gain;
    inputs.update(ctx);
    Ok(())
}

/// Sets the caller's Earth grid level.
#[spacetimedb::reducer]
pub fn set_grid_level(ctx: &ReducerContext, grid_level: f64) -> Result<(), String> {
    validate_input("Grid level", grid_level)?;
    let Some(mut inputs) = LayerInputsRow::find(ctx, ctx.sender) else {
        return Err("Layer inputs not found".into());
    };
    if inputs.grid_level == grid_level {
        return Ok(());
    }
    inputs.grid_level = grid_level;
    inputs.update(ctx);
    Ok(())
}
