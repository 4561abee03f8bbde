use crate::{layer_host::load_layer, schema::*};
use spacetimedb::{ReducerContext, ScheduleAt, Table, TimeDuration, Timestamp};

#[spacetimedb::table(
    name = conversion_tick_timer,
    scheduled(conversion_tick_reducer)
)]
pub struct ConversionTickTimer {
    #[primary_key]
    #[auto_inc]
    pub scheduled_id: u64,
    pub scheduled_at: ScheduleAt,
    pub last_tick: Timestamp,
}

pub fn init_conversion_tick(ctx: &ReducerContext, settings: &LayerSettings) {
    let interval = TimeDuration::from_micros(settings.tick_interval_micros);
    ctx.db.conversion_tick_timer().scheduled_id().delete(1);
    ctx.db.conversion_tick_timer().insert(ConversionTickTimer {
        scheduled_id: 1,
        scheduled_at: ScheduleAt::Interval(interval),
        last_tick: ctx.timestamp,
    });
}

/// The layer's update loop.
///
/// For every player: re-evaluate the conversion against the mirrored particle gain, refresh the
/// glow flag and, when `auto_convert` is on, buy one Advancement.
#[spacetimedb::reducer]
fn conversion_tick_reducer(ctx: &ReducerContext, mut timer: ConversionTickTimer) -> Result<(), String> {
    // Only the server (module identity) may invoke scheduled reducers.
    if ctx.sender != ctx.identity() {
        return Err("`conversion_tick_reducer` may not be invoked by clients.".into());
    }

    let Some(settings) = LayerSettings::find(ctx) else {
        return Err("`conversion_tick_reducer` couldn't find layer settings.".into());
    };

    for mut inputs in ctx.db.layer_inputs_tbl().iter() {
        let Some(row) = AdvancementsRow::find(ctx, inputs.identity) else {
            log::warn!("No Advancements row for {:?}", inputs.identity);
            continue;
        };
        let mut layer = match load_layer(row.data, &inputs) {
            Ok(layer) => layer,
            Err(err) => {
                log::error!("Skipping Advancements for {:?}: {err}", inputs.identity);
                continue;
            }
        };

        if settings.auto_convert && layer.convert().gained > 0 {
            row.store(ctx, &layer);
        }

        let can_convert = layer.can_convert();
        if inputs.can_convert != can_convert {
            inputs.can_convert = can_convert;
            inputs.update(ctx);
        }
    }

    // Persist timer state.
    timer.last_tick = ctx.timestamp;
    ctx.db.conversion_tick_timer().scheduled_id().update(timer);
    Ok(())
}
