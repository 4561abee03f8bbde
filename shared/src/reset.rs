/// Anything that can be returned to its starting state by a layer reset.
///
/// Resets only touch mutable state. Definitions (requirement tables, milestone texts) stay.
pub trait Resettable {
    fn reset(&mut self);
}

/// Resets each of `things`, in order.
pub fn reset_all(things: &mut [&mut dyn Resettable]) {
    for thing in things.iter_mut() {
        thing.reset();
    }
}
