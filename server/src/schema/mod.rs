mod advancements_table;
mod layer_inputs_table;
mod layer_settings_table;

pub use advancements_table::*;
pub use layer_inputs_table::*;
pub use layer_settings_table::*;
