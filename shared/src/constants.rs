/// Layer id used by the host for navigation and storage keys.
pub const LAYER_ID: &str = "adv";

/// Display name of the layer and its resource.
pub const LAYER_NAME: &str = "Advancements";

/// Layer color, shared by the tree node and the main resource display.
pub const LAYER_COLOR: &str = "#ffffff";

/// Symbol drawn inside the layer's tree node.
pub const TREE_NODE_SYMBOL: &str = "A";

/// Tree-node glow color while a purchase is affordable.
pub const TREE_NODE_GLOW_COLOR: &str = "red";

/// Label of the base resource the conversion reads from.
pub const BASE_RESOURCE_NAME: &str = "particles/s";

/// Number of milestones on the ladder. Milestone `i` (1-indexed) requires `i` Advancements.
pub const MILESTONE_COUNT: usize = 24;

/// Number of entries in the requirement table: one per reachable count plus the terminal entry.
pub const REQUIREMENT_COUNT: usize = MILESTONE_COUNT + 1;

/// Particle gain (per second) needed to buy the next Advancement, indexed by the current count.
///
/// The last entry is infinite, so a count of [`MILESTONE_COUNT`] is terminal.
pub const ADVANCEMENT_REQUIREMENTS: [f64; REQUIREMENT_COUNT] = [
    125.0,
    700.0,
    2e3,
    5e3,
    2.5e4,
    3.6e4,
    6e4,
    8.85e5,
    2.25e6,
    4.35e6,
    3.25e7,
    4.05e7,
    55_555_555.0,
    1e9,
    2.35e9,
    3.25e9,
    1e10,
    2e10,
    1.25e11,
    2.5e13,
    6e13,
    1e14,
    5e14,
    1e17,
    f64::INFINITY,
];

/// Base duration (seconds) of the early-run boost granted at 5 Advancements.
pub const EARLY_RUN_BOOST_BASE_SECS: f64 = 120.0;

/// Extra seconds of early-run boost per Advancement past [`EARLY_RUN_BOOST_OFFSET`],
/// once the milestone at 9 Advancements is earned.
pub const EARLY_RUN_BOOST_SECS_PER_ADVANCEMENT: f64 = 30.0;

/// Advancements that do not count toward the early-run boost extension.
pub const EARLY_RUN_BOOST_OFFSET: f64 = 7.0;

/// Base of the Aqua Bar speed multiplier granted at 15 Advancements.
pub const AQUA_BAR_SPEED_BASE: f64 = 2.0;

/// Root applied to the Earth grid level before exponentiation: `base^(level^(1/root))`.
pub const AQUA_BAR_GRID_LEVEL_ROOT: f64 = 1.5;
