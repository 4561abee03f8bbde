mod advancements_snapshot;

pub use advancements_snapshot::AdvancementsSnapshot;
