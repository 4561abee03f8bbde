use shared::{AdvancementsLayer, FlagBitmask, Milestone, MilestoneState, Resettable};

#[test]
fn first_purchase_from_a_fresh_layer() {
    let mut layer = AdvancementsLayer::new();

    // count=0, rate=0: nothing affordable, nothing earned.
    assert_eq!(layer.current_gain(), 0);
    assert!(
        Milestone::ALL
            .iter()
            .all(|m| layer.milestone_state(*m) == MilestoneState::Locked)
    );

    layer.set_particle_gain(125.0);
    assert_eq!(layer.current_gain(), 1);

    let outcome = layer.convert();
    assert_eq!(outcome.gained, 1);
    assert_eq!(layer.advancements(), 1);
    assert_eq!(
        layer.milestone_state(Milestone::UnlockLightning),
        MilestoneState::Earned
    );
    assert_eq!(
        layer.milestone_state(Milestone::FlameUpgradeRow),
        MilestoneState::Locked
    );

    // 700 particles/s needed for the second; 125 is not enough.
    assert_eq!(layer.current_gain(), 0);
    assert_eq!(layer.convert().gained, 0);
    assert_eq!(
        layer.milestone_state(Milestone::FlameUpgradeRow),
        MilestoneState::Locked
    );
}

#[test]
fn full_climb_then_reset() {
    let mut layer = AdvancementsLayer::new();
    layer.set_grid_level(8.0);

    let mut previous_earned = 0;
    for (count, req) in shared::ADVANCEMENT_REQUIREMENTS.iter().take(24).enumerate() {
        assert_eq!(layer.advancements(), count as u32);
        assert_eq!(layer.current_at(), *req);
        assert_eq!(layer.next_at(), *req);

        layer.set_particle_gain(*req);
        let outcome = layer.convert();
        assert_eq!(outcome.gained, 1);
        assert_eq!(outcome.newly_earned.len(), 1);

        // Earned flags never go backwards while climbing.
        let earned = layer.ladder().earned_count();
        assert!(earned > previous_earned);
        previous_earned = earned;

        if layer.advancements() == 10 {
            assert_eq!(layer.adv5_time(), 210.0);
        }
    }

    assert_eq!(layer.advancements(), 24);
    assert!(layer.has_milestone(Milestone::UnlockIntrabonds));
    assert_eq!(layer.adv5_time(), 630.0);
    assert!((layer.adv15_eff() - 16.0).abs() < 1e-9);

    layer.set_particle_gain(f64::MAX);
    assert_eq!(layer.current_gain(), 0);

    layer.reset();
    assert_eq!(layer.advancements(), 0);
    assert_eq!(layer.ladder().earned_count(), 0);
    assert_eq!(layer.adv5_time(), 120.0);
    assert_eq!(layer.current_gain(), 1);
}
