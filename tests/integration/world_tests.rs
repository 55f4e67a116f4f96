use nalgebra::Vector3;
use skyloop::{
    components::{EntityKind, Motion, WorldEntity},
    resources::{TerrainHeightField, WorldConfig, WorldEntities},
    systems::{advance_entity, advance_world},
    utils::RngManager,
};

use crate::common::{
    assert_within_bounds, create_test_world_config, place_entity, TestAppBuilder, TEST_SEED,
};

fn generate(config: &WorldConfig, seed: u64) -> WorldEntities {
    WorldEntities::generate(config, &TerrainHeightField::default(), &RngManager::new(seed))
}

fn corners(entity: &WorldEntity) -> [Vector3<f64>; 2] {
    let b = entity.bounds;
    [
        Vector3::new(b.x.max, b.y.max, b.z.max),
        Vector3::new(b.x.min, b.y.min, b.z.min),
    ]
}

#[test]
fn test_wrap_holds_from_the_boundary_with_huge_steps() {
    let world = generate(&WorldConfig::default(), 7);

    for entity in world.iter() {
        for corner in corners(entity) {
            for dt in [0.016, 1.0, 1.0e4] {
                let mut moved = entity.clone();
                place_entity(&mut moved, corner);
                advance_entity(&mut moved, dt);
                assert_within_bounds(&moved);
            }
        }
    }
}

#[test]
fn test_wrap_holds_over_many_frames() {
    let mut world = generate(&create_test_world_config(), TEST_SEED);
    for _ in 0..500 {
        advance_world(&mut world, 0.1);
        for entity in world.iter() {
            assert_within_bounds(entity);
        }
    }
}

#[test]
fn test_static_scenery_never_moves() {
    let mut world = generate(&create_test_world_config(), TEST_SEED);
    let before: Vec<_> = world
        .iter()
        .filter(|e| matches!(e.kind, EntityKind::Tree | EntityKind::Mountain))
        .cloned()
        .collect();

    advance_world(&mut world, 5.0);

    let after: Vec<_> = world
        .iter()
        .filter(|e| matches!(e.kind, EntityKind::Tree | EntityKind::Mountain))
        .cloned()
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_zero_step_is_idempotent() {
    let mut world = generate(&create_test_world_config(), TEST_SEED);
    let before: Vec<_> = world.iter().cloned().collect();

    advance_world(&mut world, 0.0);
    advance_world(&mut world, -0.5);

    assert!(world.iter().eq(before.iter()));
}

#[test]
fn test_flock_members_share_their_drift() {
    let mut world = generate(&create_test_world_config(), TEST_SEED);
    advance_world(&mut world, 0.5);

    for bird in world.of_kind(EntityKind::Bird) {
        match &bird.motion {
            Motion::Bird { centre, offset, .. } => {
                assert!((bird.position - (centre + offset)).norm() < 1e-9);
                assert!(bird.wing_angle().unwrap().abs() <= 0.2);
            }
            other => panic!("bird with {other:?}"),
        }
    }
}

#[test]
fn test_seeded_worlds_match_inside_app() {
    let mut first = TestAppBuilder::new().build();
    let mut second = TestAppBuilder::new().build();
    first.run_steps(30);
    second.run_steps(30);

    let a = first.get_state::<WorldEntities>().unwrap();
    let b = second.get_state::<WorldEntities>().unwrap();
    assert_eq!(a.seed(), TEST_SEED);
    assert!(a.iter().eq(b.iter()));

    let fresh = generate(&create_test_world_config(), TEST_SEED);
    let cloud = fresh.of_kind(EntityKind::Cloud).next().unwrap();
    assert_ne!(a.get(cloud.id).unwrap().position, cloud.position);
}

#[test]
fn test_render_attributes_are_stable() {
    let mut app = TestAppBuilder::new().build();
    let before: Vec<_> = {
        let world = app.get_state::<WorldEntities>().unwrap();
        world.iter().map(|e| world.render(e.id).cloned()).collect()
    };
    app.run_steps(20);
    let world = app.get_state::<WorldEntities>().unwrap();
    let after: Vec<_> = world.iter().map(|e| world.render(e.id).cloned()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_population_matches_config() {
    let app = TestAppBuilder::new().build();
    let world = app.get_state::<WorldEntities>().unwrap();

    assert_eq!(world.count(EntityKind::Cloud), 20);
    assert_eq!(world.count(EntityKind::Bird), 50);
    assert_eq!(world.count(EntityKind::OtherPlane), 5);
    assert_eq!(world.count(EntityKind::Tree), 10);
    assert_eq!(world.count(EntityKind::Mountain), 3);
    assert_eq!(world.len(), create_test_world_config().population());
}
