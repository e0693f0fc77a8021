//! End-to-end scenarios over the whole tree: build a world, populate it,
//! step it, tear pieces down, and check the bookkeeping at every level.

use glam::DVec3;
use simtree_common::{EntityId, Pose};
use simtree_kernel::{Entity, Geometry, Shape, World};

/// W → M1 → L1 → C1 with a 2x4x6 box shape.
fn build_box_scene() -> (World, EntityId, EntityId, EntityId) {
    let mut world = World::new("W");
    let m1 = world.add_model("M1").id();

    let (ids, models) = world.parts_mut();
    let model = models.get_mut(m1).unwrap();
    let l1 = model.add_link(ids, "L1").id();
    let link = model.link_mut(l1).unwrap();
    let c1 = link.add_collision(ids, "C1").id();
    link.collision_mut(c1)
        .unwrap()
        .set_shape(Shape::new(Geometry::Box {
            size: DVec3::new(2.0, 4.0, 6.0),
        }));

    (world, m1, l1, c1)
}

#[test]
fn populated_tree_counts_and_bounding_box() {
    let (mut world, m1, l1, c1) = build_box_scene();

    assert_eq!(world.model_count(), 1);
    assert_eq!(world.model(m1).map(|m| m.link_count()), Some(1));
    assert_eq!(
        world.model(m1).and_then(|m| m.link(l1)).map(|l| l.collision_count()),
        Some(1)
    );

    let bb = world
        .model_mut(m1)
        .and_then(|m| m.link_mut(l1))
        .and_then(|l| l.collision_mut(c1))
        .and_then(|c| c.shape_mut())
        .map(|s| s.bounding_box())
        .unwrap();
    assert_eq!(bb.min, DVec3::new(-1.0, -2.0, -3.0));
    assert_eq!(bb.max, DVec3::new(1.0, 2.0, 3.0));
}

#[test]
fn removing_a_model_removes_its_whole_subtree() {
    let (mut world, m1, l1, c1) = build_box_scene();

    assert!(world.remove_model_by_name("M1"));
    assert_eq!(world.model_count(), 0);
    assert!(world.model(m1).is_none());
    assert!(world.model_by_name("M1").is_none());

    // Former descendant ids resolve to nothing anywhere in the tree.
    for model in world.models() {
        assert!(model.link(l1).is_none());
        for link in model.links() {
            assert!(link.collision(c1).is_none());
        }
    }
}

#[test]
fn model_count_matches_adds_minus_removes() {
    let mut world = World::new("W");
    let mut live = Vec::new();
    for i in 0..10 {
        live.push(world.add_model(format!("m{i}")).id());
    }
    for id in live.drain(..3) {
        assert!(world.remove_model(id));
    }
    world.add_model("extra");
    assert_eq!(world.model_count(), 10 - 3 + 1);
}

#[test]
fn ids_stay_unique_across_interleaved_removals() {
    let mut world = World::new("W");
    let mut seen = std::collections::BTreeSet::new();
    for round in 0..5 {
        let a = world.add_model(format!("a{round}")).id();
        let b = world.add_model(format!("b{round}")).id();
        assert!(seen.insert(a));
        assert!(seen.insert(b));
        assert!(world.remove_model(a));
    }
    assert_eq!(world.model_count(), 5);
}

#[test]
fn step_with_zero_dt_is_idempotent() {
    let (mut world, m1, ..) = build_box_scene();
    world
        .model_mut(m1)
        .unwrap()
        .set_linear_velocity(DVec3::new(3.0, 0.0, 0.0));

    let before = world.model(m1).map(|m| m.pose()).unwrap();
    world.step_by(0.0);
    world.step_by(0.0);
    assert_eq!(world.time(), 0.0);
    assert_eq!(world.model(m1).map(|m| m.pose()), Some(before));
}

#[test]
fn n_substeps_match_one_step_within_tolerance() {
    let dt = 1.0;
    let n = 10;

    let mut once = World::new("W");
    once.step_by(dt);

    let mut many = World::new("W");
    for _ in 0..n {
        many.step_by(dt / n as f64);
    }
    assert!((once.time() - many.time()).abs() < 1e-9);
}

#[test]
fn stepped_model_moves_by_velocity_times_dt() {
    let (mut world, m1, ..) = build_box_scene();
    world
        .model_mut(m1)
        .unwrap()
        .set_linear_velocity(DVec3::new(0.0, 0.0, -2.0));
    world.set_time_step(0.25);
    world.step();

    assert!((world.time() - 0.25).abs() < 1e-12);
    assert_eq!(
        world.model(m1).map(|m| m.pose().position),
        Some(DVec3::new(0.0, 0.0, -0.5))
    );
}

#[test]
fn sphere_dirty_flag_reflects_latest_parameters() {
    let mut world = World::new("W");
    let m = world.add_model("m").id();
    let (ids, models) = world.parts_mut();
    let model = models.get_mut(m).unwrap();
    let l = model.add_link(ids, "l").id();
    let c = model.link_mut(l).unwrap().add_collision(ids, "c").id();

    let collision = model.link_mut(l).unwrap().collision_mut(c).unwrap();
    collision.set_shape(Shape::new(Geometry::Sphere { radius: 1.0 }));
    let shape = collision.shape_mut().unwrap();
    shape.set_radius(2.0);

    let bb = shape.bounding_box();
    assert_eq!(bb.min, DVec3::splat(-2.0));
    assert_eq!(bb.max, DVec3::splat(2.0));
}

#[test]
fn renaming_does_not_disturb_identity() {
    let mut world = World::new("W");
    let id = world.add_model("old").id();
    world.model_mut(id).unwrap().set_name("new");

    assert_eq!(world.model(id).map(|m| m.name()), Some("new"));
    assert!(world.model_by_name("old").is_none());
    assert_eq!(world.model_by_name("new").map(|m| m.id()), Some(id));
}

#[test]
fn poses_are_mutable_at_every_level() {
    let (mut world, m1, l1, c1) = build_box_scene();
    let pose = Pose::from_position(DVec3::new(1.0, 2.0, 3.0));

    world.model_mut(m1).unwrap().set_pose(pose);
    world
        .model_mut(m1)
        .and_then(|m| m.link_mut(l1))
        .unwrap()
        .set_pose(pose);
    world
        .model_mut(m1)
        .and_then(|m| m.link_mut(l1))
        .and_then(|l| l.collision_mut(c1))
        .unwrap()
        .set_pose(pose);

    assert_eq!(world.model(m1).map(|m| m.pose()), Some(pose));
    assert_eq!(
        world
            .model(m1)
            .and_then(|m| m.link(l1))
            .and_then(|l| l.collision(c1))
            .map(|c| c.pose()),
        Some(pose)
    );
}

#[test]
fn parent_back_references_line_up() {
    let (world, m1, l1, c1) = build_box_scene();
    let world_id = world.id();

    let model = world.model(m1).unwrap();
    assert_eq!(model.parent(), Some(world_id));

    let link = model.link(l1).unwrap();
    assert_eq!(link.parent(), Some(m1));

    let collision = link.collision(c1).unwrap();
    assert_eq!(collision.parent(), Some(l1));
}
