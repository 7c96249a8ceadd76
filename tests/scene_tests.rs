use approx::assert_relative_eq;
use physics_scene::*;

const DT: f32 = 0.01;

fn sphere(x: f32, y: f32, velocity: Vec2) -> Sphere {
    Sphere::new(Vec2::new(x, y), velocity, 1.0, 1.0)
}

#[test]
fn overlapping_resting_spheres_collide_and_stay_at_rest() {
    let mut scene = Scene::new();
    let a = scene.add_actor(sphere(0.0, 0.0, Vec2::ZERO));
    let b = scene.add_actor(sphere(1.5, 0.0, Vec2::ZERO));

    let stats = scene.update(DT);

    assert_eq!(stats.steps, 1);
    assert_eq!(stats.collisions, 1);
    for id in [a, b] {
        let sphere = scene.sphere(id).expect("sphere should exist");
        assert_eq!(sphere.velocity(), Vec2::ZERO);
    }
}

#[test]
fn separated_spheres_keep_their_velocity() {
    let mut scene = Scene::new();
    let a = scene.add_actor(sphere(0.0, 0.0, Vec2::new(0.0, 1.0)));
    let b = scene.add_actor(sphere(3.0, 0.0, Vec2::new(0.0, -1.0)));

    let stats = scene.update(DT);
    scene.update(DT);

    assert_eq!(stats.collisions, 0);
    assert_eq!(scene.sphere(a).map(Sphere::velocity), Some(Vec2::new(0.0, 1.0)));
    assert_eq!(scene.sphere(b).map(Sphere::velocity), Some(Vec2::new(0.0, -1.0)));
    assert_eq!(scene.sphere(a).map(Sphere::force), Some(Vec2::ZERO));
}

#[test]
fn sphere_sinking_into_plane_is_stopped() {
    let mut scene = Scene::new();
    let ground = Plane::new(Vec2::Y, 0.0);
    scene.add_actor(ground);
    let ball = scene.add_actor(sphere(0.0, 0.5, Vec2::new(0.5, -2.0)));

    let first = scene.update(DT);
    assert_eq!(first.collisions, 1);

    // The cancelling force is consumed by the next integration.
    scene.update(DT);
    let ball = scene.sphere(ball).expect("ball should exist");
    assert_relative_eq!(ball.velocity().x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(ball.velocity().y, 0.0, epsilon = 1e-6);
}

#[test]
fn plane_added_first_behaves_like_plane_added_last() {
    let ground = Plane::new(Vec2::Y, 0.0);
    let ball = sphere(0.0, 0.5, Vec2::new(1.0, -1.0));

    let mut plane_first = Scene::new();
    plane_first.add_actor(ground);
    let ball_a = plane_first.add_actor(ball);

    let mut plane_last = Scene::new();
    let ball_b = plane_last.add_actor(ball);
    let ground_b = plane_last.add_actor(ground);

    for _ in 0..5 {
        plane_first.update(DT);
        plane_last.update(DT);
    }

    assert_eq!(plane_first.sphere(ball_a), plane_last.sphere(ball_b));
    assert_eq!(plane_last.plane(ground_b), Some(&ground));
}

fn falling_pair_scene() -> (Scene, [ActorId; 2]) {
    let config = SceneConfig::default().with_gravity(Vec2::new(0.0, -9.81));
    let mut scene = Scene::with_config(config).expect("valid config");
    scene.add_actor(Plane::new(Vec2::Y, -5.0));
    let ids = [
        scene.add_actor(sphere(0.0, 0.0, Vec2::new(1.0, 0.0))),
        scene.add_actor(sphere(2.5, 0.0, Vec2::new(-1.0, 0.0))),
    ];
    (scene, ids)
}

#[test]
fn call_granularity_does_not_change_the_result() {
    for n in [30usize, 500, 1000, 3000] {
        let (mut stepped, ids_a) = falling_pair_scene();
        let (mut batched, ids_b) = falling_pair_scene();

        let mut fine_steps = 0;
        for _ in 0..n {
            fine_steps += stepped.update(DT).steps;
        }
        let coarse = batched.update(n as f32 * DT);

        assert_eq!(fine_steps, n);
        assert_eq!(coarse.steps, n, "batched update of {n} steps");
        assert_relative_eq!(batched.accumulated_time(), 0.0, epsilon = 1e-5);
        for (a, b) in ids_a.into_iter().zip(ids_b) {
            let a = stepped.sphere(a).expect("sphere");
            let b = batched.sphere(b).expect("sphere");
            assert_relative_eq!(a.position().x, b.position().x, epsilon = 1e-5);
            assert_relative_eq!(a.position().y, b.position().y, epsilon = 1e-5);
            assert_relative_eq!(a.velocity().y, b.velocity().y, epsilon = 1e-5);
        }
    }
}

#[test]
fn sphere_wedged_in_a_corner_comes_to_rest() {
    let mut scene = Scene::new();
    let ball = scene.add_actor(sphere(0.5, 0.5, Vec2::new(1.0, -2.0)));
    scene.add_actor(Plane::new(Vec2::Y, 0.0));
    scene.add_actor(Plane::new(Vec2::X, 0.0));

    let first = scene.update(DT);
    assert_eq!(first.collisions, 2);
    assert_eq!(scene.sphere(ball).map(Sphere::force), Some(Vec2::new(-1.0, 2.0)));

    for _ in 0..5 {
        let stats = scene.update(DT);
        assert_eq!(stats.collisions, 2);
        assert_eq!(scene.sphere(ball).map(Sphere::velocity), Some(Vec2::ZERO));
    }
}

#[test]
fn sphere_touching_three_spheres_is_stopped_once() {
    let mut scene = Scene::new();
    let hub = scene.add_actor(sphere(0.0, 0.0, Vec2::new(1.0, 0.0)));
    scene.add_actor(sphere(1.5, 0.0, Vec2::ZERO));
    scene.add_actor(sphere(0.0, 1.5, Vec2::ZERO));
    scene.add_actor(sphere(-1.5, 0.0, Vec2::ZERO));

    let first = scene.update(DT);
    assert_eq!(first.collisions, 3);
    assert_eq!(scene.sphere(hub).map(Sphere::force), Some(Vec2::new(-1.0, 0.0)));

    scene.update(DT);
    assert_eq!(scene.sphere(hub).map(Sphere::velocity), Some(Vec2::ZERO));
}

#[test]
fn partial_steps_accumulate_across_calls() {
    let mut scene = Scene::new();
    let id = scene.add_actor(sphere(0.0, 0.0, Vec2::new(1.0, 0.0)));

    assert_eq!(scene.update(0.004).steps, 0);
    assert_eq!(scene.update(0.004).steps, 0);
    assert_eq!(scene.update(0.004).steps, 1);
    assert_relative_eq!(scene.accumulated_time(), 0.002, epsilon = 1e-6);
    assert_relative_eq!(scene.sphere(id).map(Sphere::position).unwrap().x, 0.01);
}

#[test]
fn add_then_remove_leaves_scene_unchanged() {
    let mut scene = Scene::new();
    let kept = scene.add_actor(sphere(0.0, 0.0, Vec2::ZERO));
    let before = scene.actor_ids().to_vec();

    let temp = scene.add_actor(Plane::new(Vec2::X, 0.0));
    assert!(scene.remove_actor(temp).is_some());

    assert_eq!(scene.actor_ids(), before.as_slice());
    assert!(scene.contains(kept));
    assert!(scene.remove_actor(temp).is_none());
}

#[test]
fn boxes_integrate_but_never_collide() {
    let mut scene = Scene::new();
    let crate_id =
        scene.add_actor(BoxShape::new(Vec2::ZERO, Vec2::new(2.0, 0.0), 1.0, Vec2::ONE));
    scene.add_actor(sphere(0.0, 0.0, Vec2::ZERO));
    scene.add_actor(Plane::new(Vec2::Y, 0.0));

    let stats = scene.update(DT);

    assert_eq!(stats.pairs_tested, 3);
    assert_eq!(stats.unsupported_pairs, 2);
    assert_eq!(stats.collisions, 1);
    let moved = scene
        .actor(crate_id)
        .and_then(PhysicsObject::as_box)
        .expect("box should exist");
    assert_relative_eq!(moved.position().x, 0.02);
    assert_eq!(moved.velocity(), Vec2::new(2.0, 0.0));
}

#[test]
fn totals_sum_every_update() {
    let mut scene = Scene::new();
    scene.add_actor(sphere(0.0, 0.0, Vec2::ZERO));
    scene.add_actor(sphere(1.0, 0.0, Vec2::ZERO));

    scene.update(DT);
    scene.update(2.0 * DT);

    let totals = scene.totals();
    assert_eq!(totals.steps, 3);
    assert_eq!(totals.collisions, 3);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_integration_matches_sequential() {
    let build = |parallel: bool| {
        let config = SceneConfig::default()
            .with_gravity(Vec2::new(0.0, -9.81))
            .with_parallel(parallel);
        let mut scene = Scene::with_config(config).expect("valid config");
        for i in 0..16 {
            scene.add_actor(sphere(i as f32 * 1.5, 0.0, Vec2::new(0.0, i as f32)));
        }
        scene
    };

    let mut sequential = build(false);
    let mut parallel = build(true);
    assert!(parallel.parallel_enabled());

    sequential.update(0.25);
    parallel.update(0.25);

    for (a, b) in sequential.actor_ids().iter().zip(parallel.actor_ids()) {
        assert_eq!(sequential.actor(*a), parallel.actor(*b));
    }
}
