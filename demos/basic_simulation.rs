use physics_scene::*;

fn main() {
    let mut scene = Scene::new();

    let left = scene.add_actor(Sphere::new(Vec2::new(-3.0, 0.0), Vec2::new(2.0, 0.0), 1.0, 1.0));
    let right = scene.add_actor(Sphere::new(Vec2::new(3.0, 0.0), Vec2::new(-2.0, 0.0), 1.0, 1.0));

    // One second of frames at 60 Hz; the scene runs its own 0.01 steps.
    let mut stats = UpdateStats::default();
    for _ in 0..60 {
        stats += scene.update(1.0 / 60.0);
    }

    for id in [left, right] {
        if let Some(sphere) = scene.sphere(id) {
            println!(
                "sphere {:?}: position {:?}, velocity {:?}",
                id,
                sphere.position(),
                sphere.velocity()
            );
        }
    }
    println!("{} steps, {} collisions", stats.steps, stats.collisions);
}
