use physics_scene::*;

fn main() {
    let config = SceneConfig::default()
        .with_gravity(Vec2::new(0.0, -9.81))
        .with_max_steps_per_update(10);
    let mut scene = match Scene::with_config(config) {
        Ok(scene) => scene,
        Err(err) => {
            eprintln!("bad scene config: {err}");
            return;
        }
    };

    scene.add_actor(Plane::new(Vec2::Y, 0.0));
    let ball = scene.add_actor(Sphere::new(Vec2::new(0.0, 5.0), Vec2::ZERO, 1.0, 0.5));

    for frame in 0..180 {
        scene.update(1.0 / 60.0);
        if frame % 30 == 0 {
            if let Some(sphere) = scene.sphere(ball) {
                println!("frame {frame}: y = {:.3}", sphere.position().y);
            }
        }
    }
}
