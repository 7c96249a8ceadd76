use physics_scene::*;

#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<&'static str>,
}

impl ShapeRenderer for RecordingRenderer {
    fn name(&self) -> &str {
        "recording"
    }

    fn draw_sphere(&mut self, _sphere: &Sphere) {
        self.calls.push("sphere");
    }

    fn draw_plane(&mut self, _plane: &Plane) {
        self.calls.push("plane");
    }

    fn draw_box(&mut self, _cuboid: &BoxShape) {
        self.calls.push("box");
    }
}

#[test]
fn draw_visits_actors_in_insertion_order() {
    let mut scene = Scene::new();
    scene.add_actor(Plane::new(Vec2::Y, 0.0));
    let removed = scene.add_actor(Sphere::new(Vec2::ZERO, Vec2::ZERO, 1.0, 1.0));
    scene.add_actor(BoxShape::new(Vec2::ZERO, Vec2::ZERO, 1.0, Vec2::ONE));
    scene.add_actor(Sphere::new(Vec2::ONE, Vec2::ZERO, 1.0, 1.0));
    scene.remove_actor(removed);

    let mut renderer = RecordingRenderer::default();
    scene.draw(&mut renderer);

    assert_eq!(renderer.calls, vec!["plane", "box", "sphere"]);
}

#[test]
fn noop_renderer_accepts_every_shape() {
    let mut scene = Scene::new();
    scene.add_actor(Plane::new(Vec2::Y, 0.0));
    scene.add_actor(BoxShape::new(Vec2::ZERO, Vec2::ZERO, 1.0, Vec2::ONE));

    let mut renderer = NoopRenderer::new();
    scene.draw(&mut renderer);
    assert_eq!(renderer.name(), "noop");
}
