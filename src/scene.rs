use glam::Vec2;
use log::{debug, trace, warn};

use crate::{
    collision::{CollisionOutcome, NarrowPhase},
    config::{validate_time_step, SceneConfig, STEP_TOLERANCE},
    core::{
        object::PhysicsObject,
        shapes::{Plane, Sphere},
    },
    error::Result,
    render::ShapeRenderer,
    utils::{
        allocator::{ActorId, Arena},
        logging::{log_update_stats, ScopedTimer},
        profiling::UpdateStats,
    },
};

/// Owns the simulated actors and advances them in fixed steps.
#[derive(Debug, Clone)]
pub struct Scene {
    actors: Arena<PhysicsObject>,
    /// Active set in insertion order; drives integration and pair order.
    order: Vec<ActorId>,
    gravity: Vec2,
    time_step: f32,
    time_accumulated: f64,
    max_steps_per_update: Option<usize>,
    parallel_enabled: bool,
    totals: UpdateStats,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates an empty scene with a 0.01 timestep and no gravity.
    pub fn new() -> Self {
        let config = SceneConfig::default();
        Self {
            actors: Arena::new(),
            order: Vec::new(),
            gravity: config.gravity,
            time_step: config.time_step,
            time_accumulated: 0.0,
            max_steps_per_update: config.max_steps_per_update,
            parallel_enabled: false,
            totals: UpdateStats::default(),
        }
    }

    /// Creates an empty scene from a validated configuration.
    pub fn with_config(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        let mut scene = Self::new();
        scene.gravity = config.gravity;
        scene.time_step = config.time_step;
        scene.max_steps_per_update = config.max_steps_per_update;
        scene.set_parallel_enabled(config.parallel);
        Ok(scene)
    }

    /// Returns the fixed integration timestep.
    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    /// Changes the fixed timestep, rejecting non-positive or non-finite values.
    pub fn set_time_step(&mut self, time_step: f32) -> Result<()> {
        validate_time_step(time_step)?;
        self.time_step = time_step;
        Ok(())
    }

    /// Returns the gravity applied to every movable actor.
    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Replaces the gravity vector.
    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    /// Time carried over to the next `update`, always below one step.
    pub fn accumulated_time(&self) -> f32 {
        self.time_accumulated as f32
    }

    /// Counters summed over every `update` so far.
    pub fn totals(&self) -> UpdateStats {
        self.totals
    }

    /// Enables or disables rayon integration (needs the `parallel` feature).
    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        if enabled && !cfg!(feature = "parallel") {
            warn!("parallel integration requested but the `parallel` feature is disabled");
            return;
        }
        self.parallel_enabled = enabled;
    }

    /// Returns whether integration currently runs on the rayon pool.
    pub fn parallel_enabled(&self) -> bool {
        self.parallel_enabled
    }

    /// Takes ownership of `object` and adds it to the active set.
    pub fn add_actor(&mut self, object: impl Into<PhysicsObject>) -> ActorId {
        let object = object.into();
        let kind = object.kind();
        let id = self.actors.insert(object);
        self.order.push(id);
        debug!("added {kind:?} actor {id:?}");
        id
    }

    /// Removes an actor and hands it back. `None` if `id` is not in the scene.
    pub fn remove_actor(&mut self, id: ActorId) -> Option<PhysicsObject> {
        let object = self.actors.remove(id)?;
        self.order.retain(|member| *member != id);
        debug!("removed {:?} actor {id:?}", object.kind());
        Some(object)
    }

    /// Returns whether `id` refers to an actor in the scene.
    pub fn contains(&self, id: ActorId) -> bool {
        self.actors.contains(id)
    }

    /// Immutable access to an actor by handle.
    pub fn actor(&self, id: ActorId) -> Option<&PhysicsObject> {
        self.actors.get(id)
    }

    /// Mutable access to an actor by handle.
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut PhysicsObject> {
        self.actors.get_mut(id)
    }

    /// The actor as a sphere, if it is one.
    pub fn sphere(&self, id: ActorId) -> Option<&Sphere> {
        self.actor(id).and_then(PhysicsObject::as_sphere)
    }

    /// Mutable access to the actor as a sphere, if it is one.
    pub fn sphere_mut(&mut self, id: ActorId) -> Option<&mut Sphere> {
        self.actor_mut(id).and_then(PhysicsObject::as_sphere_mut)
    }

    /// The actor as a plane, if it is one.
    pub fn plane(&self, id: ActorId) -> Option<&Plane> {
        self.actor(id).and_then(PhysicsObject::as_plane)
    }

    /// Active actors in insertion order.
    pub fn actor_ids(&self) -> &[ActorId] {
        &self.order
    }

    /// Number of actors in the active set.
    pub fn actor_count(&self) -> usize {
        self.order.len()
    }

    /// Advances the simulation by `delta_time` using a fixed timestep accumulator.
    ///
    /// Each whole step integrates every actor, then runs the narrow phase on
    /// every unordered pair in insertion order. Negative or non-finite input
    /// is treated as zero.
    pub fn update(&mut self, delta_time: f32) -> UpdateStats {
        let delta_time = if delta_time.is_finite() && delta_time >= 0.0 {
            delta_time
        } else {
            warn!("ignoring invalid delta time {delta_time}");
            0.0
        };
        self.time_accumulated += f64::from(delta_time);

        let step = f64::from(self.time_step);
        let due = self.whole_steps_due(step);
        self.time_accumulated = (self.time_accumulated - due as f64 * step).max(0.0);

        let mut stats = UpdateStats::default();
        let run = match self.max_steps_per_update {
            Some(cap) if due > cap => {
                stats.dropped_steps = due - cap;
                warn!("step cap reached, dropping {} fixed steps", stats.dropped_steps);
                cap
            }
            _ => due,
        };

        for _ in 0..run {
            {
                let _timer = ScopedTimer::new("scene::integrate");
                self.integrate();
            }
            {
                let _timer = ScopedTimer::new("scene::collide");
                self.collide(&mut stats);
            }
            stats.steps += 1;
        }

        log_update_stats(&stats);
        self.totals += stats;
        stats
    }

    /// Delegates drawing to `renderer`, visiting actors in insertion order.
    pub fn draw(&self, renderer: &mut dyn ShapeRenderer) {
        for id in &self.order {
            if let Some(actor) = self.actors.get(*id) {
                actor.draw(renderer);
            }
        }
    }

    /// Pairs that currently overlap, without applying any response.
    pub fn overlapping_pairs(&self) -> Vec<(ActorId, ActorId)> {
        let mut pairs = Vec::new();
        for (i, &id_a) in self.order.iter().enumerate() {
            for &id_b in &self.order[i + 1..] {
                let (Some(a), Some(b)) = (self.actors.get(id_a), self.actors.get(id_b)) else {
                    continue;
                };
                if NarrowPhase::overlaps(a, b) == Some(true) {
                    pairs.push((id_a, id_b));
                }
            }
        }
        pairs
    }

    // Whole steps held by the accumulator. Counts that sit within f32 rounding
    // of the next integer are rounded up, so `update(n * dt)` and `n` calls
    // of `update(dt)` agree.
    fn whole_steps_due(&self, step: f64) -> usize {
        let ratio = self.time_accumulated / step;
        (ratio * (1.0 + STEP_TOLERANCE)).floor() as usize
    }

    fn integrate(&mut self) {
        #[cfg(feature = "parallel")]
        if self.parallel_enabled {
            crate::dynamics::parallel::ParallelIntegrator::new(self.gravity, self.time_step)
                .step(&mut self.actors);
            return;
        }

        for id in &self.order {
            if let Some(actor) = self.actors.get_mut(*id) {
                actor.fixed_update(self.gravity, self.time_step);
            }
        }
    }

    fn collide(&mut self, stats: &mut UpdateStats) {
        let members = self.order.len();
        for i in 0..members {
            for j in (i + 1)..members {
                let (id_a, id_b) = (self.order[i], self.order[j]);
                let Some((a, b)) = self.actors.get2_mut(id_a, id_b) else {
                    continue;
                };

                let outcome = NarrowPhase::collide(a, b);
                if outcome == CollisionOutcome::Collided {
                    trace!("collision between {id_a:?} and {id_b:?}");
                }
                stats.record(outcome);
            }
        }
    }
}
