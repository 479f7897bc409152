use super::{ConfettiConfig, Particle, Surface};
use crate::core::Vector;

/// Rectangles are drawn `size` wide and `size * ASPECT` tall.
const ASPECT: f32 = 0.4;

/// Upper bound on live particles. Spawns past it are truncated.
pub const MAX_PARTICLES: usize = 20_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnMode {
    /// Around the given origin, falling.
    Origin,
    /// From a random canvas corner, flying inward. The origin is ignored.
    ///
    /// Corners sit `margin` outside the left, right and top edges but only
    /// `floor_margin` below the bottom edge, so the offset holds per axis.
    /// Bottom spawns start on the floor cull line and survive their first
    /// frame because they move upward.
    Corners,
}

impl From<bool> for SpawnMode {
    fn from(from_corner: bool) -> Self {
        if from_corner {
            SpawnMode::Corners
        } else {
            SpawnMode::Origin
        }
    }
}

pub struct ParticleSystem {
    particles: Vec<Particle>,
    config: ConfettiConfig,
    width: f32,
    height: f32,
    rng: fastrand::Rng,
}

impl ParticleSystem {
    pub fn new(config: ConfettiConfig, width: f32, height: f32, seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(config.default_count.min(MAX_PARTICLES)),
            config,
            width,
            height,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn config(&self) -> &ConfettiConfig {
        &self.config
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Live particles keep their pixel coordinates; only the culling bounds
    /// move.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn default_origin(&self) -> Vector {
        Vector::new(self.width / 2.0, self.config.default_origin_y)
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn spawn(&mut self, origin: Vector, count: usize, mode: SpawnMode) {
        let room = MAX_PARTICLES.saturating_sub(self.particles.len());
        if count > room {
            log::debug!("spawn of {} clamped to {}", count, room);
        }
        let count = count.min(room);
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = self.gen_particle(origin, mode);
            self.particles.push(particle);
        }
        log::trace!(
            "spawned {} particles ({:?}), {} live",
            count,
            mode,
            self.particles.len()
        );
    }

    fn gen_particle(&mut self, origin: Vector, mode: SpawnMode) -> Particle {
        let config = &self.config;
        let rng = &mut self.rng;

        let (pos, vel) = match mode {
            SpawnMode::Origin => {
                let (jx, jy) = config.jitter;
                let pos = Vector::new(
                    origin.x + (rng.f32() - 0.5) * jx,
                    origin.y + (rng.f32() - 0.5) * jy,
                );
                let vel = Vector::new(config.drift.sample(rng), config.fall.sample(rng));
                (pos, vel)
            }
            SpawnMode::Corners => {
                let left = -config.margin;
                let right = self.width + config.margin;
                let top = -config.margin;
                let bottom = self.height + config.floor_margin;
                let (x, y, dx, dy) = match rng.u8(..4) {
                    0 => (left, top, 1.0, 1.0),
                    1 => (right, top, -1.0, 1.0),
                    2 => (left, bottom, 1.0, -1.0),
                    _ => (right, bottom, -1.0, -1.0),
                };
                let vel = Vector::new(
                    dx * config.corner_speed.sample(rng),
                    dy * config.corner_speed.sample(rng),
                );
                (Vector::new(x, y), vel)
            }
        };

        Particle {
            pos,
            vel,
            size: config.size.sample(rng),
            rotation: config.rotation.sample(rng),
            angular_velocity: config.spin.sample(rng),
            color: config.palette[rng.usize(..config.palette.len())],
            life: config.fade_speed.map(|_| 1.0),
        }
    }

    /// Advance every particle by one frame and drop the expired ones.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        let config = &self.config;
        self.particles.retain_mut(|p| {
            p.step(config.gravity, config.fade_speed);
            !p.is_expired(width, height, config)
        });
    }

    pub fn render<S: Surface>(&self, surface: &mut S) {
        for p in &self.particles {
            surface.fill_rotated_rect(
                p.pos,
                p.rotation,
                p.size,
                p.size * ASPECT,
                p.color,
                p.alpha(),
            );
        }
    }

    /// One tick: clear, step, render.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) {
        surface.clear(self.width, self.height);
        self.step();
        self.render(surface);
    }
}
