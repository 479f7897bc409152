use super::ConfettiConfig;
use crate::core::{Color, Vector};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector,
    pub vel: Vector,
    pub size: f32,
    pub rotation: f32,
    pub angular_velocity: f32,
    pub color: Color,
    /// Remaining opacity in `[0, 1]`. `None` when fading is disabled.
    pub life: Option<f32>,
}

impl Particle {
    /// Advance by one frame.
    pub fn step(&mut self, gravity: f32, fade_speed: Option<f32>) {
        self.pos += self.vel;
        self.vel.y += gravity;
        self.rotation += self.angular_velocity;
        if let (Some(life), Some(fade)) = (self.life.as_mut(), fade_speed) {
            *life -= fade;
        }
    }

    pub fn is_expired(&self, width: f32, height: f32, config: &ConfettiConfig) -> bool {
        self.pos.y > height + config.floor_margin
            || self.pos.x < -config.margin
            || self.pos.x > width + config.margin
            || self.life.is_some_and(|life| life <= 0.0)
    }

    pub fn alpha(&self) -> f32 {
        self.life.map_or(1.0, |life| life.clamp(0.0, 1.0))
    }
}
