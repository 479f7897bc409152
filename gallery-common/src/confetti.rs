//! Confetti particle animation.
//!
//! [`ParticleSystem`] holds the live particles and implements the per-frame
//! step. [`Confetti`] bundles it with the delayed-wave queue used by burst
//! presets, and is the single piece of state a host needs to own.

mod config;
pub use config::ConfettiConfig;

mod particle;
pub use particle::Particle;

mod surface;
pub use surface::Surface;

mod system;
pub use system::{ParticleSystem, SpawnMode};

mod burst;
pub use burst::{Burst, Wave, WaveQueue};

use crate::core::Vector;

pub struct Confetti {
    pub system: ParticleSystem,
    pub waves: WaveQueue,
    /// Timestamp passed to the most recent `frame`.
    last_frame_ms: Option<f64>,
}

impl Confetti {
    pub fn new(config: ConfettiConfig, width: f32, height: f32, seed: u64) -> Self {
        Self {
            system: ParticleSystem::new(config, width, height, seed),
            waves: WaveQueue::new(),
            last_frame_ms: None,
        }
    }

    /// Spawn immediately. `None` arguments fall back to the configured defaults.
    pub fn spawn(&mut self, origin: Option<Vector>, count: Option<usize>, mode: SpawnMode) {
        let origin = origin.unwrap_or_else(|| self.system.default_origin());
        let count = count.unwrap_or(self.system.config().default_count);
        self.system.spawn(origin, count, mode);
    }

    /// Queue every wave of `burst`. Waves due right away are released on the
    /// next frame.
    ///
    /// Delays count from the last frame timestamp rather than `now_ms`: frame
    /// timestamps can trail a clock read taken in an event handler during the
    /// same frame. `now_ms` is used until the first frame runs.
    pub fn trigger(&mut self, burst: Burst, now_ms: f64) {
        let start = self.last_frame_ms.map_or(now_ms, |t| t.min(now_ms));
        let waves = burst.waves(self.system.width(), self.system.height());
        log::debug!("burst {:?}: {} waves", burst, waves.len());
        self.waves.schedule(start, waves);
    }

    /// One display frame: release due waves, then clear, step and render.
    pub fn frame<S: Surface>(&mut self, now_ms: f64, surface: &mut S) {
        self.last_frame_ms = Some(now_ms);
        for wave in self.waves.drain_due(now_ms) {
            self.system.spawn(wave.origin, wave.count, wave.mode);
        }
        self.system.frame(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::surface::tests::RecordingSurface;
    use super::*;

    #[test]
    fn test_defaults_fill_in() {
        let mut confetti = Confetti::new(ConfettiConfig::default(), 800.0, 600.0, 1);
        confetti.spawn(None, Some(5), SpawnMode::Origin);
        assert_eq!(confetti.system.len(), 5);
        for p in confetti.system.particles() {
            assert!((p.pos.x - 400.0).abs() <= 60.0);
            assert!((p.pos.y - 20.0).abs() <= 20.0);
        }

        confetti.spawn(None, None, SpawnMode::Origin);
        assert_eq!(confetti.system.len(), 205);
    }

    #[test]
    fn test_burst_waves_release_over_time() {
        let mut confetti = Confetti::new(ConfettiConfig::default(), 800.0, 600.0, 2);
        let mut surface = RecordingSurface::default();

        confetti.trigger(Burst::Load, 1000.0);
        confetti.frame(1000.0, &mut surface);
        assert_eq!(confetti.system.len(), 300);
        assert_eq!(confetti.waves.len(), 2);

        // 16ms later nothing new is due and nothing has had time to expire
        confetti.frame(1016.0, &mut surface);
        assert_eq!(confetti.system.len(), 300);

        confetti.frame(1400.0, &mut surface);
        assert_eq!(confetti.system.len(), 650);
        assert!(confetti.waves.is_empty());
    }

    #[test]
    fn test_burst_between_frames_counts_from_last_frame() {
        let mut confetti = Confetti::new(ConfettiConfig::default(), 800.0, 600.0, 3);
        let mut surface = RecordingSurface::default();
        confetti.frame(1000.0, &mut surface);

        // clock read in a handler runs ahead of the next frame timestamp
        confetti.trigger(Burst::Click { x: 400.0, y: 300.0 }, 1005.0);
        confetti.frame(1003.0, &mut surface);
        assert_eq!(confetti.system.len(), 120);

        confetti.frame(1060.0, &mut surface);
        assert_eq!(confetti.system.len(), 200);
        assert_eq!(confetti.waves.len(), 1);
    }
}
