use super::system::MAX_PARTICLES;
use crate::core::{colors, Color, Span};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Tunables for the confetti loop. Velocities and accelerations are per
/// frame, distances in CSS pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfettiConfig {
    /// Added to `vy` every frame.
    pub gravity: f32,
    /// Subtracted from `life` every frame. `None` disables fading and
    /// particles are only culled by leaving the canvas.
    pub fade_speed: Option<f32>,
    /// Horizontal cull margin, also the outward offset of corner spawns.
    pub margin: f32,
    /// Distance below the bottom edge at which particles are culled. Bottom
    /// corner spawns sit exactly on this line.
    pub floor_margin: f32,
    /// Full width/height of the box around the origin that spawns land in.
    pub jitter: (f32, f32),
    pub drift: Span,
    pub fall: Span,
    /// Per-axis speed of corner spawns; the sign is chosen per corner.
    pub corner_speed: Span,
    pub size: Span,
    pub rotation: Span,
    pub spin: Span,
    pub palette: Vec<Color>,
    pub default_count: usize,
    pub default_origin_y: f32,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            gravity: 0.05,
            fade_speed: Some(0.008),
            margin: 50.0,
            floor_margin: 40.0,
            jitter: (120.0, 40.0),
            drift: Span::around_zero(1.5),
            fall: Span::new(2.0, 4.0),
            corner_speed: Span::new(2.0, 6.0),
            size: Span::new(8.0, 20.0),
            rotation: Span::new(0.0, std::f32::consts::PI),
            spin: Span::around_zero(0.15),
            palette: colors::confetti(),
            default_count: 200,
            default_origin_y: 20.0,
        }
    }
}

impl ConfettiConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            bail!("gravity must be finite, got {}", self.gravity);
        }
        if let Some(fade) = self.fade_speed {
            if !(fade.is_finite() && fade > 0.0) {
                bail!("fade_speed must be positive, got {}", fade);
            }
        }
        if !(self.margin >= 0.0 && self.floor_margin >= 0.0) {
            bail!(
                "margins must be non-negative, got {} / {}",
                self.margin,
                self.floor_margin
            );
        }
        if !(self.jitter.0 >= 0.0 && self.jitter.1 >= 0.0) {
            bail!("jitter must be non-negative, got {:?}", self.jitter);
        }
        for (name, span) in [
            ("drift", self.drift),
            ("fall", self.fall),
            ("corner_speed", self.corner_speed),
            ("size", self.size),
            ("rotation", self.rotation),
            ("spin", self.spin),
        ] {
            if !span.is_valid() {
                bail!("{} range is invalid: {:?}", name, span);
            }
        }
        if self.corner_speed.min < 0.0 {
            bail!("corner_speed must be non-negative, got {:?}", self.corner_speed);
        }
        if self.default_count > MAX_PARTICLES {
            bail!(
                "default_count must be at most {}, got {}",
                MAX_PARTICLES,
                self.default_count
            );
        }
        if self.palette.is_empty() {
            bail!("palette must contain at least one color");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        ConfettiConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ConfettiConfig =
            serde_json::from_str(r#"{ "gravity": 0.1, "fade_speed": null }"#).unwrap();
        assert_eq!(config.gravity, 0.1);
        assert_eq!(config.fade_speed, None);
        assert_eq!(config.margin, 50.0);
        assert_eq!(config.palette.len(), 7);
        config.validate().unwrap();
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            ConfettiConfig {
                gravity: f32::INFINITY,
                ..Default::default()
            },
            ConfettiConfig {
                fade_speed: Some(0.0),
                ..Default::default()
            },
            ConfettiConfig {
                margin: -1.0,
                ..Default::default()
            },
            ConfettiConfig {
                size: Span::new(20.0, 8.0),
                ..Default::default()
            },
            ConfettiConfig {
                default_count: usize::MAX / 2,
                ..Default::default()
            },
            ConfettiConfig {
                palette: Vec::new(),
                ..Default::default()
            },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{config:?} should be rejected");
        }
    }
}
