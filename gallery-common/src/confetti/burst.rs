use super::SpawnMode;
use crate::core::Vector;
use anyhow::{bail, Result};
use std::str::FromStr;

/// Horizontal spacing of the trailing click waves.
const CLICK_RING: f32 = 90.0;

/// A trigger on the page and the confetti it fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Burst {
    /// Page finished loading.
    Load,
    /// The logo was dragged far enough; `x` is the pointer position.
    Drag { x: f32 },
    /// Konami code entered.
    Konami,
    /// Gallery grid density toggled.
    Grid,
    /// A lucky click at `(x, y)`.
    Click { x: f32, y: f32 },
}

/// One spawn call within a burst, `delay_ms` after the trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    pub delay_ms: f64,
    pub origin: Vector,
    pub count: usize,
    pub mode: SpawnMode,
}

impl Wave {
    fn corners(delay_ms: f64, x: f32, y: f32, count: usize) -> Self {
        Self {
            delay_ms,
            origin: Vector::new(x, y),
            count,
            mode: SpawnMode::Corners,
        }
    }
}

impl Burst {
    /// Parse a burst name coming from JS. Position-carrying bursts take
    /// their coordinates separately.
    pub fn from_name(name: &str, x: f32, y: f32) -> Result<Self> {
        Ok(match name {
            "load" => Burst::Load,
            "drag" => Burst::Drag { x },
            "konami" => Burst::Konami,
            "grid" => Burst::Grid,
            "click" => Burst::Click { x, y },
            _ => bail!("unknown burst '{}'", name),
        })
    }

    pub fn waves(&self, width: f32, height: f32) -> Vec<Wave> {
        match *self {
            Burst::Load => vec![
                Wave::corners(0.0, width / 2.0, 40.0, 300),
                Wave::corners(200.0, width / 2.0, 40.0, 200),
                Wave::corners(400.0, width / 2.0, 40.0, 150),
            ],
            Burst::Drag { x } => vec![Wave::corners(0.0, x, 40.0, 250)],
            Burst::Konami => (0..5)
                .map(|i| Wave::corners(i as f64 * 120.0, width / 2.0, 20.0, 200))
                .collect(),
            Burst::Grid => vec![Wave::corners(0.0, width - 60.0, height - 80.0, 150)],
            Burst::Click { x, y } => vec![
                Wave::corners(0.0, x, y, 120),
                Wave::corners(60.0, x + CLICK_RING, y, 80),
                Wave::corners(120.0, x - CLICK_RING, y, 80),
            ],
        }
    }
}

impl FromStr for Burst {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s, 0.0, 0.0)
    }
}

/// Waves waiting for their due time, kept sorted by it.
#[derive(Default)]
pub struct WaveQueue {
    pending: Vec<(f64, Wave)>,
}

impl WaveQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn schedule(&mut self, now_ms: f64, waves: impl IntoIterator<Item = Wave>) {
        for wave in waves {
            let due = now_ms + wave.delay_ms.max(0.0);
            // stable: equal due times keep insertion order
            let at = self.pending.partition_point(|(d, _)| *d <= due);
            self.pending.insert(at, (due, wave));
        }
    }

    /// Remove and return every wave due at or before `now_ms`, earliest first.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<Wave> {
        let n = self.pending.partition_point(|(d, _)| *d <= now_ms);
        self.pending.drain(..n).map(|(_, wave)| wave).collect()
    }
}
