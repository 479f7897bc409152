use serde::{Deserialize, Serialize};

/// A half-open interval `[min, max)` sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Symmetric span `[-half, half)`.
    pub fn around_zero(half: f32) -> Self {
        Self::new(-half, half)
    }

    pub fn sample(&self, rng: &mut fastrand::Rng) -> f32 {
        self.min + (self.max - self.min) * rng.f32()
    }

    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_stays_inside() {
        let mut rng = fastrand::Rng::with_seed(3);
        let span = Span::new(2.0, 4.0);
        for _ in 0..1000 {
            let v = span.sample(&mut rng);
            assert!(span.contains(v), "{v} escaped {span:?}");
        }
    }

    #[test]
    fn test_degenerate_span() {
        let mut rng = fastrand::Rng::with_seed(3);
        assert_eq!(Span::new(5.0, 5.0).sample(&mut rng), 5.0);
        assert!(!Span::new(1.0, 0.0).is_valid());
        assert!(!Span::new(f32::NAN, 0.0).is_valid());
    }
}
