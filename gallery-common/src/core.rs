pub type Vector = nalgebra::Vector2<f32>;

pub const EPS: f32 = 1e-5;

mod color;
pub use color::{colors, Color};

mod span;
pub use span::Span;
