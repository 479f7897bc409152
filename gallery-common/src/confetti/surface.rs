use crate::core::{Color, Vector};

/// Drawing target for the confetti loop.
pub trait Surface {
    /// Wipe the whole `width × height` area.
    fn clear(&mut self, width: f32, height: f32);

    /// Fill a `width × height` rectangle centered on `center` and rotated by
    /// `rotation` radians about it.
    fn fill_rotated_rect(
        &mut self,
        center: Vector,
        rotation: f32,
        width: f32,
        height: f32,
        color: Color,
        alpha: f32,
    );
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub struct DrawnRect {
        pub center: Vector,
        pub rotation: f32,
        pub width: f32,
        pub height: f32,
        pub color: Color,
        pub alpha: f32,
    }

    /// Records draw calls; `rects` only holds what was drawn since the last clear.
    #[derive(Default)]
    pub struct RecordingSurface {
        pub clears: usize,
        pub rects: Vec<DrawnRect>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, _width: f32, _height: f32) {
            self.clears += 1;
            self.rects.clear();
        }

        fn fill_rotated_rect(
            &mut self,
            center: Vector,
            rotation: f32,
            width: f32,
            height: f32,
            color: Color,
            alpha: f32,
        ) {
            self.rects.push(DrawnRect {
                center,
                rotation,
                width,
                height,
                color,
                alpha,
            });
        }
    }
}
