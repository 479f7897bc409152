use serde::{Deserialize, Serialize};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    /// Build a color from 4 0..255 components
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color::new(
            r as f32 / 255.,
            g as f32 / 255.,
            b as f32 / 255.,
            a as f32 / 255.,
        )
    }

    /// Build a color from a hexadecimal u32
    /// Example: 0x4ECDC4 - a teal
    pub fn from_hex(hex: u32) -> Color {
        let bytes: [u8; 4] = hex.to_be_bytes();

        Self::from_rgba(bytes[1], bytes[2], bytes[3], 255)
    }

    /// `#rrggbb` form for canvas fill styles. Alpha is applied separately
    /// through the context's global alpha.
    pub fn to_css(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

pub mod colors {
    //! The confetti palette.
    use super::Color;

    pub const CONFETTI: [u32; 7] = [
        0xFF6B6B, // coral
        0x4ECDC4, // teal
        0x45B7D1, // sky
        0x96CEB4, // sage
        0xFECA57, // saffron
        0xFF9FF3, // pink
        0x54A0FF, // blue
    ];

    pub fn confetti() -> Vec<Color> {
        CONFETTI.iter().map(|&hex| Color::from_hex(hex)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0xFF6B6B);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 107.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_css_matches_palette() {
        let css: Vec<String> = colors::confetti().iter().map(Color::to_css).collect();
        assert_eq!(css[0], "#ff6b6b");
        assert_eq!(css[6], "#54a0ff");
        assert_eq!(css.len(), 7);
    }
}
