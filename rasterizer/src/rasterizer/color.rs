/// An 8-bit RGBA color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const PURPLE: Color = Color::rgb(255, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);

    const OUTLINE_FACTOR: f32 = 0.75;

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packs the color as `R | G << 8 | B << 16 | A << 24`, which is the byte
    /// order `[r, g, b, a]` in memory on little endian targets.
    pub const fn to_rgba(self) -> u32 {
        self.r as u32 | (self.g as u32) << 8 | (self.b as u32) << 16 | (self.a as u32) << 24
    }

    pub const fn from_rgba(packed: u32) -> Self {
        Self {
            r: (packed & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: ((packed >> 16) & 0xff) as u8,
            a: (packed >> 24) as u8,
        }
    }

    /// Scales the color channels by `intensity`, clamped to `[0, 1]`. Alpha is kept.
    pub fn scaled(self, intensity: f32) -> Self {
        let intensity = if intensity.is_nan() {
            0.0
        } else {
            intensity.clamp(0.0, 1.0)
        };
        let scale = |c: u8| (c as f32 * intensity) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    pub fn darkened(self) -> Self {
        self.scaled(Self::OUTLINE_FACTOR)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
