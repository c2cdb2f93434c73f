/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const NEAR_BLACK: Self = Self { r: 0.039, g: 0.039, b: 0.039, a: 1.0 }; // #0a0a0a
    pub const CYAN:       Self = Self { r: 0.0,   g: 1.0,   b: 1.0,   a: 1.0 }; // #00ffff

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: 1.0,
            }),
            8 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: byte(&hex[6..8])? as f32 / 255.0,
            }),
            _ => None,
        }
    }

    /// Pack into a `0xRRGGBB` pixel value for a 24-bit TrueColor visual.
    ///
    /// Alpha is ignored; core X drawing has no transparency.
    #[must_use]
    pub fn to_pixel(self) -> u64 {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u64;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// 16-bit `[red, green, blue, alpha]` channels as XRender expects them.
    #[must_use]
    pub fn to_rgba16(self) -> [u16; 4] {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 65535.0).round() as u16;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rgb() {
        let c = Color::from_hex("#00ffff").unwrap();
        assert_eq!(c, Color::CYAN);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn pixel_round_trips_hex() {
        assert_eq!(Color::from_hex("#0a0a0a").unwrap().to_pixel(), 0x0a0a0a);
        assert_eq!(Color::CYAN.to_pixel(), 0x00ffff);
    }

    #[test]
    fn rgba16_is_full_scale() {
        assert_eq!(Color::CYAN.to_rgba16(), [0x0000, 0xffff, 0xffff, 0xffff]);
    }
}
