use serde::{Deserialize, Serialize};

/// Errors from parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("expected a color like \"#RRGGBB\", got {0:?}")]
    Malformed(String),
}

/// RGB color with components in `0.0..=1.0`.
///
/// Serialized as a `"#RRGGBB"` string so config files read the way colors are
/// usually written.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    /// Parse `#RRGGBB` (or `RRGGBB`, or `0xRRGGBB`).
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Malformed(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_hex)
            .map_err(|_| ColorError::Malformed(s.to_string()))
    }

    pub fn to_hex(&self) -> u32 {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Color scaled by an intensity, as fed to lighting.
    pub fn scaled(&self, intensity: f32) -> [f32; 3] {
        [self.r * intensity, self.g * intensity, self.b * intensity]
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert from sRGB-encoded components to linear light for shading.
    pub fn to_linear(&self) -> Self {
        let decode = |c: f32| {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        Self::rgb(decode(self.r), decode(self.g), decode(self.b))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06X}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cube_color() {
        let c = Color::parse("#FFDB99").unwrap();
        assert_eq!(c.to_hex(), 0xFFDB99);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 219.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 153.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn parse_accepts_prefixes() {
        assert_eq!(Color::parse("0xffffff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("000000").unwrap(), Color::BLACK);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            Color::parse("#FFF"),
            Err(ColorError::Malformed(_))
        ));
        assert!(Color::parse("#GGGGGG").is_err());
        assert!(Color::parse("").is_err());
    }

    #[test]
    fn display_is_uppercase_hex() {
        assert_eq!(Color::from_hex(0xffdb99).to_string(), "#FFDB99");
    }

    #[test]
    fn linear_keeps_endpoints() {
        assert_eq!(Color::WHITE.to_linear(), Color::WHITE);
        assert_eq!(Color::BLACK.to_linear(), Color::BLACK);
        let mid = Color::rgb(0.5, 0.5, 0.5).to_linear();
        assert!((mid.r - 0.214).abs() < 1e-3);
    }

    #[test]
    fn scaled_by_intensity() {
        assert_eq!(Color::WHITE.scaled(0.5), [0.5, 0.5, 0.5]);
    }
}
