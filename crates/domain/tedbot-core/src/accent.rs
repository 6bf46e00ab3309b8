use serde::{Deserialize, Serialize};

/// Theme variables that follow the accent color.
pub const ACCENT_PROPERTIES: [&str; 4] = ["--primary", "--ring", "--sidebar-primary", "--sidebar-ring"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AccentError {
    #[error("expected a #rrggbb color, got {0:?}")]
    Format(String),
}

/// Accent color as reported by the backend's OS color scheme lookup.
///
/// Hue is in degrees, saturation and luminance in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accent {
    pub hue: f32,
    pub saturation: f32,
    pub luminance: f32,
    pub hex_code: String,
}

impl Accent {
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        let (hue, saturation, luminance) = rgb_to_hsl(red, green, blue);
        Self {
            hue,
            saturation,
            luminance,
            hex_code: format!("#{red:02x}{green:02x}{blue:02x}"),
        }
    }

    pub fn parse_hex(input: &str) -> Result<Self, AccentError> {
        let (r, g, b) = parse_rgb(input).ok_or_else(|| AccentError::Format(input.to_string()))?;
        Ok(Self::from_rgb(r, g, b))
    }

    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        parse_rgb(&self.hex_code)
    }
}

fn parse_rgb(input: &str) -> Option<(u8, u8, u8)> {
    let hex = input.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn rgb_to_hsl(red: u8, green: u8, blue: u8) -> (f32, f32, f32) {
    let r = f32::from(red) / 255.0;
    let g = f32::from(green) / 255.0;
    let b = f32::from(blue) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h * 60.0, s * 100.0, l * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_or_without_hash() {
        let a = Accent::parse_hex("#9146FF").unwrap();
        assert_eq!(a.hex_code, "#9146ff");
        assert_eq!(a.rgb(), Some((0x91, 0x46, 0xff)));
        assert_eq!(Accent::parse_hex("9146ff").unwrap(), a);
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["", "#fff", "#gggggg", "#1234567", "#ééé"] {
            assert!(Accent::parse_hex(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn computes_hsl() {
        let red = Accent::from_rgb(255, 0, 0);
        assert_eq!((red.hue, red.saturation, red.luminance), (0.0, 100.0, 50.0));

        let blue = Accent::from_rgb(0, 0, 255);
        assert_eq!(blue.hue, 240.0);

        let grey = Accent::from_rgb(128, 128, 128);
        assert_eq!(grey.saturation, 0.0);
    }
}
