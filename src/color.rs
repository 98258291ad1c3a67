use std::fmt;

use serde::{Deserialize, Serialize};

/// Saturation below this is treated as a shade of gray.
const NEARLY_ZERO: f32 = 1.0 / 4096.0;

/// A packed `0xAARRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(u8::MAX, u8::MAX, u8::MAX);
    pub const TRANSPARENT: Color = Color(0);

    pub const fn from_argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self((alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// Fully opaque color from its channels.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_argb(u8::MAX, red, green, blue)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_opaque(self) -> bool {
        self.alpha() == u8::MAX
    }

    /// Opaque color from hue (degrees), saturation and value.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        Self::from_ahsv(u8::MAX, hue, saturation, value)
    }

    /// Converts an HSV triple into a packed color.
    ///
    /// Saturation and value are clamped to `0.0..=1.0`, a hue outside
    /// `0.0..360.0` is treated as 0 and every channel is rounded on its own.
    pub fn from_ahsv(alpha: u8, hue: f32, saturation: f32, value: f32) -> Self {
        let saturation = saturation.clamp(0.0, 1.0);
        let value = value.clamp(0.0, 1.0);
        let value_byte = round_channel(value * 255.0);

        if saturation < NEARLY_ZERO {
            return Self::from_argb(alpha, value_byte, value_byte, value_byte);
        }

        let hx = if (0.0..360.0).contains(&hue) { hue / 60.0 } else { 0.0 };
        let sector = hx.floor();
        let fraction = hx - sector;

        let p = round_channel((1.0 - saturation) * value * 255.0);
        let q = round_channel((1.0 - saturation * fraction) * value * 255.0);
        let t = round_channel((1.0 - saturation * (1.0 - fraction)) * value * 255.0);

        let (red, green, blue) = match sector as u32 {
            0 => (value_byte, t, p),
            1 => (q, value_byte, p),
            2 => (p, value_byte, t),
            3 => (p, q, value_byte),
            4 => (t, p, value_byte),
            _ => (value_byte, p, q),
        };
        Self::from_argb(alpha, red, green, blue)
    }

    /// Returns `(hue, saturation, value)`, hue in degrees.
    pub fn to_hsv(self) -> (f32, f32, f32) {
        let (red, green, blue) = (self.red() as f32, self.green() as f32, self.blue() as f32);
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let value = max / 255.0;
        let delta = max - min;

        if delta == 0.0 {
            return (0.0, 0.0, value);
        }

        let saturation = delta / max;
        let sector = if red == max {
            (green - blue) / delta
        } else if green == max {
            2.0 + (blue - red) / delta
        } else {
            4.0 + (red - green) / delta
        };
        let mut hue = sector * 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }
        (hue, saturation, value)
    }
}

fn round_channel(channel: f32) -> u8 {
    (channel + 0.5).floor().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
        } else {
            write!(f, "#{:08X}", self.0)
        }
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        image::Rgba([color.red(), color.green(), color.blue(), color.alpha()])
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        let [red, green, blue, alpha] = pixel.0;
        Self::from_argb(alpha, red, green, blue)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn it_converts_primary_hues() {
        assert_eq!(Color::from_hsv(0.0, 1.0, 1.0), Color::from_rgb(255, 0, 0));
        assert_eq!(Color::from_hsv(60.0, 1.0, 1.0), Color::from_rgb(255, 255, 0));
        assert_eq!(Color::from_hsv(120.0, 1.0, 1.0), Color::from_rgb(0, 255, 0));
        assert_eq!(Color::from_hsv(180.0, 1.0, 1.0), Color::from_rgb(0, 255, 255));
        assert_eq!(Color::from_hsv(240.0, 1.0, 1.0), Color::from_rgb(0, 0, 255));
        assert_eq!(Color::from_hsv(300.0, 1.0, 1.0), Color::from_rgb(255, 0, 255));
    }

    #[test]
    fn it_treats_zero_saturation_as_gray() {
        assert_eq!(Color::from_hsv(200.0, 0.0, 0.5), Color::from_rgb(128, 128, 128));
        assert_eq!(Color::from_hsv(10.0, 0.0, 1.0), Color::WHITE);
        assert_eq!(Color::from_hsv(10.0, 1.0, 0.0), Color::BLACK);
    }

    #[test]
    fn it_wraps_out_of_range_hue_to_red() {
        assert_eq!(Color::from_hsv(360.0, 1.0, 1.0), Color::from_rgb(255, 0, 0));
        assert_eq!(Color::from_hsv(-30.0, 1.0, 1.0), Color::from_rgb(255, 0, 0));
    }

    #[test]
    fn it_clamps_saturation_and_value() {
        assert_eq!(Color::from_hsv(0.0, 2.0, 1.5), Color::from_rgb(255, 0, 0));
    }

    #[test]
    fn it_recovers_hsv() {
        let (hue, saturation, value) = Color::from_hsv(200.0, 0.75, 0.8).to_hsv();
        assert!((hue - 200.0).abs() < 1.0, "hue {hue}");
        assert!((saturation - 0.75).abs() < 0.01, "saturation {saturation}");
        assert!((value - 0.8).abs() < 0.01, "value {value}");
    }

    #[test]
    fn it_packs_channels() {
        let c = Color::from_argb(0x80, 0x12, 0x34, 0x56);
        assert_eq!(c.0, 0x8012_3456);
        assert_eq!((c.alpha(), c.red(), c.green(), c.blue()), (0x80, 0x12, 0x34, 0x56));
        assert_eq!(c.to_string(), "#80123456");
        assert_eq!(Color::from_rgb(0x12, 0x34, 0x56).to_string(), "#123456");

        let pixel = image::Rgba::from(c);
        assert_eq!(pixel.0, [0x12, 0x34, 0x56, 0x80]);
        assert_eq!(Color::from(pixel), c);
    }
}
