//! Color values for layer styling.

use std::fmt;

use serde::{Serialize, Serializer};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// From a packed 0xRRGGBB literal.
    pub const fn hex(v: u32) -> Self {
        Self { r: (v >> 16) as u8, g: (v >> 8) as u8, b: v as u8 }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Rgb;

    #[test]
    fn hex_round_trips_through_display() {
        assert_eq!(Rgb::hex(0x4ea1ff).to_string(), "#4ea1ff");
        assert_eq!(Rgb::new(11, 12, 16).to_string(), "#0b0c10");
    }

    #[test]
    fn serializes_as_css_string() {
        assert_eq!(serde_json::to_string(&Rgb::hex(0xf472b6)).unwrap(), "\"#f472b6\"");
    }
}
