//! Object fill colors.
//!
//! Colors live as 3 × u8 RGB and travel as `#RRGGBB` hex strings — the
//! form the drawing surface consumes directly. Random assignment draws
//! each hex digit independently so the palette is the full 24-bit space
//! quantized to 16 steps per digit.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// RGB color. Stored as 3 × u8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex color string. The `#` prefix is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();
        if bytes.len() != 6 {
            return None;
        }

        let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
        let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
        let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
        Some(Self::rgb(r, g, b))
    }

    /// Emit as `#RRGGBB` with uppercase digits.
    pub fn to_hex(&self) -> String {
        const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";
        let buf = [
            b'#',
            HEX_CHARS[(self.r >> 4) as usize],
            HEX_CHARS[(self.r & 0xF) as usize],
            HEX_CHARS[(self.g >> 4) as usize],
            HEX_CHARS[(self.g & 0xF) as usize],
            HEX_CHARS[(self.b >> 4) as usize],
            HEX_CHARS[(self.b & 0xF) as usize],
        ];
        // SAFETY: buffer only contains valid ASCII hex characters and '#'
        unsafe { String::from_utf8_unchecked(buf.to_vec()) }
    }

    /// Draw a random color: six hex digits, each chosen independently
    /// from the 16 symbols. The generator is injected so callers (and
    /// tests) control determinism.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut channel = |rng: &mut R| -> u8 {
            let hi: u8 = rng.random_range(0..16);
            let lo: u8 = rng.random_range(0..16);
            hi << 4 | lo
        };
        let r = channel(rng);
        let g = channel(rng);
        let b = channel(rng);
        Self::rgb(r, g, b)
    }
}
