//! Hex colour parsing and shading for phase headers.
//!
//! Only the hex notations the catalog uses are accepted: `#rgb` and
//! `#rrggbb`. Anything else is rejected rather than guessed.

/// RGBA colour, 0-255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Accent used for the progress ring and particles.
    pub const ACCENT: Self = Self::rgb(0x66, 0x7e, 0xea);
    /// Unfilled part of the progress ring.
    pub const TRACK: Self = Self::rgb(0xe0, 0xe0, 0xe0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Add `amount` to every colour channel, clamped to 0..=255.
    /// Alpha is untouched.
    pub fn shade(self, amount: i16) -> Self {
        let adj = |c: u8| (c as i16 + amount).clamp(0, 255) as u8;
        Self {
            r: adj(self.r),
            g: adj(self.g),
            b: adj(self.b),
            a: self.a,
        }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Normalised channels for GPU/egui use.
    #[inline]
    pub fn to_f32(self) -> [f32; 4] {
        const INV_255: f32 = 1.0 / 255.0;
        [
            self.r as f32 * INV_255,
            self.g as f32 * INV_255,
            self.b as f32 * INV_255,
            self.a as f32 * INV_255,
        ]
    }
}

/// Hex character to its 4-bit value, without branching on the range.
#[inline(always)]
fn hex_digit(b: u8) -> Option<u8> {
    let is_digit = (b.wrapping_sub(b'0') < 10) as u8;
    let is_lower = (b.wrapping_sub(b'a') < 6) as u8;
    let is_upper = (b.wrapping_sub(b'A') < 6) as u8;

    let value = is_digit.wrapping_mul(b.wrapping_sub(b'0'))
        .wrapping_add(is_lower.wrapping_mul(b.wrapping_sub(b'a').wrapping_add(10)))
        .wrapping_add(is_upper.wrapping_mul(b.wrapping_sub(b'A').wrapping_add(10)));

    ((is_digit | is_lower | is_upper) == 1).then_some(value)
}

#[inline]
fn hex_byte(hi: u8, lo: u8) -> Option<u8> {
    Some(hex_digit(hi)? << 4 | hex_digit(lo)?)
}

/// Parse `#rgb` or `#rrggbb`.
pub fn parse_hex_color(s: &str) -> Option<Rgba> {
    let bytes = s.trim().as_bytes();
    match bytes {
        [b'#', r, g, b] => {
            let (r, g, b) = (hex_digit(*r)?, hex_digit(*g)?, hex_digit(*b)?);
            Some(Rgba::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        [b'#', r1, r2, g1, g2, b1, b2] => Some(Rgba::rgb(
            hex_byte(*r1, *r2)?,
            hex_byte(*g1, *g2)?,
            hex_byte(*b1, *b2)?,
        )),
        _ => None,
    }
}

/// Phase header background: the phase colour fading to a darker shade.
/// Unparseable colours fall back to the accent.
pub fn phase_gradient(color: &str) -> String {
    let base = parse_hex_color(color).unwrap_or_else(|| {
        log::warn!("Invalid phase colour {:?}", color);
        Rgba::ACCENT
    });
    format!(
        "linear-gradient(135deg, {}, {})",
        base.to_hex(),
        base.shade(-20).to_hex()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_digits() {
        assert_eq!(hex_digit(b'0'), Some(0));
        assert_eq!(hex_digit(b'f'), Some(15));
        assert_eq!(hex_digit(b'F'), Some(15));
        assert_eq!(hex_digit(b'g'), None);
        assert_eq!(hex_digit(b'#'), None);
    }

    #[test]
    fn parse_long_and_short() {
        assert_eq!(parse_hex_color("#4CAF50"), Some(Rgba::rgb(0x4c, 0xaf, 0x50)));
        assert_eq!(parse_hex_color("#F80"), Some(Rgba::rgb(255, 136, 0)));
        assert_eq!(parse_hex_color("4CAF50"), None);
        assert_eq!(parse_hex_color("#4CAF5Z"), None);
        assert_eq!(parse_hex_color("red"), None);
    }

    #[test]
    fn shade_clamps() {
        let c = Rgba::rgb(10, 128, 250).shade(-20);
        assert_eq!(c, Rgba::rgb(0, 108, 230));
        assert_eq!(Rgba::rgb(250, 0, 0).shade(20), Rgba::rgb(255, 20, 20));
    }

    #[test]
    fn gradient_uses_darker_shade() {
        assert_eq!(
            phase_gradient("#4CAF50"),
            "linear-gradient(135deg, #4caf50, #389b3c)"
        );
        assert!(phase_gradient("nope").contains("#667eea"));
    }
}
