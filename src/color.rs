//! RGB565 colour values as sent to the panel

/// A packed 5-6-5 colour. Goes over the wire high byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color(pub u16);

impl Color {
    pub const WHITE: Color = Color(0xFFFF);
    pub const BLACK: Color = Color(0x0000);
    pub const BLUE: Color = Color(0x001F);
    pub const BRED: Color = Color(0xF81F);
    pub const GRED: Color = Color(0xFFE0);
    pub const GBLUE: Color = Color(0x07FF);
    pub const RED: Color = Color(0xF800);
    pub const MAGENTA: Color = Color(0xF81F);
    pub const GREEN: Color = Color(0x07E0);
    pub const CYAN: Color = Color(0x7FFF);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const BROWN: Color = Color(0xBC40);
    pub const BRRED: Color = Color(0xFC07);
    pub const GRAY: Color = Color(0x8430);
    pub const DARKBLUE: Color = Color(0x01CF);
    pub const LIGHTBLUE: Color = Color(0x7D7C);
    pub const GRAYBLUE: Color = Color(0x5458);
    pub const LIGHTGREEN: Color = Color(0x841F);
    pub const LGRAY: Color = Color(0xC618);
    pub const LGRAYBLUE: Color = Color(0xA651);
    pub const LBBLUE: Color = Color(0x2B12);

    /// Pack 8-bit channels, dropping the low bits of each.
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Color((((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3))
    }

    /// Big-endian byte pair for the controller.
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Channels widened back to 8 bits (low bits replicated).
    pub const fn to_rgb888(self) -> (u8, u8, u8) {
        let r = ((self.0 >> 11) & 0x1F) as u8;
        let g = ((self.0 >> 5) & 0x3F) as u8;
        let b = (self.0 & 0x1F) as u8;
        ((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2))
    }
}

impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(c: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::IntoStorage;
        Color(c.into_storage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_channels_high_bits_first() {
        assert_eq!(Color::from_rgb888(0xFF, 0, 0), Color::RED);
        assert_eq!(Color::from_rgb888(0, 0xFF, 0), Color::GREEN);
        assert_eq!(Color::from_rgb888(0, 0, 0xFF), Color::BLUE);
        assert_eq!(Color::from_rgb888(0x12, 0x34, 0x56), Color(0x11AA));
        assert_eq!(Color(0xF81F).to_be_bytes(), [0xF8, 0x1F]);
    }

    #[test]
    fn widening_keeps_extremes() {
        assert_eq!(Color::WHITE.to_rgb888(), (0xFF, 0xFF, 0xFF));
        assert_eq!(Color::BLACK.to_rgb888(), (0, 0, 0));
    }
}
