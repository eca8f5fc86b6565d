//! Bitmap text on the LCD
//!
//! Glyph cells are `size / 2` pixels wide and `size` pixels tall. Only printable
//! ASCII is rendered; anything else ends a string.

use crate::bus::{BusError, LcdBus};
use crate::color::Color;
use crate::font;
use crate::lcd::Lcd;
use embedded_hal::digital::OutputPin;

/// Largest glyph cell, 16 x 32
const MAX_CELL: usize = 16 * 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    F12,
    F16,
    F24,
    F32,
}

impl FontSize {
    pub fn from_px(px: u8) -> Option<Self> {
        match px {
            12 => Some(FontSize::F12),
            16 => Some(FontSize::F16),
            24 => Some(FontSize::F24),
            32 => Some(FontSize::F32),
            _ => None,
        }
    }

    pub const fn height(self) -> u16 {
        match self {
            FontSize::F12 => 12,
            FontSize::F16 => 16,
            FontSize::F24 => 24,
            FontSize::F32 => 32,
        }
    }

    pub const fn width(self) -> u16 {
        self.height() / 2
    }

    /// Bytes per glyph column.
    const fn column_bytes(self) -> usize {
        (self.height() as usize).div_ceil(8)
    }

    /// Glyph bitmap for a printable ASCII character.
    pub fn glyph(self, ch: char) -> Option<&'static [u8]> {
        if !(' '..='~').contains(&ch) {
            return None;
        }
        let idx = ch as usize - ' ' as usize;
        Some(match self {
            FontSize::F12 => &font::ASCII_12[idx],
            FontSize::F16 => &font::ASCII_16[idx],
            FontSize::F24 => &font::ASCII_24[idx],
            FontSize::F32 => &font::ASCII_32[idx],
        })
    }

    fn is_set(self, glyph: &[u8], col: u16, row: u16) -> bool {
        let byte = glyph[col as usize * self.column_bytes() + row as usize / 8];
        byte & (0x80 >> (row % 8)) != 0
    }
}

/// How glyph background pixels are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// Paint the whole cell, background white.
    Opaque,
    /// Only paint set pixels, leave the rest untouched.
    Overlay,
}

/// Leading-zero rendering for [`Lcd::show_xnum`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    Zeros,
    Spaces,
}

/// 10^n, saturating.
pub const fn pow10(n: u8) -> u64 {
    let mut result: u64 = 1;
    let mut i = 0;
    while i < n {
        result = result.saturating_mul(10);
        i += 1;
    }
    result
}

impl<B, RST, BL> Lcd<B, RST, BL>
where
    B: LcdBus,
    RST: OutputPin,
    BL: OutputPin,
{
    pub fn show_char(
        &mut self,
        x: u16,
        y: u16,
        ch: char,
        size: FontSize,
        mode: TextMode,
        color: Color,
    ) -> Result<(), BusError> {
        let (cw, ch_h) = (size.width(), size.height());
        if x as u32 + cw as u32 > self.width() as u32 || y as u32 + ch_h as u32 > self.height() as u32
        {
            return Ok(());
        }
        let Some(glyph) = size.glyph(ch) else {
            return Ok(());
        };

        match mode {
            TextMode::Opaque => {
                let mut cell = [Color::WHITE; MAX_CELL];
                for row in 0..ch_h {
                    for col in 0..cw {
                        if size.is_set(glyph, col, row) {
                            cell[(row * cw + col) as usize] = color;
                        }
                    }
                }
                let area = (cw * ch_h) as usize;
                self.fill_colors(x, y, x + cw - 1, y + ch_h - 1, &cell[..area])
            }
            TextMode::Overlay => {
                for col in 0..cw {
                    for row in 0..ch_h {
                        if size.is_set(glyph, col, row) {
                            self.draw_pixel(x + col, y + row, color)?;
                        }
                    }
                }
                Ok(())
            }
        }
    }

    /// Print `text` inside the box `[x, x + width) x [y, y + height)`, wrapping
    /// at the right edge and stopping at the bottom edge or the first
    /// non-printable character.
    #[allow(clippy::too_many_arguments)]
    pub fn show_string(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        size: FontSize,
        text: &str,
        color: Color,
    ) -> Result<(), BusError> {
        let (cw, ch_h) = (size.width() as u32, size.height() as u32);
        let right = x as u32 + width as u32;
        let bottom = y as u32 + height as u32;
        let (mut cx, mut cy) = (x as u32, y as u32);

        for ch in text.chars() {
            if !(' '..='~').contains(&ch) {
                break;
            }
            if cx + cw > right {
                cx = x as u32;
                cy += ch_h;
            }
            if cy + ch_h > bottom || cx + cw > right {
                break;
            }
            if cx > u16::MAX as u32 || cy > u16::MAX as u32 {
                break;
            }
            self.show_char(cx as u16, cy as u16, ch, size, TextMode::Opaque, color)?;
            cx += cw;
        }
        Ok(())
    }

    /// Full-width band across the middle of the panel, `text` centred on it.
    pub fn show_banner(
        &mut self,
        text: &str,
        size: FontSize,
        back: Color,
        color: Color,
    ) -> Result<(), BusError> {
        let (w, h) = (self.width(), self.height());
        let band = size.height().saturating_add(12).min(h);
        let top = (h - band) / 2;
        self.fill_rect(0, top, w.saturating_sub(1), top + band.saturating_sub(1), back)?;

        let text_w = (text.chars().count() as u16).saturating_mul(size.width()).min(w);
        let mut x = (w - text_w) / 2;
        let y = h.saturating_sub(size.height()) / 2;
        for ch in text.chars() {
            if x.saturating_add(size.width()) > w {
                break;
            }
            self.show_char(x, y, ch, size, TextMode::Overlay, color)?;
            x += size.width();
        }
        Ok(())
    }

    /// Fixed-width decimal, leading zeros shown as spaces.
    pub fn show_num(
        &mut self,
        x: u16,
        y: u16,
        num: u32,
        len: u8,
        size: FontSize,
        color: Color,
    ) -> Result<(), BusError> {
        self.show_xnum(x, y, num, len, size, Padding::Spaces, TextMode::Opaque, color)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn show_xnum(
        &mut self,
        x: u16,
        y: u16,
        num: u32,
        len: u8,
        size: FontSize,
        padding: Padding,
        mode: TextMode,
        color: Color,
    ) -> Result<(), BusError> {
        let mut leading = true;
        for t in 0..len {
            let digit = (num as u64 / pow10(len - t - 1)) % 10;
            let cx = x.saturating_add(size.width().saturating_mul(t as u16));
            if leading && t < len - 1 && digit == 0 {
                let pad = match padding {
                    Padding::Zeros => '0',
                    Padding::Spaces => ' ',
                };
                self.show_char(cx, y, pad, size, mode, color)?;
                continue;
            }
            leading = false;
            self.show_char(cx, y, (b'0' + digit as u8) as char, size, mode, color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcd::sim::test_lcd;

    const SIZES: [FontSize; 4] = [FontSize::F12, FontSize::F16, FontSize::F24, FontSize::F32];

    fn set_bits(size: FontSize, ch: char) -> usize {
        let glyph = size.glyph(ch).unwrap();
        let mut n = 0;
        for col in 0..size.width() {
            for row in 0..size.height() {
                if size.is_set(glyph, col, row) {
                    n += 1;
                }
            }
        }
        n
    }

    /// Number of pixels of `color` inside a logical cell.
    fn count_in_cell<P>(at: P, x: u16, y: u16, size: FontSize, color: Color) -> usize
    where
        P: Fn(u16, u16) -> Color,
    {
        let mut n = 0;
        for dy in 0..size.height() {
            for dx in 0..size.width() {
                if at(x + dx, y + dy) == color {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn glyph_tables_cover_printable_ascii() {
        for size in SIZES {
            assert_eq!(size.glyph(' ').unwrap().len(), size.column_bytes() * size.width() as usize);
            assert!(size.glyph('~').is_some());
            assert!(size.glyph('\n').is_none());
            assert_eq!(set_bits(size, ' '), 0);
            assert!(set_bits(size, 'A') > 0);
        }
        assert_eq!(FontSize::from_px(24), Some(FontSize::F24));
        assert_eq!(FontSize::from_px(13), None);
    }

    #[test]
    fn opaque_char_fills_whole_cell() {
        let mut lcd = test_lcd();
        lcd.clear(Color::BLACK).unwrap();
        lcd.show_char(10, 10, 'A', FontSize::F16, TextMode::Opaque, Color::RED).unwrap();

        let panel = lcd.panel();
        let red = count_in_cell(|x, y| panel.at(x, y), 10, 10, FontSize::F16, Color::RED);
        let white = count_in_cell(|x, y| panel.at(x, y), 10, 10, FontSize::F16, Color::WHITE);
        assert_eq!(red, set_bits(FontSize::F16, 'A'));
        assert_eq!(red + white, 8 * 16);
        assert_eq!(panel.windows.last(), Some(&(11, 36, 18, 51)));
        assert!(!panel.overrun);
    }

    #[test]
    fn overlay_char_only_touches_set_pixels() {
        let mut lcd = test_lcd();
        lcd.show_char(0, 0, ' ', FontSize::F12, TextMode::Overlay, Color::RED).unwrap();
        assert!(lcd.panel().touched.is_empty());

        lcd.show_char(0, 0, 'W', FontSize::F12, TextMode::Overlay, Color::RED).unwrap();
        assert_eq!(lcd.panel().touched.len(), set_bits(FontSize::F12, 'W'));
    }

    #[test]
    fn char_past_panel_edge_is_skipped() {
        let mut lcd = test_lcd();
        lcd.show_char(153, 0, 'A', FontSize::F16, TextMode::Opaque, Color::RED).unwrap();
        lcd.show_char(0, 65, 'A', FontSize::F16, TextMode::Opaque, Color::RED).unwrap();
        assert!(lcd.panel().touched.is_empty());

        lcd.show_char(152, 64, 'A', FontSize::F16, TextMode::Opaque, Color::RED).unwrap();
        assert_eq!(lcd.panel().touched.len(), 8 * 16);
    }

    #[test]
    fn string_stays_inside_its_box() {
        let text = "The quick brown fox jumps over the lazy dog 0123456789";
        for size in SIZES {
            let mut lcd = test_lcd();
            let (bx, by, bw, bh) = (7u16, 3u16, 61u16, 70u16);
            lcd.show_string(bx, by, bw, bh, size, text, Color::BLUE).unwrap();

            let touched = &lcd.panel().touched;
            assert!(!touched.is_empty(), "{:?} drew nothing", size);
            for &(x, y) in touched {
                let (lx, ly) = (x - 1, y - 26);
                assert!(lx >= bx && lx < bx + bw, "{:?}: x {} outside box", size, lx);
                assert!(ly >= by && ly < by + bh, "{:?}: y {} outside box", size, ly);
            }
        }
    }

    #[test]
    fn string_wraps_and_stops_at_control_char() {
        let mut lcd = test_lcd();
        // three 6-px cells per line, two lines
        lcd.show_string(0, 0, 20, 24, FontSize::F12, "abcdefgh\nij", Color::BLUE).unwrap();
        let origins: Vec<_> = lcd.panel().windows.iter().map(|w| (w.0 - 1, w.1 - 26)).collect();
        assert_eq!(origins, vec![(0, 0), (6, 0), (12, 0), (0, 12), (6, 12), (12, 12)]);

        let mut lcd = test_lcd();
        lcd.show_string(0, 0, 160, 80, FontSize::F12, "ab\ncd", Color::BLUE).unwrap();
        assert_eq!(lcd.panel().windows.len(), 2);

        let mut lcd = test_lcd();
        lcd.show_string(0, 0, 5, 80, FontSize::F12, "ab", Color::BLUE).unwrap();
        assert!(lcd.panel().windows.is_empty());
    }

    #[test]
    fn num_pads_with_spaces_but_keeps_last_digit() {
        let mut lcd = test_lcd();
        lcd.clear(Color::BLACK).unwrap();
        lcd.show_num(0, 0, 42, 4, FontSize::F12, Color::RED).unwrap();
        let panel = lcd.panel();
        let at = |x, y| panel.at(x, y);
        assert_eq!(count_in_cell(at, 0, 0, FontSize::F12, Color::RED), 0);
        assert_eq!(count_in_cell(at, 6, 0, FontSize::F12, Color::RED), 0);
        assert_eq!(count_in_cell(at, 12, 0, FontSize::F12, Color::RED), set_bits(FontSize::F12, '4'));
        assert_eq!(count_in_cell(at, 18, 0, FontSize::F12, Color::RED), set_bits(FontSize::F12, '2'));

        let mut lcd = test_lcd();
        lcd.show_num(0, 0, 0, 3, FontSize::F12, Color::RED).unwrap();
        let panel = lcd.panel();
        assert_eq!(
            count_in_cell(|x, y| panel.at(x, y), 12, 0, FontSize::F12, Color::RED),
            set_bits(FontSize::F12, '0')
        );
    }

    #[test]
    fn xnum_zero_padding_and_inner_zeros() {
        let mut lcd = test_lcd();
        lcd.clear(Color::BLACK).unwrap();
        lcd.show_xnum(0, 0, 105, 5, FontSize::F16, Padding::Zeros, TextMode::Overlay, Color::GREEN)
            .unwrap();
        let panel = lcd.panel();
        let zero = set_bits(FontSize::F16, '0');
        let cells: Vec<usize> = (0..5)
            .map(|i| count_in_cell(|x, y| panel.at(x, y), i * 8, 0, FontSize::F16, Color::GREEN))
            .collect();
        assert_eq!(cells, vec![zero, zero, set_bits(FontSize::F16, '1'), zero, set_bits(FontSize::F16, '5')]);
        // overlay leaves the background alone
        assert_eq!(count_in_cell(|x, y| panel.at(x, y), 0, 0, FontSize::F16, Color::WHITE), 0);
    }

    #[test]
    fn pow10_saturates() {
        assert_eq!(pow10(0), 1);
        assert_eq!(pow10(9), 1_000_000_000);
        assert_eq!(pow10(25), u64::MAX);
    }

    #[test]
    fn banner_is_centred_on_the_panel() {
        let mut lcd = test_lcd();
        lcd.clear(Color::BLACK).unwrap();
        lcd.show_banner("SD", FontSize::F16, Color::RED, Color::WHITE).unwrap();

        let panel = lcd.panel();
        assert_eq!(panel.at(0, 26), Color::RED);
        assert_eq!(panel.at(159, 53), Color::RED);
        assert_eq!(panel.at(0, 25), Color::BLACK);
        assert_eq!(panel.at(0, 54), Color::BLACK);
        let at = |x, y| panel.at(x, y);
        assert_eq!(count_in_cell(at, 72, 32, FontSize::F16, Color::WHITE), set_bits(FontSize::F16, 'S'));
        assert_eq!(count_in_cell(at, 80, 32, FontSize::F16, Color::WHITE), set_bits(FontSize::F16, 'D'));
        assert!(!panel.overrun);
    }

    #[test]
    fn banner_larger_than_the_panel_is_clipped() {
        let mut lcd = test_lcd();
        lcd.clear(Color::BLACK).unwrap();
        lcd.show_banner("WAY TOO LONG FOR THIS PANEL", FontSize::F32, Color::RED, Color::WHITE)
            .unwrap();
        let panel = lcd.panel();
        // 44-row band, ten 16x32 glyphs from the left edge
        assert_eq!(panel.at(0, 18), Color::RED);
        assert_eq!(panel.at(159, 61), Color::RED);
        assert_eq!(panel.at(0, 17), Color::BLACK);
        assert!(!panel.overrun);
    }
}
