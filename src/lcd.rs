//! ST7735 0.96" LCD driver
//!
//! The [`Lcd`] context owns the bus, the reset and backlight pins and the cached
//! display geometry. All drawing goes through a window command followed by one or
//! more pixel bursts; coordinates outside the panel are dropped silently.

use crate::bus::{BusError, LcdBus};
use crate::color::Color;
use crate::picture::PictureTarget;
use crate::ConfigError;
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{Dimensions, OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_graphics_core::primitives::Rectangle;
use embedded_graphics_core::Pixel;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{debug, info};

/// Size of the pixel burst buffer in bytes
pub const BURST_LEN: usize = 2560;

const CMD_SET_X: u8 = 0x2A;
const CMD_SET_Y: u8 = 0x2B;
const CMD_WRITE_RAM: u8 = 0x2C;
const CMD_MADCTL: u8 = 0x36;
const CMD_DISPLAY_OFF: u8 = 0x28;
const CMD_DISPLAY_ON: u8 = 0x29;

const MADCTL_MV: u8 = 0x20;
const MADCTL_BGR: u8 = 0x08;

struct InitCmd {
    cmd: u8,
    data: &'static [u8],
    /// wait 120 ms after sending
    delay: bool,
}

const INIT_TABLE: &[InitCmd] = &[
    InitCmd { cmd: 0x11, data: &[], delay: true },
    InitCmd { cmd: 0x21, data: &[], delay: true },
    InitCmd { cmd: 0xB1, data: &[0x05, 0x3A, 0x3A], delay: false },
    InitCmd { cmd: 0xB2, data: &[0x05, 0x3A, 0x3A], delay: false },
    InitCmd { cmd: 0xB3, data: &[0x05, 0x3A, 0x3A, 0x05, 0x3A, 0x3A], delay: false },
    InitCmd { cmd: 0xB4, data: &[0x03], delay: false },
    InitCmd { cmd: 0xC0, data: &[0x62, 0x02, 0x04], delay: false },
    InitCmd { cmd: 0xC1, data: &[0xC0], delay: false },
    InitCmd { cmd: 0xC2, data: &[0x0D, 0x00], delay: false },
    InitCmd { cmd: 0xC3, data: &[0x8D, 0x6A], delay: false },
    InitCmd { cmd: 0xC4, data: &[0x8D, 0xEE], delay: false },
    InitCmd { cmd: 0xC5, data: &[0x0E], delay: false },
    InitCmd {
        cmd: 0xE0,
        data: &[
            0x10, 0x0E, 0x02, 0x03, 0x0E, 0x07, 0x02, 0x07, 0x0A, 0x12, 0x27, 0x37, 0x00, 0x0D,
            0x0E, 0x10,
        ],
        delay: false,
    },
    InitCmd {
        cmd: 0xE1,
        data: &[
            0x10, 0x0E, 0x03, 0x03, 0x0F, 0x06, 0x02, 0x08, 0x0A, 0x13, 0x26, 0x36, 0x00, 0x0D,
            0x0E, 0x10,
        ],
        delay: false,
    },
    InitCmd { cmd: 0x3A, data: &[0x05], delay: false },
    InitCmd { cmd: CMD_MADCTL, data: &[0xA8], delay: false },
    InitCmd { cmd: CMD_DISPLAY_ON, data: &[], delay: true },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// GRAM scan direction, named by horizontal then vertical order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDir {
    L2rU2d,
    L2rD2u,
    R2lU2d,
    R2lD2u,
    U2dL2r,
    U2dR2l,
    D2uL2r,
    D2uR2l,
}

impl ScanDir {
    /// MADCTL bits without the colour-order flag.
    pub const fn madctl(self) -> u8 {
        match self {
            ScanDir::L2rU2d => 0x00,
            ScanDir::L2rD2u => 0x80,
            ScanDir::R2lU2d => 0x40,
            ScanDir::R2lD2u => 0xC0,
            ScanDir::U2dL2r => 0x20,
            ScanDir::U2dR2l => 0x60,
            ScanDir::D2uL2r => 0xA0,
            ScanDir::D2uR2l => 0xE0,
        }
    }

    /// Whether the controller exchanges rows and columns in this direction.
    pub const fn swaps_axes(self) -> bool {
        self.madctl() & MADCTL_MV != 0
    }
}

/// Panel geometry, checked once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcdConfig {
    width: u16,
    height: u16,
    landscape_offset: (u16, u16),
    portrait_offset: (u16, u16),
    orientation: Orientation,
    bgr: bool,
}

impl LcdConfig {
    /// Controller GRAM is 162x132 at most.
    const GRAM_SIDE: u16 = 162;

    /// `width` x `height` is the native landscape resolution.
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 || width > Self::GRAM_SIDE || height > Self::GRAM_SIDE {
            return Err(ConfigError::Geometry);
        }
        Ok(Self {
            width,
            height,
            landscape_offset: (0, 0),
            portrait_offset: (0, 0),
            orientation: Orientation::Landscape,
            bgr: true,
        })
    }

    /// Column/row offsets added to every window, per orientation.
    pub fn with_offsets(
        mut self,
        landscape: (u16, u16),
        portrait: (u16, u16),
    ) -> Result<Self, ConfigError> {
        let fits = |(dx, dy): (u16, u16), w: u16, h: u16| {
            dx + w <= Self::GRAM_SIDE && dy + h <= Self::GRAM_SIDE
        };
        if !fits(landscape, self.width, self.height) || !fits(portrait, self.height, self.width) {
            return Err(ConfigError::Geometry);
        }
        self.landscape_offset = landscape;
        self.portrait_offset = portrait;
        Ok(self)
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_bgr(mut self, bgr: bool) -> Self {
        self.bgr = bgr;
        self
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn dims(&self, orientation: Orientation) -> (u16, u16) {
        let long = self.width.max(self.height);
        let short = self.width.min(self.height);
        match orientation {
            Orientation::Landscape => (long, short),
            Orientation::Portrait => (short, long),
        }
    }

    fn offset(&self, orientation: Orientation) -> (u16, u16) {
        match orientation {
            Orientation::Landscape => self.landscape_offset,
            Orientation::Portrait => self.portrait_offset,
        }
    }
}

impl Default for LcdConfig {
    /// The board's 160x80 panel.
    fn default() -> Self {
        Self {
            width: 160,
            height: 80,
            landscape_offset: (1, 26),
            portrait_offset: (26, 1),
            orientation: Orientation::Landscape,
            bgr: true,
        }
    }
}

/// Cached controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    pub width: u16,
    pub height: u16,
    pub dir: Orientation,
    pub wramcmd: u8,
    pub setxcmd: u8,
    pub setycmd: u8,
}

pub struct Lcd<B, RST, BL> {
    bus: B,
    rst: RST,
    bl: BL,
    config: LcdConfig,
    state: DisplayState,
    burst: [u8; BURST_LEN],
}

impl<B, RST, BL> Lcd<B, RST, BL>
where
    B: LcdBus,
    RST: OutputPin,
    BL: OutputPin,
{
    pub fn new(bus: B, rst: RST, bl: BL, config: LcdConfig) -> Self {
        let (width, height) = config.dims(config.orientation);
        Self {
            bus,
            rst,
            bl,
            config,
            state: DisplayState {
                width,
                height,
                dir: config.orientation,
                wramcmd: CMD_WRITE_RAM,
                setxcmd: CMD_SET_X,
                setycmd: CMD_SET_Y,
            },
            burst: [0; BURST_LEN],
        }
    }

    /// Hardware reset, controller set-up, then a white screen with the backlight on.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), BusError> {
        self.rst.set_low().map_err(|_| BusError::Pin)?;
        delay.delay_ms(200);
        self.rst.set_high().map_err(|_| BusError::Pin)?;
        delay.delay_ms(200);

        for entry in INIT_TABLE {
            self.bus.write_command_with(entry.cmd, entry.data)?;
            if entry.delay {
                delay.delay_ms(120);
            }
        }

        self.display_dir(self.config.orientation)?;
        self.clear(Color::WHITE)?;
        self.backlight(true)?;
        info!(
            "[LCD] ready {}x{} {:?}",
            self.state.width, self.state.height, self.state.dir
        );
        Ok(())
    }

    pub fn display_on(&mut self) -> Result<(), BusError> {
        self.bus.write_command(CMD_DISPLAY_ON)
    }

    pub fn display_off(&mut self) -> Result<(), BusError> {
        self.bus.write_command(CMD_DISPLAY_OFF)
    }

    pub fn backlight(&mut self, on: bool) -> Result<(), BusError> {
        if on {
            self.bl.set_high().map_err(|_| BusError::Pin)
        } else {
            self.bl.set_low().map_err(|_| BusError::Pin)
        }
    }

    pub fn width(&self) -> u16 {
        self.state.width
    }

    pub fn height(&self) -> u16 {
        self.state.height
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn release(self) -> (B, RST, BL) {
        (self.bus, self.rst, self.bl)
    }

    /// Address an inclusive rectangle and open GRAM for writing.
    pub fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), BusError> {
        let (dx, dy) = self.config.offset(self.state.dir);
        let (x0, x1) = (x0.saturating_add(dx), x1.saturating_add(dx));
        let (y0, y1) = (y0.saturating_add(dy), y1.saturating_add(dy));

        self.bus.write_command(self.state.setxcmd)?;
        self.bus.write_data(&[(x0 >> 8) as u8, x0 as u8, (x1 >> 8) as u8, x1 as u8])?;
        self.bus.write_command(self.state.setycmd)?;
        self.bus.write_data(&[(y0 >> 8) as u8, y0 as u8, (y1 >> 8) as u8, y1 as u8])?;
        self.bus.write_command(self.state.wramcmd)
    }

    /// Stream `count` pixels of one colour into the current window.
    fn stream_color(&mut self, color: Color, mut count: usize) -> Result<(), BusError> {
        let [hi, lo] = color.to_be_bytes();
        let pixels = count.min(BURST_LEN / 2);
        for px in self.burst[..pixels * 2].chunks_exact_mut(2) {
            px[0] = hi;
            px[1] = lo;
        }
        while count > 0 {
            let n = count.min(BURST_LEN / 2);
            self.bus.write_data(&self.burst[..n * 2])?;
            count -= n;
        }
        Ok(())
    }

    pub fn clear(&mut self, color: Color) -> Result<(), BusError> {
        let (w, h) = (self.state.width, self.state.height);
        self.set_window(0, 0, w - 1, h - 1)?;
        self.stream_color(color, w as usize * h as usize)
    }

    /// Fill an inclusive rectangle, clamped to the panel.
    pub fn fill_rect(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: Color,
    ) -> Result<(), BusError> {
        let Some((x0, y0, x1, y1)) = self.clamp(x0, y0, x1, y1) else {
            return Ok(());
        };
        self.set_window(x0, y0, x1, y1)?;
        let area = (x1 - x0 + 1) as usize * (y1 - y0 + 1) as usize;
        self.stream_color(color, area)
    }

    /// Write per-pixel colours, row-major, into an inclusive rectangle that
    /// must lie on the panel. Extra colours are ignored.
    pub fn fill_colors(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        colors: &[Color],
    ) -> Result<(), BusError> {
        if x0 > x1 || y0 > y1 || x1 >= self.state.width || y1 >= self.state.height {
            return Ok(());
        }
        let area = (x1 - x0 + 1) as usize * (y1 - y0 + 1) as usize;
        let colors = &colors[..area.min(colors.len())];
        if colors.is_empty() {
            return Ok(());
        }
        self.set_window(x0, y0, x1, y1)?;
        for chunk in colors.chunks(BURST_LEN / 2) {
            for (dst, c) in self.burst.chunks_exact_mut(2).zip(chunk) {
                dst.copy_from_slice(&c.to_be_bytes());
            }
            self.bus.write_data(&self.burst[..chunk.len() * 2])?;
        }
        Ok(())
    }

    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Color) -> Result<(), BusError> {
        if x >= self.state.width || y >= self.state.height {
            return Ok(());
        }
        self.set_window(x, y, x, y)?;
        self.bus.write_data(&color.to_be_bytes())
    }

    fn draw_point(&mut self, x: i32, y: i32, color: Color) -> Result<(), BusError> {
        if x < 0 || y < 0 || x > u16::MAX as i32 || y > u16::MAX as i32 {
            return Ok(());
        }
        self.draw_pixel(x as u16, y as u16, color)
    }

    pub fn draw_hline(&mut self, x: u16, y: u16, len: u16, color: Color) -> Result<(), BusError> {
        if len == 0 {
            return Ok(());
        }
        self.fill_rect(x, y, x.saturating_add(len - 1), y, color)
    }

    /// One-pixel outline of an inclusive rectangle.
    pub fn draw_rectangle(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: Color,
    ) -> Result<(), BusError> {
        self.draw_line(x0, y0, x1, y0, color)?;
        self.draw_line(x0, y0, x0, y1, color)?;
        self.draw_line(x0, y1, x1, y1, color)?;
        self.draw_line(x1, y0, x1, y1, color)
    }

    /// Bresenham line, both end points included.
    pub fn draw_line(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Color,
    ) -> Result<(), BusError> {
        let (mut row, mut col) = (x1 as i32, y1 as i32);
        let delta_x = x2 as i32 - row;
        let delta_y = y2 as i32 - col;
        let (incx, incy) = (delta_x.signum(), delta_y.signum());
        let (delta_x, delta_y) = (delta_x.abs(), delta_y.abs());
        let distance = delta_x.max(delta_y);

        let (mut xerr, mut yerr) = (0, 0);
        let mut last = None;
        // the first step never moves, so distance + 2 rounds yield distance + 1 pixels
        for _ in 0..=distance + 1 {
            if last != Some((row, col)) {
                self.draw_point(row, col, color)?;
                last = Some((row, col));
            }
            xerr += delta_x;
            yerr += delta_y;
            if xerr > distance {
                xerr -= distance;
                row += incx;
            }
            if yerr > distance {
                yerr -= distance;
                col += incy;
            }
        }
        Ok(())
    }

    /// Midpoint circle outline of radius `r` around (x0, y0).
    pub fn draw_circle(&mut self, x0: u16, y0: u16, r: u16, color: Color) -> Result<(), BusError> {
        let (cx, cy) = (x0 as i32, y0 as i32);
        let mut a = 0i32;
        let mut b = r as i32;
        let mut di = 3 - 2 * b;

        while a <= b {
            for (px, py) in [
                (cx + a, cy - b),
                (cx + b, cy - a),
                (cx + b, cy + a),
                (cx + a, cy + b),
                (cx - a, cy + b),
                (cx - b, cy + a),
                (cx - b, cy - a),
                (cx - a, cy - b),
            ] {
                self.draw_point(px, py, color)?;
            }
            a += 1;
            if di < 0 {
                di += 4 * a + 6;
            } else {
                di += 10 + 4 * (a - b);
                b -= 1;
            }
        }
        Ok(())
    }

    /// Program the GRAM scan direction, keeping the cached geometry in step.
    pub fn scan_direction(&mut self, dir: ScanDir) -> Result<(), BusError> {
        let mut regval = dir.madctl();
        if self.config.bgr {
            regval |= MADCTL_BGR;
        }

        let DisplayState { width, height, .. } = self.state;
        if (dir.swaps_axes() && width < height) || (!dir.swaps_axes() && width > height) {
            self.state.width = height;
            self.state.height = width;
        }
        debug!("[LCD] scan {:?} madctl=0x{:02X}", dir, regval);

        self.bus.write_command_with(CMD_MADCTL, &[regval])?;
        let (w, h) = (self.state.width, self.state.height);
        self.set_window(0, 0, w - 1, h - 1)
    }

    pub fn display_dir(&mut self, dir: Orientation) -> Result<(), BusError> {
        let (width, height) = self.config.dims(dir);
        self.state.dir = dir;
        self.state.width = width;
        self.state.height = height;
        match dir {
            Orientation::Portrait => self.scan_direction(ScanDir::L2rU2d),
            Orientation::Landscape => self.scan_direction(ScanDir::D2uL2r),
        }
    }

    fn clamp(&self, x0: u16, y0: u16, x1: u16, y1: u16) -> Option<(u16, u16, u16, u16)> {
        let (w, h) = (self.state.width, self.state.height);
        if x0 > x1 || y0 > y1 || x0 >= w || y0 >= h {
            return None;
        }
        Some((x0, y0, x1.min(w - 1), y1.min(h - 1)))
    }
}

impl<B, RST, BL> PictureTarget for Lcd<B, RST, BL>
where
    B: LcdBus,
    RST: OutputPin,
    BL: OutputPin,
{
    fn size(&self) -> (u16, u16) {
        (self.state.width, self.state.height)
    }

    fn fill_row(&mut self, x: u16, y: u16, colors: &[Color]) -> Result<(), BusError> {
        if x >= self.state.width || y >= self.state.height {
            return Ok(());
        }
        let visible = colors.len().min((self.state.width - x) as usize);
        let mut x = x;
        for piece in colors[..visible].chunks(BURST_LEN / 2) {
            let x1 = x + piece.len() as u16 - 1;
            self.fill_colors(x, y, x1, y, piece)?;
            x = x1 + 1;
        }
        Ok(())
    }
}

impl<B, RST, BL> OriginDimensions for Lcd<B, RST, BL> {
    fn size(&self) -> Size {
        Size::new(self.state.width as u32, self.state.height as u32)
    }
}

impl<B, RST, BL> DrawTarget for Lcd<B, RST, BL>
where
    B: LcdBus,
    RST: OutputPin,
    BL: OutputPin,
{
    type Color = Rgb565;
    type Error = BusError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.draw_point(point.x, point.y, color.into())?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if let Some(bottom_right) = area.bottom_right() {
            self.fill_rect(
                area.top_left.x as u16,
                area.top_left.y as u16,
                bottom_right.x as u16,
                bottom_right.y as u16,
                color.into(),
            )?;
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        Lcd::clear(self, color.into())
    }
}

#[cfg(test)]
pub(crate) mod sim {
    //! Panel simulator: interprets CASET/RASET/RAMWR into a GRAM image.

    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::convert::Infallible;

    pub const SIDE: usize = 256;

    pub struct Panel {
        pub gram: Vec<u16>,
        pub commands: Vec<u8>,
        pub windows: Vec<(u16, u16, u16, u16)>,
        /// every GRAM cell written, in order
        pub touched: Vec<(u16, u16)>,
        pub bursts: usize,
        pub overrun: bool,
        pub madctl: Option<u8>,
        cmd: u8,
        params: Vec<u8>,
        window: (u16, u16, u16, u16),
        cursor: (u16, u16),
        remaining: usize,
        pending: Option<u8>,
    }

    impl Panel {
        pub fn new() -> Self {
            Self {
                gram: vec![0; SIDE * SIDE],
                commands: Vec::new(),
                windows: Vec::new(),
                touched: Vec::new(),
                bursts: 0,
                overrun: false,
                madctl: None,
                cmd: 0,
                params: Vec::new(),
                window: (0, 0, 0, 0),
                cursor: (0, 0),
                remaining: 0,
                pending: None,
            }
        }

        pub fn raw(&self, x: u16, y: u16) -> Color {
            Color(self.gram[y as usize * SIDE + x as usize])
        }

        /// Logical landscape pixel with the board's default offsets.
        pub fn at(&self, x: u16, y: u16) -> Color {
            self.raw(x + 1, y + 26)
        }

        fn put(&mut self, value: u16) {
            if self.remaining == 0 {
                self.overrun = true;
                return;
            }
            let (x, y) = self.cursor;
            self.gram[y as usize * SIDE + x as usize] = value;
            self.touched.push((x, y));
            self.remaining -= 1;
            let (x0, _, x1, _) = self.window;
            self.cursor = if x >= x1 { (x0, y + 1) } else { (x + 1, y) };
        }
    }

    impl LcdBus for Panel {
        fn write_command(&mut self, cmd: u8) -> Result<(), BusError> {
            self.commands.push(cmd);
            self.cmd = cmd;
            self.params.clear();
            self.pending = None;
            if cmd == CMD_WRITE_RAM {
                let (x0, y0, x1, y1) = self.window;
                self.windows.push(self.window);
                self.cursor = (x0, y0);
                self.remaining = (x1 - x0 + 1) as usize * (y1 - y0 + 1) as usize;
            }
            Ok(())
        }

        fn write_data(&mut self, data: &[u8]) -> Result<(), BusError> {
            match self.cmd {
                CMD_SET_X | CMD_SET_Y => {
                    self.params.extend_from_slice(data);
                    if self.params.len() >= 4 {
                        let p = &self.params;
                        let s = u16::from_be_bytes([p[0], p[1]]);
                        let e = u16::from_be_bytes([p[2], p[3]]);
                        if self.cmd == CMD_SET_X {
                            self.window.0 = s;
                            self.window.2 = e;
                        } else {
                            self.window.1 = s;
                            self.window.3 = e;
                        }
                    }
                }
                CMD_WRITE_RAM => {
                    self.bursts += 1;
                    for &b in data {
                        match self.pending.take() {
                            Some(hi) => self.put(u16::from_be_bytes([hi, b])),
                            None => self.pending = Some(b),
                        }
                    }
                }
                CMD_MADCTL => self.madctl = data.first().copied(),
                _ => {}
            }
            Ok(())
        }

        fn transfer_byte(&mut self, out: u8) -> Result<u8, BusError> {
            Ok(out)
        }
    }

    pub struct NoPin;

    impl embedded_hal::digital::ErrorType for NoPin {
        type Error = Infallible;
    }

    impl OutputPin for NoPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    pub struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    /// Landscape panel in its post-init state, history cleared.
    pub fn test_lcd() -> Lcd<Panel, NoPin, NoPin> {
        let mut lcd = Lcd::new(Panel::new(), NoPin, NoPin, LcdConfig::default());
        let _ = lcd.display_dir(Orientation::Landscape);
        lcd.bus.commands.clear();
        lcd.bus.windows.clear();
        lcd.bus.touched.clear();
        lcd.bus.bursts = 0;
        lcd
    }

    impl<RST, BL> Lcd<Panel, RST, BL> {
        pub fn panel(&self) -> &Panel {
            &self.bus
        }

        pub fn panel_mut(&mut self) -> &mut Panel {
            &mut self.bus
        }
    }
}

#[cfg(test)]
mod tests {
    use super::sim::{test_lcd, NoDelay, NoPin, Panel};
    use super::*;
    use crate::bus::mock::{MockBus, Op};
    use embedded_graphics_core::geometry::Point;

    #[test]
    fn init_sends_table_then_landscape_and_white() {
        let mut lcd = Lcd::new(MockBus::new(), NoPin, NoPin, LcdConfig::default());
        lcd.init(&mut NoDelay).unwrap();
        let (bus, _, _) = lcd.release();

        let cmds = bus.commands();
        assert_eq!(&cmds[..3], &[0x11, 0x21, 0xB1]);
        assert!(cmds.contains(&0x29));
        assert!(bus.ops.contains(&Op::Data(vec![0x05])));
        // display_dir(Landscape): MADCTL 0xA8, then full window
        let pos = cmds.iter().rposition(|&c| c == 0x36).unwrap();
        assert_eq!(bus.ops.iter().filter(|op| **op == Op::Data(vec![0xA8])).count(), 2);
        assert_eq!(&cmds[pos + 1..pos + 4], &[0x2A, 0x2B, 0x2C]);
        // clear(WHITE): 160*80*2 bytes in ten full bursts
        let bursts = bus
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Data(d) if d.len() == BURST_LEN && d.iter().all(|&b| b == 0xFF)))
            .count();
        assert_eq!(bursts, 10);
    }

    #[test]
    fn set_window_opcodes_match_in_both_orientations() {
        let mut lcd = test_lcd();
        lcd.set_window(0, 0, 9, 9).unwrap();
        let landscape = lcd.panel().commands.clone();
        assert_eq!(lcd.panel().windows.last(), Some(&(1, 26, 10, 35)));

        lcd.display_dir(Orientation::Portrait).unwrap();
        lcd.panel_mut().commands.clear();
        lcd.set_window(0, 0, 9, 9).unwrap();
        assert_eq!(lcd.panel().commands, landscape);
        assert_eq!(lcd.panel().windows.last(), Some(&(26, 1, 35, 10)));
    }

    #[test]
    fn window_at_the_edge_of_the_address_range_clamps() {
        let mut lcd = test_lcd();
        lcd.set_window(u16::MAX - 20, u16::MAX - 3, u16::MAX, u16::MAX).unwrap();
        assert_eq!(
            lcd.panel().windows.last(),
            Some(&(u16::MAX - 19, u16::MAX, u16::MAX, u16::MAX))
        );
    }

    #[test]
    fn clear_is_idempotent() {
        let mut lcd = test_lcd();
        lcd.clear(Color::RED).unwrap();
        let once = lcd.panel().gram.clone();
        lcd.clear(Color::RED).unwrap();
        assert_eq!(lcd.panel().gram, once);
        assert_eq!(lcd.panel().at(0, 0), Color::RED);
        assert_eq!(lcd.panel().at(159, 79), Color::RED);
        assert_eq!(lcd.panel().raw(0, 0), Color(0));
        assert!(!lcd.panel().overrun);
    }

    #[test]
    fn fill_rect_clamps_to_panel() {
        let mut lcd = test_lcd();
        lcd.fill_rect(150, 70, 400, 400, Color::BLUE).unwrap();
        assert_eq!(lcd.panel().touched.len(), 10 * 10);
        assert_eq!(lcd.panel().at(159, 79), Color::BLUE);

        lcd.panel_mut().touched.clear();
        lcd.fill_rect(10, 10, 5, 20, Color::BLUE).unwrap();
        lcd.fill_rect(200, 0, 210, 5, Color::BLUE).unwrap();
        assert!(lcd.panel().touched.is_empty());
        assert!(!lcd.panel().overrun);
    }

    #[test]
    fn draw_pixel_off_panel_is_noop() {
        let mut lcd = test_lcd();
        lcd.draw_pixel(160, 0, Color::RED).unwrap();
        lcd.draw_pixel(0, 80, Color::RED).unwrap();
        assert!(lcd.panel().commands.is_empty());
        lcd.draw_pixel(3, 4, Color::RED).unwrap();
        assert_eq!(lcd.panel().at(3, 4), Color::RED);
    }

    fn logical_touched(panel: &Panel) -> Vec<(u16, u16)> {
        panel.touched.iter().map(|&(x, y)| (x - 1, y - 26)).collect()
    }

    #[test]
    fn line_steps_on_strict_overflow() {
        let mut lcd = test_lcd();
        lcd.draw_line(0, 0, 4, 2, Color::BLACK).unwrap();
        assert_eq!(
            logical_touched(lcd.panel()),
            vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]
        );

        lcd.panel_mut().touched.clear();
        lcd.draw_line(5, 5, 5, 5, Color::BLACK).unwrap();
        assert_eq!(logical_touched(lcd.panel()), vec![(5, 5)]);

        lcd.panel_mut().touched.clear();
        lcd.draw_line(3, 3, 0, 0, Color::BLACK).unwrap();
        assert_eq!(logical_touched(lcd.panel()), vec![(3, 3), (2, 2), (1, 1), (0, 0)]);
    }

    #[test]
    fn circle_is_symmetric() {
        let mut lcd = test_lcd();
        lcd.draw_circle(40, 40, 10, Color::GREEN).unwrap();
        let panel = lcd.panel();
        for &(x, y) in &logical_touched(panel) {
            let (dx, dy) = (x as i32 - 40, y as i32 - 40);
            for (mx, my) in [(-dx, dy), (dx, -dy), (dy, dx)] {
                assert_eq!(panel.at((40 + mx) as u16, (40 + my) as u16), Color::GREEN);
            }
            let d2 = dx * dx + dy * dy;
            assert!((81..=121).contains(&d2), "({x},{y}) too far from the radius");
        }
        assert_eq!(panel.at(40, 30), Color::GREEN);
        assert_eq!(panel.at(50, 40), Color::GREEN);
        assert_eq!(panel.at(40, 40), Color(0));
    }

    #[test]
    fn circle_near_edge_skips_off_panel_points() {
        let mut lcd = test_lcd();
        lcd.draw_circle(2, 2, 5, Color::GREEN).unwrap();
        assert_eq!(lcd.panel().at(7, 2), Color::GREEN);
        assert!(!lcd.panel().overrun);
    }

    #[test]
    fn scan_direction_flip_swaps_once() {
        let mut lcd = test_lcd();
        assert_eq!((lcd.width(), lcd.height()), (160, 80));

        lcd.scan_direction(ScanDir::L2rU2d).unwrap();
        assert_eq!((lcd.width(), lcd.height()), (80, 160));
        assert_eq!(lcd.panel().madctl, Some(0x08));

        lcd.scan_direction(ScanDir::L2rU2d).unwrap();
        assert_eq!((lcd.width(), lcd.height()), (80, 160));

        lcd.scan_direction(ScanDir::U2dR2l).unwrap();
        assert_eq!((lcd.width(), lcd.height()), (160, 80));
        assert_eq!(lcd.panel().madctl, Some(0x68));
        assert_eq!(lcd.panel().windows.last(), Some(&(1, 26, 160, 105)));
    }

    #[test]
    fn display_dir_sets_geometry() {
        let mut lcd = test_lcd();
        lcd.display_dir(Orientation::Portrait).unwrap();
        assert_eq!(lcd.state().dir, Orientation::Portrait);
        assert_eq!((lcd.width(), lcd.height()), (80, 160));
        assert_eq!(lcd.panel().madctl, Some(0x08));

        lcd.display_dir(Orientation::Landscape).unwrap();
        assert_eq!((lcd.width(), lcd.height()), (160, 80));
        assert_eq!(lcd.panel().madctl, Some(0xA8));
    }

    #[test]
    fn fill_row_clips_at_right_edge() {
        let mut lcd = test_lcd();
        let row = [Color::CYAN; 20];
        lcd.fill_row(150, 3, &row).unwrap();
        assert_eq!(lcd.panel().touched.len(), 10);
        assert_eq!(lcd.panel().at(159, 3), Color::CYAN);
        assert!(!lcd.panel().overrun);
    }

    #[test]
    fn draw_target_renders_pixels_and_fills() {
        let mut lcd = test_lcd();
        DrawTarget::draw_iter(
            &mut lcd,
            [
                Pixel(Point::new(1, 1), Rgb565::new(31, 0, 0)),
                Pixel(Point::new(-1, 1), Rgb565::new(31, 0, 0)),
            ],
        )
        .unwrap();
        assert_eq!(lcd.panel().at(1, 1), Color::RED);
        assert_eq!(lcd.panel().touched.len(), 1);

        lcd.fill_solid(
            &Rectangle::new(Point::new(155, 75), Size::new(20, 20)),
            Rgb565::new(0, 63, 0),
        )
        .unwrap();
        assert_eq!(lcd.panel().at(159, 79), Color::GREEN);
        assert_eq!(lcd.panel().touched.len(), 1 + 25);
    }

    #[test]
    fn config_rejects_bad_geometry() {
        assert_eq!(LcdConfig::new(0, 80), Err(ConfigError::Geometry));
        assert_eq!(LcdConfig::new(200, 80), Err(ConfigError::Geometry));
        assert_eq!(
            LcdConfig::new(160, 80).unwrap().with_offsets((10, 26), (26, 1)),
            Err(ConfigError::Geometry)
        );
        let cfg = LcdConfig::new(160, 80)
            .unwrap()
            .with_offsets((1, 26), (26, 1))
            .unwrap();
        assert_eq!(cfg, LcdConfig::default());
    }

    #[test]
    fn bus_failure_propagates() {
        let mut bus = MockBus::new();
        bus.fail_after = Some(0);
        let mut lcd = Lcd::new(bus, NoPin, NoPin, LcdConfig::default());
        assert_eq!(lcd.clear(Color::WHITE), Err(BusError::Spi));
    }
}
