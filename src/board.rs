//! Board LED, RGB LED and BOOT key

use crate::bus::BusError;
use crate::ConfigError;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

/// Key debounce time
pub const DEBOUNCE_MS: u32 = 10;

/// Pin level that turns an LED on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveLevel {
    Low,
    High,
}

impl ActiveLevel {
    /// Whether the pin is driven high for `on`.
    fn drives_high(self, on: bool) -> bool {
        match self {
            ActiveLevel::High => on,
            ActiveLevel::Low => !on,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedConfig {
    active: ActiveLevel,
    blink_period_ms: u32,
}

impl LedConfig {
    pub fn new(active: ActiveLevel, blink_period_ms: u32) -> Result<Self, ConfigError> {
        if blink_period_ms == 0 {
            return Err(ConfigError::Size);
        }
        Ok(Self {
            active,
            blink_period_ms,
        })
    }

    pub fn active(&self) -> ActiveLevel {
        self.active
    }

    pub fn blink_period_ms(&self) -> u32 {
        self.blink_period_ms
    }
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            active: ActiveLevel::Low,
            blink_period_ms: 500,
        }
    }
}

/// Single LED, off after construction
pub struct Led<P> {
    pin: P,
    active: ActiveLevel,
    on: bool,
}

impl<P: OutputPin> Led<P> {
    pub fn new(pin: P, config: &LedConfig) -> Result<Self, BusError> {
        let mut led = Self {
            pin,
            active: config.active,
            on: false,
        };
        led.set(false)?;
        Ok(led)
    }

    pub fn set(&mut self, on: bool) -> Result<(), BusError> {
        let result = if self.active.drives_high(on) {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| BusError::Pin)?;
        self.on = on;
        Ok(())
    }

    pub fn toggle(&mut self) -> Result<(), BusError> {
        self.set(!self.on)
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn release(self) -> P {
        self.pin
    }
}

/// RGB LED colours, one bit per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rgb {
    Off,
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
}

impl Rgb {
    fn channels(self) -> (bool, bool, bool) {
        match self {
            Rgb::Off => (false, false, false),
            Rgb::Red => (true, false, false),
            Rgb::Green => (false, true, false),
            Rgb::Blue => (false, false, true),
            Rgb::Yellow => (true, true, false),
            Rgb::Cyan => (false, true, true),
            Rgb::Magenta => (true, false, true),
            Rgb::White => (true, true, true),
        }
    }

    fn from_channels(r: bool, g: bool, b: bool) -> Self {
        match (r, g, b) {
            (false, false, false) => Rgb::Off,
            (true, false, false) => Rgb::Red,
            (false, true, false) => Rgb::Green,
            (false, false, true) => Rgb::Blue,
            (true, true, false) => Rgb::Yellow,
            (false, true, true) => Rgb::Cyan,
            (true, false, true) => Rgb::Magenta,
            (true, true, true) => Rgb::White,
        }
    }

    /// Cycle through the lit colours, used by the LED test.
    pub fn next(self) -> Self {
        match self {
            Rgb::Off | Rgb::White => Rgb::Red,
            Rgb::Red => Rgb::Green,
            Rgb::Green => Rgb::Blue,
            Rgb::Blue => Rgb::Yellow,
            Rgb::Yellow => Rgb::Cyan,
            Rgb::Cyan => Rgb::Magenta,
            Rgb::Magenta => Rgb::White,
        }
    }
}

pub struct RgbLed<R, G, B> {
    r: Led<R>,
    g: Led<G>,
    b: Led<B>,
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> RgbLed<R, G, B> {
    pub fn new(r: R, g: G, b: B, config: &LedConfig) -> Result<Self, BusError> {
        Ok(Self {
            r: Led::new(r, config)?,
            g: Led::new(g, config)?,
            b: Led::new(b, config)?,
        })
    }

    pub fn set(&mut self, color: Rgb) -> Result<(), BusError> {
        let (r, g, b) = color.channels();
        self.r.set(r)?;
        self.g.set(g)?;
        self.b.set(b)
    }

    /// Invert every channel.
    pub fn toggle(&mut self) -> Result<(), BusError> {
        self.r.toggle()?;
        self.g.toggle()?;
        self.b.toggle()
    }

    pub fn color(&self) -> Rgb {
        Rgb::from_channels(self.r.is_on(), self.g.is_on(), self.b.is_on())
    }
}

/// Blink patterns for the status LED, advanced once per blink period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedPattern {
    Off,
    Solid,
    /// on for 4 ticks, off for 4
    Slow,
    /// alternating ticks
    Fast,
}

impl LedPattern {
    pub fn is_on(self, tick: u32) -> bool {
        match self {
            LedPattern::Off => false,
            LedPattern::Solid => true,
            LedPattern::Slow => (tick / 4) % 2 == 0,
            LedPattern::Fast => tick % 2 == 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// A held key is reported once until it is released
    Single,
    /// A held key is reported on every scan
    Repeat,
}

/// Active-low push button
pub struct Key<P> {
    pin: P,
    released: bool,
}

impl<P: InputPin> Key<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            released: true,
        }
    }

    fn pressed(&mut self) -> Result<bool, BusError> {
        self.pin.is_low().map_err(|_| BusError::Pin)
    }

    /// Returns `true` when a debounced press is seen.
    pub fn scan<D: DelayNs>(&mut self, mode: KeyMode, delay: &mut D) -> Result<bool, BusError> {
        if mode == KeyMode::Repeat {
            self.released = true;
        }

        if self.released && self.pressed()? {
            delay.delay_ms(DEBOUNCE_MS);
            self.released = false;
            return self.pressed();
        }
        if !self.pressed()? {
            self.released = true;
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Line(Rc<Cell<Option<bool>>>);

    impl embedded_hal::digital::ErrorType for Line {
        type Error = Infallible;
    }

    impl OutputPin for Line {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.set(Some(false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.set(Some(true));
            Ok(())
        }
    }

    /// Key input fed from a queue of levels, one per read.
    struct Button(Rc<RefCell<VecDeque<bool>>>);

    impl embedded_hal::digital::ErrorType for Button {
        type Error = Infallible;
    }

    impl InputPin for Button {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.0.borrow_mut().pop_front().unwrap_or(true))
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            self.is_high().map(|h| !h)
        }
    }

    #[derive(Default)]
    struct Clock(u64);

    impl DelayNs for Clock {
        fn delay_ns(&mut self, ns: u32) {
            self.0 += ns as u64;
        }
    }

    fn button(levels: &[bool]) -> (Key<Button>, Rc<RefCell<VecDeque<bool>>>) {
        let queue = Rc::new(RefCell::new(levels.iter().copied().collect()));
        (Key::new(Button(queue.clone())), queue)
    }

    #[test]
    fn active_low_led_drives_inverted_levels() {
        let line = Line::default();
        let mut led = Led::new(line.clone(), &LedConfig::default()).unwrap();
        assert_eq!(line.0.get(), Some(true));
        assert!(!led.is_on());

        led.set(true).unwrap();
        assert_eq!(line.0.get(), Some(false));
        led.toggle().unwrap();
        assert_eq!(line.0.get(), Some(true));
        assert!(!led.is_on());
    }

    #[test]
    fn active_high_led() {
        let line = Line::default();
        let config = LedConfig::new(ActiveLevel::High, 250).unwrap();
        let mut led = Led::new(line.clone(), &config).unwrap();
        assert_eq!(line.0.get(), Some(false));
        led.toggle().unwrap();
        assert_eq!(line.0.get(), Some(true));
        assert!(led.is_on());
        assert_eq!(LedConfig::new(ActiveLevel::High, 0), Err(ConfigError::Size));
    }

    #[test]
    fn rgb_colours_and_toggle() {
        let (r, g, b) = (Line::default(), Line::default(), Line::default());
        let mut rgb = RgbLed::new(r.clone(), g.clone(), b.clone(), &LedConfig::default()).unwrap();
        assert_eq!(rgb.color(), Rgb::Off);

        rgb.set(Rgb::Yellow).unwrap();
        // active low: lit channels are driven low
        assert_eq!((r.0.get(), g.0.get(), b.0.get()), (Some(false), Some(false), Some(true)));
        rgb.toggle().unwrap();
        assert_eq!(rgb.color(), Rgb::Blue);

        let mut c = Rgb::Off;
        for _ in 0..7 {
            c = c.next();
            rgb.set(c).unwrap();
            assert_eq!(rgb.color(), c);
        }
        assert_eq!(c, Rgb::White);
    }

    #[test]
    fn single_mode_reports_held_key_once() {
        // pressed for three scans, then released, then pressed again
        let (mut key, _) = button(&[false, false, false, false, true, false, false]);
        let mut clock = Clock::default();

        assert!(key.scan(KeyMode::Single, &mut clock).unwrap());
        assert_eq!(clock.0, DEBOUNCE_MS as u64 * 1_000_000);
        assert!(!key.scan(KeyMode::Single, &mut clock).unwrap());
        assert!(!key.scan(KeyMode::Single, &mut clock).unwrap());
        // release re-arms without reporting
        assert!(!key.scan(KeyMode::Single, &mut clock).unwrap());
        assert!(key.scan(KeyMode::Single, &mut clock).unwrap());
    }

    #[test]
    fn repeat_mode_reports_every_scan() {
        let (mut key, _) = button(&[false, false, false, false]);
        let mut clock = Clock::default();
        assert!(key.scan(KeyMode::Repeat, &mut clock).unwrap());
        assert!(key.scan(KeyMode::Repeat, &mut clock).unwrap());
    }

    #[test]
    fn bounce_is_filtered() {
        // low on first read, high again after the debounce delay
        let (mut key, queue) = button(&[false, true]);
        let mut clock = Clock::default();
        assert!(!key.scan(KeyMode::Single, &mut clock).unwrap());
        assert!(queue.borrow().is_empty());
        // idle key reads high and re-arms
        assert!(!key.scan(KeyMode::Single, &mut clock).unwrap());
        queue.borrow_mut().extend([false, false]);
        assert!(key.scan(KeyMode::Single, &mut clock).unwrap());
    }

    #[test]
    fn blink_patterns() {
        assert!((0..8).all(|t| LedPattern::Solid.is_on(t)));
        assert!(!(0..8).any(|t| LedPattern::Off.is_on(t)));
        let slow: Vec<bool> = (0..8).map(|t| LedPattern::Slow.is_on(t)).collect();
        assert_eq!(slow, [true, true, true, true, false, false, false, false]);
        assert!(LedPattern::Fast.is_on(0) && !LedPattern::Fast.is_on(1));
    }
}
