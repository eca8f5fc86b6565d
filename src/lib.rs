#![cfg_attr(not(test), no_std)]

//! ESP32-S3 Board Support Library
//!
//! Drivers for the peripherals of the ESP32-S3 minimal board: the 0.96" SPI LCD with
//! text rendering and BMP/JPEG/PNG picture decoding, SD card file access, LED/RGB/key
//! GPIO wrappers, a software RTC calendar and the MPU6050/DHT11 sensors.
//!
//! Everything here is generic over `embedded-hal` 1.0 traits; the firmware binary
//! binds it to esp-hal peripherals.

extern crate alloc;

pub mod board;
pub mod bus;
pub mod color;
pub mod dht11;
pub mod factory;
mod font;
pub mod lcd;
pub mod mpu6050;
pub mod picture;
pub mod rtc;
pub mod storage;
pub mod text;

pub use bus::BusError;
pub use color::Color;
pub use picture::PicError;
pub use storage::StorageError;

/// Project version information
pub const VERSION: &str = "0.1.0-dev";

/// Default configuration constants
pub mod config {
    /// Panel resolution in landscape orientation
    pub const LCD_WIDTH: u16 = 160;
    pub const LCD_HEIGHT: u16 = 80;

    /// LCD SPI clock, read from the environment at compile time
    pub const LCD_SPI_MHZ: &str = env!("LCD_SPI_MHZ");

    /// SPI2 bus pins shared by the LCD and the SD card
    pub const SPI_MOSI_PIN: u8 = 11;
    pub const SPI_CLK_PIN: u8 = 12;
    pub const SPI_MISO_PIN: u8 = 13;

    /// LCD control pins
    pub const LCD_BL_PIN: u8 = 41;
    pub const LCD_DC_PIN: u8 = 40;
    pub const LCD_CS_PIN: u8 = 39;
    pub const LCD_RST_PIN: u8 = 38;

    /// SD card chip select
    pub const SD_CS_PIN: u8 = 2;

    /// Board LED, RGB LED and BOOT key
    pub const LED_PIN: u8 = 1;
    pub const RGB_R_PIN: u8 = 4;
    pub const RGB_G_PIN: u8 = 5;
    pub const RGB_B_PIN: u8 = 6;
    pub const BOOT_KEY_PIN: u8 = 0;

    /// Directory on the SD card holding the slideshow pictures
    pub const PICTURE_DIR: &str = env!("PICTURE_DIR");

    /// Delay between two slideshow pictures in milliseconds
    pub const SLIDESHOW_INTERVAL_MS: &str = env!("SLIDESHOW_INTERVAL_MS");

    /// SD card probe back-off in milliseconds
    pub const SD_RETRY_INTERVAL_MS: u32 = 1000;

    /// Parse a numeric compile-time setting, falling back to `default`
    pub const fn parse_u32(value: &str, default: u32) -> u32 {
        let bytes = value.as_bytes();
        if bytes.is_empty() {
            return default;
        }
        let mut result: u32 = 0;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b < b'0' || b > b'9' {
                return default;
            }
            result = result * 10 + (b - b'0') as u32;
            i += 1;
        }
        result
    }
}

/// Rejected configuration values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// SPI clock outside 1..=80 MHz
    Frequency,
    /// SPI mode above 3
    Mode,
    /// Zero-sized transfer or queue
    Size,
    /// Panel geometry or offsets out of range
    Geometry,
    /// Calendar field out of range
    Calendar,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::Frequency => f.write_str("spi clock out of range"),
            ConfigError::Mode => f.write_str("invalid spi mode"),
            ConfigError::Size => f.write_str("zero transfer or queue size"),
            ConfigError::Geometry => f.write_str("invalid panel geometry"),
            ConfigError::Calendar => f.write_str("calendar field out of range"),
        }
    }
}

/// Error types for the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardError {
    /// SPI transport or control pin failure, unrecoverable
    Bus(BusError),
    /// Picture could not be shown
    Picture(PicError),
    /// SD card or file access failure
    Storage(StorageError),
    /// Sensor communication or data error
    Sensor(SensorError),
    /// Invalid configuration
    Config(ConfigError),
}

/// Sensor errors shared by the I2C and one-wire drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Bus transaction failed
    Bus,
    /// Device did not answer in time
    Timeout,
    /// Wrong identity register value
    Identity(u8),
    /// Checksum mismatch
    Checksum,
    /// Decoded value outside the sensor's range
    Range,
}

impl core::fmt::Display for SensorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SensorError::Bus => f.write_str("sensor bus error"),
            SensorError::Timeout => f.write_str("sensor timeout"),
            SensorError::Identity(id) => write!(f, "unexpected device id 0x{:02X}", id),
            SensorError::Checksum => f.write_str("checksum mismatch"),
            SensorError::Range => f.write_str("value out of range"),
        }
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::Bus(e) => write!(f, "bus: {}", e),
            BoardError::Picture(e) => write!(f, "picture: {}", e),
            BoardError::Storage(e) => write!(f, "storage: {}", e),
            BoardError::Sensor(e) => write!(f, "sensor: {}", e),
            BoardError::Config(e) => write!(f, "config: {}", e),
        }
    }
}

impl From<BusError> for BoardError {
    fn from(e: BusError) -> Self {
        BoardError::Bus(e)
    }
}

impl From<PicError> for BoardError {
    fn from(e: PicError) -> Self {
        BoardError::Picture(e)
    }
}

impl From<StorageError> for BoardError {
    fn from(e: StorageError) -> Self {
        BoardError::Storage(e)
    }
}

impl From<SensorError> for BoardError {
    fn from(e: SensorError) -> Self {
        BoardError::Sensor(e)
    }
}

impl From<ConfigError> for BoardError {
    fn from(e: ConfigError) -> Self {
        BoardError::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::config::parse_u32;

    #[test]
    fn numeric_settings_parse_with_fallback() {
        assert_eq!(parse_u32("3000", 1), 3000);
        assert_eq!(parse_u32("", 7), 7);
        assert_eq!(parse_u32("12ms", 7), 7);
    }
}
