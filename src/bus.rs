//! SPI transport for the LCD controller
//!
//! The controller takes a command byte with D/C low followed by parameter or pixel
//! bytes with D/C high. Chip select is owned by the [`SpiDevice`], so the LCD can
//! share SPI2 with the SD card.

use crate::ConfigError;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

/// Transport failure. There is no recovery path for a half-sent burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// SPI transaction failed
    Spi,
    /// D/C, reset or backlight pin could not be driven
    Pin,
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BusError::Spi => f.write_str("spi transfer failed"),
            BusError::Pin => f.write_str("gpio write failed"),
        }
    }
}

/// SPI bus settings, checked once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiBusConfig {
    frequency_hz: u32,
    mode: u8,
    max_transfer: usize,
    queue_depth: u8,
}

impl SpiBusConfig {
    pub const MAX_FREQUENCY_HZ: u32 = 80_000_000;

    pub fn new(
        frequency_hz: u32,
        mode: u8,
        max_transfer: usize,
        queue_depth: u8,
    ) -> Result<Self, ConfigError> {
        if frequency_hz == 0 || frequency_hz > Self::MAX_FREQUENCY_HZ {
            return Err(ConfigError::Frequency);
        }
        if mode > 3 {
            return Err(ConfigError::Mode);
        }
        if max_transfer == 0 || queue_depth == 0 {
            return Err(ConfigError::Size);
        }
        Ok(Self {
            frequency_hz,
            mode,
            max_transfer,
            queue_depth,
        })
    }

    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }

    pub fn mode(&self) -> u8 {
        self.mode
    }

    pub fn max_transfer(&self) -> usize {
        self.max_transfer
    }

    pub fn queue_depth(&self) -> u8 {
        self.queue_depth
    }

    pub fn with_frequency_mhz(self, mhz: u32) -> Result<Self, ConfigError> {
        Self::new(mhz.saturating_mul(1_000_000), self.mode, self.max_transfer, self.queue_depth)
    }
}

impl Default for SpiBusConfig {
    fn default() -> Self {
        Self {
            frequency_hz: 60_000_000,
            mode: 0,
            max_transfer: 160 * 80 * 2,
            queue_depth: 7,
        }
    }
}

/// Command/data framing used by the display driver
pub trait LcdBus {
    /// Send one command byte.
    fn write_command(&mut self, cmd: u8) -> Result<(), BusError>;

    /// Send parameter or pixel bytes. An empty slice issues no transaction.
    fn write_data(&mut self, data: &[u8]) -> Result<(), BusError>;

    /// Full-duplex single byte exchange.
    fn transfer_byte(&mut self, out: u8) -> Result<u8, BusError>;

    /// Command followed by its parameters.
    fn write_command_with(&mut self, cmd: u8, params: &[u8]) -> Result<(), BusError> {
        self.write_command(cmd)?;
        self.write_data(params)
    }
}

/// [`LcdBus`] over an `embedded-hal` SPI device and a D/C pin
pub struct SpiInterface<SPI, DC> {
    spi: SPI,
    dc: DC,
}

impl<SPI, DC> SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC> LcdBus for SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    fn write_command(&mut self, cmd: u8) -> Result<(), BusError> {
        self.dc.set_low().map_err(|_| BusError::Pin)?;
        self.spi.write(&[cmd]).map_err(|_| BusError::Spi)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), BusError> {
        if data.is_empty() {
            return Ok(());
        }
        self.dc.set_high().map_err(|_| BusError::Pin)?;
        self.spi.write(data).map_err(|_| BusError::Spi)
    }

    fn transfer_byte(&mut self, out: u8) -> Result<u8, BusError> {
        let mut buf = [out];
        self.spi.transfer_in_place(&mut buf).map_err(|_| BusError::Spi)?;
        Ok(buf[0])
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording bus shared by the driver tests.

    use super::{BusError, LcdBus};
    use alloc::vec::Vec;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Op {
        Cmd(u8),
        Data(Vec<u8>),
    }

    #[derive(Default)]
    pub struct MockBus {
        pub ops: Vec<Op>,
        pub fail_after: Option<usize>,
    }

    impl MockBus {
        pub fn new() -> Self {
            Self::default()
        }

        fn check(&mut self) -> Result<(), BusError> {
            if let Some(n) = self.fail_after {
                if self.ops.len() >= n {
                    return Err(BusError::Spi);
                }
            }
            Ok(())
        }

        pub fn commands(&self) -> Vec<u8> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Cmd(c) => Some(*c),
                    Op::Data(_) => None,
                })
                .collect()
        }
    }

    impl LcdBus for MockBus {
        fn write_command(&mut self, cmd: u8) -> Result<(), BusError> {
            self.check()?;
            self.ops.push(Op::Cmd(cmd));
            Ok(())
        }

        fn write_data(&mut self, data: &[u8]) -> Result<(), BusError> {
            if data.is_empty() {
                return Ok(());
            }
            self.check()?;
            self.ops.push(Op::Data(data.to_vec()));
            Ok(())
        }

        fn transfer_byte(&mut self, out: u8) -> Result<u8, BusError> {
            self.check()?;
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    #[test]
    fn command_then_data_toggles_dc() {
        let spi = SpiMock::new(&[
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![0x2A]),
            SpiTransaction::transaction_end(),
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![0x00, 0x01, 0x00, 0xA0]),
            SpiTransaction::transaction_end(),
        ]);
        let dc = PinMock::new(&[
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
        ]);
        let mut bus = SpiInterface::new(spi, dc);
        bus.write_command_with(0x2A, &[0x00, 0x01, 0x00, 0xA0]).unwrap();
        bus.write_data(&[]).unwrap();

        let (mut spi, mut dc) = bus.release();
        spi.done();
        dc.done();
    }

    #[test]
    fn transfer_byte_returns_read_value() {
        let spi = SpiMock::new(&[
            SpiTransaction::transaction_start(),
            SpiTransaction::transfer_in_place(vec![0xFF], vec![0x5A]),
            SpiTransaction::transaction_end(),
        ]);
        let dc = PinMock::new(&[]);
        let mut bus = SpiInterface::new(spi, dc);
        assert_eq!(bus.transfer_byte(0xFF).unwrap(), 0x5A);
        let (mut spi, mut dc) = bus.release();
        spi.done();
        dc.done();
    }

    #[test]
    fn bus_config_is_validated() {
        assert_eq!(SpiBusConfig::new(0, 0, 16, 1), Err(ConfigError::Frequency));
        assert_eq!(SpiBusConfig::new(90_000_000, 0, 16, 1), Err(ConfigError::Frequency));
        assert_eq!(SpiBusConfig::new(1_000_000, 4, 16, 1), Err(ConfigError::Mode));
        assert_eq!(SpiBusConfig::new(1_000_000, 0, 0, 1), Err(ConfigError::Size));
        assert_eq!(SpiBusConfig::new(1_000_000, 0, 16, 0), Err(ConfigError::Size));

        let cfg = SpiBusConfig::default().with_frequency_mhz(40).unwrap();
        assert_eq!(cfg.frequency_hz(), 40_000_000);
        assert_eq!(cfg.queue_depth(), 7);
    }
}
