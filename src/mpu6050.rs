//! MPU6050 six-axis IMU over I2C
//!
//! Configured for 1 kHz sampling, no low-pass filter, ±2000 °/s gyro and ±2 g
//! accelerometer range.

use crate::SensorError;
use embedded_hal::i2c::I2c;
use log::{debug, warn};

pub const DEFAULT_ADDRESS: u8 = 0x68;

/// WHO_AM_I of a genuine part
pub const DEVICE_ID: u8 = 0x68;

pub const SMPLRT_DIV: u8 = 0x19;
pub const CONFIG: u8 = 0x1A;
pub const GYRO_CONFIG: u8 = 0x1B;
pub const ACCEL_CONFIG: u8 = 0x1C;
pub const ACCEL_XOUT_H: u8 = 0x3B;
pub const PWR_MGMT_1: u8 = 0x6B;
pub const PWR_MGMT_2: u8 = 0x6C;
pub const WHO_AM_I: u8 = 0x75;

const INIT_SEQUENCE: [(u8, u8); 6] = [
    (PWR_MGMT_1, 0x01),   // wake, PLL on gyro X
    (PWR_MGMT_2, 0x00),
    (SMPLRT_DIV, 0x00),
    (CONFIG, 0x00),
    (GYRO_CONFIG, 0x18),  // ±2000 °/s
    (ACCEL_CONFIG, 0x00), // ±2 g
];

/// LSB per g at ±2 g
const ACCEL_SCALE: f32 = 16384.0;
/// LSB per °/s at ±2000 °/s
const GYRO_SCALE: f32 = 16.4;

/// Raw values of one burst read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Motion {
    pub accel: [i16; 3],
    pub temp: i16,
    pub gyro: [i16; 3],
}

impl Motion {
    fn from_burst(b: &[u8; 14]) -> Self {
        let word = |i: usize| i16::from_be_bytes([b[i], b[i + 1]]);
        Self {
            accel: [word(0), word(2), word(4)],
            temp: word(6),
            gyro: [word(8), word(10), word(12)],
        }
    }

    pub fn accel_g(&self) -> [f32; 3] {
        self.accel.map(|v| v as f32 / ACCEL_SCALE)
    }

    pub fn gyro_dps(&self) -> [f32; 3] {
        self.gyro.map(|v| v as f32 / GYRO_SCALE)
    }

    pub fn temperature_c(&self) -> f32 {
        self.temp as f32 / 340.0 + 36.53
    }
}

pub struct Mpu6050<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Mpu6050<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// AD0 high selects 0x69.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), SensorError> {
        self.i2c.write(self.address, &[reg, value]).map_err(|_| {
            warn!("[MPU] write 0x{:02X} <- 0x{:02X} failed", reg, value);
            SensorError::Bus
        })
    }

    fn read_regs(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), SensorError> {
        self.i2c.write_read(self.address, &[reg], buf).map_err(|_| {
            warn!("[MPU] read 0x{:02X} failed", reg);
            SensorError::Bus
        })
    }

    pub fn init(&mut self) -> Result<(), SensorError> {
        for (reg, value) in INIT_SEQUENCE {
            self.write_reg(reg, value)?;
        }
        debug!("[MPU] configured at 0x{:02X}", self.address);
        Ok(())
    }

    pub fn who_am_i(&mut self) -> Result<u8, SensorError> {
        let mut id = [0u8];
        self.read_regs(WHO_AM_I, &mut id)?;
        Ok(id[0])
    }

    /// Fails with [`SensorError::Identity`] when WHO_AM_I is not 0x68.
    pub fn check_identity(&mut self) -> Result<(), SensorError> {
        match self.who_am_i()? {
            DEVICE_ID => Ok(()),
            other => Err(SensorError::Identity(other)),
        }
    }

    /// Accelerometer, temperature and gyro in one 14-byte burst.
    pub fn read(&mut self) -> Result<Motion, SensorError> {
        let mut buf = [0u8; 14];
        self.read_regs(ACCEL_XOUT_H, &mut buf)?;
        Ok(Motion::from_burst(&buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    fn init_transactions() -> Vec<I2cTransaction> {
        INIT_SEQUENCE
            .iter()
            .map(|&(reg, value)| I2cTransaction::write(0x68, vec![reg, value]))
            .collect()
    }

    #[test]
    fn init_writes_configuration_in_order() {
        let expected = init_transactions();
        assert_eq!(expected.len(), 6);
        let mut mpu = Mpu6050::new(I2cMock::new(&expected));
        mpu.init().unwrap();
        mpu.release().done();
    }

    #[test]
    fn identity_is_checked() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write_read(0x68, vec![WHO_AM_I], vec![0x68]),
            I2cTransaction::write_read(0x68, vec![WHO_AM_I], vec![0x72]),
        ]);
        let mut mpu = Mpu6050::new(i2c);
        mpu.check_identity().unwrap();
        assert_eq!(mpu.check_identity(), Err(SensorError::Identity(0x72)));
        mpu.release().done();
    }

    #[test]
    fn burst_read_decodes_big_endian_words() {
        let burst = vec![
            0x40, 0x00, // ax = 1 g
            0xC0, 0x00, // ay = -1 g
            0x00, 0x00, // az
            0xFD, 0xF7, // temp = -521
            0x00, 0xA4, // gx = 164 -> 10 °/s
            0xFF, 0x5C, // gy = -164
            0x00, 0x00, // gz
        ];
        let i2c = I2cMock::new(&[I2cTransaction::write_read(0x68, vec![ACCEL_XOUT_H], burst)]);
        let mut mpu = Mpu6050::new(i2c);
        let m = mpu.read().unwrap();
        mpu.release().done();

        assert_eq!(m.accel, [16384, -16384, 0]);
        assert_eq!(m.temp, -521);
        assert_eq!(m.gyro, [164, -164, 0]);
        assert_eq!(m.accel_g(), [1.0, -1.0, 0.0]);
        let g = m.gyro_dps();
        assert!((g[0] - 10.0).abs() < 1e-4 && (g[1] + 10.0).abs() < 1e-4);
        assert!((m.temperature_c() - 35.0).abs() < 0.01);
    }

    #[test]
    fn bus_error_stops_init() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write(0x68, vec![PWR_MGMT_1, 0x01]).with_error(ErrorKind::Other),
        ]);
        let mut mpu = Mpu6050::new(i2c);
        assert_eq!(mpu.init(), Err(SensorError::Bus));
        mpu.release().done();
    }

    #[test]
    fn alternate_address() {
        let i2c = I2cMock::new(&[I2cTransaction::write_read(0x69, vec![WHO_AM_I], vec![0x68])]);
        let mut mpu = Mpu6050::with_address(i2c, 0x69);
        assert_eq!(mpu.who_am_i(), Ok(0x68));
        mpu.release().done();
    }
}
