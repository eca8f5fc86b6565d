//! DHT11 temperature and humidity sensor on a single open-drain line
//!
//! Frame: host pulls the line low for 20 ms and releases it; the sensor
//! answers with 80 µs low, 80 µs high, then 40 bits. Each bit is 50 µs low
//! followed by a high pulse of about 26 µs (0) or 70 µs (1).

use crate::SensorError;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::debug;

const START_LOW_MS: u32 = 20;
const RELEASE_US: u32 = 30;
const RESPONSE_TIMEOUT_US: u32 = 100;
const BIT_TIMEOUT_US: u32 = 100;
/// High pulses longer than this are ones
const ONE_THRESHOLD_US: u32 = 35;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// %RH
    pub humidity: u8,
    /// °C × 10
    pub temperature_x10: u16,
}

impl Reading {
    pub fn temperature(&self) -> f32 {
        self.temperature_x10 as f32 / 10.0
    }
}

/// Check a raw frame: humidity, humidity decimal, temperature, temperature
/// decimal, checksum.
pub fn decode(frame: &[u8; 5]) -> Result<Reading, SensorError> {
    let sum = frame[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    if sum != frame[4] {
        debug!("[DHT] checksum {:02X?}", frame);
        return Err(SensorError::Checksum);
    }
    let humidity = frame[0];
    let temperature_x10 = frame[2] as u16 * 10 + frame[3] as u16;
    if humidity > 100 || temperature_x10 > 600 {
        return Err(SensorError::Range);
    }
    Ok(Reading {
        humidity,
        temperature_x10,
    })
}

pub struct Dht11<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> Dht11<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    /// The line idles high.
    pub fn new(mut pin: P, delay: D) -> Result<Self, SensorError> {
        pin.set_high().map_err(|_| SensorError::Bus)?;
        Ok(Self { pin, delay })
    }

    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    /// Microseconds until the line reaches `high`.
    fn wait_for(&mut self, high: bool, timeout_us: u32) -> Result<u32, SensorError> {
        let mut elapsed = 0;
        loop {
            if self.pin.is_high().map_err(|_| SensorError::Bus)? == high {
                return Ok(elapsed);
            }
            if elapsed >= timeout_us {
                return Err(SensorError::Timeout);
            }
            self.delay.delay_us(1);
            elapsed += 1;
        }
    }

    fn read_frame(&mut self) -> Result<[u8; 5], SensorError> {
        self.pin.set_low().map_err(|_| SensorError::Bus)?;
        self.delay.delay_ms(START_LOW_MS);
        self.pin.set_high().map_err(|_| SensorError::Bus)?;
        self.delay.delay_us(RELEASE_US);

        self.wait_for(false, RESPONSE_TIMEOUT_US)?;
        self.wait_for(true, RESPONSE_TIMEOUT_US)?;
        self.wait_for(false, RESPONSE_TIMEOUT_US)?;

        let mut frame = [0u8; 5];
        for bit in 0..40 {
            self.wait_for(true, BIT_TIMEOUT_US)?;
            let high = self.wait_for(false, BIT_TIMEOUT_US)?;
            if high > ONE_THRESHOLD_US {
                frame[bit / 8] |= 0x80 >> (bit % 8);
            }
        }
        Ok(frame)
    }

    pub fn read(&mut self) -> Result<Reading, SensorError> {
        decode(&self.read_frame()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Sensor model sharing a microsecond clock with its delay.
    #[derive(Default)]
    struct Wire {
        now_ns: Cell<u64>,
        released_at: Cell<Option<u64>>,
        host_low: Cell<bool>,
        /// (duration µs, level) after the host releases the line
        script: RefCell<Vec<(u64, bool)>>,
    }

    impl Wire {
        fn level(&self) -> bool {
            if self.host_low.get() {
                return false;
            }
            let Some(start) = self.released_at.get() else {
                return true;
            };
            let mut t = (self.now_ns.get() - start) / 1000;
            for &(len, level) in self.script.borrow().iter() {
                if t < len {
                    return level;
                }
                t -= len;
            }
            true
        }
    }

    struct Pin(Rc<Wire>);

    impl embedded_hal::digital::ErrorType for Pin {
        type Error = Infallible;
    }

    impl OutputPin for Pin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.host_low.set(true);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            if self.0.host_low.replace(false) {
                self.0.released_at.set(Some(self.0.now_ns.get()));
            }
            Ok(())
        }
    }

    impl InputPin for Pin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.0.level())
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.0.level())
        }
    }

    struct Delay(Rc<Wire>);

    impl DelayNs for Delay {
        fn delay_ns(&mut self, ns: u32) {
            self.0.now_ns.set(self.0.now_ns.get() + ns as u64);
        }
    }

    fn sensor_sending(frame: [u8; 5]) -> Dht11<Pin, Delay> {
        let wire = Rc::new(Wire::default());
        let mut script = vec![(40, true), (80, false), (80, true)];
        for byte in frame {
            for i in 0..8 {
                let one = byte & (0x80 >> i) != 0;
                script.push((50, false));
                script.push((if one { 70 } else { 26 }, true));
            }
        }
        script.push((50, false));
        *wire.script.borrow_mut() = script;
        Dht11::new(Pin(wire.clone()), Delay(wire)).unwrap()
    }

    #[test]
    fn decode_checks_sum_and_range() {
        assert_eq!(
            decode(&[55, 0, 23, 4, 82]),
            Ok(Reading { humidity: 55, temperature_x10: 234 })
        );
        assert_eq!(decode(&[55, 0, 23, 4, 81]), Err(SensorError::Checksum));
        assert_eq!(decode(&[101, 0, 20, 0, 121]), Err(SensorError::Range));
        assert_eq!(decode(&[50, 0, 61, 0, 111]), Err(SensorError::Range));
        // checksum wraps
        assert_eq!(decode(&[100, 0, 60, 0, 160]).map(|r| r.temperature()), Ok(60.0));
        assert_eq!(decode(&[200, 0, 60, 0, 4]), Err(SensorError::Range));
    }

    #[test]
    fn reads_a_frame_from_pulse_widths() {
        let mut dht = sensor_sending([40, 0, 21, 7, 68]);
        let reading = dht.read().unwrap();
        assert_eq!(reading, Reading { humidity: 40, temperature_x10: 217 });
        assert!((reading.temperature() - 21.7).abs() < 1e-4);
    }

    #[test]
    fn silent_sensor_times_out() {
        let wire = Rc::new(Wire::default());
        let mut dht = Dht11::new(Pin(wire.clone()), Delay(wire)).unwrap();
        assert_eq!(dht.read(), Err(SensorError::Timeout));
    }

    #[test]
    fn corrupted_bit_fails_checksum() {
        let mut dht = sensor_sending([40, 0, 21, 7, 69]);
        assert_eq!(dht.read(), Err(SensorError::Checksum));
    }
}
