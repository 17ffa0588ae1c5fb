//! Raw reading sources for keypad channels.

use std::path::{Path, PathBuf};

/// A source of raw ADC samples, scaled to the full `0..=65535` range.
///
/// Sources are sampled synchronously, once per channel poll.
pub trait AdcSource {
    fn read(&mut self) -> anyhow::Result<u16>;
}

impl AdcSource for Box<dyn AdcSource> {
    fn read(&mut self) -> anyhow::Result<u16> {
        (**self).read()
    }
}

/// ADC channel exposed by the Linux Industrial I/O subsystem through sysfs,
/// e.g. `/sys/bus/iio/devices/iio:device0/in_voltage0_raw`.
#[derive(Debug)]
pub struct IioAdc {
    path: PathBuf,
    bits: u8,
    max: u32,
}

impl IioAdc {
    /// Open channel `index` of the IIO device at `device` with the given ADC resolution in bits
    pub fn try_new(device: &Path, index: u8, resolution_bits: u8) -> anyhow::Result<Self> {
        if !(1..=16).contains(&resolution_bits) {
            anyhow::bail!("Unsupported ADC resolution: {resolution_bits} bits");
        }
        let path = device.join(format!("in_voltage{index}_raw"));
        if !path.exists() {
            anyhow::bail!("IIO channel attribute {:?} not found", path);
        }
        debug!("Opened IIO channel {:?} ({resolution_bits} bits)", path);

        Ok(Self {
            path,
            bits: resolution_bits,
            max: (1u32 << resolution_bits) - 1,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scale a native reading to 16 bits by bit replication, clamping out of range values.
    ///
    /// The reading is shifted to the top and its bits repeated below it, so `0` maps to `0`
    /// and full scale maps to `u16::MAX`.
    fn scale(&self, value: i64) -> u16 {
        let value = value.clamp(0, self.max as i64) as u32;
        let bits = u32::from(self.bits);
        let mut scaled = 0u32;
        let mut filled = 0u32;
        while filled < 16 {
            let top = filled + bits;
            scaled |= if top <= 16 {
                value << (16 - top)
            } else {
                value >> (top - 16)
            };
            filled = top;
        }
        scaled as u16
    }
}

impl AdcSource for IioAdc {
    fn read(&mut self) -> anyhow::Result<u16> {
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| anyhow::anyhow!("Failed to read {:?}: {}", self.path, e))?;
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|e| {
                anyhow::anyhow!("Invalid reading {:?} from {:?}: {}", raw.trim(), self.path, e)
            })?;
        Ok(self.scale(value))
    }
}

#[cfg(test)]
mod tests {

    use tempfile::TempDir;

    use super::*;

    fn device_with(value: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("in_voltage1_raw"), value).unwrap();
        dir
    }

    #[test]
    fn test_should_scale_twelve_bit_readings() {
        let dir = device_with("4095\n");
        let mut adc = IioAdc::try_new(dir.path(), 1, 12).unwrap();
        assert_eq!(adc.read().unwrap(), u16::MAX);

        std::fs::write(adc.path(), "0\n").unwrap();
        assert_eq!(adc.read().unwrap(), 0);

        std::fs::write(adc.path(), "2048\n").unwrap();
        assert_eq!(adc.read().unwrap(), (2048 << 4) | (2048 >> 8));
        assert_eq!(adc.read().unwrap(), 32776);
    }

    #[test]
    fn test_should_replicate_bits_of_low_resolution_readings() {
        let dir = device_with("1");
        let mut adc = IioAdc::try_new(dir.path(), 1, 1).unwrap();
        assert_eq!(adc.read().unwrap(), u16::MAX);

        let mut adc = IioAdc::try_new(dir.path(), 1, 3).unwrap();
        std::fs::write(adc.path(), "5").unwrap();
        // 101 five times, then its top bit
        assert_eq!(adc.read().unwrap(), 0b1011_0110_1101_1011);

        let mut adc = IioAdc::try_new(dir.path(), 1, 10).unwrap();
        std::fs::write(adc.path(), "512").unwrap();
        assert_eq!(adc.read().unwrap(), (512 << 6) | (512 >> 4));
    }

    #[test]
    fn test_should_pass_through_sixteen_bit_readings() {
        let dir = device_with("39552");
        let mut adc = IioAdc::try_new(dir.path(), 1, 16).unwrap();
        assert_eq!(adc.read().unwrap(), 39552);
    }

    #[test]
    fn test_should_clamp_out_of_range_readings() {
        let dir = device_with("-12");
        let mut adc = IioAdc::try_new(dir.path(), 1, 10).unwrap();
        assert_eq!(adc.read().unwrap(), 0);

        std::fs::write(adc.path(), "5000").unwrap();
        assert_eq!(adc.read().unwrap(), u16::MAX);
    }

    #[test]
    fn test_should_fail_on_garbage() {
        let dir = device_with("n/a");
        let mut adc = IioAdc::try_new(dir.path(), 1, 12).unwrap();
        assert!(adc.read().is_err());
    }

    #[test]
    fn test_should_fail_to_open_missing_channel() {
        let dir = device_with("0");
        assert!(IioAdc::try_new(dir.path(), 7, 12).is_err());
        assert!(IioAdc::try_new(dir.path(), 1, 0).is_err());
        assert!(IioAdc::try_new(dir.path(), 1, 17).is_err());
    }
}
