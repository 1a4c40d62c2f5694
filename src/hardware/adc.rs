use {
    crate::hardware::{AnalogInput, ANALOG_MAX},
    anyhow::{anyhow, Context, Result},
    std::{fs, path::PathBuf},
};

const IIO_ROOT: &str = "/sys/bus/iio/devices";

/// ADC channel read through the Linux IIO sysfs interface, scaled down to
/// 10-bit counts.
pub struct IioAnalogPin {
    path: PathBuf,
    bits: u8,
}

impl IioAnalogPin {
    pub fn new(device: u32, channel: u32, bits: u8) -> Result<Self> {
        if !(10..=16).contains(&bits) {
            return Err(anyhow!("Unsupported ADC resolution: {} bits", bits));
        }

        let path = PathBuf::from(IIO_ROOT)
            .join(format!("iio:device{}", device))
            .join(format!("in_voltage{}_raw", channel));

        if !path.exists() {
            return Err(anyhow!("ADC channel not found at {}", path.display()));
        }

        Ok(Self { path, bits })
    }
}

impl AnalogInput for IioAnalogPin {
    fn read(&mut self) -> Result<u16> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let raw: u32 = raw
            .trim()
            .parse()
            .with_context(|| format!("Malformed ADC value in {}", self.path.display()))?;

        Ok(scale_to_10_bits(raw, self.bits))
    }
}

fn scale_to_10_bits(raw: u32, bits: u8) -> u16 {
    let scaled = raw >> (bits - 10);
    scaled.min(ANALOG_MAX as u32) as u16
}
