use {
    anyhow::{Context, Result},
    std::{env, path::PathBuf, str::FromStr, time::Duration},
};

pub const PORT: u16 = 1377;
pub const POLL_INTERVAL: Duration = Duration::from_millis(300);

/// Template location plus the board wiring. Defaults match a Grove shield
/// on the Intel Edison Arduino breakout.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub template_path: PathBuf,
    pub i2c_dev: String,
    /// Linux GPIO number, not the shield label (D2 is GPIO 128).
    pub button_gpio: u64,
    pub iio_device: u32,
    pub adc_bits: u8,
    pub light_channel: u32,
    pub temperature_channel: u32,
    pub air_quality_channel: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from("sensors.tpl"),
            i2c_dev: "/dev/i2c-6".to_string(),
            button_gpio: 128,
            iio_device: 1,
            adc_bits: 12,
            light_channel: 0,
            temperature_channel: 1,
            air_quality_channel: 3,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Self {
            template_path: lookup("TEMPLATE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.template_path),
            i2c_dev: lookup("I2C_DEV").unwrap_or(defaults.i2c_dev),
            button_gpio: parse(&lookup, "BUTTON_GPIO")?.unwrap_or(defaults.button_gpio),
            iio_device: parse(&lookup, "IIO_DEVICE")?.unwrap_or(defaults.iio_device),
            adc_bits: parse(&lookup, "ADC_BITS")?.unwrap_or(defaults.adc_bits),
            ..defaults
        })
    }
}

fn parse<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|value| {
            value
                .parse()
                .with_context(|| format!("Invalid value for {}: {:?}", key, value))
        })
        .transpose()
}
