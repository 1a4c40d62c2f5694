use {
    crate::hardware::AnalogInput,
    anyhow::{Context, Result},
    log::debug,
};

pub mod thermistor;

/// One sampling pass over every analog sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientSnapshot {
    /// Degrees Celsius, two decimal places.
    pub temperature: f64,
    pub light: u16,
    pub air_quality: u16,
}

impl AmbientSnapshot {
    pub fn temperature_text(&self) -> String {
        format!("{:.2}", self.temperature)
    }
}

pub struct Sensors {
    temperature: Box<dyn AnalogInput + Send>,
    light: Box<dyn AnalogInput + Send>,
    air_quality: Box<dyn AnalogInput + Send>,
}

impl Sensors {
    pub fn new(
        temperature: Box<dyn AnalogInput + Send>,
        light: Box<dyn AnalogInput + Send>,
        air_quality: Box<dyn AnalogInput + Send>,
    ) -> Self {
        Self {
            temperature,
            light,
            air_quality,
        }
    }

    pub fn read_temperature(&mut self) -> Result<f64> {
        let raw = self
            .temperature
            .read()
            .context("Failed to read temperature sensor")?;
        debug!("Temperature sensor raw value: {}", raw);

        let celsius = thermistor::celsius(raw)?;
        debug!("Celsius temperature: {}", celsius);

        Ok(celsius)
    }

    pub fn read_light(&mut self) -> Result<u16> {
        self.light.read().context("Failed to read light sensor")
    }

    pub fn read_air_quality(&mut self) -> Result<u16> {
        self.air_quality
            .read()
            .context("Failed to read air quality sensor")
    }

    pub fn read_all(&mut self) -> Result<AmbientSnapshot> {
        Ok(AmbientSnapshot {
            temperature: self.read_temperature()?,
            light: self.read_light()?,
            air_quality: self.read_air_quality()?,
        })
    }
}
