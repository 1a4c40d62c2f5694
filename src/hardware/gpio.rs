use {
    crate::hardware::DigitalInput,
    anyhow::{Context, Result},
    linux_embedded_hal::sysfs_gpio::{Direction, Pin},
};

/// GPIO line exposed through `/sys/class/gpio`.
pub struct SysfsDigitalPin {
    number: u64,
    pin: Pin,
}

impl SysfsDigitalPin {
    pub fn new(number: u64) -> Result<Self> {
        let pin = Pin::new(number);
        pin.export()
            .with_context(|| format!("Failed to export GPIO {}", number))?;

        Ok(Self { number, pin })
    }
}

impl DigitalInput for SysfsDigitalPin {
    fn set_input(&mut self) -> Result<()> {
        self.pin
            .set_direction(Direction::In)
            .with_context(|| format!("Failed to set GPIO {} as input", self.number))
    }

    fn read(&mut self) -> Result<u8> {
        let value = self
            .pin
            .get_value()
            .with_context(|| format!("Failed to read GPIO {}", self.number))?;

        Ok(if value == 0 { 0 } else { 1 })
    }
}
