use anyhow::Result;

mod adc;
mod gpio;
mod jhd1313m1;

pub use {adc::IioAnalogPin, gpio::SysfsDigitalPin, jhd1313m1::Jhd1313m1};

/// Highest value an analog input reports, i.e. a 10-bit ADC count.
pub const ANALOG_MAX: u16 = 1023;

pub trait DigitalInput {
    /// Configures the pin as an input.
    fn set_input(&mut self) -> Result<()>;

    /// Reads the current level, `0` or `1`.
    fn read(&mut self) -> Result<u8>;
}

pub trait AnalogInput {
    /// Reads a raw count in `0..=ANALOG_MAX`.
    fn read(&mut self) -> Result<u16>;
}

/// Two-line character display with an RGB backlight.
pub trait CharacterDisplay {
    fn clear(&mut self) -> Result<()>;

    fn set_color(&mut self, r: u8, g: u8, b: u8) -> Result<()>;

    /// Writes text starting at the current cursor position.
    fn write(&mut self, text: &str) -> Result<()>;

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<()>;
}
