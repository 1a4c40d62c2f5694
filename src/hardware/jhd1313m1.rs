use {
    crate::hardware::CharacterDisplay,
    anyhow::{anyhow, Result},
    embedded_hal::blocking::{delay::DelayMs, i2c::Write},
    std::fmt::Debug,
};

pub const LCD_ADDRESS: u8 = 0x3E;
pub const RGB_ADDRESS: u8 = 0x62;

const COLUMNS: u8 = 16;
const ROW_OFFSETS: [u8; 2] = [0x80, 0xC0];

// Control bytes preceding each transfer to the text controller
const CONTROL_COMMAND: u8 = 0x80;
const CONTROL_DATA: u8 = 0x40;

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_LEFT: u8 = 0x06;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_FUNCTION_2LINE: u8 = 0x28;

const REG_MODE1: u8 = 0x00;
const REG_MODE2: u8 = 0x01;
const REG_BLUE: u8 = 0x02;
const REG_GREEN: u8 = 0x03;
const REG_RED: u8 = 0x04;
const REG_LEDOUT: u8 = 0x08;
const LEDOUT_PWM_ALL: u8 = 0xAA;

/// Grove RGB LCD: HD44780-compatible text controller plus a PCA9633
/// backlight driver sharing one I2C bus.
pub struct Jhd1313m1<I2C, D> {
    i2c: I2C,
    delay: D,
}

impl<I2C, D, E> Jhd1313m1<I2C, D>
where
    I2C: Write<Error = E>,
    D: DelayMs<u16>,
    E: Debug,
{
    pub fn new(i2c: I2C, delay: D) -> Result<Self> {
        let mut lcd = Self { i2c, delay };
        lcd.init()?;

        Ok(lcd)
    }

    #[cfg(test)]
    fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn init(&mut self) -> Result<()> {
        self.delay.delay_ms(50);
        self.command(CMD_FUNCTION_2LINE)?;
        self.command(CMD_DISPLAY_ON)?;
        self.clear()?;
        self.command(CMD_ENTRY_LEFT)?;

        self.backlight(REG_MODE1, 0x00)?;
        self.backlight(REG_MODE2, 0x00)?;
        self.backlight(REG_LEDOUT, LEDOUT_PWM_ALL)?;

        self.set_color(255, 255, 255)
    }

    fn command(&mut self, cmd: u8) -> Result<()> {
        self.i2c
            .write(LCD_ADDRESS, &[CONTROL_COMMAND, cmd])
            .map_err(|e| anyhow!("Failed to send LCD command {:#04x}: {:?}", cmd, e))
    }

    fn backlight(&mut self, reg: u8, value: u8) -> Result<()> {
        self.i2c
            .write(RGB_ADDRESS, &[reg, value])
            .map_err(|e| anyhow!("Failed to write backlight register {:#04x}: {:?}", reg, e))
    }
}

impl<I2C, D, E> CharacterDisplay for Jhd1313m1<I2C, D>
where
    I2C: Write<Error = E>,
    D: DelayMs<u16>,
    E: Debug,
{
    fn clear(&mut self) -> Result<()> {
        self.command(CMD_CLEAR)?;
        self.delay.delay_ms(2);

        Ok(())
    }

    fn set_color(&mut self, r: u8, g: u8, b: u8) -> Result<()> {
        self.backlight(REG_RED, r)?;
        self.backlight(REG_GREEN, g)?;
        self.backlight(REG_BLUE, b)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        for byte in text.bytes() {
            self.i2c
                .write(LCD_ADDRESS, &[CONTROL_DATA, byte])
                .map_err(|e| anyhow!("Failed to write to LCD: {:?}", e))?;
        }

        Ok(())
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<()> {
        let base = ROW_OFFSETS
            .get(row as usize)
            .ok_or_else(|| anyhow!("LCD has no row {}", row))?;

        self.command(base + col % COLUMNS)
    }
}
