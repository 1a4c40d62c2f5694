use {
    crate::{hardware::CharacterDisplay, sensors::AmbientSnapshot},
    anyhow::Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBand {
    Cold,
    Neutral,
    Hot,
}

impl ColorBand {
    pub fn from_celsius(temperature: f64) -> Self {
        if temperature < 15.0 {
            ColorBand::Cold
        } else if temperature < 30.0 {
            ColorBand::Neutral
        } else {
            ColorBand::Hot
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorBand::Cold => (0, 0, 255),
            ColorBand::Neutral => (40, 40, 40),
            ColorBand::Hot => (255, 0, 0),
        }
    }
}

/// Shows a snapshot on the display, tinting the backlight by temperature.
pub fn render(display: &mut dyn CharacterDisplay, snapshot: &AmbientSnapshot) -> Result<()> {
    display.clear()?;

    let (r, g, b) = ColorBand::from_celsius(snapshot.temperature).rgb();
    display.set_color(r, g, b)?;

    display.write(&format!("Temp:{}", snapshot.temperature_text()))?;
    display.set_cursor(1, 0)?;
    display.write(&format!("Air:{}", snapshot.air_quality))?;
    display.write(&format!(" Lux:{}", snapshot.light))
}

#[cfg(test)]
pub(crate) mod tests {
    use {
        super::*,
        anyhow::bail,
        std::sync::{Arc, Mutex},
    };

    #[derive(Debug, Default)]
    pub struct Screen {
        pub lines: [String; 2],
        pub color: (u8, u8, u8),
        pub clears: usize,
        row: usize,
    }

    /// In-memory display; clones share the same screen.
    #[derive(Clone, Default)]
    pub struct FakeDisplay {
        pub screen: Arc<Mutex<Screen>>,
        pub broken: bool,
    }

    impl FakeDisplay {
        pub fn lines(&self) -> [String; 2] {
            self.screen.lock().unwrap().lines.clone()
        }

        pub fn color(&self) -> (u8, u8, u8) {
            self.screen.lock().unwrap().color
        }

        pub fn clears(&self) -> usize {
            self.screen.lock().unwrap().clears
        }
    }

    impl CharacterDisplay for FakeDisplay {
        fn clear(&mut self) -> Result<()> {
            if self.broken {
                bail!("I2C bus error");
            }
            let mut screen = self.screen.lock().unwrap();
            screen.lines = Default::default();
            screen.row = 0;
            screen.clears += 1;
            Ok(())
        }

        fn set_color(&mut self, r: u8, g: u8, b: u8) -> Result<()> {
            self.screen.lock().unwrap().color = (r, g, b);
            Ok(())
        }

        fn write(&mut self, text: &str) -> Result<()> {
            let mut screen = self.screen.lock().unwrap();
            let row = screen.row;
            screen.lines[row].push_str(text);
            Ok(())
        }

        fn set_cursor(&mut self, row: u8, _col: u8) -> Result<()> {
            self.screen.lock().unwrap().row = row as usize;
            Ok(())
        }
    }

    fn snapshot(temperature: f64) -> AmbientSnapshot {
        AmbientSnapshot {
            temperature,
            light: 300,
            air_quality: 150,
        }
    }

    #[test]
    fn test_bands() {
        assert_eq!(ColorBand::from_celsius(-5.0), ColorBand::Cold);
        assert_eq!(ColorBand::from_celsius(14.99), ColorBand::Cold);
        assert_eq!(ColorBand::from_celsius(15.0), ColorBand::Neutral);
        assert_eq!(ColorBand::from_celsius(29.99), ColorBand::Neutral);
        assert_eq!(ColorBand::from_celsius(30.0), ColorBand::Hot);
        assert_eq!(ColorBand::from_celsius(45.0), ColorBand::Hot);
    }

    #[test]
    fn test_render_lines() {
        let mut display = FakeDisplay::default();
        render(&mut display, &snapshot(15.41)).unwrap();

        assert_eq!(display.lines(), ["Temp:15.41", "Air:150 Lux:300"]);
        assert_eq!(display.color(), (40, 40, 40));
        assert_eq!(display.clears(), 1);
    }

    #[test]
    fn test_render_colors() {
        let mut display = FakeDisplay::default();

        render(&mut display, &snapshot(10.0)).unwrap();
        assert_eq!(display.color(), (0, 0, 255));
        assert_eq!(display.lines()[0], "Temp:10.00");

        render(&mut display, &snapshot(30.0)).unwrap();
        assert_eq!(display.color(), (255, 0, 0));
        assert_eq!(display.lines()[0], "Temp:30.00");
    }

    #[test]
    fn test_render_failure() {
        let mut display = FakeDisplay {
            broken: true,
            ..FakeDisplay::default()
        };
        assert!(render(&mut display, &snapshot(20.0)).is_err());
    }
}
