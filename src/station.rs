use {
    crate::{
        display,
        hardware::CharacterDisplay,
        sensors::{AmbientSnapshot, Sensors},
    },
    anyhow::{anyhow, Result},
    std::sync::{Arc, Mutex},
};

/// Hardware handles shared by the button watcher and the HTTP endpoint.
pub struct Station {
    pub sensors: Sensors,
    pub display: Box<dyn CharacterDisplay + Send>,
}

pub type SharedStation = Arc<Mutex<Station>>;

impl Station {
    pub fn new(sensors: Sensors, display: Box<dyn CharacterDisplay + Send>) -> Self {
        Self { sensors, display }
    }

    pub fn shared(self) -> SharedStation {
        Arc::new(Mutex::new(self))
    }

    /// Samples every sensor and mirrors the result onto the display.
    pub fn refresh(&mut self) -> Result<AmbientSnapshot> {
        let snapshot = self.sensors.read_all()?;
        display::render(self.display.as_mut(), &snapshot)?;

        Ok(snapshot)
    }
}

pub fn refresh(station: &SharedStation) -> Result<AmbientSnapshot> {
    station
        .lock()
        .map_err(|_| anyhow!("Station lock poisoned"))?
        .refresh()
}
