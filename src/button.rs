use {
    crate::{
        hardware::DigitalInput,
        station::{self, SharedStation},
    },
    anyhow::Result,
    log::{info, warn},
    std::time::Duration,
    tokio::time::{interval, MissedTickBehavior},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Pressed,
    Released,
}

/// Tracks the last polled level of a digital input.
#[derive(Debug, Default)]
pub struct EdgeDetector {
    last: Option<u8>,
}

impl EdgeDetector {
    pub fn update(&mut self, value: u8) -> Option<Edge> {
        let edge = match (self.last, value) {
            (Some(0), 1) => Some(Edge::Pressed),
            (Some(1), 0) => Some(Edge::Released),
            _ => None,
        };
        self.last = Some(value);

        edge
    }
}

pub struct ButtonWatcher<B> {
    button: B,
    station: SharedStation,
    detector: EdgeDetector,
}

impl<B: DigitalInput> ButtonWatcher<B> {
    pub fn new(mut button: B, station: SharedStation) -> Result<Self> {
        button.set_input()?;

        Ok(Self {
            button,
            station,
            detector: EdgeDetector::default(),
        })
    }

    /// Polls the button once, refreshing the station on a press.
    pub fn tick(&mut self) -> Result<Option<Edge>> {
        let value = self.button.read()?;
        let edge = self.detector.update(value);

        match edge {
            Some(Edge::Pressed) => {
                info!("Button pressed");
                station::refresh(&self.station)?;
            }
            Some(Edge::Released) => info!("Button released"),
            None => {}
        }

        Ok(edge)
    }

    pub async fn run(mut self, period: Duration) {
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;

            if let Err(e) = self.tick() {
                warn!("Button watch failed: {:#}", e);
            }
        }
    }
}
