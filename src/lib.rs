use {
    crate::{
        button::ButtonWatcher,
        config::{Config, POLL_INTERVAL, PORT},
        hardware::{IioAnalogPin, Jhd1313m1, SysfsDigitalPin},
        sensors::Sensors,
        server::AppState,
        station::Station,
    },
    anyhow::{Context, Result},
    linux_embedded_hal::{Delay, I2cdev},
    log::{info, warn},
    std::{
        net::{Ipv4Addr, SocketAddr, TcpListener},
        sync::Arc,
    },
    tokio::task,
};

pub mod button;
pub mod config;
pub mod display;
pub mod hardware;
pub mod sensors;
pub mod server;
pub mod station;
pub mod template;

pub async fn monitor() -> Result<()> {
    pretty_env_logger::init();
    color_backtrace::install();

    let config = Config::from_env()?;
    info!("Starting with {:?}", config);

    if !config.template_path.exists() {
        warn!(
            "Template {} not found, requests will fail until it exists",
            config.template_path.display()
        );
    }

    let station = init_station(&config)?.shared();
    let button = SysfsDigitalPin::new(config.button_gpio)?;
    let watcher = ButtonWatcher::new(button, station.clone())?;

    let state = AppState {
        station,
        template_path: Arc::new(config.template_path.clone()),
    };
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT));
    let listener = TcpListener::bind(addr).with_context(|| format!("Failed to bind {}", addr))?;

    task::spawn(watcher.run(POLL_INTERVAL));
    info!("Started button watch every {:?}", POLL_INTERVAL);

    server::serve(listener, state).await
}

fn init_station(config: &Config) -> Result<Station> {
    let analog = |channel| IioAnalogPin::new(config.iio_device, channel, config.adc_bits);
    let sensors = Sensors::new(
        Box::new(analog(config.temperature_channel)?),
        Box::new(analog(config.light_channel)?),
        Box::new(analog(config.air_quality_channel)?),
    );

    let dev = I2cdev::new(&config.i2c_dev)
        .with_context(|| format!("Failed to open {}", config.i2c_dev))?;
    let lcd = Jhd1313m1::new(dev, Delay).context("Failed to initialize JHD1313M1")?;

    Ok(Station::new(sensors, Box::new(lcd)))
}
