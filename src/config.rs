use crate::prelude::*;

use chrono::NaiveTime;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub modbus: Modbus,

    #[serde(deserialize_with = "de_time")]
    pub off_peak_start: NaiveTime,
    #[serde(deserialize_with = "de_time")]
    pub off_peak_end: NaiveTime,

    #[serde(default = "Config::default_user_min_soc")]
    pub user_min_soc: u16,

    #[serde(default = "Config::default_loglevel")]
    pub loglevel: String,
}

// Modbus {{{
#[derive(Clone, Debug, Deserialize)]
pub struct Modbus {
    pub host: String,
    #[serde(default = "Config::default_modbus_port")]
    pub port: u16,
    #[serde(default = "Config::default_modbus_slave")]
    pub slave: u8,
}

impl Modbus {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn slave(&self) -> u8 {
        self.slave
    }
} // }}}

impl Config {
    pub fn new(file: String) -> Result<Self> {
        info!("Reading configuration from {}", file);
        let content = std::fs::read_to_string(&file)
            .map_err(|err| anyhow!("error reading {}: {}", file, err))?;

        let config = Self::from_yaml(&content)?;

        info!("Configuration loaded successfully:");
        info!("  Modbus: {}:{} slave {}", config.modbus.host, config.modbus.port, config.modbus.slave);
        info!(
            "  Off peak: {} - {}",
            config.off_peak_start.format("%H:%M"),
            config.off_peak_end.format("%H:%M")
        );
        info!("  User Min SoC: {}%", config.user_min_soc);
        info!("  Log Level: {}", config.loglevel);

        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn modbus(&self) -> &Modbus {
        &self.modbus
    }

    pub fn off_peak_start(&self) -> NaiveTime {
        self.off_peak_start
    }

    pub fn off_peak_end(&self) -> NaiveTime {
        self.off_peak_end
    }

    pub fn user_min_soc(&self) -> u16 {
        self.user_min_soc
    }

    pub fn loglevel(&self) -> &str {
        &self.loglevel
    }

    fn validate(&self) -> Result<()> {
        if self.modbus.port == 0 {
            bail!("modbus.port must be between 1 and 65535");
        }
        if self.modbus.host.is_empty() {
            bail!("modbus.host cannot be empty");
        }
        if self.loglevel.parse::<log::LevelFilter>().is_err() {
            bail!("invalid loglevel: {}", self.loglevel);
        }

        Ok(())
    }

    fn default_modbus_port() -> u16 {
        502
    }

    fn default_modbus_slave() -> u8 {
        247
    }

    fn default_user_min_soc() -> u16 {
        fox::service::DEFAULT_MIN_SOC
    }

    fn default_loglevel() -> String {
        "info".to_string()
    }
}

// "00:30" -> 00:30:00
fn de_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|err| serde::de::Error::custom(format!("badly formatted time {:?}, use HH:MM: {}", s, err)))
}
