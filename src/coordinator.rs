use crate::prelude::*;

use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    DeviceInfo(bool),
}

#[derive(Clone)]
pub struct Coordinator {
    service: Arc<dyn FoxService>,
}

impl Coordinator {
    pub fn new(service: Arc<dyn FoxService>) -> Self {
        Self { service }
    }

    /// Parses a host callback and runs it.
    pub async fn dispatch<S: AsRef<str>>(&self, name: &str, args: &[S]) -> Result<Outcome> {
        let command = Command::from_callback(name, args)?;
        self.process_command(command).await
    }

    pub async fn process_command(&self, command: Command) -> Result<Outcome> {
        use Command::*;

        debug!("processing {:?}", command);

        match command {
            StartForceChargeNow => self.service.start_force_charge_now().await?,
            StartForceChargeOffPeak => self.service.start_force_charge_off_peak().await?,
            StopForceCharge => self.service.stop_force_charge().await?,
            SetMinSoc(soc) => self.service.set_min_soc(soc).await?,
            SetChargeCurrent(current) => self.service.set_charge_current(current).await?,
            DeviceInfo => return Ok(Outcome::DeviceInfo(self.service.device_info().await?)),
        }

        Ok(Outcome::Done)
    }
}
