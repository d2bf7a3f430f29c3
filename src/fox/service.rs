use crate::prelude::*;
use crate::fox::{time, Register};

use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveTime};
use std::sync::Arc;

pub const DEFAULT_MIN_SOC: u16 = 10;

/// Drives a Fox inverter through its Modbus holding registers.
#[derive(Clone)]
pub struct FoxModbusService {
    transport: Arc<dyn Transport>,
    off_peak_start: NaiveTime,
    off_peak_end: NaiveTime,
    user_min_soc: u16,
}

impl FoxModbusService {
    pub fn new(
        transport: Arc<dyn Transport>,
        off_peak_start: NaiveTime,
        off_peak_end: NaiveTime,
        user_min_soc: u16,
    ) -> Self {
        Self {
            transport,
            off_peak_start,
            off_peak_end,
            user_min_soc,
        }
    }

    pub fn with_default_min_soc(
        transport: Arc<dyn Transport>,
        off_peak_start: NaiveTime,
        off_peak_end: NaiveTime,
    ) -> Self {
        Self::new(transport, off_peak_start, off_peak_end, DEFAULT_MIN_SOC)
    }

    pub fn off_peak_start(&self) -> NaiveTime {
        self.off_peak_start
    }

    pub fn off_peak_end(&self) -> NaiveTime {
        self.off_peak_end
    }

    // stored for callers, set_min_soc always takes an explicit value
    pub fn user_min_soc(&self) -> u16 {
        self.user_min_soc
    }

    async fn start_force_charge(&self, start: NaiveTime, stop: NaiveTime) -> Result<()> {
        debug!("Requesting start force charge from Fox Modbus");
        let (start_encoded, stop_encoded) = time::encode_time(&start, &stop);

        self.transport
            .write_registers(
                Register::ForceChargeEnable.address(),
                &[1, start_encoded, stop_encoded, 0, 0, 0],
            )
            .await
    }
}

/// Amps to the 0.1A register unit. Rounds half away from zero; out of range
/// values saturate at the u16 bounds.
pub fn encode_charge_current(charge_current: f64) -> u16 {
    (charge_current * 10.0).round() as u16
}

fn whole_day() -> Result<(NaiveTime, NaiveTime)> {
    let start = NaiveTime::from_hms_opt(0, 1, 0).ok_or_else(|| anyhow!("invalid time 00:01"))?;
    let stop = NaiveTime::from_hms_opt(23, 59, 0).ok_or_else(|| anyhow!("invalid time 23:59"))?;
    Ok((start, stop))
}

#[async_trait]
impl FoxService for FoxModbusService {
    async fn start_force_charge_now(&self) -> Result<()> {
        let (start, stop) = whole_day()?;
        self.start_force_charge(start, stop).await
    }

    async fn start_force_charge_off_peak(&self) -> Result<()> {
        self.start_force_charge(self.off_peak_start, self.off_peak_end)
            .await
    }

    async fn stop_force_charge(&self) -> Result<()> {
        debug!("Requesting stop force charge from Fox Modbus");
        self.transport
            .write_registers(Register::ForceChargeEnable.address(), &[0; 6])
            .await
    }

    async fn set_min_soc(&self, soc: u16) -> Result<()> {
        debug!("Request set min SoC to Fox Modbus");
        self.transport
            .write_registers(Register::MinSoc.address(), &[soc])
            .await
    }

    async fn set_charge_current(&self, charge_current: f64) -> Result<()> {
        debug!(
            "Requesting set charge current of {}A to Fox Modbus",
            charge_current
        );
        self.transport
            .write_registers(
                Register::ChargeCurrent.address(),
                &[encode_charge_current(charge_current)],
            )
            .await
    }

    async fn device_info(&self) -> Result<bool> {
        let register = Register::Day;
        let values = self
            .transport
            .read_input_registers(register.address(), register.width())
            .await?;

        let day = values
            .first()
            .copied()
            .ok_or_else(|| crate::no_data!("no value read from register {}", register.address()))?;

        Ok(u32::from(day) == Local::now().day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charge_current_rounds_half_up() {
        assert_eq!(encode_charge_current(12.5), 125);
        assert_eq!(encode_charge_current(12.55), 126);
        assert_eq!(encode_charge_current(12.54), 125);
        assert_eq!(encode_charge_current(0.0), 0);
    }

    #[test]
    fn charge_current_saturates() {
        assert_eq!(encode_charge_current(-3.0), 0);
        assert_eq!(encode_charge_current(1.0e9), u16::MAX);
    }

    #[test]
    fn whole_day_spans_0001_to_2359() {
        let (start, stop) = whole_day().unwrap();
        assert_eq!(time::encode_time(&start, &stop), (1, 23 * 256 + 59));
    }
}
