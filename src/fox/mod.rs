pub mod register;
pub mod service;
pub mod time;

pub use register::Register;
pub use service::FoxModbusService;

use crate::prelude::*;

use async_trait::async_trait;

/// The operations the host platform can ask of an inverter.
#[async_trait]
pub trait FoxService: Send + Sync {
    async fn start_force_charge_now(&self) -> Result<()>;
    async fn start_force_charge_off_peak(&self) -> Result<()>;
    async fn stop_force_charge(&self) -> Result<()>;
    async fn set_min_soc(&self, soc: u16) -> Result<()>;
    async fn set_charge_current(&self, charge_current: f64) -> Result<()>;

    /// True when the inverter reports today's day of month.
    async fn device_info(&self) -> Result<bool>;
}
