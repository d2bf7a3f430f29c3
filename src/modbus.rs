use crate::prelude::*;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio_modbus::client::{self, Context};
use tokio_modbus::prelude::*;

/// Modbus TCP transport. The connection is opened once and shared; calls are
/// serialised on the single client context.
pub struct ModbusTcp {
    context: Mutex<Context>,
}

impl ModbusTcp {
    pub async fn connect(modbus: &config::Modbus) -> Result<Self> {
        let address = format!("{}:{}", modbus.host(), modbus.port());
        let socket_addr = tokio::net::lookup_host(address.as_str())
            .await
            .map_err(|err| anyhow!("error resolving {}: {}", address, err))?
            .next()
            .ok_or_else(|| anyhow!("no address found for {}", address))?;

        info!("Connecting to Fox Modbus at {} (slave {})", socket_addr, modbus.slave());
        let context = client::tcp::connect_slave(socket_addr, Slave(modbus.slave()))
            .await
            .map_err(|err| anyhow!("error connecting to {}: {}", socket_addr, err))?;

        Ok(Self {
            context: Mutex::new(context),
        })
    }
}

#[async_trait]
impl Transport for ModbusTcp {
    async fn write_registers(&self, address: u16, values: &[u16]) -> Result<()> {
        trace!("write_registers {} {:?}", address, values);
        let mut context = self.context.lock().await;

        context
            .write_multiple_registers(address, values)
            .await
            .map_err(|err| anyhow!("write_registers {} failed: {}", address, err))?
            .map_err(|code| anyhow!("write_registers {} rejected: {:?}", address, code))
    }

    async fn read_input_registers(&self, address: u16, count: u16) -> Result<Vec<u16>> {
        trace!("read_input_registers {} count {}", address, count);
        let mut context = self.context.lock().await;

        context
            .read_input_registers(address, count)
            .await
            .map_err(|err| anyhow!("read_input_registers {} failed: {}", address, err))?
            .map_err(|code| anyhow!("read_input_registers {} rejected: {:?}", address, code))
    }
}
